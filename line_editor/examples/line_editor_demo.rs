// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Interactive demo. Run it with:
//!
//! ```text
//! cargo run --example line_editor_demo -- --log-file /tmp/line_editor_log.txt
//! cargo run --example line_editor_demo -- --mask '*'
//! cargo run --example line_editor_demo -- --hidden
//! ```
//!
//! Type a line and press enter. End a line with `" \"` to continue it on the next
//! enter. `Ctrl+C` cancels the current line, `Ctrl+D` on an empty line (or typing
//! `exit`) quits.

use clap::Parser;
use crossterm::{event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
                terminal};
use line_editor::{EditMode, IoSink, LineBuffer, LogicalLine, Masking, OutputSink, Prompt,
                  TracingConfig, ok, try_initialize_logging_global};
use miette::IntoDiagnostic;
use std::io::{Stdout, stdout};

#[derive(Debug, Parser)]
#[command(author, version, about = "Line editor demo", long_about = None)]
struct CliArgs {
    /// Display this character in place of everything typed.
    #[arg(long, short = 'm')]
    mask: Option<char>,

    /// Display nothing at all while typing.
    #[arg(long, conflicts_with = "mask")]
    hidden: bool,

    /// Keep the cursor on the last character, like vi normal mode.
    #[arg(long)]
    vi: bool,

    /// Prompt text. It can't be empty, redraws rely on it to find the first column.
    #[arg(long, short = 'p', default_value = "> ", value_parser = parse_prompt)]
    prompt: String,

    /// Write debug logs to this file. Logging is off without it.
    #[arg(long, short = 'l')]
    log_file: Option<String>,
}

enum KeyOutcome {
    Continue,
    Exit,
}

fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(log_file) = &cli_args.log_file {
        try_initialize_logging_global(TracingConfig::new_file(Some(log_file.clone())))?;
    }

    let masking = match (cli_args.hidden, cli_args.mask) {
        (true, _) => Masking::Hidden,
        (false, Some(mask)) => Masking::from_mask_char(mask),
        (false, None) => Masking::None,
    };
    let prompt = Prompt::with_ansi(
        &cli_args.prompt,
        &format!("\x1b[1;32m{}\x1b[0m", cli_args.prompt),
    )
    .with_masking(masking);
    let edit_mode = if cli_args.vi {
        EditMode::Vi
    } else {
        EditMode::Emacs
    };

    let mut buffer =
        LineBuffer::new(prompt).with_log_span(tracing::info_span!("line_editor_demo"));
    let mut sink = IoSink::new(stdout());

    terminal::enable_raw_mode().into_diagnostic()?;
    let result = run_event_loop(&mut buffer, &mut sink, edit_mode);
    terminal::disable_raw_mode().into_diagnostic()?;
    result
}

fn run_event_loop(
    buffer: &mut LineBuffer,
    sink: &mut IoSink<Stdout>,
    edit_mode: EditMode,
) -> miette::Result<()> {
    redraw(buffer, sink, term_width()?);
    sink.flush().into_diagnostic()?;

    loop {
        let outcome = match event::read().into_diagnostic()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                handle_key(buffer, sink, key, term_width()?, edit_mode)
            }
            Event::Resize(width, _) => {
                edit_and_redraw(buffer, sink, width, |_| {});
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        };

        sink.flush().into_diagnostic()?;
        if let KeyOutcome::Exit = outcome {
            sink.write_str("\r\n");
            sink.flush().into_diagnostic()?;
            break;
        }
    }

    ok!()
}

fn handle_key(
    buffer: &mut LineBuffer,
    sink: &mut IoSink<Stdout>,
    key: KeyEvent,
    width: u16,
    edit_mode: EditMode,
) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            let end = buffer.size();
            move_to(buffer, sink, end, width, EditMode::Emacs);
            buffer.reset();
            sink.write_str("^C\r\n");
            redraw(buffer, sink, width);
        }
        KeyCode::Char('d') if ctrl && buffer.is_empty() => return KeyOutcome::Exit,
        KeyCode::Char('a') if ctrl => move_to(buffer, sink, 0, width, edit_mode),
        KeyCode::Char('e') if ctrl => {
            let end = buffer.size();
            move_to(buffer, sink, end, width, edit_mode);
        }
        KeyCode::Char('c') if alt => edit_and_redraw(buffer, sink, width, LineBuffer::change_case),
        KeyCode::Char('u') if alt => edit_and_redraw(buffer, sink, width, LineBuffer::up_case),
        KeyCode::Char('l') if alt => edit_and_redraw(buffer, sink, width, LineBuffer::low_case),
        KeyCode::Char(ch) if !ctrl && !alt => {
            edit_and_redraw(buffer, sink, width, |buffer| buffer.write_char(ch));
        }
        KeyCode::Backspace => edit_and_redraw(buffer, sink, width, |buffer| {
            buffer.delete(-1);
        }),
        KeyCode::Delete => edit_and_redraw(buffer, sink, width, |buffer| {
            buffer.delete(1);
        }),
        KeyCode::Left => buffer.move_cursor(-1, width, edit_mode).write_to(sink),
        KeyCode::Right => buffer.move_cursor(1, width, edit_mode).write_to(sink),
        KeyCode::Home => move_to(buffer, sink, 0, width, edit_mode),
        KeyCode::End => {
            let end = buffer.size();
            move_to(buffer, sink, end, width, edit_mode);
        }
        KeyCode::Enter => {
            let end = buffer.size();
            move_to(buffer, sink, end, width, EditMode::Emacs);
            match buffer.commit_or_continue() {
                // The pending segment keeps the caret where it was.
                LogicalLine::Continued => edit_and_redraw(buffer, sink, width, |_| {}),
                LogicalLine::Complete(line) => {
                    tracing::info!(%line, "line complete");
                    if line.trim() == "exit" {
                        return KeyOutcome::Exit;
                    }
                    sink.write_str(&format!("\r\nread: {line:?}\r\n"));
                    redraw(buffer, sink, width);
                }
            }
        }
        _ => {}
    }

    KeyOutcome::Continue
}

/// Render, then put the caret back on the cursor for edits in the middle of the line.
/// The caret must already be on the first row of the line.
fn redraw(buffer: &mut LineBuffer, sink: &mut dyn OutputSink, width: u16) {
    buffer.render(sink, width);
    buffer.caret_return_plan(width).write_to(sink);
}

fn edit_and_redraw(
    buffer: &mut LineBuffer,
    sink: &mut dyn OutputSink,
    width: u16,
    edit: impl FnOnce(&mut LineBuffer),
) {
    buffer.move_caret_to_first_row(sink, width);
    edit(buffer);
    redraw(buffer, sink, width);
}

fn move_to(
    buffer: &mut LineBuffer,
    sink: &mut dyn OutputSink,
    target: usize,
    width: u16,
    edit_mode: EditMode,
) {
    let displacement = isize::try_from(target).unwrap_or(isize::MAX)
        - isize::try_from(buffer.cursor()).unwrap_or(isize::MAX);
    buffer.move_cursor(displacement, width, edit_mode).write_to(sink);
}

fn parse_prompt(prompt: &str) -> Result<String, String> {
    if prompt.is_empty() {
        return Err("the prompt can't be empty".to_string());
    }
    Ok(prompt.to_string())
}

fn term_width() -> miette::Result<u16> {
    let (columns, _rows) = terminal::size().into_diagnostic()?;
    ok!(columns)
}
