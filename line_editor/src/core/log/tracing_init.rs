// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, TracingConfig, WriterConfig, try_create_file_appender};
use crate::ok;
use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers. This does not initialize the tracing system. Use
/// [`TracingConfig::install_global`] or [`TracingConfig::install_thread_local`] for
/// that.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if more layers
    // without their own level filter are added later.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = create_display_layer(
        tracing_config.get_level_filter(),
        &tracing_config.writer_config,
    ) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        &tracing_config.writer_config,
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
#[must_use]
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(display_pref)
        | WriterConfig::DisplayAndFile(display_pref, _) => *display_pref,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().compact();

    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };

    Some(layer)
}

/// Same as [`create_display_layer`] but for the file writer. Escape codes are turned
/// off since the file is read with a pager or an editor.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let path = match writer_config {
        WriterConfig::File(path) | WriterConfig::DisplayAndFile(_, path) => path,
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let file = try_create_file_appender(path.as_str())?;
    let layer: Box<DynLayer<S>> = Box::new(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    );

    Ok(Some(layer))
}

impl TracingConfig {
    /// Install a global subscriber. This can only be done once per process.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created, or a global subscriber is
    /// already installed.
    pub fn install_global(&self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Install a subscriber for the current thread only. It is removed when the returned
    /// guard is dropped. This is great for tests.
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created.
    pub fn install_thread_local(&self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// Global subscriber.
/// - Docs for [Global
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_global_default.html)
///
/// Logging is **DISABLED** by **default**. Passing a configuration whose level filter is
/// [`LevelFilter::OFF`] is a no-op.
///
/// # Errors
///
/// Returns an error if the subscriber can't be installed.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, which is thread local, and you can assign different ones
/// to different threads.
/// - Docs for [Thread local tracing
///   subscriber](https://docs.rs/tracing/latest/tracing/subscriber/fn.set_default.html)
///
/// Returns `None` when the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
