use std::io::IsTerminal;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Route diagnostics to stderr so stdout carries only the rendered output.
///
/// `RUST_LOG` overrides the default of `info` (`debug` with `--verbose`).
/// Colour codes are only emitted when stderr is a terminal.
pub fn setup_logging(verbose: bool) {
    let ansi = std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(console_layer(std::io::stderr, ansi).with_filter(env_filter(verbose)))
        .init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vlr_dashboard={level}")))
}

fn console_layer<S, W>(writer: W, ansi: bool) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::Layer::new()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
}
