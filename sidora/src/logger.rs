use std::{error::Error, fs::File, path::Path, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
    util::TryInitError,
};

pub const LOG_FILE_NAME: &str = "sidora.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to install the global subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Targets of the windowing and rendering stack, too chatty to be useful.
const SILENCED_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "mio",
    "cosmic_text",
    "polling",
    "calloop",
    "async_io",
    "sctk",
    "tokio",
];

fn is_silenced(target: &str) -> bool {
    SILENCED_TARGETS.iter().any(|t| target.starts_with(t))
}

pub fn setup_logger(log_level: LevelFilter, log_path: &Path) -> Result<(), LoggerError> {
    let file = File::create(log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Applies to *both* layers.
                .with_filter(filter::filter_fn(|metadata| {
                    !is_silenced(metadata.target())
                })),
        )
        .try_init()?;

    Ok(())
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silenced_targets() {
        assert!(is_silenced("wgpu_core::device"));
        assert!(is_silenced("iced_winit"));
        assert!(!is_silenced("sidora::state::login"));
    }
}
