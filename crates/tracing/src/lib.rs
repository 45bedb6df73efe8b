//! The `minievm-tracing` crate provides configurable tracing for the minievm toolkit.
//!
//! It sets up a [`tracing_subscriber::Registry`] with a single stdout layer whose format and
//! level filter are chosen at startup, typically from command line flags.
//!
//! ```no_run
//! use minievm_tracing::{LayerInfo, LogFormat, MinievmTracer, Tracer};
//!
//! MinievmTracer::new()
//!     .with_stdout(LayerInfo::new(LogFormat::Json, "info".to_string(), String::new(), None))
//!     .init()
//!     .expect("failed to initialize tracing");
//! ```

// Re-export tracing crates
pub use tracing;
pub use tracing_subscriber;

// Re-export LogFormat
pub use formatter::LogFormat;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::layers::Layers;

mod formatter;
mod layers;

/// Tracer for application logging.
///
/// Manages the configuration and initialization of logging layers,
/// including standard output (`stdout`).
#[derive(Debug, Clone, Default)]
pub struct MinievmTracer {
    stdout: LayerInfo,
}

impl MinievmTracer {
    /// Creates a new Tracer instance with default settings.
    ///
    /// Initializes with default stdout layer configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }
}

/// Configuration for a logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Constructs a new `LayerInfo`.
    ///
    /// # Arguments
    /// * `format` - Specifies the format for log messages.
    /// * `default_directive` - Directive for filtering log messages.
    /// * `filters` - Additional filtering parameters as a string.
    /// * `color` - Optional color configuration for the log messages.
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    /// Provides default values for `LayerInfo`.
    ///
    /// By default, it uses terminal format, INFO level filter,
    /// no additional filters, and no color configuration.
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: None,
        }
    }
}

/// Trait defining a general interface for logging configuration.
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// Fails if the directives cannot be parsed or a global subscriber is already set.
    fn init(self) -> eyre::Result<()>;
}

impl Tracer for MinievmTracer {
    fn init(self) -> eyre::Result<()> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        tracing_subscriber::registry().with(layers.into_inner()).try_init()?;
        Ok(())
    }
}

/// Initializes a tracing subscriber for tests.
///
/// The filter is configurable via `RUST_LOG`.
///
/// # Note
///
/// The subscriber will silently fail if it could not be installed.
pub fn init_test_tracing() {
    let _ = MinievmTracer::new()
        .with_stdout(LayerInfo::new(
            LogFormat::Terminal,
            "debug".to_string(),
            String::new(),
            None,
        ))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_default_directive() {
        let result = MinievmTracer::new()
            .with_stdout(LayerInfo::new(
                LogFormat::Terminal,
                "minievm=loud".to_string(),
                String::new(),
                None,
            ))
            .init();
        assert!(result.is_err());
    }
}
