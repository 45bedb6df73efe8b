use crate::layers::BoxedLayer;
use clap::ValueEnum;
use std::{fmt, fmt::Display};
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Represents the logging format.
///
/// This enum defines the supported formats for logging output.
/// It is used to configure the format layer of a tracing subscriber.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub enum LogFormat {
    /// Represents JSON formatting for logs.
    /// This format outputs log records as JSON objects,
    /// making it suitable for structured logging.
    Json,

    /// Represents logfmt (key=value) formatting for logs.
    /// This format is concise and human-readable,
    /// typically used in command-line applications.
    #[value(name = "logfmt")]
    LogFmt,

    /// Represents terminal-friendly formatting for logs.
    Terminal,
}

impl LogFormat {
    /// Applies the specified logging format to create a new layer.
    ///
    /// `color` is the requested color mode (`always`, `auto` or `never`). `None` disables ANSI
    /// escape codes entirely. `RUST_LOG_STYLE` and `RUST_LOG_TARGET` in the environment take
    /// precedence over the requested color and target display.
    pub fn apply(&self, filter: EnvFilter, color: Option<String>) -> BoxedLayer<Registry> {
        let ansi = if let Some(color) = color {
            std::env::var("RUST_LOG_STYLE").map(|val| val != "never").unwrap_or(color != "never")
        } else {
            false
        };
        let target = std::env::var("RUST_LOG_TARGET").map(|val| val != "0").unwrap_or(true);

        match self {
            LogFormat::Json => {
                let layer =
                    tracing_subscriber::fmt::layer().json().with_ansi(ansi).with_target(target);
                layer.with_filter(filter).boxed()
            }
            LogFormat::LogFmt => tracing_logfmt::layer().with_filter(filter).boxed(),
            LogFormat::Terminal => {
                let layer = tracing_subscriber::fmt::layer().with_ansi(ansi).with_target(target);
                layer.with_filter(filter).boxed()
            }
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "logfmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_value_names() {
        for format in [LogFormat::Json, LogFormat::LogFmt, LogFormat::Terminal] {
            let parsed =
                LogFormat::from_str(&format.to_string(), false).expect("failed to parse format");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_unknown_format() {
        assert!(LogFormat::from_str("xml", false).is_err());
    }
}
