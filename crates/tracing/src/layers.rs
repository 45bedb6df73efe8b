use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// A boxed tracing [Layer].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// Manages the collection of layers for a tracing subscriber.
///
/// `Layers` acts as a container for different logging layers such as stdout or file output.
/// It simplifies the process of adding and configuring multiple layers in a tracing subscriber.
#[derive(Default)]
pub(crate) struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl std::fmt::Debug for Layers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layers").field("len", &self.inner.len()).finish()
    }
}

impl Layers {
    /// Creates a new `Layers` instance.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Consumes the `Layers` instance, returning the inner vector of layers.
    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    /// Adds a stdout layer with specified formatting and filtering.
    ///
    /// # Arguments
    /// * `format` - The log message format.
    /// * `default_directive` - Directive used when `RUST_LOG` is not set.
    /// * `filters` - Additional comma-separated filter directives.
    /// * `color` - Optional color configuration for the log messages.
    pub(crate) fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: Directive,
        filters: &str,
        color: Option<String>,
    ) -> eyre::Result<()> {
        let filter = build_env_filter(Some(default_directive), filters)?;
        let layer = format.apply(filter, color);
        self.inner.push(layer);
        Ok(())
    }
}

/// Builds an environment filter for logging.
///
/// The events are filtered by `default_directive`, unless overridden by `RUST_LOG`, and then
/// narrowed by the comma-separated `directives`.
pub(crate) fn build_env_filter(
    default_directive: Option<Directive>,
    directives: &str,
) -> eyre::Result<EnvFilter> {
    let env_filter = if let Some(default_directive) = default_directive {
        EnvFilter::builder().with_default_directive(default_directive).from_env_lossy()
    } else {
        EnvFilter::builder().from_env_lossy()
    };

    directives
        .split(',')
        .filter(|d| !d.is_empty())
        .try_fold(env_filter, |env_filter, directive| {
            Ok(env_filter.add_directive(directive.parse()?))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_build_env_filter_with_directives() {
        let filter = build_env_filter(Some(LevelFilter::WARN.into()), "minievm_vm=trace,info")
            .expect("failed to build filter");
        let rendered = filter.to_string();
        assert!(rendered.contains("minievm_vm=trace"));
        assert!(rendered.contains("info"));
    }

    #[test]
    fn test_build_env_filter_rejects_garbage() {
        assert!(build_env_filter(None, "minievm_vm=loud").is_err());
    }

    #[test]
    fn test_stdout_layer_is_added() {
        let mut layers = Layers::new();
        layers
            .stdout(LogFormat::LogFmt, LevelFilter::INFO.into(), "", None)
            .expect("failed to add layer");
        assert_eq!(layers.into_inner().len(), 1);
    }
}
