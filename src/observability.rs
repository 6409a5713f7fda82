use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `log_level`. Logs are JSON when
/// `ENVIRONMENT=production`, a readable console format otherwise.
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    log_level: &str,
) -> Result<()> {
    let env_filter = env_filter(log_level);

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(console_layer().with_filter(env_filter))
            .try_init()?;
    }

    tracing::info!(
        service.name = service_name,
        service.version = service_version,
        "Observability initialized"
    );

    Ok(())
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

fn console_layer<S>() -> fmt::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_level_fallback() {
        let filter = EnvFilter::new("warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_console_subscriber_scoped() {
        let subscriber = tracing_subscriber::registry()
            .with(console_layer().with_test_writer().with_filter(EnvFilter::new("debug")));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(service.name = "test-service", "scoped subscriber");
        });
    }

    #[test]
    fn test_json_subscriber_scoped() {
        let subscriber = tracing_subscriber::registry()
            .with(fmt::layer().json().with_test_writer().with_filter(EnvFilter::new("info")));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(service.version = "0.1.0", "scoped subscriber");
        });
    }
}
