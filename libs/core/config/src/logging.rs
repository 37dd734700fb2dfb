use crate::{Environment, env_or_default};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Logging configuration.
///
/// All knobs are explicit fields so formatting and threshold behaviour
/// can be exercised in tests without mutating process-wide environment
/// state. `from_env` is the only place the environment is consulted.
#[derive(Clone, Debug)]
pub struct LogConfig {
    pub environment: Environment,
    pub level: String,
}

impl LogConfig {
    pub fn new(environment: Environment, level: impl Into<String>) -> Self {
        Self {
            environment,
            level: level.into(),
        }
    }

    /// Reads `LOG_LEVEL` (default "info") and the `APP_ENV` selector.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            level: env_or_default("LOG_LEVEL", "info"),
        }
    }
}

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Install the process-wide fail-fast panic hook.
///
/// A panic is an unobserved failure: request-path errors travel as
/// `Result` values and terminate in the error classifier, so anything
/// that panics escaped that path. The hook logs the panic at error
/// severity and terminates with exit code 1 rather than continuing in
/// a possibly-corrupted state.
///
/// Intended for the binary entry point only; never install this in
/// tests (assertion failures are panics too).
pub fn install_failfast_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .map(str::to_owned)
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic payload".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!(%location, "Unhandled panic, terminating: {}", message);
        std::process::exit(1);
    }));
}

/// Initialize tracing from an explicit `LogConfig`.
///
/// - **Production**: single-line JSON records with flattened event
///   fields, suitable for log aggregation tools.
/// - **Development**: human-readable colorized lines with timestamp,
///   level, message, and structured fields rendered inline.
///
/// Records carry their module target in both formats so every line is
/// attributable to the component that emitted it. Output goes to
/// stdout only.
///
/// Safe to call multiple times: if a subscriber is already installed
/// (common in tests), the call is a no-op.
pub fn init_tracing(config: &LogConfig) {
    let filter =
        EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = if config.environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(environment = ?config.environment, level = %config.level, "Tracing initialized");
        }
        Err(_) => {
            // Already initialized, which is fine (common in tests)
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
