use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize tracing. RUST_LOG takes precedence over `log_level`.
/// Logs go to stderr so command replies on stdout stay clean.
pub fn init_telemetry(log_level: LevelFilter, json: bool) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    tracing::debug!("Pocket Katas telemetry initialized");
    Ok(())
}

/// Generate an ID linking every event of one CLI session
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Create a span covering one interactive exercise session
pub fn create_session_span(exercise: &str, session_id: &str) -> tracing::Span {
    tracing::info_span!("session", exercise = exercise, session.id = session_id)
}
