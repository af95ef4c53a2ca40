use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Installs a compact `fmt` subscriber at INFO as the global default.
///
/// Call once from a binary. Library code only emits events.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
