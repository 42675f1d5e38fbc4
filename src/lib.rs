pub mod classification; // Upload form validation and document creation
pub mod commands;
pub mod config;
pub mod models;
pub mod review; // Review dialog and signature hand-off
pub mod session;
pub mod store;
pub mod transition; // final / working / review state machine
pub mod upload;

pub use session::WorkflowSession;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
