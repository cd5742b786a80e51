use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::editor::debounce::Debounced;
use crate::editor::local::LocalStore;
use crate::models::resume::ResumeRecord;

/// Writes every settled form state to local storage until the state channel
/// closes. Only changes are written: the value the mirror starts from (the
/// freshly loaded record) is never written back. Failures are logged and the
/// mirror keeps running.
pub fn spawn_mirror(
    mut settled: Debounced<ResumeRecord>,
    store: Arc<dyn LocalStore>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while settled.changed().await.is_ok() {
            let snapshot = settled.borrow().clone();
            match serde_json::to_string(&snapshot) {
                Ok(json) => match store.write(&json).await {
                    Ok(()) => debug!(bytes = json.len(), "Local copy updated"),
                    Err(e) => warn!("Failed to update local copy: {e:#}"),
                },
                Err(e) => warn!("Failed to serialize form state: {e}"),
            }
        }
    })
}
