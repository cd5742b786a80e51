//! Trailing-edge debounce over a `watch` channel.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Output side of a debounce filter. Dropping it stops the filter.
pub struct Debounced<T> {
    rx: watch::Receiver<T>,
    task: JoinHandle<()>,
}

impl<T> Debounced<T> {
    /// Latest settled value.
    pub fn borrow(&self) -> watch::Ref<'_, T> {
        self.rx.borrow()
    }

    /// Another receiver of the settled values.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.rx.clone()
    }

    /// Waits for the next settled value. Errors once the input has closed and
    /// every pending value was delivered.
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Publishes the input's value once it has stayed unchanged for `delay`.
/// Each new input restarts the window, so intermediate values of a burst are
/// never published. The output starts at the input's current value (marked
/// as seen); a value pending when the input closes is flushed.
pub fn debounce<T>(mut input: watch::Receiver<T>, delay: Duration) -> Debounced<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (tx, rx) = watch::channel(input.borrow_and_update().clone());

    let task = tokio::spawn(async move {
        while input.changed().await.is_ok() {
            let mut closed = false;
            loop {
                tokio::select! {
                    changed = input.changed() => {
                        if changed.is_err() {
                            closed = true;
                            break;
                        }
                    }
                    _ = tokio::time::sleep(delay) => break,
                }
            }

            let settled = input.borrow_and_update().clone();
            if tx.send(settled).is_err() || closed {
                return;
            }
        }
    });

    Debounced { rx, task }
}
