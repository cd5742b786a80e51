//! One user's editing session: form state, debounced preview, local mirror
//! and the remote actions the toolbar triggers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::backup::{self, BackupError, BackupFile};
use crate::editor::debounce::{debounce, Debounced};
use crate::editor::form::{reduce, EntryList, FormAction, ScalarField};
use crate::editor::ids::EntryIdGenerator;
use crate::editor::loader::{load_first, LoadOrigin, LocalSource, RemoteSource};
use crate::editor::local::LocalStore;
use crate::editor::mirror::spawn_mirror;
use crate::editor::notice::Notice;
use crate::editor::remote::{Rejected, RemoteResumes};
use crate::models::resume::ResumeRecord;
use crate::render::{render_resume, Document};
use crate::share::{share_link, ShareError};

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Quiet period before the preview re-renders.
    pub preview_delay: Duration,
    /// Quiet period before the local copy is rewritten.
    pub mirror_delay: Duration,
    /// Origin of public share links.
    pub public_base_url: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            preview_delay: Duration::from_millis(1000),
            mirror_delay: Duration::from_millis(500),
            public_base_url: "http://localhost:8080".to_string(),
        }
    }
}

pub struct EditorSession {
    state: watch::Sender<ResumeRecord>,
    preview: Debounced<ResumeRecord>,
    mirror: JoinHandle<()>,
    remote: Arc<dyn RemoteResumes>,
    local: Arc<dyn LocalStore>,
    ids: EntryIdGenerator,
    saving: AtomicBool,
    uploading: AtomicBool,
    origin: LoadOrigin,
    config: SessionConfig,
}

/// Marks an operation as in flight until dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl EditorSession {
    /// Loads the record (remote, then local, then blank) and only then starts
    /// the preview and the local mirror, so loading never writes locally.
    pub async fn open(
        remote: Arc<dyn RemoteResumes>,
        local: Arc<dyn LocalStore>,
        config: SessionConfig,
    ) -> Self {
        let (record, origin) = load_first(&[
            &RemoteSource(remote.clone()),
            &LocalSource(local.clone()),
        ])
        .await;

        let (state, rx) = watch::channel(record);
        let preview = debounce(rx.clone(), config.preview_delay);
        let mirror = spawn_mirror(debounce(rx, config.mirror_delay), local.clone());

        EditorSession {
            state,
            preview,
            mirror,
            remote,
            local,
            ids: EntryIdGenerator::new(),
            saving: AtomicBool::new(false),
            uploading: AtomicBool::new(false),
            origin,
            config,
        }
    }

    pub fn origin(&self) -> LoadOrigin {
        self.origin
    }

    /// Current form state (not debounced).
    pub fn record(&self) -> ResumeRecord {
        self.state.borrow().clone()
    }

    /// Applies an edit. Returns whether the record changed; unchanged records
    /// are not published to the preview or the mirror.
    pub fn dispatch(&self, action: FormAction) -> bool {
        self.state.send_if_modified(|current| {
            let next = reduce(current, action);
            if next == *current {
                return false;
            }
            *current = next;
            true
        })
    }

    pub fn set_field(&self, field: ScalarField, value: impl Into<String>) -> bool {
        self.dispatch(FormAction::SetField {
            field,
            value: value.into(),
        })
    }

    /// Appends a blank entry and returns its id.
    pub fn add_entry(&self, list: EntryList) -> String {
        let id = {
            let current = self.state.borrow();
            match list {
                EntryList::Experience => self
                    .ids
                    .fresh(current.experience_entries.iter().map(|e| e.id.as_str())),
                EntryList::Education => self
                    .ids
                    .fresh(current.education_entries.iter().map(|e| e.id.as_str())),
            }
        };
        self.dispatch(FormAction::AddEntry {
            list,
            id: id.clone(),
        });
        id
    }

    /// Document for the last settled form state.
    pub fn preview(&self) -> Document {
        render_resume(&self.preview.borrow())
    }

    /// Settled form states, for re-rendering as they arrive.
    pub fn preview_updates(&self) -> watch::Receiver<ResumeRecord> {
        self.preview.subscribe()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.load(Ordering::Acquire)
    }

    /// Saves remotely, then refreshes the local copy. A save already in
    /// flight makes this call a refused no-op.
    pub async fn save(&self) -> Notice {
        let Some(_guard) = InFlight::acquire(&self.saving) else {
            return Notice::error("A save is already in progress.");
        };
        let record = self.record();

        match self.remote.save(&record).await {
            Ok(outcome) => {
                self.write_local(&record).await;
                Notice::success(outcome.message())
            }
            Err(e) => {
                warn!("Remote save failed: {e:#}");
                failure_notice(&e, "Could not save. Please try again.")
            }
        }
    }

    pub async fn upload_photo(&self, content_type: &str, bytes: Vec<u8>) -> Notice {
        let Some(_guard) = InFlight::acquire(&self.uploading) else {
            return Notice::error("A photo upload is already in progress.");
        };

        match self.remote.upload_photo(content_type, bytes).await {
            Ok(photo_url) => {
                self.set_field(ScalarField::PhotoUrl, photo_url);
                Notice::success("Photo uploaded!")
            }
            Err(e) => {
                warn!("Photo upload failed: {e:#}");
                failure_notice(&e, "Could not load the photo.")
            }
        }
    }

    /// Replaces the form with a backup file's record. Invalid files leave
    /// the form untouched.
    pub fn import_backup(&self, text: &str) -> Notice {
        match backup::import(text) {
            Ok(record) => {
                self.dispatch(FormAction::Replace(record));
                Notice::success("Backup restored!")
            }
            Err(BackupError::NotABackup) => Notice::error("Invalid file."),
            Err(BackupError::InvalidJson(e)) => {
                warn!("Backup import failed: {e}");
                Notice::error("Could not read the JSON file.")
            }
        }
    }

    pub fn export_backup(&self) -> Result<BackupFile, serde_json::Error> {
        backup::export(&self.record())
    }

    pub fn share_link(&self) -> Result<String, ShareError> {
        share_link(&self.config.public_base_url, &self.state.borrow().slug)
    }

    /// Back to a blank record; the local copy is removed.
    pub async fn clear(&self) -> Notice {
        self.dispatch(FormAction::Reset);
        if let Err(e) = self.local.clear().await {
            warn!("Failed to remove local copy: {e:#}");
        }
        Notice::success("All data cleared!")
    }

    async fn write_local(&self, record: &ResumeRecord) {
        let result = match serde_json::to_string(record) {
            Ok(json) => self.local.write(&json).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = result {
            warn!("Failed to update local copy after save: {e:#}");
        }
    }

    /// Stops editing. Edits still inside the mirror window are written first.
    pub async fn close(self) {
        let EditorSession { state, mirror, .. } = self;
        drop(state);
        if let Err(e) = mirror.await {
            warn!("Local mirror stopped abnormally: {e}");
        }
    }
}

/// Shows the service's own message when it refused the request.
fn failure_notice(err: &anyhow::Error, fallback: &str) -> Notice {
    match err.downcast_ref::<Rejected>() {
        Some(rejected) => Notice::error(rejected.message.clone()),
        None => Notice::error(fallback),
    }
}
