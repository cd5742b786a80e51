//! Startup loading: remote first, then the local copy, then the blank record.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::editor::local::LocalStore;
use crate::editor::remote::RemoteResumes;
use crate::models::resume::ResumeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOrigin {
    Remote,
    Local,
    Default,
}

/// One place a record may be loaded from.
#[async_trait]
pub trait RecordSource: Send + Sync {
    fn origin(&self) -> LoadOrigin;

    async fn fetch(&self) -> Result<Option<ResumeRecord>>;
}

pub struct RemoteSource(pub Arc<dyn RemoteResumes>);

pub struct LocalSource(pub Arc<dyn LocalStore>);

#[async_trait]
impl RecordSource for RemoteSource {
    fn origin(&self) -> LoadOrigin {
        LoadOrigin::Remote
    }

    async fn fetch(&self) -> Result<Option<ResumeRecord>> {
        self.0.load().await
    }
}

#[async_trait]
impl RecordSource for LocalSource {
    fn origin(&self) -> LoadOrigin {
        LoadOrigin::Local
    }

    async fn fetch(&self) -> Result<Option<ResumeRecord>> {
        match self.0.read().await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

/// Tries each source in order and returns the first record found. A source
/// that fails counts as empty. Falls back to `ResumeRecord::default()`.
pub async fn load_first(sources: &[&dyn RecordSource]) -> (ResumeRecord, LoadOrigin) {
    for source in sources {
        match source.fetch().await {
            Ok(Some(record)) => {
                info!(origin = ?source.origin(), "Resume loaded");
                return (record, source.origin());
            }
            Ok(None) => {}
            Err(e) => warn!(origin = ?source.origin(), "Load failed, trying next source: {e:#}"),
        }
    }
    info!("No saved resume found; starting from a blank one");
    (ResumeRecord::default(), LoadOrigin::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::local::MemoryStore;

    struct Fixed(LoadOrigin, Option<ResumeRecord>);

    struct Failing;

    #[async_trait]
    impl RecordSource for Fixed {
        fn origin(&self) -> LoadOrigin {
            self.0
        }

        async fn fetch(&self) -> Result<Option<ResumeRecord>> {
            Ok(self.1.clone())
        }
    }

    #[async_trait]
    impl RecordSource for Failing {
        fn origin(&self) -> LoadOrigin {
            LoadOrigin::Remote
        }

        async fn fetch(&self) -> Result<Option<ResumeRecord>> {
            anyhow::bail!("connection refused")
        }
    }

    fn named(name: &str) -> ResumeRecord {
        ResumeRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_first_hit_wins() {
        let remote = Fixed(LoadOrigin::Remote, Some(named("remote")));
        let local = Fixed(LoadOrigin::Local, Some(named("local")));
        let (record, origin) = load_first(&[&remote, &local]).await;
        assert_eq!(record.name, "remote");
        assert_eq!(origin, LoadOrigin::Remote);
    }

    #[tokio::test]
    async fn test_missing_remote_falls_back_to_local() {
        let remote = Fixed(LoadOrigin::Remote, None);
        let local = Fixed(LoadOrigin::Local, Some(named("local")));
        let (record, origin) = load_first(&[&remote, &local]).await;
        assert_eq!(record.name, "local");
        assert_eq!(origin, LoadOrigin::Local);
    }

    #[tokio::test]
    async fn test_failing_remote_falls_back_to_local() {
        let local = Fixed(LoadOrigin::Local, Some(named("local")));
        let (record, origin) = load_first(&[&Failing, &local]).await;
        assert_eq!(record.name, "local");
        assert_eq!(origin, LoadOrigin::Local);
    }

    #[tokio::test]
    async fn test_everything_empty_gives_default() {
        let remote = Fixed(LoadOrigin::Remote, None);
        let local = LocalSource(Arc::new(MemoryStore::new()));
        let (record, origin) = load_first(&[&remote, &local]).await;
        assert_eq!(record, ResumeRecord::default());
        assert_eq!(origin, LoadOrigin::Default);
    }

    #[tokio::test]
    async fn test_corrupt_local_copy_is_skipped() {
        let local = LocalSource(Arc::new(MemoryStore::with_contents("{oops")));
        let (record, origin) = load_first(&[&Failing, &local]).await;
        assert_eq!(record, ResumeRecord::default());
        assert_eq!(origin, LoadOrigin::Default);
    }
}
