//! Client-side editing: form state, debounced preview, local mirror and the
//! calls out to the persistence service.

pub mod debounce;
pub mod form;
pub mod ids;
pub mod loader;
pub mod local;
pub mod mirror;
pub mod notice;
pub mod remote;
pub mod session;

pub use form::{reduce, FormAction};
pub use local::{FileStore, LocalStore, MemoryStore};
pub use notice::{Notice, NoticeLevel};
pub use remote::{HttpResumeClient, RemoteResumes, StoreClient};
pub use session::{EditorSession, SessionConfig};
