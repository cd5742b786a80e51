// Document rendering: résumé record → declarative page tree.
// Pure and deterministic; PDF layout happens in the external renderer.

pub mod document;
pub mod handlers;
pub mod metadata;
pub mod resume;
pub mod styles;

pub use document::{Document, Node, Page, PageSize, Style};
pub use metadata::{page_metadata, PageMetadata};
pub use resume::{render_resume, split_skills};
