pub mod handlers;
pub mod identity;
pub mod memory;
pub mod postgres;
pub mod service;
pub mod store;

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;
pub use store::ResumeStore;
