pub mod resume;
pub mod wire;
