pub mod handlers;
pub mod lookup;

pub use lookup::find_by_slug;
