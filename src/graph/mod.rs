pub mod index;
pub mod traversal;

pub use index::*;
pub use traversal::*;
