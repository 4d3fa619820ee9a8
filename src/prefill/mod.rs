pub mod filter;
pub mod mapping;
pub mod provider;
pub mod registry;
pub mod source;

pub use filter::*;
pub use mapping::*;
pub use provider::*;
pub use registry::*;
pub use source::*;
