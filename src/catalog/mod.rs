pub mod definition;
pub mod source;
pub mod store;

pub use definition::*;
pub use source::*;
pub use store::*;
