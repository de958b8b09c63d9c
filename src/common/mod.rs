pub use errors::*;
pub use fetchable::*;

mod errors;
mod fetchable;
mod macros;
