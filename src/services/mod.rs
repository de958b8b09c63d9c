pub use auth::*;
pub use payment::*;
pub use wizard::*;

mod auth;
mod payment;
mod wizard;
