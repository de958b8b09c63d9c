pub use db::*;
pub use donations::*;
pub use projects::*;
pub use stories::*;
pub use submissions::*;
pub use users::*;

mod db;
mod donations;
mod projects;
mod stories;
mod submissions;
mod users;
