pub use donation::*;
pub use profile::*;
pub use project::*;
pub use project_status::*;
pub use stats::*;
pub use story::*;
pub use submission::*;
pub use submission_status::*;
pub use user::*;

mod donation;
mod profile;
mod project;
mod project_status;
mod stats;
mod story;
mod submission;
mod submission_status;
mod user;
