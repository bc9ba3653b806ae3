mod health;
mod movies;
mod transcribe;

pub use health::{APPLICATION_NAME, healthcheck_handler};
pub use movies::movies_handler;
pub use transcribe::transcribe_handler;
