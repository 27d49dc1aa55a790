//! Infrastructure layer for filesystem locations.

pub mod paths;

pub use paths::{get_data_dir, get_session_file};
