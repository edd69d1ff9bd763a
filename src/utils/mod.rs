pub mod file_utils;
pub mod log_utils;

pub use file_utils::{sanitize_filename, write_json, write_string};
pub use log_utils::init_logging;
