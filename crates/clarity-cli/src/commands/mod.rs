//! Command implementations.

pub mod config;
pub mod extract;
pub mod status;
pub mod summarize;
pub mod test_api;

pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::status::execute_status;
pub use self::summarize::execute_summarize;
pub use self::test_api::execute_test_api;
