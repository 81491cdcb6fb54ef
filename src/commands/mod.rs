pub mod config_cmd;
pub mod scan;

pub use config_cmd::execute_config;
pub use scan::execute_scan;
