pub mod setting;
pub mod util;

pub const CLI_NAME: &str = "musicflow";
pub const VERSION: &str = "0.1.0";
pub const GITHUB: &str = "codeberg.org/musicflow/client";

// logging constants
pub const MUSICFLOW_LOGLEVEL: &str = "MUSICFLOW_LOGLEVEL";
