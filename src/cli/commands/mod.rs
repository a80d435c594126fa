mod command_result;
pub mod compare;
pub mod detect_missing;
pub mod helper;
pub mod init;
pub mod remove_extra;
pub mod validate;

pub use command_result::*;
