mod command_result;
pub mod context;
pub mod extract;
pub mod extract_file;
pub mod init;
pub mod rename;
pub mod update_languages;

pub use command_result::*;
