pub mod catalog;
pub mod command;
pub mod config;

pub use catalog::*;
pub use command::*;
pub use config::*;
