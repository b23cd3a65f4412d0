mod args;
mod category_cmd;
mod command;

pub use args::{Cli, StorageKind};
pub use category_cmd::CategoryCmd;
pub use command::Command;

pub use args::parse;
