pub mod command;
pub mod error;
pub mod list;
pub mod repl;

pub use command::Command;
pub use error::{ListError, ParseError};
pub use list::{List, Node};
pub use repl::Repl;
