mod command;
mod error;
mod slot;

pub use command::*;
pub use error::*;
pub use slot::*;
