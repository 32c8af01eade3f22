pub mod check;
mod command_result;

pub use command_result::*;
