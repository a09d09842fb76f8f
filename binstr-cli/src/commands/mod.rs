//! Command implementations for the binstr CLI.

pub mod decode;
pub mod encode;
pub mod list;

pub use decode::cmd_decode;
pub use encode::cmd_encode;
pub use list::cmd_list;
