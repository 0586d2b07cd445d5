//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod debug;
pub mod helpers;
pub mod init;
pub mod replace;
