//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod commands;
mod logging;
mod query_flags;
mod run;
mod version;

pub use commands::{ConfigSubcommand, handle_config_command};
pub use logging::*;
pub use query_flags::{QueryFlags, select_source};
pub use run::run_query;
pub use version::display_version;
