pub mod cli;
pub mod config;

pub use cli::{build_cli_command, Cli, Commands, DatasetCommands, OutputFormat};
pub use config::{load_config, EcastConfig};
