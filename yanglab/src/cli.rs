use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "yanglab")]
#[command(about = "Build and decode lab-net-device NETCONF payloads")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Generate the demo edit-config request body.
    Render(RenderArgs),
    /// Print a retrieval request body for the chosen mode.
    Request(RequestArgs),
    /// Parse a saved reply (bare payload or full rpc-reply) and show it.
    Parse(ParseArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Include a pre-provisioned interface in the demo config.
    #[arg(long)]
    pub preprov: bool,
    /// Emit only the <config> document, without the edit-config wrapper.
    #[arg(long)]
    pub config_only: bool,
    /// Write the body to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum RequestMode {
    Get,
    GetConfig,
    GetData,
}

#[derive(Parser, Debug)]
pub struct RequestArgs {
    #[arg(value_enum)]
    pub mode: RequestMode,
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Reply file to decode.
    pub file: PathBuf,
    /// Emit the parsed model as JSON instead of the text summary.
    #[arg(long)]
    pub json: bool,
}
