use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(
    name = "edelta",
    about = "Build partial-update payloads by diffing API entities",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ./edelta.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff two entity JSON files and print the delta
    Diff(DiffArgs),
    /// List the diffable fields of an entity type
    Fields(FieldsArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The entity as currently stored
    pub base: PathBuf,
    /// The desired entity
    pub new: PathBuf,
    /// Entity type of both files
    #[arg(short, long)]
    pub kind: Option<String>,
    /// Entity type of the new file, when it differs from --kind
    #[arg(long)]
    pub new_kind: Option<String>,
    /// Treat null fields in the base file as empty
    #[arg(long)]
    pub nil_is_empty_base: bool,
    /// Treat null fields in the new file as empty
    #[arg(long)]
    pub nil_is_empty_new: bool,
}

#[derive(Args)]
pub struct FieldsArgs {
    pub kind: String,
}
