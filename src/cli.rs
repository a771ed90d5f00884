use clap::Parser;
use skillscan::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skillscan",
    version,
    about = "Static security scanner for AI agent skills"
)]
pub struct Cli {
    /// Skill directory or single file to scan
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List all rules and exit
    #[arg(long)]
    pub list_rules: bool,
}
