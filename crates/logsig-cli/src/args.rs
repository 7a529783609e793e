use crate::types::{FileOrder, LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logsig")]
#[command(about = "Scan rotated syslog files for known error signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding syslog, syslog.N and syslog.N.gz [default: /var/log]"
    )]
    pub path: Option<String>,

    #[arg(long, global = true, help = "Configuration file (TOML)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "File processing order: oldest rotation first, or current log first"
    )]
    pub order: Option<FileOrder>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Scan log files and report matches (default command)")]
    Scan(ScanArgs),

    #[command(about = "List discovered log files in processing order")]
    Files,

    #[command(about = "List the active pattern checks")]
    Checks,
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    #[arg(long, help = "Skip syslog.N.gz rotations instead of decompressing them")]
    pub no_decompress: bool,

    #[arg(
        long,
        value_name = "N",
        help = "Escalate checks matched more than N times [default: 1]"
    )]
    pub escalate_above: Option<usize>,
}
