use crate::logging::LogFormat;
use std::{path::PathBuf, str::FromStr};
use structopt::StructOpt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format {:?}, expected text, json or yaml", other)),
        }
    }
}

/// Orders API group versions: priority patterns first, then parent domains
/// before their subdomains, siblings alphabetically.
#[derive(Debug, StructOpt)]
#[structopt(name = "gvsort")]
pub struct Args {
    /// Config file (defaults to $GVSORT_CONFIG, then the user config directory)
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Priority pattern, highest first; replaces `processor.groupSort`.
    /// "*" matches every group, "" matches the core group
    #[structopt(long = "group-sort", number_of_values = 1)]
    pub group_sort: Vec<String>,
    /// Keep only the preferred version of each group
    #[structopt(long = "preferred-only")]
    pub preferred_only: bool,
    /// text, json or yaml
    #[structopt(long, short, default_value = "text")]
    pub output: OutputFormat,
    /// Log more, repeat for debug and trace; $GVSORT_LOG or $RUST_LOG override it
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,
    /// Log format on stderr: text or json
    #[structopt(long = "log-format", default_value = "text")]
    pub log_format: LogFormat,
    /// APIGroupList, APIGroup or APIVersions documents; stdin when empty
    #[structopt(parse(from_os_str))]
    pub inputs: Vec<PathBuf>,
}

pub fn parse() -> Args {
    Args::from_args()
}
