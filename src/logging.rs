use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GVSORT_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {:?}, expected text or json", other)),
        }
    }
}

fn level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// $GVSORT_LOG wins over $RUST_LOG, both win over -v
fn filter(verbose: u8) -> EnvFilter {
    match std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::default().add_directive(level(verbose).into()),
    }
}

/// Logs go to stderr; stdout only carries the sorted list.
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.without_time().with_target(false).init(),
    }
}
