use clap::Parser;

/// HoopLife — native shell for the hosted HoopLife web application.
#[derive(Parser, Debug)]
#[command(name = "hooplife", version, about)]
pub struct Args {
    /// URL of the hosted application (overrides the config).
    #[arg(long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Window width override in logical pixels.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height override in logical pixels.
    #[arg(long)]
    pub height: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}
