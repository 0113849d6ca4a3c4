//! socks5-inspect - decode SOCKS5 handshake and request messages
//!
//! This is the main entry point for the socks5-inspect tool.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use socks5_wire::config::{load_config, Config, MessageKind};
use socks5_wire::helper::parse_hex;
use socks5_wire::inspect::inspect;
use socks5_wire::Error;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Message kind selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    /// Method handshake
    Handshake,
    /// Connection request
    Request,
}

impl From<KindArg> for MessageKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Handshake => MessageKind::Handshake,
            KindArg::Request => MessageKind::Request,
        }
    }
}

/// socks5-inspect - decode SOCKS5 handshake and connection request messages
#[derive(Parser, Debug)]
#[command(name = "socks5-inspect")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable JSON logging format
    #[arg(long)]
    json_log: bool,

    /// Message kind; overrides the config file
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,

    /// Reject bytes after a complete message
    #[arg(long)]
    strict: bool,

    /// Read one raw binary message from a file
    #[arg(short, long, conflicts_with = "messages")]
    file: Option<PathBuf>,

    /// Messages as hex, one per argument (e.g. "05 01 00")
    messages: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(level) = &args.log_level {
        config.log.level = level.clone();
    }
    config.log.json |= args.json_log;
    config.inspect.strict |= args.strict;
    config.validate()?;

    // Setup logging
    setup_logging(&config.log.level, config.log.json)?;

    info!("socks5-inspect v{}", socks5_wire::VERSION);
    if let Some(path) = &args.config {
        info!("Configuration loaded from: {:?}", path);
    }

    let kind = args.kind.map(MessageKind::from).unwrap_or(config.inspect.kind);
    let messages = collect_messages(&args)?;
    if messages.is_empty() {
        bail!("No messages given; pass hex arguments or --file");
    }

    let mut failures = 0;
    for (index, bytes) in messages.iter().enumerate() {
        match inspect(bytes, kind, &config.inspect) {
            Ok(report) => print!("{}", report),
            Err(Error::Decode(e)) => {
                failures += 1;
                error!(message = index, "Decode failed: {}", e);
                println!("error: {}", e);
                println!("  suggested reply: {}", e.reply_code());
            }
            Err(e) => {
                failures += 1;
                error!(message = index, "Inspection failed: {}", e);
                println!("error: {}", e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} messages failed to decode", failures, messages.len());
    }

    Ok(())
}

/// Gather raw messages from the file or hex arguments
fn collect_messages(args: &Args) -> Result<Vec<Vec<u8>>> {
    if let Some(path) = &args.file {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read message file: {:?}", path))?;
        return Ok(vec![bytes]);
    }

    args.messages
        .iter()
        .map(|text| parse_hex(text).with_context(|| format!("Bad message argument: {:?}", text)))
        .collect()
}

/// Map a configured level name to a filter directive
fn level_directive(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Setup logging based on configuration
///
/// `RUST_LOG`, when set, takes precedence over the configured level.
fn setup_logging(level: &str, json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(level)));

    if json {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive("TRACE"), "trace");
        assert_eq!(level_directive("debug"), "debug");
        assert_eq!(level_directive("Warning"), "warn");
        assert_eq!(level_directive("error"), "error");
        assert_eq!(level_directive("loud"), "info");
    }

    #[test]
    fn test_level_directive_builds_filter() {
        use tracing::level_filters::LevelFilter;

        for (level, expected) in [
            ("trace", LevelFilter::TRACE),
            ("debug", LevelFilter::DEBUG),
            ("info", LevelFilter::INFO),
            ("warning", LevelFilter::WARN),
            ("error", LevelFilter::ERROR),
        ] {
            let filter = EnvFilter::try_new(level_directive(level)).unwrap();
            assert_eq!(filter.max_level_hint(), Some(expected));
        }
    }
}
