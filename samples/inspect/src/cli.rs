use std::path::PathBuf;

use clap::ValueHint;

/// Shape of diagnostic output on stderr; node descriptions always go to stdout as plain text.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event
    #[default]
    Compact,
    Full,
    Pretty,
    /// Newline-delimited JSON, for piping into other tools
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Diagnostic output filters; comma-separated (e.g. `tessera=trace` to see every buffer read)
    #[arg(
        short,
        long,
        default_value = "warn,tessera=info,inspect=info",
        env = "TESSERA_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Diagnostic output format
    #[arg(long, default_value_t)]
    pub log_format: LogFormat,
    /// List every node of the document
    #[arg(short = 'L', long)]
    pub list: bool,
    /// The glTF document to inspect
    #[arg(value_hint = ValueHint::FilePath)]
    pub model: PathBuf,
    /// Nodes to resolve & describe
    #[arg(short, long = "node", value_name = "NAME")]
    pub nodes: Vec<String>,
}

/// Send diagnostics to stderr, so they never interleave with node descriptions on stdout.
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_target(log_format != LogFormat::Compact)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:3]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
