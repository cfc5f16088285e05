//! Logger setup: plain messages on stdout, optional tee to a log file.
//!
//! User-facing output goes through `log::info!`, so `--quiet` silences it
//! by raising the level to `warn`. `RUST_LOG` overrides either default.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Writes to stdout and, without ANSI codes, to a log file.
struct Tee {
    file: strip_ansi_escapes::Writer<File>,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format(move |buf, record| {
            let prefix = match record.level() {
                Level::Error => format!(
                    "{} ",
                    "error:".if_supports_color(Stdout, |t| t.red().bold().to_string())
                ),
                Level::Warn => format!(
                    "{} ",
                    "warning:".if_supports_color(Stdout, |t| t.yellow().bold().to_string())
                ),
                _ => String::new(),
            };
            if verbose {
                writeln!(
                    buf,
                    "[{} {:<5} {}] {prefix}{}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(buf, "{prefix}{}", record.args())
            }
        });

    if let Some(path) = logfile {
        let file = File::create(path).map_err(|e| {
            CliError::logging(format!("Cannot create log file {}: {e}", path.display()))
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(Tee {
            file: strip_ansi_escapes::Writer::new(file),
        })));
    } else {
        builder.target(env_logger::Target::Stdout);
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
