// logging.rs

use env_logger::{Builder, Target, WriteStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const LOG_FILE: &str = "corn-yield-mapper.log";

/// Where log records go. The TUI owns the terminal, so it logs to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

pub fn sink_for(interactive: bool, output_dir: &Path) -> LogSink {
    if interactive {
        LogSink::File(output_dir.join(LOG_FILE))
    } else {
        LogSink::Stderr
    }
}

/// A pretty_env_logger builder honouring `RUST_LOG`, pointed at `sink`.
pub fn builder_for(sink: &LogSink) -> Result<Builder> {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if let LogSink::File(path) = sink {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }
    Ok(builder)
}

pub fn init(sink: &LogSink) -> Result<()> {
    builder_for(sink)?.init();
    Ok(())
}
