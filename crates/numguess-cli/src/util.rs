use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context as _, anyhow};
use tracing_subscriber::EnvFilter;

/// Writes `value` as pretty-printed JSON followed by a newline, replacing
/// any existing file at `path`.
pub fn write_json_file<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize + ?Sized,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

/// Installs the global `tracing` subscriber.
///
/// Events go to `log_file` when given, otherwise to stderr if `stderr` is
/// set. With neither, no subscriber is installed. The filter defaults to
/// `info` and can be overridden with `RUST_LOG`.
pub fn init_tracing(log_file: Option<&Path>, stderr: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if stderr => builder.with_writer(io::stderr).try_init(),
        None => return Ok(()),
    };
    result.map_err(|err| anyhow!("Failed to install tracing subscriber: {err}"))
}
