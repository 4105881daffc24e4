//! File logging for the terminal UI.
//!
//! The TUI owns stdout, so events go to a daily-rolling JSON log under the
//! data directory. `RUST_LOG` overrides the default `info` filter.

use std::fs;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_PREFIX: &str = "hanzi-hero.log";

pub fn log_dir(data_dir: &Path) -> PathBuf {
    data_dir.join("logs")
}

/// Initialize the logging system for the TUI.
///
/// Returns a `WorkerGuard` which must be kept alive until shutdown so
/// buffered events are flushed.
pub fn init_tui(data_dir: &Path) -> WorkerGuard {
    let log_dir = log_dir(data_dir);

    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(&log_dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter);

    // No stdout layer; the terminal belongs to the UI.
    if let Err(e) = tracing_subscriber::registry().with(file_layer).try_init() {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    if let Err(e) = tracing_log::LogTracer::init() {
        eprintln!("Failed to initialize LogTracer: {}", e);
    }

    std::thread::spawn(move || {
        compress_old_logs(&log_dir);
    });

    guard
}

/// Rolled-over logs from previous days that have not been compressed yet.
fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.starts_with(LOG_PREFIX)
        && name.len() > LOG_PREFIX.len()
        && !name.ends_with(today_suffix)
        && !name.ends_with(".gz")
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "Compressed old log"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to compress old log")
            }
        }
    }
}

fn compress_file(path: &Path) -> std::io::Result<()> {
    let file = fs::File::open(path)?;
    let mut reader = std::io::BufReader::new(file);

    let mut gz_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path.with_file_name(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    std::io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_should_compress() {
        let today = "2026-10-16";
        assert!(should_compress("hanzi-hero.log.2026-10-15", today));
        assert!(!should_compress("hanzi-hero.log.2026-10-16", today));
        assert!(!should_compress("hanzi-hero.log.2026-10-15.gz", today));
        assert!(!should_compress("hanzi-hero.log", today));
        assert!(!should_compress("other.log.2026-10-15", today));
    }

    #[test]
    fn test_compress_file_replaces_original() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hanzi-hero.log.2026-10-15");
        fs::write(&path, "{\"level\":\"INFO\"}\n").unwrap();

        compress_file(&path).unwrap();

        assert!(!path.exists());
        let gz = dir.path().join("hanzi-hero.log.2026-10-15.gz");
        let mut contents = String::new();
        GzDecoder::new(fs::File::open(gz).unwrap())
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "{\"level\":\"INFO\"}\n");
    }
}
