//! Session logger: backs the `log` facade with a single file in the OS data
//! directory.
//!
//! The file is **truncated at each launch**, so it only ever holds output
//! from the most recent session.
//!
//! Log location:
//!   Windows:  `%APPDATA%\DollarShop\dollarshop.log`
//!   Linux:    `~/.local/share/DollarShop/dollarshop.log`
//!   macOS:    `~/Library/Application Support/DollarShop/dollarshop.log`
//!
//! Set `DOLLARSHOP_LOG_STDERR=1` to mirror every line to stderr as well.

use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

pub const STDERR_ENV: &str = "DOLLARSHOP_LOG_STDERR";

static LOG_FILE: OnceLock<Mutex<File>> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();
static MIRROR_STDERR: OnceLock<bool> = OnceLock::new();

struct SessionLogger;

impl Log for SessionLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:>5}] {}: {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if mirror_stderr() {
            eprintln!("{}", line);
        }
        write_line(&line);
    }

    fn flush(&self) {
        if let Some(mutex) = LOG_FILE.get()
            && let Ok(mut file) = mutex.lock()
        {
            let _ = file.flush();
        }
    }
}

/// Returns the path to the current session log file.
pub fn log_path() -> Option<&'static PathBuf> {
    LOG_PATH.get()
}

fn mirror_stderr() -> bool {
    *MIRROR_STDERR.get_or_init(|| {
        let v = std::env::var(STDERR_ENV).unwrap_or_default();
        matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
    })
}

/// Write a raw line to the session log. I/O errors are ignored.
fn write_line(line: &str) {
    if let Some(mutex) = LOG_FILE.get()
        && let Ok(mut file) = mutex.lock()
    {
        let _ = writeln!(file, "{}", line);
    }
}

/// Initialise the session logger. Only the first call has any effect.
///
/// * Creates (or truncates) the log file.
/// * Installs the `log` backend at `level`.
/// * Installs a panic hook that writes the panic to the log before
///   handing over to the default handler.
pub fn init(level: LevelFilter) {
    init_at(level, log_file_path());
}

/// [`init`] with an explicit log file location.
pub fn init_at(level: LevelFilter, path: PathBuf) {
    if log::set_boxed_logger(Box::new(SessionLogger)).is_err() {
        return;
    }
    log::set_max_level(level);

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path);
    match file {
        Ok(f) => {
            let _ = LOG_PATH.set(path.clone());
            let _ = LOG_FILE.set(Mutex::new(f));
        }
        Err(e) => {
            // Not fatal: records still reach stderr when mirroring is on.
            eprintln!("[logger] Failed to open log file {:?}: {}", path, e);
        }
    }

    write_line(&format!("=== DollarShop session started {} ===", human_timestamp()));
    write_line(&format!("Log file: {}", path.display()));
    write_line("");

    let prev = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        write_line(&format!("[{}] [PANIC] {}", timestamp(), info));
        prev(info);
    }));
}

fn log_file_path() -> PathBuf {
    data_dir().join("DollarShop").join("dollarshop.log")
}

/// Platform data directory (without the app sub-folder).
fn data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata);
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library").join("Application Support");
        }
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".local").join("share");
    }
    PathBuf::from(".")
}

/// `HH:MM:SS.mmm` (UTC) within the current day.
fn timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => {
            let secs = d.as_secs();
            let h = (secs % 86400) / 3600;
            let m = (secs % 3600) / 60;
            let s = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", h, m, s, d.subsec_millis())
        }
        Err(_) => "??:??:??".to_string(),
    }
}

fn human_timestamp() -> String {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => format!("(unix {})", d.as_secs()),
        Err(_) => "(unknown time)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_clock_shape() {
        let ts = timestamp();
        assert_eq!(ts.len(), 12);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[8..9], ".");
    }

    #[test]
    fn init_routes_records_to_the_file() {
        let path = std::env::temp_dir()
            .join(format!("dollarshop_log_{}", uuid::Uuid::new_v4()))
            .join("session.log");
        init_at(LevelFilter::Debug, path.clone());
        assert_eq!(log_path(), Some(&path));
        assert_eq!(log::max_level(), LevelFilter::Debug);

        log::debug!("brush width now 5");
        log::trace!("filtered out");
        log::logger().flush();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("=== DollarShop session started"));
        assert!(text.contains("DEBUG] dollarshop::logger::tests: brush width now 5"));
        assert!(!text.contains("filtered out"));

        // A second call leaves the installed logger alone.
        init_at(LevelFilter::Error, path.with_file_name("other.log"));
        assert_eq!(log_path(), Some(&path));
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }

    #[test]
    fn log_file_lives_in_app_folder() {
        let path = log_file_path();
        assert!(path.ends_with("DollarShop/dollarshop.log"));
    }
}
