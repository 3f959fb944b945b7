//! File writer for the logger
//!
//! Writes go through a shared buffered file. The first failed write switches
//! the writer to stderr for the rest of the process.

use crate::logger::config::FileConfig;
use crate::logger::error::LoggerError;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

struct WriterState {
    file: BufWriter<File>,
    fallback_mode: bool,
}

/// Shared log file handle used as a `MakeWriter`.
#[derive(Clone)]
pub struct FileWriter {
    state: Arc<Mutex<WriterState>>,
}

impl FileWriter {
    pub fn new(config: &FileConfig) -> Result<Self, LoggerError> {
        if let Some(parent) = config.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = open_log_file(&config.path, config.append)?;
        Ok(Self {
            state: Arc::new(Mutex::new(WriterState {
                file,
                fallback_mode: false,
            })),
        })
    }

    pub fn is_in_fallback_mode(&self) -> bool {
        self.state.lock().map(|s| s.fallback_mode).unwrap_or(false)
    }
}

impl<'a> MakeWriter<'a> for FileWriter {
    type Writer = FileWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        FileWriterGuard {
            state: self.state.clone(),
        }
    }
}

pub struct FileWriterGuard {
    state: Arc<Mutex<WriterState>>,
}

impl Write for FileWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().write(buf);
        }

        match state.file.write(buf) {
            Ok(written) => Ok(written),
            Err(e) => {
                state.fallback_mode = true;
                eprintln!("[Logger] File write failed, falling back to stderr: {}", e);
                io::stderr().write(buf)
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire writer lock"))?;

        if state.fallback_mode {
            return io::stderr().flush();
        }
        state.file.flush()
    }
}

impl Drop for FileWriterGuard {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            let _ = state.file.flush();
        }
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogFormat;
    use tempfile::TempDir;

    fn file_config(dir: &TempDir, append: bool) -> FileConfig {
        FileConfig {
            enabled: true,
            path: dir.path().join("nested").join("app.log"),
            append,
            format: LogFormat::Json,
        }
    }

    #[test]
    fn test_creates_parent_directories_and_writes() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);
        let writer = FileWriter::new(&config).unwrap();

        {
            let mut guard = writer.make_writer();
            guard.write_all(b"hello\n").unwrap();
        }

        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "hello\n");
        assert!(!writer.is_in_fallback_mode());
    }

    #[test]
    fn test_append_and_truncate_modes() {
        let dir = TempDir::new().unwrap();
        let config = file_config(&dir, true);
        std::fs::create_dir_all(config.path.parent().unwrap()).unwrap();
        std::fs::write(&config.path, "old\n").unwrap();

        {
            let writer = FileWriter::new(&config).unwrap();
            writer.make_writer().write_all(b"new\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "old\nnew\n");

        {
            let writer = FileWriter::new(&file_config(&dir, false)).unwrap();
            writer.make_writer().write_all(b"fresh\n").unwrap();
        }
        assert_eq!(std::fs::read_to_string(&config.path).unwrap(), "fresh\n");
    }
}
