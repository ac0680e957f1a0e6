//! Line-oriented output sinks

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Destination accepting serialized log lines
///
/// `write_line` takes `&self`: whatever guarantee concurrent writes need
/// lives in the sink, not in the logger. The stdio impls hold the stream
/// lock for the duration of one line; the [`Mutex`] impl serializes
/// access to any writer.
pub trait Sink: Send + Sync {
    /// Write one record, terminated with a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

impl Sink for io::Stderr {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self.lock();
        writeln!(handle, "{}", line)
    }
}

impl Sink for io::Stdout {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self.lock();
        writeln!(handle, "{}", line)
    }
}

/// Any writer behind a mutex is a sink: files, pipes, in-memory buffers.
impl<W: Write + Send> Sink for Mutex<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log sink poisoned"))?;
        writeln!(writer, "{}", line)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_mutex_writer_appends_lines() {
        let sink = Mutex::new(Vec::new());
        sink.write_line("first").unwrap();
        sink.write_line("second").unwrap();

        let written = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    #[test]
    fn test_shared_sink() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&buffer);
        sink.write_line("shared").unwrap();

        assert_eq!(buffer.lock().unwrap().as_slice(), b"shared\n");
    }

    #[test]
    fn test_file_sink() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let sink = Mutex::new(file.reopen().unwrap());
        sink.write_line("to disk").unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, "to disk\n");
    }
}
