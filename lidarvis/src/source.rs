//! Line-oriented reading sources.

use crate::*;

use std::io::BufRead;
use std::time::Duration;

pub trait LineSource {
    /// read one line without its delimiter
    ///
    /// Returns `None` if the channel timed out before a complete line
    /// arrived. Bytes received so far are kept for the next call.
    fn read_line(&mut self) -> Result<Option<String>, Error>;

    /// block until a complete line is available
    fn next_line(&mut self) -> Result<String, Error> {
        loop {
            if let Some(line) = self.read_line()? {
                return Ok(line);
            }
        }
    }
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        (**self).read_line()
    }
}

/// [LineSource] on top of any buffered reader
pub struct LineReader<R> {
    reader: R,
    pending: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Result<String, Error> {
        let mut raw = std::mem::take(&mut self.pending);
        if raw.last() == Some(&b'\n') {
            raw.pop();
        }
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        String::from_utf8(raw).map_err(|e| {
            Error::malformed(&String::from_utf8_lossy(e.as_bytes()), Malformed::Encoding)
        })
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        loop {
            match self.reader.read_until(b'\n', &mut self.pending) {
                // a pending partial line is lost with the channel
                Ok(0) => return Err(Error::ChannelClosed),
                // without a delimiter we're at the end of the stream, the
                // next call reports the closed channel
                Ok(_) => return self.take_line().map(Some),
                Err(e) => match e.kind() {
                    std::io::ErrorKind::Interrupted => continue,
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock => {
                        return Ok(None)
                    }
                    _ => return Err(Error::ChannelRead(e)),
                },
            }
        }
    }
}

pub type SerialSource = LineReader<std::io::BufReader<Box<dyn serialport::SerialPort>>>;
pub type FileSource = LineReader<std::io::BufReader<std::fs::File>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    /// retry forever if unset
    pub max_attempts: Option<u32>,
}

impl From<&config::SerialSource> for RetryPolicy {
    fn from(cfg: &config::SerialSource) -> Self {
        Self {
            delay: Duration::from_millis(cfg.open_retry_ms),
            max_attempts: cfg.open_attempts,
        }
    }
}

/// call `open` until it succeeds, calling `wait` with the delay between attempts
///
/// Every failure is logged. Only an exhausted `max_attempts` returns the
/// last error.
pub fn open_with_retry<T, F, W>(policy: &RetryPolicy, mut open: F, mut wait: W) -> Result<T, Error>
where
    F: FnMut() -> Result<T, Error>,
    W: FnMut(Duration),
{
    let mut attempt: u32 = 0;

    loop {
        attempt = attempt.saturating_add(1);

        let e = match open() {
            Ok(v) => return Ok(v),
            Err(e) => e,
        };
        log::error!("{} (attempt {})", e, attempt);

        if let Some(max) = policy.max_attempts {
            if attempt >= max {
                return Err(e);
            }
        }

        wait(policy.delay);
    }
}

pub fn open_serial(cfg: &config::SerialSource) -> Result<SerialSource, Error> {
    let port = serialport::new(&cfg.path, cfg.baud_rate)
        .timeout(Duration::from_millis(cfg.read_timeout_ms))
        .open()
        .map_err(|e| Error::ChannelOpen {
            path: cfg.path.clone(),
            source: e.into(),
        })?;
    log::info!("Serial comm established on {}", cfg.path);

    Ok(LineReader::new(std::io::BufReader::new(port)))
}

pub fn open_file(cfg: &config::FileSource) -> Result<FileSource, Error> {
    let file = std::fs::File::open(&cfg.path).map_err(|e| Error::ChannelOpen {
        path: cfg.path.clone(),
        source: e,
    })?;
    log::info!("replaying {}", cfg.path);

    Ok(LineReader::new(std::io::BufReader::new(file)))
}

/// open the configured source, a serial port is retried until it shows up
pub fn open(cfg: &config::Source) -> Result<Box<dyn LineSource>, Error> {
    match cfg {
        config::Source::Serial(serial) => {
            let port = open_with_retry(
                &RetryPolicy::from(serial),
                || open_serial(serial),
                std::thread::sleep,
            )?;
            Ok(Box::new(port))
        }
        config::Source::File(file) => Ok(Box::new(open_file(file)?)),
    }
}
