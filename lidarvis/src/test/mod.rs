//! In-memory channel and display doubles.

use crate::render::DisplaySurface;
use crate::source::LineSource;
use crate::Error;

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

/// reader that replays a script of chunks and error kinds, then EOF
pub struct StutteringReader {
    script: VecDeque<Result<Vec<u8>, std::io::ErrorKind>>,
}

impl StutteringReader {
    pub fn new(script: Vec<Result<Vec<u8>, std::io::ErrorKind>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl std::io::Read for StutteringReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.script.pop_front() {
            None => Ok(0),
            Some(Err(kind)) => Err(kind.into()),
            Some(Ok(mut chunk)) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    self.script.push_front(Ok(chunk.split_off(n)));
                }
                Ok(n)
            }
        }
    }
}

/// `Some(line)` is a line, `None` a read timeout; the channel closes when the
/// script runs out
#[derive(Default)]
pub struct ScriptedSource {
    script: VecDeque<Option<String>>,
    pub reads: usize,
}

impl ScriptedSource {
    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|l| Some(l.to_string())).collect())
    }

    pub fn new(script: Vec<Option<String>>) -> Self {
        Self {
            script: script.into(),
            reads: 0,
        }
    }
}

impl LineSource for ScriptedSource {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        self.reads += 1;
        self.script.pop_front().ok_or(Error::ChannelClosed)
    }
}

/// display without a window, asks to quit on the `quit_on_poll`th poll
pub struct Offscreen {
    pub canvas: lidarvis_gui::Canvas,
    pub quit_on_poll: Option<usize>,
    pub polls: usize,
    pub presented: usize,
    pub closed: usize,
}

impl Offscreen {
    pub fn new(quit_on_poll: Option<usize>) -> Self {
        Self {
            canvas: lidarvis_gui::Canvas::new(800, 800).unwrap(),
            quit_on_poll,
            polls: 0,
            presented: 0,
            closed: 0,
        }
    }
}

impl DisplaySurface for Offscreen {
    fn poll_quit(&mut self) -> bool {
        self.polls += 1;
        self.quit_on_poll.map_or(false, |n| self.polls >= n)
    }

    fn canvas_mut(&mut self) -> &mut lidarvis_gui::Canvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<(), Error> {
        self.presented += 1;
        Ok(())
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}

static RECORDS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// route log records of every test into a shared buffer
pub fn capture_logs() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&LOGGER).unwrap();
        log::set_max_level(log::LevelFilter::Trace);
    });
}

/// messages captured so far at `level`, from all tests
pub fn logged(level: log::Level) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, _)| *l == level)
        .map(|(_, msg)| msg.clone())
        .collect()
}
