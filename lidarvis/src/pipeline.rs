//! The acquisition loop: read, parse, map and render, one reading at a time.

use crate::config::OnMalformed;
use crate::mapper::Mapper;
use crate::render::{DisplaySurface, FrameRenderer, FrameStatus};
use crate::source::LineSource;
use crate::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// readings drawn
    pub frames: u64,
    /// malformed lines dropped
    pub skipped: u64,
}

pub struct Pipeline<S, D> {
    source: S,
    mapper: Mapper,
    renderer: FrameRenderer<D>,
    cfg: config::Pipeline,
    stats: Stats,
}

impl<S: LineSource, D: DisplaySurface> Pipeline<S, D> {
    pub fn new(source: S, mapper: Mapper, renderer: FrameRenderer<D>, cfg: config::Pipeline) -> Self {
        Self {
            source,
            mapper,
            renderer,
            cfg,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn renderer(&self) -> &FrameRenderer<D> {
        &self.renderer
    }

    /// run until the display asks to quit
    ///
    /// Channel errors always end the loop, malformed lines only if
    /// `on_malformed` is `halt`.
    pub fn run(&mut self) -> Result<Stats, Error> {
        self.run_frames().map_err(|e| {
            log::error!("{}", e);
            e
        })
    }

    fn run_frames(&mut self) -> Result<Stats, Error> {
        loop {
            let line = match self.next_line() {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(self.stats),
                Err(e) => {
                    self.recover(e)?;
                    continue;
                }
            };

            let reading = match parser::parse(&line) {
                Ok(reading) => reading,
                Err(e) => {
                    self.recover(e)?;
                    continue;
                }
            };

            let point = self.mapper.to_screen_point(&reading);
            match self.renderer.render_frame(point)? {
                FrameStatus::Rendered => self.stats.frames += 1,
                FrameStatus::Shutdown => return Ok(self.stats),
            }
        }
    }

    /// `None` if a shutdown was seen while waiting
    fn next_line(&mut self) -> Result<Option<String>, Error> {
        loop {
            if let Some(line) = self.source.read_line()? {
                return Ok(Some(line));
            }

            if self.cfg.responsive_shutdown && self.renderer.poll_shutdown() {
                return Ok(None);
            }
        }
    }

    fn recover(&mut self, e: Error) -> Result<(), Error> {
        match e {
            Error::MalformedReading { .. } if self.cfg.on_malformed == OnMalformed::Skip => {
                log::warn!("skipping {}", e);
                self.stats.skipped += 1;
                Ok(())
            }
            e => Err(e),
        }
    }
}
