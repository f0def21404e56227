use crate::*;

use lidarvis_graphics::ray;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// drawing target owned by the [FrameRenderer]
pub trait DisplaySurface {
    /// process pending host events, true if the host asked to quit
    fn poll_quit(&mut self) -> bool;
    fn canvas_mut(&mut self) -> &mut lidarvis_gui::Canvas;
    /// show what was drawn on the canvas
    fn present(&mut self) -> Result<(), Error>;
    /// release the display, called once on shutdown
    fn close(&mut self);
}

impl DisplaySurface for lidarvis_gui::Window {
    fn poll_quit(&mut self) -> bool {
        lidarvis_gui::Window::poll_quit(self)
    }

    fn canvas_mut(&mut self) -> &mut lidarvis_gui::Canvas {
        lidarvis_gui::Window::canvas_mut(self)
    }

    fn present(&mut self) -> Result<(), Error> {
        Ok(lidarvis_gui::Window::present(self)?)
    }

    fn close(&mut self) {
        lidarvis_gui::Window::close(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    /// terminal
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Rendered,
    Shutdown,
}

pub struct FrameRenderer<D> {
    display: D,
    origin: ScreenPoint,
    style: ray::Style,
    interrupt: Arc<AtomicBool>,
    state: State,
}

impl<D: DisplaySurface> FrameRenderer<D> {
    pub fn new(display: D, cfg: &config::Display) -> Result<Self, Error> {
        let style = cfg.style();
        style.validate()?;

        Ok(Self {
            display,
            origin: cfg.origin(),
            style,
            interrupt: Arc::new(AtomicBool::new(false)),
            state: State::Running,
        })
    }

    /// also shut down once `flag` is set, e.g. from a signal handler
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = flag;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// check the host and the interrupt flag for a quit request
    ///
    /// The first request releases the display and moves to
    /// [State::Shutdown]. Nothing is polled after that.
    pub fn poll_shutdown(&mut self) -> bool {
        if self.state == State::Shutdown {
            return true;
        }

        let host = self.display.poll_quit();
        let interrupted = self.interrupt.load(Ordering::SeqCst);
        if !(host || interrupted) {
            return false;
        }

        log::info!("shutdown requested");
        self.display.close();
        self.state = State::Shutdown;
        true
    }

    /// draw one ray from the origin to `point` (an offset from the origin)
    pub fn render_frame(&mut self, point: ScreenPoint) -> Result<FrameStatus, Error> {
        if self.poll_shutdown() {
            return Ok(FrameStatus::Shutdown);
        }

        let style = &self.style;
        let origin = self.origin.as_tuple();
        let end = point.absolute(self.origin).as_tuple();
        self.display
            .canvas_mut()
            .draw(|cr| -> Result<(), Error> { Ok(ray::draw(cr, style, origin, end)?) })?;
        self.display.present()?;

        Ok(FrameStatus::Rendered)
    }
}
