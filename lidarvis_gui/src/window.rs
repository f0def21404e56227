use crate::Canvas;
use crate::Error;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// fixed-size window showing a [Canvas]
///
/// The caller owns the loop. Host events are only processed inside
/// [Window::poll_quit], so a caller that blocks elsewhere also blocks the
/// window.
pub struct Window {
    event_loop: EventLoop<()>,
    window: winit::window::Window,
    pixels: Pixels,
    canvas: Canvas,
    closed: bool,
}

impl Window {
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self, Error> {
        let canvas = Canvas::new(width, height)?;

        let event_loop = EventLoop::new();
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(LogicalSize::new(f64::from(width), f64::from(height)))
            .with_resizable(false)
            .build(&event_loop)?;

        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(width, height, surface_texture)?;

        Ok(Self {
            event_loop,
            window,
            pixels,
            canvas,
            closed: false,
        })
    }

    /// drain pending host events, returns true if closing was requested
    pub fn poll_quit(&mut self) -> bool {
        let mut quit = false;

        self.event_loop.run_return(|event, _, control_flow| {
            control_flow.set_poll();

            match event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => quit = true,
                Event::MainEventsCleared => control_flow.set_exit(),
                _ => (),
            }
        });

        quit
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// show the current canvas contents
    pub fn present(&mut self) -> Result<(), Error> {
        self.canvas.copy_rgba(self.pixels.frame_mut())?;
        self.pixels.render()?;
        Ok(())
    }

    /// hide the window, the surfaces are freed on drop
    pub fn close(&mut self) {
        if !self.closed {
            self.window.set_visible(false);
            self.closed = true;
        }
    }
}
