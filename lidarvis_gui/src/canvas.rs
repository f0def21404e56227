use crate::Error;

/// cairo stores ARgb32 as native-endian `0xAARRGGBB` words
fn argb_to_rgba(argb: u32) -> u32 {
    argb.rotate_left(8)
}

/// offscreen drawing target, the window blits it into its frame buffer
pub struct Canvas {
    surface: cairo::ImageSurface,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let w = i32::try_from(width).map_err(|_| Error::SurfaceSize(width, height))?;
        let h = i32::try_from(height).map_err(|_| Error::SurfaceSize(width, height))?;
        if w == 0 || h == 0 {
            return Err(Error::SurfaceSize(width, height));
        }

        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, w, h)?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> u32 {
        self.surface.width() as u32
    }

    pub fn height(&self) -> u32 {
        self.surface.height() as u32
    }

    /// run `f` with a fresh context on the surface
    ///
    /// The context is dropped and the surface flushed before returning, so
    /// the pixels are readable afterwards.
    pub fn draw<F, E>(&mut self, f: F) -> Result<(), E>
    where
        F: FnOnce(&cairo::Context) -> Result<(), E>,
        E: From<Error>,
    {
        let cr = cairo::Context::new(&self.surface).map_err(Error::from)?;
        let ret = f(&cr);
        drop(cr);
        self.surface.flush();
        ret
    }

    /// pixel as `0xRRGGBBAA`, premultiplied
    pub fn pixel(&self, x: u32, y: u32) -> Result<Option<u32>, Error> {
        if x >= self.width() || y >= self.height() {
            return Ok(None);
        }

        let stride = self.surface.stride() as usize;
        let off = y as usize * stride + x as usize * 4;
        let mut px = None;
        self.surface.with_data(|data| {
            let argb = u32::from_ne_bytes([data[off], data[off + 1], data[off + 2], data[off + 3]]);
            px = Some(argb_to_rgba(argb));
        })?;

        Ok(px)
    }

    /// copy the surface into a tightly packed RGBA8 buffer
    pub fn copy_rgba(&self, frame: &mut [u8]) -> Result<(), Error> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        if frame.len() != width * height * 4 {
            return Err(Error::FrameSize(frame.len()));
        }

        let stride = self.surface.stride() as usize;
        self.surface.with_data(|data| {
            for (y, row) in frame.chunks_exact_mut(width * 4).enumerate() {
                let src = &data[y * stride..y * stride + width * 4];
                for (dst, px) in row.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
                    let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                    dst.copy_from_slice(&argb_to_rgba(argb).to_be_bytes());
                }
            }
        })?;

        Ok(())
    }
}
