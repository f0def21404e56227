//! One sensor reading drawn as a ray from the display origin.

use crate::utils::CairoEx;
use crate::Error;

/// colors are `0xRRGGBBAA`
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub background: u32,
    pub foreground: u32,
    /// unit: pixels
    pub line_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: 0x140a_1eff,
            foreground: 0x00ff_00ff,
            line_width: 1.0,
        }
    }
}

impl Style {
    pub fn validate(&self) -> Result<(), Error> {
        if self.line_width.is_finite() && self.line_width > 0.0 {
            Ok(())
        } else {
            Err(Error::LineWidth(self.line_width))
        }
    }
}

/// clear to the background and stroke an anti-aliased line from `origin` to `end`
pub fn draw(cr: &cairo::Context, style: &Style, origin: (f64, f64), end: (f64, f64)) -> Result<(), Error> {
    cr.set_source_rgba_u32(style.background);
    cr.clear()?;

    cr.save()?;
    cr.set_antialias(cairo::Antialias::Best);
    cr.set_source_rgba_u32(style.foreground);
    cr.set_line_width(style.line_width);
    cr.move_to(origin.0, origin.1);
    cr.line_to(end.0, end.1);
    let ret = cr.stroke();
    cr.restore()?;

    Ok(ret?)
}
