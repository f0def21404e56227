/// one sensor sample, all values in the sensor's native units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    /// unit: sensor range units
    pub distance: i64,
    /// passed to cos/sin as is unless configured otherwise
    pub angle: i64,
    /// signal strength, not validated and not used for drawing
    pub quality: i64,
}

/// display-space point, unit: pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// anchor of every drawn ray on the default 800x800 display
pub const ORIGIN: ScreenPoint = ScreenPoint { x: 400.0, y: 400.0 };

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// treat `self` as an offset from `origin`
    pub fn absolute(&self, origin: ScreenPoint) -> ScreenPoint {
        ScreenPoint {
            x: origin.x + self.x,
            y: origin.y + self.y,
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
