//! Raw readings to display-space offsets.
//!
//! With the default config the distance is interpolated twice, values outside
//! the input range clamp to ±400 instead of the ±350 interpolation ends, and
//! the angle goes into cos/sin without unit conversion.

use crate::*;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Radians,
    Degrees,
}

impl Default for AngleUnit {
    fn default() -> Self {
        Self::Radians
    }
}

/// mapping config
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// unit: sensor range units
    pub input_range: (f64, f64),
    /// unit: pixels
    pub output_range: (f64, f64),
    /// result for distances below/above `input_range`, unit: pixels
    pub clamp: (f64, f64),
    /// run the interpolation a second time on its own output
    pub double_interpolation: bool,
    pub angle_unit: AngleUnit,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_range: (106.0, 12000.0),
            output_range: (-350.0, 350.0),
            clamp: (-400.0, 400.0),
            double_interpolation: true,
            angle_unit: AngleUnit::Radians,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        math::check_range(self.input_range)?;
        math::check_clamp(self.clamp)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Mapper {
    cfg: Config,
}

impl Mapper {
    pub fn new(cfg: Config) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// one pass of the clamped range interpolation
    pub fn interpolate(&self, distance: f64) -> f64 {
        math::interp(
            distance,
            self.cfg.input_range,
            self.cfg.output_range,
            self.cfg.clamp.0,
            self.cfg.clamp.1,
        )
    }

    /// the distance actually used for the projection, unit: pixels
    pub fn scaled_distance(&self, distance: i64) -> f64 {
        let d = self.interpolate(distance as f64);
        if self.cfg.double_interpolation {
            self.interpolate(d)
        } else {
            d
        }
    }

    pub fn angle_radians(&self, angle: i64) -> f64 {
        match self.cfg.angle_unit {
            AngleUnit::Radians => angle as f64,
            AngleUnit::Degrees => (angle as f64).to_radians(),
        }
    }

    pub fn to_screen_point(&self, reading: &Reading) -> ScreenPoint {
        let (x, y) = math::polar_to_cartesian(
            self.scaled_distance(reading.distance),
            self.angle_radians(reading.angle),
        );

        ScreenPoint { x, y }
    }
}
