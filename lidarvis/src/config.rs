use crate::mapper;
use crate::Error;

use serde::Deserialize;

/// serial channel to the sensor
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct SerialSource {
    /// device path, e.g. `/dev/ttyUSB0` or `COM3`
    pub path: String,
    pub baud_rate: u32,
    /// a read gives up after this long, unit: milli seconds
    pub read_timeout_ms: u64,
    /// delay between attempts to open the port, unit: milli seconds
    pub open_retry_ms: u64,
    /// give up after this many failed attempts, retry forever if unset
    pub open_attempts: Option<u32>,
}

impl Default for SerialSource {
    fn default() -> Self {
        Self {
            path: "/dev/ttyUSB0".to_string(),
            baud_rate: 9600,
            read_timeout_ms: 1000,
            open_retry_ms: 1000,
            open_attempts: None,
        }
    }
}

/// recorded sensor output, one reading per line
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSource {
    /// relative to the config file
    pub path: String,
}

/// where readings come from
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type")]
pub enum Source {
    #[serde(rename = "serial")]
    Serial(SerialSource),
    #[serde(rename = "file")]
    File(FileSource),
}

impl Default for Source {
    fn default() -> Self {
        Self::Serial(SerialSource::default())
    }
}

/// window and drawing style
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct Display {
    pub title: String,
    /// unit: pixels
    pub width: u32,
    /// unit: pixels
    pub height: u32,
    /// anchor of the drawn ray, unit: pixels
    pub origin: (f64, f64),
    /// `0xRRGGBBAA`
    pub background: u32,
    /// `0xRRGGBBAA`
    pub foreground: u32,
    /// unit: pixels
    pub line_width: f64,
}

impl Default for Display {
    fn default() -> Self {
        let style = lidarvis_graphics::ray::Style::default();

        Self {
            title: "lidarvis".to_string(),
            width: 800,
            height: 800,
            origin: (crate::ORIGIN.x, crate::ORIGIN.y),
            background: style.background,
            foreground: style.foreground,
            line_width: style.line_width,
        }
    }
}

impl Display {
    pub fn style(&self) -> lidarvis_graphics::ray::Style {
        lidarvis_graphics::ray::Style {
            background: self.background,
            foreground: self.foreground,
            line_width: self.line_width,
        }
    }

    pub fn origin(&self) -> crate::ScreenPoint {
        crate::ScreenPoint::new(self.origin.0, self.origin.1)
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnMalformed {
    /// stop with an error
    Halt,
    /// log and continue with the next line
    Skip,
}

impl Default for OnMalformed {
    fn default() -> Self {
        Self::Halt
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields, default)]
pub struct Pipeline {
    pub on_malformed: OnMalformed,
    /// also check for a quit request whenever a read times out
    pub responsive_shutdown: bool,
}

/// global configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub mapping: mapper::Config,
    #[serde(default)]
    pub display: Display,
    #[serde(default)]
    pub pipeline: Pipeline,
}

impl Config {
    pub fn validate(&self) -> Result<(), Error> {
        self.mapping.validate()?;
        self.display.style().validate()?;

        if self.display.width == 0 || self.display.height == 0 {
            return Err(Error::InvalidConfig("display size must not be zero"));
        }
        if let Source::Serial(serial) = &self.source {
            if serial.read_timeout_ms == 0 {
                return Err(Error::InvalidConfig("read_timeout_ms must not be zero"));
            }
        }

        Ok(())
    }
}

fn path2abs(dir: &std::path::Path, relpath: &str) -> String {
    dir.join(relpath).to_string_lossy().into_owned()
}

/// parse a config, rejecting unknown keys
pub fn from_str(buffer: &str) -> Result<Config, Error> {
    let value: toml::Value = toml::from_str(buffer)?;
    let mut has_unsupported: bool = false;
    let cfg: Config = serde_ignored::deserialize(value, |path| {
        log::error!("unsupported config: {}", path);
        has_unsupported = true;
    })?;
    if has_unsupported {
        return Err(Error::UnsupportedConfigs);
    }

    cfg.validate()?;
    Ok(cfg)
}

/// load config file
pub fn load<P: AsRef<std::path::Path>>(filename: P) -> Result<Config, Error> {
    let cfgdir = crate::unwrap_opt_or!(filename.as_ref().parent(), std::path::Path::new("."));

    let buffer = std::fs::read_to_string(filename.as_ref())?;
    let mut cfg = from_str(&buffer)?;

    // make all paths absolute
    if let Source::File(file) = &mut cfg.source {
        file.path = path2abs(cfgdir, &file.path);
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = from_str("").unwrap();

        match &cfg.source {
            Source::Serial(serial) => {
                assert_eq!(serial.path, "/dev/ttyUSB0");
                assert_eq!(serial.baud_rate, 9600);
                assert_eq!(serial.open_retry_ms, 1000);
                assert_eq!(serial.open_attempts, None);
            }
            other => panic!("unexpected source {:?}", other),
        }
        assert_eq!(cfg.mapping, mapper::Config::default());
        assert!(cfg.mapping.double_interpolation);
        assert_eq!(cfg.display.origin, (400.0, 400.0));
        assert_eq!((cfg.display.width, cfg.display.height), (800, 800));
        assert_eq!(cfg.display.background, 0x140a_1eff);
        assert_eq!(cfg.display.foreground, 0x00ff_00ff);
        assert_eq!(cfg.pipeline.on_malformed, OnMalformed::Halt);
        assert!(!cfg.pipeline.responsive_shutdown);
    }

    #[test]
    fn full() {
        let cfg = from_str(
            r#"
            [source]
            type = "serial"
            path = "/dev/ttyACM1"
            baud_rate = 115200
            open_attempts = 5

            [mapping]
            input_range = [100, 8000]
            double_interpolation = false
            angle_unit = "degrees"

            [display]
            background = 0x000000ff
            line_width = 4.0

            [pipeline]
            on_malformed = "skip"
            responsive_shutdown = true
            "#,
        )
        .unwrap();

        match &cfg.source {
            Source::Serial(serial) => {
                assert_eq!(serial.path, "/dev/ttyACM1");
                assert_eq!(serial.baud_rate, 115200);
                assert_eq!(serial.read_timeout_ms, 1000);
                assert_eq!(serial.open_attempts, Some(5));
            }
            other => panic!("unexpected source {:?}", other),
        }
        assert_eq!(cfg.mapping.input_range, (100.0, 8000.0));
        assert_eq!(cfg.mapping.output_range, (-350.0, 350.0));
        assert_eq!(cfg.mapping.angle_unit, mapper::AngleUnit::Degrees);
        assert!(!cfg.mapping.double_interpolation);
        assert_eq!(cfg.display.background, 0x0000_00ff);
        assert_eq!(cfg.display.style().line_width, 4.0);
        assert_eq!(cfg.pipeline.on_malformed, OnMalformed::Skip);
        assert!(cfg.pipeline.responsive_shutdown);
    }

    #[test]
    fn unknown_keys() {
        assert!(from_str("[display]\nzoom = 2\n").is_err());
        assert!(from_str("[source]\ntype = \"tcp\"\n").is_err());
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            from_str("[mapping]\ninput_range = [5, 5]\n"),
            Err(Error::Math(_))
        ));
        assert!(matches!(
            from_str("[display]\nwidth = 0\n"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            from_str("[display]\nline_width = -1.0\n"),
            Err(Error::Graphics(_))
        ));
    }

    #[test]
    fn relative_replay_path() {
        let dir = std::env::temp_dir().join(format!("lidarvis-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let cfgpath = dir.join("replay.toml");
        std::fs::write(&cfgpath, "[source]\ntype = \"file\"\npath = \"scan.txt\"\n").unwrap();

        let cfg = load(&cfgpath).unwrap();
        match &cfg.source {
            Source::File(file) => {
                assert_eq!(std::path::Path::new(&file.path), dir.join("scan.txt"))
            }
            other => panic!("unexpected source {:?}", other),
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
