/// why a line is not a reading
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Malformed {
    #[error("expected 3 fields, got {0}")]
    FieldCount(usize),
    #[error("field {0} is not an integer")]
    NotAnInteger(usize),
    #[error("not valid UTF-8")]
    Encoding,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Graphics(#[from] lidarvis_graphics::Error),
    #[error(transparent)]
    Gui(#[from] lidarvis_gui::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Math(#[from] math::Error),
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),

    #[error("can't open channel {path}: {source}")]
    ChannelOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("channel read: {0}")]
    ChannelRead(std::io::Error),
    #[error("channel closed")]
    ChannelClosed,
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("malformed reading {line:?}: {reason}")]
    MalformedReading { line: String, reason: Malformed },
    #[error("unsupported configs")]
    UnsupportedConfigs,
}

impl Error {
    pub(crate) fn malformed(line: &str, reason: Malformed) -> Self {
        Self::MalformedReading {
            line: line.to_string(),
            reason,
        }
    }
}
