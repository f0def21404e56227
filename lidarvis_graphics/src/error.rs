#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),

    #[error("invalid line width: {0}")]
    LineWidth(f64),
}
