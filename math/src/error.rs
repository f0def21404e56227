#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("empty range: [{0}, {1}]")]
    EmptyRange(f64, f64),
    #[error("inverted clamp bounds: [{0}, {1}]")]
    InvertedClamp(f64, f64),
}
