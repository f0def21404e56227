pub mod utils;

mod error;
pub use error::Error;

pub mod ray;
