#[macro_export]
macro_rules! unwrap_opt_or {
    ($opt:expr, $default:expr) => {
        match $opt {
            Some(x) => x,
            None => $default,
        }
    };
}

pub mod config;
mod data;
mod error;
pub mod logging;
pub mod mapper;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod source;

#[cfg(test)]
mod test;

pub use data::*;
pub use error::*;
