mod error;
pub use error::Error;

mod canvas;
pub use canvas::Canvas;

mod window;
pub use window::Window;
