#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Borrow(#[from] cairo::BorrowError),
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error(transparent)]
    Os(#[from] winit::error::OsError),
    #[error(transparent)]
    Pixels(#[from] pixels::Error),

    #[error("frame size mismatch: {0} bytes")]
    FrameSize(usize),
    #[error("invalid surface size: {0}x{1}")]
    SurfaceSize(u32, u32),
}
