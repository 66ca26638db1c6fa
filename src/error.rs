// One error type for the fallible edges of the app (window, PNG, disk).
// Every variant states *where* things went wrong.
// Drawing itself never fails: bad gesture calls are ignored by the engine.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("window update error: {0}")]
    WindowUpdate(String), // Pushing the frame buffer failed
    #[error("drawing surface is not attached yet")]
    SurfaceUnavailable, // Export asked for before the engine has a raster
    #[error("png encode error: {0}")]
    Encode(#[from] image::ImageError),
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
}
