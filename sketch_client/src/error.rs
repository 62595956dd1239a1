use lyon::tessellation::TessellationError;
use sketch_core::{ConfigError, SketchError, ViewError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sketch(#[from] SketchError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible graphics adapter found")]
    NoAdapter,
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("stroke tessellation failed: {0:?}")]
    Tessellation(TessellationError),
}

impl From<TessellationError> for ClientError {
    fn from(err: TessellationError) -> Self {
        ClientError::Tessellation(err)
    }
}
