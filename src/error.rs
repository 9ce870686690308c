use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcbScopeError {
    /// Invalid parameter (block size, palette capacity, expansion divisor).
    #[error("config error: {0}")]
    Config(String),

    /// Input produced no complete blocks to render.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Raster geometry outside what the encoder supports.
    #[error("render error: {0}")]
    Render(String),

    /// PNG encoding failure.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// CSV report failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON report failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
