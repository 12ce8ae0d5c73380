pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid value {value:?} for {key}")]
    InvalidSetting { key: &'static str, value: String },

    #[error("event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}
