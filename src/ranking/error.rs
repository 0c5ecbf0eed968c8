use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OperatingPointError {
    #[error("ratio must be between 0.0 and 1.0, got {value}")]
    InvalidRatio { value: f32 },

    #[error("cap must be at least 1, got {value}")]
    InvalidCap { value: usize },
}
