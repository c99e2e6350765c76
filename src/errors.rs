use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Value range is inverted: min {min} > max {max}.")]
    InvalidRange { min: String, max: String },
    #[error("Insert batch range is inverted: min {min} > max {max}.")]
    InvalidBatch { min: usize, max: usize },
    #[error("Normal distribution error: {0}.")]
    Distribution(#[from] rand_distr::NormalError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse {var}={value:?}.")]
    InvalidEnv { var: &'static str, value: String },
    #[error("Invalid generation parameters: {0}")]
    Gen(#[from] GenError),
}
