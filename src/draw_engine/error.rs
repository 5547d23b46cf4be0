use thiserror::Error;

/// Everything that can stop a draw before it starts.
///
/// The draw itself never fails once given a validated [`Config`]: over-full
/// pot groups degrade by dropping excess players, unknown tags are logged and
/// skipped. Only acquiring the configuration can error.
///
/// [`Config`]: crate::draw_engine::models::Config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error reading config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("error parsing config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("jumlah_tim must be greater than 0, got {0}")]
    Validation(i32),
}
