use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read category file {path}: {source}")]
    CategoryFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse category file: {0}")]
    CategoryFileParse(#[from] serde_yaml::Error),

    #[error("category table is missing required group '{0}'")]
    MissingGroup(String),

    #[error("category table validation failed: {0}")]
    Validation(String),
}
