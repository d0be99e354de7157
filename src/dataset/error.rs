use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse color data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid {channel} channel for {file}: {value}")]
    InvalidChannel {
        file: String,
        channel: &'static str,
        value: f64,
    },
}
