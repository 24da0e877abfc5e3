//! Dataset load error types.

/// Errors that can occur when loading the station dataset.
///
/// Loading is the only fallible step in the pipeline; once the dataset is
/// in memory, every transformation is total.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Failed to read the dataset file
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the dataset JSON
    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DatasetError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert!(err.to_string().contains("failed to read dataset file"));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = DatasetError::Json(json_err);
        assert!(err.to_string().contains("failed to parse dataset JSON"));
    }
}
