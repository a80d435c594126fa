use std::path::PathBuf;

/// Errors that abort a run before or during catalog loading.
///
/// Per-key problems met while pruning are not errors: they are reported as
/// [`DeleteOutcome`](crate::actions::DeleteOutcome) values and the run goes on.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The language roster or configuration could not be obtained.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A rostered language has no catalog file.
    #[error("catalog for '{language}' not found: {}", path.display())]
    MissingFile { language: String, path: PathBuf },

    /// A catalog file exists but is not a valid JSON document.
    #[error("catalog for '{language}' is not valid JSON: {}", path.display())]
    MalformedDocument {
        language: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure while reading a catalog or roster source.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CatalogError::Configuration(message.into())
    }
}
