use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing required header in {path}: {header}")]
    MissingHeader { path: PathBuf, header: String },

    #[error("duplicate column header in {path}: {header}")]
    DuplicateHeader { path: PathBuf, header: String },
}

impl IngestError {
    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }

    /// Split open-file failures from parse failures so the path shows up
    /// with the right variant.
    pub(crate) fn from_csv_error(path: &std::path::Path, error: csv::Error) -> Self {
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Self::Io {
                path: path.to_path_buf(),
                source,
            },
            other => Self::Csv {
                path: path.to_path_buf(),
                message: format!("{other:?}"),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
