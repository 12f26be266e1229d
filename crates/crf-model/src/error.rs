use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrfError {
    /// The terminology table contained no usable rows for any codelist.
    /// Fatal to a compliance run; callers must surface it, not swallow it.
    #[error("terminology table has no usable rows")]
    EmptyTerminology,

    /// A column that the caller named is absent from the dataset.
    #[error("column not found in dataset: {column}")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, CrfError>;
