use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabelError {
    #[error("cannot decode label: {label:?}")]
    Decode { label: String },

    #[error("decoded label is not valid UTF-8: {label:?}")]
    NotUtf8 { label: String },

    #[error("name {name:?} is too long to fit in {max_length} characters with a cluster prefix")]
    NameTooLong { name: String, max_length: usize },
}

pub type LabelResult<T> = Result<T, LabelError>;
