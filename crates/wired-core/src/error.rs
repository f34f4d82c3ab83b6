use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WiredError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),

    #[error("attribute `{name}` expects a number, got `{value}`")]
    InvalidNumber { name: String, value: String },

    #[error("tag `{0}` is already defined")]
    AlreadyDefined(String),

    #[error("no factory defined for tag `{0}`")]
    UnknownTag(String),
}
