#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no <{tag} class=\"{class}\"> element found")]
    NotFound { tag: String, class: String },

    #[error("cannot parse date from {text:?}")]
    DateParse { text: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid selector {0}")]
    Selector(String),

    #[error("dictionary line {line}: {reason}")]
    Dictionary { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
