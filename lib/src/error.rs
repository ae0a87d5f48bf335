extern crate thiserror;

use thiserror::Error;

use crate::word_class::WordClass;

/// Error type.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Unknown word class: {0}")]
    UnknownWordClass(WordClass),

    #[error("Ambiguous lemma for {class} '{full_form}': {candidates:?}")]
    AmbiguousLemma {
        class: WordClass,
        full_form: String,
        candidates: Vec<String>,
    },

    #[error("{0}")]
    Rule(#[from] RuleError),
}

/// Rule table construction error.
#[derive(Debug, Error, PartialEq)]
pub enum RuleError {
    #[error("Catch-all rule for {class} at position {position} shadows the rules after it")]
    CatchAllNotLast { class: WordClass, position: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
