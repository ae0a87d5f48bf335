//! Rule-based lemmatizer for Danish.
//!
//! Ordered suffix rules give a default lemma per word class; an exception
//! table learned from labeled examples overrides the rules where they are
//! known to be wrong.
//!
//! ```
//! use lemma::{Lemmatizer, TrainingExample, WordClass};
//!
//! let lemmatizer = Lemmatizer::default();
//! assert_eq!(lemmatizer.lemmatize(&WordClass::NOUN, "huset").unwrap(), "hus");
//!
//! lemmatizer
//!     .fit(&[TrainingExample::new("noun", "fisk", "fiskeri")])
//!     .unwrap();
//! assert_eq!(lemmatizer.lemmatize(&WordClass::NOUN, "fisk").unwrap(), "fiskeri");
//! ```

pub mod candidates;
pub mod config;
pub mod engine;
pub mod error;
pub mod exceptions;
pub mod lemmatizer;
pub mod rule;
pub mod trainer;
pub mod util;
pub mod word_class;

pub use candidates::Candidates;
pub use config::{LemmatizerConfig, TieBreak};
pub use engine::RuleEngine;
pub use error::{Error, Result, RuleError};
pub use exceptions::{ExceptionEntry, ExceptionTable};
pub use lemmatizer::Lemmatizer;
pub use rule::{Rule, RuleTable};
pub use trainer::{Trainer, TrainingExample};
pub use word_class::WordClass;
