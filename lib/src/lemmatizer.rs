//! The lookup dispatcher.
//!
//! A [`Lemmatizer`] answers from the current exception snapshot first and
//! falls back to the rule engine. Training builds a complete new
//! [`ExceptionTable`] before swapping it in, so concurrent readers observe
//! either the old table or the new one.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::{
    candidates::Candidates,
    config::LemmatizerConfig,
    engine::RuleEngine,
    error::{Error, Result},
    exceptions::ExceptionTable,
    rule::RuleTable,
    trainer::{Trainer, TrainingExample},
    word_class::WordClass,
};

#[derive(Debug)]
pub struct Lemmatizer {
    engine: RuleEngine,
    exceptions: RwLock<Arc<ExceptionTable>>,
    config: LemmatizerConfig,
}

impl Lemmatizer {
    pub fn new(rules: RuleTable) -> Self {
        Self::with_exceptions(rules, ExceptionTable::default())
    }

    /// Uses a pre-built exception table instead of training.
    pub fn with_exceptions(rules: RuleTable, exceptions: ExceptionTable) -> Self {
        Self {
            engine: RuleEngine::new(rules),
            exceptions: RwLock::new(Arc::new(exceptions)),
            config: LemmatizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LemmatizerConfig) -> Self {
        self.config = config;
        self
    }

    #[inline]
    pub fn config(&self) -> &LemmatizerConfig {
        &self.config
    }

    #[inline]
    pub fn rules(&self) -> &RuleTable {
        self.engine.rules()
    }

    /// The exception table currently in use.
    pub fn snapshot(&self) -> Arc<ExceptionTable> {
        self.exceptions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the exception table.
    pub fn install(&self, table: ExceptionTable) {
        let table = Arc::new(table);
        *self
            .exceptions
            .write()
            .unwrap_or_else(PoisonError::into_inner) = table;
    }

    /// Learns a fresh exception table from `examples` and installs it.
    ///
    /// On error the previously installed table stays in place.
    pub fn fit<'a, I>(&self, examples: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        let table = Trainer::new(self.engine.clone()).fit(examples)?;
        debug!("installing exception table with {} forms", table.len());
        self.install(table);
        Ok(())
    }

    #[inline]
    pub fn apply_rules(&self, class: &WordClass, full_form: &str) -> Result<Candidates> {
        self.engine.apply_rules(class, full_form)
    }

    /// Returns the lemma of `full_form`.
    ///
    /// Exceptions take precedence over the rules. An exception entry with
    /// several lemmas is resolved by the configured
    /// [`TieBreak`](crate::config::TieBreak).
    pub fn lemmatize(&self, class: &WordClass, full_form: &str) -> Result<String> {
        self.ensure_known(class)?;

        let snapshot = self.snapshot();

        if let Some(entry) = snapshot.get(class, full_form) {
            return entry
                .select(self.config.tie_break)
                .map(str::to_string)
                .ok_or_else(|| Error::AmbiguousLemma {
                    class: class.clone(),
                    full_form: full_form.to_string(),
                    candidates: entry.lemmas().map(str::to_string).collect(),
                });
        }

        let candidates = self.engine.apply_rules(class, full_form)?;
        Ok(candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| full_form.to_string()))
    }

    /// Returns every candidate lemma of `full_form`, leaving the choice to the
    /// caller. Exception lemmas come in first-observed order.
    pub fn candidates(&self, class: &WordClass, full_form: &str) -> Result<Candidates> {
        self.ensure_known(class)?;

        match self.snapshot().get(class, full_form) {
            Some(entry) => Ok(entry.candidates()),
            None => self.engine.apply_rules(class, full_form),
        }
    }

    fn ensure_known(&self, class: &WordClass) -> Result<()> {
        if self.rules().contains(class) {
            Ok(())
        } else {
            Err(Error::UnknownWordClass(class.clone()))
        }
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new(RuleTable::danish())
    }
}
