//! Exception learning.
//!
//! Training runs every example through the [`RuleEngine`] and keeps the full
//! forms the rules get wrong. A form that is mispredicted at least once keeps
//! every gold lemma observed for it, so homographs whose readings split
//! between "rule is right" and "rule is wrong" stay fully represented.

extern crate hashbrown;

use std::time::Instant;

use hashbrown::HashMap;
use tracing::{debug, trace};

use crate::{
    engine::RuleEngine,
    error::{Error, Result},
    exceptions::{ExceptionEntry, ExceptionTable},
    word_class::WordClass,
};

/// One observed correct mapping.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TrainingExample {
    pub word_class: WordClass,
    pub full_form: String,
    pub lemma: String,
}

impl TrainingExample {
    pub fn new<C, F, L>(word_class: C, full_form: F, lemma: L) -> Self
    where
        C: Into<WordClass>,
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            word_class: word_class.into(),
            full_form: full_form.into(),
            lemma: lemma.into(),
        }
    }
}

/// Zips a `(word_class, full_form)` column with a `lemma` column.
impl<C, F, L> From<((C, F), L)> for TrainingExample
where
    C: Into<WordClass>,
    F: Into<String>,
    L: Into<String>,
{
    fn from(((word_class, full_form), lemma): ((C, F), L)) -> Self {
        Self::new(word_class, full_form, lemma)
    }
}

#[derive(Debug, Default)]
struct FormAccumulator {
    entry: ExceptionEntry,
    mispredicted: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Trainer {
    engine: RuleEngine,
}

impl Trainer {
    #[inline]
    pub fn new(engine: RuleEngine) -> Self {
        Self { engine }
    }

    /// Builds a fresh [`ExceptionTable`] from `examples`.
    ///
    /// Every class of the rule table gets an entry in the result, possibly
    /// empty. Fails with [`Error::UnknownWordClass`] on the first example
    /// whose class has no rules, before anything is learned.
    pub fn fit<'a, I>(&self, examples: I) -> Result<ExceptionTable>
    where
        I: IntoIterator<Item = &'a TrainingExample>,
    {
        let started = Instant::now();
        let rules = self.engine.rules();

        let mut by_class: HashMap<&WordClass, Vec<&TrainingExample>> =
            rules.classes().map(|class| (class, Vec::new())).collect();

        for example in examples {
            match by_class.get_mut(&example.word_class) {
                Some(bucket) => bucket.push(example),
                None => return Err(Error::UnknownWordClass(example.word_class.clone())),
            }
        }

        let mut builder = ExceptionTable::builder();

        for (class, examples) in by_class {
            debug!("building exceptions for word class '{class}'");
            builder.class(class.clone());

            for (full_form, accumulator) in self.accumulate(class, &examples)? {
                if accumulator.mispredicted {
                    builder.insert_entry(class.clone(), full_form, accumulator.entry);
                }
            }
        }

        let table = builder.build();

        debug!(
            "training complete: {} exceptions for {} forms in {:.2}s",
            table.lemma_count(),
            table.len(),
            started.elapsed().as_secs_f64()
        );

        Ok(table)
    }

    fn accumulate<'e>(
        &self,
        class: &WordClass,
        examples: &[&'e TrainingExample],
    ) -> Result<HashMap<&'e str, FormAccumulator>> {
        let mut forms: HashMap<&str, FormAccumulator> = HashMap::new();

        for &example in examples {
            let predicted = self.engine.apply_rules(class, &example.full_form)?;
            let accumulator = forms.entry(example.full_form.as_str()).or_default();

            accumulator.entry.observe(&example.lemma, 1);

            if !(predicted.is_single() && predicted.contains(&example.lemma)) {
                trace!(
                    "{class} '{}': predicted {:?}, expected '{}'",
                    example.full_form,
                    predicted.first(),
                    example.lemma
                );
                accumulator.mispredicted = true;
            }
        }

        Ok(forms)
    }
}
