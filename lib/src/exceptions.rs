//! Learned overrides for the rule engine.
//!
//! The [`ExceptionTable`] maps a full form of a word class to the set of gold
//! lemmas seen for it in training. Entries keep lemmas in first-observed
//! order together with their observation counts, which the dispatcher uses
//! to resolve homographs.

extern crate hashbrown;

use std::slice::Iter;

use hashbrown::HashMap;

use crate::{candidates::Candidates, config::TieBreak, util::Counter, word_class::WordClass};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    lemma: String,
    count: Counter<usize>,
}

impl Observation {
    #[inline]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

/// Gold lemmas observed for one full form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExceptionEntry {
    observations: Vec<Observation>,
}

impl ExceptionEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `count` more sightings of `lemma`.
    pub fn observe(&mut self, lemma: &str, count: usize) {
        match self
            .observations
            .iter_mut()
            .find(|observation| observation.lemma == lemma)
        {
            Some(observation) => observation.count += Counter::new(count),
            None => self.observations.push(Observation {
                lemma: lemma.to_string(),
                count: Counter::new(count),
            }),
        }
    }

    /// Number of distinct lemmas.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    #[inline]
    pub fn is_ambiguous(&self) -> bool {
        self.len() > 1
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.observations
            .iter()
            .any(|observation| observation.lemma == lemma)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Lemmas in first-observed order.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.observations.iter().map(Observation::lemma)
    }

    pub fn count(&self, lemma: &str) -> usize {
        self.observations
            .iter()
            .find(|observation| observation.lemma == lemma)
            .map_or(0, Observation::count)
    }

    pub fn candidates(&self) -> Candidates {
        Candidates::from_vec(self.lemmas().map(str::to_string).collect())
    }

    /// Picks one lemma, or `None` if the entry is empty or the policy is
    /// [`TieBreak::Reject`] and more than one lemma is present.
    pub fn select(&self, tie_break: TieBreak) -> Option<&str> {
        if !self.is_ambiguous() {
            return self.observations.first().map(Observation::lemma);
        }

        match tie_break {
            TieBreak::MostFrequent => self
                .observations
                .iter()
                .rev()
                .max_by_key(|observation| observation.count)
                .map(Observation::lemma),
            TieBreak::FirstObserved => self.observations.first().map(Observation::lemma),
            TieBreak::Alphabetical => self.lemmas().min(),
            TieBreak::Reject => None,
        }
    }
}

/// Exception sets keyed by word class and full form. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExceptionTable {
    inner: HashMap<WordClass, HashMap<String, ExceptionEntry>>,
}

impl ExceptionTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn builder() -> ExceptionTableBuilder {
        ExceptionTableBuilder::new()
    }

    #[inline]
    pub fn get(&self, class: &WordClass, full_form: &str) -> Option<&ExceptionEntry> {
        self.inner.get(class).and_then(|forms| forms.get(full_form))
    }

    #[inline]
    pub fn contains(&self, class: &WordClass, full_form: &str) -> bool {
        self.get(class, full_form).is_some()
    }

    #[inline]
    pub fn classes(&self) -> impl Iterator<Item = &WordClass> {
        self.inner.keys()
    }

    /// Full forms with exceptions in `class`.
    pub fn class_len(&self, class: &WordClass) -> usize {
        self.inner.get(class).map_or(0, HashMap::len)
    }

    /// Exception entries of one class, in no particular order.
    pub fn iter_class<'a>(
        &'a self,
        class: &WordClass,
    ) -> impl Iterator<Item = (&'a str, &'a ExceptionEntry)> + 'a {
        self.inner
            .get(class)
            .into_iter()
            .flat_map(|forms| forms.iter().map(|(form, entry)| (form.as_str(), entry)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WordClass, &str, &ExceptionEntry)> {
        self.inner.iter().flat_map(|(class, forms)| {
            forms
                .iter()
                .map(move |(form, entry)| (class, form.as_str(), entry))
        })
    }

    /// Number of full forms with exceptions, across all classes.
    pub fn len(&self) -> usize {
        self.inner.values().map(HashMap::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of (full form, lemma) pairs, across all classes.
    pub fn lemma_count(&self) -> usize {
        self.inner
            .values()
            .flat_map(HashMap::values)
            .map(ExceptionEntry::len)
            .sum()
    }
}

/// Assembles an [`ExceptionTable`] without training, or from a trainer's
/// accumulated entries.
#[derive(Debug, Default)]
pub struct ExceptionTableBuilder {
    inner: HashMap<WordClass, HashMap<String, ExceptionEntry>>,
}

impl ExceptionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `class` even if no exception is ever inserted for it.
    pub fn class(&mut self, class: WordClass) -> &mut Self {
        self.inner.entry(class).or_default();
        self
    }

    pub fn insert<S: Into<String>>(
        &mut self,
        class: WordClass,
        full_form: S,
        lemma: &str,
    ) -> &mut Self {
        self.insert_with_count(class, full_form, lemma, 1)
    }

    pub fn insert_with_count<S: Into<String>>(
        &mut self,
        class: WordClass,
        full_form: S,
        lemma: &str,
        count: usize,
    ) -> &mut Self {
        self.inner
            .entry(class)
            .or_default()
            .entry(full_form.into())
            .or_default()
            .observe(lemma, count);
        self
    }

    /// Sets the entry of `full_form`. An empty entry only registers `class`:
    /// a form without lemmas is no exception.
    pub fn insert_entry<S: Into<String>>(
        &mut self,
        class: WordClass,
        full_form: S,
        entry: ExceptionEntry,
    ) -> &mut Self {
        let forms = self.inner.entry(class).or_default();

        if !entry.is_empty() {
            forms.insert(full_form.into(), entry);
        }

        self
    }

    pub fn build(self) -> ExceptionTable {
        ExceptionTable { inner: self.inner }
    }
}
