/// How the dispatcher picks one lemma out of an ambiguous exception entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// Highest training count; equal counts resolve to the earliest observation.
    #[default]
    MostFrequent,

    /// Lemma observed first during training.
    FirstObserved,

    /// Lexicographically smallest lemma.
    Alphabetical,

    /// Refuse to choose and report [`Error::AmbiguousLemma`](crate::error::Error::AmbiguousLemma).
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LemmatizerConfig {
    pub tie_break: TieBreak,
}

impl LemmatizerConfig {
    #[inline]
    pub fn new(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}
