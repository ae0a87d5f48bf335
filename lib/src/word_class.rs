use std::{borrow::Cow, convert::Infallible, fmt, ops::Deref, str::FromStr};

/// Grammatical class that selects a rule list.
///
/// The set is open: any tag with an entry in the
/// [`RuleTable`](crate::rule::RuleTable) is a valid class.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WordClass(Cow<'static, str>);

impl WordClass {
    pub const ADJECTIVE: WordClass = WordClass(Cow::Borrowed("adj"));
    pub const ADVERB: WordClass = WordClass(Cow::Borrowed("adv"));
    pub const VERB: WordClass = WordClass(Cow::Borrowed("verb"));
    pub const NOUN: WordClass = WordClass(Cow::Borrowed("noun"));

    #[inline]
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Maps the long names of the well-known classes onto their short tags.
    /// Any other tag is kept verbatim.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "adj" | "adjective" => Self::ADJECTIVE,
            "adv" | "adverb" => Self::ADVERB,
            "verb" => Self::VERB,
            "noun" => Self::NOUN,
            other => Self::new(other),
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for WordClass {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for WordClass {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordClass {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_tag(value)
    }
}

impl From<String> for WordClass {
    #[inline]
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl FromStr for WordClass {
    type Err = Infallible;

    #[inline]
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(tag))
    }
}
