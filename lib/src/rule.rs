//! Suffix rules and the per-class [`RuleTable`].
//!
//! A [`Rule`] rewrites the end of a full form: when the form ends with
//! `full_form_suffix`, that suffix is stripped and `lemma_suffix` appended.
//! Rules of a class are tried in order and the first match wins, so more
//! specific suffixes must be listed before the general ones.

extern crate hashbrown;

use hashbrown::HashMap;

use crate::{error::RuleError, word_class::WordClass};

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Rule {
    full_form_suffix: String,
    lemma_suffix: String,
}

impl Rule {
    #[inline]
    pub fn new<S: Into<String>, L: Into<String>>(full_form_suffix: S, lemma_suffix: L) -> Self {
        Self {
            full_form_suffix: full_form_suffix.into(),
            lemma_suffix: lemma_suffix.into(),
        }
    }

    #[inline]
    pub fn full_form_suffix(&self) -> &str {
        &self.full_form_suffix
    }

    #[inline]
    pub fn lemma_suffix(&self) -> &str {
        &self.lemma_suffix
    }

    /// An empty suffix matches every form.
    #[inline]
    pub fn is_catch_all(&self) -> bool {
        self.full_form_suffix.is_empty()
    }

    /// Returns the rewritten form, or `None` if the suffix does not match.
    pub fn apply(&self, full_form: &str) -> Option<String> {
        full_form
            .strip_suffix(self.full_form_suffix.as_str())
            .map(|stem| {
                let mut lemma = String::with_capacity(stem.len() + self.lemma_suffix.len());
                lemma.push_str(stem);
                lemma.push_str(&self.lemma_suffix);
                lemma
            })
    }
}

impl<S: Into<String>, L: Into<String>> From<(S, L)> for Rule {
    #[inline]
    fn from((full_form_suffix, lemma_suffix): (S, L)) -> Self {
        Self::new(full_form_suffix, lemma_suffix)
    }
}

/// Ordered rule lists keyed by word class. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleTable {
    inner: HashMap<WordClass, Vec<Rule>>,
}

impl RuleTable {
    #[inline]
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// The curated Danish rule set.
    pub fn danish() -> Self {
        let classes: [(WordClass, &[(&str, &str)]); 4] = [
            (WordClass::ADJECTIVE, DANISH_ADJECTIVE),
            (WordClass::ADVERB, DANISH_ADVERB),
            (WordClass::VERB, DANISH_VERB),
            (WordClass::NOUN, DANISH_NOUN),
        ];

        let inner = classes
            .into_iter()
            .map(|(class, rules)| (class, rules.iter().copied().map(Rule::from).collect()))
            .collect();

        Self { inner }
    }

    #[inline]
    pub fn rules(&self, class: &WordClass) -> Option<&[Rule]> {
        self.inner.get(class).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, class: &WordClass) -> bool {
        self.inner.contains_key(class)
    }

    #[inline]
    pub fn classes(&self) -> impl Iterator<Item = &WordClass> {
        self.inner.keys()
    }

    /// Number of word classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::danish()
    }
}

#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    inner: HashMap<WordClass, Vec<Rule>>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rule list of `class`, replacing any earlier list.
    pub fn insert<R, I>(&mut self, class: WordClass, rules: I) -> &mut Self
    where
        R: Into<Rule>,
        I: IntoIterator<Item = R>,
    {
        self.inner
            .insert(class, rules.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a single rule to the end of the list of `class`.
    pub fn push<R: Into<Rule>>(&mut self, class: WordClass, rule: R) -> &mut Self {
        self.inner.entry(class).or_default().push(rule.into());
        self
    }

    pub fn build(self) -> Result<RuleTable, RuleError> {
        for (class, rules) in self.inner.iter() {
            let last = rules.len().saturating_sub(1);

            if let Some(position) = rules.iter().position(Rule::is_catch_all) {
                if position != last {
                    return Err(RuleError::CatchAllNotLast {
                        class: class.clone(),
                        position,
                    });
                }
            }
        }

        Ok(RuleTable { inner: self.inner })
    }
}

const DANISH_ADJECTIVE: &[(&str, &str)] = &[
    ("mle", "mmel"),
    ("elt", "el"),
    ("mme", "m"),
    ("øst", "øs"),
    ("ede", "et"),
    ("ngt", "ng"),
    ("dt", "d"),
    ("lle", "l"),
    ("igt", "ig"),
    ("tte", "t"),
    ("ist", "is"),
    ("ivt", "iv"),
    ("rit", "ri"),
    ("vne", "ven"),
    ("alt", "al"),
    ("nne", "n"),
    ("rt", "r"),
    ("kne", "ken"),
    ("ent", "en"),
    ("øjt", "øj"),
    ("ønt", "øn"),
    ("sne", "ssen"),
    ("ilt", "il"),
    ("rkt", "rk"),
    ("blåt", "blå"),
    ("gne", "gen"),
    ("ldne", "lden"),
    ("adne", "aden"),
    ("dne", "dden"),
    ("ble", "bel"),
    ("bne", "ben"),
    ("tne", "ten"),
    ("ppe", "p"),
    ("lt", "l"),
    ("somt", "som"),
    ("e", ""),
];

const DANISH_ADVERB: &[(&str, &str)] = &[];

const DANISH_VERB: &[(&str, &str)] = &[
    ("ede", "e"),
    ("re", "re"),
    ("te", "e"),
    ("er", "e"),
    ("dt", "de"),
    ("st", "se"),
    ("t", ""),
];

// Listed before the plural endings they would otherwise fall through to.
const DANISH_NOUN: &[(&str, &str)] = &[
    ("numre", "nummer"),
    ("derne", "de"),
    ("ttet", "t"),
    ("alen", "ale"),
    ("ejde", "ejde"),
    ("ale", "ale"),
    ("strene", "ster"),
    ("dlet", "ddel"),
    ("lykker", "lykke"),
    ("møde", "møde"),
    ("rykket", "ryk"),
    ("stret", "ster"),
    ("sret", "sret"),
    ("nner", "n"),
    ("nnerne", "n"),
    ("asken", "aske"),
    ("aske", "aske"),
    ("ttene", "t"),
    ("iker", "iker"),
    ("kerne", "ker"),
    ("tter", "t"),
    ("lser", "lse"),
    ("llerne", "lle"),
    ("llene", "l"),
    ("lgerne", "lger"),
    ("unger", "unge"),
    ("mænd", "mand"),
    ("erne", ""),
    ("ene", ""),
    ("et", ""),
    ("en", ""),
    ("er", ""),
    ("e", ""),
];

#[cfg(test)]
mod tests {
    use super::{Rule, RuleTable};
    use crate::{error::RuleError, word_class::WordClass};

    #[test]
    fn test_rule_apply_match() {
        let rule = Rule::new("ede", "e");
        assert_eq!(rule.apply("kastede"), Some("kaste".to_string()));
    }

    #[test]
    fn test_rule_apply_no_match() {
        let rule = Rule::new("ede", "e");
        assert_eq!(rule.apply("kaste"), None);
    }

    #[test]
    fn test_rule_apply_catch_all() {
        let rule = Rule::new("", "");
        assert!(rule.is_catch_all());
        assert_eq!(rule.apply("hus"), Some("hus".to_string()));
        assert_eq!(Rule::new("", "s").apply("hus"), Some("huss".to_string()));
    }

    #[test]
    fn test_rule_apply_multibyte_suffix() {
        let rule = Rule::new("mænd", "mand");
        assert_eq!(rule.apply("fiskermænd"), Some("fiskermand".to_string()));
    }

    #[test]
    fn test_rule_apply_case_sensitive() {
        let rule = Rule::new("et", "");
        assert_eq!(rule.apply("HUSET"), None);
    }

    #[test]
    fn test_rule_table_danish() {
        let table = RuleTable::danish();

        assert_eq!(table.len(), 4);
        assert_eq!(table.rules(&WordClass::ADJECTIVE).map(|rules| rules.len()), Some(36));
        assert_eq!(table.rules(&WordClass::ADVERB).map(|rules| rules.len()), Some(0));
        assert_eq!(table.rules(&WordClass::VERB).map(|rules| rules.len()), Some(7));
        assert_eq!(table.rules(&WordClass::NOUN).map(|rules| rules.len()), Some(33));
        assert!(!table.contains(&WordClass::from("pron")));
    }

    #[test]
    fn test_rule_table_builder_order() {
        let mut builder = RuleTable::builder();
        builder
            .insert(WordClass::ADJECTIVE, [("mle", "mmel")])
            .push(WordClass::ADJECTIVE, ("e", ""));
        let table = builder.build().unwrap();

        let rules = table.rules(&WordClass::ADJECTIVE).unwrap();
        assert_eq!(rules[0], Rule::new("mle", "mmel"));
        assert_eq!(rules[1], Rule::new("e", ""));
    }

    #[test]
    fn test_rule_table_builder_catch_all_last() {
        let mut builder = RuleTable::builder();
        builder.insert(WordClass::NOUN, [("et", ""), ("", "")]);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_rule_table_builder_catch_all_shadowing() {
        let mut builder = RuleTable::builder();
        builder.insert(WordClass::NOUN, [("", ""), ("et", "")]);

        assert_eq!(
            builder.build(),
            Err(RuleError::CatchAllNotLast {
                class: WordClass::NOUN,
                position: 0,
            })
        );
    }

    #[test]
    fn test_rule_table_danish_is_valid() {
        let danish = RuleTable::danish();
        let mut builder = RuleTable::builder();

        for class in danish.classes() {
            builder.insert(class.clone(), danish.rules(class).unwrap().to_vec());
        }

        assert_eq!(builder.build(), Ok(danish));
    }
}
