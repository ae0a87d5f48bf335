//! The rule engine: first matching suffix rule wins.

use std::sync::Arc;

use crate::{
    candidates::Candidates,
    error::{Error, Result},
    rule::RuleTable,
    word_class::WordClass,
};

/// Applies a shared [`RuleTable`]. Cloning shares the table.
#[derive(Clone, Debug, Default)]
pub struct RuleEngine {
    rules: Arc<RuleTable>,
}

impl RuleEngine {
    #[inline]
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    #[inline]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Predicts the lemma of `full_form` from the rules of `class`.
    ///
    /// The first rule whose suffix ends `full_form` is applied. When no rule
    /// matches, the form itself is the prediction.
    pub fn apply_rules(&self, class: &WordClass, full_form: &str) -> Result<Candidates> {
        let rules = self
            .rules
            .rules(class)
            .ok_or_else(|| Error::UnknownWordClass(class.clone()))?;

        let lemma = rules
            .iter()
            .find_map(|rule| rule.apply(full_form))
            .unwrap_or_else(|| full_form.to_string());

        Ok(Candidates::Single(lemma))
    }
}

#[cfg(test)]
mod tests {
    use super::RuleEngine;
    use crate::{candidates::Candidates, error::Error, rule::RuleTable, word_class::WordClass};

    fn predict(engine: &RuleEngine, class: WordClass, full_form: &str) -> String {
        engine
            .apply_rules(&class, full_form)
            .unwrap()
            .first()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_engine_danish_verb() {
        let engine = RuleEngine::default();
        assert_eq!(predict(&engine, WordClass::VERB, "kastede"), "kaste");
        assert_eq!(predict(&engine, WordClass::VERB, "kaster"), "kaste");
        assert_eq!(predict(&engine, WordClass::VERB, "kastet"), "kaste");
    }

    #[test]
    fn test_engine_danish_noun() {
        let engine = RuleEngine::default();
        assert_eq!(predict(&engine, WordClass::NOUN, "huset"), "hus");
        assert_eq!(predict(&engine, WordClass::NOUN, "numre"), "nummer");
        assert_eq!(predict(&engine, WordClass::NOUN, "husene"), "hus");
        assert_eq!(predict(&engine, WordClass::NOUN, "fiskermænd"), "fiskermand");
    }

    #[test]
    fn test_engine_danish_adjective_priority() {
        let engine = RuleEngine::default();
        assert_eq!(predict(&engine, WordClass::ADJECTIVE, "gamle"), "gammel");
        assert_eq!(predict(&engine, WordClass::ADJECTIVE, "store"), "stor");
    }

    #[test]
    fn test_engine_priority_first_listed() {
        let mut builder = RuleTable::builder();
        builder.insert(WordClass::ADJECTIVE, [("mle", "mmel"), ("e", "")]);
        let engine = RuleEngine::new(builder.build().unwrap());

        assert_eq!(predict(&engine, WordClass::ADJECTIVE, "gamle"), "gammel");
    }

    #[test]
    fn test_engine_no_rule_returns_form() {
        let engine = RuleEngine::default();
        assert_eq!(predict(&engine, WordClass::ADVERB, "hurtigt"), "hurtigt");
        assert_eq!(predict(&engine, WordClass::NOUN, "fisk"), "fisk");
    }

    #[test]
    fn test_engine_catch_all_single_candidate() {
        let mut builder = RuleTable::builder();
        builder.insert(WordClass::NOUN, [("et", ""), ("", "")]);
        let engine = RuleEngine::new(builder.build().unwrap());

        for form in ["huset", "fisk", "a", "æblet"] {
            let candidates = engine.apply_rules(&WordClass::NOUN, form).unwrap();
            assert_eq!(candidates.len(), 1);
        }

        assert_eq!(
            engine.apply_rules(&WordClass::NOUN, "fisk").unwrap(),
            Candidates::Single("fisk".to_string())
        );
    }

    #[test]
    fn test_engine_unknown_class() {
        let engine = RuleEngine::default();
        let class = WordClass::from("pron");

        assert_eq!(
            engine.apply_rules(&class, "han"),
            Err(Error::UnknownWordClass(class.clone()))
        );
    }
}
