use std::slice::Iter;

/// One or more lemma candidates for a full form.
///
/// The rule engine always yields [`Candidates::Single`]; exception lookups
/// yield [`Candidates::Multiple`] when a homograph has several gold lemmas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Candidates {
    Single(String),
    Multiple(Vec<String>),
}

impl Candidates {
    /// Collapses a one-element list into [`Candidates::Single`].
    pub fn from_vec(mut lemmas: Vec<String>) -> Self {
        if lemmas.len() == 1 {
            if let Some(lemma) = lemmas.pop() {
                return Self::Single(lemma);
            }
        }

        Self::Multiple(lemmas)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.len() == 1
    }

    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }

    #[inline]
    pub fn contains(&self, lemma: &str) -> bool {
        self.iter().any(|candidate| candidate == lemma)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, String> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[String] {
        match self {
            Candidates::Single(lemma) => std::slice::from_ref(lemma),
            Candidates::Multiple(lemmas) => lemmas,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Candidates::Single(lemma) => vec![lemma],
            Candidates::Multiple(lemmas) => lemmas,
        }
    }
}

impl From<String> for Candidates {
    #[inline]
    fn from(value: String) -> Self {
        Candidates::Single(value)
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Candidates {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Candidates;

    #[test]
    fn test_candidates_single() {
        let candidates = Candidates::from("hus".to_string());

        assert!(candidates.is_single());
        assert_eq!(candidates.first(), Some("hus"));
        assert_eq!(candidates.into_vec(), vec!["hus".to_string()]);
    }

    #[test]
    fn test_candidates_from_vec() {
        let single = Candidates::from_vec(vec!["ged".to_string()]);
        assert_eq!(single, Candidates::Single("ged".to_string()));

        let multiple = Candidates::from_vec(vec!["ged".to_string(), "gedde".to_string()]);
        assert_eq!(multiple.len(), 2);
        assert!(multiple.contains("gedde"));
        assert!(!multiple.contains("hus"));
        assert_eq!(multiple.first(), Some("ged"));
    }
}
