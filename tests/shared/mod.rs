use lemma::TrainingExample;

/// A small labeled Danish sample: two parallel columns, as a tabular loader
/// would hand them over.
pub(crate) fn danish_columns() -> (Vec<(&'static str, &'static str)>, Vec<&'static str>) {
    let rows = [
        (("noun", "huset"), "hus"),
        (("noun", "husene"), "hus"),
        (("noun", "numre"), "nummer"),
        (("noun", "fisk"), "fiskeri"),
        (("noun", "ged"), "ged"),
        (("noun", "ged"), "gedde"),
        (("noun", "børn"), "barn"),
        (("verb", "kastede"), "kaste"),
        (("verb", "er"), "være"),
        (("verb", "var"), "være"),
        (("adj", "gamle"), "gammel"),
        (("adj", "små"), "lille"),
        (("adv", "hurtigt"), "hurtigt"),
    ];

    rows.into_iter().unzip()
}

pub(crate) fn danish_examples() -> Vec<TrainingExample> {
    let (inputs, lemmas) = danish_columns();

    inputs
        .into_iter()
        .zip(lemmas)
        .map(TrainingExample::from)
        .collect()
}
