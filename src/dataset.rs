//! Loading labeled training triples from disk.
//!
//! Two layouts are accepted: tab-separated `word_class, full_form, lemma`
//! lines, and a JSON array of objects with the same three fields.

use std::path::Path;

use clap::ValueEnum;
use lemma::{TrainingExample, WordClass};
use serde::Deserialize;
use tracing::info;

use crate::error::{DatasetError, Error, IoError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Tsv,
    Json,
}

#[derive(Debug, Deserialize)]
struct Record {
    word_class: String,
    full_form: String,
    lemma: String,
}

impl From<Record> for TrainingExample {
    fn from(record: Record) -> Self {
        TrainingExample::new(
            WordClass::from_tag(&record.word_class),
            record.full_form,
            record.lemma,
        )
    }
}

/// Reads the whole file at `path` and parses it as `format`.
pub async fn load<P: AsRef<Path>>(path: P, format: Format) -> Result<Vec<TrainingExample>, Error> {
    let path = path.as_ref();
    let buffer = tokio::fs::read_to_string(path)
        .await
        .map_err(|error| IoError::File(error.kind()))?;

    let examples = parse(&buffer, format)?;
    info!("loaded {} examples from {}", examples.len(), path.display());

    Ok(examples)
}

pub fn parse(buffer: &str, format: Format) -> Result<Vec<TrainingExample>, DatasetError> {
    match format {
        Format::Tsv => parse_tsv(buffer),
        Format::Json => parse_json(buffer),
    }
}

/// Blank lines and lines starting with `#` are skipped. Empty trailing
/// columns, as left by a trailing tab, are ignored.
fn parse_tsv(buffer: &str) -> Result<Vec<TrainingExample>, DatasetError> {
    buffer
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            let mut columns = text.split('\t');
            let mut column = |name| {
                columns
                    .next()
                    .filter(|value| !value.is_empty())
                    .ok_or(DatasetError::MissingColumn { line, column: name })
            };

            let word_class = column("word_class")?;
            let full_form = column("full_form")?;
            let lemma = column("lemma")?;

            if let Some(value) = columns.find(|value| !value.is_empty()) {
                return Err(DatasetError::ExtraColumn {
                    line,
                    value: value.to_string(),
                });
            }

            Ok(TrainingExample::new(
                WordClass::from_tag(word_class),
                full_form,
                lemma,
            ))
        })
        .collect()
}

fn parse_json(buffer: &str) -> Result<Vec<TrainingExample>, DatasetError> {
    let records: Vec<Record> =
        serde_json::from_str(buffer).map_err(|error| DatasetError::Json(error.to_string()))?;

    Ok(records.into_iter().map(TrainingExample::from).collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lemma::{TrainingExample, WordClass};

    use super::{load, parse, Format};
    use crate::error::{DatasetError, Error, IoError};

    #[test]
    fn test_parse_tsv() {
        let buffer = "# class\tform\tlemma\nnoun\thuset\thus\n\nadjective\tgamle\tgammel\r\n";
        let examples = parse(buffer, Format::Tsv).unwrap();

        assert_eq!(
            examples,
            vec![
                TrainingExample::new("noun", "huset", "hus"),
                TrainingExample::new(WordClass::ADJECTIVE, "gamle", "gammel"),
            ]
        );
    }

    #[test]
    fn test_parse_tsv_missing_column() {
        let buffer = "noun\thuset\thus\nverb\tkastede\n";

        assert_eq!(
            parse(buffer, Format::Tsv),
            Err(DatasetError::MissingColumn {
                line: 2,
                column: "lemma",
            })
        );
    }

    #[test]
    fn test_parse_tsv_extra_column() {
        let buffer = "noun\thuset\thus\t1\n";

        assert_eq!(
            parse(buffer, Format::Tsv),
            Err(DatasetError::ExtraColumn {
                line: 1,
                value: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_tsv_trailing_tab() {
        let buffer = "noun\thuset\thus\t\nnoun\tnumre\tnummer\t\t\n";

        assert_eq!(
            parse(buffer, Format::Tsv),
            Ok(vec![
                TrainingExample::new("noun", "huset", "hus"),
                TrainingExample::new("noun", "numre", "nummer"),
            ])
        );
    }

    #[test]
    fn test_parse_tsv_extra_column_after_empty() {
        let buffer = "noun\thuset\thus\t\t1\n";

        assert_eq!(
            parse(buffer, Format::Tsv),
            Err(DatasetError::ExtraColumn {
                line: 1,
                value: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_json() {
        let buffer = r#"[
            { "word_class": "noun", "full_form": "fisk", "lemma": "fiskeri" },
            { "word_class": "verb", "full_form": "kastede", "lemma": "kaste" }
        ]"#;

        let examples = parse(buffer, Format::Json).unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0], TrainingExample::new("noun", "fisk", "fiskeri"));
    }

    #[test]
    fn test_parse_json_malformed() {
        assert!(matches!(
            parse("[{ \"word_class\": \"noun\" }]", Format::Json),
            Err(DatasetError::Json(_))
        ));
    }

    #[tokio::test]
    async fn test_load_tsv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "noun\tfisk\tfiskeri").unwrap();
        writeln!(file, "noun\tged\tgedde").unwrap();

        let examples = load(file.path(), Format::Tsv).await.unwrap();

        assert_eq!(examples.len(), 2);
        assert_eq!(examples[1].lemma, "gedde");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = load("does/not/exist.tsv", Format::Tsv).await;

        assert!(matches!(
            result,
            Err(Error::Io(IoError::File(std::io::ErrorKind::NotFound)))
        ));
    }
}
