use std::io::{self, Write};

use lemma::{ExceptionTable, Lemmatizer, LemmatizerConfig, TrainingExample, WordClass};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::{Evaluate, Lemmatize, Train},
    dataset,
    error::{Error, IoError},
};

#[derive(Debug, Serialize)]
struct LemmaRecord<'a> {
    word_class: &'a str,
    full_form: &'a str,
    lemmas: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct ExceptionRecord<'a> {
    word_class: &'a str,
    full_form: &'a str,
    lemma: &'a str,
    count: usize,
}

#[derive(Debug, Default, PartialEq)]
pub struct Accuracy {
    pub total: usize,
    pub rules: usize,
    pub lemmatizer: usize,
}

impl Accuracy {
    fn ratio(hits: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }
}

pub async fn lemmatize(args: Lemmatize) -> Result<(), Error> {
    let lemmatizer =
        Lemmatizer::default().with_config(LemmatizerConfig::new(args.tie_break.into()));

    if let Some(path) = &args.train {
        let examples = dataset::load(path, args.format).await?;
        lemmatizer.fit(&examples)?;
    }

    let mut stdout = io::stdout().lock();

    for word in &args.words {
        let lemmas = if args.all {
            lemmatizer.candidates(&args.class, word)?.into_vec()
        } else {
            vec![lemmatizer.lemmatize(&args.class, word)?]
        };

        let line = if args.json {
            let record = LemmaRecord {
                word_class: args.class.as_str(),
                full_form: word,
                lemmas,
            };
            to_json(&record)?
        } else {
            format!("{word}\t{}", lemmas.join(","))
        };

        write_line(&mut stdout, &line)?;
    }

    Ok(())
}

pub async fn train(args: Train) -> Result<(), Error> {
    let examples = dataset::load(&args.train, args.format).await?;
    let lemmatizer = Lemmatizer::default();
    lemmatizer.fit(&examples)?;

    let table = lemmatizer.snapshot();
    let records = exception_records(&table);
    info!("learned {} exceptions", records.len());

    let mut stdout = io::stdout().lock();

    if args.json {
        write_line(&mut stdout, &to_json(&records)?)?;
    } else {
        for record in &records {
            let line = format!(
                "{}\t{}\t{}\t{}",
                record.word_class, record.full_form, record.lemma, record.count
            );
            write_line(&mut stdout, &line)?;
        }
    }

    Ok(())
}

pub async fn evaluate(args: Evaluate) -> Result<(), Error> {
    let train = dataset::load(&args.train, args.format).await?;
    let test = dataset::load(&args.test, args.format).await?;

    let lemmatizer =
        Lemmatizer::default().with_config(LemmatizerConfig::new(args.tie_break.into()));
    lemmatizer.fit(&train)?;

    let accuracy = score(&lemmatizer, &test)?;
    let mut stdout = io::stdout().lock();

    write_line(
        &mut stdout,
        &format!(
            "rules\t{}/{}\t{:.4}",
            accuracy.rules,
            accuracy.total,
            Accuracy::ratio(accuracy.rules, accuracy.total)
        ),
    )?;
    write_line(
        &mut stdout,
        &format!(
            "rules+exceptions\t{}/{}\t{:.4}",
            accuracy.lemmatizer,
            accuracy.total,
            Accuracy::ratio(accuracy.lemmatizer, accuracy.total)
        ),
    )?;

    Ok(())
}

/// Counts exact matches of the bare rules and of the full lemmatizer.
/// Ambiguous exception entries count as misses under the reject policy.
pub fn score(lemmatizer: &Lemmatizer, examples: &[TrainingExample]) -> Result<Accuracy, Error> {
    let mut accuracy = Accuracy::default();

    for example in examples {
        accuracy.total += 1;

        let class = &example.word_class;
        let predicted = lemmatizer.apply_rules(class, &example.full_form)?;

        if predicted.is_single() && predicted.contains(&example.lemma) {
            accuracy.rules += 1;
        }

        match lemmatizer.lemmatize(class, &example.full_form) {
            Ok(lemma) if lemma == example.lemma => accuracy.lemmatizer += 1,
            Ok(_) | Err(lemma::Error::AmbiguousLemma { .. }) => {}
            Err(error) => return Err(error.into()),
        }
    }

    Ok(accuracy)
}

fn exception_records(table: &ExceptionTable) -> Vec<ExceptionRecord<'_>> {
    let mut records = table
        .iter()
        .flat_map(|(class, full_form, entry)| {
            entry.iter().map(move |observation| ExceptionRecord {
                word_class: WordClass::as_str(class),
                full_form,
                lemma: observation.lemma(),
                count: observation.count(),
            })
        })
        .collect::<Vec<_>>();

    records.sort();
    records
}

fn to_json<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value)
        .map_err(|error| crate::error::DatasetError::Json(error.to_string()).into())
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<(), Error> {
    writeln!(writer, "{line}").map_err(|error| IoError::File(error.kind()).into())
}
