use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use super::DatasetOptions;

/// Read every headline from the delimited file at `path`.
pub fn read_headlines<P: AsRef<Path>>(path: P, options: &DatasetOptions) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Could not open file {}", path.display()))?;

    let headlines = headlines_from_reader(file, options)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    debug!(
        path = %path.display(),
        records = headlines.len(),
        "Loaded headlines"
    );
    Ok(headlines)
}

/// Read every headline from delimited data. The header record is discarded.
///
/// Records may have differing field counts, but each one must reach the
/// headline column.
pub fn headlines_from_reader<R: Read>(reader: R, options: &DatasetOptions) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut headlines = Vec::new();
    for result in reader.records() {
        let record = result.context("Failed to parse record")?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let headline = record.get(options.headline_column).with_context(|| {
            format!(
                "Record on line {line} has {} fields, no headline at column {}",
                record.len(),
                options.headline_column
            )
        })?;
        headlines.push(headline.to_string());
    }

    Ok(headlines)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
id,title,publication,author,headline
1,x,Times,A,The Cat Sat
2,x,Post,B,\"the cat, again, ran\"
3,x,Wire,C,dogs bark
";

    #[test]
    fn test_skips_header_and_extracts_column() {
        let headlines = headlines_from_reader(SAMPLE.as_bytes(), &DatasetOptions::default()).unwrap();
        assert_eq!(
            headlines,
            vec!["The Cat Sat", "the cat, again, ran", "dogs bark"]
        );
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let headlines =
            headlines_from_reader("a,b,c,d,headline\n".as_bytes(), &DatasetOptions::default())
                .unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn test_custom_column_and_delimiter() {
        let data = "title\theadline\nfirst\tRates Rise\nsecond\tStocks Fall\n";
        let options = DatasetOptions {
            headline_column: 1,
            delimiter: b'\t',
        };
        let headlines = headlines_from_reader(data.as_bytes(), &options).unwrap();
        assert_eq!(headlines, vec!["Rates Rise", "Stocks Fall"]);
    }

    #[test]
    fn test_short_record_is_an_error() {
        let data = "a,b,c,d,headline\n1,2,3,4,fine\n1,2\n";
        let err = headlines_from_reader(data.as_bytes(), &DatasetOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 3"), "unexpected message: {message}");
        assert!(message.contains("column 4"), "unexpected message: {message}");
    }

    #[test]
    fn test_missing_file() {
        let err = read_headlines("/nonexistent/news.csv", &DatasetOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Could not open file"));
    }
}
