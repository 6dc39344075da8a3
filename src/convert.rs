//! MyFoodData -> SparkyFitness conversion
//!
//! Reads the MyFoodData export, maps each named food onto the import
//! schema and writes the SparkyFitness CSV.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::config::{ConvertConfig, PREAMBLE_LINES, PROGRESS_INTERVAL};
use crate::error::{ImportError, ImportResult};
use crate::models::{SourceColumns, TargetFood, COLUMN_MAPPING, TARGET_HEADERS};

/// Row counts for a conversion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Data rows read from the source
    pub processed: usize,
    /// Foods written to the target
    pub written: usize,
}

impl ConvertStats {
    /// Rows dropped for having no name
    pub fn skipped(&self) -> usize {
        self.processed - self.written
    }
}

/// Convert the source file named in `config` into the target file
pub fn convert_file(config: &ConvertConfig) -> ImportResult<ConvertStats> {
    tracing::info!("Reading from: {}", config.input.display());

    let input = File::open(&config.input)?;
    let output = BufWriter::new(File::create(&config.output)?);
    let stats = convert(input, output)?;

    tracing::info!(
        "Converted {} of {} rows into {}",
        stats.written,
        stats.processed,
        config.output.display()
    );
    Ok(stats)
}

/// Convert a MyFoodData CSV stream into a SparkyFitness CSV stream
///
/// The first [`PREAMBLE_LINES`] lines are skipped, the next line is the
/// column header. The target header is always written, even with no foods.
pub fn convert<R: Read, W: Write>(input: R, output: W) -> ImportResult<ConvertStats> {
    let mut input = BufReader::new(input);
    skip_preamble(&mut input, PREAMBLE_LINES)?;

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let columns = SourceColumns::from_headers(reader.headers()?);
    for column in missing_columns(&columns) {
        tracing::debug!("Missing source column, writing 0: {}", column);
    }

    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(TARGET_HEADERS)?;

    let mut stats = ConvertStats::default();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        stats.processed += 1;

        let food = match TargetFood::from_source(&columns.row(&record)) {
            Some(food) => food,
            None => {
                tracing::debug!("Skipping unnamed row {}", stats.processed);
                continue;
            }
        };

        writer.serialize(&food)?;
        stats.written += 1;

        if stats.written % PROGRESS_INTERVAL == 0 {
            tracing::info!("Processed {} foods...", stats.written);
        }
    }

    writer.flush()?;
    Ok(stats)
}

/// Mapped source columns absent from the header; their fields are written as 0
fn missing_columns(columns: &SourceColumns) -> Vec<String> {
    COLUMN_MAPPING
        .iter()
        .filter(|m| !columns.contains(m.source))
        .map(|m| format!("{} -> {}", m.source, m.field.as_str()))
        .collect()
}

/// Consume `lines` lines, failing if the input ends first
fn skip_preamble<R: BufRead>(input: &mut R, lines: usize) -> ImportResult<()> {
    let mut buf = Vec::new();
    for found in 0..lines {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            return Err(ImportError::TruncatedPreamble {
                expected: lines,
                found,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PREAMBLE: &str = "MyFoodData Nutrition Facts\nRelease 1.4\n,,,\n";

    fn run(source: &str) -> (ConvertStats, String) {
        let mut out = Vec::new();
        let stats = convert(source.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_named_rows_written_in_order() {
        let source = format!(
            "{}ID,Name,Calories,Protein (g)\n\
             1,Apple,52,0.26\n\
             2,Banana,89,1.09\n\
             3,,10,1\n\
             4,Cherry,50,1.06\n\
             5,\"Bread, wheat\",274,10.67\n",
            PREAMBLE
        );
        let (stats, out) = run(&source);

        assert_eq!(stats, ConvertStats { processed: 5, written: 4 });
        assert_eq!(stats.skipped(), 1);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], TARGET_HEADERS.join(","));
        assert!(lines[1].starts_with("Apple,USDA,"));
        assert!(lines[2].starts_with("Banana,USDA,"));
        assert!(lines[3].starts_with("Cherry,USDA,"));
        assert!(lines[4].starts_with("\"Bread, wheat\",USDA,"));
    }

    #[test]
    fn test_rows_have_every_column() {
        let source = format!("{}Name,Calories\nApple,52\nPear\n", PREAMBLE);
        let (stats, out) = run(&source);
        assert_eq!(stats.written, 2);

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        assert_eq!(reader.headers().unwrap().len(), TARGET_HEADERS.len());
        for record in reader.records() {
            let record = record.unwrap();
            assert_eq!(record.len(), TARGET_HEADERS.len());
        }
    }

    #[test]
    fn test_whitespace_name_skipped() {
        let source = format!("{}Name,Calories\n   ,52\n", PREAMBLE);
        let (stats, out) = run(&source);
        assert_eq!(stats, ConvertStats { processed: 1, written: 0 });
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_fatty_acids_converted() {
        let source = format!(
            "{}Name,\"Fatty acids, total polyunsaturated (mg)\",\"Fatty acids, total monounsaturated (mg)\"\n\
             Oil,5000,1234\n",
            PREAMBLE
        );
        let (_, out) = run(&source);

        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let headers = reader.headers().unwrap().clone();
        let record = reader.records().next().unwrap().unwrap();
        let get = |name: &str| {
            let i = headers.iter().position(|h| h == name).unwrap();
            record.get(i).unwrap().parse::<f64>().unwrap()
        };
        assert_eq!(get("polyunsaturated_fat"), 5.0);
        assert_eq!(get("monounsaturated_fat"), 1.23);
    }

    #[test]
    fn test_empty_body_writes_header_only() {
        let source = format!("{}Name,Calories\n", PREAMBLE);
        let (stats, out) = run(&source);
        assert_eq!(stats, ConvertStats::default());
        assert_eq!(out.lines().collect::<Vec<_>>(), vec![TARGET_HEADERS.join(",")]);
    }

    #[test]
    fn test_missing_columns_listed() {
        let headers = StringRecord::from(vec!["Name", "Calories", "Iron, Fe (mg)"]);
        let missing = missing_columns(&SourceColumns::from_headers(&headers));

        assert_eq!(missing.len(), COLUMN_MAPPING.len() - 2);
        assert!(missing.contains(&"Protein (g) -> protein".to_string()));
        assert!(!missing.iter().any(|m| m.starts_with("Calories")));
    }

    #[test]
    fn test_truncated_preamble() {
        let mut out = Vec::new();
        let err = convert("only one line\n".as_bytes(), &mut out).unwrap_err();
        assert!(matches!(
            err,
            ImportError::TruncatedPreamble { expected: 3, found: 1 }
        ));
    }

    #[test]
    fn test_convert_file_is_idempotent() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("source.csv");
        fs::write(
            &input,
            format!("{}Name,Calories,\"Iron, Fe (mg)\"\nApple,52,0.12\n,1,1\n", PREAMBLE),
        )
        .unwrap();
        let config = ConvertConfig {
            input,
            output: dir.path().join("out.csv"),
        };

        let first_stats = convert_file(&config).unwrap();
        let first = fs::read(&config.output).unwrap();
        let second_stats = convert_file(&config).unwrap();
        let second = fs::read(&config.output).unwrap();

        assert_eq!(first_stats, second_stats);
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_source_is_io_error() {
        let dir = tempdir().unwrap();
        let config = ConvertConfig {
            input: dir.path().join("missing.csv"),
            output: dir.path().join("out.csv"),
        };
        assert!(matches!(convert_file(&config), Err(ImportError::Io(_))));
    }
}
