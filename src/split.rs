//! Batch splitting
//!
//! Re-chunks the SparkyFitness CSV into numbered batch files so the import
//! can be run a piece at a time.

use std::fs::{self, File};
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::config::SplitConfig;
use crate::error::{ImportError, ImportResult};

/// A batch file written by the splitter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFile {
    /// 1-based batch number
    pub index: usize,
    pub path: PathBuf,
    pub rows: usize,
}

/// Result of a split run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitStats {
    pub batches: Vec<BatchFile>,
}

impl SplitStats {
    /// Number of batch files written
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Data rows across all batches
    pub fn total_rows(&self) -> usize {
        self.batches.iter().map(|b| b.rows).sum()
    }
}

/// File name of batch `index`, zero padded to at least two digits
pub fn batch_file_name(index: usize) -> String {
    format!("batch_{:02}.csv", index)
}

/// Split the file named in `config` into its batch directory
pub fn split_file(config: &SplitConfig) -> ImportResult<SplitStats> {
    config.validate()?;

    let input = File::open(&config.input)?;
    split(input, &config.output_dir, config.batch_size)
}

/// Split a CSV stream into batch files of at most `batch_size` rows
///
/// `output_dir` is created if missing. Existing batch files with the same
/// names are overwritten, other files are left alone. Every batch carries
/// the input header. A header-only input produces no batches.
pub fn split<R: Read>(input: R, output_dir: &Path, batch_size: usize) -> ImportResult<SplitStats> {
    if batch_size == 0 {
        return Err(ImportError::InvalidBatchSize);
    }

    fs::create_dir_all(output_dir)?;

    let mut reader = ReaderBuilder::new().from_reader(input);
    let headers = reader.headers()?.clone();

    let mut stats = SplitStats::default();
    let mut batch: Vec<StringRecord> = Vec::new();

    for record in reader.records() {
        batch.push(record?);

        if batch.len() >= batch_size {
            let index = stats.batches.len() + 1;
            stats.batches.push(write_batch(output_dir, index, &headers, &batch)?);
            batch.clear();
        }
    }

    if !batch.is_empty() {
        let index = stats.batches.len() + 1;
        stats.batches.push(write_batch(output_dir, index, &headers, &batch)?);
    }

    Ok(stats)
}

fn write_batch(
    output_dir: &Path,
    index: usize,
    headers: &StringRecord,
    rows: &[StringRecord],
) -> ImportResult<BatchFile> {
    let path = output_dir.join(batch_file_name(index));

    let file = BufWriter::new(File::create(&path)?);
    let mut writer = WriterBuilder::new().from_writer(file);
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::info!("Created {} ({} foods)", path.display(), rows.len());

    Ok(BatchFile {
        index,
        path,
        rows: rows.len(),
    })
}
