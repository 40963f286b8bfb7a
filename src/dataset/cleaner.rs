// ABOUTME: Chunked CSV cleaner dropping incomplete, duplicate and negative-valued rows
// ABOUTME: Stops reading once the target row count is collected and writes rows unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::dataset::{DEFAULT_CHUNK_SIZE, DEFAULT_TARGET_ROWS};
use crate::errors::{AppError, AppResult};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Field values treated as missing
const MISSING_MARKERS: [&str; 7] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

fn is_missing(field: &str) -> bool {
    let field = field.trim();
    field.is_empty() || MISSING_MARKERS.contains(&field)
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// Cleaning parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleaningOptions {
    /// Number of rows to keep
    pub target_rows: usize,
    /// Rows read per chunk
    pub chunk_size: usize,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            target_rows: DEFAULT_TARGET_ROWS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl CleaningOptions {
    /// Validate the options
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if either value is zero
    pub fn validate(&self) -> AppResult<()> {
        if self.target_rows == 0 {
            return Err(AppError::invalid_input("target rows must be greater than zero"));
        }
        if self.chunk_size == 0 {
            return Err(AppError::invalid_input("chunk size must be greater than zero"));
        }
        Ok(())
    }
}

/// Counters describing one cleaning run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleaningReport {
    /// Data rows read from the source
    pub rows_read: usize,
    /// Chunks read from the source
    pub chunks_processed: usize,
    /// Rows with an empty or NA field
    pub dropped_missing: usize,
    /// Rows identical to an earlier row
    pub dropped_duplicate: usize,
    /// Rows with a negative value in a numeric column
    pub dropped_negative: usize,
    /// Rows written to the output
    pub rows_written: usize,
    /// Whether the target row count was reached
    pub target_reached: bool,
}

/// Streams a raw recipe CSV into a cleaned one
#[derive(Debug, Clone, Default)]
pub struct DatasetCleaner {
    options: CleaningOptions,
}

impl DatasetCleaner {
    /// Create a cleaner
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the options are invalid
    pub fn new(options: CleaningOptions) -> AppResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in effect
    #[must_use]
    pub const fn options(&self) -> &CleaningOptions {
        &self.options
    }

    /// Clean `input` into a new file at `output`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` for a missing input, `INVALID_INPUT` if both
    /// paths are the same, and the errors of [`DatasetCleaner::clean`]
    #[instrument(skip(self), fields(input = %input.display(), output = %output.display()))]
    pub fn clean_file(&self, input: &Path, output: &Path) -> AppResult<CleaningReport> {
        if input == output {
            return Err(AppError::invalid_input(
                "input and output must be different files",
            ));
        }

        let source = File::open(input).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Dataset '{}'", input.display())).with_source(e)
            } else {
                AppError::storage(format!("Failed to open '{}': {e}", input.display()))
                    .with_source(e)
            }
        })?;
        let destination = File::create(output).map_err(|e| {
            AppError::storage(format!("Failed to create '{}': {e}", output.display()))
                .with_source(e)
        })?;

        let report = self.clean(BufReader::new(source), BufWriter::new(destination))?;
        info!(
            rows_written = report.rows_written,
            target_reached = report.target_reached,
            "Saved cleaned dataset"
        );
        Ok(report)
    }

    /// Clean CSV data from `input` and write the surviving rows to `output`
    ///
    /// The header and every kept row are written unchanged, in source order.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_FORMAT` for unreadable or ragged CSV and
    /// `STORAGE_ERROR` if the output cannot be written
    pub fn clean<R: io::Read, W: io::Write>(
        &self,
        input: R,
        output: W,
    ) -> AppResult<CleaningReport> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
        let headers = reader.headers().map_err(read_error)?.clone();

        let mut writer = WriterBuilder::new().from_writer(output);
        writer.write_record(&headers).map_err(write_error)?;

        let mut report = CleaningReport::default();
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut records = reader.into_records();

        while report.rows_written < self.options.target_rows {
            let chunk = records
                .by_ref()
                .take(self.options.chunk_size)
                .collect::<Result<Vec<_>, _>>()
                .map_err(read_error)?;
            if chunk.is_empty() {
                break;
            }
            report.chunks_processed += 1;
            report.rows_read += chunk.len();

            let kept = self.clean_chunk(chunk, &mut seen, &mut report);
            let room = self.options.target_rows - report.rows_written;
            for record in kept.iter().take(room) {
                writer.write_record(record).map_err(write_error)?;
            }
            report.rows_written += kept.len().min(room);

            info!(
                chunk = report.chunks_processed,
                kept = kept.len(),
                collected = report.rows_written,
                "Clean rows collected"
            );
        }

        writer
            .flush()
            .map_err(|e| AppError::storage(format!("Failed to write dataset: {e}")).with_source(e))?;
        report.target_reached = report.rows_written >= self.options.target_rows;
        Ok(report)
    }

    /// Apply the missing, duplicate and negative filters to one chunk
    fn clean_chunk(
        &self,
        chunk: Vec<StringRecord>,
        seen: &mut HashSet<Vec<String>>,
        report: &mut CleaningReport,
    ) -> Vec<StringRecord> {
        let numeric = numeric_columns(&chunk);
        debug!(
            chunk_rows = chunk.len(),
            chunk_size = self.options.chunk_size,
            numeric_columns = numeric.len(),
            "Inferred numeric columns"
        );

        chunk
            .into_iter()
            .filter(|record| {
                if record.iter().any(is_missing) {
                    report.dropped_missing += 1;
                    return false;
                }
                if !seen.insert(record.iter().map(str::to_owned).collect()) {
                    report.dropped_duplicate += 1;
                    return false;
                }
                let negative = numeric.iter().any(|&column| {
                    record
                        .get(column)
                        .and_then(parse_number)
                        .is_some_and(|value| value < 0.0)
                });
                if negative {
                    report.dropped_negative += 1;
                    return false;
                }
                true
            })
            .collect()
    }
}

/// Columns whose every non-missing value in the chunk parses as a number
fn numeric_columns(chunk: &[StringRecord]) -> Vec<usize> {
    let width = chunk.first().map_or(0, StringRecord::len);
    (0..width)
        .filter(|&column| {
            let mut values = chunk
                .iter()
                .filter_map(|record| record.get(column))
                .filter(|field| !is_missing(field))
                .peekable();
            values.peek().is_some() && values.all(|field| parse_number(field).is_some())
        })
        .collect()
}

fn read_error(error: csv::Error) -> AppError {
    if error.is_io_error() {
        AppError::storage(format!("Failed to read dataset: {error}")).with_source(error)
    } else {
        AppError::invalid_format(format!("Malformed dataset: {error}")).with_source(error)
    }
}

fn write_error(error: csv::Error) -> AppError {
    AppError::storage(format!("Failed to write dataset: {error}")).with_source(error)
}
