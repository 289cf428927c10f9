//! Several catalogs from one jobs file.
//!
//! ```toml
//! [[catalog]]
//! title = "Spring Catalog"
//! base = "spr"
//! photos = ["spring/"]
//!
//! [[catalog]]
//! title = "Monochrome"
//! base = "mono"
//! photos = ["mono/01.jpg", "mono/02.jpg"]
//! ```
//!
//! Relative photo paths resolve against the directory of the jobs file.
//!
//! Running a batch has two phases:
//!
//! 1. **Prepare**: every job is scanned and validated, and suggested file
//!    names are checked for collisions. Any problem here fails the whole
//!    batch before a single page is drawn.
//! 2. **Render**: jobs run in parallel on the rayon pool. Each job owns its
//!    layout cursor, backend and document; one failing job does not stop
//!    or disturb the others.

use crate::catalog::{self, CatalogError, CatalogInput, CatalogSummary};
use crate::codes::catalog_filename;
use crate::config::CatalogConfig;
use crate::request::{CatalogRequest, RequestError};
use crate::scan::{self, ScanError};
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid jobs file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Jobs file defines no catalogs")]
    Empty,
    #[error("Job {index} ({title}): {source}")]
    Scan {
        index: usize,
        title: String,
        source: ScanError,
    },
    #[error("Job {index} ({title}): {source}")]
    Request {
        index: usize,
        title: String,
        source: RequestError,
    },
    #[error("Jobs {first} and {second} would both write {filename}")]
    DuplicateFilename {
        filename: String,
        first: usize,
        second: usize,
    },
}

/// One `[[catalog]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchJob {
    pub title: String,
    pub base: String,
    /// Files and directories, in order.
    pub photos: Vec<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
    #[serde(rename = "catalog", default)]
    pub catalogs: Vec<BatchJob>,
}

/// Parse a jobs file from TOML text.
pub fn parse_batch(text: &str) -> Result<BatchFile, BatchError> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a jobs file.
pub fn load_batch_file(path: &Path) -> Result<BatchFile, BatchError> {
    let text = std::fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&text)
}

/// A validated job, ready to render.
#[derive(Debug, Clone)]
pub struct PreparedJob {
    /// 1-based position in the jobs file.
    pub index: usize,
    pub filename: String,
    pub input: CatalogInput,
}

/// Scan and validate every job. Fails on the first problem found.
pub fn prepare_jobs(
    file: BatchFile,
    base_dir: &Path,
    date: NaiveDate,
) -> Result<Vec<PreparedJob>, BatchError> {
    if file.catalogs.is_empty() {
        return Err(BatchError::Empty);
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut prepared = Vec::with_capacity(file.catalogs.len());

    for (i, job) in file.catalogs.into_iter().enumerate() {
        let index = i + 1;
        let paths: Vec<PathBuf> = job.photos.iter().map(|p| base_dir.join(p)).collect();
        let photos = scan::collect_photos(&paths).map_err(|source| BatchError::Scan {
            index,
            title: job.title.clone(),
            source,
        })?;

        let title = job.title.clone();
        let input = CatalogRequest {
            title: job.title,
            base: job.base,
            photos,
        }
        .into_input(date)
        .map_err(|source| BatchError::Request {
            index,
            title,
            source,
        })?;

        let filename = catalog_filename(&input.title);
        if let Some(&first) = seen.get(&filename) {
            return Err(BatchError::DuplicateFilename {
                filename,
                first,
                second: index,
            });
        }
        seen.insert(filename.clone(), index);

        prepared.push(PreparedJob {
            index,
            filename,
            input,
        });
    }
    Ok(prepared)
}

/// Progress events for a running batch.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    JobStarted { index: usize, title: String },
    JobFinished { index: usize, title: String, ok: bool },
}

/// Result of one job.
#[derive(Debug)]
pub struct JobOutcome {
    pub index: usize,
    pub title: String,
    pub result: Result<(PathBuf, CatalogSummary), CatalogError>,
}

/// Render and store every job in parallel. Outcomes come back in job order.
pub fn run_batch(
    jobs: Vec<PreparedJob>,
    config: &CatalogConfig,
    output_dir: &Path,
    progress: Option<Sender<BatchEvent>>,
) -> Vec<JobOutcome> {
    jobs.into_par_iter()
        .map(|job| {
            let title = job.input.title.clone();
            let send = |event| {
                if let Some(tx) = &progress {
                    tx.send(event).ok();
                }
            };
            send(BatchEvent::JobStarted {
                index: job.index,
                title: title.clone(),
            });

            let result = catalog::render_catalog(job.input, config, None).and_then(|doc| {
                let path = doc.write_to(output_dir)?;
                Ok((path, doc.summary))
            });

            send(BatchEvent::JobFinished {
                index: job.index,
                title: title.clone(),
                ok: result.is_ok(),
            });
            JobOutcome {
                index: job.index,
                title,
                result,
            }
        })
        .collect()
}
