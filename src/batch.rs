//! Batch processing of PDF directories.
//!
//! Each document is independent and side-effect-free, so files are
//! processed in parallel with rayon. A corrupt file is logged and counted
//! as failed; it never aborts the rest of the run.

use crate::config::OutlineOptions;
use crate::error::{Error, Result};
use crate::extract::{extract_lines_from_path, ExtractOptions};
use crate::render::{to_json, JsonFormat};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Outline extraction options applied to every document
    pub outline: OutlineOptions,

    /// JSON output format
    pub format: JsonFormat,

    /// Process documents in parallel
    pub parallel: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            outline: OutlineOptions::default(),
            format: JsonFormat::Pretty,
            parallel: true,
        }
    }
}

/// Result counts for a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Documents successfully written
    pub processed: usize,

    /// Documents that failed extraction or writing
    pub failed: usize,
}

/// Process every `*.pdf` in `input_dir`, writing `<stem>.json` outlines
/// into `output_dir`.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    if !input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "not a directory: {}",
            input_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let files = collect_pdf_files(input_dir)?;
    log::info!("batch: {} PDF file(s) in {}", files.len(), input_dir.display());

    let outcomes: Vec<bool> = if options.parallel {
        files
            .par_iter()
            .map(|path| process_one(path, output_dir, options))
            .collect()
    } else {
        files
            .iter()
            .map(|path| process_one(path, output_dir, options))
            .collect()
    };

    let processed = outcomes.iter().filter(|ok| **ok).count();
    Ok(BatchSummary {
        processed,
        failed: outcomes.len() - processed,
    })
}

/// Collect `*.pdf` paths in a directory, sorted for deterministic order.
pub fn collect_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn process_one(path: &Path, output_dir: &Path, options: &BatchOptions) -> bool {
    match outline_one(path, options) {
        Ok(json) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            let out_path = output_dir.join(format!("{stem}.json"));
            match fs::write(&out_path, json) {
                Ok(()) => {
                    log::info!("processed {} -> {}", path.display(), out_path.display());
                    true
                }
                Err(e) => {
                    log::warn!("failed to write {}: {e}", out_path.display());
                    false
                }
            }
        }
        Err(e) => {
            log::warn!("failed to process {}: {e}", path.display());
            false
        }
    }
}

fn outline_one(path: &Path, options: &BatchOptions) -> Result<String> {
    let lines = extract_lines_from_path(path, &ExtractOptions::new())?;
    let outline = crate::outline_lines(&lines, &options.outline);
    to_json(&outline, options.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_input_dir() {
        let out = tempdir().unwrap();
        let result = process_dir(
            Path::new("/nonexistent/input"),
            out.path(),
            &BatchOptions::default(),
        );
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_empty_directory() {
        let input = tempdir().unwrap();
        let out = tempdir().unwrap();
        let summary = process_dir(input.path(), out.path(), &BatchOptions::default()).unwrap();
        assert_eq!(summary, BatchSummary::default());
    }

    #[test]
    fn test_bad_file_does_not_abort_run() {
        let input = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(input.path().join("broken.pdf"), b"not really a pdf").unwrap();
        fs::write(input.path().join("notes.txt"), b"ignored").unwrap();

        let summary = process_dir(input.path(), out.path(), &BatchOptions::default()).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed, 0);
        assert!(!out.path().join("broken.json").exists());
    }

    #[test]
    fn test_collect_pdf_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"x").unwrap();
        fs::write(dir.path().join("a.PDF"), b"x").unwrap();
        fs::write(dir.path().join("c.txt"), b"x").unwrap();

        let files = collect_pdf_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }
}
