//! Feeds record files into a catalog.
//!
//! A bad line never stops ingestion: it is counted, logged, and skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shopkeep_catalog::{Catalog, CatalogResult};
use shopkeep_core::Product;
use tracing::{info, warn};

/// Outcome of ingesting one file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub applied: usize,
    pub skipped: usize,
}

/// Which kind of record a file holds.
#[derive(Debug, Clone, Copy)]
pub enum RecordFile {
    Products,
    Reviews,
}

impl RecordFile {
    fn apply(self, catalog: &mut Catalog, line: &str) -> CatalogResult<Product> {
        match self {
            RecordFile::Products => catalog.parse_product(line),
            RecordFile::Reviews => catalog.parse_review(line),
        }
    }
}

/// Reads `path` and applies every record line to `catalog`.
///
/// Blank lines and lines starting with `#` are ignored.
pub fn ingest_file(catalog: &mut Catalog, path: &Path, kind: RecordFile) -> Result<IngestSummary> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {:?} file {}", kind, path.display()))?;

    let summary = ingest_lines(catalog, &contents, kind);
    info!(
        path = %path.display(),
        applied = summary.applied,
        skipped = summary.skipped,
        "Ingested {:?} file",
        kind
    );
    Ok(summary)
}

pub fn ingest_lines(catalog: &mut Catalog, text: &str, kind: RecordFile) -> IngestSummary {
    let mut summary = IngestSummary::default();

    for (number, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match kind.apply(catalog, line) {
            Ok(_) => summary.applied += 1,
            Err(err) => {
                warn!(line = number + 1, error = %err, "Skipping record");
                summary.skipped += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkeep_core::{Rateable, Rating};

    #[test]
    fn test_ingest_skips_comments_and_bad_lines() {
        let mut catalog = Catalog::new("en-GB");
        let products = "# header\n\nD,101,Tea,1.99,0\nF,103,Cake,3.99,0\nD,102,Coffee,1.75,2\n";

        let summary = ingest_lines(&mut catalog, products, RecordFile::Products);
        assert_eq!(summary, IngestSummary { applied: 2, skipped: 1 });
        assert_eq!(catalog.len(), 2);

        let reviews = "101,5,Perfect tea\n103,5,No such cake\n";
        let summary = ingest_lines(&mut catalog, reviews, RecordFile::Reviews);
        assert_eq!(summary, IngestSummary { applied: 1, skipped: 1 });
        assert_eq!(catalog.find_product(101).unwrap().rating(), Rating::FiveStar);
    }

    #[test]
    fn test_ingest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("products.csv");
        fs::write(&path, "D,101,Tea,1.99,0\n").unwrap();

        let mut catalog = Catalog::new("en-GB");
        let summary = ingest_file(&mut catalog, &path, RecordFile::Products).unwrap();
        assert_eq!(summary.applied, 1);

        let missing = dir.path().join("missing.csv");
        assert!(ingest_file(&mut catalog, &missing, RecordFile::Reviews).is_err());
    }
}
