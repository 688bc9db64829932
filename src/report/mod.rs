//! Per-stage outcome tracking and terminal summaries.

pub mod format;

pub use format::*;

use std::path::PathBuf;

/// One input (rating or file) that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    pub item: String,
    pub message: String,
}

/// Result of running one pipeline stage over many independent inputs.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<ItemFailure>,
}

impl BatchReport {
    /// Fold per-item results (in input order) into a report.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<PathBuf, ItemFailure>>,
    {
        let mut report = Self::default();
        for result in results {
            match result {
                Ok(path) => report.written.push(path),
                Err(failure) => report.failed.push(failure),
            }
        }
        report
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_results_splits_successes_and_failures() {
        let report = BatchReport::from_results(vec![
            Ok(PathBuf::from("a.svg")),
            Err(ItemFailure {
                item: "b".to_string(),
                message: "boom".to_string(),
            }),
            Ok(PathBuf::from("c.svg")),
        ]);
        assert_eq!(report.written, vec![PathBuf::from("a.svg"), PathBuf::from("c.svg")]);
        assert_eq!(report.failed.len(), 1);
        assert!(!report.is_clean());
    }
}
