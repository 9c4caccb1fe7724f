//! Export report types.

use std::path::PathBuf;

use crate::error_handling::ExportError;

/// What happened to one configured export target.
#[derive(Debug)]
pub enum TableOutcome {
    /// The table was written to `path`.
    Exported {
        /// Number of rows written
        rows: usize,
        /// Output file
        path: PathBuf,
    },
    /// The table does not exist in the database; nothing was written.
    Skipped,
    /// The table exists but could not be exported; nothing was written.
    Failed {
        /// Why the table could not be exported
        error: ExportError,
    },
}

/// Result for one configured export target.
#[derive(Debug)]
pub struct TableReport {
    /// Source table name
    pub table: String,
    /// Output file name as configured
    pub output: String,
    /// Plural noun for console output
    pub label: String,
    /// Outcome of the export
    pub outcome: TableOutcome,
}

/// Progress notifications emitted while an export runs.
#[derive(Debug)]
pub enum ExportProgress<'a> {
    /// The catalog was read; every table name, in catalog order.
    TablesFound(&'a [String]),
    /// One configured target finished (exported, skipped, or failed).
    TableDone(&'a TableReport),
}

/// Results of an export run.
#[derive(Debug)]
pub struct ExportReport {
    /// Database that was read
    pub db_path: PathBuf,
    /// Every table in the catalog, in catalog order
    pub tables_found: Vec<String>,
    /// One entry per configured target, in configuration order
    pub results: Vec<TableReport>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ExportReport {
    /// Number of tables written to disk.
    pub fn exported(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, TableOutcome::Exported { .. }))
            .count()
    }

    /// Number of targets whose table existed but failed to export.
    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, TableOutcome::Failed { .. }))
            .count()
    }

    /// Returns true if any target failed.
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Looks up the result for `table`.
    pub fn result_for(&self, table: &str) -> Option<&TableReport> {
        self.results.iter().find(|r| r.table == table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(outcomes: Vec<(&str, TableOutcome)>) -> ExportReport {
        ExportReport {
            db_path: PathBuf::from("dev.db"),
            tables_found: Vec::new(),
            results: outcomes
                .into_iter()
                .map(|(table, outcome)| TableReport {
                    table: table.to_string(),
                    output: format!("{}.json", table.to_lowercase()),
                    label: table.to_lowercase(),
                    outcome,
                })
                .collect(),
            elapsed_seconds: 0.0,
        }
    }

    #[test]
    fn test_counts() {
        let r = report(vec![
            (
                "Quote",
                TableOutcome::Exported {
                    rows: 3,
                    path: PathBuf::from("quote.json"),
                },
            ),
            (
                "Virtue",
                TableOutcome::Failed {
                    error: ExportError::NonFiniteReal {
                        table: "Virtue".to_string(),
                        column: "x".to_string(),
                    },
                },
            ),
            ("Other", TableOutcome::Skipped),
        ]);

        assert_eq!(r.exported(), 1);
        assert_eq!(r.failed(), 1);
        assert!(r.has_failures());
        assert!(matches!(
            r.result_for("Other").map(|t| &t.outcome),
            Some(TableOutcome::Skipped)
        ));
        assert!(r.result_for("Missing").is_none());
    }

    #[test]
    fn test_all_skipped_is_not_a_failure() {
        let r = report(vec![
            ("Quote", TableOutcome::Skipped),
            ("Virtue", TableOutcome::Skipped),
        ]);
        assert_eq!(r.exported(), 0);
        assert!(!r.has_failures());
    }
}
