use crate::error::{Result, SubmissionsError};
use crate::scanner::pattern::{Submission, SubmissionPattern};
use std::path::Path;

/// Scans one directory level for corrected submission files.
pub struct SubmissionScanner {
    pattern: SubmissionPattern,
}

impl SubmissionScanner {
    pub fn new() -> Self {
        Self {
            pattern: SubmissionPattern::new(),
        }
    }

    /// Collect the corrected submissions in `dir`. Entries that are not
    /// regular files or whose names do not match the convention are skipped
    /// silently; no subdirectories are entered.
    ///
    /// Fails when nothing matches, and when the matched files reference more
    /// than one distinct sheet number (one sheet per directory per run).
    pub fn scan_directory<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<Submission>> {
        let dir = dir.as_ref();
        let mut submissions = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };

            if let Some((recipient, sheet)) = self.pattern.parse(file_name) {
                submissions.push(Submission {
                    recipient,
                    sheet,
                    path: entry.path(),
                });
            }
        }

        if submissions.is_empty() {
            return Err(SubmissionsError::NoSubmissions {
                dir: dir.display().to_string(),
            });
        }

        // Compare the sheet numbers as written in the file names, so `3`
        // and `03` count as different sheets
        let mut sheets: Vec<String> = submissions.iter().map(|s| s.sheet.clone()).collect();
        sheets.sort_unstable();
        sheets.dedup();
        if sheets.len() > 1 {
            return Err(SubmissionsError::MixedSheets {
                dir: dir.display().to_string(),
                sheets,
            });
        }

        // Sort by recipient so the numbered selection list is deterministic
        submissions.sort_by(|a, b| a.recipient.cmp(&b.recipient));

        Ok(submissions)
    }
}

impl Default for SubmissionScanner {
    fn default() -> Self {
        Self::new()
    }
}
