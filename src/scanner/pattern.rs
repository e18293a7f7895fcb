use regex::Regex;
use std::path::PathBuf;

/// Literal suffix of a corrected submission file, case-sensitive.
pub const CORRECTED_SUFFIX: &str = "_corrected.pdf";

/// One corrected submission found on disk: the recipient address and sheet
/// number parsed from the file name, plus the path of the PDF itself.
/// Immutable once created.
///
/// The sheet number is kept as the matched digit text, not an integer, so
/// that reassembling the file name is exact (a `03` stays `03`) and the
/// one-sheet-per-directory check compares what the files actually say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub recipient: String,
    pub sheet: String,
    pub path: PathBuf,
}

impl Submission {
    /// Reassemble the file name this record was parsed from:
    /// `{recipient}_{sheet}_corrected.pdf`.
    pub fn file_name(&self) -> String {
        format!("{}_{}{}", self.recipient, self.sheet, CORRECTED_SUFFIX)
    }
}

/// Matcher for the fixed corrected-submission naming convention
/// `{email}_{sheet}_corrected.pdf`.
pub struct SubmissionPattern {
    regex: Regex,
}

impl SubmissionPattern {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r"^(.+)_([0-9]+)_corrected\.pdf$").unwrap(),
        }
    }

    /// Parse a file name against the convention. Returns the recipient
    /// address and sheet number, or `None` for anything that does not match.
    ///
    /// The greedy first group means that an address containing underscores
    /// keeps everything up to the final `_{digits}_corrected.pdf`.
    pub fn parse(&self, file_name: &str) -> Option<(String, String)> {
        let captures = self.regex.captures(file_name)?;
        let address = captures.get(1)?.as_str();
        let sheet = captures.get(2)?.as_str();

        if !is_plausible_address(address) {
            return None;
        }

        Some((address.to_string(), sheet.to_string()))
    }
}

impl Default for SubmissionPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanity checks on the address part of a matched file name: no leading dot
/// (hidden files), no consecutive dots, a non-empty local part that does not
/// end in a dot, and a domain with an interior dot.
fn is_plausible_address(address: &str) -> bool {
    if address.starts_with('.') || address.contains("..") {
        return false;
    }

    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.ends_with('.') {
        return false;
    }

    domain_has_interior_dot(domain)
}

fn domain_has_interior_dot(domain: &str) -> bool {
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(name: &str) -> Option<(String, String)> {
        SubmissionPattern::new().parse(name)
    }

    #[test]
    fn test_parses_simple_name() {
        let (recipient, sheet) = parse("x@y.com_3_corrected.pdf").unwrap();
        assert_eq!(recipient, "x@y.com");
        assert_eq!(sheet, "3");
    }

    #[test]
    fn test_parses_multi_digit_sheet() {
        let (recipient, sheet) = parse("someone@student.ethz.ch_12_corrected.pdf").unwrap();
        assert_eq!(recipient, "someone@student.ethz.ch");
        assert_eq!(sheet, "12");
    }

    #[test]
    fn test_underscore_in_address_keeps_last_number_as_sheet() {
        let (recipient, sheet) = parse("a_b@y.com_1_corrected.pdf").unwrap();
        assert_eq!(recipient, "a_b@y.com");
        assert_eq!(sheet, "1");
    }

    #[test]
    fn test_single_character_local_part_is_accepted() {
        let (recipient, sheet) = parse("a@y.com_3_corrected.pdf").unwrap();
        assert_eq!(recipient, "a@y.com");
        assert_eq!(sheet, "3");
    }

    #[test]
    fn test_round_trip() {
        let names = [
            "x@y.com_3_corrected.pdf",
            "first.last@student.ethz.ch_10_corrected.pdf",
            "a_b@y.com_1_corrected.pdf",
            "xy@y.com_03_corrected.pdf",
        ];
        let pattern = SubmissionPattern::new();
        for name in names {
            let (recipient, sheet) = pattern.parse(name).unwrap();
            let submission = Submission {
                recipient,
                sheet,
                path: Path::new(name).to_path_buf(),
            };
            assert_eq!(submission.file_name(), name);
        }
    }

    #[test]
    fn test_rejects_wrong_suffix() {
        assert!(parse("x@y.com_3_corrected.PDF").is_none());
        assert!(parse("x@y.com_3_Corrected.pdf").is_none());
        assert!(parse("x@y.com_3_corrected.pdf.bak").is_none());
        assert!(parse("x@y.com_3.pdf").is_none());
    }

    #[test]
    fn test_rejects_missing_sheet_number() {
        assert!(parse("x@y.com__corrected.pdf").is_none());
        assert!(parse("x@y.com_corrected.pdf").is_none());
    }

    #[test]
    fn test_rejects_hidden_files() {
        assert!(parse(".x@y.com_3_corrected.pdf").is_none());
    }

    #[test]
    fn test_rejects_consecutive_dots() {
        assert!(parse("x..z@y.com_3_corrected.pdf").is_none());
    }

    #[test]
    fn test_rejects_dot_before_at() {
        assert!(parse("x.@y.com_3_corrected.pdf").is_none());
    }

    #[test]
    fn test_leading_zero_sheet_is_kept_verbatim() {
        let (recipient, sheet) = parse("xy@y.com_03_corrected.pdf").unwrap();
        let submission = Submission {
            recipient,
            sheet,
            path: Path::new("xy@y.com_03_corrected.pdf").to_path_buf(),
        };
        assert_eq!(submission.sheet, "03");
        assert_eq!(submission.file_name(), "xy@y.com_03_corrected.pdf");
    }

    #[test]
    fn test_rejects_empty_local_part() {
        assert!(parse("@y.com_3_corrected.pdf").is_none());
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(parse("xy@domain_3_corrected.pdf").is_none());
    }

    #[test]
    fn test_rejects_plain_pdf() {
        assert!(parse("notes.pdf").is_none());
        assert!(parse("sheet_3.pdf").is_none());
    }
}
