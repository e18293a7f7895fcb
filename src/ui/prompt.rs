use crate::config::SenderConfig;
use crate::error::{Result, SubmissionsError};
use crate::scanner::Submission;
use console::Term;

/// Mail account credentials, held in memory for the duration of the run
/// only. The password is never written anywhere.
pub struct MailCredentials {
    pub username: String,
    pub password: String,
}

/// Interactive prompts on the controlling terminal.
pub struct Prompter {
    term: Term,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt)?;
        Ok(self.term.read_line()?.trim().to_string())
    }

    fn ask_nonempty(&self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
        }
    }

    /// Prompt for the sender identity when no usable config file exists.
    pub fn sender_identity(&self) -> Result<SenderConfig> {
        let first_name = self.ask_nonempty("Your first name: ")?;
        let surname = self.ask_nonempty("Your surname: ")?;
        let email = self.ask_nonempty("Your ETH email address: ")?;

        Ok(SenderConfig {
            name: format!("{} {}", first_name, surname),
            email,
        })
    }

    /// Prompt for the mail account credentials. The password is read without
    /// echo.
    pub fn credentials(&self) -> Result<MailCredentials> {
        let username = self.ask_nonempty("\nNETZ user name: ")?;
        self.term.write_str("Password: ")?;
        let password = self.term.read_secure_line()?;

        Ok(MailCredentials { username, password })
    }

    /// Present the matched submissions as a numbered list and let the
    /// operator pick which ones to send. Re-prompts on invalid input.
    pub fn select(&self, submissions: &[Submission]) -> Result<Vec<Submission>> {
        self.term
            .write_line("\nThis directory contains submissions from:\n")?;
        for (number, submission) in submissions.iter().enumerate() {
            self.term
                .write_line(&format!("[{}] {}", number + 1, submission.recipient))?;
        }

        loop {
            let answer = self.ask(
                "\nWhich submissions to send out? Give a space-separated list of\n\
                 numbers from the list above, or 'all' to send out every submission:\n\n",
            )?;

            match parse_selection(&answer, submissions.len()) {
                Some(Selection::All) => return Ok(submissions.to_vec()),
                Some(Selection::Indices(indices)) => {
                    return Ok(indices
                        .into_iter()
                        .map(|index| submissions[index - 1].clone())
                        .collect());
                }
                None => self.term.write_line("Invalid input. Try again.")?,
            }
        }
    }

    /// Show the recipients once more and ask for a final go-ahead. Answering
    /// `n` cancels the run.
    pub fn confirm_send(&self, submissions: &[Submission]) -> Result<()> {
        self.term
            .write_line("\nCorrected submissions will be sent to:\n")?;
        for submission in submissions {
            self.term.write_line(&submission.recipient)?;
        }

        loop {
            let answer = self.ask("\nDo you want to proceed? [y/n]: ")?;
            match answer.as_str() {
                "y" => return Ok(()),
                "n" => return Err(SubmissionsError::Cancelled),
                _ => self.term.write_line("One of 'y' or 'n' required")?,
            }
        }
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Selection {
    All,
    Indices(Vec<usize>),
}

/// Parse the selection reply: `all`, or space-separated 1-based indices into
/// a list of `count` entries. Returns `None` for anything else.
fn parse_selection(input: &str, count: usize) -> Option<Selection> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input == "all" {
        return Some(Selection::All);
    }

    let mut indices = Vec::new();
    for token in input.split_whitespace() {
        let index: usize = token.parse().ok()?;
        if index < 1 || index > count {
            return None;
        }
        indices.push(index);
    }

    Some(Selection::Indices(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keyword() {
        assert_eq!(parse_selection("all", 3), Some(Selection::All));
    }

    #[test]
    fn test_index_list_preserves_order() {
        assert_eq!(
            parse_selection("3 1", 3),
            Some(Selection::Indices(vec![3, 1]))
        );
    }

    #[test]
    fn test_single_index() {
        assert_eq!(parse_selection("2", 3), Some(Selection::Indices(vec![2])));
    }

    #[test]
    fn test_empty_input_is_invalid() {
        assert_eq!(parse_selection("", 3), None);
        assert_eq!(parse_selection("   ", 3), None);
    }

    #[test]
    fn test_non_numeric_input_is_invalid() {
        assert_eq!(parse_selection("one two", 3), None);
        assert_eq!(parse_selection("1 x", 3), None);
        assert_eq!(parse_selection("ALL", 3), None);
    }

    #[test]
    fn test_out_of_range_index_is_invalid() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("1 4", 3), None);
    }
}
