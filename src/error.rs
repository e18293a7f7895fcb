use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmissionsError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No corrected submissions in {dir}")]
    NoSubmissions { dir: String },

    #[error("Corrected submissions for multiple sheets in {dir}")]
    MixedSheets { dir: String, sheets: Vec<String> },

    #[error("Invalid email address: {address}")]
    InvalidAddress { address: String },

    #[error("Authentication with the mail server failed")]
    Authentication,

    #[error("Could not connect to the mail server: {message}")]
    Connection { message: String },

    #[error("Sending to {recipient} failed: {message}")]
    Send { recipient: String, message: String },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for SubmissionsError {
    fn user_message(&self) -> String {
        match self {
            SubmissionsError::NoSubmissions { dir } => {
                format!("No corrected submissions in {}.", dir)
            }
            SubmissionsError::MixedSheets { dir, sheets } => {
                format!(
                    "Corrected submissions for multiple sheets in {}: found sheets {}",
                    dir,
                    sheets.join(", ")
                )
            }
            SubmissionsError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            SubmissionsError::InvalidAddress { address } => {
                format!("Invalid email address: {}", address)
            }
            SubmissionsError::Authentication => {
                "Authentication with the mail server failed".to_string()
            }
            SubmissionsError::Connection { message } => {
                format!("Could not connect to the mail server: {}", message)
            }
            SubmissionsError::Send { recipient, message } => {
                format!("Sending to {} failed: {}", recipient, message)
            }
            SubmissionsError::Cancelled => "Aborting.".to_string(),
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            SubmissionsError::NoSubmissions { .. } => Some(
                "Run this tool from the directory that holds the corrected files. They must be named {email}_{sheet}_corrected.pdf.".to_string()
            ),
            SubmissionsError::MixedSheets { .. } => Some(
                "Keep the corrected submissions for each exercise sheet in a separate directory and re-run.".to_string()
            ),
            SubmissionsError::Config { .. } => Some(
                "Check ~/.config/submissions: it must be a JSON object with string fields \"name\" and \"email\".".to_string()
            ),
            SubmissionsError::InvalidAddress { .. } => Some(
                "The address must have the form local@domain.tld.".to_string()
            ),
            SubmissionsError::Authentication => Some(
                "Verify the user name and password for your mail account and try re-running the script.".to_string()
            ),
            SubmissionsError::Connection { .. } => Some(
                "Check that you can reach the mail server from this network (a VPN may be required).".to_string()
            ),
            SubmissionsError::Send { .. } => Some(
                "The message was not accepted by the server; the recipient did not get the correction. Delivery problems on the far side surface later as bounce mail.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SubmissionsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_friendly_messages() {
        let error = SubmissionsError::NoSubmissions {
            dir: "/tmp/sheets".to_string(),
        };
        assert!(error.user_message().contains("No corrected submissions"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_mixed_sheets_message_lists_sheets() {
        let error = SubmissionsError::MixedSheets {
            dir: ".".to_string(),
            sheets: vec!["3".to_string(), "4".to_string()],
        };
        let message = error.user_message();
        assert!(message.contains("multiple sheets"));
        assert!(message.contains("3, 4"));
    }

    #[test]
    fn test_cancelled_has_no_suggestion() {
        assert!(SubmissionsError::Cancelled.suggestion().is_none());
    }
}
