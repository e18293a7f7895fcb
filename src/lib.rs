pub mod cli;
pub mod config;
pub mod error;
pub mod mailer;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::Cli;
pub use config::SenderConfig;
pub use error::{Result, SubmissionsError, UserFriendlyError};
pub use mailer::Mailer;
pub use scanner::{Submission, SubmissionScanner};
pub use ui::{OutputFormatter, Prompter};

use std::path::Path;

/// Run the whole pipeline against one directory: scan, select, confirm,
/// resolve the sender identity, connect, send. Strictly linear; each step
/// only starts once the previous one succeeded.
pub fn run(dir: &Path, formatter: &OutputFormatter) -> Result<()> {
    let submissions = SubmissionScanner::new().scan_directory(dir)?;

    let prompter = Prompter::new();
    let selected = prompter.select(&submissions)?;
    prompter.confirm_send(&selected)?;

    // Sender identity: config file if present and valid, prompts otherwise
    let sender = match SenderConfig::load()? {
        Some(sender) => sender,
        None => prompter.sender_identity()?,
    };

    let mailer = Mailer::connect(formatter, &prompter)?;
    mailer.send_all(&selected, &sender, formatter)
}
