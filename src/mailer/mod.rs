use crate::config::SenderConfig;
use crate::error::{Result, SubmissionsError};
use crate::scanner::Submission;
use crate::ui::prompt::Prompter;
use crate::ui::OutputFormatter;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, Message, SmtpTransport, Transport};

/// Institutional mail server, fixed.
pub const SMTP_HOST: &str = "mail.ethz.ch";
pub const SMTP_PORT: u16 = 587;

const MAX_AUTH_ATTEMPTS: u32 = 3;

/// Authenticated SMTP session to the institutional server. Messages are
/// submitted one at a time over the same session; there is no retry logic.
pub struct Mailer {
    transport: SmtpTransport,
}

impl Mailer {
    /// Prompt for credentials and open an authenticated STARTTLS session.
    ///
    /// Wrong credentials re-prompt up to a fixed number of attempts before
    /// the run aborts; any other connection problem aborts immediately.
    pub fn connect(formatter: &OutputFormatter, prompter: &Prompter) -> Result<Self> {
        for _ in 0..MAX_AUTH_ATTEMPTS {
            let credentials = prompter.credentials()?;
            let transport = SmtpTransport::starttls_relay(SMTP_HOST)
                .map_err(|error| SubmissionsError::Connection {
                    message: error.to_string(),
                })?
                .port(SMTP_PORT)
                .credentials(Credentials::new(
                    credentials.username,
                    credentials.password,
                ))
                .build();

            match transport.test_connection() {
                Ok(true) => {
                    formatter.success("Connection established!");
                    return Ok(Self { transport });
                }
                Ok(false) => {
                    return Err(SubmissionsError::Connection {
                        message: "the server closed the connection".to_string(),
                    })
                }
                Err(error) if is_auth_failure(&error) => {
                    formatter.warning("Wrong user name or password. Try again.");
                }
                Err(error) => {
                    return Err(SubmissionsError::Connection {
                        message: error.to_string(),
                    })
                }
            }
        }

        Err(SubmissionsError::Authentication)
    }

    /// Submit one message per selected submission. A failed submission is
    /// reported and the remaining recipients are still processed; the
    /// addresses that failed are listed at the end.
    pub fn send_all(
        &self,
        submissions: &[Submission],
        sender: &SenderConfig,
        formatter: &OutputFormatter,
    ) -> Result<()> {
        let from = sender_mailbox(sender)?;
        let mut failed = Vec::new();

        for submission in submissions {
            match self.send_one(submission, &from) {
                Ok(()) => formatter.info(&format!("Sent to {}", submission.recipient)),
                Err(error) => {
                    formatter.print_user_friendly_error(&error);
                    failed.push(submission.recipient.clone());
                }
            }
        }

        formatter.print_separator();
        if failed.is_empty() {
            formatter.success("All corrected submissions were sent out successfully!");
        } else {
            formatter.error("Failed to send out corrected submissions to:");
            for recipient in &failed {
                formatter.plain(recipient);
            }
        }

        Ok(())
    }

    fn send_one(&self, submission: &Submission, from: &Mailbox) -> Result<()> {
        let message = build_message(submission, from)?;
        self.transport
            .send(&message)
            .map_err(|error| SubmissionsError::Send {
                recipient: submission.recipient.clone(),
                message: error.to_string(),
            })?;
        Ok(())
    }
}

/// A permanent negative reply during the connection test means the server
/// rejected the credentials; everything else is a transport problem.
fn is_auth_failure(error: &lettre::transport::smtp::Error) -> bool {
    error.is_permanent()
}

fn sender_mailbox(sender: &SenderConfig) -> Result<Mailbox> {
    let address: Address =
        sender
            .email
            .parse()
            .map_err(|_| SubmissionsError::InvalidAddress {
                address: sender.email.clone(),
            })?;
    Ok(Mailbox::new(Some(sender.name.clone()), address))
}

/// Compose the message for one submission: plain-text body plus the PDF as
/// an attachment, named exactly like the file on disk.
pub fn build_message(submission: &Submission, from: &Mailbox) -> Result<Message> {
    let address: Address =
        submission
            .recipient
            .parse()
            .map_err(|_| SubmissionsError::InvalidAddress {
                address: submission.recipient.clone(),
            })?;
    let to = Mailbox::new(None, address);
    let sender_name = from.name.clone().unwrap_or_default();

    let body = format!(
        "Hi,\n\nThe correction of your submission for exercise sheet {} is attached.\n\n\
         Best regards,\n{}",
        submission.sheet, sender_name,
    );

    let content = std::fs::read(&submission.path)?;
    let content_type = mime_guess::from_path(&submission.path).first_or_octet_stream();
    let content_type =
        ContentType::parse(content_type.as_ref()).map_err(|error| SubmissionsError::Send {
            recipient: submission.recipient.clone(),
            message: error.to_string(),
        })?;
    let attachment = Attachment::new(submission.file_name()).body(content, content_type);

    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(format!("Corrected submission {}", submission.sheet))
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(body))
                .singlepart(attachment),
        )
        .map_err(|error| SubmissionsError::Send {
            recipient: submission.recipient.clone(),
            message: error.to_string(),
        })
}
