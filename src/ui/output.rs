use crate::error::{SubmissionsError, UserFriendlyError};
use console::{style, Emoji, Term};

// Emojis with text fallbacks
static CHECKMARK: Emoji = Emoji("✅ ", "✓ ");
static CROSS: Emoji = Emoji("❌ ", "✗ ");
static INFO: Emoji = Emoji("ℹ️  ", "i ");
static WARNING: Emoji = Emoji("⚠️  ", "! ");

/// Console reporting for the operator. All output goes directly to the
/// terminal; errors and warnings to stderr, the rest to stdout.
pub struct OutputFormatter {
    use_colors: bool,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            use_colors: Term::stdout().features().colors_supported(),
        }
    }

    pub fn success(&self, message: &str) {
        if self.use_colors {
            println!("{}{}", CHECKMARK, style(message).green().bold());
        } else {
            println!("✓ {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", CROSS, style(message).red().bold());
        } else {
            eprintln!("✗ {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.use_colors {
            eprintln!("{}{}", WARNING, style(message).yellow().bold());
        } else {
            eprintln!("! {}", message);
        }
    }

    pub fn info(&self, message: &str) {
        if self.use_colors {
            println!("{}{}", INFO, style(message).cyan());
        } else {
            println!("i {}", message);
        }
    }

    /// Unstyled line, for list items the operator should be able to copy.
    pub fn plain(&self, message: &str) {
        println!("{}", message);
    }

    pub fn print_separator(&self) {
        if self.use_colors {
            println!("{}", style("─".repeat(60)).dim());
        } else {
            println!("{}", "-".repeat(60));
        }
    }

    pub fn print_user_friendly_error(&self, error: &SubmissionsError) {
        self.error(&error.user_message());

        if let Some(suggestion) = error.suggestion() {
            if self.use_colors {
                eprintln!(
                    "{}{}",
                    INFO,
                    style(&format!("Suggestion: {}", suggestion)).cyan()
                );
            } else {
                eprintln!("Suggestion: {}", suggestion);
            }
        }
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}
