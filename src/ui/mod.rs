pub mod output;
pub mod prompt;

pub use output::OutputFormatter;
pub use prompt::Prompter;
