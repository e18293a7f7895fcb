use clap::Parser;

/// The tool takes no operational flags: it is invoked bare and works on the
/// current directory. clap still provides `--help`/`--version` and a place
/// to document the naming convention.
#[derive(Parser, Debug)]
#[command(name = "submissions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Send corrected submissions to the email addresses in their file names")]
#[command(
    long_about = "Scans the current directory for corrected submission PDFs named \
                  {email}_{sheet}_corrected.pdf, lets you pick which ones to send, \
                  and mails each file to the address encoded in its name."
)]
#[command(after_help = "FILE NAMING:\n  \
    {email}_{sheet}_corrected.pdf, e.g. someone@student.ethz.ch_3_corrected.pdf\n  \
    All files in the directory must belong to the same exercise sheet.\n\n\
    CONFIG:\n  \
    ~/.config/submissions may hold a JSON object {\"name\": ..., \"email\": ...}\n  \
    with the sender identity; otherwise you are prompted for it.")]
pub struct Cli {}
