//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use coaching_domain::{InquiryDraft, InquiryField};
use std::path::PathBuf;

/// CLI arguments for coaching-contact
#[derive(Parser, Debug)]
#[command(name = "coaching-contact")]
#[command(author, version, about = "Contact form endpoint and client for The Oxford Coaching Partnership")]
#[command(long_about = r#"
coaching-contact runs the inquiry endpoint behind the website's contact form,
and can submit or check inquiries from the terminal.

Configuration files are loaded from (in priority order):
1. COACHING_* environment variables (e.g. COACHING_SERVER__PORT=8080)
2. --config <path>     Explicit config file
3. ./contact.toml      Project-level config
4. ~/.config/coaching-contact/config.toml   Global config

Example:
  coaching-contact serve --port 8080
  coaching-contact validate --first-name Ada --last-name Lovelace \
      --email ada@example.com --message "I would like to discuss coaching."
  coaching-contact submit --endpoint http://127.0.0.1:8080/api/contact ...
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the inquiry endpoint
    Serve {
        /// Interface to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Validate an inquiry and submit it to the endpoint
    Submit {
        #[command(flatten)]
        inquiry: InquiryArgs,

        /// Endpoint URL (overrides client.endpoint)
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Validate an inquiry without sending it
    Validate {
        #[command(flatten)]
        inquiry: InquiryArgs,
    },
}

/// The contact form fields
#[derive(Args, Debug, Clone, Default)]
pub struct InquiryArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(short, long, default_value = "")]
    pub message: String,
}

impl InquiryArgs {
    pub fn to_draft(&self) -> InquiryDraft {
        InquiryDraft::new()
            .with(InquiryField::FirstName, &self.first_name)
            .with(InquiryField::LastName, &self.last_name)
            .with(InquiryField::Email, &self.email)
            .with(InquiryField::Phone, &self.phone)
            .with(InquiryField::Message, &self.message)
    }
}
