//! CLI entrypoint for coaching-contact
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser};
use coaching_application::{
    AcceptInquiryUseCase, NoSubmissionNotifier, SubmissionNotifier, SubmitInquiryUseCase,
    SubmitOutcome,
};
use coaching_domain::{InquirySchema, Notice};
use coaching_infrastructure::{ConfigLoader, FileConfig, HttpInquiryTransport, Severity, server};
use coaching_presentation::{
    Cli, Command, ConsoleFormatter, ContactForm, FormSubmitResult, InquiryArgs, SubmissionReporter,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;

    match cli.command {
        Some(Command::Serve { host, port }) => serve(config, host, port).await,
        Some(Command::Submit { inquiry, endpoint }) => {
            submit(config, &inquiry, endpoint, cli.quiet).await
        }
        Some(Command::Validate { inquiry }) => validate(&inquiry),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("config error: {}", issue.message),
            Severity::Warning => eprintln!("config warning: {}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Configuration is invalid. Use --show-config to see which files were loaded.");
    }

    Ok(config)
}

async fn serve(mut config: FileConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    info!("Starting inquiry endpoint");

    // === Dependency Injection ===
    let accept = AcceptInquiryUseCase::new().with_behavior(config.server.to_endpoint_behavior());
    let listener = server::bind(&config.server).await?;
    server::serve(listener, &config.server, accept).await?;

    Ok(())
}

async fn submit(
    config: FileConfig,
    inquiry: &InquiryArgs,
    endpoint: Option<String>,
    quiet: bool,
) -> Result<()> {
    let timeout = config.client.timeout();
    let endpoint = endpoint.unwrap_or(config.client.endpoint);
    let transport = HttpInquiryTransport::new(&endpoint, timeout)?;
    info!("Submitting to {}", transport.endpoint());

    let client = SubmitInquiryUseCase::new(Arc::new(transport));
    let mut form = ContactForm::new(client).with_draft(inquiry.to_draft());

    let reporter = SubmissionReporter::new();
    let notifier: &dyn SubmissionNotifier = if quiet {
        &NoSubmissionNotifier
    } else {
        &reporter
    };

    match form.submit(notifier).await {
        FormSubmitResult::Invalid(errors) => {
            eprint!("{}", ConsoleFormatter::format_errors(&errors));
            bail!("Inquiry was not sent");
        }
        FormSubmitResult::Submitted(SubmitOutcome::Delivered(_)) => {
            if quiet {
                print!("{}", ConsoleFormatter::format_notice(&Notice::confirmation()));
            }
            Ok(())
        }
        FormSubmitResult::Submitted(SubmitOutcome::Failed(e)) => {
            if quiet {
                eprint!("{}", ConsoleFormatter::format_notice(&Notice::failure()));
            }
            bail!("Submission failed: {}", e);
        }
        FormSubmitResult::Submitted(SubmitOutcome::Ignored) => {
            bail!("A submission is already pending")
        }
    }
}

fn validate(inquiry: &InquiryArgs) -> Result<()> {
    match InquirySchema::validate(&inquiry.to_draft()) {
        Ok(inquiry) => {
            println!("{}", ConsoleFormatter::format_inquiry(&inquiry));
            Ok(())
        }
        Err(errors) => {
            eprint!("{}", ConsoleFormatter::format_errors(&errors));
            bail!("Inquiry is invalid");
        }
    }
}
