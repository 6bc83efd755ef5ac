//! Console output formatter for inquiries and submission results

use colored::Colorize;
use coaching_domain::{Inquiry, InquiryField, Notice, ValidationErrors};

/// Formats inquiries, inline errors and notices for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Summary of an inquiry that passed validation
    pub fn format_inquiry(inquiry: &Inquiry) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Inquiry"));
        output.push('\n');

        output.push_str(&Self::row(InquiryField::FirstName, inquiry.first_name()));
        output.push_str(&Self::row(InquiryField::LastName, inquiry.last_name()));
        output.push_str(&Self::row(InquiryField::Email, inquiry.email()));
        if let Some(phone) = inquiry.phone() {
            output.push_str(&Self::row(InquiryField::Phone, phone));
        }

        output.push_str(&format!("\n{}\n", "Message:".cyan().bold()));
        output.push_str(&Self::indent(inquiry.message(), "  "));
        output.push('\n');

        output.push_str(&Self::footer());
        output
    }

    /// Inline errors, one line per field, in form order
    pub fn format_errors(errors: &ValidationErrors) -> String {
        let mut output = format!(
            "{} {} field(s) need attention\n",
            "x".red(),
            errors.fields().len()
        );

        for field in errors.fields() {
            for violation in errors.violations(field) {
                output.push_str(&format!(
                    "  {:<12} {}\n",
                    format!("{}:", field.label()).yellow(),
                    violation.message(field)
                ));
            }
        }

        output
    }

    /// Toast-style notice shown once a submission settles
    pub fn format_notice(notice: &Notice) -> String {
        let title = if notice.is_failure() {
            notice.title.red().bold()
        } else {
            notice.title.green().bold()
        };
        format!("{}\n{}\n", title, notice.description)
    }

    fn row(field: InquiryField, value: &str) -> String {
        format!("{:<12} {}\n", format!("{}:", field.label()).cyan(), value)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
