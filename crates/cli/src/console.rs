//! Console output helpers.

use colored::Colorize;
use vulcan_protocol::api_models::StatusResponse;

pub fn info(message: &str) {
    println!("{} {message}", "→".blue());
}

pub fn success(message: &str) {
    println!("{} {message}", "✓".green());
}

pub fn error(message: &str) {
    eprintln!("{} {message}", "✗".red());
}

fn step_mark(status: &str) -> colored::ColoredString {
    match status {
        "completed" => "✓".green(),
        "failed" => "✗".red(),
        _ => "⟳".yellow(),
    }
}

fn status_label(status: &str) -> colored::ColoredString {
    match status {
        "completed" => status.green(),
        "failed" => status.red(),
        "in_progress" => status.yellow(),
        _ => status.normal(),
    }
}

/// Render a full process snapshot the way `vulcan status` shows it.
pub fn render_status(status: &StatusResponse) {
    println!("{}: {}", "Process".bold(), status.process_id);
    println!("{}: {}", "Type".bold(), status.process_type);
    println!("{}: {}", "Status".bold(), status_label(&status.status));
    println!("{}: {}", "Started".bold(), status.start_time);
    if let Some(end_time) = status.end_time {
        println!("{}: {end_time}", "Finished".bold());
    }

    if !status.steps.is_empty() {
        println!("{}:", "Steps".bold());
        for step in &status.steps {
            println!("  {} {}", step_mark(step.status.as_str()), step.name);
        }
    }

    if !status.errors.is_empty() {
        println!("{}:", "Errors".bold());
        for message in &status.errors {
            println!("  {}", message.red());
        }
    }
}
