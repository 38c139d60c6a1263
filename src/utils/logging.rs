// file: src/utils/logging.rs
// description: Tracing subscriber initialization with optional ANSI coloring

use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub fn format_success(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✓".green().bold(), msg.green())
    } else {
        msg.to_string()
    }
}

pub fn format_error(msg: &str, colored_output: bool) -> String {
    if colored_output {
        format!("{} {}", "✗".red().bold(), msg.red())
    } else {
        format!("Error: {}", msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_success_line() {
        assert_eq!(
            format_success("FAISS documents exported to 'faiss_docs.json'", false),
            "FAISS documents exported to 'faiss_docs.json'"
        );
    }

    #[test]
    fn test_colored_success_keeps_message() {
        let line = format_success("done", true);
        assert!(line.contains("done"));
    }

    #[test]
    fn test_plain_error_line() {
        assert_eq!(format_error("boom", false), "Error: boom");
    }
}
