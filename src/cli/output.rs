use owo_colors::OwoColorize;

/// color coded output utilities
pub struct Output;

impl Output {
    /// print an error message in red
    pub fn error(msg: &str) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    }

    /// print a warning message in yellow
    pub fn warning(msg: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), msg);
    }

    /// print an info message in blue
    pub fn info(msg: &str) {
        println!("{} {}", "info:".blue().bold(), msg);
    }

    /// print a success message in green
    pub fn success(msg: &str) {
        println!("{} {}", "success:".green().bold(), msg);
    }

    /// print a note message
    pub fn note(msg: &str) {
        println!("{} {}", "note:".cyan(), msg);
    }

    /// print a help message
    pub fn help(msg: &str) {
        println!("{} {}", "help:".bright_blue(), msg);
    }

    /// print an analysis phase
    pub fn phase(phase: &str) {
        println!("{} {}", "→".bright_blue(), phase.bright_white());
    }

    /// print file being processed
    pub fn processing_file(file: &str) {
        println!("{} {}", "Processing:".bright_cyan(), file.bright_white());
    }
}
