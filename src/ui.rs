/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text
/// - Status message formatting
use std::io::Write;

/// Print the "report: " prefix for status messages
fn print_status_header() {
    print!("report: ");
}

/// Print colored text to terminal, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        print!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stdout() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
            return true;
        }

        false
    }
}

/// Print a status message with "report: " prefix
pub fn status(s: &str) {
    print_status_header();
    println!("{}", s);
}

/// Print a success line with a green check mark
pub fn print_success(msg: &str) {
    print_status_header();
    print_color("✓", term::color::BRIGHT_GREEN);
    println!(" {}", msg);
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    print_color("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}
