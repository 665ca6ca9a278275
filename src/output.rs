//! Console reporting for the copy run.
//!
//! All progress and error lines go to stderr — the destination tree is the
//! product, stdout stays clean for scripting. Colors only when stderr is a
//! TTY.

use owo_colors::OwoColorize;
use std::path::Path;

fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// One registered substitution rule, echoed at startup.
pub fn print_rule(index: usize, find: &str, replace: &str) {
    eprintln!("#{index}: \"{find}\" -> \"{replace}\"");
}

/// Resolved source/destination announcement before dispatch.
pub fn print_endpoints(source: &Path, dest: &Path) {
    eprintln!("source     : \"{}\"", source.display());
    eprintln!("destination: \"{}\"", dest.display());
}

/// Phase banner ("Getting path list...", "Checking pathnames...", ...).
pub fn print_banner(msg: &str) {
    if is_tty() {
        eprintln!("{}", msg.bold());
    } else {
        eprintln!("{msg}");
    }
}

/// Per-entry success line.
pub fn print_entry_ok(src: &Path, dest: &Path) {
    if is_tty() {
        eprintln!("{} \"{}\" -> \"{}\"", "OK:".green().bold(), src.display(), dest.display());
    } else {
        eprintln!("OK: \"{}\" -> \"{}\"", src.display(), dest.display());
    }
}

/// Per-entry failure line.
pub fn print_entry_ng(src: &Path, dest: &Path) {
    if is_tty() {
        eprintln!("{} \"{}\" -> \"{}\"", "NG:".red().bold(), src.display(), dest.display());
    } else {
        eprintln!("NG: \"{}\" -> \"{}\"", src.display(), dest.display());
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "ERROR:".red().bold(), msg);
    } else {
        eprintln!("ERROR: {msg}");
    }
}

pub fn print_done() {
    if is_tty() {
        eprintln!("{}", "Done.".green());
    } else {
        eprintln!("Done.");
    }
}

/// Plain informational line (used by --print-config and template creation).
pub fn print_info(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "info:".cyan().bold(), msg);
    } else {
        eprintln!("info: {msg}");
    }
}
