// src/utils.rs
use colored::Colorize;

const SUCCESS_MESSAGE: &str = "Repository contents copied to clipboard!";
const PREVIEW_HEADER: &str = "Preview of copied content:";

/// Returns the first `max_chars` characters of `output`, with `...` appended
/// when anything was cut.
#[inline]
#[must_use]
pub fn preview_text(output: &str, max_chars: usize) -> String {
    match output.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &output[..cut]),
        None => output.to_owned(),
    }
}

#[inline]
#[must_use]
pub fn success_line(file_count: usize) -> String {
    let noun = if file_count == 1 { "file" } else { "files" };
    format!("{SUCCESS_MESSAGE} ({file_count} {noun})")
}

#[inline]
pub fn print_success(file_count: usize) {
    println!("{}", success_line(file_count).green().bold());
}

#[inline]
pub fn print_preview(output: &str, max_chars: usize) {
    println!("\n{}", PREVIEW_HEADER.bold());
    println!("{}", preview_text(output, max_chars).blue());
}

#[inline]
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", format!("Error: {err:#}").red());
}
