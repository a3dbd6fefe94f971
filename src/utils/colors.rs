/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Countdown color:
/// none → grey
/// 0 → red (expired)
/// >0 → green
pub fn color_for_countdown(remaining: Option<u64>) -> &'static str {
    match remaining {
        None => GREY,
        Some(0) => RED,
        Some(_) => GREEN,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
