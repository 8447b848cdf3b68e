/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Amount color:
/// \<0 → red (validation will complain)
/// 0 → grey
/// \>0 → reset
pub fn color_for_amount(value: f64) -> &'static str {
    if value < 0.0 {
        RED
    } else if value == 0.0 {
        GREY
    } else {
        RESET
    }
}

/// Wrap `text` in `color`, skipping the escape codes for RESET.
pub fn paint(text: &str, color: &str) -> String {
    if color == RESET {
        text.to_string()
    } else {
        format!("{color}{text}{RESET}")
    }
}

/// Returns GREY for an empty label, RESET otherwise.
pub fn color_for_label(value: &str) -> &'static str {
    if value.trim().is_empty() { GREY } else { RESET }
}
