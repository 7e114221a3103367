//! Console messages for the end user (diagnostics go through `tracing`).

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Colors are skipped when NO_COLOR is set (https://no-color.org).
fn paint(color: &str) -> (String, &'static str) {
    if std::env::var_os("NO_COLOR").is_some() {
        (String::new(), "")
    } else {
        (format!("{color}{BOLD}"), RESET)
    }
}

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    let (start, reset) = paint(color);
    format!("{start}{icon}{reset} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    let (start, reset) = paint(FG_BLUE);
    println!("{start}====================== {msg}{reset}\n");
}
