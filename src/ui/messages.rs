//! Console messages: one icon-prefixed line per event.
//! Colors are dropped when NO_COLOR is set or the stream is not a terminal.

use std::fmt;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn colored(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    }
}

fn line<T: fmt::Display>(color: &str, icon: &str, msg: T, stderr: bool) -> String {
    if colored(stderr) {
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg, false));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg, false));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg, false));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg, true));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    if colored(false) {
        println!("{FG_BLUE}{BOLD}====================== {msg}{RESET}\n");
    } else {
        println!("====================== {msg}\n");
    }
}
