//! Diagnostics for the person at the terminal. Everything here goes to
//! stderr so it never mixes with status lines or echoed numbers.

use std::fmt::Display;

use crate::status::{BOLD, CYAN, RED, RESET, YELLOW};

pub const ITALIC: &str = "\x1b[3m";

pub fn info(msg: impl Display) {
    eprintln!("{CYAN}{msg}{RESET}");
}

pub fn warn(msg: impl Display) {
    eprintln!("{YELLOW}{ITALIC}{msg}{RESET}");
}

pub fn err(msg: impl Display, err: impl Display) {
    eprintln!("{RED}{BOLD}{msg}:{RESET} {ITALIC}{RED}{err}{RESET}");
}
