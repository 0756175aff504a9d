//! User-facing status lines. Diagnostics go through `tracing` instead.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Blue.bold().paint("ℹ️"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Green.bold().paint("✅"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", Yellow.bold().paint("⚠️"), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Red.bold().paint("❌"), msg);
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Blue.bold().paint(format!("=== {msg} ===")));
}
