//! Reads a program from standard input and prints it with all reader-macro
//! shorthands expanded, one top-level form per line.
//!
//! Pass `--abbreviate` to print the shorthands again instead.

use std::io::{self, Write};

use lisp_reader::print;

fn main() -> io::Result<()> {
    let abbreviate = std::env::args().skip(1).any(|arg| arg == "--abbreviate");
    let program = lisp_reader::read_from_reader(io::stdin().lock())?;
    let options = print::Options::new().with_abbreviations(abbreviate);
    let text = print::program_to_string_custom(&program, options)?;
    io::stdout().lock().write_all(text.as_bytes())
}
