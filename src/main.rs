//! File-driven calculator front end.
//!
//! `longnum <input-file> <output-file>`: evaluates the token stream in the
//! input file and writes the final stack to the output file.

use std::env;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::process::ExitCode;

use longnum::calc::{self, CalcError};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: longnum <input-file> <output-file>");
        return ExitCode::from(1);
    }

    let input = match File::open(&args[1]) {
        Ok(file) => BufReader::new(file),
        Err(err) => {
            eprintln!("cannot open {}: {err}", args[1]);
            return ExitCode::from(2);
        }
    };
    let output = match File::create(&args[2]) {
        Ok(file) => BufWriter::new(file),
        Err(err) => {
            eprintln!("cannot open {}: {err}", args[2]);
            return ExitCode::from(2);
        }
    };

    match calc::evaluate(input, output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CalcError::Io(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(3)
        }
    }
}
