//  SETCAL.rs
//    by Lut99
//
//  Created:
//    16 Apr 2025, 10:44:12
//  Last edited:
//    23 Apr 2025, 11:36:58
//  Auto updated?
//    Yes
//
//  Description:
//!   Runs the set calculator on an input file, printing to stdout.
//

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use error_trace::toplevel;
use humanlog::{DebugMode, HumanLogger};
use log::{debug, error};
use setcal::interpreter::{self, Interpreter, InterpreterOptions, DEFAULT_MAX_LINES};


/***** ARGUMENTS *****/
/// Defines arguments to the calculator.
#[derive(Debug, Parser)]
pub struct Arguments {
    /// If given, enables more verbose logging.
    #[clap(long, global = true)]
    debug: bool,

    /// The maximum number of lines accepted in the input file. Use 0 to accept any number.
    #[clap(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// The path to the file to run.
    #[clap(name = "FILE")]
    path: PathBuf,
}





/***** HELPER FUNCTIONS *****/
/// Runs the file at the given path to completion.
///
/// The file is closed when this function returns, regardless of whether it succeeded.
fn run(args: &Arguments) -> Result<(), interpreter::Error> {
    let handle: File = match File::open(&args.path) {
        Ok(handle) => handle,
        Err(err) => {
            error!("{}", toplevel!(("Failed to open input file '{}'", args.path.display()), err));
            std::process::exit(1);
        },
    };

    let options = InterpreterOptions { max_lines: if args.max_lines == 0 { None } else { Some(args.max_lines) } };
    debug!("Running '{}' with {options:?}...", args.path.display());
    Interpreter::with_options(options).run(BufReader::new(handle), io::stdout().lock())
}





/***** ENTRYPOINT *****/
fn main() {
    // Parse the CLI arguments
    let args = match Arguments::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Help and version requests are not failures
            let code: i32 = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        },
    };

    // Setup the logger
    if let Err(err) = HumanLogger::terminal(if args.debug { DebugMode::Full } else { DebugMode::HumanFriendly }).init() {
        eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
    }
    // Banner stays at debug-level; stdout is reserved for results
    debug!("setcal {} - v{}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));

    // Run the file
    if let Err(err) = run(&args) {
        error!("{}", toplevel!(("Failed to run input file '{}'", args.path.display()), err));
        std::process::exit(1);
    }
    debug!("Done");
}
