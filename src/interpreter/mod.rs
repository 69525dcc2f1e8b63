//  MOD.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 13:58:40
//  Last edited:
//    23 Apr 2025, 11:20:04
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the interpreter that drives a whole input file.
//!
//!   Input is processed strictly line by line. The first line must define
//!   the universe; it is followed by any number of set- and relation
//!   definitions, which are in turn followed by any number of commands:
//!   ```plain
//!   U a b c
//!   S a b
//!   R (a b) (b c)
//!   C union 1 2
//!   ```
//!   Every definition is echoed as it is loaded, and every command prints
//!   exactly one line with its result. The first error aborts the run.
//

// Nested modules
pub mod commands;
pub mod store;
pub mod value;

// Imports
use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::io::{self, BufRead, Write};

use enum_debug::EnumDebug;
pub use store::LineStore;
pub use value::Value;

use crate::log::{debug, trace, warn};
use crate::model::{relation, set, universe, Relation, Set, Universe};
use crate::parser::{self, Directive, Line};


/***** CONSTANTS *****/
/// The number of input lines accepted by default.
pub const DEFAULT_MAX_LINES: usize = 1000;





/***** ERRORS *****/
/// Defines errors that occur when [running](Interpreter::run()) an input file.
///
/// Every variant relating to a specific line carries its 1-based line number.
#[derive(Debug)]
pub enum Error {
    /// Failed to read the next line of input.
    Read { line: usize, err: io::Error },
    /// Failed to write output.
    Write { err: io::Error },
    /// The input has more lines than allowed.
    TooManyLines { max: usize },
    /// A line could not be parsed.
    Parse { line: usize, err: parser::Error },
    /// The input had no lines at all.
    EmptyInput,
    /// The first line did not define the universe.
    MissingUniverse { line: usize, got: Directive },
    /// A second universe was defined.
    DuplicateUniverse { line: usize },
    /// A definition was given after the first command.
    DefinitionAfterCommand { line: usize, directive: Directive },
    /// Failed to load the universe.
    Universe { line: usize, err: universe::Error },
    /// Failed to load a set.
    Set { line: usize, err: set::Error },
    /// Failed to load a relation.
    Relation { line: usize, err: relation::Error },
    /// Failed to run a command.
    Command { line: usize, err: commands::Error },
    /// The interpreter was used after it was done or had failed.
    Halted { phase: Phase },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::Read { line, .. } => write!(f, "Failed to read line {line} of the input"),
            Self::Write { .. } => write!(f, "Failed to write output"),
            Self::TooManyLines { max } => write!(f, "Input has more than {max} lines"),
            Self::Parse { line, .. } => write!(f, "Failed to parse line {line}"),
            Self::EmptyInput => write!(f, "Input is empty (expected at least a universe definition)"),
            Self::MissingUniverse { line, got } => {
                write!(f, "Expected a universe definition ('{}') on line {line}, got '{got}'", Directive::Universe)
            },
            Self::DuplicateUniverse { line } => write!(f, "Universe is defined again on line {line}"),
            Self::DefinitionAfterCommand { line, directive } => {
                write!(f, "Definition ('{directive}') on line {line} follows a command; all definitions must precede the commands")
            },
            Self::Universe { line, .. } => write!(f, "Failed to load universe on line {line}"),
            Self::Set { line, .. } => write!(f, "Failed to load set on line {line}"),
            Self::Relation { line, .. } => write!(f, "Failed to load relation on line {line}"),
            Self::Command { line, .. } => write!(f, "Failed to run command on line {line}"),
            Self::Halted { phase } => write!(f, "Cannot feed more input to an interpreter that is {phase}"),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Read { err, .. } => Some(err),
            Self::Write { err } => Some(err),
            Self::Parse { err, .. } => Some(err),
            Self::Universe { err, .. } => Some(err),
            Self::Set { err, .. } => Some(err),
            Self::Relation { err, .. } => Some(err),
            Self::Command { err, .. } => Some(err),
            Self::TooManyLines { .. }
            | Self::EmptyInput
            | Self::MissingUniverse { .. }
            | Self::DuplicateUniverse { .. }
            | Self::DefinitionAfterCommand { .. }
            | Self::Halted { .. } => None,
        }
    }
}





/***** AUXILLARY *****/
/// Configures an [`Interpreter`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InterpreterOptions {
    /// The maximum number of lines accepted, or [`None`] to accept any number.
    pub max_lines: Option<usize>,
}
impl Default for InterpreterOptions {
    #[inline]
    fn default() -> Self { Self { max_lines: Some(DEFAULT_MAX_LINES) } }
}



/// Where in the input an [`Interpreter`] is.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum Phase {
    /// Nothing has been read yet; the next line must define the universe.
    AwaitingUniverse,
    /// The universe is known; sets, relations and commands may follow.
    DefiningEntries,
    /// At least one command was run; only commands may follow.
    ReadingCommands,
    /// The input was [finished](Interpreter::finish()) successfully.
    Done,
    /// Some line failed.
    Failed,
}
impl Display for Phase {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::AwaitingUniverse => write!(f, "awaiting a universe"),
            Self::DefiningEntries => write!(f, "defining entries"),
            Self::ReadingCommands => write!(f, "reading commands"),
            Self::Done => write!(f, "done"),
            Self::Failed => write!(f, "failed"),
        }
    }
}





/***** LIBRARY *****/
/// Runs input files, one line at a time.
#[derive(Clone, Debug)]
pub struct Interpreter {
    /// The options given at construction.
    options:  InterpreterOptions,
    /// Where in the input we are.
    phase:    Phase,
    /// The number of lines fed so far.
    line:     usize,
    /// The universe. Empty until the first line is fed.
    universe: Universe,
    /// The definitions, resolvable by ordinal.
    store:    LineStore,
}

// Constructors
impl Default for Interpreter {
    #[inline]
    fn default() -> Self { Self::new() }
}
impl Interpreter {
    /// Creates a new Interpreter with [default options](InterpreterOptions::default()).
    #[inline]
    pub fn new() -> Self { Self::with_options(InterpreterOptions::default()) }

    /// Creates a new Interpreter with the given options.
    ///
    /// # Arguments
    /// - `options`: The [`InterpreterOptions`] to run with.
    ///
    /// # Returns
    /// A new Interpreter that awaits the universe.
    #[inline]
    pub fn with_options(options: InterpreterOptions) -> Self {
        Self { options, phase: Phase::AwaitingUniverse, line: 0, universe: Universe::new(), store: LineStore::default() }
    }
}

// Running
impl Interpreter {
    /// Processes a single line of input.
    ///
    /// Any failure is final: the interpreter moves to [`Phase::Failed`] and refuses more input.
    ///
    /// # Arguments
    /// - `raw`: The line to process. A trailing newline is ignored.
    /// - `out`: The [`Write`]r to echo definitions and print command results to.
    ///
    /// # Errors
    /// This function errors if the line is not valid at this point in the input, or if writing
    /// to `out` fails.
    pub fn feed<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<(), Error> {
        if matches!(self.phase, Phase::Done | Phase::Failed) {
            return Err(Error::Halted { phase: self.phase });
        }
        let res: Result<(), Error> = self.feed_line(raw, out);
        if res.is_err() {
            self.phase = Phase::Failed;
        }
        res
    }

    /// Does the work for [`Interpreter::feed()`] without the failure bookkeeping.
    fn feed_line<W: Write>(&mut self, raw: &str, out: &mut W) -> Result<(), Error> {
        self.line += 1;
        let line: usize = self.line;
        if let Some(max) = self.options.max_lines {
            if line > max {
                return Err(Error::TooManyLines { max });
            }
        }

        let parsed: Line = parser::parse_line(raw).map_err(|err| Error::Parse { line, err })?;
        debug!("Line {line}: {} directive ({} argument(s)) in phase {}", parsed.directive.variant(), parsed.args().len(), self.phase.variant());
        match (self.phase, parsed.directive) {
            (Phase::AwaitingUniverse, Directive::Universe) => {
                let universe: Universe = Universe::load(&parsed.tokens).map_err(|err| Error::Universe { line, err })?;
                writeln!(out, "{universe}").map_err(|err| Error::Write { err })?;
                self.store = LineStore::new(&universe);
                self.universe = universe;
                self.phase = Phase::DefiningEntries;
                Ok(())
            },
            (Phase::AwaitingUniverse, got) => Err(Error::MissingUniverse { line, got }),

            (Phase::ReadingCommands, directive @ (Directive::Universe | Directive::Set | Directive::Relation)) => {
                Err(Error::DefinitionAfterCommand { line, directive })
            },
            (_, Directive::Universe) => Err(Error::DuplicateUniverse { line }),

            (_, Directive::Set) => {
                let set: Set = Set::load(&self.universe, &parsed.tokens).map_err(|err| Error::Set { line, err })?;
                writeln!(out, "{}", set.display(&self.universe)).map_err(|err| Error::Write { err })?;
                let ordinal: usize = self.store.append(set);
                trace!("Stored set from line {line} as ordinal {ordinal}");
                Ok(())
            },
            (_, Directive::Relation) => {
                let rel: Relation = Relation::load(&self.universe, &parsed.tokens).map_err(|err| Error::Relation { line, err })?;
                writeln!(out, "{}", rel.display(&self.universe)).map_err(|err| Error::Write { err })?;
                let ordinal: usize = self.store.append(rel);
                trace!("Stored relation from line {line} as ordinal {ordinal}");
                Ok(())
            },
            (_, Directive::Command) => {
                let value: Value = commands::dispatch(&self.universe, &self.store, &parsed.tokens).map_err(|err| Error::Command { line, err })?;
                trace!("Command on line {line} yielded {} value", value.variant());
                writeln!(out, "{}", value.display(&self.universe)).map_err(|err| Error::Write { err })?;
                self.phase = Phase::ReadingCommands;
                Ok(())
            },
        }
    }

    /// Tells the interpreter that there is no more input.
    ///
    /// # Errors
    /// This function errors if no line was fed at all, or if the interpreter had already
    /// finished or failed.
    pub fn finish(&mut self) -> Result<(), Error> {
        match self.phase {
            Phase::AwaitingUniverse => {
                self.phase = Phase::Failed;
                Err(Error::EmptyInput)
            },
            Phase::DefiningEntries | Phase::ReadingCommands => {
                if self.phase == Phase::DefiningEntries {
                    warn!("Input contains no commands");
                }
                debug!("Finished after {} line(s), {} stored definition(s)", self.line, self.store.len());
                self.phase = Phase::Done;
                Ok(())
            },
            Phase::Done | Phase::Failed => Err(Error::Halted { phase: self.phase }),
        }
    }

    /// Runs a whole input from start to finish.
    ///
    /// # Arguments
    /// - `input`: The [`BufRead`]er to read lines from.
    /// - `out`: The [`Write`]r to echo definitions and print command results to. It is flushed
    ///   once all input has been processed.
    ///
    /// # Errors
    /// This function errors on the first line that fails, leaving the rest of the input unread.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), Error> {
        for raw in input.lines() {
            let raw: String = match raw {
                Ok(raw) => raw,
                Err(err) => {
                    self.phase = Phase::Failed;
                    return Err(Error::Read { line: self.line + 1, err });
                },
            };
            self.feed(&raw, &mut out)?;
        }
        self.finish()?;
        out.flush().map_err(|err| Error::Write { err })
    }
}

// Accessors
impl Interpreter {
    /// Returns where in the input this interpreter is.
    #[inline]
    pub const fn phase(&self) -> Phase { self.phase }

    /// Returns the number of lines fed so far.
    #[inline]
    pub const fn lines(&self) -> usize { self.line }

    /// Returns the universe, which is empty until the first line is fed.
    #[inline]
    pub const fn universe(&self) -> &Universe { &self.universe }

    /// Returns the definitions made so far.
    #[inline]
    pub const fn store(&self) -> &LineStore { &self.store }
}



/// Runs a whole input with [default options](InterpreterOptions::default()).
///
/// # Arguments
/// - `input`: The [`BufRead`]er to read lines from.
/// - `out`: The [`Write`]r to print to.
///
/// # Errors
/// This function errors on the first line that fails. See [`Interpreter::run()`].
#[inline]
pub fn interpret(input: impl BufRead, out: impl Write) -> Result<(), Error> { Interpreter::new().run(input, out) }





/***** TESTS *****/
