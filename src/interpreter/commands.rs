//  COMMANDS.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 15:12:26
//  Last edited:
//    23 Apr 2025, 10:31:50
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the command dispatcher.
//!
//!   A command line looks like:
//!   ```plain
//!   C <name> <ordinal> ...
//!   ```
//!   where every ordinal is resolved in the [`LineStore`] and handed to the
//!   matching function in [`crate::ops`].
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use enum_debug::EnumDebug;

use super::store::{self, LineStore};
use super::value::Value;
use crate::log::trace;
use crate::model::{Relation, Set, Universe};
use crate::ops::{relations, sets};
use crate::parser::Directive;


/***** HELPER MACROS *****/
/// Generates an enum of commands together with their names and number of operands.
///
/// Every command is given as `name / arity`, where `name` is the exact command name as written
/// in the input. The variant is its CamelCase counterpart.
macro_rules! command_table {
    ($(#[doc = $doc:literal])* $enum:ident { $($(#[doc = $vdoc:literal])* $name:ident / $arity:literal),+ $(,)? }) => {
        paste::paste! {
            $(#[doc = $doc])*
            #[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
            pub enum $enum {
                $(
                    $(#[doc = $vdoc])*
                    [<$name:camel>],
                )+
            }
            impl $enum {
                #[doc = concat!("All [`", stringify!($enum), "`]s, in definition order.")]
                pub const ALL: &'static [Self] = &[$(Self::[<$name:camel>]),+];

                /// Finds a command by its exact name.
                ///
                /// # Arguments
                /// - `name`: The name to look for. Matching is case-sensitive.
                ///
                /// # Returns
                /// The command, or [`None`] if there is no command with that name.
                #[inline]
                pub fn from_name(name: &str) -> Option<Self> {
                    match name {
                        $(stringify!($name) => Some(Self::[<$name:camel>]),)+
                        _ => None,
                    }
                }

                /// Returns the name of this command as written in the input.
                #[inline]
                pub const fn name(&self) -> &'static str {
                    match self {
                        $(Self::[<$name:camel>] => stringify!($name),)+
                    }
                }

                /// Returns the number of line ordinals this command takes.
                #[inline]
                pub const fn arity(&self) -> usize {
                    match self {
                        $(Self::[<$name:camel>] => $arity,)+
                    }
                }
            }
        }
    };
}





/***** ERRORS *****/
/// Defines errors that occur when [dispatching](dispatch()) a command.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line was not a command.
    NotACommand { tag: String },
    /// There was no command name after the `C`.
    MissingCommandName,
    /// The command name is not known.
    UnknownCommand { name: String },
    /// The command was given the wrong number of operands.
    OperandCount { command: Command, expected: usize, got: usize },
    /// An operand is not a line number.
    InvalidOrdinal { raw: String },
    /// Failed to resolve an operand.
    Resolve { command: Command, err: store::Error },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::NotACommand { tag } => write!(f, "Expected a command ('C'), got '{tag}'"),
            Self::MissingCommandName => write!(f, "Missing command name after 'C'"),
            Self::UnknownCommand { name } => write!(f, "Unknown command '{name}'"),
            Self::OperandCount { command, expected, got } => write!(
                f,
                "Command '{command}' takes {expected} operand{}, got {got}",
                if *expected == 1 { "" } else { "s" }
            ),
            Self::InvalidOrdinal { raw } => write!(f, "Operand '{raw}' is not a line number"),
            Self::Resolve { command, .. } => write!(f, "Failed to resolve operands of command '{command}'"),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Resolve { err, .. } => Some(err),
            Self::NotACommand { .. }
            | Self::MissingCommandName
            | Self::UnknownCommand { .. }
            | Self::OperandCount { .. }
            | Self::InvalidOrdinal { .. } => None,
        }
    }
}





/***** LIBRARY *****/
command_table! {
    /// The commands operating on [`Set`]s.
    SetCommand {
        /// `empty A`: whether `A` has no items.
        empty / 1,
        /// `card A`: the number of items in `A`.
        card / 1,
        /// `complement A`: everything in the universe not in `A`.
        complement / 1,
        /// `union A B`: everything in `A` or `B`.
        union / 2,
        /// `intersect A B`: everything in `A` and `B`.
        intersect / 2,
        /// `minus A B`: everything in `A` but not in `B`.
        minus / 2,
        /// `subseteq A B`: whether `A` is a subset of `B`.
        subseteq / 2,
        /// `subset A B`: whether `A` is a proper subset of `B`.
        subset / 2,
        /// `equals A B`: whether `A` and `B` have the same items.
        equals / 2,
    }
}

command_table! {
    /// The commands operating on [`Relation`]s.
    ///
    /// The commands with three operands take a relation, then two sets.
    RelationCommand {
        reflexive / 1,
        symmetric / 1,
        antisymmetric / 1,
        transitive / 1,
        function / 1,
        domain / 1,
        codomain / 1,
        injective / 3,
        surjective / 3,
        bijective / 3,
    }
}



/// Any command, classified by what it operates on.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum Command {
    Set(SetCommand),
    Relation(RelationCommand),
}
impl Command {
    /// Finds a command by its exact name.
    ///
    /// # Arguments
    /// - `name`: The name to look for. Matching is case-sensitive.
    ///
    /// # Returns
    /// The command, or [`None`] if there is no command with that name.
    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        SetCommand::from_name(name).map(Self::Set).or_else(|| RelationCommand::from_name(name).map(Self::Relation))
    }

    /// Returns the name of this command as written in the input.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Set(cmd) => cmd.name(),
            Self::Relation(cmd) => cmd.name(),
        }
    }

    /// Returns the number of line ordinals this command takes.
    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Set(cmd) => cmd.arity(),
            Self::Relation(cmd) => cmd.arity(),
        }
    }
}
impl Display for Command {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "{}", self.name()) }
}



/// Checks whether a word is the name of any command, ignoring ASCII case.
///
/// # Arguments
/// - `word`: The word to check.
///
/// # Returns
/// True if some [`SetCommand`] or [`RelationCommand`] is named like this.
#[inline]
pub fn is_command_name(word: &str) -> bool {
    SetCommand::ALL.iter().map(SetCommand::name).chain(RelationCommand::ALL.iter().map(RelationCommand::name)).any(|name| name.eq_ignore_ascii_case(word))
}



/// Parses a command line and runs it.
///
/// # Arguments
/// - `universe`: The [`Universe`] that the definitions were built against.
/// - `store`: The [`LineStore`] to resolve operands in.
/// - `tokens`: The tokens of the line, _including_ the leading `C`.
///
/// # Returns
/// The [`Value`] computed by the command.
///
/// # Errors
/// This function errors if the line is not a well-formed command or if its operands do not
/// refer to the right kind of definition.
pub fn dispatch(universe: &Universe, store: &LineStore, tokens: &[&str]) -> Result<Value, Error> {
    let Some((&tag, args)) = tokens.split_first() else {
        return Err(Error::NotACommand { tag: String::new() });
    };
    if tag != Directive::Command.tag() {
        return Err(Error::NotACommand { tag: tag.into() });
    }
    let Some((&name, operands)) = args.split_first() else {
        return Err(Error::MissingCommandName);
    };

    // Figure out what to run and on what
    let command: Command = Command::from_name(name).ok_or_else(|| Error::UnknownCommand { name: name.into() })?;
    if operands.len() != command.arity() {
        return Err(Error::OperandCount { command, expected: command.arity(), got: operands.len() });
    }
    let ordinals: Vec<i64> =
        operands.iter().map(|raw| raw.parse::<i64>().map_err(|_| Error::InvalidOrdinal { raw: (*raw).into() })).collect::<Result<_, _>>()?;
    trace!("Running command '{command}' on line(s) {ordinals:?}");

    // Run it
    let value: Result<Value, store::Error> = match command {
        Command::Set(cmd) => run_set_command(cmd, universe, store, &ordinals),
        Command::Relation(cmd) => run_relation_command(cmd, store, &ordinals),
    };
    value.map_err(|err| Error::Resolve { command, err })
}

/// Runs a [`SetCommand`] on already parsed ordinals.
///
/// Assumes the number of ordinals matches the command's arity.
fn run_set_command(cmd: SetCommand, universe: &Universe, store: &LineStore, ordinals: &[i64]) -> Result<Value, store::Error> {
    let lhs: &Set = store.resolve_set(ordinals[0])?;
    let rhs = || store.resolve_set(ordinals[1]);
    Ok(match cmd {
        SetCommand::Empty => sets::empty(lhs).into(),
        SetCommand::Card => sets::card(lhs).into(),
        SetCommand::Complement => sets::complement(universe, lhs).into(),
        SetCommand::Union => sets::union(lhs, rhs()?).into(),
        SetCommand::Intersect => sets::intersect(lhs, rhs()?).into(),
        SetCommand::Minus => sets::minus(lhs, rhs()?).into(),
        SetCommand::Subseteq => sets::subseteq(lhs, rhs()?).into(),
        SetCommand::Subset => sets::subset(lhs, rhs()?).into(),
        SetCommand::Equals => sets::equals(lhs, rhs()?).into(),
    })
}

/// Resolves the second and third ordinal as the sets a function goes between.
#[inline]
fn resolve_between<'s>(store: &'s LineStore, ordinals: &[i64]) -> Result<(&'s Set, &'s Set), store::Error> {
    Ok((store.resolve_set(ordinals[1])?, store.resolve_set(ordinals[2])?))
}

/// Runs a [`RelationCommand`] on already parsed ordinals.
///
/// Assumes the number of ordinals matches the command's arity.
fn run_relation_command(cmd: RelationCommand, store: &LineStore, ordinals: &[i64]) -> Result<Value, store::Error> {
    let rel: &Relation = store.resolve_relation(ordinals[0])?;
    let between = || resolve_between(store, ordinals);
    Ok(match cmd {
        RelationCommand::Reflexive => relations::reflexive(rel).into(),
        RelationCommand::Symmetric => relations::symmetric(rel).into(),
        RelationCommand::Antisymmetric => relations::antisymmetric(rel).into(),
        RelationCommand::Transitive => relations::transitive(rel).into(),
        RelationCommand::Function => relations::function(rel).into(),
        RelationCommand::Domain => relations::domain(rel).into(),
        RelationCommand::Codomain => relations::codomain(rel).into(),
        RelationCommand::Injective => {
            let (from, to) = between()?;
            relations::injective(rel, from, to).into()
        },
        RelationCommand::Surjective => {
            let (from, to) = between()?;
            relations::surjective(rel, from, to).into()
        },
        RelationCommand::Bijective => {
            let (from, to) = between()?;
            relations::bijective(rel, from, to).into()
        },
    })
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{make_rel, make_set, make_universe};


    /// Builds a store with `S a b` on line 2, `S b c` on line 3 and `R (a b) (b b)` on line 4.
    fn setup() -> (Universe, LineStore) {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let mut store: LineStore = LineStore::new(&universe);
        store.append(make_set(&universe, ["a", "b"]));
        store.append(make_set(&universe, ["b", "c"]));
        store.append(make_rel(&universe, [("a", "b"), ("b", "b")]));
        (universe, store)
    }

    /// Runs a command line on the [`setup()`] store and renders the result.
    fn run(line: &str) -> Result<String, Error> {
        let (universe, store) = setup();
        let tokens: Vec<&str> = line.split(' ').collect();
        dispatch(&universe, &store, &tokens).map(|value| value.display(&universe).to_string())
    }


    #[test]
    fn test_command_table() {
        assert_eq!(SetCommand::ALL.len(), 9);
        assert_eq!(RelationCommand::ALL.len(), 10);
        assert_eq!(Command::from_name("union"), Some(Command::Set(SetCommand::Union)));
        assert_eq!(Command::from_name("bijective"), Some(Command::Relation(RelationCommand::Bijective)));
        assert_eq!(Command::from_name("Union"), None);
        assert_eq!(SetCommand::Subseteq.name(), "subseteq");
        assert_eq!(RelationCommand::Injective.arity(), 3);
        assert!(is_command_name("CoDomain"));
        assert!(!is_command_name("codomains"));
    }

    #[test]
    fn test_dispatch_set_commands() {
        assert_eq!(run("C empty 2").unwrap(), "false");
        assert_eq!(run("C card 1").unwrap(), "3");
        assert_eq!(run("C complement 2").unwrap(), "S c");
        assert_eq!(run("C union 3 2").unwrap(), "S a b c");
        assert_eq!(run("C intersect 2 3").unwrap(), "S b");
        assert_eq!(run("C minus 1 3").unwrap(), "S a");
        assert_eq!(run("C subseteq 2 1").unwrap(), "true");
        assert_eq!(run("C subset 1 1").unwrap(), "false");
        assert_eq!(run("C equals 2 3").unwrap(), "false");
    }

    #[test]
    fn test_dispatch_relation_commands() {
        assert_eq!(run("C reflexive 4").unwrap(), "false");
        assert_eq!(run("C symmetric 4").unwrap(), "false");
        assert_eq!(run("C antisymmetric 4").unwrap(), "true");
        assert_eq!(run("C transitive 4").unwrap(), "true");
        assert_eq!(run("C function 4").unwrap(), "true");
        assert_eq!(run("C domain 4").unwrap(), "S a b");
        assert_eq!(run("C codomain 4").unwrap(), "S b");
        assert_eq!(run("C injective 4 2 3").unwrap(), "false");
        assert_eq!(run("C surjective 4 2 2").unwrap(), "false");
        assert_eq!(run("C bijective 4 2 1").unwrap(), "false");
    }

    #[test]
    fn test_dispatch_errors() {
        assert_eq!(run("C"), Err(Error::MissingCommandName));
        assert_eq!(run("C size 2"), Err(Error::UnknownCommand { name: "size".into() }));
        assert_eq!(run("C Card 2"), Err(Error::UnknownCommand { name: "Card".into() }));
        assert_eq!(
            run("C union 2"),
            Err(Error::OperandCount { command: Command::Set(SetCommand::Union), expected: 2, got: 1 })
        );
        assert_eq!(run("C card two"), Err(Error::InvalidOrdinal { raw: "two".into() }));
        assert_eq!(
            run("C card 5"),
            Err(Error::Resolve { command: Command::Set(SetCommand::Card), err: store::Error::LineOutOfRange { ordinal: 5, max: 4 } })
        );
        assert_eq!(
            run("C card 4"),
            Err(Error::Resolve {
                command: Command::Set(SetCommand::Card),
                err:     store::Error::WrongEntryKind { ordinal: 4, expected: store::EntryKind::Set, got: store::EntryKind::Relation },
            })
        );
        assert_eq!(
            run("C injective 2 2 3"),
            Err(Error::Resolve {
                command: Command::Relation(RelationCommand::Injective),
                err:     store::Error::WrongEntryKind { ordinal: 2, expected: store::EntryKind::Relation, got: store::EntryKind::Set },
            })
        );
        assert_eq!(run("S a"), Err(Error::NotACommand { tag: "S".into() }));
    }
}
