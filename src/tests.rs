//  TESTS.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 09:20:58
//  Last edited:
//    22 Apr 2025, 16:12:04
//  Auto updated?
//    Yes
//
//  Description:
//!   Contains some common test functions.
//

#![allow(unused)]

use crate::model::{Relation, Set, Universe};


/***** LIBRARY *****/
/// Sets up a logger if wanted.
#[cfg(feature = "log")]
pub fn setup_logger() {
    use humanlog::{DebugMode, HumanLogger};

    // Check if the envs tell us to
    if let Ok(logger) = std::env::var("LOGGER") {
        if logger == "1" || logger == "true" {
            // Create the logger
            if let Err(err) = HumanLogger::terminal(DebugMode::Full).init() {
                eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
            }
        }
    }
}



/// Makes a [`Universe`] conveniently.
#[track_caller]
pub fn make_universe(items: impl IntoIterator<Item = &'static str>) -> Universe {
    let tokens: Vec<&str> = std::iter::once("U").chain(items).collect();
    Universe::load(&tokens).unwrap_or_else(|err| panic!("Failed to make universe from {tokens:?}: {err}"))
}

/// Makes a [`Set`] conveniently.
#[track_caller]
pub fn make_set(universe: &Universe, items: impl IntoIterator<Item = &'static str>) -> Set {
    let tokens: Vec<&str> = std::iter::once("S").chain(items).collect();
    Set::load(universe, &tokens).unwrap_or_else(|err| panic!("Failed to make set from {tokens:?}: {err}"))
}

/// Makes a [`Relation`] conveniently.
#[track_caller]
pub fn make_rel(universe: &Universe, pairs: impl IntoIterator<Item = (&'static str, &'static str)>) -> Relation {
    let args: Vec<String> = pairs.into_iter().flat_map(|(a, b)| [format!("({a}"), format!("{b})")]).collect();
    let tokens: Vec<&str> = std::iter::once("R").chain(args.iter().map(String::as_str)).collect();
    Relation::load(universe, &tokens).unwrap_or_else(|err| panic!("Failed to make relation from {tokens:?}: {err}"))
}
