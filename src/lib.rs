//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 10:02:17
//  Last edited:
//    22 Apr 2025, 16:41:09
//  Auto updated?
//    Yes
//
//  Description:
//!   A small calculator for sets and binary relations over a finite
//!   universe.
//!
//!   Input is a line-oriented file: one `U`niverse line, then any number of
//!   `S`et and `R`elation definitions, then any number of `C`ommands that
//!   query the definitions by line number.
//

// Declare modules
pub mod interpreter;
mod log;
pub mod model;
pub mod ops;
pub mod parser;
#[cfg(test)]
mod tests;
