//  MOD.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 11:03:12
//  Last edited:
//    16 Apr 2025, 10:48:55
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the data model of the calculator: the [`Universe`] of items
//!   and the [`Set`]s and [`Relation`]s drawn from it.
//!
//!   Items are owned once by the [`Universe`]. Sets and relations only
//!   store [`ItemId`]s into it, and need the universe back to render names.
//

// Declare submodules
pub mod relation;
pub mod set;
pub mod universe;

// Imports
pub use relation::{Pair, Relation};
pub use set::Set;
pub use universe::{ItemId, Universe};
