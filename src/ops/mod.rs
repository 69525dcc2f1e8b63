//  MOD.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 09:08:41
//  Last edited:
//    15 Apr 2025, 10:40:02
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the operation library: pure functions over [`Set`]s and
//!   [`Relation`]s.
//!
//!   None of these mutate their operands; derived collections are new
//!   values.
//!
//!   [`Set`]: crate::model::Set
//!   [`Relation`]: crate::model::Relation
//

// Declare submodules
pub mod relations;
pub mod sets;
