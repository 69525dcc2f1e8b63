//  VALUE.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 16:02:47
//  Last edited:
//    22 Apr 2025, 16:20:13
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the results of commands and how they are printed.
//

use std::fmt::{Display, Formatter, Result as FResult};

use enum_debug::EnumDebug;

use crate::model::{Set, Universe};


/***** FORMATTERS *****/
/// Renders a [`Value`] with the item names of its [`Universe`].
///
/// Obtained through [`Value::display()`].
#[derive(Clone, Copy, Debug)]
pub struct ValueDisplay<'v> {
    value:    &'v Value,
    universe: &'v Universe,
}
impl<'v> Display for ValueDisplay<'v> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self.value {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Count(value) => write!(f, "{value}"),
            Value::Set(set) => set.display(self.universe).fmt(f),
        }
    }
}





/***** LIBRARY *****/
/// The result of a single command.
#[derive(Clone, Debug, EnumDebug, Eq, PartialEq)]
pub enum Value {
    /// Printed as `true` or `false`.
    Bool(bool),
    /// Printed as a decimal number.
    Count(usize),
    /// Printed as `S a b c`.
    Set(Set),
}
impl Value {
    /// Returns an object that renders this value as a single output line (without newline).
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] that any set in this value was built against.
    #[inline]
    pub fn display<'v>(&'v self, universe: &'v Universe) -> ValueDisplay<'v> { ValueDisplay { value: self, universe } }
}
impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self { Self::Bool(value) }
}
impl From<usize> for Value {
    #[inline]
    fn from(value: usize) -> Self { Self::Count(value) }
}
impl From<Set> for Value {
    #[inline]
    fn from(value: Set) -> Self { Self::Set(value) }
}





/***** TESTS *****/
