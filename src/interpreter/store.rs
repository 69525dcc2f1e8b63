//  STORE.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 14:30:05
//  Last edited:
//    23 Apr 2025, 09:41:19
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the line store, which remembers every definition by the
//!   line it was given on so that commands can refer to it.
//!
//!   Ordinal 1 always refers to the universe (as a [`Set`]); ordinal `k`
//!   refers to the `k - 1`-th definition after it.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use enum_debug::EnumDebug;

use crate::model::{Relation, Set, Universe};


/***** ERRORS *****/
/// Defines errors that occur when [resolving](LineStore::resolve()) ordinals.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The ordinal does not refer to a defined line.
    LineOutOfRange { ordinal: i64, max: usize },
    /// The ordinal refers to the wrong kind of definition.
    WrongEntryKind { ordinal: i64, expected: EntryKind, got: EntryKind },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::LineOutOfRange { ordinal, max } => write!(f, "Line {ordinal} does not refer to a definition (expected 1 to {max})"),
            Self::WrongEntryKind { ordinal, expected, got } => write!(f, "Line {ordinal} defines a {got}, but a {expected} is required"),
        }
    }
}
impl error::Error for Error {}





/***** FORMATTERS *****/
/// Renders an [`Entry`] with the item names of its [`Universe`].
///
/// Obtained through [`Entry::display()`].
#[derive(Clone, Copy, Debug)]
pub struct EntryDisplay<'e> {
    entry:    &'e Entry,
    universe: &'e Universe,
}
impl<'e> Display for EntryDisplay<'e> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self.entry {
            Entry::Set(set) => set.display(self.universe).fmt(f),
            Entry::Relation(rel) => rel.display(self.universe).fmt(f),
        }
    }
}





/***** LIBRARY *****/
/// Names the two kinds of [`Entry`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntryKind {
    Set,
    Relation,
}
impl Display for EntryKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::Set => write!(f, "set"),
            Self::Relation => write!(f, "relation"),
        }
    }
}



/// A single definition in the [`LineStore`].
#[derive(Clone, Debug, EnumDebug, Eq, PartialEq)]
pub enum Entry {
    /// Defined by an `S`-line (or the universe itself).
    Set(Set),
    /// Defined by an `R`-line.
    Relation(Relation),
}
impl Entry {
    /// Returns which kind of entry this is.
    #[inline]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Set(_) => EntryKind::Set,
            Self::Relation(_) => EntryKind::Relation,
        }
    }

    /// Returns the set in this entry, if it is one.
    #[inline]
    pub const fn as_set(&self) -> Option<&Set> {
        match self {
            Self::Set(set) => Some(set),
            Self::Relation(_) => None,
        }
    }

    /// Returns the relation in this entry, if it is one.
    #[inline]
    pub const fn as_relation(&self) -> Option<&Relation> {
        match self {
            Self::Set(_) => None,
            Self::Relation(rel) => Some(rel),
        }
    }

    /// Returns an object that renders this entry as its definition line.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] this entry was built against.
    #[inline]
    pub fn display<'e>(&'e self, universe: &'e Universe) -> EntryDisplay<'e> { EntryDisplay { entry: self, universe } }
}
impl From<Set> for Entry {
    #[inline]
    fn from(value: Set) -> Self { Self::Set(value) }
}
impl From<Relation> for Entry {
    #[inline]
    fn from(value: Relation) -> Self { Self::Relation(value) }
}



/// Remembers all definitions in input order.
///
/// Entries are never changed or removed once appended.
#[derive(Clone, Debug, Default)]
pub struct LineStore {
    /// The entries. The first is always the universe.
    entries: Vec<Entry>,
}

// Constructors
impl LineStore {
    /// Creates a new LineStore for the given universe.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] that ordinal 1 refers to.
    ///
    /// # Returns
    /// A new LineStore with only the universe in it.
    #[inline]
    pub fn new(universe: &Universe) -> Self { Self { entries: vec![Entry::Set(Set::from_universe(universe))] } }
}

// Collection
impl LineStore {
    /// Adds a new definition to the store.
    ///
    /// # Arguments
    /// - `entry`: The [`Entry`] to add.
    ///
    /// # Returns
    /// The ordinal by which the new entry can be resolved.
    #[inline]
    pub fn append(&mut self, entry: impl Into<Entry>) -> usize {
        self.entries.push(entry.into());
        self.entries.len()
    }

    /// Looks up the entry at the given ordinal.
    ///
    /// # Arguments
    /// - `ordinal`: The 1-based line number of the entry, where `1` is the universe.
    ///
    /// # Returns
    /// A reference to the [`Entry`].
    ///
    /// # Errors
    /// This function errors with [`Error::LineOutOfRange`] if `ordinal` is not positive or
    /// larger than the number of entries.
    pub fn resolve(&self, ordinal: i64) -> Result<&Entry, Error> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.entries.get(i))
            .ok_or(Error::LineOutOfRange { ordinal, max: self.entries.len() })
    }

    /// Looks up the set at the given ordinal.
    ///
    /// # Errors
    /// This function errors if the ordinal is [out of range](LineStore::resolve()) or if it
    /// refers to a [`Relation`].
    pub fn resolve_set(&self, ordinal: i64) -> Result<&Set, Error> {
        let entry: &Entry = self.resolve(ordinal)?;
        entry.as_set().ok_or(Error::WrongEntryKind { ordinal, expected: EntryKind::Set, got: entry.kind() })
    }

    /// Looks up the relation at the given ordinal.
    ///
    /// # Errors
    /// This function errors if the ordinal is [out of range](LineStore::resolve()) or if it
    /// refers to a [`Set`].
    pub fn resolve_relation(&self, ordinal: i64) -> Result<&Relation, Error> {
        let entry: &Entry = self.resolve(ordinal)?;
        entry.as_relation().ok_or(Error::WrongEntryKind { ordinal, expected: EntryKind::Relation, got: entry.kind() })
    }

    /// Returns the number of resolvable ordinals, including the universe.
    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns whether the store is empty.
    ///
    /// This is only the case for a [default](LineStore::default()) store that has no universe yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{make_rel, make_set, make_universe};


    #[test]
    fn test_store_resolve() {
        let universe: Universe = make_universe(["a", "b"]);
        let mut store: LineStore = LineStore::new(&universe);
        assert_eq!(store.append(make_set(&universe, ["b"])), 2);
        assert_eq!(store.append(make_rel(&universe, [("a", "b")])), 3);
        assert_eq!(store.len(), 3);

        assert_eq!(store.resolve(1).unwrap().display(&universe).to_string(), "S a b");
        assert_eq!(store.resolve_set(2).unwrap().display(&universe).to_string(), "S b");
        assert_eq!(store.resolve_relation(3).unwrap().display(&universe).to_string(), "R (a, b)");
    }

    #[test]
    fn test_store_out_of_range() {
        let universe: Universe = make_universe(["a"]);
        let mut store: LineStore = LineStore::new(&universe);
        store.append(make_set(&universe, []));
        assert_eq!(store.resolve(0), Err(Error::LineOutOfRange { ordinal: 0, max: 2 }));
        assert_eq!(store.resolve(-1), Err(Error::LineOutOfRange { ordinal: -1, max: 2 }));
        assert_eq!(store.resolve(3), Err(Error::LineOutOfRange { ordinal: 3, max: 2 }));
    }

    #[test]
    fn test_store_wrong_kind() {
        let universe: Universe = make_universe(["a"]);
        let mut store: LineStore = LineStore::new(&universe);
        store.append(make_rel(&universe, [("a", "a")]));
        assert_eq!(store.resolve_relation(1), Err(Error::WrongEntryKind { ordinal: 1, expected: EntryKind::Relation, got: EntryKind::Set }));
        assert_eq!(store.resolve_set(2), Err(Error::WrongEntryKind { ordinal: 2, expected: EntryKind::Set, got: EntryKind::Relation }));
    }
}
