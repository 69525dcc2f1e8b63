//  SET.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 13:20:09
//  Last edited:
//    22 Apr 2025, 15:36:44
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements sets of items drawn from a [`Universe`].
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use indexmap::IndexSet;

use super::universe::{ItemId, Universe};
use crate::parser::Directive;


/***** ERRORS *****/
/// Defines errors that occur when [loading](Set::load()) a set.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line was not a set definition.
    NotASet { tag: String },
    /// An item is not in the universe.
    UnknownItem { item: String },
    /// An item occurs more than once.
    DuplicateItem { item: String },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::NotASet { tag } => write!(f, "Expected a set definition ('S'), got '{tag}'"),
            Self::UnknownItem { item } => write!(f, "Item '{item}' is not in the universe"),
            Self::DuplicateItem { item } => write!(f, "Item '{item}' occurs more than once in the set"),
        }
    }
}
impl error::Error for Error {}





/***** FORMATTERS *****/
/// Renders a [`Set`] with the item names of its [`Universe`].
///
/// Obtained through [`Set::display()`].
#[derive(Clone, Copy, Debug)]
pub struct SetDisplay<'s> {
    set:      &'s Set,
    universe: &'s Universe,
}
impl<'s> Display for SetDisplay<'s> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{}", Directive::Set.tag())?;
        for id in &self.set.items {
            write!(f, " {}", self.universe.name(*id))?;
        }
        Ok(())
    }
}





/***** LIBRARY *****/
/// An ordered collection of distinct items of some [`Universe`].
///
/// The order is the order in which items were added. Note that comparing sets ignores it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Set {
    items: IndexSet<ItemId>,
}

// Constructors
impl Set {
    /// Creates a new, empty set.
    #[inline]
    pub fn new() -> Self { Self { items: IndexSet::new() } }

    /// Creates the set that contains the whole universe, in universe order.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] to take all items of.
    ///
    /// # Returns
    /// A new Set with every item.
    #[inline]
    pub fn from_universe(universe: &Universe) -> Self { Self { items: universe.ids().collect() } }

    /// Builds a set from a tokenized `S`-line.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] to resolve items in.
    /// - `tokens`: The tokens of the line, _including_ the leading `S`.
    ///
    /// # Returns
    /// A new Set with the given items, in order.
    ///
    /// # Errors
    /// This function errors if the first token is not `S`, if an item is not part of the
    /// `universe` or if an item is given twice.
    pub fn load(universe: &Universe, tokens: &[&str]) -> Result<Self, Error> {
        let Some((&tag, items)) = tokens.split_first() else {
            return Err(Error::NotASet { tag: String::new() });
        };
        if tag != Directive::Set.tag() {
            return Err(Error::NotASet { tag: tag.into() });
        }

        let mut set: IndexSet<ItemId> = IndexSet::with_capacity(items.len());
        for &item in items {
            let id: ItemId = universe.lookup(item).ok_or_else(|| Error::UnknownItem { item: item.into() })?;
            if !set.insert(id) {
                return Err(Error::DuplicateItem { item: item.into() });
            }
        }
        Ok(Self { items: set })
    }
}

// Collection
impl Set {
    /// Checks if the given item is in this set.
    #[inline]
    pub fn contains(&self, id: ItemId) -> bool { self.items.contains(&id) }

    /// Returns the items in this set, in order.
    #[inline]
    pub fn iter(&self) -> impl '_ + DoubleEndedIterator<Item = ItemId> + ExactSizeIterator { self.items.iter().copied() }

    /// Returns the number of items in this set (its cardinality).
    #[inline]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns whether this set has no items.
    #[inline]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Returns a copy of this set with its items sorted in universe order.
    #[inline]
    pub fn sorted(&self) -> Self {
        let mut items: IndexSet<ItemId> = self.items.clone();
        items.sort();
        Self { items }
    }

    /// Returns an object that renders this set as `S a b c`.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] this set was built against.
    #[inline]
    pub fn display<'s>(&'s self, universe: &'s Universe) -> SetDisplay<'s> { SetDisplay { set: self, universe } }
}
impl FromIterator<ItemId> for Set {
    /// Collects item IDs into a set, skipping duplicates.
    #[inline]
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self { Self { items: iter.into_iter().collect() } }
}
impl<'s> IntoIterator for &'s Set {
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'s, ItemId>>;
    type Item = ItemId;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.items.iter().copied() }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::make_universe;


    #[test]
    fn test_set_load() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let set: Set = Set::load(&universe, &["S", "c", "a"]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(universe.lookup("a").unwrap()));
        assert!(!set.contains(universe.lookup("b").unwrap()));
        assert_eq!(set.display(&universe).to_string(), "S c a");
        assert_eq!(set.sorted().display(&universe).to_string(), "S a c");
    }

    #[test]
    fn test_set_load_empty() {
        let universe: Universe = make_universe(["a"]);
        let set: Set = Set::load(&universe, &["S"]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.display(&universe).to_string(), "S");
    }

    #[test]
    fn test_set_load_errors() {
        let universe: Universe = make_universe(["a", "b"]);
        assert_eq!(Set::load(&universe, &["S", "a", "x"]), Err(Error::UnknownItem { item: "x".into() }));
        assert_eq!(Set::load(&universe, &["S", "A"]), Err(Error::UnknownItem { item: "A".into() }));
        assert_eq!(Set::load(&universe, &["S", "a", "b", "a"]), Err(Error::DuplicateItem { item: "a".into() }));
        assert_eq!(Set::load(&universe, &["R", "a"]), Err(Error::NotASet { tag: "R".into() }));
    }

    #[test]
    fn test_set_equality_ignores_order() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let lhs: Set = Set::load(&universe, &["S", "a", "b"]).unwrap();
        let rhs: Set = Set::load(&universe, &["S", "b", "a"]).unwrap();
        assert_eq!(lhs, rhs);
        assert_eq!(Set::from_universe(&universe).display(&universe).to_string(), "S a b c");
    }
}
