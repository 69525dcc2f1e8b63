//  RELATION.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 14:11:52
//  Last edited:
//    23 Apr 2025, 11:07:40
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements binary relations over a [`Universe`].
//!
//!   In the input, a pair is written across two tokens:
//!   ```plain
//!   R (a b) (b c)
//!   ```
//!   i.e., the first token of a pair opens with `(` and the second one
//!   closes with `)`.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use indexmap::IndexSet;

use super::universe::{ItemId, Universe};
use crate::parser::Directive;


/***** ERRORS *****/
/// Defines errors that occur when [loading](Relation::load()) a relation.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line was not a relation definition.
    NotARelation { tag: String },
    /// The pairs were given with an odd number of tokens.
    OddTokenCount { count: usize },
    /// A pair was not delimited by parenthesis properly.
    MalformedPair { first: String, second: String },
    /// An endpoint of a pair is not in the universe.
    UnknownItem { item: String },
    /// A pair occurs more than once.
    DuplicatePair { first: String, second: String },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::NotARelation { tag } => write!(f, "Expected a relation definition ('R'), got '{tag}'"),
            Self::OddTokenCount { count } => {
                write!(f, "Relation has {count} tokens after 'R', but pairs always take two")
            },
            Self::MalformedPair { first, second } => write!(f, "Malformed pair \"{first} {second}\" (expected \"(a b)\")"),
            Self::UnknownItem { item } => write!(f, "Item '{item}' is not in the universe"),
            Self::DuplicatePair { first, second } => write!(f, "Pair ({first}, {second}) occurs more than once in the relation"),
        }
    }
}
impl error::Error for Error {}





/***** HELPER FUNCTIONS *****/
/// Removes the parenthesis from the two tokens making up a pair.
///
/// # Arguments
/// - `open`: The first token, e.g., `(a`.
/// - `close`: The second token, e.g., `b)`.
///
/// # Returns
/// The two endpoints, or [`None`] if the tokens are not delimited exactly as `(a` and `b)`.
fn unwrap_pair<'s>(open: &'s str, close: &'s str) -> Option<(&'s str, &'s str)> {
    let first: &str = open.strip_prefix('(')?;
    let second: &str = close.strip_suffix(')')?;
    let is_bare = |s: &str| !s.is_empty() && !s.contains(['(', ')']);
    if is_bare(first) && is_bare(second) { Some((first, second)) } else { None }
}





/***** FORMATTERS *****/
/// Renders a [`Relation`] with the item names of its [`Universe`].
///
/// Obtained through [`Relation::display()`].
#[derive(Clone, Copy, Debug)]
pub struct RelationDisplay<'r> {
    rel:      &'r Relation,
    universe: &'r Universe,
}
impl<'r> Display for RelationDisplay<'r> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{}", Directive::Relation.tag())?;
        for pair in &self.rel.pairs {
            write!(f, " ({}, {})", self.universe.name(pair.first), self.universe.name(pair.second))?;
        }
        Ok(())
    }
}





/***** LIBRARY *****/
/// An ordered pair of items.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pair {
    /// The left-hand side of the pair.
    pub first:  ItemId,
    /// The right-hand side of the pair.
    pub second: ItemId,
}
impl Pair {
    /// Constructor for the Pair.
    #[inline]
    pub const fn new(first: ItemId, second: ItemId) -> Self { Self { first, second } }

    /// Returns the same pair with the endpoints swapped.
    #[inline]
    pub const fn flipped(&self) -> Self { Self { first: self.second, second: self.first } }

    /// Returns whether both endpoints are the same item.
    #[inline]
    pub fn is_loop(&self) -> bool { self.first == self.second }
}



/// A binary relation, i.e., a set of [`Pair`]s over some [`Universe`].
///
/// Pairs are kept in the order they were defined. Comparing relations ignores it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Relation {
    pairs: IndexSet<Pair>,
}

// Constructors
impl Relation {
    /// Creates a new, empty relation.
    #[inline]
    pub fn new() -> Self { Self { pairs: IndexSet::new() } }

    /// Builds a relation from a tokenized `R`-line.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] to resolve items in.
    /// - `tokens`: The tokens of the line, _including_ the leading `R`.
    ///
    /// # Returns
    /// A new Relation with the given pairs, in order.
    ///
    /// # Errors
    /// This function errors if the first token is not `R`, if the pairs are not written as
    /// `(a b)`, if an endpoint is not in the `universe` or if a pair is given twice.
    pub fn load(universe: &Universe, tokens: &[&str]) -> Result<Self, Error> {
        let Some((&tag, args)) = tokens.split_first() else {
            return Err(Error::NotARelation { tag: String::new() });
        };
        if tag != Directive::Relation.tag() {
            return Err(Error::NotARelation { tag: tag.into() });
        }
        if args.len() % 2 != 0 {
            return Err(Error::OddTokenCount { count: args.len() });
        }

        let mut pairs: IndexSet<Pair> = IndexSet::with_capacity(args.len() / 2);
        for chunk in args.chunks_exact(2) {
            let (open, close): (&str, &str) = (chunk[0], chunk[1]);
            let (first, second): (&str, &str) =
                unwrap_pair(open, close).ok_or_else(|| Error::MalformedPair { first: open.into(), second: close.into() })?;

            let lookup = |item: &str| universe.lookup(item).ok_or_else(|| Error::UnknownItem { item: item.into() });
            let pair: Pair = Pair::new(lookup(first)?, lookup(second)?);
            if !pairs.insert(pair) {
                return Err(Error::DuplicatePair { first: first.into(), second: second.into() });
            }
        }
        Ok(Self { pairs })
    }
}

// Collection
impl Relation {
    /// Checks if the given pair is in this relation.
    #[inline]
    pub fn contains(&self, pair: &Pair) -> bool { self.pairs.contains(pair) }

    /// Returns the pairs in this relation, in order.
    #[inline]
    pub fn iter(&self) -> impl '_ + DoubleEndedIterator<Item = Pair> + ExactSizeIterator { self.pairs.iter().copied() }

    /// Returns the number of pairs in this relation.
    #[inline]
    pub fn len(&self) -> usize { self.pairs.len() }

    /// Returns whether this relation has no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool { self.pairs.is_empty() }

    /// Returns an object that renders this relation as `R (a, b) (c, d)`.
    ///
    /// # Arguments
    /// - `universe`: The [`Universe`] this relation was built against.
    #[inline]
    pub fn display<'r>(&'r self, universe: &'r Universe) -> RelationDisplay<'r> { RelationDisplay { rel: self, universe } }
}
impl FromIterator<Pair> for Relation {
    /// Collects pairs into a relation, skipping duplicates.
    #[inline]
    fn from_iter<T: IntoIterator<Item = Pair>>(iter: T) -> Self { Self { pairs: iter.into_iter().collect() } }
}
impl<'r> IntoIterator for &'r Relation {
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'r, Pair>>;
    type Item = Pair;

    #[inline]
    fn into_iter(self) -> Self::IntoIter { self.pairs.iter().copied() }
}





/***** TESTS *****/
