//  UNIVERSE.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 11:05:40
//  Last edited:
//    22 Apr 2025, 15:31:18
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the universe: the fixed pool of item names that every set
//!   and relation draws from.
//!
//!   An item is 1 to [`MAX_ITEM_LEN`] ASCII letters, is unique within the
//!   universe and must not be confusable with a command name or a boolean
//!   (compared case-insensitively).
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use indexmap::IndexSet;

use crate::interpreter::commands::is_command_name;
use crate::parser::Directive;


/***** CONSTANTS *****/
/// The maximum number of characters in a single item.
pub const MAX_ITEM_LEN: usize = 30;

/// Words that can never be items, on top of the command names.
pub const RESERVED_WORDS: [&str; 2] = ["true", "false"];





/***** ERRORS *****/
/// Explains why a particular item is rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidItemReason {
    /// It is longer than [`MAX_ITEM_LEN`].
    TooLong { len: usize },
    /// It has characters that are not ASCII letters.
    NotAlphabetic,
    /// It is a command name or boolean keyword.
    Reserved,
    /// It already occurs in the universe.
    Duplicate,
}
impl Display for InvalidItemReason {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::TooLong { len } => write!(f, "it has {len} characters, but at most {MAX_ITEM_LEN} are allowed"),
            Self::NotAlphabetic => write!(f, "it may only contain ASCII letters"),
            Self::Reserved => write!(f, "it is a reserved word"),
            Self::Duplicate => write!(f, "it already occurs in the universe"),
        }
    }
}

/// Defines errors that occur when [loading](Universe::load()) a universe.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line was not a universe definition.
    NotAUniverse { tag: String },
    /// One of the items is not allowed.
    InvalidItem { item: String, reason: InvalidItemReason },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::NotAUniverse { tag } => write!(f, "Expected a universe definition ('U'), got '{tag}'"),
            Self::InvalidItem { item, reason } => write!(f, "Invalid universe item '{item}': {reason}"),
        }
    }
}
impl error::Error for Error {}





/***** LIBRARY *****/
/// Refers to a single item in a [`Universe`].
///
/// IDs are handed out in universe order, so sorting them sorts by position in the universe.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ItemId(usize);
impl ItemId {
    /// Returns the position of the item in its universe.
    #[inline]
    pub const fn index(&self) -> usize { self.0 }
}



/// The ordered, deduplicated pool of item names.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Universe {
    /// The items, in definition order.
    items: IndexSet<String>,
}

// Constructors
impl Universe {
    /// Creates a new, empty universe.
    #[inline]
    pub fn new() -> Self { Self { items: IndexSet::new() } }

    /// Builds a universe from a tokenized `U`-line.
    ///
    /// # Arguments
    /// - `tokens`: The tokens of the line, _including_ the leading `U`.
    ///
    /// # Returns
    /// A new Universe with all the given items, in order.
    ///
    /// # Errors
    /// This function errors if the first token is not `U`, or if any of the items is
    /// [invalid](Universe::check_item()). Nothing is kept of a failed load.
    pub fn load(tokens: &[&str]) -> Result<Self, Error> {
        let Some((&tag, items)) = tokens.split_first() else {
            return Err(Error::NotAUniverse { tag: String::new() });
        };
        if tag != Directive::Universe.tag() {
            return Err(Error::NotAUniverse { tag: tag.into() });
        }

        let mut universe: Self = Self { items: IndexSet::with_capacity(items.len()) };
        for item in items {
            universe.push(item)?;
        }
        Ok(universe)
    }
}

// Validation
impl Universe {
    /// Checks whether the given item may be added to this universe.
    ///
    /// # Arguments
    /// - `item`: The candidate item name.
    ///
    /// # Errors
    /// This function errors with [`Error::InvalidItem`] explaining the first violated rule.
    pub fn check_item(&self, item: &str) -> Result<(), Error> {
        let reason: Option<InvalidItemReason> = if item.len() > MAX_ITEM_LEN {
            Some(InvalidItemReason::TooLong { len: item.len() })
        } else if item.is_empty() || !item.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(InvalidItemReason::NotAlphabetic)
        } else if is_reserved(item) {
            Some(InvalidItemReason::Reserved)
        } else if self.items.contains(item) {
            Some(InvalidItemReason::Duplicate)
        } else {
            None
        };
        match reason {
            Some(reason) => Err(Error::InvalidItem { item: item.into(), reason }),
            None => Ok(()),
        }
    }

    /// Validates and appends a single item.
    ///
    /// # Arguments
    /// - `item`: The item name to add.
    ///
    /// # Returns
    /// The [`ItemId`] of the new item.
    ///
    /// # Errors
    /// This function errors if the item is [invalid](Universe::check_item()).
    fn push(&mut self, item: &str) -> Result<ItemId, Error> {
        self.check_item(item)?;
        let (index, _) = self.items.insert_full(item.into());
        Ok(ItemId(index))
    }
}

// Lookup
impl Universe {
    /// Finds the ID of an item by its name.
    ///
    /// # Arguments
    /// - `item`: The name to look up. Matching is case-sensitive.
    ///
    /// # Returns
    /// The item's [`ItemId`], or [`None`] if it is not in the universe.
    #[inline]
    pub fn lookup(&self, item: &str) -> Option<ItemId> { self.items.get_index_of(item).map(ItemId) }

    /// Returns the name of the given item.
    ///
    /// # Panics
    /// This function panics if `id` was not issued by this universe.
    #[inline]
    #[track_caller]
    pub fn name(&self, id: ItemId) -> &str {
        match self.items.get_index(id.0) {
            Some(name) => name,
            None => panic!("Item ID {} is out of range for a universe of {} items", id.0, self.items.len()),
        }
    }

    /// Returns all item IDs in universe order.
    #[inline]
    pub fn ids(&self) -> impl '_ + DoubleEndedIterator<Item = ItemId> + ExactSizeIterator { (0..self.items.len()).map(ItemId) }

    /// Returns all item names in universe order.
    #[inline]
    pub fn names(&self) -> impl '_ + DoubleEndedIterator<Item = &str> + ExactSizeIterator { self.items.iter().map(String::as_str) }

    /// Returns the number of items in the universe.
    #[inline]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns whether the universe has no items.
    #[inline]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}

// Formatting
impl Display for Universe {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{}", Directive::Universe.tag())?;
        for item in &self.items {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}



/// Checks whether a word is reserved, i.e., a command name or boolean keyword.
///
/// The comparison ignores ASCII case.
///
/// # Arguments
/// - `word`: The word to check.
///
/// # Returns
/// True if the word can never be an item, or false otherwise.
#[inline]
pub fn is_reserved(word: &str) -> bool { is_command_name(word) || RESERVED_WORDS.iter().any(|r| r.eq_ignore_ascii_case(word)) }





/***** TESTS *****/
