//  SETS.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 09:12:33
//  Last edited:
//    22 Apr 2025, 16:02:51
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the set algebra.
//!
//!   Any set produced here is sorted in universe order.
//

use crate::model::{Set, Universe};


/***** LIBRARY FUNCTIONS *****/
/// Checks whether a set has no items.
#[inline]
pub fn empty(set: &Set) -> bool { set.is_empty() }

/// Returns the number of items in a set.
#[inline]
pub fn card(set: &Set) -> usize { set.len() }

/// Computes everything in the universe that is not in the given set.
///
/// # Arguments
/// - `universe`: The [`Universe`] to complement against.
/// - `set`: The [`Set`] to complement.
///
/// # Returns
/// A new [`Set`] with all items of `universe` not in `set`.
#[inline]
pub fn complement(universe: &Universe, set: &Set) -> Set { universe.ids().filter(|id| !set.contains(*id)).collect() }

/// Computes the items in either of two sets.
#[inline]
pub fn union(lhs: &Set, rhs: &Set) -> Set { lhs.iter().chain(rhs.iter()).collect::<Set>().sorted() }

/// Computes the items in both of two sets.
#[inline]
pub fn intersect(lhs: &Set, rhs: &Set) -> Set { lhs.iter().filter(|id| rhs.contains(*id)).collect::<Set>().sorted() }

/// Computes the items in `lhs` that are not in `rhs`.
#[inline]
pub fn minus(lhs: &Set, rhs: &Set) -> Set { lhs.iter().filter(|id| !rhs.contains(*id)).collect::<Set>().sorted() }

/// Checks whether every item of `lhs` is also in `rhs`.
#[inline]
pub fn subseteq(lhs: &Set, rhs: &Set) -> bool { lhs.iter().all(|id| rhs.contains(id)) }

/// Checks whether `lhs` is a proper subset of `rhs`.
///
/// Since sets have no duplicates, a subset of equal size is the same set.
#[inline]
pub fn subset(lhs: &Set, rhs: &Set) -> bool { lhs.len() < rhs.len() && subseteq(lhs, rhs) }

/// Checks whether two sets have exactly the same items, regardless of order.
#[inline]
pub fn equals(lhs: &Set, rhs: &Set) -> bool { lhs.len() == rhs.len() && subseteq(lhs, rhs) }





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{make_set, make_universe};


    #[test]
    fn test_empty_card() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        assert!(empty(&make_set(&universe, [])));
        assert!(!empty(&make_set(&universe, ["a"])));
        assert_eq!(card(&make_set(&universe, [])), 0);
        assert_eq!(card(&make_set(&universe, ["c", "a"])), 2);
    }

    #[test]
    fn test_complement() {
        let universe: Universe = make_universe(["a", "b", "c", "d"]);
        let set: Set = make_set(&universe, ["d", "b"]);
        assert_eq!(complement(&universe, &set).display(&universe).to_string(), "S a c");
        assert_eq!(complement(&universe, &complement(&universe, &set)), set);
        assert!(empty(&complement(&universe, &Set::from_universe(&universe))));
    }

    #[test]
    fn test_union_intersect_minus_are_in_universe_order() {
        let universe: Universe = make_universe(["a", "b", "c", "d"]);
        let lhs: Set = make_set(&universe, ["c", "a"]);
        let rhs: Set = make_set(&universe, ["d", "c", "b"]);
        assert_eq!(union(&lhs, &rhs).display(&universe).to_string(), "S a b c d");
        assert_eq!(intersect(&lhs, &rhs).display(&universe).to_string(), "S c");
        assert_eq!(minus(&rhs, &lhs).display(&universe).to_string(), "S b d");
        assert_eq!(minus(&lhs, &lhs).display(&universe).to_string(), "S");
    }

    #[test]
    fn test_subsets() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let ab: Set = make_set(&universe, ["a", "b"]);
        let ba: Set = make_set(&universe, ["b", "a"]);
        let abc: Set = make_set(&universe, ["a", "b", "c"]);
        let none: Set = make_set(&universe, []);

        assert!(subseteq(&ab, &abc));
        assert!(subseteq(&ab, &ba));
        assert!(!subseteq(&abc, &ab));
        assert!(subseteq(&none, &ab));

        assert!(subset(&ab, &abc));
        assert!(!subset(&ab, &ba));
        assert!(subset(&none, &ab));
        assert!(!subset(&none, &none));

        assert!(equals(&ab, &ba));
        assert!(!equals(&ab, &abc));
        assert!(equals(&none, &none));
    }

    #[test]
    fn test_equals_is_mutual_subseteq() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let sets: [Set; 5] = [
            make_set(&universe, []),
            make_set(&universe, ["a"]),
            make_set(&universe, ["b", "a"]),
            make_set(&universe, ["a", "b"]),
            make_set(&universe, ["c", "b", "a"]),
        ];
        for lhs in &sets {
            for rhs in &sets {
                assert_eq!(equals(lhs, rhs), subseteq(lhs, rhs) && subseteq(rhs, lhs));
            }
        }
    }
}
