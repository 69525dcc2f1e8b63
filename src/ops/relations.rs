//  RELATIONS.rs
//    by Lut99
//
//  Created:
//    15 Apr 2025, 10:40:16
//  Last edited:
//    23 Apr 2025, 10:55:27
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements predicates and derivations over binary relations.
//!
//!   A few of these are defined on the _field_ of a relation, which is the
//!   set of every item that occurs on either side of some pair.
//

use std::collections::HashMap;

use itertools::Itertools as _;

use crate::log::trace;
use crate::model::{ItemId, Pair, Relation, Set};


/***** HELPER FUNCTIONS *****/
/// Maps every left-hand side of a relation to its right-hand sides.
///
/// # Arguments
/// - `rel`: The [`Relation`] to index.
///
/// # Returns
/// A map from items to all items they relate to, in pair order.
fn images(rel: &Relation) -> HashMap<ItemId, Vec<ItemId>> { rel.iter().map(|p| (p.first, p.second)).into_group_map() }





/***** LIBRARY FUNCTIONS *****/
/// Computes the field of a relation.
///
/// # Arguments
/// - `rel`: The [`Relation`] to compute the field of.
///
/// # Returns
/// A [`Set`] with every item occurring in `rel`, in order of first appearance.
#[inline]
pub fn field(rel: &Relation) -> Set { rel.iter().flat_map(|p| [p.first, p.second]).collect() }

/// Checks whether every item in the [field](field()) of a relation relates to itself.
pub fn reflexive(rel: &Relation) -> bool {
    field(rel).iter().all(|e| {
        let holds: bool = rel.contains(&Pair::new(e, e));
        if !holds {
            trace!("Relation is not reflexive: missing loop on {e:?}");
        }
        holds
    })
}

/// Checks whether every pair in a relation also occurs flipped.
#[inline]
pub fn symmetric(rel: &Relation) -> bool { rel.iter().all(|p| rel.contains(&p.flipped())) }

/// Checks whether no two distinct items relate both ways.
#[inline]
pub fn antisymmetric(rel: &Relation) -> bool { rel.iter().filter(|p| !p.is_loop()).all(|p| !rel.contains(&p.flipped())) }

/// Checks whether `(a, b)` and `(b, c)` in a relation always imply `(a, c)`.
pub fn transitive(rel: &Relation) -> bool {
    let images: HashMap<ItemId, Vec<ItemId>> = images(rel);
    rel.iter().all(|ab| {
        images.get(&ab.second).into_iter().flatten().all(|&c| {
            let holds: bool = rel.contains(&Pair::new(ab.first, c));
            if !holds {
                trace!("Relation is not transitive: missing ({:?}, {c:?})", ab.first);
            }
            holds
        })
    })
}

/// Checks whether a relation is a (partial) function, i.e., no item relates to two different
/// items.
#[inline]
pub fn function(rel: &Relation) -> bool { rel.iter().map(|p| p.first).all_unique() }

/// Computes the items occurring on the left-hand side of a relation.
///
/// # Returns
/// A [`Set`] with the items in order of first appearance.
#[inline]
pub fn domain(rel: &Relation) -> Set { rel.iter().map(|p| p.first).collect() }

/// Computes the items occurring on the right-hand side of a relation.
///
/// # Returns
/// A [`Set`] with the items in order of first appearance.
#[inline]
pub fn codomain(rel: &Relation) -> Set { rel.iter().map(|p| p.second).collect() }

/// Checks whether a relation is a (total) function from one set to another.
///
/// # Arguments
/// - `rel`: The [`Relation`] to check.
/// - `from`: The set that the function must be defined on, completely.
/// - `to`: The set that every image must be in.
///
/// # Returns
/// True if every item in `from` relates to exactly one item in `to`, and `rel` relates nothing
/// else.
pub fn is_function_between(rel: &Relation, from: &Set, to: &Set) -> bool {
    if !function(rel) {
        return false;
    }
    if let Some(p) = rel.iter().find(|p| !from.contains(p.first) || !to.contains(p.second)) {
        trace!("Relation is not a function between the given sets: pair {p:?} is out of bounds");
        return false;
    }
    // Functional and in-bounds, so the pair count equals the size of the domain
    rel.len() == from.len()
}

/// Checks whether a relation is an injective function from one set to another.
///
/// # Arguments
/// - `rel`: The [`Relation`] to check.
/// - `from`: The set that the function must be defined on.
/// - `to`: The set that every image must be in.
///
/// # Returns
/// True if `rel` is a [function between](is_function_between()) the sets and no two items map
/// to the same image.
#[inline]
pub fn injective(rel: &Relation, from: &Set, to: &Set) -> bool {
    is_function_between(rel, from, to) && rel.iter().map(|p| p.second).all_unique()
}

/// Checks whether a relation is a surjective function from one set to another.
///
/// # Arguments
/// - `rel`: The [`Relation`] to check.
/// - `from`: The set that the function must be defined on.
/// - `to`: The set that every image must be in.
///
/// # Returns
/// True if `rel` is a [function between](is_function_between()) the sets and every item in
/// `to` is the image of something.
#[inline]
pub fn surjective(rel: &Relation, from: &Set, to: &Set) -> bool {
    is_function_between(rel, from, to) && {
        let images: Set = codomain(rel);
        to.iter().all(|b| images.contains(b))
    }
}

/// Checks whether a relation is a bijection between two sets.
#[inline]
pub fn bijective(rel: &Relation, from: &Set, to: &Set) -> bool { injective(rel, from, to) && surjective(rel, from, to) }





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Universe;
    use crate::tests::{make_rel, make_set, make_universe};


    #[test]
    fn test_field() {
        let universe: Universe = make_universe(["a", "b", "c", "d"]);
        let rel: Relation = make_rel(&universe, [("c", "a"), ("a", "c"), ("b", "b")]);
        assert_eq!(field(&rel).display(&universe).to_string(), "S c a b");
    }

    #[test]
    fn test_reflexive() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        assert!(reflexive(&make_rel(&universe, [("a", "a"), ("b", "b")])));
        assert!(reflexive(&make_rel(&universe, [("a", "a"), ("a", "b"), ("b", "b")])));
        assert!(!reflexive(&make_rel(&universe, [("a", "a"), ("a", "b")])));
        assert!(reflexive(&make_rel(&universe, [])));
    }

    #[test]
    fn test_symmetric() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        assert!(!symmetric(&make_rel(&universe, [("a", "b")])));
        assert!(symmetric(&make_rel(&universe, [("a", "b"), ("b", "a"), ("c", "c")])));
        assert!(symmetric(&make_rel(&universe, [])));
    }

    #[test]
    fn test_antisymmetric() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        assert!(antisymmetric(&make_rel(&universe, [("a", "b"), ("b", "c"), ("a", "a")])));
        assert!(!antisymmetric(&make_rel(&universe, [("a", "b"), ("b", "a")])));
        assert!(antisymmetric(&make_rel(&universe, [("a", "a"), ("b", "b")])));
    }

    #[test]
    fn test_reflexive_symmetric_antisymmetric_means_only_loops() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let candidates: [Relation; 4] = [
            make_rel(&universe, [("a", "a"), ("b", "b")]),
            make_rel(&universe, [("a", "a"), ("b", "b"), ("a", "b")]),
            make_rel(&universe, [("a", "a"), ("b", "b"), ("a", "b"), ("b", "a")]),
            make_rel(&universe, []),
        ];
        for rel in &candidates {
            if reflexive(rel) && symmetric(rel) && antisymmetric(rel) {
                assert!(rel.iter().all(|p| p.is_loop()));
            }
        }
    }

    #[test]
    fn test_transitive() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        assert!(transitive(&make_rel(&universe, [("a", "b"), ("b", "c"), ("a", "c")])));
        assert!(!transitive(&make_rel(&universe, [("a", "b"), ("b", "c")])));
        assert!(!transitive(&make_rel(&universe, [("a", "b"), ("b", "a")])));
        assert!(transitive(&make_rel(&universe, [("a", "b"), ("b", "a"), ("a", "a"), ("b", "b")])));
        assert!(transitive(&make_rel(&universe, [])));
    }

    #[test]
    fn test_function_domain_codomain() {
        let universe: Universe = make_universe(["a", "b", "c"]);
        let rel: Relation = make_rel(&universe, [("c", "a"), ("a", "a"), ("b", "c")]);
        assert!(function(&rel));
        assert!(!function(&make_rel(&universe, [("a", "b"), ("a", "c")])));
        assert_eq!(domain(&rel).display(&universe).to_string(), "S c a b");
        assert_eq!(codomain(&rel).display(&universe).to_string(), "S a c");
    }

    #[test]
    fn test_injective_surjective_bijective() {
        let universe: Universe = make_universe(["a", "b", "c", "x", "y", "z"]);
        let abc: Set = make_set(&universe, ["a", "b", "c"]);
        let xyz: Set = make_set(&universe, ["x", "y", "z"]);
        let xy: Set = make_set(&universe, ["x", "y"]);

        let bij: Relation = make_rel(&universe, [("a", "x"), ("b", "z"), ("c", "y")]);
        assert!(injective(&bij, &abc, &xyz));
        assert!(surjective(&bij, &abc, &xyz));
        assert!(bijective(&bij, &abc, &xyz));

        let onto: Relation = make_rel(&universe, [("a", "x"), ("b", "y"), ("c", "y")]);
        assert!(!injective(&onto, &abc, &xy));
        assert!(surjective(&onto, &abc, &xy));
        assert!(!bijective(&onto, &abc, &xy));

        let partial: Relation = make_rel(&universe, [("a", "x"), ("b", "y")]);
        assert!(!injective(&partial, &abc, &xyz));
        assert!(!surjective(&partial, &abc, &xy));

        let outside: Relation = make_rel(&universe, [("a", "x"), ("b", "y"), ("c", "a")]);
        assert!(!injective(&outside, &abc, &xyz));

        let not_func: Relation = make_rel(&universe, [("a", "x"), ("a", "y"), ("b", "z")]);
        assert!(!surjective(&not_func, &abc, &xyz));
    }
}
