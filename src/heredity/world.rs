//! World Enumerator — lazily walks every joint assignment consistent with evidence
//!
//! A world assigns each person a gene count and a trait. People are bits in
//! a `u64`; a world is three masks. Subsets are produced lazily by the
//! classic submask walk, so nothing is materialised up front.

use super::{Family, GeneCount};

/// One fully specified assignment of gene count and trait to every person
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct World {
    pub one_gene: u64,
    pub two_genes: u64,
    pub have_trait: u64,
}

impl World {
    pub fn genes(&self, person: usize) -> GeneCount {
        let bit = 1u64 << person;
        if self.two_genes & bit != 0 {
            GeneCount::Two
        } else if self.one_gene & bit != 0 {
            GeneCount::One
        } else {
            GeneCount::Zero
        }
    }

    pub fn has_trait(&self, person: usize) -> bool {
        self.have_trait & (1u64 << person) != 0
    }

    /// Whether every observed trait in `family` matches this world
    pub fn consistent_with(&self, family: &Family) -> bool {
        family
            .people()
            .iter()
            .enumerate()
            .all(|(i, p)| p.has_trait.map_or(true, |t| t == self.has_trait(i)))
    }
}

/// Lazy iterator over every subset of a bitmask, smallest first
#[derive(Debug, Clone)]
pub struct Subsets {
    mask: u64,
    next: Option<u64>,
}

pub fn subsets(mask: u64) -> Subsets {
    Subsets {
        mask,
        next: Some(0),
    }
}

impl Iterator for Subsets {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = if current == self.mask {
            None
        } else {
            Some((current | !self.mask).wrapping_add(1) & self.mask)
        };
        Some(current)
    }
}

/// Every world consistent with the family's observed traits.
///
/// Trait subsets range only over people with unknown traits; anyone known
/// to have the trait is always included and anyone known not to is always
/// excluded, so no world violating the evidence is ever produced.
pub fn worlds(family: &Family) -> impl Iterator<Item = World> {
    let everyone = family.everyone();
    let known = family.known_trait();
    let unknown = family.unknown_trait();

    subsets(unknown).flat_map(move |extra| {
        let have_trait = known | extra;
        subsets(everyone).flat_map(move |one_gene| {
            subsets(everyone & !one_gene).map(move |two_genes| World {
                one_gene,
                two_genes,
                have_trait,
            })
        })
    })
}
