//! Joint Probability Calculator
//!
//! Given gene counts, each person is conditionally independent of everyone
//! but their parents, so the probability of a world factors into one term
//! per person.

use super::{Family, InheritanceModel, World};

/// P(person's gene count | parents) * P(person's trait | gene count) in `world`
pub fn person_factor(family: &Family, model: &InheritanceModel, world: &World, person: usize) -> f64 {
    let genes = world.genes(person);
    let gene_probability = match family.parents(person) {
        Some((mother, father)) => model.inherit(genes, world.genes(mother), world.genes(father)),
        None => model.prior(genes),
    };
    gene_probability * model.trait_probability(genes, world.has_trait(person))
}

/// Probability of the whole world: the product of every person's factor
pub fn joint_probability(family: &Family, model: &InheritanceModel, world: &World) -> f64 {
    (0..family.len())
        .map(|person| person_factor(family, model, world, person))
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heredity::Person;

    fn trio() -> Family {
        Family::from_people(vec![
            Person::new("Harry", None).with_parents("Lily", "James"),
            Person::new("James", Some(true)),
            Person::new("Lily", Some(false)),
        ])
        .unwrap()
    }

    #[test]
    fn test_hand_computed_joint() {
        // Harry has one copy and no trait, James two copies and the trait,
        // Lily no copies and no trait.
        let family = trio();
        let model = InheritanceModel::default();
        let world = World {
            one_gene: 0b001,
            two_genes: 0b010,
            have_trait: 0b010,
        };

        let lily = 0.96 * 0.99;
        let james = 0.01 * 0.65;
        let harry = (0.01 * 0.01 + 0.99 * 0.99) * 0.44;

        assert!((person_factor(&family, &model, &world, 2) - lily).abs() < 1e-12);
        assert!((person_factor(&family, &model, &world, 1) - james).abs() < 1e-12);
        assert!((person_factor(&family, &model, &world, 0) - harry).abs() < 1e-12);

        let joint = joint_probability(&family, &model, &world);
        assert!((joint - lily * james * harry).abs() < 1e-15);
        assert!((joint - 0.0026643247488).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_world() {
        let family = trio();
        let model = InheritanceModel::default();
        let world = World {
            one_gene: 0,
            two_genes: 0,
            have_trait: 0b010,
        };
        let harry = (0.99 * 0.99) * 0.99;
        let expected = harry * (0.96 * 0.01) * (0.96 * 0.99);
        assert!((joint_probability(&family, &model, &world) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_empty_family_has_unit_probability() {
        let family = Family::from_people(Vec::new()).unwrap();
        let world = World {
            one_gene: 0,
            two_genes: 0,
            have_trait: 0,
        };
        assert_eq!(joint_probability(&family, &InheritanceModel::default(), &world), 1.0);
    }
}
