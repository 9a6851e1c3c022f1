//! Family Loader — reads a pedigree from CSV
//!
//! Columns: `name`, `mother`, `father`, `trait`. Parents are either both
//! blank or both the names of other people in the same file. The trait
//! column is `1` (has trait), `0` (does not) or blank (unknown).

use super::HeredityError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Worlds are encoded as bitmasks over people, one bit each
pub const MAX_PEOPLE: usize = 63;

const REQUIRED_COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub mother: Option<String>,
    pub father: Option<String>,
    /// Observed trait, `None` when unknown
    pub has_trait: Option<bool>,
}

impl Person {
    pub fn new(name: impl Into<String>, has_trait: Option<bool>) -> Self {
        Self {
            name: name.into(),
            mother: None,
            father: None,
            has_trait,
        }
    }

    pub fn with_parents(mut self, mother: impl Into<String>, father: impl Into<String>) -> Self {
        self.mother = Some(mother.into());
        self.father = Some(father.into());
        self
    }
}

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    mother: String,
    father: String,
    #[serde(rename = "trait")]
    trait_flag: String,
}

/// A validated pedigree, in file order, with parents resolved to indices
#[derive(Debug, Clone)]
pub struct Family {
    people: Vec<Person>,
    index: HashMap<String, usize>,
    /// (mother, father) index pairs
    parents: Vec<Option<(usize, usize)>>,
}

impl Family {
    /// Load a family from a CSV file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HeredityError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let family = Self::from_reader(file)?;
        log::info!("Loaded {} people from {}", family.len(), path.display());
        Ok(family)
    }

    /// Parse CSV records from any reader
    pub fn from_reader(reader: impl Read) -> Result<Self, HeredityError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(HeredityError::MissingColumn(*missing));
        }

        let mut people = Vec::new();
        for record in reader.deserialize() {
            let record: Record = record?;
            people.push(Person {
                has_trait: parse_trait(&record.name, &record.trait_flag)?,
                mother: non_empty(record.mother),
                father: non_empty(record.father),
                name: record.name,
            });
        }
        Self::from_people(people)
    }

    /// Validate people and resolve parent names
    pub fn from_people(people: Vec<Person>) -> Result<Self, HeredityError> {
        if people.len() > MAX_PEOPLE {
            return Err(HeredityError::TooManyPeople {
                count: people.len(),
                max: MAX_PEOPLE,
            });
        }

        let mut index = HashMap::with_capacity(people.len());
        for (i, person) in people.iter().enumerate() {
            if person.name.is_empty() {
                return Err(HeredityError::Format(format!("row {} has an empty name", i + 1)));
            }
            if index.insert(person.name.clone(), i).is_some() {
                return Err(HeredityError::Format(format!(
                    "'{}' appears more than once",
                    person.name
                )));
            }
        }

        let parents = people
            .iter()
            .map(|person| resolve_parents(person, &index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            people,
            index,
            parents,
        })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, i: usize) -> &Person {
        &self.people[i]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// (mother, father) indices, `None` for founders
    pub fn parents(&self, i: usize) -> Option<(usize, usize)> {
        self.parents[i]
    }

    /// Bitmask with one bit set per person
    pub fn everyone(&self) -> u64 {
        mask_of(0..self.len())
    }

    /// People observed to have the trait
    pub fn known_trait(&self) -> u64 {
        self.trait_mask(|t| t == Some(true))
    }

    /// People whose trait was not recorded
    pub fn unknown_trait(&self) -> u64 {
        self.trait_mask(|t| t.is_none())
    }

    fn trait_mask(&self, pred: impl Fn(Option<bool>) -> bool) -> u64 {
        mask_of(
            self.people
                .iter()
                .enumerate()
                .filter(|(_, p)| pred(p.has_trait))
                .map(|(i, _)| i),
        )
    }
}

fn mask_of(indices: impl IntoIterator<Item = usize>) -> u64 {
    indices.into_iter().fold(0, |mask, i| mask | (1u64 << i))
}

fn non_empty(field: String) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn parse_trait(name: &str, flag: &str) -> Result<Option<bool>, HeredityError> {
    match flag {
        "1" => Ok(Some(true)),
        "0" => Ok(Some(false)),
        "" => Ok(None),
        other => Err(HeredityError::Format(format!(
            "'{}' has trait value '{}', expected 0, 1 or blank",
            name, other
        ))),
    }
}

fn resolve_parents(
    person: &Person,
    index: &HashMap<String, usize>,
) -> Result<Option<(usize, usize)>, HeredityError> {
    let lookup = |parent: &str| {
        if parent == person.name {
            return Err(HeredityError::Format(format!("'{}' is listed as their own parent", parent)));
        }
        index.get(parent).copied().ok_or_else(|| {
            HeredityError::Format(format!(
                "'{}' names unknown parent '{}'",
                person.name, parent
            ))
        })
    };

    match (&person.mother, &person.father) {
        (None, None) => Ok(None),
        (Some(mother), Some(father)) => Ok(Some((lookup(mother.as_str())?, lookup(father.as_str())?))),
        _ => Err(HeredityError::Format(format!(
            "'{}' must list both parents or neither",
            person.name
        ))),
    }
}
