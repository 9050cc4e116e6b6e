//! Built-in catalog and derived category membership

use std::collections::{BTreeSet, HashMap};

use crate::exercises::{
    COMPOUND_IDS, CategoryTag, Exercise, ISOLATION_IDS, Muscle, PULL_IDS, PUSH_IDS,
    get_builtin_exercises,
};

/// Exercise id → category tags, built once from the static id lists
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    tags: HashMap<u32, BTreeSet<CategoryTag>>,
}

impl CategoryIndex {
    pub fn from_lists(lists: &[(CategoryTag, &[u32])]) -> Self {
        let mut tags: HashMap<u32, BTreeSet<CategoryTag>> = HashMap::new();
        for (tag, ids) in lists {
            for id in *ids {
                tags.entry(*id).or_default().insert(*tag);
            }
        }
        Self { tags }
    }

    pub fn builtin() -> Self {
        Self::from_lists(&[
            (CategoryTag::Compound, COMPOUND_IDS),
            (CategoryTag::Isolation, ISOLATION_IDS),
            (CategoryTag::Push, PUSH_IDS),
            (CategoryTag::Pull, PULL_IDS),
        ])
    }

    pub fn has(&self, id: u32, tag: CategoryTag) -> bool {
        self.tags.get(&id).is_some_and(|set| set.contains(&tag))
    }

    /// Tags for an id, in declaration order; empty for untagged (custom) ids
    pub fn tags_of(&self, id: u32) -> Vec<CategoryTag> {
        self.tags
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

/// Immutable part of the catalog, shared by every request
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    categories: CategoryIndex,
}

impl Catalog {
    pub fn new(exercises: Vec<Exercise>, categories: CategoryIndex) -> Self {
        Self {
            exercises,
            categories,
        }
    }

    pub fn builtin() -> Self {
        Self::new(get_builtin_exercises(), CategoryIndex::builtin())
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn find(&self, id: u32) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Built-ins followed by custom exercises, in insertion order
    pub fn combined(&self, custom: &[Exercise]) -> Vec<Exercise> {
        self.exercises.iter().chain(custom.iter()).cloned().collect()
    }

    /// Exercise count per muscle group over the given list
    pub fn muscle_counts(exercises: &[Exercise]) -> Vec<(Muscle, usize)> {
        use crate::exercises::Variants;

        Muscle::all()
            .iter()
            .map(|m| (*m, exercises.iter().filter(|e| e.muscle == *m).count()))
            .collect()
    }
}
