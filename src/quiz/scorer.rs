//! Tally and winner selection over category picks
//!
//! Ties are never broken: every category sharing the top count is a winner,
//! and winners are always listed in the fixed category order.

use serde::Serialize;
use serde::ser::SerializeMap;

use super::category::{CATEGORY_COUNT, Category};
use crate::error::{QuizError, Result};

/// Count per category, all six always present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    counts: [usize; CATEGORY_COUNT],
}

impl Tally {
    pub fn from_selections<I>(selections: I) -> Self
    where
        I: IntoIterator<Item = Category>,
    {
        let mut counts = [0usize; CATEGORY_COUNT];
        for category in selections {
            counts[category.index()] += 1;
        }
        Self { counts }
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts[category.index()]
    }

    /// `(category, count)` pairs in fixed enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.counts[c.index()]))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

// Serialized as an ordered map keyed by category symbol: {"A": 2, "B": 1, ...}
impl Serialize for Tally {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, count) in self.iter() {
            map.serialize_entry(&category, &count)?;
        }
        map.end()
    }
}

/// Outcome of a successful scoring pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub tally: Tally,
    pub max_count: usize,
    /// Non-empty, in fixed enumeration order
    pub winners: Vec<Category>,
    pub blend: bool,
}

impl ScoreResult {
    pub fn is_blend(&self) -> bool {
        self.blend
    }

    /// Number of answered questions that went into this result
    pub fn answered(&self) -> usize {
        self.tally.total()
    }

    /// The single winner, or `None` for a blend
    pub fn primary(&self) -> Option<Category> {
        match self.winners.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// Score a collection of category picks.
///
/// Returns `QuizError::NoAnswers` when nothing was picked.
pub fn score<I>(selections: I) -> Result<ScoreResult>
where
    I: IntoIterator<Item = Category>,
{
    let tally = Tally::from_selections(selections);
    if tally.total() == 0 {
        return Err(QuizError::NoAnswers);
    }

    let max_count = tally.max();
    let winners: Vec<Category> = tally
        .iter()
        .filter(|(_, count)| *count == max_count)
        .map(|(category, _)| category)
        .collect();
    let blend = winners.len() > 1;

    Ok(ScoreResult {
        tally,
        max_count,
        winners,
        blend,
    })
}
