use serde::Serialize;

use super::bank;
use super::category::Category;
use crate::error::{QuizError, Result};

/// One optional selection per question, indexed by question position.
///
/// Owned by whichever front end is driving the quiz and handed to the scorer
/// by reference. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerSet {
    slots: Vec<Option<Category>>,
}

impl AnswerSet {
    pub fn new(question_count: usize) -> Self {
        Self {
            slots: vec![None; question_count],
        }
    }

    /// Empty answer set sized for the built-in question bank
    pub fn for_bank() -> Self {
        Self::new(bank::question_count())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn select(&mut self, index: usize, category: Category) -> Result<()> {
        let slot = self.slot_mut(index)?;
        *slot = Some(category);
        Ok(())
    }

    /// Mark a question unanswered again; returns the previous selection
    pub fn clear(&mut self, index: usize) -> Result<Option<Category>> {
        let slot = self.slot_mut(index)?;
        Ok(slot.take())
    }

    pub fn get(&self, index: usize) -> Option<Category> {
        self.slots.get(index).copied().flatten()
    }

    /// Answered categories in question order
    pub fn selections(&self) -> Vec<Category> {
        self.slots.iter().flatten().copied().collect()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// 0-based indices of questions still unanswered
    pub fn unanswered(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_none().then_some(i))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut Option<Category>> {
        let len = self.slots.len();
        self.slots
            .get_mut(index)
            .ok_or_else(|| QuizError::InvalidAnswer {
                message: format!(
                    "question {} does not exist (quiz has {} questions)",
                    index + 1,
                    len
                ),
            })
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::for_bank()
    }
}
