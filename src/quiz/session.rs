use super::answers::AnswerSet;
use super::bank::{self, Question};
use super::category::{CATEGORY_COUNT, Category};
use super::scorer::{self, ScoreResult};
use crate::error::{QuizError, Result};

/// Interaction state for one respondent: answers plus a cursor.
///
/// Front ends own one of these and mutate it in response to input; scoring
/// reads a snapshot of the answers and never touches the session.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    answers: AnswerSet,
    current: usize,
    highlighted: usize,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &'static Question {
        // current is kept in 0..question_count by every mutator
        &bank::questions()[self.current]
    }

    /// 0-based option position under the cursor
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn next_question(&mut self) {
        if self.current + 1 < bank::question_count() {
            self.current += 1;
            self.sync_highlight();
        }
    }

    pub fn previous_question(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.sync_highlight();
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if index < bank::question_count() {
            self.current = index;
            self.sync_highlight();
        }
    }

    pub fn next_option(&mut self) {
        self.highlighted = (self.highlighted + 1) % CATEGORY_COUNT;
    }

    pub fn previous_option(&mut self) {
        self.highlighted = (self.highlighted + CATEGORY_COUNT - 1) % CATEGORY_COUNT;
    }

    /// Answer the current question with the highlighted option
    pub fn choose_highlighted(&mut self) -> Result<Category> {
        let category = self
            .current_question()
            .option(self.highlighted)
            .map(|o| o.category)
            .ok_or_else(|| QuizError::InvalidAnswer {
                message: format!("option {} does not exist", self.highlighted + 1),
            })?;
        self.answers.select(self.current, category)?;
        Ok(category)
    }

    /// Answer the current question directly
    pub fn choose(&mut self, category: Category) -> Result<()> {
        self.answers.select(self.current, category)?;
        self.highlighted = category.index();
        Ok(())
    }

    pub fn clear_current(&mut self) -> Result<Option<Category>> {
        self.answers.clear(self.current)
    }

    pub fn reset(&mut self) {
        self.answers.reset();
        self.current = 0;
        self.highlighted = 0;
    }

    /// Score the answers as they stand right now
    pub fn result(&self) -> Result<ScoreResult> {
        scorer::score(self.answers.selections())
    }

    fn sync_highlight(&mut self) {
        self.highlighted = self
            .answers
            .get(self.current)
            .map(Category::index)
            .unwrap_or(0);
    }
}
