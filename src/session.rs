//! Ingredient selection for one dish at a time.
//!
//! `Idle -> Parsed -> Committed -> Idle`. Only a [`ParsedSelection`] can be
//! committed, so there is no way to commit before something was parsed.

use crate::controllers::{AddOutcome, ShoppingListAggregator};
use crate::error::GoKartsError;
use crate::models::{IngredientLine, ShoppingListItem};
use crate::parsing;
use crate::storage::KeyValueStore;

#[derive(Debug, Default)]
pub enum SelectionSession {
    #[default]
    Idle,
    Parsed(ParsedSelection),
    Committed(CommittedSelection),
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a fresh reply for `dish`, dropping whatever was there before.
    /// Use [`SelectionSession::parsed_mut`] to flag lines afterwards.
    pub fn start(&mut self, dish: &str, reply: &str) {
        self.start_with_lines(dish, parsing::produce(reply));
    }

    /// Enter `Parsed` with lines that were already parsed
    pub fn start_with_lines(&mut self, dish: &str, lines: Vec<IngredientLine>) {
        *self = SelectionSession::Parsed(ParsedSelection::new(dish, lines));
    }

    pub fn parsed_mut(&mut self) -> Option<&mut ParsedSelection> {
        match self {
            SelectionSession::Parsed(selection) => Some(selection),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = SelectionSession::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, SelectionSession::Idle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSelection {
    dish: String,
    lines: Vec<IngredientLine>,
}

impl ParsedSelection {
    /// The dish is stored trimmed; a blank dish is rejected at commit time
    pub fn new(dish: &str, lines: Vec<IngredientLine>) -> Self {
        Self {
            dish: dish.trim().to_string(),
            lines,
        }
    }

    pub fn dish(&self) -> &str {
        &self.dish
    }

    pub fn lines(&self) -> &[IngredientLine] {
        &self.lines
    }

    /// Flip the flag on line `index`; returns the new flag
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let line = self.lines.get_mut(index)?;
        line.selected = !line.selected;
        Some(line.selected)
    }

    /// Flag line `index`; false if there is no such line
    pub fn select(&mut self, index: usize) -> bool {
        match self.lines.get_mut(index) {
            Some(line) => {
                line.selected = true;
                true
            }
            None => false,
        }
    }

    /// Flag lines by the 1-based numbers they were printed with.
    ///
    /// All numbers are checked first: if any has no line, nothing is flagged.
    pub fn select_numbered(&mut self, numbers: &[usize]) -> Result<(), GoKartsError> {
        if let Some(&missing) = numbers
            .iter()
            .find(|&&n| n == 0 || n > self.lines.len())
        {
            return Err(GoKartsError::NoSuchIngredient(missing));
        }

        for &number in numbers {
            self.select(number - 1);
        }
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.lines.iter_mut().for_each(|line| line.selected = true);
    }

    pub fn clear_selection(&mut self) {
        self.lines.iter_mut().for_each(|line| line.selected = false);
    }

    pub fn selected(&self) -> Vec<IngredientLine> {
        self.lines.iter().filter(|l| l.selected).cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.lines.iter().filter(|l| l.selected).count()
    }

    /// Merge the flagged lines into the shopping list.
    ///
    /// With nothing flagged the store is not touched and the selection comes
    /// back as `NothingSelected`. A store failure hands the selection back
    /// inside the error so the person can retry.
    pub async fn commit<S: KeyValueStore>(
        mut self,
        aggregator: &ShoppingListAggregator<S>,
    ) -> Result<CommitOutcome, CommitError> {
        let chosen = self.selected();
        if chosen.is_empty() {
            return Ok(CommitOutcome::NothingSelected(self));
        }

        match aggregator.add_selected(&chosen, &self.dish).await {
            Ok(AddOutcome::Added(list)) => {
                self.clear_selection();
                // The aggregator appends in order, so the batch is the tail of the list
                let added = list[list.len().saturating_sub(chosen.len())..].to_vec();
                Ok(CommitOutcome::Committed(CommittedSelection {
                    dish: self.dish,
                    lines: self.lines,
                    added,
                    list,
                }))
            }
            Ok(AddOutcome::NothingToAdd(_)) => Ok(CommitOutcome::NothingSelected(self)),
            Err(source) => Err(CommitError {
                selection: self,
                source,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSelection {
    dish: String,
    lines: Vec<IngredientLine>,
    added: Vec<ShoppingListItem>,
    list: Vec<ShoppingListItem>,
}

impl CommittedSelection {
    pub fn dish(&self) -> &str {
        &self.dish
    }

    /// The parsed lines, every flag cleared
    pub fn lines(&self) -> &[IngredientLine] {
        &self.lines
    }

    pub fn added(&self) -> &[ShoppingListItem] {
        &self.added
    }

    /// Full shopping list after the commit
    pub fn list(&self) -> &[ShoppingListItem] {
        &self.list
    }

    pub fn finish(self) -> SelectionSession {
        SelectionSession::Idle
    }
}

#[derive(Debug)]
pub enum CommitOutcome {
    Committed(CommittedSelection),
    NothingSelected(ParsedSelection),
}

impl From<CommitOutcome> for SelectionSession {
    fn from(outcome: CommitOutcome) -> Self {
        match outcome {
            CommitOutcome::Committed(committed) => SelectionSession::Committed(committed),
            CommitOutcome::NothingSelected(selection) => SelectionSession::Parsed(selection),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to commit selection for {}: {source}", .selection.dish)]
pub struct CommitError {
    pub selection: ParsedSelection,
    #[source]
    pub source: GoKartsError,
}
