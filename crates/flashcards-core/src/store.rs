// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::types::flashcard::Flashcard;
use crate::types::flashcard::Side;

/// The ordered, in-memory collection of cards for a session.
///
/// Order is insertion order, except that an import replaces matching
/// cards in place. Quizzes cycle through the store in this order and the
/// hardest-card report lists ties in it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Flashcard>,
}

/// The outcome of merging an imported card list into the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MergeSummary {
    /// Size of the imported list. This is the number reported to the user.
    pub imported: usize,
    /// Existing cards that were overwritten in place.
    pub replaced: usize,
    /// Imported cards appended to the end of the store.
    pub appended: usize,
}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether `value` may be used for the given side of a new card: it must
    /// be non-empty and not equal (case-sensitively) to that side of any
    /// existing card.
    pub fn validate(&self, side: Side, value: &str) -> bool {
        !value.is_empty() && !self.cards.iter().any(|card| card.side(side) == value)
    }

    /// Append a card. Uniqueness is the caller's business, see
    /// [`CardStore::validate`].
    pub fn push(&mut self, card: Flashcard) {
        self.cards.push(card);
    }

    /// Remove the first card with the given front, preserving the order of
    /// the rest.
    pub fn remove(&mut self, front: &str) -> Option<Flashcard> {
        let index = self.cards.iter().position(|card| card.front() == front)?;
        Some(self.cards.remove(index))
    }

    /// Increment the error count of the card at `index`.
    pub fn record_error(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.record_error();
        }
    }

    /// Zero every error count. Fronts and backs are untouched.
    pub fn reset_stats(&mut self) {
        for card in &mut self.cards {
            card.reset_errors();
        }
    }

    /// Merge an imported card list into the store.
    ///
    /// Each existing card, in store order, is replaced in place by the first
    /// not-yet-consumed imported card sharing its front or its back. That
    /// imported card is consumed. Afterwards, the unconsumed imported cards
    /// are appended in import order.
    ///
    /// Uniqueness of fronts and backs is not re-checked, so an import can
    /// introduce duplicates.
    pub fn merge(&mut self, imported: Vec<Flashcard>) -> MergeSummary {
        let total = imported.len();
        let mut consumed: Vec<bool> = vec![false; total];
        let mut replaced = 0;
        for existing in &mut self.cards {
            let found = (0..total).find(|&index| {
                let candidate = &imported[index];
                !consumed[index]
                    && (candidate.front() == existing.front() || candidate.back() == existing.back())
            });
            if let Some(index) = found {
                *existing = imported[index].clone();
                consumed[index] = true;
                replaced += 1;
            }
        }
        let mut appended = 0;
        for (card, used) in imported.into_iter().zip(consumed) {
            if !used {
                self.cards.push(card);
                appended += 1;
            }
        }
        log::debug!("Merged {total} imported cards: {replaced} replaced, {appended} appended.");
        MergeSummary {
            imported: total,
            replaced,
            appended,
        }
    }
}
