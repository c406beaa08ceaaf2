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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::store::CardStore;
use crate::types::flashcard::Flashcard;

/// The cards sharing the highest positive error count, in store order.
#[derive(Debug, PartialEq)]
pub struct HardestReport<'a> {
    cards: Vec<&'a Flashcard>,
}

impl<'a> HardestReport<'a> {
    pub fn from_store(store: &'a CardStore) -> Self {
        let mut cards: Vec<&Flashcard> = Vec::new();
        let mut max: u64 = 0;
        for card in store.cards() {
            if card.error_count() > max {
                max = card.error_count();
                cards = vec![card];
            } else if max > 0 && card.error_count() == max {
                cards.push(card);
            }
        }
        Self { cards }
    }

    pub fn cards(&self) -> &[&'a Flashcard] {
        &self.cards
    }

    /// The shared error count, or zero when no card has errors.
    pub fn error_count(&self) -> u64 {
        self.cards.last().map_or(0, |card| card.error_count())
    }
}

impl Display for HardestReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.cards.as_slice() {
            [] => write!(f, "There are no cards with errors."),
            [card] => write!(
                f,
                "The hardest card is \"{}\". You have {} errors answering it.",
                card.front(),
                card.error_count()
            ),
            cards => {
                let names: Vec<String> = cards
                    .iter()
                    .map(|card| format!("\"{}\"", card.front()))
                    .collect();
                write!(
                    f,
                    "The hardest cards are {}. You have {} errors answering them.",
                    names.join(", "),
                    self.error_count()
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_store(counts: &[u64]) -> CardStore {
        let cards = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| Flashcard::with_errors(format!("t{i}"), format!("d{i}"), count))
            .collect();
        CardStore::from_cards(cards)
    }

    #[test]
    fn test_ties() {
        let store = make_store(&[0, 2, 2, 1]);
        let report = HardestReport::from_store(&store);
        let fronts: Vec<&str> = report.cards().iter().map(|c| c.front()).collect();
        assert_eq!(fronts, vec!["t1", "t2"]);
        assert_eq!(report.error_count(), 2);
        assert_eq!(
            report.to_string(),
            "The hardest cards are \"t1\", \"t2\". You have 2 errors answering them."
        );
    }

    #[test]
    fn test_all_zero() {
        let store = make_store(&[0, 0, 0]);
        let report = HardestReport::from_store(&store);
        assert!(report.cards().is_empty());
        assert_eq!(report.to_string(), "There are no cards with errors.");
    }

    #[test]
    fn test_empty_store() {
        let store = CardStore::new();
        assert_eq!(
            HardestReport::from_store(&store).to_string(),
            "There are no cards with errors."
        );
    }

    #[test]
    fn test_single() {
        let store = make_store(&[1, 3, 2]);
        assert_eq!(
            HardestReport::from_store(&store).to_string(),
            "The hardest card is \"t1\". You have 3 errors answering it."
        );
    }

    #[test]
    fn test_later_maximum_resets_ties() {
        let store = make_store(&[2, 2, 5, 1, 5]);
        let report = HardestReport::from_store(&store);
        let fronts: Vec<&str> = report.cards().iter().map(|c| c.front()).collect();
        assert_eq!(fronts, vec!["t2", "t4"]);
        assert_eq!(report.error_count(), 5);
    }
}
