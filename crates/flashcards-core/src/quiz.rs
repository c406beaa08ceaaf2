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

//! Quiz answer matching.

use crate::store::CardStore;

/// How an answer to a card compares to the definitions in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The answer is exactly the card's back.
    Correct,
    /// The answer is wrong for this card, but is the back of the card at
    /// `other`.
    Mistaken { other: usize },
    /// The answer matches no definition in the store.
    Wrong,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Compare `answer` against the card at `index`. Matching is exact and
/// case-sensitive.
///
/// On a mismatch, the rest of the store is scanned in order (skipping
/// `index`) for the first card whose back equals the answer.
pub fn check_answer(store: &CardStore, index: usize, answer: &str) -> Verdict {
    match store.get(index) {
        Some(card) if card.back() == answer => Verdict::Correct,
        _ => store
            .cards()
            .iter()
            .enumerate()
            .find(|(other, card)| *other != index && card.back() == answer)
            .map_or(Verdict::Wrong, |(other, _)| Verdict::Mistaken { other }),
    }
}

/// Check an answer and charge an error to the card unless it was correct.
pub fn answer_card(store: &mut CardStore, index: usize, answer: &str) -> Verdict {
    let verdict = check_answer(store, index, answer);
    if !verdict.is_correct() {
        store.record_error(index);
    }
    verdict
}

/// Parse the number of questions to ask. Anything that is not a
/// non-negative integer means zero questions.
pub fn parse_count(input: &str) -> usize {
    input.trim().parse().unwrap_or(0)
}

/// Indices of the cards to ask, cycling through a store of `len` cards from
/// the start until `count` questions have been produced.
pub fn question_order(len: usize, count: usize) -> impl Iterator<Item = usize> {
    let count = if len == 0 { 0 } else { count };
    (0..count).map(move |n| n % len)
}
