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

use serde::Deserialize;
use serde::Serialize;

/// A term/definition pair with a count of wrong answers.
///
/// The serialized field names are those of the card file format: `card`,
/// `definition` and `errorCount`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The term shown to the user.
    #[serde(rename = "card", default)]
    front: String,
    /// The definition the user has to recall.
    #[serde(rename = "definition", default)]
    back: String,
    /// How many times the card was answered incorrectly.
    #[serde(rename = "errorCount", default)]
    error_count: u64,
}

/// Which side of a card a value is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The front of the card.
    Term,
    /// The back of the card.
    Definition,
}

impl Flashcard {
    /// A fresh card with no errors.
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self::with_errors(front, back, 0)
    }

    pub fn with_errors(front: impl Into<String>, back: impl Into<String>, error_count: u64) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            error_count,
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn error_count(&self) -> u64 {
        self.error_count
    }

    /// The text on the given side of the card.
    pub fn side(&self, side: Side) -> &str {
        match side {
            Side::Term => &self.front,
            Side::Definition => &self.back,
        }
    }

    pub fn record_error(&mut self) {
        self.error_count = self.error_count.saturating_add(1);
    }

    pub fn reset_errors(&mut self) {
        self.error_count = 0;
    }
}
