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

//! The JSON card file format.
//!
//! A card file is a JSON array of objects with the fields `card`,
//! `definition` and `errorCount`. Export always writes all three fields.
//! Import is lenient: missing fields default, unknown fields are ignored,
//! and entries that cannot be read are dropped.

use serde_json::Value;

use crate::error::Fallible;
use crate::types::flashcard::Flashcard;

/// The result of reading a card file.
#[derive(Debug, Default, PartialEq)]
pub struct DecodedCards {
    /// The cards that could be decoded, in file order.
    pub cards: Vec<Flashcard>,
    /// The content was not a JSON array at all.
    pub malformed: bool,
    /// Array entries that were skipped because they could not be decoded.
    pub dropped: usize,
}

/// Decode the contents of a card file. Never fails: a malformed file
/// decodes to no cards, with [`DecodedCards::malformed`] set.
pub fn decode_cards(content: &[u8]) -> DecodedCards {
    let entries: Vec<Value> = match serde_json::from_slice::<Value>(content) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            log::debug!("Card file is not a JSON array: {other}");
            return DecodedCards {
                malformed: true,
                ..DecodedCards::default()
            };
        }
        Err(e) => {
            log::debug!("Card file is not valid JSON: {e}");
            return DecodedCards {
                malformed: true,
                ..DecodedCards::default()
            };
        }
    };
    let mut decoded = DecodedCards::default();
    for entry in entries {
        match serde_json::from_value::<Flashcard>(entry) {
            Ok(card) => decoded.cards.push(card),
            Err(e) => {
                log::debug!("Skipping card file entry: {e}");
                decoded.dropped += 1;
            }
        }
    }
    decoded
}

/// Encode cards as a JSON array.
pub fn encode_cards(cards: &[Flashcard]) -> Fallible<String> {
    Ok(serde_json::to_string(cards)?)
}
