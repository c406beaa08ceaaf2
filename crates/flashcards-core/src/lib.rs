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

//! flashcards-core: Core library for the flashcards trainer.
//!
//! This library performs no terminal I/O. It provides:
//! - The flashcard type and the JSON card file codec
//! - The card store, with duplicate validation and the import merge
//! - Quiz answer matching
//! - The hardest-card report

pub mod codec;
pub mod error;
pub mod quiz;
pub mod report;
pub mod store;
pub mod types;

// Re-exports for convenience
pub use codec::{DecodedCards, decode_cards, encode_cards};
pub use error::{ErrorReport, Fallible, fail};
pub use quiz::{Verdict, answer_card, check_answer, parse_count, question_order};
pub use report::HardestReport;
pub use store::{CardStore, MergeSummary};
pub use types::flashcard::{Flashcard, Side};
