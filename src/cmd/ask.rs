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

use std::io::BufRead;
use std::io::Write;

use flashcards_core::CardStore;
use flashcards_core::Fallible;
use flashcards_core::Verdict;
use flashcards_core::answer_card;
use flashcards_core::parse_count;
use flashcards_core::question_order;

use crate::console::Console;

/// Run a quiz: ask for a number of questions, then cycle through the store
/// from the first card, asking for definitions.
pub fn ask<R: BufRead, W: Write>(
    store: &mut CardStore,
    console: &mut Console<R, W>,
) -> Fallible<()> {
    if store.is_empty() {
        return console.say("No cards available!\n");
    }
    let count = parse_count(&console.prompt("How many times to ask?\n")?);
    for index in question_order(store.len(), count) {
        let (front, back) = match store.get(index) {
            Some(card) => (card.front().to_string(), card.back().to_string()),
            None => break,
        };
        let answer = console.prompt(&format!("Print the definition of \"{front}\":\n"))?;
        let message = match answer_card(store, index, &answer) {
            Verdict::Correct => "Correct!\n\n".to_string(),
            Verdict::Mistaken { other } => {
                let other = store.get(other).map_or("", |card| card.front());
                format!(
                    "Wrong. The right answer is \"{back}\", but your definition is correct for \"{other}\".\n"
                )
            }
            Verdict::Wrong => format!("Wrong. The right answer is \"{back}\".\n"),
        };
        console.say(&message)?;
    }
    Ok(())
}
