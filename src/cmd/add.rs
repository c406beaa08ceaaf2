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
use flashcards_core::Flashcard;
use flashcards_core::Side;

use crate::console::Console;

/// Interactively create a card and append it to the store.
pub fn add_card<R: BufRead, W: Write>(
    store: &mut CardStore,
    console: &mut Console<R, W>,
) -> Fallible<()> {
    let front = read_unique(store, console, Side::Term)?;
    let back = read_unique(store, console, Side::Definition)?;
    console.say(&format!(
        "The pair (\"{front}\":\"{back}\") has been added.\n\n"
    ))?;
    store.push(Flashcard::new(front, back));
    Ok(())
}

/// Keep asking until the user gives a non-empty value that no existing card
/// uses on the same side.
fn read_unique<R: BufRead, W: Write>(
    store: &CardStore,
    console: &mut Console<R, W>,
    side: Side,
) -> Fallible<String> {
    let mut value = String::new();
    while !store.validate(side, &value) {
        let prompt = match (side, value.is_empty()) {
            (Side::Term, true) => "The card:\n".to_string(),
            (Side::Definition, true) => "The definition of the card:\n".to_string(),
            (Side::Term, false) => format!("The card \"{value}\" already exists. Try again:\n"),
            (Side::Definition, false) => {
                format!("The definition \"{value}\" already exists. Try again:\n")
            }
        };
        value = console.prompt(&prompt)?;
    }
    Ok(value)
}
