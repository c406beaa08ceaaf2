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

use crate::console::Console;

/// Ask for a term once and remove the first card with that front.
pub fn remove_card<R: BufRead, W: Write>(
    store: &mut CardStore,
    console: &mut Console<R, W>,
) -> Fallible<()> {
    let front = console.prompt("Which card?\n")?;
    match store.remove(&front) {
        Some(_) => console.say("The card has been removed.\n\n"),
        None => console.say(&format!(
            "Can't remove \"{front}\": there is no such card.\n\n"
        )),
    }
}
