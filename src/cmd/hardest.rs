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
use flashcards_core::HardestReport;

use crate::console::Console;

pub fn hardest_card<R: BufRead, W: Write>(
    store: &CardStore,
    console: &mut Console<R, W>,
) -> Fallible<()> {
    let report = HardestReport::from_store(store);
    console.say(&format!("{report}\n\n"))
}
