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

use std::fs::write;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use flashcards_core::CardStore;
use flashcards_core::Fallible;
use flashcards_core::encode_cards;

use crate::console::Console;

/// Write every card to a JSON file. If `path` is `None` the user is asked
/// for a file name.
///
/// The confirmation is printed whether or not the write worked; failures are
/// logged.
pub fn export_cards<R: BufRead, W: Write>(
    store: &CardStore,
    console: &mut Console<R, W>,
    path: Option<&Path>,
) -> Fallible<()> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(console.prompt("File name:\n")?),
    };
    if let Err(e) = write_cards(store, &path) {
        log::warn!("Failed to export cards to {}: {e}", path.display());
    }
    console.say(&format!("{} cards have been saved.\n\n", store.len()))
}

fn write_cards(store: &CardStore, path: &Path) -> Fallible<()> {
    let json = encode_cards(store.cards())?;
    write(path, json)?;
    log::debug!("Exported {} cards to {}.", store.len(), path.display());
    Ok(())
}
