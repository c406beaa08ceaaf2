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

use std::fs::read;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use flashcards_core::CardStore;
use flashcards_core::Fallible;
use flashcards_core::decode_cards;

use crate::console::Console;

/// Read a JSON card file and merge it into the store. If `path` is `None`
/// the user is asked for a file name.
///
/// An unreadable file leaves the store alone. A malformed file counts as
/// zero cards; the user sees the same message as for an empty file and the
/// problem is logged.
pub fn import_cards<R: BufRead, W: Write>(
    store: &mut CardStore,
    console: &mut Console<R, W>,
    path: Option<&Path>,
) -> Fallible<()> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(console.prompt("File name:\n")?),
    };
    let content = match read(&path) {
        Ok(content) => content,
        Err(e) => {
            log::debug!("Failed to read {}: {e}", path.display());
            return console.say("File not found.\n\n");
        }
    };
    let decoded = decode_cards(&content);
    if decoded.malformed {
        log::warn!("{} is not a JSON array of cards.", path.display());
    }
    if decoded.dropped > 0 {
        log::warn!(
            "Skipped {} unreadable entries in {}.",
            decoded.dropped,
            path.display()
        );
    }
    let summary = store.merge(decoded.cards);
    console.say(&format!("{} cards have been loaded.\n\n", summary.imported))
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use flashcards_core::Flashcard;

    use super::*;
    use crate::helper::create_tmp_directory;

    #[test]
    fn test_import_with_prompt() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("cards.json");
        write(
            &path,
            r#"[{"card":"a","definition":"9","errorCount":0},{"card":"z","definition":"9","errorCount":0}]"#,
        )?;
        let mut store = CardStore::from_cards(vec![Flashcard::with_errors("a", "1", 5)]);
        let input = format!("{}\n", path.display());
        let mut console = Console::new(input.as_bytes(), Vec::new());
        import_cards(&mut store, &mut console, None)?;
        assert_eq!(
            store.cards(),
            &[Flashcard::new("a", "9"), Flashcard::new("z", "9")]
        );
        assert_eq!(
            String::from_utf8_lossy(console.writer()),
            "File name:\n2 cards have been loaded.\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_import_missing_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("nope.json");
        let mut store = CardStore::from_cards(vec![Flashcard::new("a", "1")]);
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());
        import_cards(&mut store, &mut console, Some(path.as_path()))?;
        assert_eq!(store.cards(), &[Flashcard::new("a", "1")]);
        assert_eq!(
            String::from_utf8_lossy(console.writer()),
            "File not found.\n\n"
        );
        Ok(())
    }

    #[test]
    fn test_import_malformed_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("cards.json");
        write(&path, "this is not json")?;
        let mut store = CardStore::from_cards(vec![Flashcard::new("a", "1")]);
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());
        import_cards(&mut store, &mut console, Some(path.as_path()))?;
        assert_eq!(store.len(), 1);
        assert_eq!(
            String::from_utf8_lossy(console.writer()),
            "0 cards have been loaded.\n\n"
        );
        Ok(())
    }
}
