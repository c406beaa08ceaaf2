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
use std::path::PathBuf;

use flashcards_core::Fallible;

use crate::console::Console;

/// Ask for a file name and write the session transcript to it.
///
/// The confirmation is printed whether or not the write worked; failures are
/// logged.
pub fn save_log<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Fallible<()> {
    let path = PathBuf::from(console.prompt("File name:\n")?);
    if let Err(e) = console.transcript().save(&path) {
        log::warn!("Failed to save the log to {}: {e}", path.display());
    }
    console.say("The log has been saved.\n\n")
}
