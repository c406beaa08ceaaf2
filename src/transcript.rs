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
use std::path::Path;

use flashcards_core::Fallible;

/// Chronological record of everything printed to and read from the user.
///
/// Append-only for the lifetime of the session. Prompts and answers are not
/// marked, so the saved file reads like the terminal did.
#[derive(Debug, Default)]
pub struct Transcript {
    buffer: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record text exactly as it was printed.
    pub fn record_output(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Record one line of user input.
    pub fn record_input(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Write the transcript to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Fallible<()> {
        write(path, self.contents())?;
        Ok(())
    }
}
