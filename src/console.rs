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

use flashcards_core::Fallible;
use flashcards_core::fail;

use crate::transcript::Transcript;

/// The user's terminal: every line printed or read goes through here and
/// is mirrored into the session [`Transcript`].
pub struct Console<R, W> {
    reader: R,
    writer: W,
    transcript: Transcript,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            transcript: Transcript::new(),
        }
    }

    /// Print `text` as-is and record it.
    pub fn say(&mut self, text: &str) -> Fallible<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        self.transcript.record_output(text);
        Ok(())
    }

    /// Read one line, with surrounding whitespace trimmed, and record it.
    /// Bytes that are not valid UTF-8 are replaced, not rejected.
    ///
    /// End of input is an error: every caller is waiting on an answer that
    /// will never come.
    pub fn read_line(&mut self) -> Fallible<String> {
        let mut bytes: Vec<u8> = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return fail("unexpected end of input.");
        }
        let line = String::from_utf8_lossy(&bytes).trim().to_string();
        self.transcript.record_input(&line);
        Ok(line)
    }

    /// Print a prompt and read the answer.
    pub fn prompt(&mut self, text: &str) -> Fallible<String> {
        self.say(text)?;
        self.read_line()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_records_both_sides() -> Fallible<()> {
        let input: &[u8] = b"  hello world \r\n";
        let mut console = Console::new(input, Vec::new());
        let answer = console.prompt("Say something:\n")?;
        assert_eq!(answer, "hello world");
        assert_eq!(console.writer().as_slice(), b"Say something:\n");
        assert_eq!(
            console.transcript().contents(),
            "Say something:\nhello world\n"
        );
        Ok(())
    }

    #[test]
    fn test_last_line_without_newline() -> Fallible<()> {
        let input: &[u8] = b"first\nsecond";
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.read_line()?, "first");
        assert_eq!(console.read_line()?, "second");
        Ok(())
    }

    #[test]
    fn test_end_of_input() {
        let input: &[u8] = b"";
        let mut console = Console::new(input, Vec::new());
        let result = console.read_line();
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: unexpected end of input.".to_string())
        );
        assert_eq!(console.transcript().contents(), "");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() -> Fallible<()> {
        let input: &[u8] = b"caf\xe9\nnext\n";
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.read_line()?, "caf\u{FFFD}");
        assert_eq!(console.read_line()?, "next");
        Ok(())
    }

    #[test]
    fn test_blank_line_is_empty_answer() -> Fallible<()> {
        let input: &[u8] = b"\n";
        let mut console = Console::new(input, Vec::new());
        assert_eq!(console.read_line()?, "");
        assert_eq!(console.transcript().contents(), "\n");
        Ok(())
    }
}
