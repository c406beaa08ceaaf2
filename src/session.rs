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

use flashcards_core::CardStore;
use flashcards_core::Fallible;

use crate::cmd::add::add_card;
use crate::cmd::ask::ask;
use crate::cmd::export::export_cards;
use crate::cmd::hardest::hardest_card;
use crate::cmd::import::import_cards;
use crate::cmd::remove::remove_card;
use crate::cmd::reset::reset_stats;
use crate::cmd::save_log::save_log;
use crate::command::Command;
use crate::console::Console;

/// Startup options for a session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Card file merged into the store before the first command.
    pub import_from: Option<PathBuf>,
    /// Card file written when the user exits.
    pub export_to: Option<PathBuf>,
}

/// One run of the trainer: the card store, plus the console it talks
/// through.
pub struct Session<R, W> {
    config: SessionConfig,
    store: CardStore,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, console: Console<R, W>) -> Self {
        Self {
            config,
            store: CardStore::new(),
            console,
        }
    }

    /// Run the command loop until the user exits.
    pub fn run(&mut self) -> Fallible<()> {
        if let Some(path) = self.config.import_from.as_deref() {
            log::debug!("Importing cards from {} at startup.", path.display());
            import_cards(&mut self.store, &mut self.console, Some(path))?;
        }
        let menu = Command::menu();
        loop {
            let line = self.console.prompt(&menu)?;
            let command = Command::parse(&line);
            log::debug!("Command: {command}");
            match command {
                Command::Add => add_card(&mut self.store, &mut self.console)?,
                Command::Remove => remove_card(&mut self.store, &mut self.console)?,
                Command::Import => import_cards(&mut self.store, &mut self.console, None)?,
                Command::Export => export_cards(&self.store, &mut self.console, None)?,
                Command::Ask => ask(&mut self.store, &mut self.console)?,
                Command::Log => save_log(&mut self.console)?,
                Command::HardestCard => hardest_card(&self.store, &mut self.console)?,
                Command::ResetStats => reset_stats(&mut self.store, &mut self.console)?,
                Command::Exit => {
                    if let Some(path) = self.config.export_to.as_deref() {
                        export_cards(&self.store, &mut self.console, Some(path))?;
                    }
                    self.console.say("Bye bye!\n")?;
                    return Ok(());
                }
                Command::Unknown => {}
            }
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    #[cfg(test)]
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use flashcards_core::Flashcard;

    use super::*;
    use crate::helper::create_tmp_directory;

    const MENU: &str = "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):\n";

    fn run_session(config: SessionConfig, input: &str) -> Fallible<Session<&[u8], Vec<u8>>> {
        let console = Console::new(input.as_bytes(), Vec::new());
        let mut session = Session::new(config, console);
        session.run()?;
        Ok(session)
    }

    fn output(session: &Session<&[u8], Vec<u8>>) -> String {
        String::from_utf8_lossy(session.console().writer()).to_string()
    }

    #[test]
    fn test_exit() -> Fallible<()> {
        let session = run_session(SessionConfig::default(), "exit\n")?;
        assert_eq!(output(&session), format!("{MENU}Bye bye!\n"));
        Ok(())
    }

    #[test]
    fn test_unknown_commands_are_ignored() -> Fallible<()> {
        let session = run_session(SessionConfig::default(), "jump\nEXIT\n\nexit\n")?;
        assert_eq!(output(&session), format!("{MENU}{MENU}{MENU}{MENU}Bye bye!\n"));
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_command_is_ignored() -> Fallible<()> {
        let console = Console::new(&b"caf\xe9\nexit\n"[..], Vec::new());
        let mut session = Session::new(SessionConfig::default(), console);
        session.run()?;
        assert_eq!(output(&session), format!("{MENU}{MENU}Bye bye!\n"));
        Ok(())
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let console = Console::new(&b"add\nx\n"[..], Vec::new());
        let mut session = Session::new(SessionConfig::default(), console);
        let result = session.run();
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("error: unexpected end of input.".to_string())
        );
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_add_quiz_and_report() -> Fallible<()> {
        let input = concat!(
            "add\nx\n1\n",
            "add\ny\n2\n",
            "ask\n3\n2\n2\nwhat\n",
            "hardest card\n",
            "reset stats\n",
            "hardest card\n",
            "exit\n",
        );
        let session = run_session(SessionConfig::default(), input)?;
        assert_eq!(
            session.store().cards(),
            &[Flashcard::new("x", "1"), Flashcard::new("y", "2")]
        );
        let out = output(&session);
        assert!(out.contains("The hardest card is \"x\". You have 2 errors answering it.\n\n"));
        assert!(out.contains("Card statistics have been reset.\n\n"));
        assert!(out.ends_with(&format!(
            "There are no cards with errors.\n\n{MENU}Bye bye!\n"
        )));
        Ok(())
    }

    #[test]
    fn test_startup_import_and_exit_export() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let source = dir.join("in.json");
        let target = dir.join("out.json");
        write(
            &source,
            r#"[{"card":"a","definition":"1","errorCount":3}]"#,
        )?;
        let config = SessionConfig {
            import_from: Some(source),
            export_to: Some(target.clone()),
        };
        let session = run_session(config, "remove\na\nexit\n")?;
        assert!(session.store().is_empty());
        assert_eq!(
            output(&session),
            format!(
                "1 cards have been loaded.\n\n{MENU}Which card?\nThe card has been removed.\n\n{MENU}0 cards have been saved.\n\nBye bye!\n"
            )
        );
        assert_eq!(read_to_string(&target)?, "[]");
        Ok(())
    }

    #[test]
    fn test_export_then_import_into_fresh_session() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("cards.json");
        let input = format!(
            "add\na\n1\nadd\nb\n2\nask\n1\nwrong\nexport\n{}\nexit\n",
            path.display()
        );
        let first = run_session(SessionConfig::default(), &input)?;
        let config = SessionConfig {
            import_from: Some(path),
            export_to: None,
        };
        let second = run_session(config, "exit\n")?;
        assert_eq!(second.store(), first.store());
        assert_eq!(second.store().cards()[0].error_count(), 1);
        Ok(())
    }

    #[test]
    fn test_log_contains_whole_session() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.join("session.log");
        let input = format!("bogus\nlog\n{}\nexit\n", path.display());
        run_session(SessionConfig::default(), &input)?;
        assert_eq!(
            read_to_string(&path)?,
            format!("{MENU}bogus\n{MENU}log\nFile name:\n{}\n", path.display())
        );
        Ok(())
    }

    #[test]
    fn test_transcript_records_exit() -> Fallible<()> {
        let session = run_session(SessionConfig::default(), "exit\n")?;
        assert_eq!(
            session.console().transcript().contents(),
            format!("{MENU}exit\nBye bye!\n")
        );
        Ok(())
    }
}
