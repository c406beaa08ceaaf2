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

use std::fmt::Display;
use std::fmt::Formatter;

/// The actions offered at the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Log,
    HardestCard,
    ResetStats,
    Exit,
    /// Anything else. Silently ignored.
    Unknown,
}

impl Command {
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Remove,
        Command::Import,
        Command::Export,
        Command::Ask,
        Command::Exit,
        Command::Log,
        Command::HardestCard,
        Command::ResetStats,
    ];

    /// Tokens are matched exactly and case-sensitively.
    pub fn parse(line: &str) -> Self {
        match line {
            "add" => Command::Add,
            "remove" => Command::Remove,
            "import" => Command::Import,
            "export" => Command::Export,
            "ask" => Command::Ask,
            "log" => Command::Log,
            "hardest card" => Command::HardestCard,
            "reset stats" => Command::ResetStats,
            "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }

    /// The menu prompt listing every command.
    pub fn menu() -> String {
        let names: Vec<String> = Command::ALL.iter().map(|c| c.to_string()).collect();
        format!("Input the action ({}):\n", names.join(", "))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
            Command::Exit => "exit",
            Command::Unknown => "unknown",
        };
        write!(f, "{token}")
    }
}
