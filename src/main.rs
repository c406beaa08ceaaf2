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

mod cli;
mod cmd;
mod command;
mod console;
#[cfg(test)]
mod helper;
mod session;
mod transcript;

use std::process::ExitCode;

use env_logger::Env;

use crate::cli::entrypoint;

fn main() -> ExitCode {
    // Standard output is the conversation with the user; logs go to stderr.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    match entrypoint() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
