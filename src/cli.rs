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

use std::env::args_os;
use std::ffi::OsString;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use flashcards_core::Fallible;

use crate::console::Console;
use crate::session::Session;
use crate::session::SessionConfig;

/// Learn term/definition pairs by being quizzed on them.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Options {
    /// Card file to import before the first command.
    #[arg(long = "import_from", alias = "import-from", value_name = "FILE")]
    import_from: Option<String>,
    /// Card file to export to when exiting.
    #[arg(long = "export_to", alias = "export-to", value_name = "FILE")]
    export_to: Option<String>,
}

impl From<Options> for SessionConfig {
    fn from(options: Options) -> Self {
        // An empty path means the option was not given.
        let non_empty = |path: Option<String>| path.filter(|p| !p.is_empty()).map(PathBuf::from);
        SessionConfig {
            import_from: non_empty(options.import_from),
            export_to: non_empty(options.export_to),
        }
    }
}

/// Long options that may also be spelled with a single dash, as in
/// `-import_from=cards.json`.
const SINGLE_DASH_OPTIONS: [&str; 2] = ["-import_from", "-export_to"];

/// Rewrite single-dash spellings of the long options to their double-dash
/// form. Everything else is passed through untouched.
fn normalize_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| {
            let single_dash = arg.to_str().is_some_and(|s| {
                SINGLE_DASH_OPTIONS.iter().any(|name| {
                    s.strip_prefix(name)
                        .is_some_and(|rest| rest.is_empty() || rest.starts_with('='))
                })
            });
            if single_dash {
                let mut fixed = OsString::from("-");
                fixed.push(&arg);
                fixed
            } else {
                arg
            }
        })
        .collect()
}

pub fn entrypoint() -> Fallible<()> {
    let options: Options = Options::parse_from(normalize_args(args_os()));
    let config: SessionConfig = options.into();
    log::debug!("Starting session with {config:?}");
    let console = Console::new(stdin().lock(), stdout().lock());
    Session::new(config, console).run()
}
