// Copyright (c) 2026 MCU-Debug Authors.
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

use crate::artifacts::Candidate;
use log::warn;
use std::io::{self, BufRead, BufReader, Stdin, Stderr, Write};

/// Index of the candidate offered as the default choice: the first one found.
pub const DEFAULT_CANDIDATE: usize = 0;

/// Lets the user pick one of several candidates. Returns the index of the choice, or
/// `None` if the user cancelled. Blocks until answered.
pub trait CandidatePrompt {
    fn choose(&mut self, candidates: &[Candidate]) -> Option<usize>;
}

/// Never asks; always takes the default candidate.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl CandidatePrompt for FirstCandidate {
    fn choose(&mut self, candidates: &[Candidate]) -> Option<usize> {
        if candidates.is_empty() {
            None
        } else {
            Some(DEFAULT_CANDIDATE)
        }
    }
}

/// Numbered list on a terminal. An empty answer takes the default, `q` or end of input
/// cancels.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<BufReader<Stdin>, Stderr> {
    // stdout is reserved for the JSON result
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, candidates: &[Candidate]) -> io::Result<Option<usize>> {
        let count = candidates.len();
        writeln!(self.output, "Multiple build artifacts found:")?;
        for (i, c) in candidates.iter().enumerate() {
            writeln!(self.output, "  [{}] {}  ({})", i + 1, c.display_label, c.relative_folder)?;
        }

        loop {
            write!(
                self.output,
                "Select artifact [1-{}, default {}, q to cancel]: ",
                count,
                DEFAULT_CANDIDATE + 1
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let answer = line.trim();
            if answer.is_empty() {
                return Ok(Some(DEFAULT_CANDIDATE));
            }
            if answer.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(n - 1)),
                _ => writeln!(self.output, "Please enter a number between 1 and {}", count)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> CandidatePrompt for TerminalPrompt<R, W> {
    fn choose(&mut self, candidates: &[Candidate]) -> Option<usize> {
        match self.ask(candidates) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("Selection prompt failed: {}", e);
                None
            }
        }
    }
}
