// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, BufRead, Write};

/// Blocking user dialogs: a yes/no question and a one-way notice.
pub trait Prompt {
    fn confirm(&mut self, message: &str) -> bool;
    fn notify(&mut self, message: &str);
}

pub struct TerminalPrompt {
    pub assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Answers every confirmation with a fixed value and keeps what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub confirms: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answer
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
