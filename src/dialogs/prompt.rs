//! Blocking prompts: message boxes and file pickers
//!
//! Dialogs ask the user through this trait so that the terminal, scripted
//! command-line flags and tests can all answer the same questions.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// A question with a fixed set of buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBox {
    pub title: &'static str,
    pub message: String,
    pub buttons: Vec<&'static str>,
    /// Button chosen when the user just accepts
    pub default_id: usize,
    /// Button reported when the prompt is dismissed
    pub cancel_id: usize,
}

impl MessageBox {
    /// "Are you sure?" box for irreversible deletions
    pub fn confirm_delete(what: &str) -> Self {
        Self {
            title: "Are you sure?",
            message: format!(
                "Are you sure you want to delete {}?\n\nThis action is irreversible.",
                what
            ),
            buttons: vec!["Nope, cancel.", "Yes!"],
            default_id: CONFIRM_BUTTON,
            cancel_id: CANCEL_BUTTON,
        }
    }

    /// "Merge or Replace?" box shown before importing
    pub fn merge_or_replace() -> Self {
        Self {
            title: "Merge or Replace?",
            message: "Do you want to merge this with your existing data, or replace it?".into(),
            buttons: vec!["Wait, cancel.", "Merge", "Replace"],
            default_id: REPLACE_BUTTON,
            cancel_id: CANCEL_BUTTON,
        }
    }
}

pub const CANCEL_BUTTON: usize = 0;
pub const CONFIRM_BUTTON: usize = 1;
pub const MERGE_BUTTON: usize = 1;
pub const REPLACE_BUTTON: usize = 2;

/// Something that can ask the user questions
pub trait Prompt {
    /// Show a message box and return the index of the chosen button
    fn message_box(&mut self, request: &MessageBox) -> usize;

    /// Ask for a file to read; `None` when cancelled
    fn open_file(&mut self, title: &str) -> Option<PathBuf>;

    /// Ask for a file to write; `None` when cancelled
    fn save_file(&mut self, title: &str, default_name: &str) -> Option<PathBuf>;
}

/// Ask for confirmation of an irreversible deletion
pub fn confirm_delete(prompt: &mut dyn Prompt, what: &str) -> bool {
    prompt.message_box(&MessageBox::confirm_delete(what)) == CONFIRM_BUTTON
}

/// Prompt backed by the terminal
///
/// Answers supplied up front (from command-line flags) are used first, in
/// order; anything else is asked on stdin. An empty answer or end of input
/// dismisses the question.
#[derive(Debug, Default)]
pub struct TerminalPrompt {
    answers: VecDeque<usize>,
    open_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-answer the next message box
    pub fn with_answer(mut self, button: usize) -> Self {
        self.answers.push_back(button);
        self
    }

    /// Pre-answer the next open-file question
    pub fn with_open_path(mut self, path: PathBuf) -> Self {
        self.open_path = Some(path);
        self
    }

    /// Pre-answer the next save-file question
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_path = Some(path);
        self
    }

    fn read_line(question: &str) -> Option<String> {
        print!("{} ", question);
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

/// Match typed input against button labels: a 1-based number or a label prefix
pub fn parse_button_choice(input: &str, buttons: &[&str]) -> Option<usize> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return (1..=buttons.len()).contains(&n).then(|| n - 1);
    }
    let lowered = input.to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    buttons
        .iter()
        .position(|b| b.to_lowercase().starts_with(&lowered))
}

impl Prompt for TerminalPrompt {
    fn message_box(&mut self, request: &MessageBox) -> usize {
        if let Some(answer) = self.answers.pop_front() {
            return answer;
        }

        println!("{}", request.title);
        for line in request.message.lines() {
            println!("  {}", line);
        }
        for (i, button) in request.buttons.iter().enumerate() {
            println!("  [{}] {}", i + 1, button);
        }

        Self::read_line(">")
            .and_then(|answer| parse_button_choice(&answer, &request.buttons))
            .unwrap_or(request.cancel_id)
    }

    fn open_file(&mut self, title: &str) -> Option<PathBuf> {
        if let Some(path) = self.open_path.take() {
            return Some(path);
        }
        Self::read_line(&format!("{}:", title)).map(PathBuf::from)
    }

    fn save_file(&mut self, title: &str, default_name: &str) -> Option<PathBuf> {
        if let Some(path) = self.save_path.take() {
            return Some(path);
        }
        let answer = Self::read_line(&format!("{} [{}]:", title, default_name));
        Some(PathBuf::from(answer.unwrap_or_else(|| default_name.to_string())))
    }
}
