//! `MockPrompt` — a test double for `Prompt`.
//!
//! Useful in unit and session tests where no terminal is attached.

use std::collections::VecDeque;

use crate::{Prompt, TrackerError};

/// A scripted answer handed out by `MockPrompt`.
#[derive(Debug, Clone)]
pub enum Answer {
    /// Returned from `input`.
    Text(String),
    /// Returned from `number`.
    Number(f64),
    /// Returned from `select` (zero-based index).
    Selection(usize),
}

/// A mock prompt that records every message it is asked and replays a
/// programmer-specified queue of answers.
///
/// Running out of answers behaves like the terminal closing, so a script that
/// is too short ends the session instead of hanging.  Answering a prompt with
/// the wrong `Answer` variant is a test-authoring bug and panics.
pub struct MockPrompt {
    answers: VecDeque<Answer>,
    /// All messages seen by this prompt (in call order).
    pub asked: Vec<String>,
}

impl MockPrompt {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    /// Number of prompts this mock has answered or refused.
    pub fn ask_count(&self) -> usize {
        self.asked.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, TrackerError> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or(TrackerError::InputClosed)
    }
}

impl Prompt for MockPrompt {
    fn input(&mut self, message: &str) -> Result<String, TrackerError> {
        match self.next(message)? {
            Answer::Text(text) => Ok(text),
            other => panic!("MockPrompt: input({message:?}) answered with {other:?}"),
        }
    }

    fn number(&mut self, message: &str) -> Result<f64, TrackerError> {
        match self.next(message)? {
            Answer::Number(value) => Ok(value),
            other => panic!("MockPrompt: number({message:?}) answered with {other:?}"),
        }
    }

    fn select(&mut self, message: &str, options: &[&str]) -> Result<usize, TrackerError> {
        match self.next(message)? {
            Answer::Selection(index) if index < options.len() => Ok(index),
            Answer::Selection(index) => {
                panic!("MockPrompt: selection {index} out of range for {message:?}")
            }
            other => panic!("MockPrompt: select({message:?}) answered with {other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_replay_in_order_and_messages_are_recorded() {
        let mut prompt = MockPrompt::new(vec![
            Answer::Text("Engineering".to_string()),
            Answer::Selection(1),
        ]);

        let text = prompt.input("name?").unwrap();
        assert_eq!(text, "Engineering");

        let index = prompt.select("pick one", &["a", "b"]).unwrap();
        assert_eq!(index, 1);

        assert_eq!(prompt.asked, vec!["name?", "pick one"]);
        assert_eq!(prompt.ask_count(), 2);
    }

    #[test]
    fn an_exhausted_script_reads_as_closed_input() {
        let mut prompt = MockPrompt::new(vec![]);
        let err = prompt.input("anything?").unwrap_err();
        assert!(matches!(err, TrackerError::InputClosed));
    }
}
