//! Interactive input: posing questions and validating the answers.
//!
//! Commands never read the terminal themselves. The CLI layer collects
//! one answer per question through a [`PromptSource`] and converts it to
//! a typed value here before any document is touched, so a bad answer
//! fails the operation up front instead of half-way through a mutation.

use crate::error::{DepotError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub trait PromptSource {
    /// Pose a question and return the trimmed answer line.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Production prompt: question on stdout, answer read from stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl PromptSource for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        println!("{}", question.blue());
        io::stdout().flush().map_err(DepotError::Io)?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .map_err(DepotError::Io)?;
        Ok(answer.trim().to_string())
    }
}

pub fn require_text(field: &'static str, answer: String) -> Result<String> {
    if answer.is_empty() {
        return Err(DepotError::Validation {
            field,
            expected: "text",
            provided: answer,
        });
    }
    Ok(answer)
}

pub fn parse_warehouse_id(answer: &str) -> Result<u32> {
    answer.parse().map_err(|_| DepotError::Validation {
        field: "warehouse #",
        expected: "integer",
        provided: answer.to_string(),
    })
}

pub fn parse_quantity(answer: &str) -> Result<u32> {
    answer.parse().map_err(|_| DepotError::Validation {
        field: "quantity",
        expected: "integer",
        provided: answer.to_string(),
    })
}

/// Stock limits are forgiving: an empty or unparseable answer means
/// "no limit", and zero counts as no limit too.
pub fn parse_stock_limit(answer: &str) -> Option<u32> {
    answer.parse().ok().filter(|limit| *limit > 0)
}
