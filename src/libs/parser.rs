//! Field derivation for free-form task arguments.
//!
//! `add` and `update` take the rest of the command line as plain tokens, so
//! `taskberry add Buy milk --category Errand --important` works without quotes.
//! The tokens are split here into a title, an optional category and the
//! importance flag:
//!
//! - **Title**: every token up to (not including) the first one starting with `--`,
//!   joined with single spaces and trimmed.
//! - **Category**: the token right after `--category` / `--cat`, if there is one.
//! - **Importance**: set when any token is `--important`.
//!
//! Flag spellings are matched case-insensitively.

use thiserror::Error;

/// Every flag starts with this prefix; title extraction stops at the first one.
pub const FLAG_PREFIX: &str = "--";

/// Accepted spellings of the category flag.
pub const CATEGORY_FLAGS: [&str; 2] = ["--category", "--cat"];

pub const IMPORTANT_FLAG: &str = "--important";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("task title is required")]
    MissingTitle,
    #[error("task id is required")]
    MissingId,
    #[error("invalid task id: {0}")]
    InvalidId(String),
}

/// Structured result of parsing `add` / `update` tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFields {
    pub title: String,
    pub category: String,
    pub is_important: bool,
}

/// Derives title, category and importance from the tokens following the
/// command (or the id, for `update`).
///
/// # Errors
///
/// Returns [`ParseError::MissingTitle`] when the title is empty after trimming.
pub fn parse_fields(tokens: &[String]) -> Result<TaskFields, ParseError> {
    let title = extract_title(tokens);
    if title.is_empty() {
        return Err(ParseError::MissingTitle);
    }

    Ok(TaskFields {
        title,
        category: extract_category(tokens),
        is_important: extract_important(tokens),
    })
}

/// Splits `update` tokens into the leading id and the task fields.
pub fn parse_update(tokens: &[String]) -> Result<(i64, TaskFields), ParseError> {
    let id = parse_id(tokens.first().map(String::as_str))?;
    let fields = parse_fields(&tokens[1..])?;

    Ok((id, fields))
}

/// Validates an id token. Only positive integers are accepted; `0` is
/// rejected the same way as a non-numeric token.
pub fn parse_id(token: Option<&str>) -> Result<i64, ParseError> {
    let token = token.ok_or(ParseError::MissingId)?;

    match token.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ParseError::InvalidId(token.to_string())),
    }
}

pub fn extract_title(tokens: &[String]) -> String {
    tokens
        .iter()
        .take_while(|token| !token.starts_with(FLAG_PREFIX))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// The token right after the first category flag, taken as-is. A trailing
/// flag with nothing after it yields no category.
pub fn extract_category(tokens: &[String]) -> String {
    tokens
        .iter()
        .position(|token| is_category_flag(token))
        .and_then(|pos| tokens.get(pos + 1))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

pub fn extract_important(tokens: &[String]) -> bool {
    tokens.iter().any(|token| token.eq_ignore_ascii_case(IMPORTANT_FLAG))
}

fn is_category_flag(token: &str) -> bool {
    CATEGORY_FLAGS.iter().any(|flag| token.eq_ignore_ascii_case(flag))
}
