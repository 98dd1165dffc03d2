//! Text formatting helpers

use std::error::Error;

use similar::TextDiff;

use crate::token::{RED, RESET, Token};

/// Indent every line by `num` spaces
pub fn indent_lines<S: AsRef<str>>(lines: &[S], num: usize) -> Vec<String> {
    let pad = " ".repeat(num);
    lines.iter().map(|l| format!("{pad}{}", l.as_ref())).collect()
}

/// Indent a piece of text by `num` spaces
pub fn indent(text: &str, num: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    indent_lines(&lines, num).join("\n")
}

/// A blank tab, two spaces per level
pub fn tabs(num: usize) -> String {
    "  ".repeat(num)
}

/// Append the choice closest to `input` to `message`
///
/// ```
/// let msg = cliui::did_you_mean("No such command", "stauts", &["status", "sync"]);
/// assert_eq!(msg, "No such command\nDid you mean: status?");
/// ```
pub fn did_you_mean<S: AsRef<str>>(message: &str, input: &str, choices: &[S]) -> String {
    let closest = choices
        .iter()
        .map(AsRef::as_ref)
        .map(|choice| (TextDiff::from_chars(input, choice).ratio(), choice))
        .max_by(|a, b| a.0.total_cmp(&b.0));

    match closest {
        Some((_, choice)) => format!("{message}\nDid you mean: {choice}?"),
        None => message.to_string(),
    }
}

/// Tokens describing `err` and its sources, for [`Ui::error`]
///
/// [`Ui::error`]: crate::Ui::error
pub fn message_for_error(err: &dyn Error, message: &str) -> Vec<Token> {
    let mut tokens = vec![
        RED.into(),
        format!("{message}\n").into(),
        err.to_string().into(),
        "\n".into(),
        RESET.into(),
    ];

    let mut causes = String::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push_str(&format!("  caused by: {cause}\n"));
        source = cause.source();
    }
    if !causes.is_empty() {
        tokens.push(causes.into());
    }
    tokens
}
