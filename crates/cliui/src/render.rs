//! Token rendering
//!
//! Every message is rendered twice: once with escape codes for terminals,
//! once plain for pipes, logs and the message recorder. Both renderings
//! carry the same text in the same order.

use chrono::Local;

use crate::token::{RESET, Token};

/// Time stamp format prefixed to messages in timestamp mode
pub const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S] ";

/// The two renderings of one message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    /// With escape codes, for terminals
    pub with_color: String,
    /// Plain text, for pipes, files and recording
    pub without_color: String,
}

impl Rendered {
    /// Pick the rendering for a destination
    pub fn select(&self, color: bool) -> &str {
        if color {
            &self.with_color
        } else {
            &self.without_color
        }
    }
}

/// Renders token sequences, optionally prefixed by the current time
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    timestamp: bool,
}

impl Renderer {
    /// A renderer, prefixing every message with the time if `timestamp`
    pub fn new(timestamp: bool) -> Self {
        Self { timestamp }
    }

    /// Render `tokens`, joined by `sep` and terminated by `end`
    pub fn render(&self, tokens: &[Token], sep: &str, end: &str) -> Rendered {
        let prefix = self
            .timestamp
            .then(|| Local::now().format(TIMESTAMP_FORMAT).to_string());
        render_with_prefix(tokens, sep, end, prefix.as_deref())
    }
}

/// Expand symbols into their color/glyph sub-sequences
pub fn flatten(tokens: &[Token]) -> Vec<Token> {
    let mut flat = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Symbol(symbol) => flat.extend(symbol.expand()),
            other => flat.push(other.clone()),
        }
    }
    flat
}

/// Render `tokens` with an explicit prefix (used for time stamps)
///
/// Colors are written to the colored output only and never get a
/// separator. Every other token is followed by `sep`, except the last
/// token of the sequence.
pub fn render_with_prefix(tokens: &[Token], sep: &str, end: &str, prefix: Option<&str>) -> Rendered {
    let flat = flatten(tokens);
    let mut with_color = String::new();
    let mut without_color = String::new();

    if let Some(prefix) = prefix {
        with_color.push_str(prefix);
        without_color.push_str(prefix);
    }

    let last = flat.len().saturating_sub(1);
    for (i, token) in flat.iter().enumerate() {
        if let Token::Color(color) = token {
            with_color.push_str(&color.code());
            continue;
        }
        let text = token.to_string();
        with_color.push_str(&text);
        without_color.push_str(&text);
        if i != last {
            with_color.push_str(sep);
            without_color.push_str(sep);
        }
    }

    with_color.push_str(end);
    without_color.push_str(end);
    with_color.push_str(&RESET.code());

    Rendered {
        with_color,
        without_color,
    }
}
