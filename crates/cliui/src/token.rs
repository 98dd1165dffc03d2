//! Tokens: the units messages are built from
//!
//! A message is an ordered list of [`Token`]s. Text tokens are printed,
//! color tokens only switch the terminal style, and symbols expand to a
//! colored glyph with an ASCII fallback.

use std::fmt;

use crate::config::Capabilities;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Code {
    Attr(u8),
    Fg(colored::Color),
}

/// An ANSI escape sequence: a text attribute or a foreground color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    code: Code,
}

impl Color {
    const fn attr(n: u8) -> Self {
        Self {
            code: Code::Attr(n),
        }
    }

    const fn fg(color: colored::Color) -> Self {
        Self {
            code: Code::Fg(color),
        }
    }

    /// The escape sequence for this color
    pub fn code(&self) -> String {
        match self.code {
            Code::Attr(n) => format!("\x1b[{n}m"),
            Code::Fg(color) => format!("\x1b[{}m", color.to_fg_str()),
        }
    }
}

/// Back to default style
pub const RESET: Color = Color::attr(0);
/// Bold
pub const BOLD: Color = Color::attr(1);
/// Faint (dim)
pub const FAINT: Color = Color::attr(2);
/// Standout (SGR attribute 3)
pub const STANDOUT: Color = Color::attr(3);
/// Underlined
pub const UNDERLINE: Color = Color::attr(4);
/// Blinking
pub const BLINK: Color = Color::attr(5);
/// SGR attribute 6
pub const OVERLINE: Color = Color::attr(6);

/// Black foreground
pub const BLACK: Color = Color::fg(colored::Color::Black);
/// Red foreground
pub const RED: Color = Color::fg(colored::Color::Red);
/// Green foreground
pub const GREEN: Color = Color::fg(colored::Color::Green);
/// Yellow foreground
pub const YELLOW: Color = Color::fg(colored::Color::Yellow);
/// Blue foreground
pub const BLUE: Color = Color::fg(colored::Color::Blue);
/// Magenta foreground
pub const MAGENTA: Color = Color::fg(colored::Color::Magenta);
/// Cyan foreground
pub const CYAN: Color = Color::fg(colored::Color::Cyan);
/// White foreground
pub const WHITE: Color = Color::fg(colored::Color::White);

// Aliases kept for older callers
/// Alias for [`YELLOW`]
pub const BROWN: Color = YELLOW;
/// Alias for [`WHITE`]
pub const LIGHTGRAY: Color = WHITE;
/// Alias for [`RED`]
pub const DARKRED: Color = RED;
/// Alias for [`GREEN`]
pub const DARKGREEN: Color = GREEN;
/// Alias for [`BLUE`]
pub const DARKBLUE: Color = BLUE;
/// Alias for [`MAGENTA`]
pub const PURPLE: Color = MAGENTA;
/// Alias for [`MAGENTA`]
pub const FUCHSIA: Color = MAGENTA;
/// Alias for [`CYAN`]
pub const TURQUOISE: Color = CYAN;
/// Alias for [`BLACK`]
pub const DARKGRAY: Color = BLACK;
/// Alias for [`CYAN`]
pub const DARKTEAL: Color = CYAN;
/// Alias for [`YELLOW`]
pub const DARKYELLOW: Color = YELLOW;

/// Every named color, aliases included, sorted by name
pub const NAMED: &[(&str, Color)] = &[
    ("black", BLACK),
    ("blink", BLINK),
    ("blue", BLUE),
    ("bold", BOLD),
    ("brown", BROWN),
    ("cyan", CYAN),
    ("darkblue", DARKBLUE),
    ("darkgray", DARKGRAY),
    ("darkgreen", DARKGREEN),
    ("darkred", DARKRED),
    ("darkteal", DARKTEAL),
    ("darkyellow", DARKYELLOW),
    ("faint", FAINT),
    ("fuchsia", FUCHSIA),
    ("green", GREEN),
    ("lightgray", LIGHTGRAY),
    ("magenta", MAGENTA),
    ("overline", OVERLINE),
    ("purple", PURPLE),
    ("red", RED),
    ("reset", RESET),
    ("standout", STANDOUT),
    ("turquoise", TURQUOISE),
    ("underline", UNDERLINE),
    ("white", WHITE),
    ("yellow", YELLOW),
];

/// Look up a named color
pub fn by_name(name: &str) -> Option<Color> {
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}

/// A glyph with an ASCII fallback, optionally wrapped in a color
///
/// The glyph is picked when the symbol is built, from the given
/// [`Capabilities`].
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    color: Option<Color>,
    glyph: String,
}

impl Symbol {
    /// A colored symbol; renders as `reset, color, glyph, reset`
    pub fn new(color: Color, unicode: &str, ascii: &str, caps: Capabilities) -> Self {
        Self {
            color: Some(color),
            glyph: pick(unicode, ascii, caps),
        }
    }

    /// A symbol without color; renders as the glyph alone
    pub fn bare(unicode: &str, ascii: &str, caps: Capabilities) -> Self {
        Self {
            color: None,
            glyph: pick(unicode, ascii, caps),
        }
    }

    /// `…`, or `...` without Unicode
    pub fn ellipsis(caps: Capabilities) -> Self {
        Self::new(RESET, "…", "...", caps)
    }

    /// Green `✓`, or `ok` without Unicode
    pub fn check(caps: Capabilities) -> Self {
        Self::new(GREEN, "✓", "ok", caps)
    }

    /// Red `❌`, or `ko` without Unicode
    pub fn cross(caps: Capabilities) -> Self {
        Self::new(RED, "❌", "ko", caps)
    }

    /// The glyph chosen at construction
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// The flat token sequence this symbol stands for
    pub fn expand(&self) -> Vec<Token> {
        match self.color {
            Some(color) => vec![
                Token::Color(RESET),
                Token::Color(color),
                Token::Text(self.glyph.clone()),
                Token::Color(RESET),
            ],
            None => vec![Token::Text(self.glyph.clone())],
        }
    }
}

fn pick(unicode: &str, ascii: &str, caps: Capabilities) -> String {
    let glyph = if caps.unicode { unicode } else { ascii };
    glyph.to_string()
}

/// One renderable unit of a message
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Literal text
    Text(String),
    /// Style switch; zero-width, dropped from plain output
    Color(Color),
    /// Colored glyph
    Symbol(Symbol),
}

impl Token {
    /// Whether this is a zero-width style switch
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Color(_))
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Token {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self::Text(c.to_string())
    }
}

impl From<Color> for Token {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<&Symbol> for Token {
    fn from(symbol: &Symbol) -> Self {
        Self::Symbol(symbol.clone())
    }
}

macro_rules! text_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Token {
                fn from(value: $t) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

text_from!(i32, i64, u32, u64, usize, f32, f64, bool);

impl fmt::Display for Token {
    /// Plain text of the token (colors print nothing)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Color(_) => Ok(()),
            Self::Symbol(symbol) => f.write_str(symbol.glyph()),
        }
    }
}

/// Build a `Vec<Token>` from anything convertible into a token
///
/// ```
/// use cliui::{tokens, token::RED};
///
/// let message = tokens![RED, "failed after", 3, "attempts"];
/// assert_eq!(message.len(), 4);
/// ```
#[macro_export]
macro_rules! tokens {
    () => {
        ::std::vec::Vec::<$crate::Token>::new()
    };
    ($($token:expr),+ $(,)?) => {
        vec![$($crate::Token::from($token)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(RESET.code(), "\x1b[0m");
        assert_eq!(BOLD.code(), "\x1b[1m");
        assert_eq!(FAINT.code(), "\x1b[2m");
        assert_eq!(RED.code(), "\x1b[31m");
        assert_eq!(GREEN.code(), "\x1b[32m");
        assert_eq!(WHITE.code(), "\x1b[37m");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(BROWN, YELLOW);
        assert_eq!(LIGHTGRAY, WHITE);
        assert_eq!(DARKGRAY, BLACK);
        assert_eq!(by_name("Purple"), Some(MAGENTA));
        assert_eq!(by_name("mauve"), None);
    }

    #[test]
    fn test_named_is_sorted() {
        let names: Vec<&str> = NAMED.iter().map(|(n, _)| *n).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_symbol_glyph_choice() {
        assert_eq!(Symbol::check(Capabilities::full()).glyph(), "✓");
        assert_eq!(Symbol::check(Capabilities::limited()).glyph(), "ok");
        assert_eq!(Symbol::ellipsis(Capabilities::limited()).glyph(), "...");
        assert_eq!(Symbol::bare("👍", "+1", Capabilities::limited()).glyph(), "+1");
    }

    #[test]
    fn test_symbol_expand() {
        let check = Symbol::check(Capabilities::full());
        assert_eq!(
            check.expand(),
            vec![
                Token::Color(RESET),
                Token::Color(GREEN),
                Token::Text("✓".into()),
                Token::Color(RESET),
            ]
        );

        let up = Symbol::bare("👍", "+1", Capabilities::full());
        assert_eq!(up.expand(), vec![Token::Text("👍".into())]);
    }

    #[test]
    fn test_tokens_macro() {
        let t = tokens![RED, "x", 42, 1.5];
        assert_eq!(
            t,
            vec![
                Token::Color(RED),
                Token::Text("x".into()),
                Token::Text("42".into()),
                Token::Text("1.5".into()),
            ]
        );
        assert!(tokens![].is_empty());
    }
}
