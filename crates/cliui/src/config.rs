//! Output configuration and platform capabilities

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// When to color output (or update the terminal title)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Decide per destination (color only on a terminal)
    #[default]
    Auto,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        };
        f.write_str(name)
    }
}

/// Behavior of the message functions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Print `debug` messages
    pub verbose: bool,
    /// Hide every message except warnings, errors and fatal errors
    pub quiet: bool,
    /// Whether to color output
    pub color: Mode,
    /// Whether to update the terminal title when asked to
    pub title: Mode,
    /// Prefix every message with a time stamp
    pub timestamp: bool,
}

impl Config {
    /// Default configuration, with verbosity seeded from `VERBOSE`
    pub fn from_env() -> Self {
        let verbose = std::env::var("VERBOSE").ok();
        Self {
            verbose: verbose_from(verbose.as_deref()),
            ..Self::default()
        }
    }
}

fn verbose_from(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("" | "0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}

/// What the current platform can display
///
/// Resolved once and injected, so symbols and color decisions never
/// consult the OS on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Use Unicode glyphs for symbols (ASCII fallbacks otherwise)
    pub unicode: bool,
    /// In auto mode, color terminals (the Windows console gets no color)
    pub auto_color: bool,
    /// Terminal title escapes are understood
    pub title: bool,
}

impl Capabilities {
    /// Detect capabilities of the running platform
    pub fn detect() -> Self {
        if cfg!(windows) {
            let term = std::env::var("TERM").ok();
            Self {
                unicode: false,
                auto_color: false,
                title: !matches!(term.as_deref(), None | Some("cygwin")),
            }
        } else {
            Self::full()
        }
    }

    /// Everything supported
    pub const fn full() -> Self {
        Self {
            unicode: true,
            auto_color: true,
            title: true,
        }
    }

    /// Plain console: ASCII symbols, no auto color, no title
    pub const fn limited() -> Self {
        Self {
            unicode: false,
            auto_color: false,
            title: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
