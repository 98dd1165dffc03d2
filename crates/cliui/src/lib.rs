//! # cliui
//!
//! Colored terminal messages, prompts and tables for CLI applications.
//!
//! Messages are lists of [`Token`]s: text, colors and symbols. Each message
//! is rendered twice, with and without escape codes, and the [`Ui`] picks
//! the right one for each destination:
//!
//! - **Messages**: info, warning, error, debug and fatal, plus numbered,
//!   sectioned and counted variants
//! - **Prompts**: strings, passwords, yes/no questions, choices
//! - **Tables**: aligned rows or columns of token cells
//! - **Recording**: keep plain copies of messages to assert on in tests
//!
//! ## Quick Start
//!
//! ```no_run
//! use cliui::{Config, Ui, tokens};
//! use cliui::token::{BOLD, RED, RESET};
//!
//! let mut ui = Ui::new(Config::from_env());
//!
//! ui.info_1(&tokens!["Deploying", BOLD, "v1.2.0", RESET]);
//! ui.info(&tokens!["OK", ui.check()]);
//! ui.error(&tokens![RED, "disk full"]);
//!
//! if ui.ask_yes_no(&tokens!["Push to prod?"], false)? {
//!     ui.info(&tokens!["pushing"]);
//! }
//! # Ok::<(), cliui::Error>(())
//! ```
//!
//! ## Colors
//!
//! With [`Mode::Auto`] (the default) colors are only written to terminals.
//! [`Mode::Always`] and [`Mode::Never`] force the decision, whatever the
//! destination is.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod format;
pub mod prompt;
pub mod record;
pub mod render;
pub mod sink;
pub mod table;
pub mod timer;
pub mod token;
pub mod ui;

pub use config::{Capabilities, Config, Mode};
pub use error::{Error, Result};
pub use format::{did_you_mean, indent, indent_lines, message_for_error, tabs};
pub use prompt::{LineReader, ScriptedInput, TermInput};
pub use record::MessageRecorder;
pub use render::{Rendered, Renderer};
pub use sink::{MemoryOutput, Output, TermOutput};
pub use table::{Cell, Table};
pub use timer::Timer;
pub use token::{Color, Symbol, Token};
pub use ui::{MessageOptions, Stream, Ui};
