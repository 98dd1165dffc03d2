//! Message API
//!
//! A [`Ui`] owns the configuration, the output destinations, the input
//! reader and the message recorder. Create one at startup, change its
//! behavior with [`Ui::setup`], and pass it to whatever prints.
//!
//! `Ui` does no locking. Code printing from several threads wraps it in a
//! mutex so messages do not interleave.

use console::measure_text_width;

use crate::config::{Capabilities, Config, Mode};
use crate::prompt::{LineReader, TermInput};
use crate::record::MessageRecorder;
use crate::render::{Rendered, Renderer, render_with_prefix};
use crate::sink::{Output, TermOutput, color_enabled, write_and_flush};
use crate::token::{BLUE, BOLD, GREEN, RED, RESET, Symbol, Token, YELLOW};

/// Which standard stream a message goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    /// Standard output
    #[default]
    Stdout,
    /// Standard error
    Stderr,
}

/// How a single message is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageOptions {
    /// Inserted between text tokens
    pub sep: String,
    /// Appended to the message
    pub end: String,
    /// Destination stream
    pub stream: Stream,
    /// Also set the terminal title to the message text
    pub update_title: bool,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
            stream: Stream::Stdout,
            update_title: false,
        }
    }
}

impl MessageOptions {
    /// Set the separator
    pub fn sep(mut self, sep: &str) -> Self {
        self.sep = sep.to_string();
        self
    }

    /// Set the terminator
    pub fn end(mut self, end: &str) -> Self {
        self.end = end.to_string();
        self
    }

    /// Set the destination stream
    pub fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    /// Also update the terminal title
    pub fn update_title(mut self, update_title: bool) -> Self {
        self.update_title = update_title;
        self
    }
}

/// Terminal user interface: messages, prompts and tables
pub struct Ui {
    config: Config,
    caps: Capabilities,
    stdout: Box<dyn Output>,
    stderr: Box<dyn Output>,
    pub(crate) input: Box<dyn LineReader>,
    recorder: MessageRecorder,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(Config::from_env())
    }
}

impl Ui {
    /// A UI writing to the real stdout/stderr and reading from the terminal
    pub fn new(config: Config) -> Self {
        Self {
            config,
            caps: Capabilities::detect(),
            stdout: Box::new(TermOutput::stdout()),
            stderr: Box::new(TermOutput::stderr()),
            input: Box::new(TermInput::new()),
            recorder: MessageRecorder::new(),
        }
    }

    /// Replace the output destinations
    pub fn with_outputs(
        mut self,
        stdout: impl Output + 'static,
        stderr: impl Output + 'static,
    ) -> Self {
        self.stdout = Box::new(stdout);
        self.stderr = Box::new(stderr);
        self
    }

    /// Replace the line reader used by prompts
    pub fn with_input(mut self, input: impl LineReader + 'static) -> Self {
        self.input = Box::new(input);
        self
    }

    /// Replace the detected platform capabilities
    pub fn with_capabilities(mut self, caps: Capabilities) -> Self {
        self.caps = caps;
        self
    }

    /// Configure behavior of the message functions
    pub fn setup(&mut self, config: Config) {
        log::debug!(
            "ui setup: verbose={} quiet={} color={} title={} timestamp={}",
            config.verbose,
            config.quiet,
            config.color,
            config.title,
            config.timestamp
        );
        self.config = config;
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Platform capabilities in use
    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// The message recorder
    pub fn recorder(&self) -> &MessageRecorder {
        &self.recorder
    }

    /// The message recorder, to start or stop recording
    pub fn recorder_mut(&mut self) -> &mut MessageRecorder {
        &mut self.recorder
    }

    // ========================================================================
    // Symbols
    // ========================================================================

    /// Check mark for this platform
    pub fn check(&self) -> Symbol {
        Symbol::check(self.caps)
    }

    /// Cross mark for this platform
    pub fn cross(&self) -> Symbol {
        Symbol::cross(self.caps)
    }

    /// Ellipsis for this platform
    pub fn ellipsis(&self) -> Symbol {
        Symbol::ellipsis(self.caps)
    }

    /// A bare glyph, ASCII on limited platforms
    pub fn symbol(&self, unicode: &str, ascii: &str) -> Symbol {
        Symbol::bare(unicode, ascii, self.caps)
    }

    // ========================================================================
    // Rendering and output
    // ========================================================================

    /// Render tokens, time stamped if configured
    pub fn render(&self, tokens: &[Token], sep: &str, end: &str) -> Rendered {
        Renderer::new(self.config.timestamp).render(tokens, sep, end)
    }

    /// Whether `stream` gets escape codes
    pub fn color_enabled(&self, stream: Stream) -> bool {
        color_enabled(self.config.color, self.caps, self.output_ref(stream))
    }

    pub(crate) fn output(&mut self, stream: Stream) -> &mut dyn Output {
        match stream {
            Stream::Stdout => self.stdout.as_mut(),
            Stream::Stderr => self.stderr.as_mut(),
        }
    }

    fn output_ref(&self, stream: Stream) -> &dyn Output {
        match stream {
            Stream::Stdout => self.stdout.as_ref(),
            Stream::Stderr => self.stderr.as_ref(),
        }
    }

    fn title_enabled(&self, color: bool) -> bool {
        if !self.caps.title {
            return false;
        }
        match self.config.title {
            Mode::Never => false,
            Mode::Auto => color,
            Mode::Always => true,
        }
    }

    /// Write raw text; failures are logged, never returned
    pub(crate) fn write(&mut self, stream: Stream, text: &str) {
        if let Err(e) = write_and_flush(self.output(stream), text) {
            log::warn!("failed to write to {stream:?}: {e}");
        }
    }

    /// Render and write a message, ignoring quiet and verbose settings
    pub fn message(&mut self, tokens: &[Token], opts: &MessageOptions) {
        let rendered = self.render(tokens, &opts.sep, &opts.end);
        self.recorder.record(&rendered.without_color);

        let color = self.color_enabled(opts.stream);
        if opts.update_title && self.title_enabled(color) {
            let title = format!("\x1b]0;{}\x07", rendered.without_color.trim_end());
            self.write(opts.stream, &title);
        }
        self.write(opts.stream, rendered.select(color));
    }

    // ========================================================================
    // Messages
    // ========================================================================

    /// Print an informative message
    pub fn info(&mut self, tokens: &[Token]) {
        self.info_with(tokens, &MessageOptions::default());
    }

    /// Like [`Ui::info`], with explicit options
    pub fn info_with(&mut self, tokens: &[Token], opts: &MessageOptions) {
        if self.config.quiet {
            return;
        }
        self.message(tokens, opts);
    }

    /// Print an important informative message
    pub fn info_1(&mut self, tokens: &[Token]) {
        self.info(&prefixed(&[BOLD.into(), BLUE.into(), "::".into(), RESET.into()], tokens));
    }

    /// Print a not so important informative message
    pub fn info_2(&mut self, tokens: &[Token]) {
        self.info(&prefixed(&[BOLD.into(), BLUE.into(), "=>".into(), RESET.into()], tokens));
    }

    /// Print an even less important informative message
    pub fn info_3(&mut self, tokens: &[Token]) {
        self.info(&prefixed(&[BOLD.into(), BLUE.into(), "*".into(), RESET.into()], tokens));
    }

    /// Print a section name underlined with dashes
    pub fn info_section(&mut self, tokens: &[Token]) {
        let plain = render_with_prefix(tokens, " ", "", None).without_color;
        let width = measure_text_width(&plain);
        self.info(tokens);
        self.info_with(
            &["-".repeat(width).into()],
            &MessageOptions::default().end("\n\n"),
        );
    }

    /// Print a counter before the rest of the message
    ///
    /// `index` starts at 0, like `enumerate()`.
    pub fn info_count(&mut self, index: usize, total: usize, rest: &[Token]) {
        let digits = total.to_string().len();
        let counter = format!("({:>digits$}/{total})", index + 1);
        let head = [
            GREEN.into(),
            "*".into(),
            RESET.into(),
            counter.into(),
            RESET.into(),
        ];
        self.info(&prefixed(&head, rest));
    }

    /// Show progress in percent, on a terminal only
    pub fn info_progress(&mut self, prefix: &str, value: f64, max_value: f64) {
        if max_value <= 0.0 || !self.output_ref(Stream::Stdout).is_terminal() {
            return;
        }
        let percent = value / max_value * 100.0;
        self.write(Stream::Stdout, &format!("{prefix}: {percent:.0}%\r"));
    }

    /// Print a dot without a newline, unless it is the last one
    pub fn dot(&mut self, last: bool) {
        let end = if last { "\n" } else { "" };
        self.info_with(&[".".into()], &MessageOptions::default().end(end));
    }

    /// Print a debug message, only in verbose mode and never while recording
    pub fn debug(&mut self, tokens: &[Token]) {
        self.debug_with(tokens, &MessageOptions::default());
    }

    /// Like [`Ui::debug`], with explicit options
    pub fn debug_with(&mut self, tokens: &[Token], opts: &MessageOptions) {
        if !self.config.verbose || self.recorder.is_active() {
            return;
        }
        self.message(tokens, opts);
    }

    /// Print a warning message on stderr
    pub fn warning(&mut self, tokens: &[Token]) {
        self.warning_with(tokens, &MessageOptions::default());
    }

    /// Like [`Ui::warning`], with explicit options
    pub fn warning_with(&mut self, tokens: &[Token], opts: &MessageOptions) {
        let tokens = prefixed(&[BOLD.into(), YELLOW.into(), "Warning:".into()], tokens);
        self.message(&tokens, &opts.clone().stream(Stream::Stderr));
    }

    /// Print an error message on stderr
    pub fn error(&mut self, tokens: &[Token]) {
        self.error_with(tokens, &MessageOptions::default());
    }

    /// Like [`Ui::error`], with explicit options
    pub fn error_with(&mut self, tokens: &[Token], opts: &MessageOptions) {
        let tokens = prefixed(&[BOLD.into(), RED.into(), "Error:".into()], tokens);
        self.message(&tokens, &opts.clone().stream(Stream::Stderr));
    }

    /// Print an error message and exit with status 1
    pub fn fatal(&mut self, tokens: &[Token]) -> ! {
        self.fatal_with_code(tokens, 1)
    }

    /// Print an error message and exit with `code`
    pub fn fatal_with_code(&mut self, tokens: &[Token], code: i32) -> ! {
        self.error(tokens);
        std::process::exit(code)
    }
}

fn prefixed(head: &[Token], rest: &[Token]) -> Vec<Token> {
    head.iter().chain(rest).cloned().collect()
}
