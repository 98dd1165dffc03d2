//! Interactive prompts
//!
//! Prompts print through the message API and read through a
//! [`LineReader`]. Invalid answers are handled by asking again; read errors,
//! including an interrupted read, are returned to the caller right away.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use console::Term;

use crate::error::Result;
use crate::token::{BLUE, GREEN, RESET, Token};
use crate::ui::{MessageOptions, Ui};

/// Source of user input, one line at a time
pub trait LineReader: Send {
    /// Read a line, without its line terminator
    fn read_line(&mut self) -> io::Result<String>;

    /// Read a line without echoing it
    fn read_password(&mut self) -> io::Result<String>;
}

/// Reads lines from standard input
///
/// Passwords are read without echo when standard input and standard error
/// are terminals, and as plain lines otherwise.
pub struct TermInput<R = BufReader<io::Stdin>> {
    reader: R,
    interactive: bool,
    term: Term,
}

impl TermInput {
    /// Read from this process's standard input
    pub fn new() -> Self {
        let stdin = io::stdin();
        let term = Term::stderr();
        Self {
            interactive: stdin.is_terminal() && term.is_term(),
            reader: BufReader::new(stdin),
            term,
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead> TermInput<R> {
    /// Read from any buffered reader, never as an interactive terminal
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            interactive: false,
            term: Term::stderr(),
        }
    }
}

impl<R: BufRead + Send> LineReader for TermInput<R> {
    fn read_line(&mut self) -> io::Result<String> {
        read_stripped_line(&mut self.reader)
    }

    fn read_password(&mut self) -> io::Result<String> {
        if self.interactive {
            self.term.read_secure_line()
        } else {
            read_stripped_line(&mut self.reader)
        }
    }
}

/// One line without its `\n` or `\r\n`; end of input is an error
fn read_stripped_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Canned answers for tests; clones share answers and the read counter
///
/// Reading past the last answer fails with `UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: Arc<Mutex<VecDeque<io::Result<String>>>>,
    reads: Arc<AtomicUsize>,
}

impl ScriptedInput {
    /// Answers given in order, one per read
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input = Self::default();
        for answer in answers {
            input.push(answer);
        }
        input
    }

    /// Queue another answer
    pub fn push(&self, answer: impl Into<String>) {
        self.queue().push_back(Ok(answer.into()));
    }

    /// Queue an interrupted read (the user hitting ctrl-c)
    pub fn push_interrupt(&self) {
        self.queue().push_back(Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "interrupted",
        )));
    }

    /// How many reads happened so far
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    fn queue(&self) -> std::sync::MutexGuard<'_, VecDeque<io::Result<String>>> {
        self.answers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next(&self) -> io::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.queue().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more scripted answers",
            ))
        })
    }
}

impl LineReader for ScriptedInput {
    fn read_line(&mut self) -> io::Result<String> {
        self.next()
    }

    fn read_password(&mut self) -> io::Result<String> {
        self.next()
    }
}

/// Optional sign, then at least one digit; no size limit
fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn ask_tokens(question: &[Token]) -> Vec<Token> {
    let mut tokens = vec![GREEN.into(), "::".into(), RESET.into()];
    tokens.extend_from_slice(question);
    tokens.push(RESET.into());
    tokens
}

impl Ui {
    fn input_marker(&mut self) {
        self.info_with(
            &[GREEN.into(), "> ".into()],
            &MessageOptions::default().end(""),
        );
    }

    /// Read a line from the user, after a `>` marker
    pub fn read_input(&mut self) -> Result<String> {
        self.input_marker();
        Ok(self.input.read_line()?)
    }

    /// Read a password from the user, after a `>` marker
    pub fn read_password(&mut self) -> Result<String> {
        self.input_marker();
        Ok(self.input.read_password()?)
    }

    /// Ask the user to enter a string
    ///
    /// An empty answer returns `default`.
    pub fn ask_string(&mut self, question: &[Token], default: Option<&str>) -> Result<Option<String>> {
        let mut tokens = ask_tokens(question);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            tokens.push(format!("({default})").into());
        }
        self.info(&tokens);

        let answer = self.read_input()?;
        if answer.is_empty() {
            return Ok(default.map(str::to_string));
        }
        Ok(Some(answer))
    }

    /// Ask the user to enter a password; may be empty
    pub fn ask_password(&mut self, question: &[Token]) -> Result<String> {
        self.info(&ask_tokens(question));
        self.read_password()
    }

    /// Ask the user to choose from a list of choices
    ///
    /// `describe` is used to display the choices and to sort them. Keeps
    /// asking until the user enters a valid index or leaves the prompt
    /// empty, in which case `None` is returned.
    pub fn ask_choice<T, F>(&mut self, prompt: &[Token], mut choices: Vec<T>, describe: F) -> Result<Option<T>>
    where
        F: Fn(&T) -> String,
    {
        self.info(&ask_tokens(prompt));
        choices.sort_by_cached_key(&describe);
        for (i, choice) in choices.iter().enumerate() {
            self.info(&[
                "  ".into(),
                BLUE.into(),
                (i + 1).into(),
                RESET.into(),
                describe(choice).into(),
            ]);
        }

        loop {
            let answer = self.read_input()?;
            if answer.is_empty() {
                return Ok(None);
            }
            let answer = answer.trim();
            if !is_integer(answer) {
                self.info(&["Please enter a valid number".into()]);
                continue;
            }
            match answer.parse::<usize>() {
                Ok(i) if (1..=choices.len()).contains(&i) => {
                    return Ok(Some(choices.swap_remove(i - 1)));
                }
                _ => self.info(&[answer.into(), "is out of range".into()]),
            }
        }
    }

    /// Ask the user to answer by yes or no
    ///
    /// Accepts y/yes/n/no in any case; an empty answer returns `default`.
    pub fn ask_yes_no(&mut self, question: &[Token], default: bool) -> Result<bool> {
        loop {
            let mut tokens = ask_tokens(question);
            tokens.push(if default { "(Y/n)" } else { "(y/N)" }.into());
            self.info(&tokens);

            let answer = self.read_input()?;
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                "" => return Ok(default),
                _ => self.warning(&["Please answer by 'y' (yes) or 'n' (no) ".into()]),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Capabilities, Config};
    use crate::sink::MemoryOutput;
    use crate::token::BOLD;
    use crate::tokens;
    use std::io::Cursor;

    fn ui_with(answers: &[&str]) -> (Ui, ScriptedInput, MemoryOutput, MemoryOutput) {
        let input = ScriptedInput::new(answers.iter().copied());
        let (out, err) = (MemoryOutput::new(), MemoryOutput::new());
        let ui = Ui::new(Config::default())
            .with_capabilities(Capabilities::full())
            .with_outputs(out.clone(), err.clone())
            .with_input(input.clone());
        (ui, input, out, err)
    }

    #[test]
    fn test_read_input() {
        let (mut ui, _, out, _) = ui_with(&["foo"]);
        assert_eq!(ui.read_input().unwrap(), "foo");
        assert_eq!(out.contents(), "> ");
    }

    #[test]
    fn test_read_password() {
        let (mut ui, _, _, _) = ui_with(&["bar"]);
        assert_eq!(ui.read_password().unwrap(), "bar");
    }

    #[test]
    fn test_ask_string() {
        let (mut ui, _, out, _) = ui_with(&["sugar!", "", ""]);
        let q = tokens!["coffee with what?"];
        assert_eq!(ui.ask_string(&q, None).unwrap().as_deref(), Some("sugar!"));
        assert_eq!(ui.ask_string(&q, Some("milk")).unwrap().as_deref(), Some("milk"));
        assert_eq!(ui.ask_string(&q, None).unwrap(), None);
        assert!(out.contents().contains(":: coffee with what? (milk)\n"));
    }

    #[test]
    fn test_ask_password() {
        let (mut ui, _, _, _) = ui_with(&["chocolate!", ""]);
        assert_eq!(ui.ask_password(&tokens!["guilty pleasure?"]).unwrap(), "chocolate!");
        assert_eq!(ui.ask_password(&tokens!["or just press enter"]).unwrap(), "");
    }

    #[test]
    fn test_ask_colored_message() {
        let (mut ui, _, _, _) = ui_with(&["y"]);
        let answer = ui
            .ask_yes_no(&tokens!["Deploy to", BOLD, "prod", RESET, "?"], false)
            .unwrap();
        assert!(answer);
    }

    #[test]
    fn test_ask_yes_no() {
        let (mut ui, _, _, _) = ui_with(&["y", "yes", "Yes", "n", "no", "No"]);
        for expected in [true, true, true, false, false, false] {
            assert_eq!(ui.ask_yes_no(&tokens!["coffee?"], false).unwrap(), expected);
        }
    }

    #[test]
    fn test_ask_yes_no_default() {
        let (mut ui, _, out, _) = ui_with(&["", ""]);
        assert!(ui.ask_yes_no(&tokens!["coffee?"], true).unwrap());
        assert!(!ui.ask_yes_no(&tokens!["coffee?"], false).unwrap());
        let contents = out.contents();
        assert!(contents.contains(":: coffee? (Y/n)\n"));
        assert!(contents.contains(":: coffee? (y/N)\n"));
    }

    #[test]
    fn test_ask_yes_no_wrong_input() {
        let (mut ui, input, out, err) = ui_with(&["coffee!", "n"]);
        assert!(!ui.ask_yes_no(&tokens!["tea?"], false).unwrap());
        assert_eq!(input.reads(), 2);
        assert!(err.contents().contains("Please answer by 'y' (yes) or 'n' (no)"));
        assert_eq!(out.contents().matches(":: tea?").count(), 2);
    }

    #[test]
    fn test_ask_choice() {
        #[derive(Debug)]
        struct Fruit {
            name: &'static str,
            price: u32,
        }

        let fruits = vec![
            Fruit { name: "apple", price: 42 },
            Fruit { name: "orange", price: 12 },
            Fruit { name: "banana", price: 10 },
        ];
        let (mut ui, input, out, _) = ui_with(&["nan", "5", "2"]);
        let choice = ui
            .ask_choice(&tokens!["Select a fruit"], fruits, |f| f.name.to_string())
            .unwrap()
            .unwrap();

        assert_eq!(choice.name, "banana");
        assert_eq!(choice.price, 10);
        assert_eq!(input.reads(), 3);

        let contents = out.contents();
        assert!(contents.contains("1 apple\n"));
        assert!(contents.contains("2 banana\n"));
        assert!(contents.contains("3 orange\n"));
        assert!(contents.contains("Please enter a valid number\n"));
        assert!(contents.contains("5 is out of range\n"));
    }

    #[test]
    fn test_ask_choice_out_of_range_below() {
        let (mut ui, input, out, _) = ui_with(&["0", "-3", "1"]);
        let choice = ui
            .ask_choice(&tokens!["Pick"], vec!["b", "a"], |s| (*s).to_string())
            .unwrap();
        assert_eq!(choice, Some("a"));
        assert_eq!(input.reads(), 3);
        assert!(out.contents().contains("-3 is out of range"));
    }

    #[test]
    fn test_ask_choice_huge_number_is_out_of_range() {
        let (mut ui, input, out, _) = ui_with(&["99999999999999999999", "1.5", "2"]);
        let choice = ui
            .ask_choice(&tokens!["Pick"], vec!["a", "b"], |s| (*s).to_string())
            .unwrap();
        assert_eq!(choice, Some("b"));
        assert_eq!(input.reads(), 3);

        let contents = out.contents();
        assert!(contents.contains("99999999999999999999 is out of range\n"));
        assert_eq!(contents.matches("Please enter a valid number").count(), 1);
    }

    #[test]
    fn test_ask_choice_empty_input() {
        let (mut ui, input, _, _) = ui_with(&[""]);
        let res = ui
            .ask_choice(&tokens!["Select an animal"], vec!["cat", "dog", "cow"], |s| {
                (*s).to_string()
            })
            .unwrap();
        assert_eq!(res, None);
        assert_eq!(input.reads(), 1);
    }

    #[test]
    fn test_ask_choice_empty_list() {
        let (mut ui, _, _, _) = ui_with(&["1", ""]);
        let res = ui
            .ask_choice(&tokens!["Nothing"], Vec::<String>::new(), Clone::clone)
            .unwrap();
        assert_eq!(res, None);
    }

    #[test]
    fn test_ask_choice_interrupted() {
        let (mut ui, input, _, _) = ui_with(&["nan"]);
        input.push_interrupt();
        let err = ui
            .ask_choice(&tokens!["Select an animal"], vec!["cat", "dog"], |s| {
                (*s).to_string()
            })
            .unwrap_err();
        assert!(err.is_interrupted());
        assert_eq!(input.reads(), 2);
    }

    #[test]
    fn test_term_input_reads_lines() {
        let mut input = TermInput::from_reader(Cursor::new("yes\r\n2\n\nlast"));
        assert_eq!(input.read_line().unwrap(), "yes");
        assert_eq!(input.read_line().unwrap(), "2");
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "last");

        let err = input.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_term_input_password_from_pipe() {
        let mut input = TermInput::from_reader(Cursor::new("hunter2\n"));
        assert_eq!(input.read_password().unwrap(), "hunter2");
    }

    #[test]
    fn test_ask_choice_from_piped_input() {
        let out = MemoryOutput::new();
        let mut ui = Ui::new(Config::default())
            .with_capabilities(Capabilities::full())
            .with_outputs(out.clone(), MemoryOutput::new())
            .with_input(TermInput::from_reader(Cursor::new("2\n")));
        let choice = ui
            .ask_choice(&tokens!["Choose a fruit"], vec!["apple", "orange", "banana"], |f| {
                (*f).to_string()
            })
            .unwrap();
        assert_eq!(choice, Some("banana"));
    }

    #[test]
    fn test_ask_yes_no_at_end_of_input() {
        let mut ui = Ui::new(Config::default())
            .with_outputs(MemoryOutput::new(), MemoryOutput::new())
            .with_input(TermInput::from_reader(Cursor::new("")));
        let err = ui.ask_yes_no(&tokens!["coffee?"], true).unwrap_err();
        assert!(matches!(err, crate::Error::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_prompt_without_answers_fails() {
        let (mut ui, _, _, _) = ui_with(&[]);
        assert!(ui.ask_yes_no(&tokens!["coffee?"], false).is_err());
    }
}
