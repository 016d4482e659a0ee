//! Terminal input handling for the Dunnet REPL.
//!
//! Wraps rustyline configuration and command-word completion, with a plain
//! stdin fallback when no terminal is attached.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Context, Helper};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Words offered by tab completion, sorted.
const COMMAND_TERMS: &[&str] = &[
    "dig", "down", "drop", "east", "examine", "get", "go", "help", "inventory", "look", "north", "quit", "score",
    "south", "take", "turn off", "turn on", "up", "use", "west",
];

const HISTORY_SIZE: usize = 500;

type ReplEditor = rustyline::Editor<DunnetHelper, DefaultHistory>;

#[derive(Default)]
struct DunnetHelper;

impl Helper for DunnetHelper {}

impl Completer for DunnetHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        Ok((start, command_completions(&prefix)))
    }
}

impl Hinter for DunnetHelper {
    type Hint = String;
}

impl Highlighter for DunnetHelper {}

impl Validator for DunnetHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn command_completions(prefix: &str) -> Vec<Pair> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let lower = prefix.to_lowercase();
    COMMAND_TERMS
        .iter()
        .filter(|term| term.starts_with(&lower))
        .map(|term| Pair {
            display: (*term).to_string(),
            replacement: (*term).to_string(),
        })
        .collect()
}

/// Where REPL lines come from.
pub enum InputManager {
    /// Line editing, tab completion and a history file kept between games.
    Editor {
        editor: Box<ReplEditor>,
        history: Option<PathBuf>,
    },
    /// Bare line reads, for piped input or when the editor can't start.
    Plain,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal, reading plain lines");
            return InputManager::Plain;
        }
        let mut editor = match build_editor() {
            Ok(editor) => editor,
            Err(err) => {
                warn!("line editor unavailable ({err}), reading plain lines");
                return InputManager::Plain;
            },
        };
        let history = history_file_path();
        if let Some(path) = history.as_ref()
            && path.is_file()
            && let Err(err) = editor.load_history(path)
        {
            warn!("ignoring unreadable history at {}: {err}", path.display());
        }
        InputManager::Editor {
            editor: Box::new(editor),
            history,
        }
    }

    /// Read one line. Ctrl-C and Ctrl-D come back as events, not errors.
    ///
    /// # Errors
    /// - if the terminal or stdin can no longer be read
    pub fn read_line(&mut self, prompt: &str) -> Result<InputEvent> {
        match self {
            InputManager::Editor { editor, .. } => readline_event(editor.readline(prompt)),
            InputManager::Plain => {
                print!("{prompt}");
                io::stdout().flush()?;
                read_plain_line(&mut io::stdin().lock())
            },
        }
    }

    /// Write out the history file. Plain input keeps no history.
    pub fn save_history(&mut self) {
        let InputManager::Editor {
            editor,
            history: Some(path),
        } = self
        else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("can't create history directory {}: {err}", dir.display());
            return;
        }
        match editor.save_history(path) {
            Ok(()) => info!("saved command history to {}", path.display()),
            Err(err) => warn!("can't save history to {}: {err}", path.display()),
        }
    }
}

fn editor_config() -> rustyline::Result<Config> {
    Ok(Config::builder()
        .max_history_size(HISTORY_SIZE)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .auto_add_history(true)
        .build())
}

fn build_editor() -> rustyline::Result<ReplEditor> {
    let mut editor = ReplEditor::with_config(editor_config()?)?;
    editor.set_helper(Some(DunnetHelper));
    Ok(editor)
}

fn readline_event(read: rustyline::Result<String>) -> Result<InputEvent> {
    match read {
        Ok(line) => Ok(InputEvent::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
        Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
        Err(err) => Err(err).context("while reading from the terminal"),
    }
}

/// Read a line without its terminator; end of input is `Eof`.
fn read_plain_line(reader: &mut impl BufRead) -> Result<InputEvent> {
    let mut line = String::new();
    if reader.read_line(&mut line).context("while reading stdin")? == 0 {
        return Ok(InputEvent::Eof);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(InputEvent::Line(line))
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("dunnet").join("history.txt"))
}
