//! Host input mapped onto navigation commands.

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A discrete navigation request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Next,
    Previous,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "forward" => Ok(Self::Next),
            "previous" | "prev" | "back" => Ok(Self::Previous),
            _ => Err(Error::UnknownCommand(s.to_string())),
        }
    }
}

/// Case-insensitive key name → command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<String, Command>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_bindings(
            ["Right", "Down", "Space", "PageDown", "Enter", "n"],
            ["Left", "Up", "PageUp", "Backspace", "p"],
        )
    }
}

impl KeyMap {
    /// Table with no bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Build a table from key lists for each command. A key listed under both
    /// commands ends up bound to `previous`.
    pub fn from_bindings<N, P>(next: N, previous: P) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut map = Self::empty();
        for key in next {
            map.bind(key.as_ref(), Command::Next);
        }
        for key in previous {
            map.bind(key.as_ref(), Command::Previous);
        }
        map
    }

    /// Build a table from `(key, command name)` pairs, e.g. read from config.
    pub fn parse<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut map = Self::empty();
        for (key, command) in pairs {
            map.bind(key, command.parse()?);
        }
        Ok(map)
    }

    pub fn bind(&mut self, key: &str, command: Command) {
        self.bindings.insert(normalize(key), command);
    }

    pub fn command_for(&self, key: &str) -> Option<Command> {
        self.bindings.get(&normalize(key)).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
