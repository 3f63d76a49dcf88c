use crate::config::OUTPUT_LIBRARY;
use compact_str::CompactString;
use std::collections::HashSet;

/// Built-in libraries a program can pull in with `using`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Library {
    Output,
}

impl Library {
    pub const fn name(&self) -> &'static str {
        match self {
            Library::Output => OUTPUT_LIBRARY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMethod {
    Print,
    Println,
}

impl OutputMethod {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "print" => Some(OutputMethod::Print),
            "println" => Some(OutputMethod::Println),
            _ => None,
        }
    }
}

/// Names seen in `using` directives so far. Unknown names are kept too.
#[derive(Debug, Default)]
pub struct Imports {
    names: HashSet<CompactString>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(&mut self, name: &str) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, library: Library) -> bool {
        self.names.contains(library.name())
    }
}
