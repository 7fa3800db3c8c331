// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Seed patterns: the built-in library and the plaintext (`.cells`) format.

use std::path::{Path, PathBuf};

/// Built-in patterns in plaintext notation.
const BUILTINS: &[(&str, &str)] = &[
    ("glider", ".O.\n..O\nOOO"),
    ("blinker", "OOO"),
    ("block", "OO\nOO"),
    ("beacon", "OO..\nOO..\n..OO\n..OO"),
    ("toad", ".OOO\nOOO."),
    ("r-pentomino", ".OO\nOO.\n.O."),
    ("lwss", ".O..O\nO....\nO...O\nOOOO."),
    (
        "gosper-glider-gun",
        "........................O...........\n\
         ......................O.O...........\n\
         ............OO......OO............OO\n\
         ...........O...O....OO............OO\n\
         OO........O.....O...OO..............\n\
         OO........O...O.OO....O.O...........\n\
         ..........O.....O.......O...........\n\
         ...........O...O....................\n\
         ............OO......................",
    ),
];

/// An error produced while building or loading a pattern.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern has no live cells.
    #[error("pattern '{0}' has no live cells")]
    Empty(String),
    /// A plaintext line contains something other than `.`, `O` or `*`.
    #[error("unexpected character '{found}' at line {line}, column {column}")]
    InvalidCharacter {
        /// 1-based line number in the source text.
        line: usize,
        /// 1-based column number in the line.
        column: usize,
        /// The offending character.
        found: char,
    },
    /// No built-in pattern carries this name.
    #[error("unknown pattern '{0}' (available: {list})", list = builtin_names().join(", "))]
    UnknownBuiltin(String),
    /// The pattern file could not be read.
    #[error("failed to read pattern file '{}'", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A set of live cells relative to a top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    cells: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl Pattern {
    /// Builds a pattern from explicit `(x, y)` live cells.
    pub fn from_cells(
        name: impl Into<String>,
        cells: Vec<(usize, usize)>,
    ) -> Result<Self, PatternError> {
        let name = name.into();
        if cells.is_empty() {
            return Err(PatternError::Empty(name));
        }
        let width = cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
        let height = cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
        Ok(Self {
            name,
            cells,
            width,
            height,
        })
    }

    /// Parses the plaintext format.
    ///
    /// `O` or `*` marks a live cell, `.` a dead one. Lines starting with `!`
    /// are comments and do not count as rows; an empty line is a dead row.
    pub fn from_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        let mut y = 0;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.starts_with('!') {
                continue;
            }
            for (x, c) in line.chars().enumerate() {
                match c {
                    'O' | '*' => cells.push((x, y)),
                    '.' => {}
                    found => {
                        return Err(PatternError::InvalidCharacter {
                            line: line_no + 1,
                            column: x + 1,
                            found,
                        })
                    }
                }
            }
            y += 1;
        }

        Self::from_cells(name, cells)
    }

    /// Looks up a built-in pattern by name (case-insensitive).
    pub fn builtin(name: &str) -> Result<Self, PatternError> {
        let wanted = name.trim().to_ascii_lowercase();
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == wanted)
            .ok_or_else(|| PatternError::UnknownBuiltin(name.to_string()))
            .and_then(|(builtin, text)| Self::from_plaintext(*builtin, text))
    }

    /// Reads a plaintext pattern file. The pattern is named after the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PatternError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "pattern".to_string());

        let pattern = Self::from_plaintext(name, &text)?;
        log::debug!(
            "Loaded pattern '{}' ({} cells, {}x{}) from {}",
            pattern.name,
            pattern.cells.len(),
            pattern.width,
            pattern.height,
            path.display()
        );
        Ok(pattern)
    }

    /// Returns the pattern name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the live cells.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Returns the width of the bounding box anchored at the origin.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the height of the bounding box anchored at the origin.
    pub fn height(&self) -> usize {
        self.height
    }
}

/// Names of all built-in patterns, in library order.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}
