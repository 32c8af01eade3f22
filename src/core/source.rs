//! Source units and the declarations collected from them.
//!
//! These types carry plain byte offsets and line numbers only, so the coverage
//! tally never touches parser types.

use std::fmt;

/// What kind of binding a declaration is. Functions sort before variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DeclarationKind {
    /// `function f() {}`, including exported and default-exported forms.
    Function,
    /// `const f = () => {}` or `const f = function () {}`.
    Variable,
}

/// One function-like top-level binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Byte offset where leading trivia of the enclosing statement begins.
    /// Leading comments are searched from here.
    pub comment_pos: usize,
    /// 1-based line of the first token of the declaration.
    pub start_line: usize,
    /// 1-based line of the last token of the declaration.
    pub end_line: usize,
}

impl Declaration {
    pub fn line_range(&self) -> LineRange {
        LineRange {
            start: self.start_line,
            end: self.end_line,
        }
    }
}

/// Inclusive range of source lines, rendered as `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path shown in the report.
    pub path: String,
    /// Full file text (without a byte order mark).
    pub text: String,
    /// Declarations to evaluate, in collection order.
    pub declarations: Vec<Declaration>,
}

/// Maps byte offsets to 1-based line numbers.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = vec![0];
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                    line_starts.push(i + 2);
                    i += 2;
                    continue;
                }
                b'\r' | b'\n' => line_starts.push(i + 1),
                _ => {}
            }
            i += 1;
        }
        Self { line_starts }
    }

    /// Line containing `offset`. Offsets past the end map to the last line.
    pub fn line_of(&self, offset: usize) -> usize {
        self.line_starts.partition_point(|&start| start <= offset)
    }
}
