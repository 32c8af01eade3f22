//! TSDoc syntax validation.
//!
//! A comment is first split into content lines (delimiters and the leading
//! `*` of each line removed), code fences are blanked out, and the remaining
//! text is scanned for tags, inline tags, code spans, escapes and HTML.
//! Every syntax problem becomes one [`DocDiagnostic`]; a comment with no
//! diagnostics is valid.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    message::{DocDiagnostic, MessageId},
    tags::{TagSyntax, find_tag},
};

static PARAM_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").unwrap()
});

/// Validates the text of a documentation comment.
pub trait DocCommentValidator {
    /// Returns every problem found in `comment`, which includes its
    /// delimiters (`/** ... */`). An empty list means the comment is valid.
    fn validate(&self, comment: &str) -> Vec<DocDiagnostic>;
}

/// Validator for the TSDoc standard tag set.
#[derive(Debug, Default, Clone, Copy)]
pub struct TsDocValidator;

impl DocCommentValidator for TsDocValidator {
    fn validate(&self, comment: &str) -> Vec<DocDiagnostic> {
        let mut diagnostics = Vec::new();

        let Some(lines) = extract_content_lines(comment, &mut diagnostics) else {
            return diagnostics;
        };
        let chars = mask_code_fences(&lines, &mut diagnostics);

        Scanner {
            chars,
            pos: 0,
            diagnostics,
        }
        .run()
    }
}

/// Strip the comment delimiters and per-line `*` prefixes.
///
/// Returns `None` (after recording a diagnostic) when the delimiters are missing.
fn extract_content_lines(
    comment: &str,
    diagnostics: &mut Vec<DocDiagnostic>,
) -> Option<Vec<String>> {
    let Some(body) = comment.strip_prefix("/**") else {
        diagnostics.push(DocDiagnostic {
            id: MessageId::CommentMissingOpeningDelimiter,
            text: "Expecting a \"/**\" comment".to_string(),
            line: 1,
        });
        return None;
    };

    let Some(inner) = body.strip_suffix("*/") else {
        diagnostics.push(DocDiagnostic {
            id: MessageId::CommentMissingClosingDelimiter,
            text: "Expecting closing delimiter \"*/\"".to_string(),
            line: comment.split('\n').count(),
        });
        return None;
    };

    let lines = inner
        .split('\n')
        .enumerate()
        .map(|(index, raw)| {
            let trimmed = raw.trim();
            if index == 0 {
                return trimmed.to_string();
            }
            match trimmed.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                None => trimmed.to_string(),
            }
        })
        .collect();

    Some(lines)
}

/// Flatten content lines into `(char, line)` pairs, dropping fenced code blocks.
fn mask_code_fences(
    lines: &[String],
    diagnostics: &mut Vec<DocDiagnostic>,
) -> Vec<(char, usize)> {
    let mut chars = Vec::new();
    let mut open_fence: Option<usize> = None;

    for (index, line) in lines.iter().enumerate() {
        let line_no = index + 1;
        if index > 0 {
            chars.push(('\n', line_no));
        }

        if line.trim_start().starts_with("```") {
            open_fence = match open_fence {
                Some(_) => None,
                None => Some(line_no),
            };
            continue;
        }
        if open_fence.is_some() {
            continue;
        }

        chars.extend(line.chars().map(|c| (c, line_no)));
    }

    if let Some(line) = open_fence {
        diagnostics.push(DocDiagnostic {
            id: MessageId::CodeFenceMissingDelimiter,
            text: "Error parsing code fence: missing closing delimiter".to_string(),
            line,
        });
    }

    chars
}

struct Scanner {
    chars: Vec<(char, usize)>,
    pos: usize,
    diagnostics: Vec<DocDiagnostic>,
}

impl Scanner {
    fn run(mut self) -> Vec<DocDiagnostic> {
        while let Some(c) = self.peek(0) {
            match c {
                '\\' => self.scan_backslash(),
                '`' => self.scan_code_span(),
                '{' => self.scan_inline_tag(),
                '}' => {
                    self.report(
                        MessageId::EscapeRightBrace,
                        "The \"}\" character should be escaped using a backslash to avoid confusion with a TSDoc inline tag",
                    );
                    self.pos += 1;
                }
                '@' => self.scan_tag(),
                '<' => self.scan_html_tag(),
                '>' => {
                    self.report(
                        MessageId::EscapeGreaterThan,
                        "The \">\" character should be escaped using a backslash to avoid confusion with an HTML tag",
                    );
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        self.diagnostics
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|(c, _)| *c)
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.char_at(self.pos + offset)
    }

    fn report(&mut self, id: MessageId, text: impl Into<String>) {
        let line = self
            .chars
            .get(self.pos)
            .or(self.chars.last())
            .map(|(_, line)| *line)
            .unwrap_or(1);
        self.diagnostics.push(DocDiagnostic {
            id,
            text: text.into(),
            line,
        });
    }

    /// ASCII letters and digits starting at `start`.
    fn read_word(&self, start: usize) -> String {
        self.chars
            .iter()
            .skip(start)
            .map(|(c, _)| *c)
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect()
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(0), Some(' ' | '\t')) {
            self.pos += 1;
        }
    }

    /// Advance past the first `close` on the current line, or to the end of the line.
    fn skip_past(&mut self, close: char) {
        while let Some(c) = self.peek(0) {
            if c == '\n' {
                break;
            }
            self.pos += 1;
            if c == close {
                break;
            }
        }
    }

    fn scan_backslash(&mut self) {
        match self.peek(1) {
            Some(next) if next.is_ascii_punctuation() => self.pos += 2,
            _ => {
                self.report(
                    MessageId::UnnecessaryBackslash,
                    "A backslash must precede a punctuation character",
                );
                self.pos += 1;
            }
        }
    }

    fn scan_code_span(&mut self) {
        let start = self.pos;
        let close = (start + 1..self.chars.len())
            .take_while(|&i| self.chars[i].0 != '\n')
            .find(|&i| self.chars[i].0 == '`');

        match close {
            None => {
                self.report(
                    MessageId::CodeSpanMissingDelimiter,
                    "The code span is missing its closing backtick",
                );
                self.pos += 1;
            }
            Some(end) if end == start + 1 => {
                self.report(MessageId::CodeSpanEmpty, "A code span must contain at least one character");
                self.pos = end + 1;
            }
            Some(end) => self.pos = end + 1,
        }
    }

    fn scan_inline_tag(&mut self) {
        if self.peek(1) != Some('@') {
            self.report(
                MessageId::MalformedInlineTag,
                "Expecting a TSDoc tag starting with \"{@\"",
            );
            self.pos += 1;
            return;
        }

        let name = self.read_word(self.pos + 2);
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            self.report(
                MessageId::MalformedInlineTag,
                "Expecting a TSDoc inline tag name after \"{@\"",
            );
            self.pos += 2;
            return;
        }

        let after_name = self.pos + 2 + name.len();
        let Some(close) = (after_name..self.chars.len()).find(|&i| self.chars[i].0 == '}') else {
            self.report(
                MessageId::InlineTagMissingRightBrace,
                format!("The TSDoc inline tag \"{{@{}\" is missing its closing \"}}\"", name),
            );
            self.pos = self.chars.len();
            return;
        };

        if !matches!(self.char_at(after_name), Some(c) if c == '}' || c.is_whitespace()) {
            self.report(
                MessageId::MalformedInlineTag,
                format!("The TSDoc inline tag \"{{@{}\" contains an invalid character", name),
            );
        }

        match find_tag(&name) {
            None => self.report(
                MessageId::UndefinedTag,
                format!("The TSDoc tag \"@{}\" is not defined in this configuration", name),
            ),
            Some(def) if def.syntax != TagSyntax::Inline => self.report(
                MessageId::TagShouldNotHaveBraces,
                format!("The TSDoc tag \"@{}\" is not an inline tag; it must not be enclosed in \"{{ }}\" braces", def.name),
            ),
            Some(_) => {}
        }

        self.pos = close + 1;
    }

    fn scan_tag(&mut self) {
        let in_word = self.pos > 0 && !self.chars[self.pos - 1].0.is_whitespace();
        if in_word {
            self.report(
                MessageId::AtSignInWord,
                "The \"@\" character looks like part of a TSDoc tag; use a backslash to escape it",
            );
            self.pos += 1;
            return;
        }

        let name = self.read_word(self.pos + 1);
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            self.report(
                MessageId::MissingTag,
                "The \"@\" character must be escaped with a backslash when used as text",
            );
            self.pos += 1;
            return;
        }

        let after_name = self.pos + 1 + name.len();
        if matches!(self.char_at(after_name), Some(c) if !c.is_whitespace()) {
            self.report(
                MessageId::CharactersAfterBlockTag,
                format!(
                    "The token \"@{}\" looks like a TSDoc tag but contains an invalid character; if it is not a tag, use a backslash to escape the \"@\"",
                    name
                ),
            );
            while matches!(self.peek(0), Some(c) if !c.is_whitespace()) {
                self.pos += 1;
            }
            return;
        }

        match find_tag(&name) {
            None => {
                self.report(
                    MessageId::UndefinedTag,
                    format!("The TSDoc tag \"@{}\" is not defined in this configuration", name),
                );
                self.pos = after_name;
            }
            Some(def) if def.syntax == TagSyntax::Inline => {
                self.report(
                    MessageId::TagShouldHaveBraces,
                    format!("The TSDoc tag \"@{}\" is an inline tag; it must be enclosed in \"{{ }}\" braces", def.name),
                );
                self.pos = after_name;
            }
            Some(def) => {
                self.pos = after_name;
                match def.name {
                    "param" | "typeParam" => self.scan_param_block(def.name),
                    "deprecated" => self.check_deprecation_message(),
                    _ => {}
                }
            }
        }
    }

    /// Expects `<name> -` after `@param` or `@typeParam`.
    fn scan_param_block(&mut self, tag: &str) {
        self.skip_spaces();

        match self.peek(0) {
            Some('{') => {
                self.report(
                    MessageId::ParamTagWithInvalidType,
                    format!("The @{} block should not include a JSDoc-style \"{{type}}\"", tag),
                );
                self.skip_past('}');
                return;
            }
            Some('[') => {
                self.report(
                    MessageId::ParamTagWithInvalidOptionalName,
                    format!("The @{} should not include a JSDoc-style optional name; it must not be enclosed in \"[ ]\" brackets", tag),
                );
                self.skip_past(']');
                return;
            }
            _ => {}
        }

        let start = self.pos;
        let name: String = self
            .chars
            .iter()
            .skip(start)
            .map(|(c, _)| *c)
            .take_while(|c| !c.is_whitespace())
            .collect();

        if name.is_empty() {
            self.report(
                MessageId::ParamTagWithInvalidName,
                format!("The @{} block should be followed by a parameter name", tag),
            );
            return;
        }
        if !PARAM_NAME_REGEX.is_match(&name) {
            self.report(
                MessageId::ParamTagWithInvalidName,
                format!("The @{} block should be followed by a valid parameter name: \"{}\"", tag, name),
            );
            self.pos = start + name.chars().count();
            return;
        }

        self.pos = start + name.chars().count();
        self.skip_spaces();

        if self.peek(0) == Some('-') {
            self.pos += 1;
        } else {
            self.report(
                MessageId::ParamTagMissingHyphen,
                format!("The @{} block should be followed by a parameter name and then a hyphen", tag),
            );
        }
    }

    /// `@deprecated` needs some text before the next block tag.
    fn check_deprecation_message(&mut self) {
        let mut has_message = false;
        for i in self.pos..self.chars.len() {
            let c = self.chars[i].0;
            let starts_tag = c == '@'
                && (i == 0 || self.chars[i - 1].0.is_whitespace())
                && matches!(self.char_at(i + 1), Some(n) if n.is_ascii_alphabetic());
            if starts_tag {
                break;
            }
            if !c.is_whitespace() {
                has_message = true;
                break;
            }
        }

        if !has_message {
            self.report(
                MessageId::MissingDeprecationMessage,
                "The @deprecated block must include a deprecation message, e.g. describing the recommended alternative",
            );
        }
    }

    fn scan_html_tag(&mut self) {
        let mut i = self.pos + 1;
        if self.char_at(i) == Some('/') {
            i += 1;
        }

        if !matches!(self.char_at(i), Some(c) if c.is_ascii_alphabetic()) {
            self.report(
                MessageId::MalformedHtmlName,
                "Invalid HTML element: an HTML name must be an ASCII letter followed by optional letters, numbers, or hyphens",
            );
            self.pos += 1;
            return;
        }
        while matches!(self.char_at(i), Some(c) if c.is_ascii_alphanumeric() || c == '-') {
            i += 1;
        }

        // Attributes run up to the closing '>' on the same line.
        let mut quote: Option<char> = None;
        loop {
            match self.char_at(i) {
                Some('>') if quote.is_none() => {
                    self.pos = i + 1;
                    return;
                }
                Some(c @ ('"' | '\'')) => {
                    quote = match quote {
                        Some(q) if q == c => None,
                        None => Some(c),
                        other => other,
                    };
                    i += 1;
                }
                None | Some('\n') => break,
                Some('<') if quote.is_none() => break,
                Some(_) => i += 1,
            }
        }

        self.report(
            MessageId::HtmlTagMissingGreaterThan,
            "The HTML tag has invalid syntax: expecting \">\"",
        );
        self.pos = i;
    }
}
