use std::fmt;

/// Identifies the kind of problem found in a doc comment.
///
/// The string form follows TSDoc's `tsdoc-*` message ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    CommentMissingOpeningDelimiter,
    CommentMissingClosingDelimiter,
    UnnecessaryBackslash,
    CodeSpanMissingDelimiter,
    CodeSpanEmpty,
    CodeFenceMissingDelimiter,
    AtSignInWord,
    MissingTag,
    CharactersAfterBlockTag,
    UndefinedTag,
    TagShouldHaveBraces,
    TagShouldNotHaveBraces,
    MalformedInlineTag,
    InlineTagMissingRightBrace,
    EscapeRightBrace,
    ParamTagWithInvalidType,
    ParamTagWithInvalidOptionalName,
    ParamTagWithInvalidName,
    ParamTagMissingHyphen,
    MissingDeprecationMessage,
    MalformedHtmlName,
    HtmlTagMissingGreaterThan,
    EscapeGreaterThan,
}

impl MessageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageId::CommentMissingOpeningDelimiter => "tsdoc-comment-missing-opening-delimiter",
            MessageId::CommentMissingClosingDelimiter => "tsdoc-comment-missing-closing-delimiter",
            MessageId::UnnecessaryBackslash => "tsdoc-unnecessary-backslash",
            MessageId::CodeSpanMissingDelimiter => "tsdoc-code-span-missing-delimiter",
            MessageId::CodeSpanEmpty => "tsdoc-code-span-empty",
            MessageId::CodeFenceMissingDelimiter => "tsdoc-code-fence-missing-delimiter",
            MessageId::AtSignInWord => "tsdoc-at-sign-in-word",
            MessageId::MissingTag => "tsdoc-missing-tag",
            MessageId::CharactersAfterBlockTag => "tsdoc-characters-after-block-tag",
            MessageId::UndefinedTag => "tsdoc-undefined-tag",
            MessageId::TagShouldHaveBraces => "tsdoc-tag-should-have-braces",
            MessageId::TagShouldNotHaveBraces => "tsdoc-tag-should-not-have-braces",
            MessageId::MalformedInlineTag => "tsdoc-malformed-inline-tag",
            MessageId::InlineTagMissingRightBrace => "tsdoc-inline-tag-missing-right-brace",
            MessageId::EscapeRightBrace => "tsdoc-escape-right-brace",
            MessageId::ParamTagWithInvalidType => "tsdoc-param-tag-with-invalid-type",
            MessageId::ParamTagWithInvalidOptionalName => {
                "tsdoc-param-tag-with-invalid-optional-name"
            }
            MessageId::ParamTagWithInvalidName => "tsdoc-param-tag-with-invalid-name",
            MessageId::ParamTagMissingHyphen => "tsdoc-param-tag-missing-hyphen",
            MessageId::MissingDeprecationMessage => "tsdoc-missing-deprecation-message",
            MessageId::MalformedHtmlName => "tsdoc-malformed-html-name",
            MessageId::HtmlTagMissingGreaterThan => "tsdoc-html-tag-missing-greater-than",
            MessageId::EscapeGreaterThan => "tsdoc-escape-greater-than",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem found while validating a doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocDiagnostic {
    pub id: MessageId,
    pub text: String,
    /// 1-based line within the comment.
    pub line: usize,
}

impl fmt::Display for DocDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) line {}: {}", self.id, self.line, self.text)
    }
}
