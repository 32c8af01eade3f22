use crate::core::{
    coverage::{leading_comments::nearest_leading_comment, record::CoverageRecord},
    source::SourceUnit,
    tsdoc::DocCommentValidator,
};

/// Opening token of a structured documentation comment.
pub const DOC_COMMENT_OPENER: &str = "/**";

/// Outcome for a single declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocStatus {
    /// Preceded by a doc comment with no diagnostics.
    Documented,
    /// No leading comment, or a doc comment with diagnostics.
    Undocumented,
    /// Preceded by an ordinary comment. Counted in the total only.
    PlainComment,
}

/// Classify the comment (if any) in front of a declaration.
pub fn doc_status(comment: Option<&str>, validator: &dyn DocCommentValidator) -> DocStatus {
    match comment {
        None => DocStatus::Undocumented,
        Some(text) if !text.starts_with(DOC_COMMENT_OPENER) => DocStatus::PlainComment,
        Some(text) if validator.validate(text).is_empty() => DocStatus::Documented,
        Some(_) => DocStatus::Undocumented,
    }
}

/// Tally documentation coverage for one source unit.
pub fn tally_source_unit(
    unit: &SourceUnit,
    validator: &dyn DocCommentValidator,
) -> CoverageRecord {
    let mut record = CoverageRecord {
        file_path: unit.path.clone(),
        total: unit.declarations.len(),
        documented: 0,
        undocumented: Vec::new(),
    };

    for decl in &unit.declarations {
        let comment = nearest_leading_comment(&unit.text, decl.comment_pos);
        match doc_status(comment, validator) {
            DocStatus::Documented => record.documented += 1,
            DocStatus::Undocumented => record.undocumented.push(decl.line_range()),
            DocStatus::PlainComment => {}
        }
    }

    record
}
