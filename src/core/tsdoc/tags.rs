/// How a tag may appear in a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSyntax {
    /// Starts a section that runs until the next block tag: `@remarks ...`
    Block,
    /// Stands alone with no content: `@beta`
    Modifier,
    /// Appears inside braces: `{@link Foo}`
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: &'static str,
    pub syntax: TagSyntax,
}

const fn tag(name: &'static str, syntax: TagSyntax) -> TagDefinition {
    TagDefinition { name, syntax }
}

/// Tags defined by the TSDoc standard.
pub const STANDARD_TAGS: &[TagDefinition] = &[
    tag("alpha", TagSyntax::Modifier),
    tag("beta", TagSyntax::Modifier),
    tag("decorator", TagSyntax::Block),
    tag("defaultValue", TagSyntax::Block),
    tag("deprecated", TagSyntax::Block),
    tag("eventProperty", TagSyntax::Modifier),
    tag("example", TagSyntax::Block),
    tag("experimental", TagSyntax::Modifier),
    tag("inheritDoc", TagSyntax::Inline),
    tag("internal", TagSyntax::Modifier),
    tag("label", TagSyntax::Inline),
    tag("link", TagSyntax::Inline),
    tag("override", TagSyntax::Modifier),
    tag("packageDocumentation", TagSyntax::Modifier),
    tag("param", TagSyntax::Block),
    tag("privateRemarks", TagSyntax::Block),
    tag("public", TagSyntax::Modifier),
    tag("readonly", TagSyntax::Modifier),
    tag("remarks", TagSyntax::Block),
    tag("returns", TagSyntax::Block),
    tag("sealed", TagSyntax::Modifier),
    tag("see", TagSyntax::Block),
    tag("throws", TagSyntax::Block),
    tag("typeParam", TagSyntax::Block),
    tag("virtual", TagSyntax::Modifier),
];

/// Look up a standard tag by name (without `@`). Tag names are case-insensitive.
pub fn find_tag(name: &str) -> Option<&'static TagDefinition> {
    STANDARD_TAGS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_tag() {
        assert_eq!(find_tag("param").unwrap().syntax, TagSyntax::Block);
        assert_eq!(find_tag("beta").unwrap().syntax, TagSyntax::Modifier);
        assert_eq!(find_tag("link").unwrap().syntax, TagSyntax::Inline);
    }

    #[test]
    fn test_find_tag_case_insensitive() {
        assert_eq!(find_tag("Param").unwrap().name, "param");
        assert_eq!(find_tag("TYPEPARAM").unwrap().name, "typeParam");
        assert_eq!(find_tag("inheritdoc").unwrap().name, "inheritDoc");
    }

    #[test]
    fn test_jsdoc_only_tags_are_undefined() {
        assert!(find_tag("return").is_none());
        assert!(find_tag("arg").is_none());
        assert!(find_tag("type").is_none());
    }
}
