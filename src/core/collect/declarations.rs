//! Declaration collection.
//!
//! Walks the top-level statements of a module and picks out the function-like
//! bindings whose documentation is checked:
//!
//! - function declarations (`function f() {}`, `export function f() {}`,
//!   `export default function () {}`, bodiless overload signatures)
//! - variable declarators initialized directly with an arrow function or a
//!   function expression (`const f = () => {}`, `let g = function () {}`)
//!
//! Initializers are not unwrapped: `const f = (() => {})`, `const f = wrap(() => {})`
//! and `const f = (() => {}) as Handler` are not collected.
//!
//! Functions come first, then variables, each group in file order.

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    Decl, DefaultDecl, Expr, ModuleDecl, ModuleItem, Pat, Stmt, VarDecl, VarDeclarator,
};

use crate::core::{
    parsers::typescript::ParsedModule,
    source::{Declaration, DeclarationKind, LineIndex},
};

/// Collects function-like declarations from a parsed module.
pub struct DeclarationCollector<'a> {
    parsed: &'a ParsedModule,
    lines: LineIndex,
}

impl<'a> DeclarationCollector<'a> {
    pub fn new(parsed: &'a ParsedModule, text: &str) -> Self {
        Self {
            parsed,
            lines: LineIndex::new(text),
        }
    }

    /// Collect declarations in evaluation order.
    pub fn collect(&self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        // Leading trivia of an item starts where the previous item ends.
        let mut comment_pos = 0;

        for item in &self.parsed.module.body {
            match item {
                ModuleItem::Stmt(Stmt::Decl(decl)) => {
                    self.collect_decl(
                        decl,
                        item.span(),
                        comment_pos,
                        &mut declarations,
                    );
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    self.collect_decl(
                        &export.decl,
                        export.span,
                        comment_pos,
                        &mut declarations,
                    );
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
                    if let DefaultDecl::Fn(fn_expr) = &export.decl {
                        let name = fn_expr
                            .ident
                            .as_ref()
                            .map(|ident| ident.sym.to_string())
                            .unwrap_or_else(|| "default".to_string());
                        declarations.push(self.make_declaration(
                            name,
                            DeclarationKind::Function,
                            export.span,
                            comment_pos,
                        ));
                    }
                }
                _ => {}
            }

            comment_pos = self.parsed.offset_of(item.span().hi);
        }

        // Stable, so each kind keeps file order.
        declarations.sort_by_key(|decl| decl.kind);
        declarations
    }

    /// `node_span` is the span reported for a function declaration; for exported
    /// functions it includes the `export` keyword.
    fn collect_decl(
        &self,
        decl: &Decl,
        node_span: Span,
        comment_pos: usize,
        declarations: &mut Vec<Declaration>,
    ) {
        match decl {
            Decl::Fn(fn_decl) => {
                declarations.push(self.make_declaration(
                    fn_decl.ident.sym.to_string(),
                    DeclarationKind::Function,
                    node_span,
                    comment_pos,
                ));
            }
            Decl::Var(var_decl) => {
                declarations.extend(self.collect_var_decl(var_decl, comment_pos));
            }
            _ => {}
        }
    }

    fn collect_var_decl<'b>(
        &'b self,
        var_decl: &'b VarDecl,
        comment_pos: usize,
    ) -> impl Iterator<Item = Declaration> + 'b {
        var_decl
            .decls
            .iter()
            .filter(|declarator| is_function_initializer(declarator))
            .map(move |declarator| {
                self.make_declaration(
                    binding_name(&declarator.name),
                    DeclarationKind::Variable,
                    declarator.span,
                    comment_pos,
                )
            })
    }

    fn make_declaration(
        &self,
        name: String,
        kind: DeclarationKind,
        span: Span,
        comment_pos: usize,
    ) -> Declaration {
        Declaration {
            name,
            kind,
            comment_pos,
            start_line: self.lines.line_of(self.parsed.offset_of(span.lo)),
            end_line: self.lines.line_of(self.parsed.offset_of(span.hi)),
        }
    }
}

/// True if the initializer is literally an arrow function or function expression.
fn is_function_initializer(declarator: &VarDeclarator) -> bool {
    matches!(
        declarator.init.as_deref(),
        Some(Expr::Arrow(_)) | Some(Expr::Fn(_))
    )
}

fn binding_name(pat: &Pat) -> String {
    match pat {
        Pat::Ident(binding) => binding.id.sym.to_string(),
        _ => "<pattern>".to_string(),
    }
}
