use std::{path::Path, sync::Arc};

use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, Globals, SourceMap, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed TypeScript module together with the data needed to turn swc
/// positions back into offsets into the original text.
pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    /// Position of byte 0 of the file inside `source_map`.
    pub start_pos: BytePos,
}

impl ParsedModule {
    /// Convert an swc position into a byte offset into the parsed text.
    pub fn offset_of(&self, pos: BytePos) -> usize {
        pos.0.saturating_sub(self.start_pos.0) as usize
    }
}

/// Pick the swc syntax for a file from its extension.
///
/// `.tsx` enables JSX; `.d.ts` is parsed as a declaration file. Everything else
/// is plain TypeScript, so generic arrows and `<T>expr` assertions parse.
pub fn syntax_for(file_path: &str) -> Syntax {
    Syntax::Typescript(TsSyntax {
        tsx: file_path.ends_with(".tsx"),
        dts: file_path.ends_with(".d.ts"),
        ..Default::default()
    })
}

/// Parse TypeScript source code into a module AST.
///
/// Each call gets its own `SourceMap` and swc globals, so files can be parsed
/// on different threads. A syntax error the parser cannot recover from is
/// returned as an error carrying the line number and the parser message.
pub fn parse_typescript_source(code: &str, file_path: &Path) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    let path_str = file_path.to_string_lossy();
    let source_map = Arc::new(SourceMap::default());

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(
            FileName::Real(file_path.to_path_buf()).into(),
            code.to_string(),
        );

        let mut parser = Parser::new(
            syntax_for(&path_str),
            StringInput::from(&*source_file),
            None,
        );

        let module = parser.parse_module().map_err(|e| {
            let line = source_map.lookup_char_pos(e.span().lo).line;
            anyhow!("{}:{}: {}", path_str, line, e.kind().msg())
        })?;

        Ok(ParsedModule {
            module,
            source_map: source_map.clone(),
            start_pos: source_file.start_pos,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_typescript() {
        let code = "export function add(a: number, b: number): number { return a + b; }";
        let parsed = parse_typescript_source(code, Path::new("math.ts")).unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_generic_arrow_in_ts_file() {
        let code = "const id = <T>(value: T): T => value;";
        let parsed = parse_typescript_source(code, Path::new("id.ts")).unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_jsx_in_tsx_file() {
        let code = "export const App = () => <div>Hello</div>;";
        let parsed = parse_typescript_source(code, Path::new("App.tsx")).unwrap();
        assert_eq!(parsed.module.body.len(), 1);
    }

    #[test]
    fn test_parse_error_reports_location() {
        let code = "const ok = 1;\nfunction broken( {\n";
        let err = parse_typescript_source(code, Path::new("broken.ts"))
            .err()
            .unwrap();
        assert!(err.to_string().starts_with("broken.ts:"));
    }

    #[test]
    fn test_offsets_start_at_zero() {
        let code = "function f() {}";
        let parsed = parse_typescript_source(code, Path::new("f.ts")).unwrap();
        let span = parsed.module.body[0].span();
        assert_eq!(parsed.offset_of(span.lo), 0);
        assert_eq!(parsed.offset_of(span.hi), code.len());
    }
}
