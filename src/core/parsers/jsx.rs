use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the parser syntax from the file extension.
///
/// `.ts` is plain TypeScript so `<T>value` casts parse; everything else is
/// parsed as TSX, which also accepts plain JS and JSX.
pub fn syntax_for(file_path: &str) -> Syntax {
    let is_plain_ts = Path::new(file_path)
        .extension()
        .is_some_and(|ext| ext == "ts");

    Syntax::Typescript(TsSyntax {
        tsx: !is_plain_ts,
        decorators: true,
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code string into an AST.
///
/// Accepts a shared SourceMap for thread-safe parallel parsing.
pub fn parse_source(code: String, file_path: &str, source_map: Arc<SourceMap>) -> Result<ParsedSource> {
    use swc_common::GLOBALS;

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;

        Ok(ParsedSource { module, source_map })
    })
}
