use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// A 0-based position in the form language servers expect: `character`
/// counts UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SymbolPosition {
    pub line: u32,
    pub character: u32,
}

/// Position of the first whole-word occurrence of `symbol` in `file`.
pub fn find_symbol(file: &Path, symbol: &str) -> Result<SymbolPosition> {
    find_references(file, symbol)?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("symbol `{}` not found in {}", symbol, file.display()))
}

/// Positions of every whole-word occurrence of `symbol` in `file`.
pub fn find_references(file: &Path, symbol: &str) -> Result<Vec<SymbolPosition>> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(find_in_source(&source, symbol))
}

/// Same as [`find_references`] but over an in-memory source string.
pub fn find_in_source(source: &str, symbol: &str) -> Vec<SymbolPosition> {
    if symbol.is_empty() {
        return Vec::new();
    }

    let mut positions = Vec::new();
    for (line_no, line) in source.lines().enumerate() {
        for (idx, _) in line.match_indices(symbol) {
            let before = line[..idx].chars().next_back();
            let after = line[idx + symbol.len()..].chars().next();
            if before.is_some_and(is_ident_char) || after.is_some_and(is_ident_char) {
                continue;
            }

            positions.push(SymbolPosition {
                line: line_no as u32,
                character: line[..idx].encode_utf16().count() as u32,
            });
        }
    }

    positions
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
