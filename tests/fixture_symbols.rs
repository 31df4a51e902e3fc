use anyhow::Result;
use rstest::rstest;
use test_support::{find_references, find_symbol, fixture_root, IsolatedProject, SymbolPosition};

#[rstest]
#[case("src/utils.rs", "add_numbers", 3, 7)]
#[case("src/utils.rs", "multiply_numbers", 8, 7)]
#[case("src/calculator.rs", "Calculator", 7, 11)]
fn test_definition_positions(
    #[case] file: &str,
    #[case] symbol: &str,
    #[case] line: u32,
    #[case] character: u32,
) -> Result<()> {
    let position = find_symbol(&fixture_root().join(file), symbol)?;
    assert_eq!(position, SymbolPosition { line, character });
    Ok(())
}

#[rstest]
#[case("src/demo.rs", "message")]
#[case("src/demo.rs", "calc")]
#[case("src/demo.rs", "numbers")]
fn test_symbols_have_multiple_references(#[case] file: &str, #[case] symbol: &str) -> Result<()> {
    let references = find_references(&fixture_root().join(file), symbol)?;
    assert!(
        references.len() > 1,
        "expected several references to `{}`, found {:?}",
        symbol,
        references
    );
    Ok(())
}

#[test]
fn test_missing_symbol_is_an_error() {
    let result = find_symbol(&fixture_root().join("src/utils.rs"), "divide_numbers");
    assert!(result.is_err());
}

#[test]
fn test_edits_stay_in_isolated_copy() -> Result<()> {
    let project = IsolatedProject::new()?;
    let utils = project.file_path("src/utils.rs");

    let source = std::fs::read_to_string(&utils)?;
    std::fs::write(&utils, source.replace("add_numbers", "sum_numbers"))?;

    assert!(find_references(&utils, "add_numbers")?.is_empty());
    assert!(!find_references(&utils, "sum_numbers")?.is_empty());
    assert!(!find_references(&fixture_root().join("src/utils.rs"), "add_numbers")?.is_empty());

    Ok(())
}
