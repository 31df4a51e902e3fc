pub mod isolated_project;
pub mod symbols;

// Re-export commonly used items
pub use isolated_project::{fixture_root, IsolatedProject};
pub use symbols::{find_references, find_symbol, SymbolPosition};
