use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Source files every copy of the fixture must contain.
pub const REQUIRED_SOURCES: [&str; 6] = [
    "lib.rs",
    "main.rs",
    "calculator.rs",
    "config.rs",
    "demo.rs",
    "utils.rs",
];

/// Standalone manifest written into each copy. The empty `[workspace]` table
/// keeps the copy from being picked up by an enclosing workspace.
const FIXTURE_MANIFEST: &str = r#"[package]
name = "calculator-fixture"
version = "0.1.0"
edition = "2021"

[workspace]

[dependencies]
anyhow = "1.0"
serde = { version = "1.0", features = ["derive"] }
serde_json = "1.0"
env_logger = "0.10"
log = "0.4"
"#;

/// A private copy of the fixture sources in its own temporary directory.
pub struct IsolatedProject {
    /// The temporary directory containing the project copy.
    _temp_dir: TempDir,
    /// Path to the project root.
    project_path: PathBuf,
}

impl IsolatedProject {
    /// Copy the fixture crate's `src/` into a fresh temp directory.
    pub fn new() -> Result<Self> {
        Self::from_source(&fixture_root())
    }

    /// Create an isolated project from any directory holding a `src/` tree.
    pub fn from_source(source_root: &Path) -> Result<Self> {
        let source_src = source_root.join("src");
        if !source_src.exists() {
            return Err(anyhow!(
                "fixture sources not found at: {}",
                source_src.display()
            ));
        }

        let temp_dir = TempDir::new()?;
        let project_path = temp_dir.path().to_path_buf();
        let src_dir = project_path.join("src");

        copy_dir_all(&source_src, &src_dir)?;
        std::fs::write(project_path.join("Cargo.toml"), FIXTURE_MANIFEST)?;

        let mut files: Vec<_> = std::fs::read_dir(&src_dir)?
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        files.sort();

        for file in REQUIRED_SOURCES {
            if !src_dir.join(file).exists() {
                return Err(anyhow!(
                    "Required file {} missing after copy. Found files: {:?}",
                    file,
                    files
                ));
            }
        }

        Ok(Self {
            _temp_dir: temp_dir,
            project_path,
        })
    }

    /// Get the path to the isolated project.
    pub fn path(&self) -> &Path {
        &self.project_path
    }

    /// Get a path to a file within the project.
    pub fn file_path(&self, relative_path: &str) -> PathBuf {
        self.project_path.join(relative_path)
    }
}

/// Root of the fixture crate, whether called from this crate or the root one.
pub fn fixture_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.ends_with("test-support") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| manifest_dir.to_path_buf())
    } else {
        manifest_dir.to_path_buf()
    }
}

/// Recursively copy a directory and all its contents.
fn copy_dir_all(src: &Path, dst: &Path) -> Result<()> {
    use std::fs;

    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_all(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
