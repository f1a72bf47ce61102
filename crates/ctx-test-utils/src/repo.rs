//! [`TestRepo`] builder for context-sync test scenarios.

use ctx_fs::{ContextPath, NormalizedPath};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A temporary repository directory with helper methods for test setup and
/// assertion.
///
/// # Example
///
/// ```rust,no_run
/// use ctx_test_utils::TestRepo;
///
/// let repo = TestRepo::new();
/// repo.write_source("commands", "run-tests.md", "# Run tests\n");
/// repo.assert_file_exists(".context/commands/run-tests.md");
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a repository with all four `.context/` source directories.
    pub fn with_context() -> Self {
        let repo = Self::new();
        for dir in ContextPath::source_dirs() {
            fs::create_dir_all(repo.root().join(dir.as_str())).unwrap();
        }
        repo
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `body` to `.context/<category>/<name>`, creating directories.
    pub fn write_source(&self, category: &str, name: &str, body: &str) {
        self.write(&format!(".context/{category}/{name}"), body);
    }

    /// Write `content` to `path` (relative to root), creating parents.
    pub fn write(&self, path: &str, content: &str) {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    /// Read `path` (relative to root) as text.
    ///
    /// # Panics
    /// Panics with the path if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Sorted names of the entries directly inside `path`; empty if missing.
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.root().join(path)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Assert that `path` (relative to the repo root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the repo root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
