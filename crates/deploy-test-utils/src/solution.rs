//! [`TestSolution`] builder for on-disk web solution layouts.

use crate::documents;
use deploy_fs::NormalizedPath;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SOLUTION_HEADER: &str = "\u{feff}
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio 15
VisualStudioVersion = 15.0.28307.271
MinimumVisualStudioVersion = 10.0.40219.1
Global
EndGlobal
";

/// A temporary directory laid out like a Visual Studio web solution.
///
/// # Example
///
/// ```rust,no_run
/// use deploy_test_utils::TestSolution;
/// use deploy_test_utils::documents;
///
/// let solution = TestSolution::new()
///     .with_solution("Alloy")
///     .with_project("Alloy.Web", &documents::csproj(Some("v4.6.1"), None));
/// assert!(solution.root().join("Alloy.sln").exists());
/// ```
pub struct TestSolution {
    temp_dir: TempDir,
}

impl Default for TestSolution {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSolution {
    /// Create an empty temporary directory.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("TestSolution: failed to create temp dir: {e}")),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`].
    pub fn root_path(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Write `{name}.sln` at the root.
    pub fn with_solution(self, name: &str) -> Self {
        self.with_file(&format!("{name}.sln"), SOLUTION_HEADER)
    }

    /// Create an (empty) directory relative to the root.
    ///
    /// # Panics
    /// Panics if the directory cannot be created.
    pub fn with_dir(self, relative: &str) -> Self {
        let path = self.root().join(relative);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestSolution: failed to create {}: {e}", path.display()));
        self
    }

    /// Write a file relative to the root, creating parent directories.
    ///
    /// # Panics
    /// Panics if the file cannot be written.
    pub fn with_file(self, relative: &str, content: impl AsRef<[u8]>) -> Self {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("TestSolution: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestSolution: failed to write {}: {e}", path.display()));
        self
    }

    /// Create `dir/` holding `{dir}.csproj` with the given body.
    pub fn with_project(self, dir: &str, csproj: impl AsRef<[u8]>) -> Self {
        let file_name = match Path::new(dir).file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => dir.to_string(),
        };
        self.with_file(&format!("{dir}/{file_name}.csproj"), csproj)
    }

    /// Write `packages.config` inside `dir` listing `(id, version)` pairs.
    pub fn with_packages(self, dir: &str, packages: &[(&str, &str)]) -> Self {
        self.with_file(
            &format!("{dir}/packages.config"),
            documents::packages_config(packages),
        )
    }

    /// Write a minimal `EPiServer.dll` carrying the given file version at
    /// `relative` (a directory path below the root).
    pub fn with_assembly(self, relative: &str, version: (u16, u16, u16, u16)) -> Self {
        let (major, minor, build, revision) = version;
        self.with_file(
            &format!("{relative}/EPiServer.dll"),
            documents::assembly_image(major, minor, build, revision),
        )
    }
}
