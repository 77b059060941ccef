//! Executable resolution for programs under test.
//!
//! Resolution sits behind [`ProgramLocator`] so sweep logic stays
//! independent of filesystem layout: the driver asks for a name and gets
//! back a probe result, nothing more.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A program named by the sweep, with the result of its presence probe.
///
/// The probe happens once, when the program's sweep is about to start, and
/// the result is not revisited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramUnderTest {
    /// Bare program name, e.g. `accumulate`.
    pub name: String,
    /// Resolved path when the probe found the executable.
    pub path: Option<PathBuf>,
}

impl ProgramUnderTest {
    /// Whether the probe found the executable.
    pub fn exists(&self) -> bool {
        self.path.is_some()
    }
}

/// Resolves program names to launchable paths.
pub trait ProgramLocator {
    /// Probe for `name` and report what was found.
    fn locate(&self, name: &str) -> ProgramUnderTest;
}

/// Locator probing for plain files in one directory.
///
/// The default directory is the working directory, matching how the
/// accumulate executables are built in place next to their sources.
#[derive(Debug, Clone)]
pub struct DirLocator {
    bindir: PathBuf,
}

impl DirLocator {
    pub fn new(bindir: impl Into<PathBuf>) -> Self {
        Self {
            bindir: bindir.into(),
        }
    }

    pub fn bindir(&self) -> &Path {
        &self.bindir
    }
}

impl Default for DirLocator {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ProgramLocator for DirLocator {
    fn locate(&self, name: &str) -> ProgramUnderTest {
        let candidate = self.bindir.join(name);
        ProgramUnderTest {
            name: name.to_string(),
            path: candidate.is_file().then_some(candidate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_locates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("accumulate"), b"").unwrap();

        let program = DirLocator::new(dir.path()).locate("accumulate");
        assert!(program.exists());
        assert_eq!(program.name, "accumulate");
        assert_eq!(program.path.unwrap(), dir.path().join("accumulate"));
    }

    #[test]
    fn test_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let program = DirLocator::new(dir.path()).locate("accumulate");
        assert!(!program.exists());
        assert_eq!(program.path, None);
    }

    #[test]
    fn test_directory_does_not_count_as_program() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("accumulate")).unwrap();

        let program = DirLocator::new(dir.path()).locate("accumulate");
        assert!(!program.exists());
    }

    #[test]
    fn test_default_probes_working_directory() {
        let locator = DirLocator::default();
        assert_eq!(locator.bindir(), Path::new("."));
    }
}
