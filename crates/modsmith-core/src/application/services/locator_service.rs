//! Project Locator - finds the mod that contains a directory.
//!
//! Walks upward from a start directory until a `build.gradle` that both
//! assigns `project.ext.modID` and references `Necesse.jar` is found, then
//! resolves source and resource directories. Either the whole context is
//! resolved or the call fails.
//!
//! Parsing of the build file is a loose, regex based reading of Gradle
//! assignments and is confined to [`GradleManifest`].

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ExistingProjectContext, layout},
    error::ModsmithResult,
};

/// Fields read from a marker file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleManifest {
    pub mod_id: String,
    pub mod_name: Option<String>,
}

impl GradleManifest {
    /// Whether `content` looks like a build file produced for a mod.
    pub fn is_mod_build_file(content: &str) -> bool {
        content.contains(layout::MOD_ID_KEY) && content.contains(layout::GAME_ARCHIVE)
    }

    /// Extract `modID` (required) and `modName` (optional).
    ///
    /// Returns `None` when no `modID` assignment is present. Backslash
    /// escapes inside the quoted value are undone, so a name written with
    /// escaped quotes reads back unchanged.
    pub fn parse(content: &str) -> Option<Self> {
        let mod_id = extract_assignment(&MOD_ID_PATTERN, content)?;
        let mod_name = extract_assignment(&MOD_NAME_PATTERN, content);
        Some(Self { mod_id, mod_name })
    }
}

// `<key> = "value"` or `<key> = 'value'`, allowing backslash escapes inside.
static MOD_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"project\.ext\.modID\s*=\s*(?:"((?:[^"\\]|\\.)+)"|'((?:[^'\\]|\\.)+)')"#)
        .expect("modID pattern is valid")
});

static MOD_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"project\.ext\.modName\s*=\s*(?:"((?:[^"\\]|\\.)+)"|'((?:[^'\\]|\\.)+)')"#)
        .expect("modName pattern is valid")
});

/// First match of `pattern`, unescaped.
fn extract_assignment(pattern: &Regex, content: &str) -> Option<String> {
    let captures = pattern.captures(content)?;
    let raw = captures.get(1).or_else(|| captures.get(2))?.as_str();
    Some(unescape(raw))
}

/// `\x` -> `x`.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Locates existing mod projects.
pub struct ProjectLocator {
    filesystem: Box<dyn Filesystem>,
}

impl ProjectLocator {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Resolve the project containing `start`.
    ///
    /// # Errors
    ///
    /// - `NotAProjectDirectory` if the filesystem root is reached first
    /// - `MalformedProjectConfig` if the build file lacks a mod id, or no
    ///   source or resource directory exists
    #[instrument(skip(self), fields(start = %start.display()))]
    pub fn locate(&self, start: &Path) -> ModsmithResult<ExistingProjectContext> {
        let (root, content) = self.find_root(start)?;
        let marker = root.join(layout::MARKER_FILE);
        debug!(root = %root.display(), "Found project root");

        let manifest = GradleManifest::parse(&content).ok_or_else(|| {
            ApplicationError::MalformedProjectConfig {
                path: marker.clone(),
                reason: format!("no {} assignment found", layout::MOD_ID_KEY),
            }
        })?;

        let namespace = manifest.mod_id.clone();
        let mod_name = manifest
            .mod_name
            .unwrap_or_else(|| manifest.mod_id.clone());

        let source_dir = self
            .first_existing(source_candidates(&root, &namespace))
            .ok_or_else(|| ApplicationError::MalformedProjectConfig {
                path: marker.clone(),
                reason: format!("no source directory found for package '{namespace}'"),
            })?;

        let resources_dir = self
            .first_existing(resource_candidates(&root))
            .ok_or_else(|| ApplicationError::MalformedProjectConfig {
                path: marker.clone(),
                reason: "no resources directory found".into(),
            })?;

        Ok(ExistingProjectContext::new(
            root,
            manifest.mod_id,
            mod_name,
            namespace,
            source_dir,
            resources_dir,
        ))
    }

    /// Walk upward, returning the accepted root and its build file content.
    fn find_root(&self, start: &Path) -> ModsmithResult<(PathBuf, String)> {
        let mut current = start;
        loop {
            let marker = current.join(layout::MARKER_FILE);
            if self.filesystem.exists(&marker) {
                match self.filesystem.read_to_string(&marker) {
                    Ok(content) if GradleManifest::is_mod_build_file(&content) => {
                        return Ok((current.to_path_buf(), content));
                    }
                    Ok(_) => trace!(path = %marker.display(), "Build file is not a mod"),
                    Err(e) => trace!(path = %marker.display(), error = %e, "Unreadable build file"),
                }
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => {
                    return Err(ApplicationError::NotAProjectDirectory {
                        start: start.to_path_buf(),
                    }
                    .into());
                }
            }
        }
    }

    fn first_existing(&self, candidates: Vec<PathBuf>) -> Option<PathBuf> {
        candidates.into_iter().find(|p| self.filesystem.is_dir(p))
    }
}

fn source_candidates(root: &Path, namespace: &str) -> Vec<PathBuf> {
    let java = root.join(layout::JAVA_ROOT);
    let nested = namespace
        .split('.')
        .fold(java.clone(), |acc, segment| acc.join(segment));
    vec![java.join(namespace), nested, root.join("src").join(namespace)]
}

fn resource_candidates(root: &Path) -> Vec<PathBuf> {
    vec![root.join(layout::RESOURCES_ROOT), root.join("resources")]
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::error::ModsmithError;
    use crate::application::ports::output::MockFilesystem;

    const BUILD: &str = r#"
project.ext.modID = "mymod"
project.ext.modName = "My Mod"
dependencies { implementation files(gameDirectory + "/Necesse.jar") }
"#;

    /// Mock backed by a fixed set of files and directories.
    fn fs_with(files: &[(&str, &str)], dirs: &[&str]) -> MockFilesystem {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, c)| (PathBuf::from(p), c.to_string()))
            .collect();
        let dirs: HashSet<PathBuf> = dirs.iter().map(PathBuf::from).collect();
        let exists_files = files.clone();
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| exists_files.contains_key(p));
        fs.expect_is_dir().returning(move |p| dirs.contains(p));
        fs.expect_read_to_string().returning(move |p| {
            files.get(p).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        });
        fs
    }

    #[test]
    fn parse_reads_id_and_name() {
        let m = GradleManifest::parse(BUILD).unwrap();
        assert_eq!(m.mod_id, "mymod");
        assert_eq!(m.mod_name.as_deref(), Some("My Mod"));
    }

    #[test]
    fn parse_accepts_single_quotes_and_tight_spacing() {
        let m = GradleManifest::parse("project.ext.modID='abc'").unwrap();
        assert_eq!(m.mod_id, "abc");
        assert_eq!(m.mod_name, None);
    }

    #[test]
    fn parse_without_id_is_none() {
        assert_eq!(GradleManifest::parse("Necesse.jar"), None);
    }

    #[test]
    fn parse_undoes_escaped_quotes_in_name() {
        let build = r#"project.ext.modID = "best"
project.ext.modName = "The \"Best\" Mod"
"#;
        let m = GradleManifest::parse(build).unwrap();
        assert_eq!(m.mod_name.as_deref(), Some(r#"The "Best" Mod"#));
    }

    #[test]
    fn build_file_needs_both_markers() {
        assert!(GradleManifest::is_mod_build_file(BUILD));
        assert!(!GradleManifest::is_mod_build_file("project.ext.modID = \"x\""));
        assert!(!GradleManifest::is_mod_build_file("files('Necesse.jar')"));
    }

    #[test]
    fn locates_from_nested_directory() {
        let fs = fs_with(
            &[("/w/mod/build.gradle", BUILD)],
            &["/w/mod/src/main/java/mymod", "/w/mod/src/main/resources"],
        );
        let ctx = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/w/mod/src/main/java"))
            .unwrap();
        assert_eq!(ctx.root_dir(), Path::new("/w/mod"));
        assert_eq!(ctx.mod_id(), "mymod");
        assert_eq!(ctx.mod_name(), "My Mod");
        assert_eq!(ctx.namespace(), "mymod");
    }

    #[test]
    fn skips_unrelated_build_file_and_keeps_walking() {
        let fs = fs_with(
            &[
                ("/w/mod/sub/build.gradle", "apply plugin: 'java'"),
                ("/w/mod/build.gradle", BUILD),
            ],
            &["/w/mod/src/main/java/mymod", "/w/mod/src/main/resources"],
        );
        let ctx = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/w/mod/sub"))
            .unwrap();
        assert_eq!(ctx.root_dir(), Path::new("/w/mod"));
    }

    #[test]
    fn missing_name_falls_back_to_id() {
        let build = "project.ext.modID = \"solo\"\nNecesse.jar";
        let fs = fs_with(
            &[("/p/build.gradle", build)],
            &["/p/src/main/java/solo", "/p/resources"],
        );
        let ctx = ProjectLocator::new(Box::new(fs)).locate(Path::new("/p")).unwrap();
        assert_eq!(ctx.mod_name(), "solo");
        assert_eq!(ctx.resources_dir(), Path::new("/p/resources"));
    }

    #[test]
    fn prefers_dotted_package_path_second() {
        let build = "project.ext.modID = \"com.acme\"\nNecesse.jar";
        let fs = fs_with(
            &[("/p/build.gradle", build)],
            &["/p/src/main/java/com/acme", "/p/src/main/resources"],
        );
        let ctx = ProjectLocator::new(Box::new(fs)).locate(Path::new("/p")).unwrap();
        assert_eq!(ctx.source_dir(), Path::new("/p/src/main/java/com/acme"));
    }

    #[test]
    fn no_marker_anywhere_is_not_a_project() {
        let fs = fs_with(&[], &[]);
        let err = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/a/b/c"))
            .unwrap_err();
        assert!(err.is_not_a_project());
    }

    #[test]
    fn missing_source_dir_is_malformed() {
        let fs = fs_with(&[("/p/build.gradle", BUILD)], &["/p/src/main/resources"]);
        let err = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/p"))
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Application(ApplicationError::MalformedProjectConfig { .. })
        ));
    }

    #[test]
    fn missing_resources_dir_is_malformed() {
        let fs = fs_with(&[("/p/build.gradle", BUILD)], &["/p/src/main/java/mymod"]);
        let err = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/p"))
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Application(ApplicationError::MalformedProjectConfig { .. })
        ));
    }

    #[test]
    fn marker_with_id_key_but_no_value_is_malformed() {
        let build = "// project.ext.modID is set elsewhere\nNecesse.jar";
        let fs = fs_with(&[("/p/build.gradle", build)], &[]);
        let err = ProjectLocator::new(Box::new(fs))
            .locate(Path::new("/p"))
            .unwrap_err();
        assert!(matches!(
            err,
            ModsmithError::Application(ApplicationError::MalformedProjectConfig { .. })
        ));
    }
}
