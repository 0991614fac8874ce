use std::path::{Path, PathBuf};

use crate::domain::value_objects::ComponentKind;

/// A located, fully resolved existing mod project.
///
/// Only the locator constructs these, and only once every field has been
/// resolved; there is no partially filled variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingProjectContext {
    root_dir: PathBuf,
    mod_id: String,
    mod_name: String,
    namespace: String,
    source_dir: PathBuf,
    resources_dir: PathBuf,
}

impl ExistingProjectContext {
    pub fn new(
        root_dir: impl Into<PathBuf>,
        mod_id: impl Into<String>,
        mod_name: impl Into<String>,
        namespace: impl Into<String>,
        source_dir: impl Into<PathBuf>,
        resources_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root_dir: root_dir.into(),
            mod_id: mod_id.into(),
            mod_name: mod_name.into(),
            namespace: namespace.into(),
            source_dir: source_dir.into(),
            resources_dir: resources_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }
    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }
    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }
    /// Java package of the mod; equal to the mod id for generated projects.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// `<resources>/locale/en.lang`.
    pub fn locale_file(&self) -> PathBuf {
        self.resources_dir.join("locale").join("en.lang")
    }

    /// `<source>/<kind subdir>`, e.g. `src/main/java/mymod/mobs`.
    pub fn component_dir(&self, kind: ComponentKind) -> PathBuf {
        self.source_dir.join(kind.subdir())
    }

    /// Java package for a component kind, e.g. `mymod.mobs`.
    pub fn component_package(&self, kind: ComponentKind) -> String {
        format!("{}.{}", self.namespace, kind.subdir())
    }
}
