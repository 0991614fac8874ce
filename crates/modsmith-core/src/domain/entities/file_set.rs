use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::error::DomainError;

/// Relative path -> full file content, as produced by one template render.
///
/// Paths use `/` separators and are always relative to the project root.
/// Keys are ordered, so iterating twice over equal sets yields the same
/// sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFileSet {
    files: BTreeMap<String, String>,
}

impl TemplateFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new file. Fails if the path is absolute or already present.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), DomainError> {
        let path = path.into();
        check_relative(&path)?;
        if self.files.contains_key(&path) {
            return Err(DomainError::DuplicatePath { path });
        }
        self.files.insert(path, content.into());
        Ok(())
    }

    /// Add or overwrite a file. Used when one template overlays another.
    ///
    /// Returns the previous content if the path was already present.
    pub fn replace(
        &mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Option<String>, DomainError> {
        let path = path.into();
        check_relative(&path)?;
        Ok(self.files.insert(path, content.into()))
    }

    pub fn with_file(
        mut self,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.insert(path, content)?;
        Ok(self)
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl IntoIterator for TemplateFileSet {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

fn check_relative(path: &str) -> Result<(), DomainError> {
    if path.starts_with('/') || path.starts_with('\\') || Path::new(path).is_absolute() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.to_string(),
        });
    }
    Ok(())
}
