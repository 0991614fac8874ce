// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Selector Errors
    // ========================================================================
    #[error("Unknown template kind '{kind}'")]
    UnknownTemplateKind { kind: String },

    #[error("Unknown component kind '{kind}'")]
    UnknownComponentKind { kind: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Invalid mod id '{id}': must be lowercase alphanumeric only")]
    InvalidModId { id: String },

    #[error("Mod name cannot be empty")]
    EmptyModName,

    #[error("Component name cannot be empty")]
    EmptyComponentName,

    #[error("Invalid value for '{field}': {reason}")]
    InvalidOption { field: &'static str, reason: String },

    // ========================================================================
    // File Set Errors
    // ========================================================================
    #[error("Duplicate path in file set: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTemplateKind { kind } => vec![
                format!("'{}' is not a known template", kind),
                "Available templates: basic, item, qol, empty".into(),
                "Try: modsmith list".into(),
            ],
            Self::UnknownComponentKind { kind } => vec![
                format!("'{}' is not a known component", kind),
                "Available components: item, mob, tile, buff".into(),
            ],
            Self::InvalidModId { id } => vec![
                format!("Mod id '{}' contains invalid characters", id),
                "Use only lowercase letters and digits, e.g. 'mymod'".into(),
                "Pass it explicitly with --mod-id".into(),
            ],
            Self::EmptyModName => vec![
                "Provide a mod name, e.g. modsmith new \"My Mod\"".into(),
            ],
            Self::EmptyComponentName => vec!["Provide a name with --name".into()],
            Self::InvalidOption { field, reason } => vec![
                format!("Check the value given for '{}': {}", field, reason),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
