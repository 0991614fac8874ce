use crate::domain::{
    entities::{ComponentOptions, ProjectConfig},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities validate themselves; services call through here so the checks
/// run at one well-known point before any I/O.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_config(config: &ProjectConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_component(options: &ComponentOptions) -> Result<(), DomainError> {
        options.validate()
    }
}
