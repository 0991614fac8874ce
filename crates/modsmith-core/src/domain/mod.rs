//! Core domain layer for Modsmith.
//!
//! Pure data and rules for generating Necesse mods. All I/O and rendering
//! concerns are reached through ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, process or network calls
//! - **No logging**: tracing belongs to the application and CLI layers
//! - **Immutable entities**: configs and contexts are built once, then read
//!
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;
pub mod value_objects;

mod validation;

pub use entities::{
    AddedComponent, BuffOptions, ComponentOptions, ExistingProjectContext, ItemOptions,
    LocaleOutcome, MobOptions, ProjectConfig, ProjectConfigBuilder, TemplateFileSet,
    TileOptions,
};

pub use error::{DomainError, ErrorCategory};

pub use layout::{GAME_ARCHIVE, MARKER_FILE, MOD_ID_KEY, MOD_NAME_KEY};

pub use value_objects::{ComponentKind, ItemType, Rarity, TemplateKind, ToolType};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn template_kind_parses_correctly() {
        assert_eq!(TemplateKind::from_str("basic").unwrap(), TemplateKind::Basic);
        assert_eq!(TemplateKind::from_str("QOL").unwrap(), TemplateKind::Qol);
        assert_eq!(
            TemplateKind::from_str("fancy").unwrap_err(),
            DomainError::UnknownTemplateKind {
                kind: "fancy".into()
            }
        );
    }

    #[test]
    fn template_kind_round_trips_through_display() {
        for kind in TemplateKind::ALL {
            assert_eq!(TemplateKind::from_str(&kind.to_string()).unwrap(), kind);
            assert!(!kind.description().is_empty());
        }
    }

    #[test]
    fn component_kind_metadata() {
        assert_eq!(ComponentKind::Item.subdir(), "items");
        assert_eq!(ComponentKind::Mob.subdir(), "mobs");
        assert_eq!(ComponentKind::Tile.class_suffix(), "Tile");
        assert_eq!(ComponentKind::Item.class_suffix(), "");
        assert!(matches!(
            ComponentKind::from_str("npc"),
            Err(DomainError::UnknownComponentKind { .. })
        ));
    }

    #[test]
    fn rarity_maps_to_java_constant() {
        assert_eq!(Rarity::from_str("Epic").unwrap().java_constant(), "EPIC");
        assert_eq!(Rarity::default(), Rarity::Common);
        assert!(Rarity::from_str("mythic").is_err());
    }

    #[test]
    fn tool_type_defaults_to_pickaxe() {
        assert_eq!(ToolType::default(), ToolType::Pickaxe);
        assert_eq!(ToolType::from_str("axe").unwrap().java_constant(), "AXE");
    }

    #[test]
    fn item_type_accepts_british_spelling() {
        assert_eq!(ItemType::from_str("armour").unwrap(), ItemType::Armor);
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_accepts_built_config() {
        let cfg = ProjectConfig::builder("My Mod").build().unwrap();
        assert!(DomainValidator::validate_config(&cfg).is_ok());
    }

    #[test]
    fn validator_rejects_nameless_component() {
        let opts = ComponentOptions::Tile(TileOptions::new(""));
        assert_eq!(
            DomainValidator::validate_component(&opts),
            Err(DomainError::EmptyComponentName)
        );
    }

    #[test]
    fn error_categories() {
        assert_eq!(DomainError::EmptyModName.category(), ErrorCategory::Validation);
        assert_eq!(
            DomainError::DuplicatePath { path: "a".into() }.category(),
            ErrorCategory::Internal
        );
        assert!(!DomainError::InvalidModId { id: "A".into() }
            .suggestions()
            .is_empty());
    }
}
