//! Component options and the report returned after adding one.
//!
//! Each variant of [`ComponentOptions`] carries the display name plus the
//! attributes its source skeleton needs. The shared derivations (class name,
//! id, locale entry) live on the enum so the four appenders stay identical.

use std::path::PathBuf;

use crate::domain::{
    error::DomainError,
    naming,
    value_objects::{ComponentKind, ItemType, Rarity, ToolType},
};

pub const DEFAULT_ITEM_DAMAGE: u32 = 10;
pub const DEFAULT_ARMOR_VALUE: u32 = 5;
pub const DEFAULT_STACK_SIZE: u32 = 1;
pub const DEFAULT_MOB_HEALTH: u32 = 100;
pub const DEFAULT_MOB_DAMAGE: u32 = 10;
pub const DEFAULT_MOB_SPEED: f32 = 30.0;
pub const DEFAULT_BUFF_DURATION: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemOptions {
    pub name: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    /// Only used for weapons.
    pub damage: Option<u32>,
    /// Only used for armor.
    pub armor_value: Option<u32>,
    pub stack_size: u32,
}

impl ItemOptions {
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        let (damage, armor_value) = match item_type {
            ItemType::Weapon => (Some(DEFAULT_ITEM_DAMAGE), None),
            ItemType::Armor => (None, Some(DEFAULT_ARMOR_VALUE)),
            _ => (None, None),
        };
        Self {
            name: name.into(),
            item_type,
            rarity: Rarity::default(),
            damage,
            armor_value,
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MobOptions {
    pub name: String,
    pub health: u32,
    pub damage: u32,
    pub speed: f32,
    pub boss: bool,
}

impl MobOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            health: DEFAULT_MOB_HEALTH,
            damage: DEFAULT_MOB_DAMAGE,
            speed: DEFAULT_MOB_SPEED,
            boss: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileOptions {
    pub name: String,
    pub solid: bool,
    pub tool: ToolType,
    pub drops_self: bool,
}

impl TileOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            solid: true,
            tool: ToolType::default(),
            drops_self: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuffOptions {
    pub name: String,
    pub debuff: bool,
    /// Default duration in seconds.
    pub duration: u32,
}

impl BuffOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            debuff: false,
            duration: DEFAULT_BUFF_DURATION,
        }
    }
}

/// Options for one component, tagged by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentOptions {
    Item(ItemOptions),
    Mob(MobOptions),
    Tile(TileOptions),
    Buff(BuffOptions),
}

impl ComponentOptions {
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Item(_) => ComponentKind::Item,
            Self::Mob(_) => ComponentKind::Mob,
            Self::Tile(_) => ComponentKind::Tile,
            Self::Buff(_) => ComponentKind::Buff,
        }
    }

    /// Display name as entered.
    pub fn name(&self) -> &str {
        match self {
            Self::Item(o) => &o.name,
            Self::Mob(o) => &o.name,
            Self::Tile(o) => &o.name,
            Self::Buff(o) => &o.name,
        }
    }

    /// Java class name including the kind suffix (`FireSword`, `StoneTile`).
    pub fn class_name(&self) -> String {
        format!(
            "{}{}",
            naming::to_class_name(self.name()),
            self.kind().class_suffix()
        )
    }

    /// Compact id used for registry and locale keys.
    pub fn id(&self) -> String {
        naming::to_id(self.name())
    }

    /// `"<kind>.<id>="`; the idempotence check searches for this.
    pub fn locale_key_prefix(&self) -> String {
        format!("{}.{}=", self.kind().locale_category(), self.id())
    }

    /// Full locale line without the trailing newline.
    ///
    /// The display name is written as-is; `=` and line breaks are not
    /// escaped.
    pub fn locale_entry(&self) -> String {
        format!("{}{}", self.locale_key_prefix(), self.name())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let class_name = naming::to_class_name(self.name());
        if class_name.is_empty() {
            return Err(DomainError::EmptyComponentName);
        }
        if !naming::is_java_identifier(&class_name) {
            return Err(DomainError::InvalidOption {
                field: "name",
                reason: format!(
                    "'{}' does not give a valid Java class name (got '{class_name}'); \
                     use letters, digits and spaces, starting with a letter",
                    self.name()
                ),
            });
        }
        match self {
            Self::Item(o) if o.stack_size == 0 => Err(DomainError::InvalidOption {
                field: "stack-size",
                reason: "must be at least 1".into(),
            }),
            Self::Mob(o) if o.health == 0 => Err(DomainError::InvalidOption {
                field: "health",
                reason: "must be at least 1".into(),
            }),
            Self::Mob(o) if !(o.speed.is_finite() && o.speed > 0.0) => {
                Err(DomainError::InvalidOption {
                    field: "speed",
                    reason: "must be a positive number".into(),
                })
            }
            _ => Ok(()),
        }
    }
}

/// Result of the idempotent locale append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// Entry appended to an existing file.
    Appended,
    /// File did not exist and was created with the entry.
    Created,
    /// The key prefix was already present; nothing written.
    AlreadyPresent,
    /// I/O failed; the entry must be added by hand.
    Failed { entry: String, reason: String },
}

impl LocaleOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// What an appender produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComponent {
    pub kind: ComponentKind,
    pub class_name: String,
    pub id: String,
    pub source_path: PathBuf,
    pub locale: LocaleOutcome,
    /// Where the user should drop the texture, relative to the project.
    pub texture_hint: String,
}
