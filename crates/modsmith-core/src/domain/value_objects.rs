//! Domain value objects: TemplateKind, ComponentKind and the attribute
//! enums used by component options.
//!
//! These are plain `Copy` value types with string forms and `FromStr`
//! parsers. Anything that touches generated text lives in the adapters.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateKind ─────────────────────────────────────────────────────────────

/// A project skeleton choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Basic,
    Item,
    Qol,
    Empty,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [Self::Basic, Self::Item, Self::Qol, Self::Empty];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Item => "item",
            Self::Qol => "qol",
            Self::Empty => "empty",
        }
    }

    /// One-line description shown by `list` and the interactive picker.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Basic mod with an example sword and recipe",
            Self::Item => "Item-focused mod with a sword and a bow",
            Self::Qol => "Quality-of-life mod with an empty entry point",
            Self::Empty => "Empty mod with only the entry class",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "item" | "items" => Ok(Self::Item),
            "qol" => Ok(Self::Qol),
            "empty" => Ok(Self::Empty),
            other => Err(DomainError::UnknownTemplateKind {
                kind: other.to_string(),
            }),
        }
    }
}

// ── ComponentKind ─────────────────────────────────────────────────────────────

/// A unit of content that can be added to an existing mod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Item,
    Mob,
    Tile,
    Buff,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [Self::Item, Self::Mob, Self::Tile, Self::Buff];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Mob => "mob",
            Self::Tile => "tile",
            Self::Buff => "buff",
        }
    }

    /// Directory under the source root that holds this kind's classes.
    pub const fn subdir(&self) -> &'static str {
        match self {
            Self::Item => "items",
            Self::Mob => "mobs",
            Self::Tile => "tiles",
            Self::Buff => "buffs",
        }
    }

    /// Suffix appended to the class name. Items carry none.
    pub const fn class_suffix(&self) -> &'static str {
        match self {
            Self::Item => "",
            Self::Mob => "Mob",
            Self::Tile => "Tile",
            Self::Buff => "Buff",
        }
    }

    /// Category prefix used for locale keys (`item.<id>=`).
    pub const fn locale_category(&self) -> &'static str {
        self.as_str()
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Item => "Weapon, tool, armor, consumable or material",
            Self::Mob => "Hostile creature",
            Self::Tile => "Placeable world tile",
            Self::Buff => "Status effect (buff or debuff)",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "item" => Ok(Self::Item),
            "mob" => Ok(Self::Mob),
            "tile" => Ok(Self::Tile),
            "buff" | "debuff" => Ok(Self::Buff),
            other => Err(DomainError::UnknownComponentKind {
                kind: other.to_string(),
            }),
        }
    }
}

// ── Item attributes ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Weapon,
    Tool,
    Armor,
    Consumable,
    Material,
}

impl ItemType {
    pub const ALL: [ItemType; 5] = [
        Self::Weapon,
        Self::Tool,
        Self::Armor,
        Self::Consumable,
        Self::Material,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::Tool => "tool",
            Self::Armor => "armor",
            Self::Consumable => "consumable",
            Self::Material => "material",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weapon" => Ok(Self::Weapon),
            "tool" => Ok(Self::Tool),
            "armor" | "armour" => Ok(Self::Armor),
            "consumable" => Ok(Self::Consumable),
            "material" => Ok(Self::Material),
            other => Err(DomainError::InvalidOption {
                field: "type",
                reason: format!("unknown item type '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Self::Common,
        Self::Uncommon,
        Self::Rare,
        Self::Epic,
        Self::Legendary,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    /// Constant name of the matching `ItemRarity` enum entry in Java.
    pub const fn java_constant(&self) -> &'static str {
        match self {
            Self::Common => "COMMON",
            Self::Uncommon => "UNCOMMON",
            Self::Rare => "RARE",
            Self::Epic => "EPIC",
            Self::Legendary => "LEGENDARY",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "common" => Ok(Self::Common),
            "uncommon" => Ok(Self::Uncommon),
            "rare" => Ok(Self::Rare),
            "epic" => Ok(Self::Epic),
            "legendary" => Ok(Self::Legendary),
            other => Err(DomainError::InvalidOption {
                field: "rarity",
                reason: format!("unknown rarity '{other}'"),
            }),
        }
    }
}

// ── Tile attributes ──────────────────────────────────────────────────────────

/// Tool required to break a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Pickaxe,
    Axe,
    Shovel,
}

impl ToolType {
    pub const ALL: [ToolType; 3] = [Self::Pickaxe, Self::Axe, Self::Shovel];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pickaxe => "pickaxe",
            Self::Axe => "axe",
            Self::Shovel => "shovel",
        }
    }

    pub const fn java_constant(&self) -> &'static str {
        match self {
            Self::Pickaxe => "PICKAXE",
            Self::Axe => "AXE",
            Self::Shovel => "SHOVEL",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickaxe" => Ok(Self::Pickaxe),
            "axe" => Ok(Self::Axe),
            "shovel" => Ok(Self::Shovel),
            other => Err(DomainError::InvalidOption {
                field: "tool",
                reason: format!("unknown tool type '{other}'"),
            }),
        }
    }
}
