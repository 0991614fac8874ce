//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use modsmith_core::domain::{ComponentKind, ItemType, Rarity, TemplateKind, ToolType};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "modsmith",
    bin_name = "modsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2692} Necesse mod scaffolding",
    long_about = "Modsmith generates Gradle-based Necesse mod projects and \
                  adds items, mobs, tiles and buffs to existing ones.",
    after_help = "EXAMPLES:\n\
        \x20 modsmith new \"My Mod\" --author Ada --template item\n\
        \x20 modsmith add item --name \"Fire Sword\" --type weapon --damage 40\n\
        \x20 modsmith list\n\
        \x20 modsmith completions bash > /usr/share/bash-completion/completions/modsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new mod project.
    #[command(
        visible_alias = "n",
        about = "Create a new mod project",
        after_help = "EXAMPLES:\n\
            \x20 modsmith new \"My Mod\"\n\
            \x20 modsmith new \"My Mod\" --mod-id mymod --template qol --no-git\n\
            \x20 modsmith new --interactive"
    )]
    New(NewArgs),

    /// Add a component to the mod in the current directory.
    #[command(
        visible_alias = "a",
        about = "Add an item, mob, tile or buff",
        after_help = "EXAMPLES:\n\
            \x20 modsmith add item --name \"Fire Sword\" --type weapon --rarity epic\n\
            \x20 modsmith add mob  --name \"Cave Bat\" --health 80 --speed 45\n\
            \x20 modsmith add tile --name Marble --tool pickaxe\n\
            \x20 modsmith add buff --name Poisoned --debuff --duration 5\n\
            \x20 modsmith add      # pick interactively"
    )]
    Add(AddArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 modsmith list\n\
            \x20 modsmith list --format json"
    )]
    List(ListArgs),

    /// Initialise a Modsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 modsmith init           # platform config directory\n\
            \x20 modsmith init --local   # ./modsmith.toml\n\
            \x20 modsmith init --force   # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 modsmith completions bash > ~/.local/share/bash-completion/completions/modsmith\n\
            \x20 modsmith completions zsh  > ~/.zfunc/_modsmith\n\
            \x20 modsmith completions fish > ~/.config/fish/completions/modsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Modsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 modsmith config get defaults.author\n\
            \x20 modsmith config list\n\
            \x20 modsmith config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `modsmith new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Display name of the mod. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Mod display name")]
    pub name: Option<String>,

    #[arg(
        long = "mod-id",
        value_name = "ID",
        help = "Mod id, lowercase letters and digits (default: derived from name)"
    )]
    pub mod_id: Option<String>,

    #[arg(long, value_name = "AUTHOR", help = "Author name")]
    pub author: Option<String>,

    #[arg(long, value_name = "TEXT", help = "Short mod description")]
    pub description: Option<String>,

    #[arg(
        long = "game-dir",
        value_name = "DIR",
        help = "Necesse install directory (containing Necesse.jar)"
    )]
    pub game_dir: Option<String>,

    #[arg(long = "game-version", value_name = "VERSION", help = "Target game version")]
    pub game_version: Option<String>,

    #[arg(long = "mod-version", value_name = "VERSION", help = "Initial mod version")]
    pub mod_version: Option<String>,

    #[arg(long, help = "Mark the mod as client-side only")]
    pub clientside: bool,

    #[arg(
        short = 't',
        long,
        value_enum,
        value_name = "TEMPLATE",
        help = "Project template"
    )]
    pub template: Option<TemplateArg>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    #[arg(long = "no-vscode", help = "Skip .vscode configuration")]
    pub no_vscode: bool,

    #[arg(long = "no-git", help = "Skip git repository initialization")]
    pub no_git: bool,

    #[arg(long = "no-wrapper", help = "Skip the Gradle wrapper properties file")]
    pub no_wrapper: bool,

    #[arg(short = 'i', long, help = "Prompt for every option")]
    pub interactive: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `modsmith add`.
#[derive(Debug, Default, Args)]
pub struct AddArgs {
    /// Component kind. Picked interactively when omitted.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: Option<ComponentArg>,

    #[arg(short = 'n', long, value_name = "NAME", help = "Component display name")]
    pub name: Option<String>,

    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Start the project search here (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    // item
    #[arg(long = "type", value_enum, value_name = "TYPE", help = "Item type")]
    pub item_type: Option<ItemTypeArg>,

    #[arg(long, value_enum, value_name = "RARITY", help = "Item rarity")]
    pub rarity: Option<RarityArg>,

    #[arg(long, value_name = "N", help = "Damage (weapons and mobs)")]
    pub damage: Option<u32>,

    #[arg(long = "armor", value_name = "N", help = "Armor value (armor items)")]
    pub armor: Option<u32>,

    #[arg(long = "stack-size", value_name = "N", help = "Maximum stack size")]
    pub stack_size: Option<u32>,

    // mob
    #[arg(long, value_name = "N", help = "Mob health")]
    pub health: Option<u32>,

    #[arg(long, value_name = "N", help = "Mob movement speed")]
    pub speed: Option<f32>,

    #[arg(long, help = "Mark the mob as a boss")]
    pub boss: bool,

    // tile
    #[arg(long = "non-solid", help = "Tile can be walked through")]
    pub non_solid: bool,

    #[arg(long, value_enum, value_name = "TOOL", help = "Tool required to mine the tile")]
    pub tool: Option<ToolArg>,

    #[arg(long = "no-drop", help = "Tile does not drop itself when mined")]
    pub no_drop: bool,

    // buff
    #[arg(long, help = "Make the buff a debuff")]
    pub debuff: bool,

    #[arg(long, value_name = "SECONDS", help = "Default buff duration")]
    pub duration: Option<u32>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `modsmith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `modsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `modsmith.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `modsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `modsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateArg {
    Basic,
    Item,
    Qol,
    Empty,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Basic => Self::Basic,
            TemplateArg::Item => Self::Item,
            TemplateArg::Qol => Self::Qol,
            TemplateArg::Empty => Self::Empty,
        }
    }
}

/// Component kinds for `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ComponentArg {
    Item,
    Mob,
    Tile,
    Buff,
}

impl From<ComponentArg> for ComponentKind {
    fn from(arg: ComponentArg) -> Self {
        match arg {
            ComponentArg::Item => Self::Item,
            ComponentArg::Mob => Self::Mob,
            ComponentArg::Tile => Self::Tile,
            ComponentArg::Buff => Self::Buff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ItemTypeArg {
    Weapon,
    Tool,
    /// Also accepted as `armour`.
    #[value(alias = "armour")]
    Armor,
    Consumable,
    Material,
}

impl From<ItemTypeArg> for ItemType {
    fn from(arg: ItemTypeArg) -> Self {
        match arg {
            ItemTypeArg::Weapon => Self::Weapon,
            ItemTypeArg::Tool => Self::Tool,
            ItemTypeArg::Armor => Self::Armor,
            ItemTypeArg::Consumable => Self::Consumable,
            ItemTypeArg::Material => Self::Material,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RarityArg {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl From<RarityArg> for Rarity {
    fn from(arg: RarityArg) -> Self {
        match arg {
            RarityArg::Common => Self::Common,
            RarityArg::Uncommon => Self::Uncommon,
            RarityArg::Rare => Self::Rare,
            RarityArg::Epic => Self::Epic,
            RarityArg::Legendary => Self::Legendary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ToolArg {
    Pickaxe,
    Axe,
    Shovel,
}

impl From<ToolArg> for ToolType {
    fn from(arg: ToolArg) -> Self {
        match arg {
            ToolArg::Pickaxe => Self::Pickaxe,
            ToolArg::Axe => Self::Axe,
            ToolArg::Shovel => Self::Shovel,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from([
            "modsmith",
            "new",
            "My Mod",
            "--mod-id",
            "mymod",
            "--template",
            "qol",
            "--no-git",
        ]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert_eq!(args.name.as_deref(), Some("My Mod"));
        assert_eq!(args.mod_id.as_deref(), Some("mymod"));
        assert_eq!(args.template, Some(TemplateArg::Qol));
        assert!(args.no_git);
        assert!(!args.no_vscode);
    }

    #[test]
    fn new_without_name_parses() {
        let cli = Cli::parse_from(["modsmith", "new"]);
        let Commands::New(args) = cli.command else {
            panic!("expected New command");
        };
        assert!(args.name.is_none());
    }

    #[test]
    fn parse_add_item() {
        let cli = Cli::parse_from([
            "modsmith", "add", "item", "--name", "Fire Sword", "--type", "weapon", "--rarity",
            "epic", "--damage", "40",
        ]);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert_eq!(args.kind, Some(ComponentArg::Item));
        assert_eq!(args.item_type, Some(ItemTypeArg::Weapon));
        assert_eq!(args.rarity, Some(RarityArg::Epic));
        assert_eq!(args.damage, Some(40));
    }

    #[test]
    fn armour_alias() {
        let cli = Cli::parse_from(["modsmith", "add", "item", "--type", "armour"]);
        let Commands::Add(args) = cli.command else {
            panic!("expected Add command");
        };
        assert_eq!(args.item_type, Some(ItemTypeArg::Armor));
    }

    #[test]
    fn unknown_component_kind_is_rejected() {
        assert!(Cli::try_parse_from(["modsmith", "add", "npc"]).is_err());
    }

    #[test]
    fn value_enums_map_to_core() {
        assert_eq!(TemplateKind::from(TemplateArg::Empty), TemplateKind::Empty);
        assert_eq!(ComponentKind::from(ComponentArg::Tile), ComponentKind::Tile);
        assert_eq!(Rarity::from(RarityArg::Legendary), Rarity::Legendary);
        assert_eq!(ToolType::from(ToolArg::Axe), ToolType::Axe);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["modsmith", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
