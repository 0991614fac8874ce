//! Implementation of the `modsmith add` command.
//!
//! Locates the enclosing mod, turns flags (or prompt answers) into
//! `ComponentOptions`, and hands them to the core component service.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use modsmith_adapters::{BuiltinTemplates, LocalFilesystem};
use modsmith_core::{
    application::{ComponentService, ProjectLocator},
    domain::{
        AddedComponent, BuffOptions, ComponentKind, ComponentOptions, ExistingProjectContext,
        ItemOptions, ItemType, LocaleOutcome, MobOptions, Rarity, TileOptions, ToolType,
    },
};

use crate::{
    cli::{AddArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

#[derive(Serialize)]
struct AddReport<'a> {
    kind: ComponentKind,
    class_name: &'a str,
    id: &'a str,
    source_path: &'a Path,
    locale: &'static str,
    locale_entry: Option<&'a str>,
    registration: String,
    texture_hint: &'a str,
}

/// Execute the `modsmith add` command.
#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute(args: AddArgs, output: OutputManager) -> CliResult<()> {
    let start = resolve_start_dir(args.dir.as_deref())?;
    let locator = ProjectLocator::new(Box::new(LocalFilesystem::new()));
    let context = locator.locate(&start)?;
    info!(
        mod_id = %context.mod_id(),
        root = %context.root_dir().display(),
        "Project located"
    );

    let options = match (args.kind, args.name.as_deref()) {
        (Some(kind), Some(name)) => options_from_flags(kind.into(), name, &args),
        (kind, name) => prompt_options(kind.map(Into::into), name, &args)?,
    };

    let service = ComponentService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
    );
    let added = service.add(&context, &options)?;

    print_report(&added, &context, &output)
}

/// `--dir` or the working directory, made absolute so the upward walk can
/// reach the filesystem root.
fn resolve_start_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    let start = match dir {
        Some(d) => d.to_path_buf(),
        None => std::env::current_dir()?,
    };
    start
        .canonicalize()
        .map_err(|e| CliError::InvalidInput {
            message: format!("cannot access directory '{}'", start.display()),
            source: Some(Box::new(e)),
        })
}

fn options_from_flags(kind: ComponentKind, name: &str, args: &AddArgs) -> ComponentOptions {
    match kind {
        ComponentKind::Item => {
            let item_type: ItemType = args.item_type.map(Into::into).unwrap_or_default();
            let mut o = ItemOptions::new(name, item_type);
            if let Some(rarity) = args.rarity {
                o.rarity = rarity.into();
            }
            if args.damage.is_some() {
                o.damage = args.damage;
            }
            if args.armor.is_some() {
                o.armor_value = args.armor;
            }
            if let Some(stack) = args.stack_size {
                o.stack_size = stack;
            }
            ComponentOptions::Item(o)
        }
        ComponentKind::Mob => {
            let mut o = MobOptions::new(name);
            if let Some(health) = args.health {
                o.health = health;
            }
            if let Some(damage) = args.damage {
                o.damage = damage;
            }
            if let Some(speed) = args.speed {
                o.speed = speed;
            }
            o.boss = args.boss;
            ComponentOptions::Mob(o)
        }
        ComponentKind::Tile => {
            let mut o = TileOptions::new(name);
            o.solid = !args.non_solid;
            if let Some(tool) = args.tool {
                o.tool = tool.into();
            }
            o.drops_self = !args.no_drop;
            ComponentOptions::Tile(o)
        }
        ComponentKind::Buff => {
            let mut o = BuffOptions::new(name);
            o.debuff = args.debuff;
            if let Some(duration) = args.duration {
                o.duration = duration;
            }
            ComponentOptions::Buff(o)
        }
    }
}

/// Fill in whatever the flags left out, then confirm each per-kind option
/// with the flag value as the default.
fn prompt_options(
    kind: Option<ComponentKind>,
    name: Option<&str>,
    args: &AddArgs,
) -> CliResult<ComponentOptions> {
    let kind = match kind {
        Some(k) => k,
        None => {
            let choices = prompt::options(&ComponentKind::ALL, ComponentKind::description);
            prompt::choose("What do you want to add?", &choices, ComponentKind::Item)?
        }
    };
    let name = match name {
        Some(n) => n.to_owned(),
        None => prompt::required_text(&format!("{} name", capitalize(kind.as_str())), "")?,
    };

    let options = match options_from_flags(kind, &name, args) {
        ComponentOptions::Item(mut o) => {
            let types = prompt::options(&ItemType::ALL, |_| "");
            o.item_type = prompt::choose("Item type", &types, o.item_type)?;
            let fresh = ItemOptions::new(name.as_str(), o.item_type);
            let rarities = prompt::options(&Rarity::ALL, |_| "");
            o.rarity = prompt::choose("Rarity", &rarities, o.rarity)?;
            o.damage = match o.item_type {
                ItemType::Weapon => Some(prompt::number(
                    "Damage",
                    o.damage.or(fresh.damage).unwrap_or_default(),
                )?),
                _ => o.damage,
            };
            o.armor_value = match o.item_type {
                ItemType::Armor => Some(prompt::number(
                    "Armor value",
                    o.armor_value.or(fresh.armor_value).unwrap_or_default(),
                )?),
                _ => o.armor_value,
            };
            o.stack_size = prompt::number("Stack size", o.stack_size)?;
            ComponentOptions::Item(o)
        }
        ComponentOptions::Mob(mut o) => {
            o.health = prompt::number("Health", o.health)?;
            o.damage = prompt::number("Damage", o.damage)?;
            o.speed = prompt::number("Speed", o.speed)?;
            o.boss = prompt::confirm("Is it a boss?", o.boss)?;
            ComponentOptions::Mob(o)
        }
        ComponentOptions::Tile(mut o) => {
            o.solid = prompt::confirm("Solid?", o.solid)?;
            let tools = prompt::options(&ToolType::ALL, |_| "");
            o.tool = prompt::choose("Tool required", &tools, o.tool)?;
            o.drops_self = prompt::confirm("Drops itself when mined?", o.drops_self)?;
            ComponentOptions::Tile(o)
        }
        ComponentOptions::Buff(mut o) => {
            o.debuff = prompt::confirm("Is it a debuff?", o.debuff)?;
            o.duration = prompt::number("Duration (seconds)", o.duration)?;
            ComponentOptions::Buff(o)
        }
    };
    Ok(options)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Line to paste into the mod's `init()`.
fn registration_snippet(kind: ComponentKind, id: &str, class_name: &str) -> String {
    match kind {
        ComponentKind::Item => {
            format!("ItemRegistry.registerItem(\"{id}\", new {class_name}(), 10, true);")
        }
        ComponentKind::Mob => {
            format!("MobRegistry.registerMob(\"{id}\", {class_name}.class, true);")
        }
        ComponentKind::Tile => {
            format!("TileRegistry.registerTile(\"{id}\", new {class_name}(), 1, true);")
        }
        ComponentKind::Buff => format!("BuffRegistry.registerBuff(\"{id}\", new {class_name}());"),
    }
}

fn locale_label(outcome: &LocaleOutcome) -> &'static str {
    match outcome {
        LocaleOutcome::Appended => "appended",
        LocaleOutcome::Created => "created",
        LocaleOutcome::AlreadyPresent => "already_present",
        LocaleOutcome::Failed { .. } => "failed",
    }
}

fn print_report(
    added: &AddedComponent,
    context: &ExistingProjectContext,
    output: &OutputManager,
) -> CliResult<()> {
    let registration = registration_snippet(added.kind, &added.id, &added.class_name);

    if output.format() == OutputFormat::Json {
        let locale_entry = match &added.locale {
            LocaleOutcome::Failed { entry, .. } => Some(entry.as_str()),
            _ => None,
        };
        return Ok(output.json(&AddReport {
            kind: added.kind,
            class_name: &added.class_name,
            id: &added.id,
            source_path: &added.source_path,
            locale: locale_label(&added.locale),
            locale_entry,
            registration,
            texture_hint: &added.texture_hint,
        })?);
    }

    let root = context.root_dir();
    let relative = |p: &Path| p.strip_prefix(root).unwrap_or(p).display().to_string();
    let locale_file = context.locale_file();

    output.success(&format!(
        "Added {} '{}' ({})",
        added.kind, added.class_name, added.id
    ))?;
    output.print(&format!("  source: {}", relative(&added.source_path)))?;

    match &added.locale {
        LocaleOutcome::Appended => {
            output.info(&format!("Locale entry added to {}", relative(&locale_file)))?
        }
        LocaleOutcome::Created => output.info(&format!("Created {}", relative(&locale_file)))?,
        LocaleOutcome::AlreadyPresent => output.info(&format!(
            "Locale entry already present in {}",
            relative(&locale_file)
        ))?,
        LocaleOutcome::Failed { entry, reason } => {
            output.warning(&format!(
                "Could not update {}: {reason}",
                relative(&locale_file)
            ))?;
            output.warning(&format!("Add this line by hand: {entry}"))?;
        }
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Register it in your mod's init():")?;
        output.print(&format!(
            "  import {}.{};",
            context.component_package(added.kind),
            added.class_name
        ))?;
        output.print(&format!("  {registration}"))?;
        output.print("")?;
        output.print(&format!("Texture: src/main/{}", added.texture_hint))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ItemTypeArg, RarityArg, ToolArg};

    #[test]
    fn item_flags_apply() {
        let args = AddArgs {
            item_type: Some(ItemTypeArg::Armor),
            rarity: Some(RarityArg::Rare),
            armor: Some(12),
            stack_size: Some(4),
            ..AddArgs::default()
        };
        let ComponentOptions::Item(o) = options_from_flags(ComponentKind::Item, "Iron Helm", &args)
        else {
            panic!("expected item options");
        };
        assert_eq!(o.item_type, ItemType::Armor);
        assert_eq!(o.rarity, Rarity::Rare);
        assert_eq!(o.armor_value, Some(12));
        assert_eq!(o.stack_size, 4);
        assert_eq!(o.damage, None);
    }

    #[test]
    fn weapon_keeps_default_damage_without_flag() {
        let args = AddArgs {
            item_type: Some(ItemTypeArg::Weapon),
            ..AddArgs::default()
        };
        let ComponentOptions::Item(o) = options_from_flags(ComponentKind::Item, "Sword", &args)
        else {
            panic!("expected item options");
        };
        assert!(o.damage.is_some());
    }

    #[test]
    fn tile_negative_flags_invert_defaults() {
        let args = AddArgs {
            non_solid: true,
            no_drop: true,
            tool: Some(ToolArg::Shovel),
            ..AddArgs::default()
        };
        let ComponentOptions::Tile(o) = options_from_flags(ComponentKind::Tile, "Mud", &args)
        else {
            panic!("expected tile options");
        };
        assert!(!o.solid);
        assert!(!o.drops_self);
        assert_eq!(o.tool, ToolType::Shovel);
    }

    #[test]
    fn mob_and_buff_flags_apply() {
        let args = AddArgs {
            health: Some(500),
            damage: Some(25),
            speed: Some(45.5),
            boss: true,
            debuff: true,
            duration: Some(3),
            ..AddArgs::default()
        };
        let ComponentOptions::Mob(m) = options_from_flags(ComponentKind::Mob, "Cave Bat", &args)
        else {
            panic!("expected mob options");
        };
        assert_eq!((m.health, m.damage, m.boss), (500, 25, true));
        assert!((m.speed - 45.5).abs() < f32::EPSILON);

        let ComponentOptions::Buff(b) = options_from_flags(ComponentKind::Buff, "Poison", &args)
        else {
            panic!("expected buff options");
        };
        assert!(b.debuff);
        assert_eq!(b.duration, 3);
    }

    #[test]
    fn registration_snippets() {
        assert_eq!(
            registration_snippet(ComponentKind::Item, "firesword", "FireSword"),
            "ItemRegistry.registerItem(\"firesword\", new FireSword(), 10, true);"
        );
        assert_eq!(
            registration_snippet(ComponentKind::Mob, "cavebat", "CaveBatMob"),
            "MobRegistry.registerMob(\"cavebat\", CaveBatMob.class, true);"
        );
        assert_eq!(
            registration_snippet(ComponentKind::Tile, "marble", "MarbleTile"),
            "TileRegistry.registerTile(\"marble\", new MarbleTile(), 1, true);"
        );
        assert_eq!(
            registration_snippet(ComponentKind::Buff, "swift", "SwiftBuff"),
            "BuffRegistry.registerBuff(\"swift\", new SwiftBuff());"
        );
    }

    #[test]
    fn missing_start_dir_is_user_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = resolve_start_dir(Some(&dir.path().join("nope"))).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn start_dir_is_absolute() {
        let dir = tempfile::TempDir::new().unwrap();
        let start = resolve_start_dir(Some(dir.path())).unwrap();
        assert!(start.is_absolute());
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("mob"), "Mob");
        assert_eq!(capitalize(""), "");
    }
}
