//! Java skeletons for components added to an existing mod.

use modsmith_core::{
    application::ports::RenderedComponent,
    domain::{
        BuffOptions, ComponentOptions, ExistingProjectContext, ItemOptions, ItemType, MobOptions,
        TileOptions,
    },
    error::ModsmithResult,
};

use super::vars::RenderVars;

const ITEM: &str = r#"package {{PACKAGE}};

{{IMPORTS}}

public class {{CLASS}} extends {{BASE}} {

    public {{CLASS}}() {
        super({{STACK_SIZE}});
        this.rarity = ItemRarity.{{RARITY}};
{{STATS}}    }

    @Override
    public String getTranslatedTypeName() {
        return "item";
    }
}
"#;

const MOB: &str = r#"package {{PACKAGE}};

import java.awt.Rectangle;
import necesse.entity.mobs.MobDrawable;
import necesse.entity.mobs.hostile.HostileMob;
import necesse.gfx.camera.GameCamera;

public class {{CLASS}} extends HostileMob {
{{BOSS}}
    public {{CLASS}}() {
        super({{HEALTH}});
        this.setSpeed({{SPEED}}f);
        this.setArmor(0);
        this.collision = new Rectangle(-10, -7, 20, 14);
        this.hitBox = new Rectangle(-14, -12, 28, 24);
    }

    @Override
    public void init() {
        super.init();
        // Add AI behaviors here
    }

    @Override
    public void draw(GameCamera camera, MobDrawable drawable) {
        super.draw(camera, drawable);
    }

    @Override
    public int getDefaultDamage() {
        return {{DAMAGE}};
    }
}
"#;

const TILE: &str = r#"package {{PACKAGE}};

import necesse.gfx.gameTexture.GameTexture;
import necesse.level.maps.Level;
import necesse.level.maps.Tile;

public class {{CLASS}} extends Tile {

    public static final boolean DROPS_SELF = {{DROPS_SELF}};

    public {{CLASS}}() {
        super("{{ID}}");
        this.isSolid = {{SOLID}};
        this.roomProperties.canPlaceWallpapers = false;
    }

    @Override
    public void loadTextures() {
        super.loadTextures();
        // Load your custom texture here
    }

    @Override
    public boolean canPlaceOnLiquid() {
        return false;
    }

    @Override
    public int getToolType() {
        return {{TOOL}};
    }

    @Override
    public void drawPreview(Level level, int tileX, int tileY, GameTexture texture) {
        super.drawPreview(level, tileX, tileY, texture);
    }
}
"#;

const BUFF: &str = r#"package {{PACKAGE}};

import necesse.entity.mobs.Mob;
import necesse.entity.mobs.buffs.Buff;
import necesse.entity.mobs.buffs.BuffEventSubscriber;
import necesse.entity.mobs.buffs.BuffModifiers;

public class {{CLASS}} extends Buff {

    public static final int DEFAULT_DURATION_SECONDS = {{DURATION}};

    public {{CLASS}}() {
        this.isImportant = {{IMPORTANT}};
        this.canCancel = {{CAN_CANCEL}};
    }

    @Override
    public void init(Mob mob, BuffEventSubscriber subscriber) {
        super.init(mob, subscriber);
    }

    @Override
    public void onUpdate(Mob mob) {
        super.onUpdate(mob);
        // Add buff effects here
    }

    @Override
    public void getModifiers(BuffModifiers modifiers) {
        super.getModifiers(modifiers);
        // Modify mob stats here, e.g. modifiers.speed += 0.2f;
    }
}
"#;

pub fn render(
    context: &ExistingProjectContext,
    options: &ComponentOptions,
) -> ModsmithResult<RenderedComponent> {
    let class = options.class_name();
    let base = RenderVars::new()
        .set("PACKAGE", context.component_package(options.kind()))
        .set("CLASS", class.clone())
        .set("ID", options.id());

    let content = match options {
        ComponentOptions::Item(o) => item(base, o)?,
        ComponentOptions::Mob(o) => mob(base, o)?,
        ComponentOptions::Tile(o) => tile(base, o)?,
        ComponentOptions::Buff(o) => buff(base, o)?,
    };

    Ok(RenderedComponent {
        file_name: format!("{class}.java"),
        content,
    })
}

fn item(vars: RenderVars, o: &ItemOptions) -> ModsmithResult<String> {
    let (base, imports): (&str, &[&str]) = match o.item_type {
        ItemType::Weapon | ItemType::Tool => (
            "ToolItem",
            &[
                "necesse.inventory.item.ItemRarity",
                "necesse.inventory.item.toolItem.ToolItem",
                "necesse.inventory.item.toolItem.ToolType",
            ],
        ),
        ItemType::Armor => (
            "ArmorItem",
            &[
                "necesse.entity.mobs.PlayerMob",
                "necesse.inventory.item.ItemRarity",
                "necesse.inventory.item.armorItem.ArmorItem",
            ],
        ),
        ItemType::Consumable => (
            "ConsumableItem",
            &[
                "necesse.inventory.item.ItemRarity",
                "necesse.inventory.item.consumableItem.ConsumableItem",
            ],
        ),
        ItemType::Material => (
            "Item",
            &[
                "necesse.inventory.item.Item",
                "necesse.inventory.item.ItemRarity",
            ],
        ),
    };

    let mut stats = String::new();
    match (o.item_type, o.damage, o.armor_value) {
        (ItemType::Weapon, Some(damage), _) => {
            stats.push_str(&format!("        this.damage = {damage};\n"));
            stats.push_str("        this.attackSpeed = 1000; // Adjust as needed\n");
        }
        (ItemType::Armor, _, Some(armor)) => {
            stats.push_str(&format!("        this.armorValue = {armor};\n"));
        }
        _ => {}
    }

    let imports = imports
        .iter()
        .map(|i| format!("import {i};"))
        .collect::<Vec<_>>()
        .join("\n");

    vars.set("IMPORTS", imports)
        .set("BASE", base)
        .set("STACK_SIZE", o.stack_size.to_string())
        .set("RARITY", o.rarity.java_constant())
        .set("STATS", stats)
        .render(ITEM)
}

fn mob(vars: RenderVars, o: &MobOptions) -> ModsmithResult<String> {
    let boss = if o.boss {
        "\n    // Boss mob: give it a health bar and a boss loot table\n"
    } else {
        ""
    };
    vars.set("HEALTH", o.health.to_string())
        .set("SPEED", format!("{:.1}", o.speed))
        .set("DAMAGE", o.damage.to_string())
        .set("BOSS", boss)
        .render(MOB)
}

fn tile(vars: RenderVars, o: &TileOptions) -> ModsmithResult<String> {
    vars.set("SOLID", o.solid.to_string())
        .set("TOOL", o.tool.java_constant())
        .set("DROPS_SELF", o.drops_self.to_string())
        .render(TILE)
}

fn buff(vars: RenderVars, o: &BuffOptions) -> ModsmithResult<String> {
    vars.set("IMPORTANT", o.debuff.to_string())
        .set("CAN_CANCEL", (!o.debuff).to_string())
        .set("DURATION", o.duration.to_string())
        .render(BUFF)
}
