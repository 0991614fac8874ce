//! The four project skeletons.
//!
//! `basic`, `qol` and `empty` each start from the common bundle and add an
//! entry class. `item` starts from `basic`, replaces its entry class and
//! locale file, and adds a bow.

use modsmith_core::{
    domain::{ProjectConfig, TemplateFileSet, layout},
    error::ModsmithResult,
};

use super::common::common_files;
use super::vars::{RenderVars, java_string};

const BASIC_MAIN: &str = r#"package {{MOD_ID}};

import necesse.engine.modLoader.annotations.ModEntry;
import necesse.engine.registries.ItemRegistry;
import necesse.engine.registries.RecipeTechRegistry;
import necesse.inventory.recipe.Ingredient;
import necesse.inventory.recipe.Recipe;
import necesse.inventory.recipe.Recipes;
import {{MOD_ID}}.items.ExampleSword;

@ModEntry
public class {{MAIN_CLASS}} {

    // Called first - register content (items, mobs, tiles, etc.)
    public void init() {
        System.out.println("{{MOD_NAME}} is loading...");

        ItemRegistry.registerItem("examplesword", new ExampleSword());

        System.out.println("{{MOD_NAME}} loaded successfully!");
    }

    // Called second - load resources (images, sounds, etc...)
    public void initResources() {

    }

    // Called last - everything is loaded, safe to reference any content
    public void postInit() {
        Recipes.registerModRecipe(new Recipe(
            "examplesword",
            1,
            RecipeTechRegistry.IRON_ANVIL,
            new Ingredient[]{
                new Ingredient("ironbar", 5),
                new Ingredient("anystone", 10)
            }
        ));
        System.out.println("{{MOD_NAME}} post-initialization complete!");
    }
}
"#;

const EXAMPLE_SWORD: &str = r#"package {{MOD_ID}}.items;

import necesse.inventory.item.Item;
import necesse.inventory.item.toolItem.swordToolItem.SwordToolItem;

public class ExampleSword extends SwordToolItem {

    public ExampleSword() {
        // Constructor: (enchantCost, lootTableCategory)
        super(500, null);

        this.rarity = Item.Rarity.COMMON;

        // Attack speed in milliseconds (300 is standard for swords)
        this.attackAnimTime.setBaseValue(300);

        // Attack damage (base and upgraded values)
        this.attackDamage.setBaseValue(25.0F).setUpgradedValue(1.0F, 80.0F);

        // Attack range in pixels
        this.attackRange.setBaseValue(60);

        this.knockback.setBaseValue(100);

        this.canBeUsedForRaids = true;
    }
}
"#;

const BASIC_LOCALE: &str = "[item]
examplesword=Example Sword
examplesworddesc=A powerful example weapon
";

const ITEM_MAIN: &str = r#"package {{MOD_ID}};

import necesse.engine.modLoader.annotations.ModEntry;
import necesse.engine.registries.ItemRegistry;
import necesse.engine.registries.RecipeTechRegistry;
import necesse.inventory.recipe.Ingredient;
import necesse.inventory.recipe.Recipe;
import necesse.inventory.recipe.Recipes;
import {{MOD_ID}}.items.ExampleBow;
import {{MOD_ID}}.items.ExampleSword;

@ModEntry
public class {{MAIN_CLASS}} {

    // Called first - register content (items, mobs, tiles, etc.)
    public void init() {
        System.out.println("{{MOD_NAME}} is loading...");

        ItemRegistry.registerItem("examplesword", new ExampleSword());
        ItemRegistry.registerItem("examplebow", new ExampleBow());

        System.out.println("{{MOD_NAME}} loaded successfully!");
    }

    // Called second - load resources, assets and data (images, sounds, json)
    public void initResources() {
        // Use this for loading resources only. Recipes are registered in postInit().
    }

    // Called last - everything is loaded, safe to reference any content
    public void postInit() {
        Recipes.registerModRecipe(new Recipe(
            "examplesword",
            1,
            RecipeTechRegistry.IRON_ANVIL,
            new Ingredient[]{
                new Ingredient("ironbar", 5),
                new Ingredient("anystone", 10)
            }
        ));

        Recipes.registerModRecipe(new Recipe(
            "examplebow",
            1,
            RecipeTechRegistry.WORKBENCH,
            new Ingredient[]{
                new Ingredient("wood", 20),
                new Ingredient("anystone", 5)
            }
        ));

        System.out.println("{{MOD_NAME}} post-initialization complete!");
    }
}
"#;

const EXAMPLE_BOW: &str = r#"package {{MOD_ID}}.items;

import necesse.inventory.item.Item;
import necesse.inventory.item.toolItem.bowToolItem.BowToolItem;

public class ExampleBow extends BowToolItem {

    public ExampleBow() {
        // Constructor: (enchantCost, lootTableCategory)
        super(500, null);

        this.rarity = Item.Rarity.UNCOMMON;

        // Attack speed in milliseconds
        this.attackAnimTime.setBaseValue(1000);

        // Arrow velocity
        this.velocity.setBaseValue(200);

        this.attackDamage.setBaseValue(20.0F).setUpgradedValue(1.0F, 60.0F);
    }
}
"#;

const ITEM_LOCALE: &str = "[item]
examplesword=Example Sword
examplebow=Example Bow

[itemdesc]
examplesword=A powerful example weapon
examplebow=A ranged weapon example
";

const QOL_MAIN: &str = r#"package {{MOD_ID}};

import necesse.engine.modLoader.annotations.ModEntry;

@ModEntry
public class {{MAIN_CLASS}} {

    // Called first - register content (items, mobs, tiles, etc.)
    public void init() {
        System.out.println("{{MOD_NAME}} - QOL improvements loading...");

        // Add your QOL features here, e.g. custom settings or game tweaks

        System.out.println("{{MOD_NAME}} - QOL features loaded!");
    }

    // Called second - load resources
    public void initResources() {
    }

    // Called last - everything is loaded, safe to reference any content
    public void postInit() {
        System.out.println("{{MOD_NAME}} - QOL post-initialization complete!");
    }
}
"#;

const EMPTY_MAIN: &str = r#"package {{MOD_ID}};

import necesse.engine.modLoader.annotations.ModEntry;

@ModEntry
public class {{MAIN_CLASS}} {

    // Called first - register content (items, mobs, tiles, etc.)
    public void init() {
        System.out.println("{{MOD_NAME}} loaded!");
    }

    // Called second - load resources
    public void initResources() {
    }

    // Called last - everything is loaded, safe to reference any content
    public void postInit() {
    }
}
"#;

fn java_vars(config: &ProjectConfig) -> RenderVars {
    RenderVars::new()
        .set("MOD_ID", config.mod_id())
        .set("MOD_NAME", java_string(config.mod_name()))
        .set("MAIN_CLASS", config.main_class_name())
}

fn items_path(config: &ProjectConfig, class: &str) -> String {
    format!("{}/items/{class}.java", layout::source_dir(config.mod_id()))
}

pub fn basic(config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
    let vars = java_vars(config);
    let mut files = common_files(config)?;
    files.insert(layout::main_class_path(config.mod_id()), vars.render(BASIC_MAIN)?)?;
    files.insert(items_path(config, "ExampleSword"), vars.render(EXAMPLE_SWORD)?)?;
    files.insert(layout::locale_path(), BASIC_LOCALE)?;
    Ok(files)
}

pub fn item(config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
    let vars = java_vars(config);
    let mut files = basic(config)?;
    files.replace(layout::main_class_path(config.mod_id()), vars.render(ITEM_MAIN)?)?;
    files.replace(layout::locale_path(), ITEM_LOCALE)?;
    files.insert(items_path(config, "ExampleBow"), vars.render(EXAMPLE_BOW)?)?;
    Ok(files)
}

pub fn qol(config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
    let mut files = common_files(config)?;
    files.insert(
        layout::main_class_path(config.mod_id()),
        java_vars(config).render(QOL_MAIN)?,
    )?;
    Ok(files)
}

pub fn empty(config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
    let mut files = common_files(config)?;
    files.insert(
        layout::main_class_path(config.mod_id()),
        java_vars(config).render(EMPTY_MAIN)?,
    )?;
    Ok(files)
}
