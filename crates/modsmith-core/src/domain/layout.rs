//! Fixed names of the generated Gradle project.
//!
//! The template bundle writes these and the locator reads them back, so
//! both sides import them from here.

/// Build file whose presence marks a project root.
pub const MARKER_FILE: &str = "build.gradle";

/// Assignment that carries the mod id inside [`MARKER_FILE`].
pub const MOD_ID_KEY: &str = "project.ext.modID";

/// Assignment that carries the display name inside [`MARKER_FILE`].
pub const MOD_NAME_KEY: &str = "project.ext.modName";

/// Game archive every mod build references.
pub const GAME_ARCHIVE: &str = "Necesse.jar";

pub const SETTINGS_FILE: &str = "settings.gradle";

pub const JAVA_ROOT: &str = "src/main/java";
pub const RESOURCES_ROOT: &str = "src/main/resources";

/// Locale file relative to the resources directory.
pub const LOCALE_FILE: &str = "locale/en.lang";

pub const EDITOR_DIR: &str = ".vscode";

/// `src/main/java/<mod_id>`.
pub fn source_dir(mod_id: &str) -> String {
    format!("{JAVA_ROOT}/{mod_id}")
}

/// `src/main/resources/locale/en.lang`.
pub fn locale_path() -> String {
    format!("{RESOURCES_ROOT}/{LOCALE_FILE}")
}

/// Path of the entry class, e.g. `src/main/java/mymod/MymodMod.java`.
pub fn main_class_path(mod_id: &str) -> String {
    format!(
        "{}/{}.java",
        source_dir(mod_id),
        crate::domain::naming::main_class_name(mod_id)
    )
}
