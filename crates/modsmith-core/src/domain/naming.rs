//! Identifier normalisation.
//!
//! Maps a free-form display name ("Fire Sword", "fire-sword", "fire_sword")
//! onto the identifiers used inside generated Java sources and locale files.
//! All functions are total: empty input yields empty output.

/// Split on runs of whitespace, hyphens and underscores, dropping empties.
fn fragments(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|s| !s.is_empty())
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// `"fire sword"` -> `"FireSword"`.
pub fn to_class_name(name: &str) -> String {
    fragments(name).map(capitalise).collect()
}

/// `"fire sword"` -> `"fireSword"`.
pub fn to_variable_name(name: &str) -> String {
    let class = to_class_name(name);
    let mut chars = class.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"Fire Sword"` -> `"firesword"`.
pub fn to_id(name: &str) -> String {
    fragments(&name.to_lowercase()).collect()
}

/// ASCII Java identifier: a letter, `_` or `$`, then letters, digits, `_`
/// or `$`.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Remove every whitespace run: `"My Mod"` -> `"MyMod"`.
///
/// Used for the project directory and the Gradle root project name.
pub fn collapse_whitespace(name: &str) -> String {
    name.split_whitespace().collect()
}

/// Entry class for a mod id: `"mymod"` -> `"MymodMod"`.
pub fn main_class_name(mod_id: &str) -> String {
    let mut chars = mod_id.chars();
    match chars.next() {
        Some(first) => format!("{}{}Mod", first.to_uppercase(), chars.as_str()),
        None => "Mod".to_string(),
    }
}

/// Default mod id derived from a display name: lowercase, whitespace removed.
pub fn default_mod_id(mod_name: &str) -> String {
    collapse_whitespace(&mod_name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_from_spaced_words() {
        assert_eq!(to_class_name("fire sword"), "FireSword");
    }

    #[test]
    fn class_name_lowercases_tail_of_each_fragment() {
        assert_eq!(to_class_name("FIRE  sWORD"), "FireSword");
        assert_eq!(to_class_name("ice-cold_blade"), "IceColdBlade");
    }

    #[test]
    fn class_name_of_empty_is_empty() {
        assert_eq!(to_class_name(""), "");
        assert_eq!(to_class_name(" - _ "), "");
    }

    #[test]
    fn class_name_never_contains_separators() {
        for input in ["a b", "a--b", "a__b", " lead", "trail ", "x-y_z w", "\tt\nn"] {
            let out = to_class_name(input);
            assert!(
                !out.chars()
                    .any(|c| c.is_whitespace() || c == '-' || c == '_'),
                "separator left in {out:?} for {input:?}"
            );
        }
    }

    #[test]
    fn variable_name_lowercases_first_char() {
        assert_eq!(to_variable_name("Fire Sword"), "fireSword");
        assert_eq!(to_variable_name(""), "");
    }

    #[test]
    fn id_strips_separators_and_lowercases() {
        assert_eq!(to_id("Fire Sword"), "firesword");
        assert_eq!(to_id("Fire-Sword_II"), "fireswordii");
    }

    #[test]
    fn id_is_idempotent() {
        for input in ["Fire Sword", "a-B_c d", "", "already"] {
            let once = to_id(input);
            assert_eq!(to_id(&once), once);
        }
    }

    #[test]
    fn java_identifier_rules() {
        assert!(is_java_identifier("FireSword2"));
        assert!(is_java_identifier("_Hidden"));
        for bad in ["", "2Fast", "Fire.Sword", "../Pwned", "a/b", "Épée"] {
            assert!(!is_java_identifier(bad), "{bad:?} accepted");
        }
    }

    #[test]
    fn collapse_whitespace_removes_all_runs() {
        assert_eq!(collapse_whitespace("My  Cool Mod"), "MyCoolMod");
    }

    #[test]
    fn main_class_capitalises_first_letter_only() {
        assert_eq!(main_class_name("mymod"), "MymodMod");
        assert_eq!(main_class_name("coolmod2"), "Coolmod2Mod");
    }

    #[test]
    fn default_mod_id_from_name() {
        assert_eq!(default_mod_id("My Cool Mod"), "mycoolmod");
    }
}
