//! Component Service - adds one class and one locale line to a mod.
//!
//! All four kinds go through [`ComponentService::add`]; the per-kind
//! differences (suffix, subdirectory, locale category) come from
//! `ComponentKind` and the Java text from the renderer port.
//!
//! The source file write is fatal on failure. The locale step is not: an
//! I/O failure there is reported as `LocaleOutcome::Failed` carrying the
//! entry text so the user can add it by hand.

use std::path::Path;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{
        AddedComponent, BuffOptions, ComponentKind, ComponentOptions, DomainValidator as validator,
        ExistingProjectContext, ItemOptions, LocaleOutcome, MobOptions, TileOptions,
    },
    error::ModsmithResult,
};

pub struct ComponentService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ComponentService {
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    pub fn add_item(
        &self,
        context: &ExistingProjectContext,
        options: ItemOptions,
    ) -> ModsmithResult<AddedComponent> {
        self.add(context, &ComponentOptions::Item(options))
    }

    pub fn add_mob(
        &self,
        context: &ExistingProjectContext,
        options: MobOptions,
    ) -> ModsmithResult<AddedComponent> {
        self.add(context, &ComponentOptions::Mob(options))
    }

    pub fn add_tile(
        &self,
        context: &ExistingProjectContext,
        options: TileOptions,
    ) -> ModsmithResult<AddedComponent> {
        self.add(context, &ComponentOptions::Tile(options))
    }

    pub fn add_buff(
        &self,
        context: &ExistingProjectContext,
        options: BuffOptions,
    ) -> ModsmithResult<AddedComponent> {
        self.add(context, &ComponentOptions::Buff(options))
    }

    /// Render the component source, write it, then update the locale file.
    #[instrument(
        skip_all,
        fields(kind = %options.kind(), name = %options.name(), mod_id = %context.mod_id())
    )]
    pub fn add(
        &self,
        context: &ExistingProjectContext,
        options: &ComponentOptions,
    ) -> ModsmithResult<AddedComponent> {
        validator::validate_component(options)?;
        let kind = options.kind();

        let rendered = self.renderer.render_component(context, options)?;
        let dir = context.component_dir(kind);
        self.filesystem.create_dir_all(&dir)?;
        let source_path = dir.join(&rendered.file_name);
        self.filesystem.write_file(&source_path, &rendered.content)?;
        info!(path = %source_path.display(), "Wrote component source");

        let locale = self.update_locale(context, options);

        if kind == ComponentKind::Item {
            let textures = context.resources_dir().join(kind.subdir());
            if let Err(e) = self.filesystem.create_dir_all(&textures) {
                debug!(error = %e, "Could not create texture directory");
            }
        }

        let id = options.id();
        Ok(AddedComponent {
            kind,
            class_name: options.class_name(),
            texture_hint: format!("resources/{}/{}.png", kind.subdir(), id),
            id,
            source_path,
            locale,
        })
    }

    fn update_locale(
        &self,
        context: &ExistingProjectContext,
        options: &ComponentOptions,
    ) -> LocaleOutcome {
        let entry = options.locale_entry();
        let path = context.locale_file();
        match self.append_locale_entry(&path, &options.locale_key_prefix(), &entry) {
            Ok(outcome) => {
                debug!(?outcome, "Locale updated");
                outcome
            }
            Err(e) => {
                warn!(error = %e, entry = %entry, "Could not update locale file");
                LocaleOutcome::Failed {
                    entry,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Append `entry` unless `key_prefix` already occurs in the file.
    ///
    /// The check is a plain substring search over the whole file, not an
    /// anchored line match.
    pub fn append_locale_entry(
        &self,
        path: &Path,
        key_prefix: &str,
        entry: &str,
    ) -> ModsmithResult<LocaleOutcome> {
        if !self.filesystem.exists(path) {
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(path, &format!("{entry}\n"))?;
            return Ok(LocaleOutcome::Created);
        }

        let content = self.filesystem.read_to_string(path)?;
        if content.contains(key_prefix) {
            return Ok(LocaleOutcome::AlreadyPresent);
        }

        let line = if content.is_empty() || content.ends_with('\n') {
            format!("{entry}\n")
        } else {
            format!("\n{entry}\n")
        };
        self.filesystem.append_file(path, &line)?;
        Ok(LocaleOutcome::Appended)
    }
}
