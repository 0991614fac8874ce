//! Integration tests for modsmith-core, driving the services through the
//! public API with small in-process fakes for every port.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use modsmith_core::{
    application::{ApplicationError, ports::RenderedComponent},
    domain::{ItemOptions, ItemType, LocaleOutcome, MobOptions},
    prelude::*,
};

#[derive(Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

/// Shared-state filesystem so the test keeps a handle after boxing.
#[derive(Clone, Default)]
struct FakeFs(Arc<Mutex<State>>);

impl FakeFs {
    fn with_file(self, path: &str, content: &str) -> Self {
        let path = PathBuf::from(path);
        {
            let mut state = self.0.lock().unwrap();
            for ancestor in path.ancestors().skip(1) {
                state.dirs.insert(ancestor.to_path_buf());
            }
            state.files.insert(path, content.to_string());
        }
        self
    }

    fn with_dir(self, path: &str) -> Self {
        self.0.lock().unwrap().dirs.insert(PathBuf::from(path));
        self
    }

    fn read(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().files.get(Path::new(path)).cloned()
    }
}

impl Filesystem for FakeFs {
    fn create_dir_all(&self, path: &Path) -> ModsmithResult<()> {
        let mut state = self.0.lock().unwrap();
        for ancestor in path.ancestors() {
            state.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> ModsmithResult<()> {
        self.0
            .lock()
            .unwrap()
            .files
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> ModsmithResult<String> {
        self.0
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn append_file(&self, path: &Path, content: &str) -> ModsmithResult<()> {
        self.0
            .lock()
            .unwrap()
            .files
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.0.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.0.lock().unwrap().dirs.contains(path)
    }
}

/// Renders a fixed two-file project and a one-line component.
struct StubRenderer;

impl TemplateRenderer for StubRenderer {
    fn render_project(
        &self,
        _kind: TemplateKind,
        config: &ProjectConfig,
    ) -> ModsmithResult<TemplateFileSet> {
        let mut files = TemplateFileSet::new();
        files.insert(
            "build.gradle",
            format!(
                "project.ext.modID = \"{}\"\nfiles(\"Necesse.jar\")\n",
                config.mod_id()
            ),
        )?;
        files.insert("src/main/resources/locale/en.lang", "[item]\n")?;
        Ok(files)
    }

    fn render_component(
        &self,
        context: &ExistingProjectContext,
        options: &ComponentOptions,
    ) -> ModsmithResult<RenderedComponent> {
        Ok(RenderedComponent {
            file_name: format!("{}.java", options.class_name()),
            content: format!(
                "package {};\n",
                context.component_package(options.kind())
            ),
        })
    }
}

struct FakeVcs {
    fail: bool,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl VersionControl for FakeVcs {
    fn init(&self, path: &Path) -> ModsmithResult<()> {
        self.calls.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            return Err(ApplicationError::VersionControlFailed {
                reason: "git not installed".into(),
            }
            .into());
        }
        Ok(())
    }
}

fn config() -> ProjectConfig {
    ProjectConfig::builder("My Mod")
        .output_dir("/out")
        .build()
        .unwrap()
}

#[test]
fn scaffold_writes_rendered_files_and_inits_repository() {
    let fs = FakeFs::default();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let service = ScaffoldService::new(
        Box::new(StubRenderer),
        Box::new(fs.clone()),
        Box::new(FakeVcs {
            fail: false,
            calls: calls.clone(),
        }),
    );

    let report = service.scaffold(&config()).unwrap();

    assert_eq!(report.project_path, PathBuf::from("/out/MyMod"));
    assert_eq!(report.files_written.len(), 2);
    assert!(report.vcs_initialized);
    assert!(report.vcs_warning.is_none());
    assert_eq!(*calls.lock().unwrap(), vec![PathBuf::from("/out/MyMod")]);
    assert!(
        fs.read("/out/MyMod/build.gradle")
            .unwrap()
            .contains("\"mymod\"")
    );
}

#[test]
fn failed_repository_init_only_warns() {
    let fs = FakeFs::default();
    let service = ScaffoldService::new(
        Box::new(StubRenderer),
        Box::new(fs.clone()),
        Box::new(FakeVcs {
            fail: true,
            calls: Arc::default(),
        }),
    );

    let report = service.scaffold(&config()).unwrap();

    assert!(!report.vcs_initialized);
    assert!(report.vcs_warning.is_some());
    assert!(fs.read("/out/MyMod/build.gradle").is_some());
}

#[test]
fn scaffolded_project_accepts_components() {
    let fs = FakeFs::default();
    ScaffoldService::new(
        Box::new(StubRenderer),
        Box::new(fs.clone()),
        Box::new(FakeVcs {
            fail: false,
            calls: Arc::default(),
        }),
    )
    .scaffold(&config())
    .unwrap();
    let fs = fs.with_dir("/out/MyMod/src/main/java/mymod");

    let context = ProjectLocator::new(Box::new(fs.clone()))
        .locate(Path::new("/out/MyMod/src/main/java/mymod"))
        .unwrap();
    assert_eq!(context.root_dir(), Path::new("/out/MyMod"));
    assert_eq!(context.mod_id(), "mymod");

    let components = ComponentService::new(Box::new(StubRenderer), Box::new(fs.clone()));
    let sword = components
        .add_item(&context, ItemOptions::new("Fire Sword", ItemType::Weapon))
        .unwrap();
    let bat = components
        .add_mob(&context, MobOptions::new("Cave Bat"))
        .unwrap();

    assert_eq!(sword.locale, LocaleOutcome::Appended);
    assert_eq!(bat.class_name, "CaveBatMob");
    assert_eq!(
        fs.read("/out/MyMod/src/main/java/mymod/items/FireSword.java")
            .as_deref(),
        Some("package mymod.items;\n")
    );
    assert_eq!(
        fs.read("/out/MyMod/src/main/resources/locale/en.lang")
            .as_deref(),
        Some("[item]\nitem.firesword=Fire Sword\nmob.cavebat=Cave Bat\n")
    );
}

#[test]
fn locating_outside_any_project_fails() {
    let fs = FakeFs::default().with_file("/work/build.gradle", "apply plugin: 'java'\n");
    let err = ProjectLocator::new(Box::new(fs))
        .locate(Path::new("/work/sub"))
        .unwrap_err();
    assert!(err.is_not_a_project());
}

#[test]
fn builder_rejects_bad_mod_id() {
    let err = ProjectConfig::builder("My Mod")
        .mod_id("my mod")
        .build()
        .unwrap_err();
    assert_eq!(
        ModsmithError::from(err).category(),
        modsmith_core::error::ErrorCategory::Validation
    );
}
