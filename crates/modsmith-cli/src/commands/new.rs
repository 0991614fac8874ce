//! Implementation of the `modsmith new` command.
//!
//! Responsibility: merge flags, config defaults and prompt answers into a
//! `ProjectConfig`, call the core scaffold service, and display results.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use modsmith_adapters::{BuiltinTemplates, GitCli, LocalFilesystem};
use modsmith_core::{
    application::ScaffoldService,
    domain::{GAME_ARCHIVE, ProjectConfig, TemplateKind, naming},
    error::ModsmithError,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Every value `new` needs, after flags and config are merged.
#[derive(Debug, Clone, PartialEq)]
struct NewValues {
    name: String,
    mod_id: Option<String>,
    author: String,
    description: String,
    game_directory: String,
    game_version: String,
    mod_version: String,
    clientside: bool,
    template: TemplateKind,
    vscode: bool,
    git: bool,
    wrapper: bool,
}

#[derive(Serialize)]
struct NewReport<'a> {
    mod_name: &'a str,
    mod_id: &'a str,
    template: TemplateKind,
    project_path: &'a Path,
    dry_run: bool,
    files: Vec<PathBuf>,
    vcs_initialized: bool,
    vcs_warning: Option<&'a str>,
}

/// Execute the `modsmith new` command.
///
/// 1. Merge flags over config defaults
/// 2. Prompt when the name is missing or `--interactive` is set
/// 3. Build and validate the `ProjectConfig`
/// 4. Preview on `--dry-run`, otherwise scaffold
/// 5. Print next steps
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("<prompt>")))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let mut values = resolve_values(&args, &config)?;
    if needs_prompt(&args) {
        values = prompt_values(values)?;
    }

    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let project = build_config(&values, output_dir)?;

    debug!(
        mod_id = %project.mod_id(),
        template = %project.template(),
        path = %project.project_path().display(),
        "Project resolved"
    );

    let service = ScaffoldService::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(GitCli::new()),
    );

    if args.dry_run {
        return show_plan(&service, &project, &output);
    }

    let spinner = output.spinner(&format!("Creating '{}'...", project.mod_name()));
    info!(mod_id = %project.mod_id(), "Scaffold started");
    let report = service.scaffold(&project)?;
    spinner.finish();
    info!(files = report.files_written.len(), "Scaffold completed");

    if let Some(warning) = &report.vcs_warning {
        output.warning(&format!("Repository not initialized: {warning}"))?;
    }
    if !game_archive_present(project.game_directory()) {
        output.warning(&format!(
            "{GAME_ARCHIVE} not found in '{}'. Set --game-dir or defaults.game_directory before building.",
            project.game_directory()
        ))?;
    }

    if output.format() == OutputFormat::Json {
        return Ok(output.json(&NewReport {
            mod_name: project.mod_name(),
            mod_id: project.mod_id(),
            template: project.template(),
            project_path: &report.project_path,
            dry_run: false,
            files: report.files_written.clone(),
            vcs_initialized: report.vcs_initialized,
            vcs_warning: report.vcs_warning.as_deref(),
        })?);
    }

    output.success(&format!(
        "Created '{}' at {}",
        project.mod_name(),
        report.project_path.display()
    ))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_path.display()))?;
        output.print("  gradle buildModJar     # build the mod jar")?;
        output.print("  gradle runDevClient    # launch the game with the mod")?;
        output.print("  modsmith add item      # add your first component")?;
    }

    Ok(())
}

fn needs_prompt(args: &NewArgs) -> bool {
    args.interactive || args.name.is_none()
}

/// Flags win over config; config wins over built-in defaults.
fn resolve_values(args: &NewArgs, config: &AppConfig) -> CliResult<NewValues> {
    let defaults = &config.defaults;
    let template = match args.template {
        Some(t) => t.into(),
        None => defaults
            .template
            .parse::<TemplateKind>()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.template: {e}"),
                source: Some(Box::new(e)),
            })?,
    };

    Ok(NewValues {
        name: args.name.clone().unwrap_or_default(),
        mod_id: args.mod_id.clone(),
        author: args.author.clone().unwrap_or_else(|| defaults.author.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| defaults.description.clone()),
        game_directory: args
            .game_dir
            .clone()
            .unwrap_or_else(|| config.game_directory()),
        game_version: args
            .game_version
            .clone()
            .unwrap_or_else(|| defaults.game_version.clone()),
        mod_version: args
            .mod_version
            .clone()
            .unwrap_or_else(|| defaults.mod_version.clone()),
        clientside: args.clientside,
        template,
        vscode: defaults.vscode && !args.no_vscode,
        git: defaults.git && !args.no_git,
        wrapper: defaults.wrapper && !args.no_wrapper,
    })
}

/// Ask for every field, pre-filled with the merged values.
fn prompt_values(mut v: NewValues) -> CliResult<NewValues> {
    v.name = prompt::required_text("Mod name", &v.name)?;
    let suggested = v
        .mod_id
        .clone()
        .unwrap_or_else(|| naming::default_mod_id(&v.name));
    v.mod_id = Some(prompt::mod_id("Mod id", &suggested)?);
    v.author = prompt::text("Author", &v.author)?;
    v.description = prompt::text("Description", &v.description)?;
    v.game_directory = prompt::required_text("Necesse install directory", &v.game_directory)?;
    v.game_version = prompt::text("Game version", &v.game_version)?;
    v.mod_version = prompt::text("Mod version", &v.mod_version)?;
    v.clientside = prompt::confirm("Client-side only?", v.clientside)?;

    let choices = prompt::options(&TemplateKind::ALL, TemplateKind::description);
    v.template = prompt::choose("Template", &choices, v.template)?;

    v.vscode = prompt::confirm("Include VS Code settings?", v.vscode)?;
    v.git = prompt::confirm("Initialize a git repository?", v.git)?;
    v.wrapper = prompt::confirm("Include Gradle wrapper properties?", v.wrapper)?;
    Ok(v)
}

fn build_config(v: &NewValues, output_dir: PathBuf) -> CliResult<ProjectConfig> {
    let mut builder = ProjectConfig::builder(v.name.as_str())
        .author(v.author.as_str())
        .description(v.description.as_str())
        .game_directory(v.game_directory.as_str())
        .game_version(v.game_version.as_str())
        .mod_version(v.mod_version.as_str())
        .clientside(v.clientside)
        .template(v.template)
        .output_dir(output_dir)
        .include_editor_config(v.vscode)
        .init_version_control(v.git)
        .include_wrapper(v.wrapper);
    if let Some(id) = &v.mod_id {
        builder = builder.mod_id(id.as_str());
    }
    builder
        .build()
        .map_err(|e| CliError::Core(ModsmithError::from(e)))
}

fn show_plan(
    service: &ScaffoldService,
    project: &ProjectConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(project)?;

    if output.format() == OutputFormat::Json {
        return Ok(output.json(&NewReport {
            mod_name: project.mod_name(),
            mod_id: project.mod_id(),
            template: project.template(),
            project_path: &plan.project_path,
            dry_run: true,
            files: plan
                .files
                .paths()
                .map(|p| plan.project_path.join(p))
                .collect(),
            vcs_initialized: false,
            vcs_warning: None,
        })?);
    }

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        project.mod_name(),
        plan.project_path.display()
    ))?;
    output.print(&format!("  Mod id:   {}", project.mod_id()))?;
    output.print(&format!("  Template: {}", project.template()))?;
    output.print("")?;
    for dir in &plan.directories {
        output.print(&format!("  dir   {}", dir.display()))?;
    }
    for path in plan.files.paths() {
        output.print(&format!("  file  {}", plan.project_path.join(path).display()))?;
    }
    if project.init_version_control() {
        output.print("  git   init")?;
    }
    Ok(())
}

fn game_archive_present(game_directory: &str) -> bool {
    Path::new(game_directory).join(GAME_ARCHIVE).is_file()
}
