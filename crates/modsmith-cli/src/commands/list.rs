//! Implementation of the `modsmith list` command.

use modsmith_adapters::{BuiltinTemplates, TemplateInfo};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let templates = BuiltinTemplates::catalog();

    // A global `--output-format json` wins over the table default.
    let format = match (args.format, output.format()) {
        (ListFormat::Table, OutputFormat::Json) => ListFormat::Json,
        (format, _) => format,
    };

    match format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for line in table_lines(&templates) {
                output.print(&line)?;
            }
        }
        ListFormat::List => {
            for t in &templates {
                output.print(t.name)?;
            }
        }
        ListFormat::Json => output.json(&templates)?,
    }

    Ok(())
}

fn table_lines(templates: &[TemplateInfo]) -> Vec<String> {
    let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    templates
        .iter()
        .map(|t| {
            let marker = if t.default { " (default)" } else { "" };
            format!("  {:<width$}  {}{marker}", t.name, t.description)
        })
        .collect()
}
