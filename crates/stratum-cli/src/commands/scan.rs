//! `stratum scan`: print the discovered project structure.

use std::path::Path;

use tracing::instrument;

use stratum_core::domain::{
    Layer, ModuleStructure, ProjectStructure, ResourceRecord, ResourceType,
};

use crate::{
    cli::ScanArgs,
    commands::{display_path, scan_project},
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(root = %root.display()))]
pub fn execute(args: ScanArgs, root: &Path, output: OutputManager) -> CliResult<()> {
    let project = scan_project(root)?;

    if args.json {
        let json = serde_json::to_string_pretty(&project).map_err(std::io::Error::from)?;
        output.data(&json)?;
        return Ok(());
    }

    print_tree(&project, root, &output)
}

fn print_tree(project: &ProjectStructure, root: &Path, output: &OutputManager) -> CliResult<()> {
    let package = if project.base_package().is_empty() {
        "(default package)"
    } else {
        project.base_package()
    };
    output.header(&format!("Project {package}"))?;
    output.detail(&format!(
        "  source: {}",
        display_path(project.source_path(), root).display()
    ))?;

    if project.modules().is_empty() {
        output.warning("No modules found. Create one with 'stratum create module <name>'.")?;
        return Ok(());
    }

    for module in project.modules() {
        output.print("")?;
        print_module(module, output)?;
    }
    Ok(())
}

fn print_module(module: &ModuleStructure, output: &OutputManager) -> CliResult<()> {
    output.print(&format!("{} ({} resources)", module.name, module.resources().count()))?;

    for layer in Layer::ALL {
        let Some(structure) = module.layer(layer) else {
            output.detail(&format!("  {layer}: absent"))?;
            continue;
        };

        if structure.resources.is_empty() {
            output.print(&format!("  {layer}: empty"))?;
        } else {
            output.print(&format!("  {layer}"))?;
        }
        for resource in &structure.resources {
            output.print(&format!("    {}", describe(resource)))?;
        }
    }
    Ok(())
}

fn describe(resource: &ResourceRecord) -> String {
    let mut line = format!("{} [{}", resource.name, resource.resource_type);
    if resource.resource_type == ResourceType::Mapper {
        line.push_str(&format!(", {}", resource.mapper_type));
    }
    line.push(']');
    if let Some(implementation) = &resource.implementation {
        line.push_str(&format!(" -> {implementation}"));
    }
    line
}
