//! `stratum create`: scaffold modules and generate resources.
//!
//! Responsibility: translate CLI arguments into core requests, run the
//! matching service against the real filesystem, and display results.

use std::path::Path;

use tracing::{debug, info, instrument};

use stratum_adapters::{InMemoryStore, LocalFilesystem, SimpleRenderer, builtin_templates};
use stratum_core::{
    application::{GenerationOrchestrator, ModuleScaffolder},
    domain::{GenerationRequest, GenerationResult, ResourceKind},
};

use crate::{
    cli::{CreateCommands, CreateModuleArgs, CreateResourceArgs},
    commands::{display_path, scan_project},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: CreateCommands,
    root: &Path,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        CreateCommands::Module(args) => create_module(args, root, &config, &output),
        CreateCommands::Resource(args) => create_resource(args, root, &config, &output),
    }
}

#[instrument(skip_all, fields(module = %args.name))]
fn create_module(
    args: CreateModuleArgs,
    root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let project = scan_project(root)?;
    let scaffolder = ModuleScaffolder::new(
        Box::new(LocalFilesystem::new()),
        config.generator.resolve(),
    );

    let result = scaffolder.generate(&project, &args.name)?;

    output.success(&format!(
        "Module '{}' ready at {}",
        result.module_name,
        display_path(&result.base_path, root).display()
    ))?;
    for path in &result.created_paths {
        output.detail(&format!("  {}", display_path(path, root).display()))?;
    }
    Ok(())
}

#[instrument(skip_all, fields(kind = ?args.kind, name = %args.name, module = %args.module))]
fn create_resource(
    args: CreateResourceArgs,
    root: &Path,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let request = build_request(&args)?;
    let project = scan_project(root)?;

    let orchestrator = GenerationOrchestrator::new(
        Box::new(LocalFilesystem::new()),
        Box::new(renderer_for(root)?),
        config.generator.resolve(),
    );

    let result = if args.full {
        orchestrator.generate_full(&project, &request)?
    } else {
        orchestrator.generate(&project, &request)?
    };
    info!(files = result.created_files.len(), "generation finished");

    report(&result, root, output)
}

/// Validate flag combinations clap cannot express and build the request.
fn build_request(args: &CreateResourceArgs) -> CliResult<GenerationRequest> {
    let kind = ResourceKind::from(args.kind);

    if args.full && kind != ResourceKind::Entity {
        return Err(CliError::InvalidInput {
            message: format!("--full starts from an entity; use 'entity' instead of '{kind}'"),
        });
    }
    if args.standalone && !kind.has_standalone_mode() {
        return Err(CliError::InvalidInput {
            message: format!("--standalone applies to services and controllers, not '{kind}'"),
        });
    }

    let request = GenerationRequest::new(kind, args.name.as_str(), args.module.as_str())
        .with_id_type(args.id_type.map(Into::into));
    Ok(if args.standalone {
        request.standalone()
    } else {
        request
    })
}

/// Bundled templates, replaced by any overrides found for this project.
fn renderer_for(root: &Path) -> CliResult<SimpleRenderer> {
    let store = InMemoryStore::with_builtin()?;
    if let Some(dir) = builtin_templates::override_dir(root) {
        let count = store.load_overrides(&dir)?;
        debug!(path = %dir.display(), count, "using template overrides");
    }
    Ok(SimpleRenderer::new(store))
}

fn report(result: &GenerationResult, root: &Path, output: &OutputManager) -> CliResult<()> {
    for path in &result.created_files {
        let shown = display_path(path, root);
        if result.overwritten_files.contains(path) {
            output.warning(&format!("overwrote {}", shown.display()))?;
        } else {
            output.success(&format!("created {}", shown.display()))?;
        }
    }
    if !result.overwritten_files.is_empty() {
        output.info(&format!(
            "{} existing file(s) were replaced",
            result.overwritten_files.len()
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{IdTypeArg, KindArg};
    use stratum_core::domain::IdType;

    fn args(kind: KindArg) -> CreateResourceArgs {
        CreateResourceArgs {
            kind,
            name: "Order".into(),
            module: "sales".into(),
            full: false,
            id_type: None,
            standalone: false,
        }
    }

    #[test]
    fn builds_entity_based_request_with_id_type() {
        let mut a = args(KindArg::Service);
        a.id_type = Some(IdTypeArg::Long);
        let request = build_request(&a).unwrap();
        assert_eq!(request.kind, ResourceKind::Service);
        assert!(request.name.is_entity_based());
        assert_eq!(request.options.id_type, Some(IdType::Long));
    }

    #[test]
    fn standalone_switches_mode() {
        let mut a = args(KindArg::Controller);
        a.standalone = true;
        assert!(!build_request(&a).unwrap().name.is_entity_based());
    }

    #[test]
    fn standalone_entity_is_rejected() {
        let mut a = args(KindArg::Entity);
        a.standalone = true;
        let err = build_request(&a).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn full_requires_entity_kind() {
        let mut a = args(KindArg::Repository);
        a.full = true;
        assert!(matches!(
            build_request(&a),
            Err(CliError::InvalidInput { .. })
        ));

        let mut a = args(KindArg::Entity);
        a.full = true;
        assert!(build_request(&a).is_ok());
    }
}
