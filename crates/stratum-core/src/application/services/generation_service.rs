//! Generation Orchestrator - writes resources into an existing module.
//!
//! Every request follows the same shape:
//! 1. Validate the name (no filesystem access before this succeeds)
//! 2. Resolve the target module from the scanned [`ProjectStructure`]
//! 3. Check prerequisites at their conventional paths
//! 4. Render every template of the request
//! 5. Write the rendered files
//!
//! Rendering happens before the first write, so a missing template never
//! leaves a half-written service behind. Writes replace existing files;
//! replaced paths are reported in [`GenerationResult::overwritten_files`].

use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        DomainError, GenerationRequest, GenerationResult, IdType, InjectionStyle, ModuleLayout,
        ProjectStructure, RenderContext, ResolvedConfig, ResourceKind, TemplateId, naming,
    },
    error::StratumResult,
};

const SERVICE_SUFFIX: &str = "Service";
const CONTROLLER_SUFFIX: &str = "Controller";

/// One rendered file waiting to be written.
struct PendingFile {
    path: PathBuf,
    content: String,
}

/// Everything a single request needs once its module is resolved.
struct Target<'a> {
    project: &'a ProjectStructure,
    module: &'a str,
    layout: ModuleLayout,
    class_name: String,
}

pub struct GenerationOrchestrator {
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
    config: ResolvedConfig,
}

impl GenerationOrchestrator {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
        config: ResolvedConfig,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            config,
        }
    }

    /// Generate one resource kind.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind,
            name = %request.name.name(),
            module = %request.module
        )
    )]
    pub fn generate(
        &self,
        project: &ProjectStructure,
        request: &GenerationRequest,
    ) -> StratumResult<GenerationResult> {
        let target = self.resolve_target(project, request)?;

        let files = match request.kind {
            ResourceKind::Entity => self.entity_files(&target, request.options.id_type)?,
            ResourceKind::Repository => self.repository_files(&target)?,
            ResourceKind::Service if request.name.is_entity_based() => {
                self.service_files(&target)?
            }
            ResourceKind::Service => self.standalone_service_files(&target)?,
            ResourceKind::Controller if request.name.is_entity_based() => {
                self.controller_files(&target)?
            }
            ResourceKind::Controller => self.standalone_controller_files(&target)?,
        };

        let result = self.write_all(files)?;
        info!(files = result.created_files.len(), "Resource generated");
        Ok(result)
    }

    /// Composite generation: entity, repository, service, controller.
    ///
    /// Stops at the first failure. Files written by earlier steps stay on
    /// disk; there is no rollback.
    pub fn generate_full(
        &self,
        project: &ProjectStructure,
        request: &GenerationRequest,
    ) -> StratumResult<GenerationResult> {
        let name = request.name.name();
        let mut result = GenerationResult::default();

        for kind in [
            ResourceKind::Entity,
            ResourceKind::Repository,
            ResourceKind::Service,
            ResourceKind::Controller,
        ] {
            let step = GenerationRequest::new(kind, name, &request.module)
                .with_id_type(request.options.id_type);
            result.extend(self.generate(project, &step)?);
        }

        info!(
            name,
            files = result.created_files.len(),
            "Full resource set generated"
        );
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------

    fn resolve_target<'a>(
        &self,
        project: &'a ProjectStructure,
        request: &'a GenerationRequest,
    ) -> StratumResult<Target<'a>> {
        let name = request.name.name();
        naming::validate_artifact_name(name)?;

        if project.modules().is_empty() {
            return Err(ApplicationError::NoModulesFound {
                path: project.base_package_dir(),
            }
            .into());
        }

        let module = project.module(&request.module).ok_or_else(|| {
            ApplicationError::ModuleNotFound {
                module: request.module.clone(),
                available: project.module_names().join(", "),
            }
        })?;

        Ok(Target {
            project,
            module: &request.module,
            layout: module.layout(),
            class_name: naming::to_class_name(name),
        })
    }

    fn require(
        &self,
        target: &Target<'_>,
        artifact: &'static str,
        path: PathBuf,
    ) -> StratumResult<PathBuf> {
        if self.filesystem.exists(&path) {
            return Ok(path);
        }
        debug!(artifact, expected = %path.display(), "Prerequisite missing");
        Err(ApplicationError::MissingPrerequisite {
            artifact,
            name: target.class_name.clone(),
            module: target.module.to_string(),
            expected: path,
        }
        .into())
    }

    /// Id type of an existing entity, inferred from its source text.
    fn entity_id_type(&self, target: &Target<'_>) -> StratumResult<IdType> {
        let entity = self.require(target, "entity", target.layout.entity_file(&target.class_name))?;
        let source = self.filesystem.read_to_string(&entity)?;
        Ok(IdType::infer_from_entity(&source))
    }

    // -------------------------------------------------------------------------
    // Per-kind file sets
    // -------------------------------------------------------------------------

    fn entity_files(
        &self,
        target: &Target<'_>,
        requested: Option<IdType>,
    ) -> StratumResult<Vec<PendingFile>> {
        let id_type = requested.unwrap_or(self.config.id_type);
        let context = self.context(target, &target.class_name, id_type);

        Ok(vec![self.render(
            TemplateId::Entity,
            &context,
            target.layout.entity_file(&target.class_name),
        )?])
    }

    fn repository_files(&self, target: &Target<'_>) -> StratumResult<Vec<PendingFile>> {
        let id_type = self.entity_id_type(target)?;
        let context = self.context(target, &target.class_name, id_type);

        Ok(vec![self.render(
            TemplateId::Repository,
            &context,
            target.layout.repository_file(&target.class_name),
        )?])
    }

    fn service_files(&self, target: &Target<'_>) -> StratumResult<Vec<PendingFile>> {
        let id_type = self.entity_id_type(target)?;
        self.require(
            target,
            "repository",
            target.layout.repository_file(&target.class_name),
        )?;

        let service_name = format!("{}{SERVICE_SUFFIX}", target.class_name);
        let context = self.context(target, &target.class_name, id_type);

        Ok(vec![
            self.render(
                TemplateId::Service,
                &context,
                target.layout.service_file(&service_name),
            )?,
            self.render(
                TemplateId::ServiceImpl,
                &context,
                target.layout.service_impl_file(&service_name),
            )?,
        ])
    }

    fn standalone_service_files(&self, target: &Target<'_>) -> StratumResult<Vec<PendingFile>> {
        let base = require_suffix(&target.class_name, SERVICE_SUFFIX)?;
        let context = self.context(target, base, self.config.id_type);

        Ok(vec![
            self.render(
                TemplateId::StandaloneService,
                &context,
                target.layout.service_file(&target.class_name),
            )?,
            self.render(
                TemplateId::StandaloneServiceImpl,
                &context,
                target.layout.service_impl_file(&target.class_name),
            )?,
        ])
    }

    fn controller_files(&self, target: &Target<'_>) -> StratumResult<Vec<PendingFile>> {
        let service_name = format!("{}{SERVICE_SUFFIX}", target.class_name);
        self.require(target, "service", target.layout.service_file(&service_name))?;
        let id_type = self.entity_id_type(target)?;
        let context = self.context(target, &target.class_name, id_type);

        Ok(vec![self.render(
            TemplateId::Controller,
            &context,
            target
                .layout
                .controller_file(&format!("{}{CONTROLLER_SUFFIX}", target.class_name)),
        )?])
    }

    fn standalone_controller_files(
        &self,
        target: &Target<'_>,
    ) -> StratumResult<Vec<PendingFile>> {
        let base = require_suffix(&target.class_name, CONTROLLER_SUFFIX)?;
        let context = self.context(target, base, self.config.id_type);

        Ok(vec![self.render(
            TemplateId::StandaloneController,
            &context,
            target.layout.controller_file(&target.class_name),
        )?])
    }

    // -------------------------------------------------------------------------
    // Rendering and writing
    // -------------------------------------------------------------------------

    /// Shared data record. `name` is the class name without any role suffix.
    fn context(&self, target: &Target<'_>, name: &str, id_type: IdType) -> RenderContext {
        let service_name = format!("{name}{SERVICE_SUFFIX}");
        let repository_name = format!("{name}Repository");
        let controller_name = format!("{name}{CONTROLLER_SUFFIX}");

        let (transactional_import, transactional) = if self.config.transactional {
            (
                "import org.springframework.transaction.annotation.Transactional;",
                "@Transactional",
            )
        } else {
            ("", "")
        };

        let (injection_import, injection_annotation, autowired, field_modifier) =
            match self.config.injection {
                InjectionStyle::Constructor => (
                    "import lombok.RequiredArgsConstructor;",
                    "@RequiredArgsConstructor",
                    "",
                    "private final",
                ),
                InjectionStyle::Field => (
                    "import org.springframework.beans.factory.annotation.Autowired;",
                    "",
                    "@Autowired",
                    "private",
                ),
            };

        RenderContext::new()
            .with_variable("PACKAGE", target.project.base_package())
            .with_variable("MODULE", target.module)
            .with_variable("MODULE_PACKAGE", target.project.module_package(target.module))
            .with_variable("NAME", name)
            .with_variable("NAME_CAMEL", naming::to_camel_case(name))
            .with_variable("RESOURCE_PATH", naming::to_resource_path(name))
            .with_variable("ID_TYPE", id_type.java_type())
            .with_variable("ID_STRATEGY", id_type.strategy())
            .with_variable(
                "ID_IMPORT",
                match id_type {
                    IdType::Uuid => "import java.util.UUID;",
                    IdType::Long => "",
                },
            )
            .with_variable("SERVICE_NAME", &service_name)
            .with_variable("SERVICE_NAME_CAMEL", naming::to_camel_case(&service_name))
            .with_variable("REPOSITORY_NAME", &repository_name)
            .with_variable(
                "REPOSITORY_NAME_CAMEL",
                naming::to_camel_case(&repository_name),
            )
            .with_variable("CONTROLLER_NAME", controller_name)
            .with_variable("TRANSACTIONAL_IMPORT", transactional_import)
            .with_variable("TRANSACTIONAL", transactional)
            .with_variable("INJECTION_IMPORT", injection_import)
            .with_variable("INJECTION_ANNOTATION", injection_annotation)
            .with_variable("AUTOWIRED", autowired)
            .with_variable("FIELD_MODIFIER", field_modifier)
    }

    fn render(
        &self,
        template: TemplateId,
        context: &RenderContext,
        path: PathBuf,
    ) -> StratumResult<PendingFile> {
        let content = self.renderer.render(template, context)?;
        Ok(PendingFile { path, content })
    }

    fn write_all(&self, files: Vec<PendingFile>) -> StratumResult<GenerationResult> {
        let mut result = GenerationResult::default();

        for file in files {
            let existed = self.filesystem.exists(&file.path);
            if let Some(parent) = file.path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&file.path, &file.content)?;

            if existed {
                warn!(path = %file.path.display(), "Overwrote existing file");
                result.overwritten_files.push(file.path.clone());
            }
            result.created_files.push(file.path);
        }

        Ok(result)
    }
}

/// Strip a mandatory role suffix from a standalone name.
fn require_suffix<'a>(class_name: &'a str, suffix: &str) -> Result<&'a str, DomainError> {
    match class_name.strip_suffix(suffix) {
        Some(base) if !base.is_empty() => Ok(base),
        _ => Err(DomainError::InvalidName {
            name: class_name.to_string(),
            reason: format!("standalone names must end with '{suffix}' after a prefix"),
        }),
    }
}
