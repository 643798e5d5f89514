//! Built-in template texts and override discovery.
//!
//! Every [`TemplateId`] has a bundled text compiled into the binary. Users
//! can replace any of them by dropping `<template-name>.java.tpl` files into
//! an override directory.
//!
//! # Override resolution order
//!
//! The first directory that exists wins:
//!
//! 1. **`$STRATUM_TEMPLATES_DIR`**: environment variable override.
//! 2. **`<project root>/.stratum/templates`**: per-project overrides.
//!
//! Placeholders use the `{{VARIABLE}}` syntax of
//! [`RenderContext`](stratum_core::domain::RenderContext). A line that
//! becomes blank only because its placeholders were empty is dropped, which
//! is how optional imports and annotations disappear.

use std::path::{Path, PathBuf};

use tracing::debug;

use stratum_core::domain::TemplateId;

/// Environment variable naming an override directory.
pub const TEMPLATES_DIR_ENV: &str = "STRATUM_TEMPLATES_DIR";

/// Per-project override directory, relative to the project root.
pub const PROJECT_TEMPLATES_DIR: &str = ".stratum/templates";

/// File extension of override files.
pub const OVERRIDE_EXTENSION: &str = ".java.tpl";

// ── Public API ────────────────────────────────────────────────────────────────

/// Bundled text for a template.
pub fn builtin_text(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Entity => ENTITY,
        TemplateId::Repository => REPOSITORY,
        TemplateId::Service => SERVICE,
        TemplateId::ServiceImpl => SERVICE_IMPL,
        TemplateId::StandaloneService => STANDALONE_SERVICE,
        TemplateId::StandaloneServiceImpl => STANDALONE_SERVICE_IMPL,
        TemplateId::Controller => CONTROLLER,
        TemplateId::StandaloneController => STANDALONE_CONTROLLER,
    }
}

/// First existing override directory, if any.
pub fn override_dir(project_root: &Path) -> Option<PathBuf> {
    candidate_paths(project_root).into_iter().find(|candidate| {
        let exists = candidate.is_dir();
        debug!(path = %candidate.display(), exists, "checking template override path");
        exists
    })
}

// ── Resolution helpers ────────────────────────────────────────────────────────

fn candidate_paths(project_root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);

    if let Ok(env_dir) = std::env::var(TEMPLATES_DIR_ENV) {
        paths.push(PathBuf::from(env_dir));
    }
    paths.push(project_root.join(PROJECT_TEMPLATES_DIR));

    paths
}

// ── Bundled texts ─────────────────────────────────────────────────────────────

const ENTITY: &str = r#"package {{MODULE_PACKAGE}}.domain.entities;

import jakarta.persistence.Entity;
import jakarta.persistence.GeneratedValue;
import jakarta.persistence.GenerationType;
import jakarta.persistence.Id;
import lombok.Getter;
import lombok.NoArgsConstructor;
import lombok.Setter;
{{ID_IMPORT}}

@Entity
@Getter
@Setter
@NoArgsConstructor
public class {{NAME}} {

    @Id
    @GeneratedValue(strategy = {{ID_STRATEGY}})
    private {{ID_TYPE}} id;
}
"#;

const REPOSITORY: &str = r#"package {{MODULE_PACKAGE}}.infrastructure.repositories;

import {{MODULE_PACKAGE}}.domain.entities.{{NAME}};
import org.springframework.data.jpa.repository.JpaRepository;
import org.springframework.stereotype.Repository;
{{ID_IMPORT}}

@Repository
public interface {{REPOSITORY_NAME}} extends JpaRepository<{{NAME}}, {{ID_TYPE}}> {
}
"#;

const SERVICE: &str = r#"package {{MODULE_PACKAGE}}.application.services;

import {{MODULE_PACKAGE}}.domain.entities.{{NAME}};
import java.util.List;
{{ID_IMPORT}}

public interface {{SERVICE_NAME}} {

    List<{{NAME}}> findAll();

    {{NAME}} findById({{ID_TYPE}} id);

    {{NAME}} create({{NAME}} {{NAME_CAMEL}});

    {{NAME}} update({{ID_TYPE}} id, {{NAME}} {{NAME_CAMEL}});

    void delete({{ID_TYPE}} id);
}
"#;

const SERVICE_IMPL: &str = r#"package {{MODULE_PACKAGE}}.application.services.implementations;

import {{MODULE_PACKAGE}}.application.services.{{SERVICE_NAME}};
import {{MODULE_PACKAGE}}.domain.entities.{{NAME}};
import {{MODULE_PACKAGE}}.infrastructure.repositories.{{REPOSITORY_NAME}};
import jakarta.persistence.EntityNotFoundException;
import java.util.List;
{{ID_IMPORT}}
{{INJECTION_IMPORT}}
import org.springframework.stereotype.Service;
{{TRANSACTIONAL_IMPORT}}

@Service
{{INJECTION_ANNOTATION}}
{{TRANSACTIONAL}}
public class {{SERVICE_NAME}}Impl implements {{SERVICE_NAME}} {

    {{AUTOWIRED}}
    {{FIELD_MODIFIER}} {{REPOSITORY_NAME}} {{REPOSITORY_NAME_CAMEL}};

    @Override
    public List<{{NAME}}> findAll() {
        return {{REPOSITORY_NAME_CAMEL}}.findAll();
    }

    @Override
    public {{NAME}} findById({{ID_TYPE}} id) {
        return {{REPOSITORY_NAME_CAMEL}}.findById(id)
                .orElseThrow(() -> new EntityNotFoundException("{{NAME}} not found: " + id));
    }

    @Override
    public {{NAME}} create({{NAME}} {{NAME_CAMEL}}) {
        return {{REPOSITORY_NAME_CAMEL}}.save({{NAME_CAMEL}});
    }

    @Override
    public {{NAME}} update({{ID_TYPE}} id, {{NAME}} {{NAME_CAMEL}}) {
        findById(id);
        {{NAME_CAMEL}}.setId(id);
        return {{REPOSITORY_NAME_CAMEL}}.save({{NAME_CAMEL}});
    }

    @Override
    public void delete({{ID_TYPE}} id) {
        {{REPOSITORY_NAME_CAMEL}}.deleteById(id);
    }
}
"#;

const STANDALONE_SERVICE: &str = r#"package {{MODULE_PACKAGE}}.application.services;

public interface {{SERVICE_NAME}} {
}
"#;

const STANDALONE_SERVICE_IMPL: &str = r#"package {{MODULE_PACKAGE}}.application.services.implementations;

import {{MODULE_PACKAGE}}.application.services.{{SERVICE_NAME}};
import org.springframework.stereotype.Service;

@Service
public class {{SERVICE_NAME}}Impl implements {{SERVICE_NAME}} {
}
"#;

const CONTROLLER: &str = r#"package {{MODULE_PACKAGE}}.infrastructure.controllers;

import {{MODULE_PACKAGE}}.application.services.{{SERVICE_NAME}};
import {{MODULE_PACKAGE}}.domain.entities.{{NAME}};
import java.util.List;
{{ID_IMPORT}}
{{INJECTION_IMPORT}}
import org.springframework.http.HttpStatus;
import org.springframework.web.bind.annotation.*;

@RestController
@RequestMapping("/api/{{RESOURCE_PATH}}")
{{INJECTION_ANNOTATION}}
public class {{CONTROLLER_NAME}} {

    {{AUTOWIRED}}
    {{FIELD_MODIFIER}} {{SERVICE_NAME}} {{SERVICE_NAME_CAMEL}};

    @GetMapping
    public List<{{NAME}}> findAll() {
        return {{SERVICE_NAME_CAMEL}}.findAll();
    }

    @GetMapping("/{id}")
    public {{NAME}} findById(@PathVariable {{ID_TYPE}} id) {
        return {{SERVICE_NAME_CAMEL}}.findById(id);
    }

    @PostMapping
    @ResponseStatus(HttpStatus.CREATED)
    public {{NAME}} create(@RequestBody {{NAME}} {{NAME_CAMEL}}) {
        return {{SERVICE_NAME_CAMEL}}.create({{NAME_CAMEL}});
    }

    @PutMapping("/{id}")
    public {{NAME}} update(@PathVariable {{ID_TYPE}} id, @RequestBody {{NAME}} {{NAME_CAMEL}}) {
        return {{SERVICE_NAME_CAMEL}}.update(id, {{NAME_CAMEL}});
    }

    @DeleteMapping("/{id}")
    @ResponseStatus(HttpStatus.NO_CONTENT)
    public void delete(@PathVariable {{ID_TYPE}} id) {
        {{SERVICE_NAME_CAMEL}}.delete(id);
    }
}
"#;

const STANDALONE_CONTROLLER: &str = r#"package {{MODULE_PACKAGE}}.infrastructure.controllers;

import org.springframework.web.bind.annotation.RequestMapping;
import org.springframework.web.bind.annotation.RestController;

@RestController
@RequestMapping("/api/{{RESOURCE_PATH}}")
public class {{CONTROLLER_NAME}} {
}
"#;
