//! Domain value objects: Layer, ResourceType, MapperType, IdType, ResourceKind,
//! InjectionStyle, TemplateId.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. Classification rules live
//! in `classifier.rs`, path rules in `conventions.rs`.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Layer ─────────────────────────────────────────────────────────────────────

/// One of the three fixed architectural layers inside a module.
///
/// The set is closed. Configuration may disable scaffolding of a layer, but
/// discovery always checks all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Application,
    Domain,
    Infrastructure,
}

impl Layer {
    /// All layers, in scan order.
    pub const ALL: [Layer; 3] = [Self::Application, Self::Domain, Self::Infrastructure];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Domain => "domain",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Case-insensitive match against a directory name.
    pub fn matches_dir_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ResourceType ──────────────────────────────────────────────────────────────

/// Classification result for a scanned source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Entity,
    Repository,
    Service,
    Controller,
    Mapper,
    Dto,
    Enum,
    Unknown,
}

impl ResourceType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
            Self::Mapper => "mapper",
            Self::Dto => "dto",
            Self::Enum => "enum",
            Self::Unknown => "unknown",
        }
    }

    /// Naming suffix conventionally carried by files of this type.
    pub const fn role_suffix(&self) -> Option<&'static str> {
        match self {
            Self::Repository => Some("Repository"),
            Self::Service => Some("Service"),
            Self::Controller => Some("Controller"),
            Self::Mapper => Some("Mapper"),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── MapperType ────────────────────────────────────────────────────────────────

/// Sub-kind of a mapper resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapperType {
    #[default]
    None,
    PlainMapper,
    FrameworkMapper,
}

impl MapperType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PlainMapper => "plain-mapper",
            Self::FrameworkMapper => "framework-mapper",
        }
    }
}

impl fmt::Display for MapperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IdType ────────────────────────────────────────────────────────────────────

/// Identifier type used by generated entities and everything built on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdType {
    #[default]
    #[serde(alias = "uuid")]
    Uuid,
    #[serde(alias = "long")]
    Long,
}

impl IdType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Uuid => "UUID",
            Self::Long => "LONG",
        }
    }

    /// Java type name written into templates.
    pub const fn java_type(&self) -> &'static str {
        match self {
            Self::Uuid => "UUID",
            Self::Long => "Long",
        }
    }

    /// JPA generation strategy paired with the identifier type.
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::Uuid => "GenerationType.UUID",
            Self::Long => "GenerationType.IDENTITY",
        }
    }

    /// Infer the identifier type from an existing entity source.
    ///
    /// Deliberately a substring check: any mention of `UUID` selects the UUID
    /// variant, everything else falls back to the numeric surrogate.
    pub fn infer_from_entity(source: &str) -> Self {
        if source.contains("UUID") {
            Self::Uuid
        } else {
            Self::Long
        }
    }
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "long" | "numeric" => Ok(Self::Long),
            other => Err(DomainError::UnknownIdType(other.to_string())),
        }
    }
}

// ── ResourceKind ──────────────────────────────────────────────────────────────

/// Resource kinds the generator can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Entity,
    Repository,
    Service,
    Controller,
}

impl ResourceKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::Controller => "controller",
        }
    }

    /// Whether the kind supports the entity-based / standalone split.
    pub const fn has_standalone_mode(&self) -> bool {
        matches!(self, Self::Service | Self::Controller)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "repository" | "repo" => Ok(Self::Repository),
            "service" => Ok(Self::Service),
            "controller" => Ok(Self::Controller),
            other => Err(DomainError::UnknownResourceKind(other.to_string())),
        }
    }
}

// ── InjectionStyle ────────────────────────────────────────────────────────────

/// How generated classes receive their collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionStyle {
    /// Lombok `@RequiredArgsConstructor` with `final` fields.
    #[default]
    Constructor,
    /// `@Autowired` fields.
    Field,
}

impl InjectionStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for InjectionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjectionStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constructor" => Ok(Self::Constructor),
            "field" | "autowired" => Ok(Self::Field),
            other => Err(DomainError::UnknownInjectionStyle(other.to_string())),
        }
    }
}

// ── TemplateId ────────────────────────────────────────────────────────────────

/// Closed set of template identifiers, one per artifact kind/variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Entity,
    Repository,
    Service,
    ServiceImpl,
    StandaloneService,
    StandaloneServiceImpl,
    Controller,
    StandaloneController,
}

impl TemplateId {
    pub const ALL: [TemplateId; 8] = [
        Self::Entity,
        Self::Repository,
        Self::Service,
        Self::ServiceImpl,
        Self::StandaloneService,
        Self::StandaloneServiceImpl,
        Self::Controller,
        Self::StandaloneController,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::Service => "service",
            Self::ServiceImpl => "service-impl",
            Self::StandaloneService => "standalone-service",
            Self::StandaloneServiceImpl => "standalone-service-impl",
            Self::Controller => "controller",
            Self::StandaloneController => "standalone-controller",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate(s.to_string()))
    }
}
