//! Generation preferences.
//!
//! [`GeneratorConfig`] mirrors the user's JSON document: every field is
//! optional. [`GeneratorConfig::resolve`] is the single place where fallback
//! defaults are applied; generation code only ever sees [`ResolvedConfig`].

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{IdType, InjectionStyle, Layer};

/// Loosely-typed configuration as supplied by the external loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub layers: Option<LayersConfig>,
    // Environment sources lowercase their keys.
    #[serde(alias = "idtype")]
    pub id_type: Option<IdType>,
    pub transactional: Option<bool>,
    pub injection: Option<InjectionStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayersConfig {
    pub application: Option<LayerConfig>,
    pub domain: Option<LayerConfig>,
    pub infrastructure: Option<LayerConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    pub enabled: Option<bool>,
    pub folders: Option<Vec<String>>,
}

/// Configuration with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub layers: Vec<ResolvedLayer>,
    pub id_type: IdType,
    pub transactional: bool,
    pub injection: InjectionStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayer {
    pub layer: Layer,
    pub enabled: bool,
    pub folders: Vec<String>,
}

/// Default folder set scaffolded for each layer.
pub fn default_folders(layer: Layer) -> &'static [&'static str] {
    match layer {
        Layer::Application => &["services", "dtos", "mappers"],
        Layer::Domain => &["entities", "enums", "exceptions"],
        Layer::Infrastructure => &["repositories", "controllers", "config"],
    }
}

impl GeneratorConfig {
    /// Apply defaults.
    ///
    /// | Field | Default |
    /// |-------|---------|
    /// | `layers.*.enabled` | `true` |
    /// | `layers.*.folders` | [`default_folders`] |
    /// | `idType` | `UUID` |
    /// | `transactional` | `true` |
    /// | `injection` | `constructor` |
    pub fn resolve(&self) -> ResolvedConfig {
        let layers = Layer::ALL
            .into_iter()
            .map(|layer| {
                let configured = self.layer_config(layer);
                ResolvedLayer {
                    layer,
                    enabled: configured.and_then(|c| c.enabled).unwrap_or(true),
                    folders: configured
                        .and_then(|c| c.folders.clone())
                        .unwrap_or_else(|| {
                            default_folders(layer)
                                .iter()
                                .map(|f| f.to_string())
                                .collect()
                        }),
                }
            })
            .collect();

        ResolvedConfig {
            layers,
            id_type: self.id_type.unwrap_or_default(),
            transactional: self.transactional.unwrap_or(true),
            injection: self.injection.unwrap_or_default(),
        }
    }

    fn layer_config(&self, layer: Layer) -> Option<&LayerConfig> {
        let layers = self.layers.as_ref()?;
        match layer {
            Layer::Application => layers.application.as_ref(),
            Layer::Domain => layers.domain.as_ref(),
            Layer::Infrastructure => layers.infrastructure.as_ref(),
        }
    }
}

impl ResolvedConfig {
    pub fn enabled_layers(&self) -> impl Iterator<Item = &ResolvedLayer> {
        self.layers.iter().filter(|l| l.enabled)
    }

    /// Spell every value out as a document that resolves back to `self`.
    pub fn to_document(&self) -> GeneratorConfig {
        let mut layers = LayersConfig::default();
        for resolved in &self.layers {
            let entry = Some(LayerConfig {
                enabled: Some(resolved.enabled),
                folders: Some(resolved.folders.clone()),
            });
            match resolved.layer {
                Layer::Application => layers.application = entry,
                Layer::Domain => layers.domain = entry,
                Layer::Infrastructure => layers.infrastructure = entry,
            }
        }

        GeneratorConfig {
            layers: Some(layers),
            id_type: Some(self.id_type),
            transactional: Some(self.transactional),
            injection: Some(self.injection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let resolved = GeneratorConfig::default().resolve();
        assert_eq!(resolved.id_type, IdType::Uuid);
        assert!(resolved.transactional);
        assert_eq!(resolved.injection, InjectionStyle::Constructor);
        assert_eq!(resolved.enabled_layers().count(), 3);
        assert_eq!(
            resolved.layers[0].folders,
            vec!["services", "dtos", "mappers"]
        );
    }

    #[test]
    fn partial_layer_config_keeps_other_defaults() {
        let config = GeneratorConfig {
            layers: Some(LayersConfig {
                domain: Some(LayerConfig {
                    enabled: Some(false),
                    folders: None,
                }),
                infrastructure: Some(LayerConfig {
                    enabled: None,
                    folders: Some(vec!["repositories".into()]),
                }),
                ..Default::default()
            }),
            id_type: Some(IdType::Long),
            ..Default::default()
        };

        let resolved = config.resolve();
        assert_eq!(resolved.id_type, IdType::Long);
        let enabled: Vec<_> = resolved.enabled_layers().map(|l| l.layer).collect();
        assert_eq!(enabled, vec![Layer::Application, Layer::Infrastructure]);
        assert_eq!(resolved.layers[2].folders, vec!["repositories"]);
    }

    #[test]
    fn document_resolves_back_to_itself() {
        let resolved = GeneratorConfig {
            transactional: Some(false),
            ..Default::default()
        }
        .resolve();
        let document = resolved.to_document();
        assert_eq!(document.injection, Some(InjectionStyle::Constructor));
        assert_eq!(document.resolve(), resolved);
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "idType": "LONG",
            "injection": "field",
            "layers": { "application": { "enabled": false } }
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve();
        assert_eq!(resolved.id_type, IdType::Long);
        assert_eq!(resolved.injection, InjectionStyle::Field);
        assert!(!resolved.layers[0].enabled);
    }
}
