use std::collections::HashMap;
use std::path::Path;

use crate::dialect::DialectConfig;
use crate::dialects;
use crate::LookupError;

/// Routes file suffixes, content ids and names to dialect configurations.
///
/// Keys are case-insensitive. Registering a dialect under a name that is
/// already present replaces the old entry in place.
#[derive(Debug, Default, Clone)]
pub struct DialectRegistry {
    dialects: Vec<DialectConfig>,
    by_name: HashMap<String, usize>,
    by_content_id: HashMap<String, usize>,
    by_suffix: HashMap<String, usize>,
}

impl DialectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in dialect.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for dialect in dialects::builtin() {
            registry.register(*dialect);
        }
        registry
    }

    /// Register `config`, replacing any dialect with the same name.
    pub fn register(&mut self, config: DialectConfig) {
        let name = config.name.to_ascii_lowercase();
        let index = match self.by_name.get(&name) {
            Some(&index) => {
                tracing::debug!(dialect = config.name, "replacing registered dialect");
                self.by_content_id.retain(|_, i| *i != index);
                self.by_suffix.retain(|_, i| *i != index);
                self.dialects[index] = config;
                index
            }
            None => {
                tracing::debug!(dialect = config.name, label = config.label, "registered dialect");
                self.dialects.push(config);
                self.dialects.len() - 1
            }
        };

        self.by_name.insert(name, index);
        self.by_content_id
            .insert(config.content_id.to_ascii_lowercase(), index);
        for suffix in config.suffixes {
            let key = normalize_suffix(suffix);
            if !key.is_empty() {
                self.by_suffix.insert(key, index);
            }
        }
    }

    /// Look up a dialect by content id, file suffix (dot optional) or name.
    pub fn lookup(&self, key: &str) -> Result<&DialectConfig, LookupError> {
        let lowered = key.to_ascii_lowercase();
        let index = self
            .by_content_id
            .get(&lowered)
            .or_else(|| self.by_suffix.get(&normalize_suffix(&lowered)))
            .or_else(|| self.by_name.get(&lowered));

        match index {
            Some(&index) => Ok(&self.dialects[index]),
            None => {
                tracing::debug!(key, "no dialect registered");
                Err(LookupError { key: key.to_string() })
            }
        }
    }

    /// Look up a dialect by the extension of `path`.
    pub fn lookup_path(&self, path: &Path) -> Result<&DialectConfig, LookupError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => self.lookup(ext),
            None => Err(LookupError {
                key: path.display().to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }

    /// Registered dialect names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.dialects.iter().map(|d| d.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialectConfig> {
        self.dialects.iter()
    }
}

fn normalize_suffix(suffix: &str) -> String {
    suffix.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialects::{CLASS, SEQUENCE};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lookup_by_suffix() {
        let registry = DialectRegistry::with_builtins();
        assert_eq!(registry.lookup("pclass").unwrap().name, "plantuml_class");
        assert_eq!(registry.lookup(".PCLASS").unwrap().name, "plantuml_class");
    }

    #[test]
    fn test_lookup_by_content_id_and_name() {
        let registry = DialectRegistry::with_builtins();
        assert_eq!(
            registry.lookup("text/x-plantuml-sequence").unwrap().name,
            "plantuml_sequence"
        );
        assert_eq!(
            registry.lookup("plantuml_usecase").unwrap().content_id,
            "text/x-plantuml-usecase"
        );
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = DialectRegistry::with_builtins();
        let err = registry.lookup("xyz").unwrap_err();
        assert_eq!(err.key, "xyz");
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = DialectRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup("pclass").is_err());
    }

    #[test]
    fn test_lookup_path() {
        let registry = DialectRegistry::with_builtins();
        let dialect = registry.lookup_path(Path::new("docs/login.pseq")).unwrap();
        assert_eq!(dialect.name, "plantuml_sequence");
        assert!(registry.lookup_path(Path::new("Makefile")).is_err());
    }

    #[test]
    fn test_register_twice_does_not_duplicate() {
        let mut registry = DialectRegistry::new();
        registry.register(CLASS);
        registry.register(CLASS);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("pclass").unwrap(), &CLASS);
    }

    #[test]
    fn test_reregister_replaces_and_drops_stale_keys() {
        let mut registry = DialectRegistry::new();
        registry.register(SEQUENCE);
        registry.register(CLASS);

        let renamed = DialectConfig {
            suffixes: &["puml"],
            content_id: "text/x-plantuml",
            ..SEQUENCE
        };
        registry.register(renamed);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["plantuml_sequence", "plantuml_class"]);
        assert!(registry.lookup("pseq").is_err());
        assert!(registry.lookup("text/x-plantuml-sequence").is_err());
        assert_eq!(registry.lookup("puml").unwrap().name, "plantuml_sequence");
        assert_eq!(registry.lookup("pclass").unwrap().name, "plantuml_class");
    }
}
