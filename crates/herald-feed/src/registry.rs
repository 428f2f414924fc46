//! Formatter registry

use std::sync::Arc;

use crate::atom::AtomFormatter;
use crate::rss::RssFormatter;
use crate::FeedFormatter;

/// Registry of available feed formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn FeedFormatter>>,
}

impl FormatterRegistry {
    /// Create a new registry with all built-in formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![Arc::new(RssFormatter::new()), Arc::new(AtomFormatter::new())],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// Register a formatter
    pub fn register<F: FeedFormatter + 'static>(&mut self, formatter: F) {
        self.formatters.push(Arc::new(formatter));
    }

    /// Get formatter by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn FeedFormatter>> {
        self.formatters.iter().find(|f| f.name() == name).cloned()
    }

    /// Get all registered formatters
    pub fn all(&self) -> &[Arc<dyn FeedFormatter>] {
        &self.formatters
    }

    /// Get all registered format names
    pub fn names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_creation() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.formatters.len(), 2);
    }

    #[test]
    fn test_get_by_name() {
        let registry = FormatterRegistry::new();
        assert!(registry.get("rss").is_some());
        assert!(registry.get("atom").is_some());
        assert!(registry.get("json").is_none());
    }

    #[test]
    fn test_names() {
        let registry = FormatterRegistry::new();
        let names = registry.names();
        assert!(names.contains(&"rss"));
        assert!(names.contains(&"atom"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = FormatterRegistry::empty();
        assert!(registry.all().is_empty());
    }
}
