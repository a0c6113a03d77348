//! Emission configuration for generated declarations.

/// Derives applied to every generated struct unless overridden.
pub const DEFAULT_DERIVES: &[&str] = &[
    "Debug",
    "Clone",
    "Default",
    "PartialEq",
    "serde::Serialize",
    "serde::Deserialize",
];

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Whether to prepend the "generated code" header comment
    pub header: bool,
    /// Derive paths applied to every generated struct, in order
    pub derives: Vec<String>,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            header: true,
            derives: DEFAULT_DERIVES.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the header comment
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Replace the derive list
    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    /// Append one derive, keeping the list free of duplicates
    pub fn with_extra_derive(mut self, derive: impl Into<String>) -> Self {
        let derive = derive.into();
        if !self.derives.contains(&derive) {
            self.derives.push(derive);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmitConfig::default();
        assert!(config.header);
        assert_eq!(config.derives.len(), DEFAULT_DERIVES.len());
        assert_eq!(config.derives[0], "Debug");
    }

    #[test]
    fn test_with_derives_replaces_list() {
        let config = EmitConfig::new().with_derives(["Debug"]);
        assert_eq!(config.derives, vec!["Debug".to_string()]);
    }

    #[test]
    fn test_with_extra_derive_skips_duplicates() {
        let config = EmitConfig::new().with_extra_derive("Eq").with_extra_derive("Debug");
        assert_eq!(config.derives.len(), DEFAULT_DERIVES.len() + 1);
        assert_eq!(config.derives.last().map(String::as_str), Some("Eq"));
    }

    #[test]
    fn test_without_header() {
        assert!(!EmitConfig::new().with_header(false).header);
    }
}
