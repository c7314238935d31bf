//! Parser configuration.
//!
//! The parser is a pure function of its input plus this configuration. Hosts construct a
//! [`ParseConfig`] explicitly and pass it in; there is no process-wide default to reach into.

/// Nesting limit used when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Highest nesting limit the parser honors. Larger values are clamped to this so that a
/// configured limit cannot exhaust a 2 MiB thread stack.
pub const MAX_DEPTH_CEILING: usize = 128;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum nesting of blocks and aggregate expressions before the parser skips a construct.
    /// Values outside `1..=MAX_DEPTH_CEILING` are clamped when parsing.
    pub max_depth: usize,
    /// Whether syntax problems are recorded in the result
    pub collect_diagnostics: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            collect_diagnostics: true,
        }
    }
}

impl ParseConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nesting limit, clamped to `1..=MAX_DEPTH_CEILING`
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth.clamp(1, MAX_DEPTH_CEILING);
        self
    }

    /// The nesting limit the parser actually applies.
    pub fn depth_limit(&self) -> usize {
        self.max_depth.clamp(1, MAX_DEPTH_CEILING)
    }

    /// Enable or disable diagnostic collection
    pub fn with_diagnostics(mut self, collect: bool) -> Self {
        self.collect_diagnostics = collect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.collect_diagnostics);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(ParseConfig::new(), ParseConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = ParseConfig::new().with_max_depth(8).with_diagnostics(false);
        assert_eq!(config.max_depth, 8);
        assert!(!config.collect_diagnostics);
    }

    #[test]
    fn test_zero_depth_is_clamped() {
        assert_eq!(ParseConfig::new().with_max_depth(0).max_depth, 1);
    }

    #[test]
    fn test_huge_depth_is_clamped() {
        let config = ParseConfig::new().with_max_depth(1_000_000);
        assert_eq!(config.max_depth, MAX_DEPTH_CEILING);

        let direct = ParseConfig {
            max_depth: usize::MAX,
            ..ParseConfig::default()
        };
        assert_eq!(direct.depth_limit(), MAX_DEPTH_CEILING);
    }
}
