//! Configuration for rendering explanations.

use lineage_engine::TracerConfig;

/// Configuration for building and rendering explanations.
#[derive(Clone, Debug)]
pub struct ExplainConfig {
    /// Whether rendered nodes include their data.
    pub show_data: bool,

    /// Deepest tree level rendered; deeper nodes are elided.
    pub max_depth: usize,

    /// Output format: true for JSON, false for human-readable.
    pub json_output: bool,

    /// Whether JSON output is pretty-printed.
    pub pretty: bool,

    /// Configuration of the tracer session behind the explanation.
    pub tracer: TracerConfig,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            show_data: true,
            max_depth: 32,
            json_output: false,
            pretty: false,
            tracer: TracerConfig::default(),
        }
    }
}

impl ExplainConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration showing only designators, a few levels deep.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            show_data: false,
            max_depth: 4,
            ..Self::default()
        }
    }

    /// Creates a configuration rendering the whole graph with data.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            show_data: true,
            max_depth: usize::MAX,
            ..Self::default()
        }
    }

    /// Creates a configuration for pretty-printed JSON.
    #[must_use]
    pub fn json() -> Self {
        Self {
            json_output: true,
            pretty: true,
            max_depth: usize::MAX,
            ..Self::default()
        }
    }

    /// Builder method to show or hide data.
    #[must_use]
    pub fn with_show_data(mut self, show: bool) -> Self {
        self.show_data = show;
        self
    }

    /// Builder method to set the rendered depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder method to enable/disable JSON output.
    #[must_use]
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    /// Builder method to enable/disable pretty printing.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builder method to set the tracer configuration.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }
}
