//! Explanation output formatters.
//!
//! Provides human-readable and JSON formatters for explanations.

use std::collections::HashSet;
use std::fmt::Write;

use lineage_engine::NodeId;
use lineage_foundation::Datum;

use crate::config::ExplainConfig;
use crate::explain::Explanation;

// =============================================================================
// Formatter Trait
// =============================================================================

/// Trait for formatting explanations.
pub trait ExplainFormatter {
    /// Formats a single explanation to a string.
    fn format(&self, explanation: &Explanation) -> String;

    /// Formats multiple explanations.
    fn format_many(&self, explanations: &[&Explanation]) -> String {
        explanations
            .iter()
            .map(|e| self.format(e))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats explanations as an indented tree followed by the source list.
///
/// ```text
/// value: 5
/// ?
/// └── ! = 5  [composed(addition)]
///     └── ! = 5  [addition]
///         ├── # of @0 of ! = 3  [constant]
///         └── # of @1 of ! = 2  [constant]
/// sources:
///   # of @0 of ! = 3
///   # of @1 of ! = 2
/// ```
#[derive(Clone, Debug)]
pub struct HumanFormatter {
    /// Whether to include data next to designators.
    pub show_data: bool,
    /// Deepest level rendered.
    pub max_depth: usize,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self {
            show_data: true,
            max_depth: usize::MAX,
        }
    }
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter following `config`.
    #[must_use]
    pub fn from_config(config: &ExplainConfig) -> Self {
        Self {
            show_data: config.show_data,
            max_depth: config.max_depth,
        }
    }

    /// Builder method to hide data.
    #[must_use]
    pub fn without_data(mut self) -> Self {
        self.show_data = false;
        self
    }

    /// Builder method to limit the rendered depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    fn node_line(&self, explanation: &Explanation, node: NodeId) -> String {
        let object = explanation.tracer().designated_object(node);
        if self.show_data {
            format!(
                "{} = {}  [{}]",
                object.designator(),
                object.value(),
                object.value().label()
            )
        } else {
            format!("{}  [{}]", object.designator(), object.value().label())
        }
    }

    fn write_children(
        &self,
        out: &mut String,
        explanation: &Explanation,
        node: NodeId,
        prefix: &str,
        depth: usize,
        seen: &mut HashSet<NodeId>,
    ) {
        let children = explanation.tracer().children(node);
        if children.is_empty() {
            return;
        }
        if depth >= self.max_depth {
            let _ = writeln!(out, "{prefix}└── ...");
            return;
        }
        for (i, child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            let branch = if last { "└── " } else { "├── " };
            let line = self.node_line(explanation, *child);
            if seen.insert(*child) {
                let _ = writeln!(out, "{prefix}{branch}{line}");
                let next = format!("{prefix}{}", if last { "    " } else { "│   " });
                self.write_children(out, explanation, *child, &next, depth + 1, seen);
            } else {
                let _ = writeln!(out, "{prefix}{branch}{line}  (shared)");
            }
        }
    }
}

impl ExplainFormatter for HumanFormatter {
    fn format(&self, explanation: &Explanation) -> String {
        let mut out = String::new();
        if self.show_data {
            let _ = writeln!(out, "value: {}", explanation.value());
        }

        let root = explanation.root();
        let _ = writeln!(out, "{}", explanation.tracer().designated_object(root).designator());
        let mut seen = HashSet::from([root]);
        self.write_children(&mut out, explanation, root, "", 0, &mut seen);

        let _ = writeln!(out, "sources:");
        for source in explanation.sources() {
            if self.show_data {
                let _ = writeln!(out, "  {} = {}", source.designator, source.datum);
            } else {
                let _ = writeln!(out, "  {}", source.designator);
            }
        }
        out
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats explanations as JSON.
///
/// Nodes are listed in creation order with their child ids, so shared nodes
/// appear once.
#[derive(Clone, Debug)]
pub struct JsonFormatter {
    /// Whether to pretty-print JSON.
    pub pretty: bool,
    /// Whether node objects carry their data.
    pub show_data: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self {
            pretty: false,
            show_data: true,
        }
    }
}

impl JsonFormatter {
    /// Creates a new JSON formatter including data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a formatter following `config`.
    #[must_use]
    pub fn from_config(config: &ExplainConfig) -> Self {
        Self {
            pretty: config.pretty,
            show_data: config.show_data,
        }
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Formats a datum as JSON.
    fn format_datum(datum: &Datum) -> String {
        match datum {
            Datum::Nil => "null".to_string(),
            Datum::Bool(b) => b.to_string(),
            Datum::Int(n) => n.to_string(),
            Datum::Float(f) => {
                if f.is_nan() {
                    "\"NaN\"".to_string()
                } else if f.is_infinite() {
                    if *f > 0.0 {
                        "\"Infinity\"".to_string()
                    } else {
                        "\"-Infinity\"".to_string()
                    }
                } else {
                    f.to_string()
                }
            }
            Datum::String(s) => format!("\"{}\"", Self::escape_string(s)),
            Datum::List(items) => {
                let items: Vec<_> = items.iter().map(Self::format_datum).collect();
                format!("[{}]", items.join(","))
            }
            Datum::Map(map) => {
                let entries: Vec<_> = map
                    .iter()
                    .map(|(k, v)| {
                        format!(
                            "\"{}\":{}",
                            Self::escape_string(&k.to_string()),
                            Self::format_datum(v)
                        )
                    })
                    .collect();
                format!("{{{}}}", entries.join(","))
            }
        }
    }

    fn format_node(&self, explanation: &Explanation, node: NodeId) -> String {
        let tracer = explanation.tracer();
        let object = tracer.designated_object(node);
        let children: Vec<_> = tracer
            .children(node)
            .iter()
            .map(|c| c.index().to_string())
            .collect();
        let data = if self.show_data {
            format!(",\"value\":{}", Self::format_datum(object.value().datum()))
        } else {
            String::new()
        };
        format!(
            "{{\"id\":{},\"designator\":\"{}\",\"label\":\"{}\"{data},\"children\":[{}]}}",
            node.index(),
            Self::escape_string(&object.designator().to_string()),
            Self::escape_string(&object.value().label()),
            children.join(",")
        )
    }

    fn format_source(&self, explanation: &Explanation, index: usize) -> String {
        let source = &explanation.sources()[index];
        let data = if self.show_data {
            format!(",\"value\":{}", Self::format_datum(&source.datum))
        } else {
            String::new()
        };
        format!(
            "{{\"node\":{},\"designator\":\"{}\"{data}}}",
            source.node.index(),
            Self::escape_string(&source.designator.to_string())
        )
    }
}

impl ExplainFormatter for JsonFormatter {
    fn format(&self, explanation: &Explanation) -> String {
        let tracer = explanation.tracer();
        let nodes: Vec<_> = tracer
            .node_ids()
            .map(|id| self.format_node(explanation, id))
            .collect();
        let sources: Vec<_> = (0..explanation.source_count())
            .map(|i| self.format_source(explanation, i))
            .collect();
        let value = Self::format_datum(explanation.value().datum());

        if self.pretty {
            format!(
                "{{\n  \"value\": {value},\n  \"root\": {},\n  \"nodes\": [\n    {}\n  ],\n  \"sources\": [\n    {}\n  ]\n}}",
                explanation.root().index(),
                nodes.join(",\n    "),
                sources.join(",\n    ")
            )
        } else {
            format!(
                "{{\"value\":{value},\"root\":{},\"nodes\":[{}],\"sources\":[{}]}}",
                explanation.root().index(),
                nodes.join(","),
                sources.join(",")
            )
        }
    }

    fn format_many(&self, explanations: &[&Explanation]) -> String {
        let items: Vec<_> = explanations.iter().map(|e| self.format(e)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
