//! The provenance graph built during a query session.
//!
//! Nodes live in an arena owned by the [`NodeFactory`] and are addressed by
//! [`NodeId`]. The factory merges structurally equal
//! `(designator, value)` pairs, so one source reached along two paths becomes
//! a single node with two parents.

use std::collections::HashMap;
use std::fmt;

use lineage_foundation::{AtomicDesignator, Designator};

use crate::value::Value;

// =============================================================================
// Node Identity
// =============================================================================

/// Index of a node inside one tracer session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the arena index of this node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A value together with the role it plays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DesignatedObject {
    designator: Designator,
    value: Value,
}

impl DesignatedObject {
    /// Pairs a designator with a value.
    #[must_use]
    pub fn new(designator: Designator, value: Value) -> Self {
        Self { designator, value }
    }

    /// Returns the role.
    #[must_use]
    pub fn designator(&self) -> &Designator {
        &self.designator
    }

    /// Returns the value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Display for DesignatedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.designator, self.value)
    }
}

/// One node of the provenance graph.
#[derive(Clone, Debug)]
pub struct ObjectNode {
    object: DesignatedObject,
    children: Vec<NodeId>,
}

impl ObjectNode {
    /// Returns the `(designator, value)` pair this node stands for.
    #[must_use]
    pub fn object(&self) -> &DesignatedObject {
        &self.object
    }

    /// Returns the children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

// =============================================================================
// Node Factory
// =============================================================================

/// Session registry mapping designated objects to their unique node.
#[derive(Debug, Default)]
pub struct NodeFactory {
    nodes: Vec<ObjectNode>,
    index: HashMap<DesignatedObject, NodeId>,
}

impl NodeFactory {
    /// Creates an empty factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `(designator, value)`, creating it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the session holds more than `u32::MAX` nodes.
    pub fn get_object_node(&mut self, designator: &Designator, value: &Value) -> NodeId {
        let object = DesignatedObject::new(designator.clone(), value.clone());
        if let Some(id) = self.index.get(&object) {
            return *id;
        }
        let Ok(raw) = u32::try_from(self.nodes.len()) else {
            panic!("provenance graph exceeded {} nodes", u32::MAX);
        };
        let id = NodeId(raw);
        self.nodes.push(ObjectNode {
            object: object.clone(),
            children: Vec::new(),
        });
        self.index.insert(object, id);
        id
    }

    /// Appends `child` to `parent`'s children.
    ///
    /// Attaching the same child twice to one parent is a no-op.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let children = &mut self.nodes[parent.index()].children;
        if !children.contains(&child) {
            children.push(child);
        }
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ObjectNode {
        &self.nodes[id.index()]
    }

    /// Returns the number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every node id in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).filter_map(|i| u32::try_from(i).ok().map(NodeId))
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Configuration for a tracer session.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Maximum recursion depth of a query before it panics.
    pub max_depth: usize,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self { max_depth: 1024 }
    }
}

impl TracerConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum query depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// One provenance query session.
///
/// Owns the node registry and the distinguished unknown root. Start a fresh
/// tracer per question; node identity is only meaningful within one session.
#[derive(Debug)]
pub struct Tracer {
    factory: NodeFactory,
    root: NodeId,
    config: TracerConfig,
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer {
    /// Creates a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TracerConfig::default())
    }

    /// Creates a session with the given configuration.
    #[must_use]
    pub fn with_config(config: TracerConfig) -> Self {
        let mut factory = NodeFactory::new();
        let unknown = Value::constant(lineage_foundation::Datum::Nil);
        let root = factory.get_object_node(&Designator::atomic(AtomicDesignator::Unknown), &unknown);
        Self {
            factory,
            root,
            config,
        }
    }

    /// Returns the root node every query hangs from.
    #[must_use]
    pub fn unknown_node(&self) -> NodeId {
        self.root
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// See [`NodeFactory::get_object_node`].
    pub fn get_object_node(&mut self, designator: &Designator, value: &Value) -> NodeId {
        self.factory.get_object_node(designator, value)
    }

    /// See [`NodeFactory::add_child`].
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        self.factory.add_child(parent, child);
    }

    /// Returns the node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &ObjectNode {
        self.factory.node(id)
    }

    /// Returns the children of a node in insertion order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.factory.node(id).children()
    }

    /// Returns the `(designator, value)` pair of a node.
    #[must_use]
    pub fn designated_object(&self, id: NodeId) -> &DesignatedObject {
        self.factory.node(id).object()
    }

    /// Returns the number of nodes, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.factory.len()
    }

    /// Iterates over every node id in creation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.factory.ids()
    }

    /// Returns every node listing `id` as a child, in creation order.
    #[must_use]
    pub fn parents(&self, id: NodeId) -> Vec<NodeId> {
        self.node_ids()
            .filter(|p| self.children(*p).contains(&id))
            .collect()
    }

    /// Returns the distinct childless nodes reachable from `id`, depth-first.
    #[must_use]
    pub fn leaves_under(&self, id: NodeId) -> Vec<NodeId> {
        let mut seen = Vec::new();
        let mut leaves = Vec::new();
        self.collect_leaves(id, &mut seen, &mut leaves);
        leaves
    }

    fn collect_leaves(&self, id: NodeId, seen: &mut Vec<NodeId>, leaves: &mut Vec<NodeId>) {
        if seen.contains(&id) {
            return;
        }
        seen.push(id);
        let children = self.children(id);
        if children.is_empty() {
            leaves.push(id);
            return;
        }
        for child in children {
            self.collect_leaves(*child, seen, leaves);
        }
    }

    /// Guards query recursion.
    ///
    /// # Panics
    ///
    /// Panics if `depth` exceeds the configured maximum.
    pub fn check_depth(&self, depth: usize) {
        assert!(
            depth <= self.config.max_depth,
            "provenance query exceeded max depth {}",
            self.config.max_depth
        );
    }
}
