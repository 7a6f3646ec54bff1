//! Arena-backed style sheet.
//!
//! Selector nesting is represented by node indices into an arena rather than
//! nested owned maps, so the parse stack holds plain `NodeId`s and closing a
//! block can never alias or corrupt another node.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Reserved root key holding the unnested declarations.
pub const BASE_KEY: &str = "base";

/// Index of a node in a [`StyleSheet`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(u32);

/// One value in a style node: either a literal CSS value or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleEntry {
    /// A raw CSS property value, e.g. `"red"` or `"0 auto"`.
    Value(String),
    /// A nested selector block.
    Block(NodeId),
}

/// A single style object: ordered, unique keys mapping to values or blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleNode {
    entries: IndexMap<String, StyleEntry>,
}

impl StyleNode {
    /// Sets `key` to `entry`, replacing any previous entry for that key.
    pub fn insert(&mut self, key: String, entry: StyleEntry) {
        self.entries.insert(key, entry);
    }

    /// Returns the entry for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    /// Number of entries in this node.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether this node has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A parsed CSS literal: an arena of style nodes rooted at a node whose
/// reserved `base` key holds the top-level declarations.
///
/// Built in one parse pass and discarded after the replacement text is
/// synthesized; nothing here persists.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    nodes: Vec<StyleNode>,
    root: NodeId,
    base: NodeId,
}

impl StyleSheet {
    /// Creates a sheet with an empty root containing an empty `base` node.
    pub fn new() -> Self {
        let mut sheet = Self {
            nodes: vec![StyleNode::default()],
            root: NodeId(0),
            base: NodeId(0),
        };
        let base = sheet.alloc();
        sheet
            .node_mut(sheet.root)
            .insert(BASE_KEY.to_string(), StyleEntry::Block(base));
        sheet.base = base;
        sheet
    }

    /// Allocates a fresh empty node and returns its id.
    pub fn alloc(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(StyleNode::default());
        id
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The id of the reserved `base` node.
    pub fn base(&self) -> NodeId {
        self.base
    }

    /// Borrows the node at `id`.
    pub fn node(&self, id: NodeId) -> &StyleNode {
        &self.nodes[id.0 as usize]
    }

    /// Mutably borrows the node at `id`.
    pub fn node_mut(&mut self, id: NodeId) -> &mut StyleNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Whether the `base` node holds no declarations. When it does not, the
    /// synthesized call omits the style-object argument entirely.
    pub fn base_is_empty(&self) -> bool {
        self.node(self.base).is_empty()
    }

    /// Renders the whole sheet as 2-space-indented JSON, the structured
    /// literal passed as the second `styled()` argument.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}

struct NodeRef<'a> {
    sheet: &'a StyleSheet,
    id: NodeId,
}

impl Serialize for NodeRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.sheet.node(self.id);
        let mut map = serializer.serialize_map(Some(node.len()))?;
        for (key, entry) in node.iter() {
            match entry {
                StyleEntry::Value(value) => map.serialize_entry(key, value)?,
                StyleEntry::Block(id) => map.serialize_entry(
                    key,
                    &NodeRef {
                        sheet: self.sheet,
                        id: *id,
                    },
                )?,
            }
        }
        map.end()
    }
}

impl Serialize for StyleSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeRef {
            sheet: self,
            id: self.root,
        }
        .serialize(serializer)
    }
}
