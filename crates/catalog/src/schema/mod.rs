// Copyright (c) opaldb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Hierarchical schema namespace.
//!
//! Schemas form a tree rooted at an unnamed, immutable root node. The
//! tree is an arena of nodes addressed by index; parent links are plain
//! indices, so there are no owning-pointer cycles. The tree is
//! read-mostly after initialization.

mod path;
mod resolve;

use std::collections::BTreeMap;

pub use path::SchemaPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaNodeId(pub usize);

#[derive(Debug)]
pub struct SchemaNode {
    pub name: String,
    pub mutable: bool,
    pub parent: Option<SchemaNodeId>,
    children: BTreeMap<String, SchemaNodeId>,
}

#[derive(Debug)]
pub struct SchemaTree {
    nodes: Vec<SchemaNode>,
}

impl Default for SchemaTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaTree {
    /// Creates a tree holding only the immutable root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![SchemaNode {
                name: String::new(),
                mutable: false,
                parent: None,
                children: BTreeMap::new(),
            }],
        }
    }

    pub fn root(&self) -> SchemaNodeId {
        SchemaNodeId(0)
    }

    /// Adds a schema under `parent`, or returns the existing child of
    /// that name.
    pub fn add_schema(
        &mut self,
        parent: SchemaNodeId,
        name: impl Into<String>,
        mutable: bool,
    ) -> SchemaNodeId {
        let name = name.into();
        if let Some(existing) = self.nodes[parent.0].children.get(&name) {
            return *existing;
        }

        let id = SchemaNodeId(self.nodes.len());
        self.nodes.push(SchemaNode {
            name: name.clone(),
            mutable,
            parent: Some(parent),
            children: BTreeMap::new(),
        });
        self.nodes[parent.0].children.insert(name, id);
        id
    }

    pub fn node(&self, id: SchemaNodeId) -> &SchemaNode {
        &self.nodes[id.0]
    }

    /// Exact-match child lookup.
    pub fn child(&self, id: SchemaNodeId, name: &str) -> Option<SchemaNodeId> {
        self.nodes[id.0].children.get(name).copied()
    }

    pub fn is_mutable(&self, id: SchemaNodeId) -> bool {
        self.nodes[id.0].mutable
    }

    /// The full path of a node, root excluded.
    pub fn path_of(&self, id: SchemaNodeId) -> SchemaPath {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &self.nodes[node_id.0];
            if node.parent.is_some() {
                segments.push(node.name.clone());
            }
            current = node.parent;
        }
        segments.reverse();
        SchemaPath::new(segments)
    }
}
