// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A minimal arena DOM, the input to the serializer.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`].
//! Each node stores its first child and its next sibling, so walking the
//! children of a node never allocates. A parser fills the arena through
//! the `create_*` and [`Dom::append`] methods; the serializer only ever
//! reads it.
//!
//! For example, the following tree
//!
//! ```text
//! div
//!  +- "text node"
//!  +- span
//! ```
//!
//! is built with
//!
//! ```ignore
//! let mut dom = Dom::new();
//! let div = dom.create_element("div", vec![]);
//! let text = dom.create_text("text node");
//! let span = dom.create_element("span", vec![]);
//! dom.append(dom.document(), div);
//! dom.append(div, text);
//! dom.append(div, span);
//! ```
//!
//! and serializes as `<div>text node<span></span></div>`.

use std::fmt;
use std::ops::Index;

use tendril::StrTendril;

/// Index of a node inside its [`Dom`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// The different kinds of nodes in the DOM.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// A node the parser could not make sense of. It can't be serialized.
    Error,
    Text,
    /// The root node of a HTML document.
    Document,
    Element,
    Comment,
    Doctype,
    /// Pre-formatted markup, written out exactly as given.
    Raw,
}

/// An attribute of an element, or a public/system identifier of a doctype.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Written as a `prefix:` before the key when non-empty.
    pub namespace: StrTendril,
    pub key: StrTendril,
    pub value: StrTendril,
}

impl Attribute {
    pub fn new<K, V>(key: K, value: V) -> Attribute
    where
        K: Into<StrTendril>,
        V: Into<StrTendril>,
    {
        Attribute::with_namespace("", key, value)
    }

    pub fn with_namespace<N, K, V>(namespace: N, key: K, value: V) -> Attribute
    where
        N: Into<StrTendril>,
        K: Into<StrTendril>,
        V: Into<StrTendril>,
    {
        Attribute {
            namespace: namespace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A DOM node.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    /// Tag name for elements, the doctype name for doctypes, and the
    /// contents for text, comment and raw nodes.
    pub data: StrTendril,
    /// Empty for the HTML namespace.
    pub namespace: StrTendril,
    /// In source order, which is also the order they are written in.
    pub attrs: Vec<Attribute>,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, data: StrTendril) -> Node {
        Node {
            kind,
            data,
            namespace: StrTendril::new(),
            attrs: vec![],
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn has_children(&self) -> bool {
        self.first_child.is_some()
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    /// Is this an element with the given local name in the HTML namespace?
    pub fn is_html_element(&self, name: &str) -> bool {
        self.is_element() && self.namespace.is_empty() && &*self.data == name
    }

    /// The value of the last attribute named `key`, ignoring namespaces.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|a| &*a.key == key)
            .map(|a| &*a.value)
    }
}

/// An arena of nodes, rooted at a `Document` node.
#[derive(Clone, Debug)]
pub struct Dom {
    nodes: Vec<Node>,
}

impl Default for Dom {
    fn default() -> Dom {
        Dom::new()
    }
}

impl Dom {
    pub fn new() -> Dom {
        Dom {
            nodes: vec![Node::new(NodeKind::Document, StrTendril::new())],
        }
    }

    /// The `Document` node created along with the arena.
    pub fn document(&self) -> NodeId {
        NodeId(0)
    }

    /// Look a node up, or `None` if `id` belongs to some other arena.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            dom: self,
            next: self.node(id).and_then(Node::first_child),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn create_element<N>(&mut self, name: N, attrs: Vec<Attribute>) -> NodeId
    where
        N: Into<StrTendril>,
    {
        self.create_element_ns("", name, attrs)
    }

    pub fn create_element_ns<S, N>(
        &mut self,
        namespace: S,
        name: N,
        attrs: Vec<Attribute>,
    ) -> NodeId
    where
        S: Into<StrTendril>,
        N: Into<StrTendril>,
    {
        let mut node = Node::new(NodeKind::Element, name.into());
        node.namespace = namespace.into();
        node.attrs = attrs;
        self.push(node)
    }

    pub fn create_text<T: Into<StrTendril>>(&mut self, text: T) -> NodeId {
        self.push(Node::new(NodeKind::Text, text.into()))
    }

    pub fn create_comment<T: Into<StrTendril>>(&mut self, text: T) -> NodeId {
        self.push(Node::new(NodeKind::Comment, text.into()))
    }

    /// Public and system identifiers are kept as `public` and `system`
    /// attributes; empty identifiers are left out.
    pub fn create_doctype<N, P, S>(&mut self, name: N, public_id: P, system_id: S) -> NodeId
    where
        N: Into<StrTendril>,
        P: Into<StrTendril>,
        S: Into<StrTendril>,
    {
        let mut node = Node::new(NodeKind::Doctype, name.into());
        let public_id = public_id.into();
        let system_id = system_id.into();
        if !public_id.is_empty() {
            node.attrs.push(Attribute::new("public", public_id));
        }
        if !system_id.is_empty() {
            node.attrs.push(Attribute::new("system", system_id));
        }
        self.push(node)
    }

    pub fn create_raw<T: Into<StrTendril>>(&mut self, html: T) -> NodeId {
        self.push(Node::new(NodeKind::Raw, html.into()))
    }

    pub fn create_error(&mut self) -> NodeId {
        self.push(Node::new(NodeKind::Error, StrTendril::new()))
    }

    /// Append a parentless node to another node's children.
    ///
    /// Panics if `child` already has a parent or if it is `parent` or one
    /// of its ancestors.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            assert!(id != child, "can't append a node to its own descendant");
            ancestor = self.nodes[id.0].parent;
        }
        // Invariant: child cannot have existing parent
        let previous_parent = self.nodes[child.0].parent.replace(parent);
        assert!(previous_parent.is_none());

        match self.nodes[parent.0].last_child.replace(child) {
            Some(last) => self.nodes[last.0].next_sibling = Some(child),
            None => self.nodes[parent.0].first_child = Some(child),
        }
    }
}

impl Index<NodeId> for Dom {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Iterator over the children of a node, in order.
pub struct Children<'a> {
    dom: &'a Dom,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        self.next = self.dom.node(id).and_then(Node::next_sibling);
        Some(id)
    }
}
