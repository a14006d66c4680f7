// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io::{self, BufWriter, Write};

use log::{debug, trace, warn};

use crate::data::{child_text_is_literal, drops_leading_newline, is_void_element};
use crate::dom::{Dom, Node, NodeId, NodeKind};
use crate::error::{Result, SerializeError};

pub use self::escape::{escape_attr_value, escape_comment, escape_text, write_quoted};

pub mod escape;

/// Something the serializer can write bytes into.
///
/// Implementations are expected to buffer; the serializer writes many
/// small pieces and never flushes.
pub trait ByteSink {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()>;

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.write_bytes(&[b])
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }
}

impl ByteSink for Vec<u8> {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.push(b);
        Ok(())
    }
}

impl<W: Write> ByteSink for BufWriter<W> {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write_all(buf)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_bytes(&mut self, buf: &[u8]) -> io::Result<()> {
        (**self).write_bytes(buf)
    }

    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        (**self).write_byte(b)
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        (**self).write_str(s)
    }
}

/// Decides which elements are written without their own tags.
///
/// A skipped element loses its start tag, attributes and end tag, but its
/// children are still written where the element was. The filter is only
/// asked about element nodes, once each, and must not depend on anything
/// but the node it is given.
pub trait SkipFilter {
    fn should_skip(&self, node: &Node) -> bool;
}

impl<F> SkipFilter for F
where
    F: Fn(&Node) -> bool,
{
    fn should_skip(&self, node: &Node) -> bool {
        self(node)
    }
}

/// A filter that keeps every element.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoSkip;

impl SkipFilter for NoSkip {
    fn should_skip(&self, _: &Node) -> bool {
        false
    }
}

//§ serializing-html-fragments
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraversalScope {
    /// Write the node itself, then its children.
    IncludeNode,
    /// Write only the node's children.
    ChildrenOnly,
}

#[derive(Copy, Clone, Debug)]
pub struct SerializeOpts {
    /// Serialize the root node? Default: IncludeNode
    pub traversal_scope: TraversalScope,
}

impl Default for SerializeOpts {
    fn default() -> SerializeOpts {
        SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
        }
    }
}

enum SerializeOp {
    /// The children of some node, from `next` on.
    Children { next: Option<NodeId>, literal: bool },
    Close(NodeId),
    /// Nothing may follow a `<plaintext>` element.
    Stop,
}

/// What to do once a step is done.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Walks a [`Dom`] depth first and writes it out as HTML.
///
/// The walk uses its own stack of pending operations rather than
/// recursion, so deep trees don't exhaust the call stack.
pub struct HtmlSerializer<'a, S: ?Sized, F: ?Sized> {
    sink: &'a mut S,
    dom: &'a Dom,
    filter: &'a F,
    stack: Vec<SerializeOp>,
}

impl<'a, S, F> HtmlSerializer<'a, S, F>
where
    S: ByteSink + ?Sized,
    F: SkipFilter + ?Sized,
{
    pub fn new(sink: &'a mut S, dom: &'a Dom, filter: &'a F) -> HtmlSerializer<'a, S, F> {
        HtmlSerializer {
            sink,
            dom,
            filter,
            stack: vec![],
        }
    }

    /// Write the tree under `root`.
    ///
    /// Reaching a `<plaintext>` element ends the walk successfully; nothing
    /// after its children is written.
    pub fn serialize(&mut self, root: NodeId, traversal_scope: TraversalScope) -> Result<()> {
        self.stack.clear();
        let mut flow = match traversal_scope {
            TraversalScope::IncludeNode => self.open(root)?,
            TraversalScope::ChildrenOnly => self.open_children_only(root)?,
        };

        while flow == Flow::Continue {
            let Some(op) = self.stack.pop() else {
                break;
            };
            flow = match op {
                SerializeOp::Children { next: None, .. } => Flow::Continue,
                SerializeOp::Children {
                    next: Some(id),
                    literal,
                } => self.child(id, literal)?,
                SerializeOp::Close(id) => self.end_elem(id)?,
                SerializeOp::Stop => Flow::Stop,
            };
        }

        if flow == Flow::Stop {
            debug!(
                "<plaintext> reached, {} pending operations dropped",
                self.stack.len()
            );
            self.stack.clear();
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> Result<&'a Node> {
        self.dom.node(id).ok_or(SerializeError::UnknownNode(id))
    }

    /// One child of a parent whose remaining children are being written.
    fn child(&mut self, id: NodeId, literal: bool) -> Result<Flow> {
        let node = self.node(id)?;
        self.stack.push(SerializeOp::Children {
            next: node.next_sibling(),
            literal,
        });

        if literal && node.kind == NodeKind::Text {
            self.sink.write_str(&node.data)?;
            return Ok(Flow::Continue);
        }
        self.open(id)
    }

    fn open(&mut self, id: NodeId) -> Result<Flow> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Error => return Err(SerializeError::ErrorNode),
            NodeKind::Text => escape_text(self.sink, &node.data)?,
            NodeKind::Document => self.push_children(node, false),
            NodeKind::Element => {
                let skip = self.filter.should_skip(node);
                self.start_elem(id, node, skip)?;
            }
            NodeKind::Comment => self.write_comment(&node.data)?,
            NodeKind::Doctype => self.write_doctype(node)?,
            NodeKind::Raw => self.sink.write_str(&node.data)?,
        }
        Ok(Flow::Continue)
    }

    fn open_children_only(&mut self, id: NodeId) -> Result<Flow> {
        let node = self.node(id)?;
        match node.kind {
            NodeKind::Element => self.push_contents(id, node, false),
            NodeKind::Document => self.push_children(node, false),
            _ => (),
        }
        Ok(Flow::Continue)
    }

    fn push_children(&mut self, node: &Node, literal: bool) {
        self.stack.push(SerializeOp::Children {
            next: node.first_child(),
            literal,
        });
    }

    fn start_elem(&mut self, id: NodeId, node: &'a Node, skip: bool) -> Result<()> {
        let name = &*node.data;

        if skip {
            trace!("skipping tags of <{}>", name);
        } else {
            self.sink.write_byte(b'<')?;
            self.sink.write_str(name)?;
            for attr in node.attrs.iter() {
                self.sink.write_byte(b' ')?;
                if !attr.namespace.is_empty() {
                    match &*attr.namespace {
                        "xml" | "xmlns" | "xlink" => (),
                        ns => warn!("attr with weird namespace {:?}", ns),
                    }
                    self.sink.write_str(&attr.namespace)?;
                    self.sink.write_byte(b':')?;
                }
                self.sink.write_str(&attr.key)?;
                self.sink.write_str("=\"")?;
                escape_attr_value(self.sink, &attr.value)?;
                self.sink.write_byte(b'"')?;
            }

            if is_void_element(name) {
                if node.has_children() {
                    return Err(SerializeError::VoidElementWithChildren(name.to_owned()));
                }
                self.sink.write_str("/>")?;
                return Ok(());
            }
            self.sink.write_byte(b'>')?;
        }

        // A parser drops a newline right after these start tags, so an
        // intended leading newline needs another one in front of it.
        if drops_leading_newline(name) {
            if let Some(first) = node.first_child() {
                let first = self.node(first)?;
                if first.kind == NodeKind::Text && first.data.starts_with('\n') {
                    self.sink.write_byte(b'\n')?;
                }
            }
        }

        self.push_contents(id, node, !skip);
        Ok(())
    }

    /// Queue an element's children, followed by its end tag if `close`.
    fn push_contents(&mut self, id: NodeId, node: &Node, close: bool) {
        let literal = child_text_is_literal(node);
        if literal && &*node.data == "plaintext" {
            // No end tag: <plaintext> runs to the end of the document.
            self.stack.push(SerializeOp::Stop);
        } else if close {
            self.stack.push(SerializeOp::Close(id));
        }
        self.push_children(node, literal);
    }

    fn end_elem(&mut self, id: NodeId) -> Result<Flow> {
        let node = self.node(id)?;
        self.sink.write_str("</")?;
        self.sink.write_str(&node.data)?;
        self.sink.write_byte(b'>')?;
        Ok(Flow::Continue)
    }

    fn write_comment(&mut self, text: &str) -> io::Result<()> {
        self.sink.write_str("<!--")?;
        escape_comment(self.sink, text)?;
        self.sink.write_str("-->")
    }

    fn write_doctype(&mut self, node: &Node) -> io::Result<()> {
        self.sink.write_str("<!DOCTYPE ")?;
        escape_text(self.sink, &node.data)?;

        let public_id = node.attr("public").unwrap_or("");
        let system_id = node.attr("system").unwrap_or("");
        if !public_id.is_empty() {
            self.sink.write_str(" PUBLIC ")?;
            write_quoted(self.sink, public_id)?;
            if !system_id.is_empty() {
                self.sink.write_byte(b' ')?;
                write_quoted(self.sink, system_id)?;
            }
        } else if !system_id.is_empty() {
            self.sink.write_str(" SYSTEM ")?;
            write_quoted(self.sink, system_id)?;
        }
        self.sink.write_byte(b'>')
    }
}

/// Write the tree under `node` into a sink that does its own buffering.
///
/// The sink is not flushed.
pub fn render_to_sink<S, F>(
    sink: &mut S,
    dom: &Dom,
    node: NodeId,
    filter: &F,
    opts: SerializeOpts,
) -> Result<()>
where
    S: ByteSink + ?Sized,
    F: SkipFilter + ?Sized,
{
    HtmlSerializer::new(sink, dom, filter).serialize(node, opts.traversal_scope)
}

/// Write the tree under `node` to a plain writer.
///
/// The writer is wrapped in a `BufWriter`, which is flushed once the
/// whole tree has been written.
pub fn serialize<Wr, F>(
    writer: Wr,
    dom: &Dom,
    node: NodeId,
    filter: F,
    opts: SerializeOpts,
) -> Result<()>
where
    Wr: Write,
    F: SkipFilter,
{
    let mut buf = BufWriter::new(writer);
    render_to_sink(&mut buf, dom, node, &filter, opts)?;
    buf.flush()?;
    Ok(())
}
