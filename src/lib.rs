// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turn a parsed HTML tree back into markup.
//!
//! The output re-parses to an equivalent tree: text, attribute values and
//! comments are each escaped by their own rules, void elements never get
//! an end tag, and the text inside `<script>`, `<style>` and friends is
//! written as is. Elements can optionally be "skipped": their own tags
//! disappear while their contents stay in place.
//!
//! ```ignore
//! let mut out = vec![];
//! htmlprinter::render_skipping_elements(&mut out, &dom, dom.document(), |n: &Node| {
//!     n.is_html_element("html") || n.is_html_element("body")
//! })?;
//! ```

pub use dom::{Attribute, Dom, Node, NodeId, NodeKind};
pub use error::{Result, SerializeError};
pub use serialize::{
    render_to_sink, serialize, ByteSink, HtmlSerializer, NoSkip, SerializeOpts, SkipFilter,
    TraversalScope,
};

use std::io::{self, Write};

#[macro_use]
mod util;

pub mod data;
pub mod dom;
pub mod error;
pub mod serialize;

/// Write the tree under `node` to `writer`, keeping every element.
pub fn render<Wr: Write>(writer: Wr, dom: &Dom, node: NodeId) -> Result<()> {
    serialize(writer, dom, node, NoSkip, SerializeOpts::default())
}

/// Write the tree under `node` to `writer`, leaving out the tags of every
/// element `filter` picks while still writing their children.
pub fn render_skipping_elements<Wr, F>(writer: Wr, dom: &Dom, node: NodeId, filter: F) -> Result<()>
where
    Wr: Write,
    F: SkipFilter,
{
    serialize(writer, dom, node, filter, SerializeOpts::default())
}

/// Serialize into a fresh `String`.
pub fn render_to_string(dom: &Dom, node: NodeId) -> Result<String> {
    let mut buf: Vec<u8> = vec![];
    render_to_sink(&mut buf, dom, node, &NoSkip, SerializeOpts::default())?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
