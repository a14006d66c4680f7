// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;

use crate::dom::NodeId;

/// Everything that can stop a serialization early.
///
/// Output already written to the sink when one of these is returned stays
/// there; nothing is rolled back.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The tree contains a node of kind `Error`.
    #[error("html: cannot render an error node")]
    ErrorNode,

    /// A root or a child link points at a node the arena does not hold.
    #[error("html: unknown node {0:?}")]
    UnknownNode(NodeId),

    /// A void element such as `<br>` was given children.
    #[error("html: void element <{0}> has child nodes")]
    VoidElementWithChildren(String),

    /// The underlying sink refused a write.
    #[error("html: write failed: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SerializeError>;
