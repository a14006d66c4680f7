// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static knowledge about HTML elements that the serializer consults.

use phf::{phf_set, Set};

use crate::dom::Node;

//§ void-elements
/// Elements that can't have any contents. They are always written as
/// `<name .../>` with no closing tag.
///
/// `keygen` is no longer part of HTML, but it is kept for backwards
/// compatibility.
static VOID_ELEMENTS: Set<&'static str> = phf_set! {
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen",
    "link", "meta", "param", "source", "track", "wbr"
};

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.contains(name)
}

//§ serialising-html-fragments
/// Do this element's text children get written literally, without escaping?
///
/// This only applies in the HTML namespace. `noscript` is always treated
/// as literal since we don't track whether scripting is enabled.
pub fn child_text_is_literal(node: &Node) -> bool {
    if !node.namespace.is_empty() {
        return false;
    }
    matches!(
        &*node.data,
        "iframe" | "noembed" | "noframes" | "noscript" | "plaintext" | "script" | "style" | "xmp"
    )
}

/// Elements where a parser drops a newline directly after the start tag.
pub fn drops_leading_newline(name: &str) -> bool {
    matches!(name, "pre" | "listing" | "textarea")
}
