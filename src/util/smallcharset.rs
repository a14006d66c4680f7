// Copyright 2014-2017 The html5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A set of "small characters", those with byte values less than 64.
//!
//! Every byte the serializer ever has to escape (`"`, `&`, `'`, `<`, `>`
//! and carriage return) falls in that range, so a single `u64` is enough
//! to answer membership for the escape scanners.

/// Represents a set of bytes with values less than 64.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SmallCharSet {
    pub bits: u64,
}

impl SmallCharSet {
    #[inline]
    pub fn contains(&self, n: u8) -> bool {
        n < 64 && 0 != (self.bits & (1 << (n as usize)))
    }

    /// Count the number of bytes at the beginning of `buf` which are not
    /// in the set.
    ///
    /// Set members are ASCII, so the returned length always falls on a
    /// character boundary of `buf`.
    #[inline]
    pub fn nonmember_prefix_len(&self, buf: &str) -> usize {
        buf.bytes().take_while(|&b| !self.contains(b)).count()
    }

    /// Byte offset of the first member of the set in `buf`, if any.
    #[inline]
    pub fn find_in(&self, buf: &str) -> Option<usize> {
        let n = self.nonmember_prefix_len(buf);
        if n < buf.len() {
            Some(n)
        } else {
            None
        }
    }
}

/// Create a [`SmallCharSet`], with each space-separated byte stored in the set.
macro_rules! small_char_set ( ($($e:expr)+) => (
    $crate::util::smallcharset::SmallCharSet {
        bits: $( (1 << ($e as usize)) )|+
    }
));
