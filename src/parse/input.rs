// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::io::{self, ErrorKind, Read};

/// A pull-style byte source with one byte of pushback.
///
/// Both backings share this one shape: a program file is read through
/// `BufReader<File>`, and a captured quotation body is a `&[u8]` over its
/// stored bytes.
pub struct Source<R> {
    r: R,
    /// The most recently produced byte, replayed once after `back`.
    last: Option<u8>,
    backed: bool,
}

impl<R: Read> Source<R> {
    #[inline]
    pub fn new(r: R) -> Self {
        Source {
            r,
            last: None,
            backed: false,
        }
    }

    /// Produces the next byte, or `None` at end of input.
    pub fn next(&mut self) -> io::Result<Option<u8>> {
        if self.backed {
            self.backed = false;
            return Ok(self.last);
        }
        let mut buf = [0; 1];
        loop {
            match self.r.read(&mut buf) {
                Ok(0) => {
                    self.last = None;
                    return Ok(None);
                }
                Ok(_) => {
                    self.last = Some(buf[0]);
                    return Ok(self.last);
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns the byte just produced to the stream, so that the next call
    /// to [`Source::next`] re-returns it. Exactly one level of pushback.
    pub fn back(&mut self) {
        debug_assert!(!self.backed, "double pushback");
        debug_assert!(self.last.is_some(), "pushback before any byte");
        self.backed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushback_replays_one_byte() {
        let mut src = Source::new(b"ab".as_slice());
        assert_eq!(src.next().unwrap(), Some(b'a'));
        src.back();
        assert_eq!(src.next().unwrap(), Some(b'a'));
        assert_eq!(src.next().unwrap(), Some(b'b'));
        src.back();
        assert_eq!(src.next().unwrap(), Some(b'b'));
        assert_eq!(src.next().unwrap(), None);
        assert_eq!(src.next().unwrap(), None);
    }
}
