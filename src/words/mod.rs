// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

//! The prelude: every native word installed before user source runs.

mod arith;
mod control;
mod io;

use bstr::BString;
use memchr::memchr;

use crate::{function::FunctionTable, parse::EResult, stack::Stack};

/// Installs the prelude into `funcs`.
pub fn install(funcs: &mut FunctionTable) {
    control::install(funcs);
    io::install(funcs);
    arith::install(funcs);
}

/// A string frame popped off the stack: begin sentinel, payload, end
/// sentinel, exactly as a literal pushed it.
pub(crate) struct Quotation {
    frame: Vec<u8>,
}

impl Quotation {
    /// Pops the machine-word length, then the frame it counts.
    pub(crate) fn pop(stack: &mut Stack) -> EResult<Quotation> {
        let len = stack.pop_usize()?;
        let frame = stack.pop_bytes(len)?;
        Ok(Quotation { frame })
    }

    /// The C-string payload: bytes after the begin sentinel, up to the
    /// first NUL.
    pub(crate) fn payload(&self) -> &[u8] {
        let tail = self.frame.get(1..).unwrap_or(&[]);
        &tail[..memchr(0, tail).unwrap_or(tail.len())]
    }

    /// The payload plus its NUL terminator: a table key, or the body handed
    /// back to the parser.
    pub(crate) fn with_nul(&self) -> BString {
        let mut bytes = BString::from(self.payload());
        bytes.push(0);
        bytes
    }
}
