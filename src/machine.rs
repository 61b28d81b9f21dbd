// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::io::Write;

use crate::{function::FunctionTable, stack::Stack, words};

/// The evaluator context, threaded explicitly through every parse.
///
/// One machine means one stack and one word table for the whole run; nested
/// parses reuse both. `print`, `println`, and `dump` write to `out`, so a
/// program's output can be captured as easily as it can go to stdout.
pub struct Machine<'a> {
    pub stack: Stack,
    pub funcs: FunctionTable,
    pub out: &'a mut dyn Write,
}

impl<'a> Machine<'a> {
    /// A fresh machine with the prelude installed.
    pub fn new(out: &'a mut dyn Write) -> Self {
        let mut funcs = FunctionTable::new();
        words::install(&mut funcs);
        Machine {
            stack: Stack::new(),
            funcs,
            out,
        }
    }
}
