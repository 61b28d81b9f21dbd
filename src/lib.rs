// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

//! Interpreter for a tiny concatenative stack language in the Forth
//! tradition.
//!
//! A program is a stream of whitespace-separated tokens: nestable `(...)`
//! string literals, decimal byte literals, and identifiers dispatched
//! through one global word table. Everything flows through one
//! byte-addressed stack; a parsed string leaves a sentinel-framed byte
//! string plus its length, and user-defined words are captured quotations
//! re-fed to the parser.
//!
//! ```
//! use catena::{parse::{parse, Source}, Machine};
//!
//! let mut out = Vec::new();
//! let mut m = Machine::new(&mut out);
//! parse(&mut Source::new(b"(hello world!) println".as_slice()), &mut m).unwrap();
//! assert_eq!(out, b"hello world!\n");
//! ```

mod function;
mod machine;
mod stack;

pub mod parse;
pub mod words;

pub use function::{Function, FunctionTable, NativeFn};
pub use machine::Machine;
pub use stack::{Stack, Underflow};
