// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::{
    collections::HashMap,
    fmt::{self, Debug, Formatter},
};

use bstr::{BStr, BString, ByteSlice};

use crate::{
    parse::{parse, EResult, Source},
    Machine,
};

/// A built-in word, run against the evaluator context.
pub type NativeFn = fn(&mut Machine) -> EResult<()>;

/// A word table entry: built-in code, or a captured quotation body.
#[derive(Clone)]
pub enum Function {
    Native(NativeFn),
    /// The quotation body, ending with its NUL terminator.
    User(BString),
}

impl Function {
    /// Runs the word.
    ///
    /// A user body is re-parsed from a memory-backed source. The recursive
    /// parse shares the caller's stack and word table, which is how a
    /// quotation sees the stack its caller built.
    pub fn execute(&self, m: &mut Machine) -> EResult<()> {
        match self {
            Function::Native(f) => f(m),
            Function::User(body) => parse(&mut Source::new(body.as_slice()), m),
        }
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Function::Native(_) => f.debug_tuple("Native").finish(),
            Function::User(body) => f.debug_tuple("User").field(&body.as_bstr()).finish(),
        }
    }
}

/// The single global table of words.
///
/// Keys are the exact bytes a definition stored, including the terminating
/// NUL: identity is byte-string identity, sized `strlen + 1`, not C-string
/// identity.
pub struct FunctionTable {
    entries: HashMap<BString, Function>,
}

impl FunctionTable {
    pub fn new() -> Self {
        FunctionTable {
            entries: HashMap::new(),
        }
    }

    /// Installs `fun` under `key`, replacing any previous entry. The
    /// replaced entry's body is freed here.
    #[inline]
    pub fn put(&mut self, key: BString, fun: Function) {
        self.entries.insert(key, fun);
    }

    #[inline]
    pub fn get(&self, key: &BStr) -> Option<&Function> {
        self.entries.get(key)
    }

    /// Removes the entry. Absent keys are a no-op.
    #[inline]
    pub fn del(&mut self, key: &BStr) {
        self.entries.remove(key);
    }

    /// Prelude helper: keys a native word by `name` plus the NUL.
    pub fn define_native(&mut self, name: &[u8], fun: NativeFn) {
        let mut key = BString::from(name);
        key.push(0);
        self.put(key, Function::Native(fun));
    }
}
