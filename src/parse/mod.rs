// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

mod input;
mod parser;

pub use input::*;
pub use parser::*;

pub type EResult<T> = Result<T, EvalError>;
