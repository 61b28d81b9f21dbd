// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::io::{self, Read};

use bstr::{BString, ByteSlice};
use memchr::memchr;
use thiserror::Error;

use crate::{
    parse::{EResult, Source},
    stack::Underflow,
    Machine,
};

/// Longest run of digits kept for a numeric literal.
const NUMERICAL_LITERAL_MAX: usize = 3;
/// Longest identifier, in bytes.
const FUNCTION_NAME_MAX: usize = 31;

/// Any fatal evaluation error, including I/O. Nothing in the language can
/// catch one; it propagates out of the outermost parse.
#[derive(Debug, Error)]
#[error(transparent)]
pub enum EvalError {
    Parse(#[from] ParseError),
    Underflow(#[from] Underflow),
    Io(#[from] io::Error),
}

/// A kind of error from tokenizing source text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` outside any string literal lands here.
    #[error("malformed string literal")]
    MalformedString,
    /// A string literal reached the u32 length ceiling.
    #[error("string literal out of bounds")]
    StringTooLong,
    /// A numeric literal outside [0, 255].
    #[error("numerical literal out of bounds")]
    NumberOutOfRange,
    /// An identifier with no table entry.
    #[error("unknown function '{0}'")]
    UnknownFunction(BString),
}

#[inline(always)]
fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

/// Evaluates `src` to exhaustion against the machine.
///
/// Re-entrant: executing a user-defined word parses its stored body with
/// this same function, against the same machine.
pub fn parse<R: Read>(src: &mut Source<R>, m: &mut Machine) -> EResult<()> {
    while let Some(c) = src.next()? {
        if is_blank(c) || c == b'\n' {
            continue;
        }
        src.back();
        if c == b'(' || c == b')' {
            parse_string(src, m)?;
        } else if c.is_ascii_digit() {
            parse_number(src, m)?;
        } else {
            parse_word(src, m)?;
        }
    }
    Ok(())
}

/// Parses a string literal onto the stack: begin sentinel, payload bytes,
/// end sentinel, then the frame length as one machine word.
///
/// EOF inside the literal ends it silently; the frame and its length are
/// emitted either way.
fn parse_string<R: Read>(src: &mut Source<R>, m: &mut Machine) -> EResult<()> {
    if src.next()? != Some(b'(') {
        return Err(ParseError::MalformedString.into());
    }
    m.stack.push_u8(0); // begin sentinel
    let mut depth = 1u32;
    let mut length = 1usize; // counts the begin sentinel
    while let Some(mut c) = src.next()? {
        if length == u32::MAX as usize {
            return Err(ParseError::StringTooLong.into());
        }
        if c == b'\\' {
            // The next byte passes through verbatim, with no depth
            // bookkeeping and no escape-sequence translation.
            match src.next()? {
                Some(escaped) => c = escaped,
                None => break,
            }
        } else if c == b'(' {
            depth += 1;
        } else if c == b')' {
            depth -= 1;
            if depth == 0 {
                break;
            }
        }
        m.stack.push_u8(c);
        length += 1;
    }
    m.stack.push_u8(0); // end sentinel
    length += 1;
    m.stack.push_usize(length);
    Ok(())
}

/// Parses a decimal byte literal.
///
/// The byte that stops the run of digits is consumed and discarded, never
/// pushed back: `3)` is the number 3 with the `)` gone.
fn parse_number<R: Read>(src: &mut Source<R>, m: &mut Machine) -> EResult<()> {
    let mut digits = [0u8; NUMERICAL_LITERAL_MAX];
    let mut len = 0;
    while let Some(c) = src.next()? {
        if !c.is_ascii_digit() || len >= NUMERICAL_LITERAL_MAX {
            break;
        }
        digits[len] = c;
        len += 1;
    }
    let mut num = 0u32;
    for &d in &digits[..len] {
        num = num * 10 + u32::from(d - b'0');
    }
    if num > u32::from(u8::MAX) {
        return Err(ParseError::NumberOutOfRange.into());
    }
    m.stack.push_u8(num as u8);
    Ok(())
}

/// Parses an identifier and executes its table entry.
///
/// The delimiting blank or newline is consumed. Lookup keys are sized
/// `strlen + 1`: the name is truncated at its first interior NUL (a stored
/// quotation body ends with one, and this scan absorbs it into the final
/// identifier), then the terminating NUL is appended.
fn parse_word<R: Read>(src: &mut Source<R>, m: &mut Machine) -> EResult<()> {
    let mut name = [0u8; FUNCTION_NAME_MAX + 1];
    let mut len = 0;
    while let Some(c) = src.next()? {
        if is_blank(c) || c == b'\n' || len > FUNCTION_NAME_MAX {
            break;
        }
        name[len] = c;
        len += 1;
    }
    let name = &name[..len];
    let strlen = memchr(0, name).unwrap_or(name.len());
    let mut key = BString::from(&name[..strlen]);
    key.push(0);
    let fun = match m.funcs.get(key.as_bstr()) {
        Some(fun) => fun.clone(),
        None => return Err(ParseError::UnknownFunction(BString::from(&name[..strlen])).into()),
    };
    fun.execute(m)
}
