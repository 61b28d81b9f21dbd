// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use bstr::ByteSlice;

use super::Quotation;
use crate::{
    function::{Function, FunctionTable},
    parse::{parse, EResult, Source},
    Machine,
};

pub(super) fn install(funcs: &mut FunctionTable) {
    funcs.define_native(b"mkfun", mkfun);
    funcs.define_native(b"delfun", delfun);
    funcs.define_native(b"eval", eval);
    funcs.define_native(b"ifelse", ifelse);
    funcs.define_native(b"loop", repeat);
}

/// `mkfun`: pop the name, pop the body, (re)define the word. A replaced
/// entry's body is freed by the table.
fn mkfun(m: &mut Machine) -> EResult<()> {
    let name = Quotation::pop(&mut m.stack)?;
    let body = Quotation::pop(&mut m.stack)?;
    m.funcs.put(name.with_nul(), Function::User(body.with_nul()));
    Ok(())
}

/// `delfun`: pop the name, remove the word if defined.
fn delfun(m: &mut Machine) -> EResult<()> {
    let name = Quotation::pop(&mut m.stack)?;
    m.funcs.del(name.with_nul().as_bstr());
    Ok(())
}

/// `eval`: pop a quotation and parse it in the current context.
fn eval(m: &mut Machine) -> EResult<()> {
    let body = Quotation::pop(&mut m.stack)?.with_nul();
    parse(&mut Source::new(body.as_slice()), m)
}

/// `ifelse`: pop the else-body, pop the if-body, pop the condition byte,
/// and parse exactly one of the two.
fn ifelse(m: &mut Machine) -> EResult<()> {
    let alt = Quotation::pop(&mut m.stack)?;
    let cons = Quotation::pop(&mut m.stack)?;
    let v = m.stack.pop_u8()?;
    let body = if v != 0 { cons.with_nul() } else { alt.with_nul() };
    parse(&mut Source::new(body.as_slice()), m)
}

/// `loop`: pop the body, then parse it for as long as the byte on top pops
/// nonzero. The body is expected to leave the next check byte behind.
fn repeat(m: &mut Machine) -> EResult<()> {
    let body = Quotation::pop(&mut m.stack)?.with_nul();
    loop {
        if m.stack.pop_u8()? == 0 {
            return Ok(());
        }
        parse(&mut Source::new(body.as_slice()), m)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::EvalError;

    fn run(src: &[u8]) -> (Vec<u8>, Vec<u8>) {
        let mut out = Vec::new();
        let stack;
        {
            let mut m = Machine::new(&mut out);
            parse(&mut Source::new(src), &mut m).unwrap();
            stack = m.stack.as_bytes().to_vec();
        }
        (stack, out)
    }

    #[test]
    fn ifelse_branches_are_exclusive() {
        // The untaken branch must leave no trace on the stack or the sink.
        let (stack, out) = run(b"1 (201) (202) ifelse");
        assert_eq!(out, b"");
        assert_eq!(stack, [201]);
        let (stack, out) = run(b"0 (201) (202) ifelse");
        assert_eq!(stack, [202]);
        assert_eq!(out, b"");
    }

    #[test]
    fn loop_zero_times() {
        let (stack, out) = run(b"0 ((hi) print 0) loop");
        assert_eq!(out, b"");
        assert!(stack.is_empty());
    }

    #[test]
    fn loop_consumes_the_check_byte_each_round() {
        // Three check bytes pre-pushed: two nonzero rounds, then the zero.
        let (stack, out) = run(b"0 1 2 ((x) print) loop");
        assert_eq!(out, b"xx");
        assert!(stack.is_empty());
    }

    #[test]
    fn eval_runs_against_the_callers_stack() {
        let (stack, _) = run(b"10 (1 +u8) eval");
        assert_eq!(stack, [11]);
    }

    #[test]
    fn mkfun_keys_by_payload_bytes() {
        // The definition is reachable only under the exact name bytes.
        let mut out = Vec::new();
        let mut m = Machine::new(&mut out);
        parse(&mut Source::new(b"(1) (one) mkfun".as_slice()), &mut m).unwrap();
        assert!(m.funcs.get(b"one\0".as_bstr()).is_some());
        assert!(m.funcs.get(b"one".as_bstr()).is_none());
        match m.funcs.get(b"one\0".as_bstr()) {
            Some(Function::User(body)) => assert_eq!(body.as_slice(), b"1\0".as_slice()),
            other => panic!("expected user function, got {other:?}"),
        }
    }

    #[test]
    fn a_word_can_redefine_itself_mid_run() {
        // The running body was cloned out of the table, so replacing the
        // entry does not disturb the rest of the current invocation.
        let (_, out) = run(
            b"(((second) println) (f) mkfun (first ) print (still first) println) (f) mkfun f f",
        );
        assert_eq!(out, b"first still first\nsecond\n");
    }

    #[test]
    fn delfun_of_a_missing_word_is_a_no_op() {
        let (stack, _) = run(b"(ghost) delfun 7");
        assert_eq!(stack, [7]);
    }

    #[test]
    fn loop_underflow_when_no_check_byte() {
        let mut out = Vec::new();
        let mut m = Machine::new(&mut out);
        let err = parse(&mut Source::new(b"(1 dropu8) loop".as_slice()), &mut m).unwrap_err();
        assert!(matches!(err, EvalError::Underflow(_)));
    }

    #[test]
    fn ifelse_requires_two_quotations() {
        let mut out = Vec::new();
        let mut m = Machine::new(&mut out);
        let err = parse(&mut Source::new(b"1 (only) ifelse".as_slice()), &mut m).unwrap_err();
        // Popping the missing second quotation underflows on its length
        // word: there is only the condition byte left.
        assert!(matches!(err, EvalError::Underflow(_)));
    }
}
