// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use paste::paste;

use crate::{function::FunctionTable, parse::EResult, Machine};

// One family of typed words per width. Binary words pop the right-hand
// operand first; `+`, `-`, and `*` wrap, and the logical words push their
// 0-or-1 result at the full width. `/` and `%` are unguarded: a zero divisor
// panics, as host integer division does.
macro_rules! width_words {
    ($($ty:ident),+) => { paste! { $(
        fn [<add_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](b.wrapping_add(a));
            Ok(())
        }

        fn [<sub_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](b.wrapping_sub(a));
            Ok(())
        }

        fn [<mul_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](b.wrapping_mul(a));
            Ok(())
        }

        fn [<div_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](b / a);
            Ok(())
        }

        fn [<rem_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](b % a);
            Ok(())
        }

        fn [<or_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>]($ty::from(b != 0 || a != 0));
            Ok(())
        }

        fn [<and_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>]($ty::from(b != 0 && a != 0));
            Ok(())
        }

        fn [<eq_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>]($ty::from(b == a));
            Ok(())
        }

        fn [<dup_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](a);
            m.stack.[<push_ $ty>](a);
            Ok(())
        }

        fn [<drop_ $ty>](m: &mut Machine) -> EResult<()> {
            m.stack.[<pop_ $ty>]()?;
            Ok(())
        }

        fn [<swap_ $ty>](m: &mut Machine) -> EResult<()> {
            let a = m.stack.[<pop_ $ty>]()?;
            let b = m.stack.[<pop_ $ty>]()?;
            m.stack.[<push_ $ty>](a);
            m.stack.[<push_ $ty>](b);
            Ok(())
        }

        fn [<install_ $ty>](funcs: &mut FunctionTable) {
            funcs.define_native(concat!("+", stringify!($ty)).as_bytes(), [<add_ $ty>]);
            funcs.define_native(concat!("-", stringify!($ty)).as_bytes(), [<sub_ $ty>]);
            funcs.define_native(concat!("*", stringify!($ty)).as_bytes(), [<mul_ $ty>]);
            funcs.define_native(concat!("/", stringify!($ty)).as_bytes(), [<div_ $ty>]);
            funcs.define_native(concat!("%", stringify!($ty)).as_bytes(), [<rem_ $ty>]);
            funcs.define_native(concat!("||", stringify!($ty)).as_bytes(), [<or_ $ty>]);
            funcs.define_native(concat!("&&", stringify!($ty)).as_bytes(), [<and_ $ty>]);
            funcs.define_native(concat!("==", stringify!($ty)).as_bytes(), [<eq_ $ty>]);
            funcs.define_native(concat!("dup", stringify!($ty)).as_bytes(), [<dup_ $ty>]);
            funcs.define_native(concat!("drop", stringify!($ty)).as_bytes(), [<drop_ $ty>]);
            funcs.define_native(concat!("swp", stringify!($ty)).as_bytes(), [<swap_ $ty>]);
        }
    )+ } };
}

width_words!(u8, u64);

pub(super) fn install(funcs: &mut FunctionTable) {
    install_u8(funcs);
    install_u64(funcs);
}
