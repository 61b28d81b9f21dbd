// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::io::{self, Write};

use super::Quotation;
use crate::{function::FunctionTable, parse::EResult, Machine};

pub(super) fn install(funcs: &mut FunctionTable) {
    funcs.define_native(b"print", print);
    funcs.define_native(b"println", println);
    funcs.define_native(b"dump", dump);
}

/// `print`: pop a string and write its payload to the sink.
fn print(m: &mut Machine) -> EResult<()> {
    let s = Quotation::pop(&mut m.stack)?;
    m.out.write_all(s.payload())?;
    Ok(())
}

/// `println`: `print` with a trailing newline.
fn println(m: &mut Machine) -> EResult<()> {
    let s = Quotation::pop(&mut m.stack)?;
    m.out.write_all(s.payload())?;
    m.out.write_all(b"\n")?;
    Ok(())
}

/// `dump`: hex + ASCII rendering of the whole stack.
fn dump(m: &mut Machine) -> EResult<()> {
    hex_dump(&mut *m.out, "stack", m.stack.as_bytes())?;
    Ok(())
}

/// Writes `bytes` as offset-prefixed lines of 16 hex columns and their
/// printable ASCII, under a `desc:` header.
fn hex_dump<W: Write + ?Sized>(w: &mut W, desc: &str, bytes: &[u8]) -> io::Result<()> {
    writeln!(w, "{desc}:")?;
    if bytes.is_empty() {
        return w.write_all(b"  ZERO LENGTH\n");
    }
    for (i, chunk) in bytes.chunks(16).enumerate() {
        write!(w, "  {:04x} ", i * 16)?;
        for b in chunk {
            write!(w, " {b:02x}")?;
        }
        // Pad short lines so the ASCII column stays aligned.
        for _ in chunk.len()..16 {
            w.write_all(b"   ")?;
        }
        w.write_all(b"  ")?;
        for &b in chunk {
            let c = if (0x20..=0x7e).contains(&b) { b } else { b'.' };
            w.write_all(&[c])?;
        }
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dumped(bytes: &[u8]) -> String {
        let mut buf = Vec::new();
        hex_dump(&mut buf, "stack", bytes).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_dump() {
        assert_eq!(dumped(b""), "stack:\n  ZERO LENGTH\n");
    }

    #[test]
    fn short_line_is_padded() {
        // 13 missing columns of 3 spaces, then the 2-space ASCII separator.
        let expected = format!("stack:\n  0000  02 03 41{}..A\n", " ".repeat(13 * 3 + 2));
        assert_eq!(dumped(&[0x02, 0x03, 0x41]), expected);
    }

    #[test]
    fn full_lines_and_offsets() {
        let bytes: Vec<u8> = (0x41..0x41 + 17).collect();
        let expected = format!(
            "stack:\n\
             \x20 0000  41 42 43 44 45 46 47 48 49 4a 4b 4c 4d 4e 4f 50  ABCDEFGHIJKLMNOP\n\
             \x20 0010  51{}Q\n",
            " ".repeat(15 * 3 + 2),
        );
        assert_eq!(dumped(&bytes), expected);
    }

    #[test]
    fn unprintable_bytes_show_as_dots() {
        let out = dumped(&[0x00, 0x1f, 0x20, 0x7e, 0x7f]);
        assert!(out.ends_with("  ..~.\n"), "got {out:?}");
    }

    #[test]
    fn print_truncates_at_the_payload_nul() {
        let mut out = Vec::new();
        let mut m = Machine::new(&mut out);
        // A hand-built frame with an interior NUL: C-string semantics stop
        // the payload there.
        m.stack.push_slice(b"\0ab\0cd\0");
        m.stack.push_usize(7);
        print(&mut m).unwrap();
        drop(m);
        assert_eq!(out, b"ab");
    }
}
