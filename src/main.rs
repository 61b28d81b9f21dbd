// Copyright (C) the catena authors. All rights reserved.
//
// This file is part of catena, distributed under the MIT license. For the
// full terms, see the included LICENSE file.

use std::{
    env,
    fs::File,
    io::{self, BufReader},
};

use anyhow::{bail, Context, Result};
use catena::{
    parse::{parse, Source},
    Machine,
};

fn main() -> Result<()> {
    let mut args = env::args_os().skip(1);
    let path = match args.next() {
        Some(path) if args.next().is_none() => path,
        _ => bail!("usage: catena <program>"),
    };
    let file = File::open(&path)
        .with_context(|| format!("cannot open '{}'", path.to_string_lossy()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut machine = Machine::new(&mut out);
    parse(&mut Source::new(BufReader::new(file)), &mut machine)
        .with_context(|| format!("error in '{}'", path.to_string_lossy()))?;
    Ok(())
}
