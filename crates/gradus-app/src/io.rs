use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use gradus_core::{Tokenizer, WordLevel};

/// Feed every line of a words file through the tokenizer.
pub fn read_words(path: &Path, tokenizer: &mut Tokenizer) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("cannot open the input file {}", path.display()))?;

    for line in BufReader::new(file).lines() {
        let line = line.with_context(|| {
            format!("the input file {} is not utf-8 text", path.display())
        })?;
        tokenizer.push_line(&line);
    }

    Ok(())
}

/// Write entries as `<LEVEL> <word>` lines.
pub fn write_levels(path: &Path, entries: &[WordLevel]) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;

    for entry in entries {
        writeln!(file, "{} {}", entry.level, entry.word)?;
    }

    Ok(())
}
