use serde::Serialize;
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::index::Buckets;

#[derive(Serialize)]
struct Row<'a> {
    date: String,
    words: &'a [String],
}

/// One `"<key> [w1, w2, ...]"` line per entry, in index order.
pub fn write_text<W, K>(out: &mut W, index: &Buckets<K>) -> io::Result<()>
where
    W: Write,
    K: Copy + Eq + Hash + Display,
{
    for (key, words) in index.iter() {
        writeln!(out, "{} [{}]", key, words.join(", "))?;
    }
    Ok(())
}

/// One JSON object per line: `{"date":"2023-01-02","words":["кот","dog"]}`.
pub fn write_jsonl<W, K>(out: &mut W, index: &Buckets<K>) -> io::Result<()>
where
    W: Write,
    K: Copy + Eq + Hash + Display,
{
    for (key, words) in index.iter() {
        let row = Row { date: key.to_string(), words };
        serde_json::to_writer(&mut *out, &row)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
