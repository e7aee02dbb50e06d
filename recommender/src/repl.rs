//! Interactive prompt loop.

use anyhow::Result;
use engine::{EngineError, Recommendation, RecommendationIndex};
use std::io::{BufRead, Write};

const DEMO_COUNT: i64 = 3;

pub fn print_recommendations<W: Write>(out: &mut W, query: &str, recs: &[Recommendation]) -> Result<()> {
    writeln!(out, "\nBecause you liked '{query}', you might also enjoy:")?;
    for (i, rec) in recs.iter().enumerate() {
        writeln!(out, "{}. {} ({}) - similarity: {}", i + 1, rec.title, rec.genre, rec.similarity_score)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Blank input falls back to `default_k`; anything else must be an integer.
pub fn parse_count(raw: &str, default_k: i64) -> std::result::Result<i64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default_k);
    }
    raw.parse().map_err(|_| format!("'{raw}' is not a whole number"))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn run<R: BufRead, W: Write>(index: &RecommendationIndex, default_k: i64, mut input: R, mut out: W) -> Result<()> {
    if let Some(first) = index.catalog().iter().next() {
        if let Ok(recs) = index.recommend(&first.title, DEMO_COUNT) {
            writeln!(out, "Sample recommendations for '{}':", first.title)?;
            for rec in &recs {
                writeln!(out, "- {} ({}) - similarity: {}", rec.title, rec.genre, rec.similarity_score)?;
            }
        }
    }

    writeln!(out, "\n=== Movie Recommendation System (Content-Based) ===")?;
    writeln!(out, "Type 'exit' to quit.\n")?;

    loop {
        let Some(title) = prompt(&mut input, &mut out, "Enter a movie title you like: ")? else { break };
        if title.eq_ignore_ascii_case("exit") || title.eq_ignore_ascii_case("quit") {
            writeln!(out, "Goodbye!")?;
            break;
        }
        if title.is_empty() {
            continue;
        }
        let Some(raw) = prompt(&mut input, &mut out, &format!("How many recommendations would you like? (default {default_k}): "))? else { break };
        let k = match parse_count(&raw, default_k) {
            Ok(k) => k,
            Err(msg) => {
                writeln!(out, "Input error: {msg}")?;
                continue;
            }
        };
        match index.recommend(&title, k) {
            Ok(recs) => print_recommendations(&mut out, &title, &recs)?,
            Err(EngineError::InvalidArgument(msg)) => writeln!(out, "Input error: {msg}")?,
            Err(e @ EngineError::NotFound { .. }) => writeln!(out, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
