//! Output formatting for query results

use crate::query::{BigramCount, NgramCount};
use serde_json::json;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Render raw gram or query bytes for the terminal
pub fn display_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn print_label(stdout: &mut StandardStream, label: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "{}", label)?;
    stdout.reset()
}

fn print_number(stdout: &mut StandardStream, value: u32) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(stdout, "{}", value)?;
    stdout.reset()
}

/// Print `query<TAB>count` lines
pub fn print_counts(results: &[(String, u32)], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for (query, count) in results {
        print_label(&mut stdout, query)?;
        write!(stdout, "\t")?;
        print_number(&mut stdout, *count)?;
        writeln!(stdout)?;
    }
    Ok(())
}

/// Print the two counts of a bigram query
pub fn print_bigram(
    first: &str,
    second: &str,
    result: &BigramCount,
    choice: ColorChoice,
) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);

    print_label(&mut stdout, first)?;
    write!(stdout, "\t")?;
    print_number(&mut stdout, result.count_forward)?;
    writeln!(stdout)?;

    print_label(&mut stdout, first)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(stdout, "+")?;
    stdout.reset()?;
    print_label(&mut stdout, second)?;
    write!(stdout, "\t")?;
    print_number(&mut stdout, result.count_back)?;
    writeln!(stdout)?;
    Ok(())
}

/// Print `gram,count` lines
pub fn print_ngrams(counts: &[NgramCount], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    for entry in counts {
        print_label(&mut stdout, &display_bytes(&entry.gram))?;
        write!(stdout, ",")?;
        print_number(&mut stdout, entry.count)?;
        writeln!(stdout)?;
    }
    Ok(())
}

/// JSON form of count results
pub fn counts_json(results: &[(String, u32)]) -> serde_json::Value {
    json!(
        results
            .iter()
            .map(|(query, count)| json!({ "query": query, "count": count }))
            .collect::<Vec<_>>()
    )
}

/// JSON form of a bigram result
pub fn bigram_json(first: &str, second: &str, result: &BigramCount) -> serde_json::Value {
    json!({
        "first": first,
        "second": second,
        "count_forward": result.count_forward,
        "count_back": result.count_back,
    })
}

/// JSON form of n-gram counts
pub fn ngrams_json(counts: &[NgramCount]) -> serde_json::Value {
    json!(
        counts
            .iter()
            .map(|c| json!({ "gram": display_bytes(&c.gram), "count": c.count }))
            .collect::<Vec<_>>()
    )
}

/// Print a JSON value on one line
pub fn print_json(value: &serde_json::Value) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)
}
