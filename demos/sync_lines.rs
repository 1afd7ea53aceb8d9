//! Basic line reading from standard input.
//!
//! Run with:
//!     printf 'one\ntwo\nthree' | cargo run --example sync_lines
//!
//! Set `RUST_LOG=trace` to see every read.

use std::io;

use nextline::{LineReader, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ReaderConfig::default();
    let stdin = io::stdin();
    let mut reader = LineReader::with_config(stdin.lock(), config)?;

    println!("Reading stdin in {}-byte chunks...\n", config.chunk_size());

    let mut total_lines = 0;
    let mut total_bytes = 0;

    while let Some(line) = reader.next_line()? {
        total_lines += 1;
        total_bytes += line.len();

        println!(
            "Line {}: offset={}, len={}{} | {}",
            total_lines,
            line.offset,
            line.len(),
            if line.is_terminated() { "" } else { " (no newline)" },
            String::from_utf8_lossy(line.content())
        );
    }

    println!("\nTotal: {} lines, {} bytes", total_lines, total_bytes);

    Ok(())
}
