#![no_main]

use std::io::{Cursor, Read};

use libfuzzer_sys::fuzz_target;
use nextline::{LineReader, ReaderConfig};

/// Hands out at most `step` bytes per read.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.step.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

fn collect<R: Read>(reader: R, chunk_size: usize) -> Vec<Vec<u8>> {
    let config = ReaderConfig::new(chunk_size).unwrap();
    let mut reader = LineReader::with_config(reader, config).unwrap();
    let mut lines = Vec::new();
    let mut expected_offset = 0u64;
    while let Some(line) = reader.next_line().unwrap() {
        // Verify: offsets are contiguous and lines are never empty
        assert_eq!(line.offset, expected_offset);
        assert!(!line.is_empty());
        expected_offset = line.end();
        lines.push(line.as_bytes().to_vec());
    }
    // Verify: exhaustion is sticky
    assert!(reader.next_line().unwrap().is_none());
    lines
}

fuzz_target!(|input: (u8, u8, Vec<u8>)| {
    let (chunk, step, data) = input;
    let chunk_size = chunk as usize + 1;
    let step = step as usize + 1;

    let lines = collect(Cursor::new(&data), chunk_size);

    // Verify: concatenation reconstructs the input
    assert_eq!(lines.concat(), data);

    // Verify: only the last line may lack a newline
    for line in lines.iter().rev().skip(1) {
        assert_eq!(line.last(), Some(&b'\n'));
    }

    // Verify: chunk size and read fragmentation do not change the lines
    assert_eq!(collect(Cursor::new(&data), 42), lines);
    assert_eq!(collect(Trickle { data: &data, step }, chunk_size), lines);
});
