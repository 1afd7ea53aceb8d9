// Integration tests for the line reading API
// Tests cover: line contract scenarios, reconstruction, chunk-size independence,
// error handling, per-descriptor registry state

use std::io::{self, Cursor, Read};

use nextline::{LineError, LineReader, LineRegistry, ReadPhase, ReaderConfig};
use proptest::prelude::*;

// ============================================================================
// Test Sources
// ============================================================================

/// Returns at most `step` bytes per read, whatever the buffer size.
struct Trickle {
    data: Vec<u8>,
    pos: usize,
    step: usize,
    reads: usize,
}

impl Trickle {
    fn new(data: &[u8], step: usize) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            step,
            reads: 0,
        }
    }
}

impl Read for Trickle {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        let end = (self.pos + self.step.min(buf.len())).min(self.data.len());
        let n = end - self.pos;
        buf[..n].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(n)
    }
}

/// Serves `data`, then fails every read after it.
struct FailAfter {
    data: Cursor<Vec<u8>>,
    reads_after_failure: usize,
    failed: bool,
}

impl FailAfter {
    fn new(data: &[u8]) -> Self {
        Self {
            data: Cursor::new(data.to_vec()),
            reads_after_failure: 0,
            failed: false,
        }
    }
}

impl Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n > 0 {
            return Ok(n);
        }
        if self.failed {
            self.reads_after_failure += 1;
        }
        self.failed = true;
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "descriptor went away"))
    }
}

fn reader(data: &[u8], chunk_size: usize) -> LineReader<Cursor<Vec<u8>>> {
    let config = ReaderConfig::new(chunk_size).unwrap();
    LineReader::with_config(Cursor::new(data.to_vec()), config).unwrap()
}

fn all_lines<R: Read>(reader: LineReader<R>) -> Vec<Vec<u8>> {
    reader
        .map(|line| line.map(|l| l.as_bytes().to_vec()))
        .collect::<Result<_, _>>()
        .unwrap()
}

// ============================================================================
// Contract Scenarios
// ============================================================================

#[test]
fn test_two_lines_chunk_four() {
    let mut r = reader(b"abc\ndef\n", 4);
    assert_eq!(r.next_line().unwrap().unwrap().as_bytes(), b"abc\n");
    assert_eq!(r.next_line().unwrap().unwrap().as_bytes(), b"def\n");
    assert!(r.next_line().unwrap().is_none());
}

#[test]
fn test_unterminated_input_default_chunk() {
    let mut r = reader(b"abc", 42);
    let line = r.next_line().unwrap().unwrap();
    assert_eq!(line.as_bytes(), b"abc");
    assert!(!line.is_terminated());
    assert!(r.next_line().unwrap().is_none());
}

#[test]
fn test_empty_input() {
    let mut r = reader(b"", 42);
    assert!(r.next_line().unwrap().is_none());
}

#[test]
fn test_chunk_size_one() {
    let mut r = reader(b"a\nb\n", 1);
    assert_eq!(r.next_line().unwrap().unwrap().as_bytes(), b"a\n");
    assert_eq!(r.next_line().unwrap().unwrap().as_bytes(), b"b\n");
    assert!(r.next_line().unwrap().is_none());
}

#[test]
fn test_blank_lines_are_lines() {
    assert_eq!(all_lines(reader(b"\n\nx\n\n", 3)), vec![
        b"\n".to_vec(),
        b"\n".to_vec(),
        b"x\n".to_vec(),
        b"\n".to_vec(),
    ]);
}

#[test]
fn test_line_longer_than_many_chunks() {
    let mut data = vec![b'z'; 10_000];
    data.push(b'\n');
    data.extend_from_slice(b"short\n");

    let lines = all_lines(reader(&data, 7));
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 10_001);
    assert_eq!(lines[1], b"short\n");
}

#[test]
fn test_exhaustion_is_idempotent() {
    let mut r = reader(b"only\n", 2);
    r.next_line().unwrap();
    for _ in 0..5 {
        assert!(r.next_line().unwrap().is_none());
    }
    assert_eq!(r.phase(), ReadPhase::Done);
}

#[test]
fn test_phase_transitions() {
    let mut r = reader(b"ab\ncd\nef", 8);
    assert_eq!(r.phase(), ReadPhase::Empty);

    r.next_line().unwrap();
    assert_eq!(r.phase(), ReadPhase::Ready);

    r.next_line().unwrap();
    assert_eq!(r.phase(), ReadPhase::Buffering);

    let last = r.next_line().unwrap().unwrap();
    assert_eq!(last.as_bytes(), b"ef");
    assert_eq!(r.phase(), ReadPhase::Done);
}

#[test]
fn test_reads_stop_at_first_newline() {
    let mut src = Trickle::new(b"a\nb\nc\n", 1);
    {
        let config = ReaderConfig::new(1).unwrap();
        let mut r = LineReader::with_config(&mut src, config).unwrap();
        r.next_line().unwrap();
    }
    // "a" and "\n", nothing more
    assert_eq!(src.reads, 2);
}

#[test]
fn test_offsets_follow_the_stream() {
    let mut r = reader(b"one\ntwo\nthree", 5);
    let offsets: Vec<_> = std::iter::from_fn(|| r.next_line().unwrap())
        .map(|l| l.range())
        .collect();
    assert_eq!(offsets, vec![0..4, 4..8, 8..13]);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_read_error_discards_partial_line() {
    let config = ReaderConfig::new(4).unwrap();
    let mut r = LineReader::with_config(FailAfter::new(b"good\npartial"), config).unwrap();

    assert_eq!(r.next_line().unwrap().unwrap().as_bytes(), b"good\n");

    let err = r.next_line().unwrap_err();
    assert!(matches!(err, LineError::Io(_)));
    assert_eq!(err.io_kind(), Some(io::ErrorKind::BrokenPipe));
    assert!(r.buffered().is_empty());

    // terminal: no more reads are attempted
    assert!(r.next_line().unwrap().is_none());
    assert!(r.next_line().unwrap().is_none());
    assert_eq!(r.get_ref().reads_after_failure, 0);
}

#[test]
fn test_iterator_yields_error_once() {
    let r = LineReader::new(FailAfter::new(b"x\n"));
    let items: Vec<_> = r.collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}

#[test]
fn test_zero_chunk_size_is_config_error() {
    assert!(matches!(
        ReaderConfig::new(0),
        Err(LineError::InvalidConfig { .. })
    ));
    let cfg = ReaderConfig::default().with_chunk_size(0);
    assert!(LineReader::with_config(Cursor::new(Vec::new()), cfg).is_err());
    assert!(LineRegistry::<i32>::with_config(cfg).is_err());
}

// ============================================================================
// Registry
// ============================================================================

#[test]
fn test_registry_interleaves_sources() {
    let mut registry = LineRegistry::with_config(ReaderConfig::new(2).unwrap()).unwrap();
    let mut left = Cursor::new(b"l1\nl2\n".to_vec());
    let mut right = Cursor::new(b"r1\nr2".to_vec());

    let mut out = Vec::new();
    loop {
        let l = registry.next_line(0, &mut left).unwrap();
        let r = registry.next_line(1, &mut right).unwrap();
        if l.is_none() && r.is_none() {
            break;
        }
        out.extend(l.map(|l| l.as_bytes().to_vec()));
        out.extend(r.map(|r| r.as_bytes().to_vec()));
    }

    assert_eq!(out, vec![
        b"l1\n".to_vec(),
        b"r1\n".to_vec(),
        b"l2\n".to_vec(),
        b"r2".to_vec(),
    ]);
    assert!(registry.is_empty());
}

#[cfg(unix)]
#[test]
fn test_registry_over_pipe_descriptor() {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let mut child = Command::new("cat")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"piped one\npiped two").unwrap();
    drop(stdin);

    let mut stdout = child.stdout.take().unwrap();
    let mut registry = LineRegistry::new();
    let mut lines = Vec::new();
    while let Some(line) = registry.next_line_fd(&mut stdout).unwrap() {
        lines.push(line.as_bytes().to_vec());
    }
    child.wait().unwrap();

    assert_eq!(lines, vec![b"piped one\n".to_vec(), b"piped two".to_vec()]);
}

// ============================================================================
// Properties
// ============================================================================

fn line_bytes() -> impl Strategy<Value = Vec<u8>> {
    // Bias towards newlines so inputs hold several lines
    prop::collection::vec(prop_oneof![3 => any::<u8>(), 1 => Just(b'\n')], 0..512)
}

proptest! {
    #[test]
    fn prop_lines_reconstruct_input(data in line_bytes(), chunk_size in 1usize..64) {
        let lines = all_lines(reader(&data, chunk_size));

        prop_assert_eq!(lines.concat(), data.clone());

        let newlines = data.iter().filter(|&&b| b == b'\n').count();
        let expected = newlines + usize::from(data.last().is_some_and(|&b| b != b'\n'));
        prop_assert_eq!(lines.len(), expected);
    }

    #[test]
    fn prop_chunk_size_independent(
        data in line_bytes(),
        chunk_size in 1usize..64,
        step in 1usize..16,
    ) {
        let reference = all_lines(reader(&data, 42));
        prop_assert_eq!(all_lines(reader(&data, chunk_size)), reference.clone());

        let config = ReaderConfig::new(chunk_size).unwrap();
        let trickled = LineReader::with_config(Trickle::new(&data, step), config).unwrap();
        prop_assert_eq!(all_lines(trickled), reference);
    }
}
