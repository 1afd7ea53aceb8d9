//! Reading several files line by line, interleaved, through one registry.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/a /path/to/b

use std::env;
use std::fs::File;

use nextline::{LineRegistry, ReaderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        paths.push("Cargo.toml".to_string());
    }

    let mut files = paths
        .iter()
        .map(|p| File::open(p).map(|f| (p.as_str(), f)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut registry = LineRegistry::with_config(ReaderConfig::new(4096)?)?;
    let mut open = vec![true; files.len()];

    // Round-robin: one line from each file per pass
    while open.iter().any(|&o| o) {
        for (i, (path, file)) in files.iter_mut().enumerate() {
            if !open[i] {
                continue;
            }
            #[cfg(unix)]
            let next = registry.next_line_fd(file)?;
            #[cfg(not(unix))]
            let next = registry.next_line(i as i32, file)?;

            match next {
                Some(line) => print!("{}: {}", path, String::from_utf8_lossy(line.as_bytes())),
                None => open[i] = false,
            }
        }
    }

    println!();
    Ok(())
}
