//! Async line reading over several tokio readers at once.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io

use futures_util::StreamExt;
use nextline::{ReaderConfig, lines_async};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();

    // Create multiple data streams
    let streams: Vec<Vec<u8>> = (0..3)
        .map(|s| {
            (0..1000)
                .map(|i| format!("stream {} line {}\n", s, i))
                .collect::<String>()
                .into_bytes()
        })
        .collect();

    println!("Processing {} streams concurrently...\n", streams.len());

    let config = ReaderConfig::default();

    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| {
            tokio::spawn(async move {
                let reader = std::io::Cursor::new(data).compat();
                let mut lines = lines_async(reader, config)?;
                let mut line_count = 0;
                let mut total_bytes = 0;
                while let Some(line) = lines.next().await {
                    let line = line?;
                    line_count += 1;
                    total_bytes += line.len();
                }
                Ok::<_, nextline::LineError>((stream_id, line_count, total_bytes))
            })
        })
        .collect();

    for handle in handles {
        let (stream_id, line_count, total_bytes) = handle.await??;
        println!(
            "Stream {}: {} lines, {} bytes",
            stream_id, line_count, total_bytes
        );
    }

    Ok(())
}
