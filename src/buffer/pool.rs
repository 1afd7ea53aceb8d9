//! Thread-local pool of read scratch buffers.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};

/// Largest capacity a scratch buffer may have and still be pooled.
pub const MAX_POOLED_CAPACITY: usize = 64 * 1024; // 64 KiB

/// Maximum number of buffers to keep per thread.
pub const MAX_POOL_SIZE: usize = 4;

/// A zero-initialised buffer of exactly `chunk_size` bytes.
///
/// Lives for the duration of one read call and is returned to the pool on drop.
pub struct Scratch {
    data: Vec<u8>,
}

impl Scratch {
    /// Takes a buffer from the thread-local pool or creates a new one.
    pub fn take(size: usize) -> Self {
        let mut data = THREAD_SCRATCH_POOL
            .with(|pool| pool.borrow_mut().pop())
            .unwrap_or_default();
        data.clear();
        data.resize(size, 0);
        Self { data }
    }
}

impl Deref for Scratch {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        // Return the buffer to the pool if it's not too large
        if self.data.capacity() <= MAX_POOLED_CAPACITY {
            THREAD_SCRATCH_POOL.with(|pool| {
                let mut pool = pool.borrow_mut();
                if pool.len() < MAX_POOL_SIZE {
                    pool.push(std::mem::take(&mut self.data));
                }
            });
        }
    }
}

thread_local! {
    static THREAD_SCRATCH_POOL: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}
