//! Per-worker scratch buffers

use std::cell::RefCell;
use thread_local::ThreadLocal;

/// Maximum number of buffers kept by one pool
const MAX_POOLED_BUFFERS: usize = 8;

/// Reusable pixel buffers owned by a single worker
///
/// Buffers are handed out by [`ScratchPool::take_u32`] and returned with
/// [`ScratchPool::give_back`], so hot loops don't allocate once the pool has
/// warmed up. A pool is never shared between threads.
#[derive(Debug, Default)]
pub struct ScratchPool {
    buffers: Vec<Vec<u32>>,
}

impl ScratchPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a zero-filled buffer of exactly `len` elements
    ///
    /// Reuses the smallest pooled buffer whose capacity is large enough.
    pub fn take_u32(&mut self, len: usize) -> Vec<u32> {
        let best = self
            .buffers
            .iter()
            .enumerate()
            .filter(|(_, b)| b.capacity() >= len)
            .min_by_key(|(_, b)| b.capacity())
            .map(|(i, _)| i);
        let mut buf = match best {
            Some(i) => self.buffers.swap_remove(i),
            None => Vec::with_capacity(len),
        };
        buf.clear();
        buf.resize(len, 0);
        buf
    }

    /// Return a buffer to the pool
    ///
    /// When the pool is full the smallest buffer is dropped.
    pub fn give_back(&mut self, buf: Vec<u32>) {
        if self.buffers.len() < MAX_POOLED_BUFFERS {
            self.buffers.push(buf);
            return;
        }
        if let Some((i, smallest)) = self
            .buffers
            .iter()
            .enumerate()
            .min_by_key(|(_, b)| b.capacity())
            .map(|(i, b)| (i, b.capacity()))
        {
            if smallest < buf.capacity() {
                self.buffers[i] = buf;
            }
        }
    }

    /// Number of pooled buffers
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Check if no buffer is pooled
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Access to the [`ScratchPool`] of the running worker
///
/// The pool is only borrowed inside [`Scratch::take_u32`] and
/// [`Scratch::give_back`], so a unit may call back into code that runs
/// other units on the same thread while it holds a buffer.
#[derive(Debug, Clone, Copy)]
pub struct Scratch<'a> {
    pool: &'a RefCell<ScratchPool>,
}

impl<'a> Scratch<'a> {
    /// Wrap a pool owned by the calling thread
    pub fn new(pool: &'a RefCell<ScratchPool>) -> Self {
        Self { pool }
    }

    /// Take a zero-filled buffer of exactly `len` elements
    pub fn take_u32(&self, len: usize) -> Vec<u32> {
        self.pool.borrow_mut().take_u32(len)
    }

    /// Return a buffer to the pool
    pub fn give_back(&self, buf: Vec<u32>) {
        self.pool.borrow_mut().give_back(buf);
    }
}

/// One [`ScratchPool`] per worker thread
pub(crate) type WorkerScratch = ThreadLocal<RefCell<ScratchPool>>;

/// Run `f` with the calling thread's scratch pool.
pub(crate) fn with_scratch<R>(scratch: &WorkerScratch, f: impl FnOnce(Scratch<'_>) -> R) -> R {
    f(Scratch::new(scratch.get_or_default()))
}
