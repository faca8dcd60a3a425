//! pixscale-parallel - Fork/join execution of splittable work
//!
//! Work is submitted as a [`Splittable`]: a unit that knows whether it's
//! worth splitting, how to split itself in two, and how to run. A
//! [`Parallelizer`] decides where and in which order the pieces run.
//!
//! - [`SequentialParallelizer`] - runs the unit as is, on the calling thread
//! - [`FakeParallelizer`] - splits like a parallel executor but stays on the
//!   calling thread, running later pieces first
//! - [`RayonParallelizer`] - splits recursively over a rayon thread pool
//!
//! Every worker thread owns a [`ScratchPool`], reachable from
//! [`Splittable::run`] through a [`Scratch`] handle.

mod error;
mod scratch;

pub use error::{ParallelError, ParallelResult};
pub use scratch::{Scratch, ScratchPool};

use rayon::{ThreadPool, ThreadPoolBuilder};
use scratch::{WorkerScratch, with_scratch};

/// A unit of work that can be split into two disjoint units
pub trait Splittable: Send + Sized {
    /// Error reported by [`Splittable::run`]
    type Error: Send;

    /// Whether splitting this unit is expected to pay off
    fn worth_to_split(&self) -> bool;

    /// Split off a part of this unit and return it
    ///
    /// After the call, `self` and the returned unit together cover exactly
    /// the work `self` covered before. Only called when
    /// [`Splittable::worth_to_split`] returned `true`.
    fn split(&mut self) -> Self;

    /// Do the work
    fn run(&mut self, scratch: Scratch<'_>) -> Result<(), Self::Error>;
}

/// Executes splittable work, blocking until all of it completed
pub trait Parallelizer: Sync {
    /// Number of units that may run at the same time
    fn parallelism(&self) -> usize;

    /// Run `task` and everything split off from it
    ///
    /// # Errors
    ///
    /// Returns the first error reported by a piece of the work. Pieces that
    /// already completed are not undone.
    fn execute<S: Splittable>(&self, task: S) -> Result<(), S::Error>;

    /// Run `task` on the calling thread as one unit, with that thread's
    /// scratch pool
    ///
    /// # Errors
    ///
    /// Returns the error reported by the task.
    fn run_unsplit<S: Splittable>(&self, task: S) -> Result<(), S::Error>;
}

/// Runs work on the calling thread, without splitting
#[derive(Default)]
pub struct SequentialParallelizer {
    scratch: WorkerScratch,
}

impl SequentialParallelizer {
    /// Create a sequential parallelizer
    pub fn new() -> Self {
        Self::default()
    }
}

impl Parallelizer for SequentialParallelizer {
    fn parallelism(&self) -> usize {
        1
    }

    fn execute<S: Splittable>(&self, task: S) -> Result<(), S::Error> {
        self.run_unsplit(task)
    }

    fn run_unsplit<S: Splittable>(&self, mut task: S) -> Result<(), S::Error> {
        with_scratch(&self.scratch, |scratch| task.run(scratch))
    }
}

/// Splits work like a parallel executor, but runs it all on the calling thread
///
/// Split-off units run before the unit they were split from, so results
/// come out in a different order than with sequential execution.
pub struct FakeParallelizer {
    parallelism: usize,
    scratch: WorkerScratch,
}

impl FakeParallelizer {
    /// Create a fake parallelizer reporting the given parallelism
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidParallelism`] if `parallelism` is 0.
    pub fn new(parallelism: usize) -> ParallelResult<Self> {
        if parallelism == 0 {
            return Err(ParallelError::InvalidParallelism(parallelism));
        }
        Ok(Self {
            parallelism,
            scratch: WorkerScratch::new(),
        })
    }

    fn fork<S: Splittable>(&self, mut task: S) -> Result<(), S::Error> {
        if task.worth_to_split() {
            let other = task.split();
            self.fork(other)?;
            self.fork(task)
        } else {
            self.run_unsplit(task)
        }
    }
}

impl Parallelizer for FakeParallelizer {
    fn parallelism(&self) -> usize {
        self.parallelism
    }

    fn execute<S: Splittable>(&self, task: S) -> Result<(), S::Error> {
        self.fork(task)
    }

    fn run_unsplit<S: Splittable>(&self, mut task: S) -> Result<(), S::Error> {
        with_scratch(&self.scratch, |scratch| task.run(scratch))
    }
}

/// Runs work over a dedicated rayon thread pool
pub struct RayonParallelizer {
    pool: ThreadPool,
    scratch: WorkerScratch,
}

impl RayonParallelizer {
    /// Create a parallelizer with its own pool of `num_threads` threads
    ///
    /// # Errors
    ///
    /// Returns an error if `num_threads` is 0 or the pool can't be built.
    pub fn new(num_threads: usize) -> ParallelResult<Self> {
        if num_threads == 0 {
            return Err(ParallelError::InvalidParallelism(num_threads));
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("pixscale-worker-{i}"))
            .build()?;
        log::debug!("built rayon pool with {} threads", num_threads);
        Ok(Self {
            pool,
            scratch: WorkerScratch::new(),
        })
    }

    fn fork<S: Splittable>(mut task: S, scratch: &WorkerScratch) -> Result<(), S::Error> {
        if task.worth_to_split() {
            let other = task.split();
            let (lower, upper) = rayon::join(
                || Self::fork(task, scratch),
                || Self::fork(other, scratch),
            );
            lower.and(upper)
        } else {
            with_scratch(scratch, |scratch| task.run(scratch))
        }
    }
}

impl Parallelizer for RayonParallelizer {
    fn parallelism(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn execute<S: Splittable>(&self, task: S) -> Result<(), S::Error> {
        let scratch = &self.scratch;
        self.pool.install(|| Self::fork(task, scratch))
    }

    fn run_unsplit<S: Splittable>(&self, mut task: S) -> Result<(), S::Error> {
        with_scratch(&self.scratch, |scratch| task.run(scratch))
    }
}
