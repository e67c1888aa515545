use std::collections::HashSet;

use rayon::prelude::*;

use crate::{
    eval::{
        evaluator::{FrameDescription, Timeline},
        fingerprint::{FrameFingerprint, fingerprint_frame},
    },
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{FramekitError, FramekitResult},
};

/// Options for [`Timeline::eval_frames`].
#[derive(Clone, Debug)]
pub struct BatchOptions {
    /// Evaluate on a rayon pool instead of the calling thread.
    pub parallel: bool,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Summary of a batch evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct BatchStats {
    /// Frames evaluated.
    pub frames_total: u64,
    /// Frames with a distinct fingerprint.
    pub frames_unique: u64,
}

impl BatchStats {
    /// Frames identical to an earlier frame in the batch.
    pub fn frames_static(&self) -> u64 {
        self.frames_total.saturating_sub(self.frames_unique)
    }
}

impl Timeline {
    /// Evaluate every frame of `range`, returned in frame order.
    #[tracing::instrument(skip(self, opts), fields(start = range.start.0, end = range.end.0))]
    pub fn eval_frames(
        &self,
        range: FrameRange,
        opts: &BatchOptions,
    ) -> FramekitResult<(Vec<FrameDescription>, BatchStats)> {
        if range.is_empty() {
            return Err(FramekitError::validation("batch range must be non-empty"));
        }
        if range.end.0 > self.duration().0 {
            return Err(FramekitError::evaluation(format!(
                "batch range end {} exceeds composition duration {}",
                range.end.0,
                self.duration().0
            )));
        }

        let frames = if opts.parallel {
            let pool = build_thread_pool(opts.threads)?;
            pool.install(|| {
                (range.start.0..range.end.0)
                    .into_par_iter()
                    .map(|f| self.eval_frame(FrameIndex(f)))
                    .collect::<FramekitResult<Vec<_>>>()
            })?
        } else {
            (range.start.0..range.end.0)
                .map(|f| self.eval_frame(FrameIndex(f)))
                .collect::<FramekitResult<Vec<_>>>()?
        };

        let unique: HashSet<FrameFingerprint> = frames.iter().map(fingerprint_frame).collect();
        let stats = BatchStats {
            frames_total: frames.len() as u64,
            frames_unique: unique.len() as u64,
        };
        tracing::debug!(
            total = stats.frames_total,
            unique = stats.frames_unique,
            "batch evaluated"
        );
        Ok((frames, stats))
    }
}

fn build_thread_pool(threads: Option<usize>) -> FramekitResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramekitError::validation(
            "batch 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramekitError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/batch.rs"]
mod tests;
