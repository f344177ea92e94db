use crate::core::error::SketchError;
use std::future::Future;

/// Outcome of waiting on every readiness signal.
#[derive(Debug, Default)]
pub struct PreloadReport {
    pub ready: Vec<usize>,
    pub failed: Vec<(usize, SketchError)>,
}

impl PreloadReport {
    pub fn is_ready(&self, index: usize) -> bool {
        self.ready.contains(&index)
    }

    pub fn all_ready(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Wait for all readiness signals. Signals are already in flight when
/// handed over (browser promises start eagerly), so awaiting them in turn
/// completes once the slowest one does. A failed signal does not cancel the
/// others.
pub async fn join_ready<I, F>(signals: I) -> PreloadReport
where
    I: IntoIterator<Item = F>,
    F: Future<Output = Result<(), SketchError>>,
{
    let mut report = PreloadReport::default();
    for (i, signal) in signals.into_iter().enumerate() {
        match signal.await {
            Ok(()) => report.ready.push(i),
            Err(e) => {
                log::warn!("[preload] signal {} failed: {}", i, e);
                report.failed.push((i, e));
            }
        }
    }
    report
}
