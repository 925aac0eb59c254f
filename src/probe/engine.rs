//! The probing engine.
//!
//! Probe order comes from [`plan_targets`]; each target gets its own
//! variant built from the untouched baseline, so the order in which
//! requests actually go out has no effect on the classifications.

use serde_json::Value;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;

use crate::document::{build_variant, plan_targets, FieldTarget};
use crate::error::{ProbeError, Result};

use super::sender::FieldSender;
use super::ProbeResult;

/// Classifies every field of a document against one sender.
#[derive(Debug)]
pub struct Prober<S> {
    sender: S,
}

impl<S: FieldSender> Prober<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    /// Start a sequential probe run over `document`.
    ///
    /// Nothing is sent until the returned iterator is advanced; each item is
    /// one round-trip. Iterating again means calling `probe` again.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the root is not an object.
    pub fn probe<'a>(&'a self, document: &'a Value) -> Result<Probes<'a, S>> {
        let targets = plan_targets(document)?;
        let configured = self.sender.is_configured();
        if !configured {
            tracing::debug!("{}", ProbeError::UnconfiguredTarget);
        }
        tracing::info!(fields = targets.len(), "Starting probe run");

        Ok(Probes {
            prober: self,
            baseline: document,
            total: targets.len(),
            targets: targets.into_iter(),
            configured,
            finished: false,
        })
    }

    /// Probe with up to `limit` requests in flight.
    ///
    /// Results come back in the same order [`probe`](Self::probe) yields
    /// them. The first transport error stops workers from picking up new
    /// fields and is returned; results gathered so far are dropped.
    pub fn probe_concurrent(&self, document: &Value, limit: usize) -> Result<Vec<ProbeResult>> {
        let targets = plan_targets(document)?;
        if limit <= 1 || targets.len() <= 1 || !self.sender.is_configured() {
            return self.probe(document)?.collect();
        }
        tracing::info!(fields = targets.len(), limit, "Starting concurrent probe run");

        let next = AtomicUsize::new(0);
        let cancelled = AtomicBool::new(false);
        let workers = limit.min(targets.len());
        let (next, cancelled, targets) = (&next, &cancelled, &targets);

        let mut finished: Vec<(usize, Result<ProbeResult>)> = thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(move || {
                        let mut done = Vec::new();
                        while !cancelled.load(Ordering::Acquire) {
                            let index = next.fetch_add(1, Ordering::AcqRel);
                            let Some(target) = targets.get(index) else {
                                break;
                            };
                            let result = self.probe_one(document, target);
                            if result.is_err() {
                                cancelled.store(true, Ordering::Release);
                            }
                            done.push((index, result));
                        }
                        done
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .map_err(|_| ProbeError::Other(anyhow::anyhow!("probe worker panicked")))
                })
                .collect::<Result<Vec<_>>>()
                .map(|batches| batches.into_iter().flatten().collect())
        })?;

        finished.sort_by_key(|(index, _)| *index);
        finished.into_iter().map(|(_, result)| result).collect()
    }

    /// Probe with `concurrency` in flight, sequentially when it is 1.
    pub fn run(&self, document: &Value, concurrency: usize) -> Result<ProbeRun> {
        let results = if concurrency > 1 {
            self.probe_concurrent(document, concurrency)?
        } else {
            self.probe(document)?.collect::<Result<Vec<_>>>()?
        };

        Ok(ProbeRun::finish(results, !self.sender.is_configured()))
    }

    fn probe_one(&self, baseline: &Value, target: &FieldTarget) -> Result<ProbeResult> {
        let body = build_variant(baseline, target);
        match self.sender.send(&body, target) {
            Ok(outcome) => {
                let result = ProbeResult::from_outcome(target.clone(), &outcome);
                tracing::debug!(
                    field = %target,
                    status = ?outcome.status(),
                    classification = %result.classification,
                    "Probed field"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::debug!(field = %target, error = %err, "Transport failure");
                Err(ProbeError::Transport {
                    field: target.label(),
                    url: err.url,
                    message: err.message,
                })
            }
        }
    }
}

/// Lazy sequence of probe results, one request per item.
///
/// Fused after the first error.
pub struct Probes<'a, S> {
    prober: &'a Prober<S>,
    baseline: &'a Value,
    targets: std::vec::IntoIter<FieldTarget>,
    total: usize,
    configured: bool,
    finished: bool,
}

impl<S> Probes<'_, S> {
    /// Number of fields this run covers.
    pub fn total(&self) -> usize {
        self.total
    }

    /// True when no target is configured and every result is `Unknown`.
    pub fn is_unconfigured(&self) -> bool {
        !self.configured
    }

    /// Target the next call to `next` will probe.
    pub fn peek_target(&self) -> Option<&FieldTarget> {
        if self.finished {
            None
        } else {
            self.targets.as_slice().first()
        }
    }
}

impl<S: FieldSender> Iterator for Probes<'_, S> {
    type Item = Result<ProbeResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let target = self.targets.next()?;

        if !self.configured {
            return Some(Ok(ProbeResult::unknown(target)));
        }

        let result = self.prober.probe_one(self.baseline, &target);
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.targets.len()))
        }
    }
}

impl<S: FieldSender> std::iter::FusedIterator for Probes<'_, S> {}

/// Outcome of a complete run.
#[derive(Debug, Clone, Default)]
pub struct ProbeRun {
    /// Every result, in probe order.
    pub results: Vec<ProbeResult>,
    /// No target was configured; all results are `Unknown`.
    pub unconfigured: bool,
}

impl ProbeRun {
    /// Wrap the results of a completed run and log its totals.
    pub fn finish(results: Vec<ProbeResult>, unconfigured: bool) -> Self {
        let run = Self {
            results,
            unconfigured,
        };
        tracing::info!(
            fields = run.results.len(),
            mandatory = run.mandatory().count(),
            "Probe run finished"
        );
        run
    }

    /// Results classified `Mandatory`, in probe order.
    pub fn mandatory(&self) -> impl Iterator<Item = &ProbeResult> {
        self.results.iter().filter(|r| r.is_mandatory())
    }
}
