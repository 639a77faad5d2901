use crate::dlog;
use crate::training::{Training, Workout};
use crate::types::Package;
use anyhow::{Context, Result};
use std::io::Write;

/// What to do when one package in a batch cannot be turned into a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first bad package and return its error.
    #[default]
    Abort,
    /// Log the bad package and move on to the next one.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub rendered: usize,
    pub skipped: usize,
}

/// Write one report line per package to `out`, in input order.
pub fn run_batch<W: Write>(
    packages: &[Package],
    policy: BatchPolicy,
    mut out: W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (i, p) in packages.iter().enumerate() {
        let workout = match Workout::try_from(p) {
            Ok(w) => w,
            Err(e) if policy == BatchPolicy::Skip => {
                tracing::warn!(index = i, code = %p.code, err = %e, "skipping package");
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(e).with_context(|| format!("package #{} ({})", i + 1, p.code));
            }
        };

        dlog!(
            "package={} code={} distance_km={} speed_kmh={} kcal={}",
            i + 1,
            workout.code(),
            workout.get_distance(),
            workout.get_mean_speed(),
            workout.get_spent_calories()
        );

        writeln!(out, "{}", workout.render_report()).context("writing report")?;
        summary.rendered += 1;
    }

    tracing::info!(
        rendered = summary.rendered,
        skipped = summary.skipped,
        "batch done"
    );

    Ok(summary)
}
