use std::ops::{Add, Sub};

use crate::config::ShortcutConfig;
use crate::error::ShortcutError;
use crate::traits::{CostCompare, PathGenerator};

/// Counters describing the last [`Shortcutter::shortcut`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortcutStats {
    /// Window evaluations; each pass queries every generator once.
    pub passes: usize,
    /// Spans appended to the result.
    pub commits: usize,
    /// Total `generate_path` calls.
    pub generator_calls: usize,
    /// Candidates that passed the acceptance test.
    pub accepted: usize,
}

// ---------------------------------------------------------------------------
// Window state
// ---------------------------------------------------------------------------

/// The span of the original path currently considered for replacement.
struct Window<W, C> {
    /// Original index the window starts at.
    start: usize,
    /// Original index the next pass tries to connect to.
    end: usize,
    /// Last original index `best_path` reaches.
    reach: usize,
    best_path: Vec<W>,
    best_cost: C,
    /// Whether a candidate was accepted since the window was last reset.
    improved: bool,
}

impl<W: Clone, C: Copy + Sub<Output = C>> Window<W, C> {
    /// A window over `start..=end` whose baseline is the original route up
    /// to `end - 1`.
    fn new(path: &[W], accum: &[C], start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            reach: end - 1,
            best_path: path[start..end].to_vec(),
            best_cost: accum[end - 1] - accum[start],
            improved: false,
        }
    }
}

/// Next window end after a step from `end` on a path of `len` waypoints.
#[inline]
fn advance(end: usize, len: usize, granularity: usize) -> usize {
    let remaining = len - 1 - end;
    if remaining == 0 {
        len
    } else {
        end + granularity.min(remaining)
    }
}

/// Append `span` to `result`, dropping the junction waypoint they share.
#[inline]
fn commit<W: Clone>(result: &mut Vec<W>, span: &[W]) {
    result.pop();
    result.extend_from_slice(span);
}

// ---------------------------------------------------------------------------
// Shortcutter
// ---------------------------------------------------------------------------

/// Greedy windowed shortcut search over a waypoint path.
///
/// Starting from the first waypoint, the search asks each generator, in
/// order, to connect the window start to successively later waypoints of the
/// original path. A candidate is accepted when the comparator finds it no
/// worse than the best known route to the previous waypoint plus the
/// original segment into the window end. Once a window that has improved can
/// be extended no further, its best route is committed and a new window
/// starts where it ended.
///
/// `Shortcutter` keeps its prefix-sum and result buffers between calls so
/// repeated queries reuse their allocations; results never depend on earlier
/// calls.
pub struct Shortcutter<W, C> {
    config: ShortcutConfig,
    accum: Vec<C>,
    result: Vec<W>,
    stats: ShortcutStats,
}

impl<W, C> Default for Shortcutter<W, C> {
    fn default() -> Self {
        Self::new(ShortcutConfig::default())
    }
}

impl<W, C> Shortcutter<W, C> {
    /// Create a shortcutter with the given parameters.
    pub fn new(config: ShortcutConfig) -> Self {
        Self {
            config,
            accum: Vec::new(),
            result: Vec::new(),
            stats: ShortcutStats::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ShortcutConfig {
        &self.config
    }

    /// Replace the parameters used by subsequent calls.
    pub fn set_config(&mut self, config: ShortcutConfig) {
        self.config = config;
    }

    /// Counters from the last call.
    #[inline]
    pub fn stats(&self) -> ShortcutStats {
        self.stats
    }

    /// Number of window passes made by the last call.
    #[inline]
    pub fn passes(&self) -> usize {
        self.stats.passes
    }
}

impl<W, C> Shortcutter<W, C>
where
    W: Clone,
    C: Copy + Default + Add<Output = C> + Sub<Output = C>,
{
    /// Shortcut `path`, whose consecutive waypoints are joined by `costs`.
    ///
    /// Requires exactly one cost per transition (`costs` must be empty for
    /// an empty path). Paths with fewer than two waypoints are returned
    /// unchanged without calling any generator. The returned slice always
    /// starts and ends with the first and last waypoints of `path`.
    pub fn shortcut<G, L>(
        &mut self,
        path: &[W],
        costs: &[C],
        generators: &[G],
        leq: &L,
    ) -> Result<&[W], ShortcutError>
    where
        G: PathGenerator<W, C>,
        L: CostCompare<C> + ?Sized,
    {
        self.config.validate()?;
        self.stats = ShortcutStats::default();
        self.result.clear();

        let n = path.len();
        if costs.len() != n.saturating_sub(1) {
            return Err(ShortcutError::ShapeMismatch {
                points: n,
                costs: costs.len(),
            });
        }
        if n < 2 {
            self.result.extend_from_slice(path);
            return Ok(&self.result);
        }
        if self.config.window != ShortcutConfig::default().window {
            log::debug!("window = {} is reserved and has no effect", self.config.window);
        }

        let mut accum = std::mem::take(&mut self.accum);
        accum.clear();
        let mut total = C::default();
        accum.push(total);
        for &c in costs {
            total = total + c;
            accum.push(total);
        }

        let mut result = std::mem::take(&mut self.result);
        let granularity = self.config.granularity;
        let mut win = Window::new(path, &accum, 0, 1);

        while win.end < n {
            let end = win.end;
            let segment = accum[end] - accum[end - 1];
            self.stats.passes += 1;

            let mut accepted = false;
            for generator in generators {
                self.stats.generator_calls += 1;
                let Some((candidate, cost)) = generator.generate_path(&path[win.start], &path[end])
                else {
                    continue;
                };
                // Compared against the best so far, which may have been
                // replaced by an earlier generator in this same pass.
                if leq.leq(&cost, &(win.best_cost + segment)) {
                    accepted = true;
                    win.best_path = candidate;
                    win.best_cost = cost;
                    win.reach = end;
                    self.stats.accepted += 1;
                }
            }
            log::trace!(
                "pass {}: window {}..={} {}",
                self.stats.passes,
                win.start,
                end,
                if accepted { "accepted" } else { "rejected" }
            );

            if accepted {
                win.improved = true;
                win.end = advance(end, n, granularity);
            } else if !win.improved {
                // Still the original route: extend it through this span.
                win.best_path.extend_from_slice(&path[win.reach + 1..=end]);
                win.best_cost = win.best_cost + (accum[end] - accum[win.reach]);
                win.reach = end;
                win.end = advance(end, n, granularity);
            } else {
                log::debug!(
                    "commit {}..={} ({} waypoints)",
                    win.start,
                    win.reach,
                    win.best_path.len()
                );
                commit(&mut result, &win.best_path);
                self.stats.commits += 1;
                win = Window::new(path, &accum, win.reach, end);
            }
        }

        commit(&mut result, &win.best_path);
        self.stats.commits += 1;
        log::debug!(
            "shortcut {} -> {} waypoints in {} passes, {} commits",
            n,
            result.len(),
            self.stats.passes,
            self.stats.commits
        );

        self.accum = accum;
        self.result = result;
        Ok(&self.result)
    }
}

/// One-shot convenience wrapper around [`Shortcutter::shortcut`].
pub fn shortcut_path<W, C, G, L>(
    path: &[W],
    costs: &[C],
    generators: &[G],
    config: ShortcutConfig,
    leq: &L,
) -> Result<Vec<W>, ShortcutError>
where
    W: Clone,
    C: Copy + Default + Add<Output = C> + Sub<Output = C>,
    G: PathGenerator<W, C>,
    L: CostCompare<C> + ?Sized,
{
    let mut shortcutter = Shortcutter::new(config);
    shortcutter.shortcut(path, costs, generators, leq).map(<[W]>::to_vec)
}

/// Per-transition costs of `path` under `cost`.
pub fn segment_costs<W, C>(path: &[W], cost: impl Fn(&W, &W) -> C) -> Vec<C> {
    path.windows(2).map(|w| cost(&w[0], &w[1])).collect()
}
