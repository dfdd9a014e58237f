//! The cycle sequencer: product selection, choreography playback, index
//! advancement. Forever.
//!
//! One sequencer owns the cycle state (`index`, clock, current timeline) and
//! nothing else. Each call to [`Sequencer::advance`] moves the shared cycle
//! clock forward and pushes freshly sampled property values into the
//! presenter; when the schedule and its trailing buffer have elapsed, the
//! index is bumped and the next product is mounted in the same call.
//!
//! Unlike a self-rescheduling callback chain, playback here is an explicit
//! cooperative step function: the owner decides the cadence and can stop
//! the sequencer deterministically at any frame boundary with
//! [`Sequencer::stop`].
//!
//! An empty catalog is absorbing: the sequencer stays [`SequencerState::Idle`],
//! makes zero presenter calls, and never errors.

use crate::catalog::Catalog;
use crate::choreography::{phase_at, showcase_timeline, Phase, CYCLE_BUFFER};
use crate::presenter::Presenter;
use crate::tween::Timeline;

/// Where the sequencer is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequencerState {
    /// Before the first product, or permanently with an empty catalog.
    Idle,
    /// A cycle is in flight; the phase is the dominant window label.
    Playing(Phase),
    /// Explicitly stopped. Absorbing; `advance` is a no-op.
    Stopped,
}

/// Drives the three-phase choreography over the catalog, wrapping the index
/// forever.
#[derive(Debug)]
pub struct Sequencer {
    state: SequencerState,
    /// Monotonic cycle counter; product = `catalog[index mod len]`.
    index: usize,
    /// How far the index advances per completed cycle. The original design
    /// reserved room for multi-product cycles; one product per cycle is the
    /// default and the only display mode.
    products_per_cycle: usize,
    clock: f32,
    timeline: Option<Timeline>,
    completed_cycles: u64,
}

impl Sequencer {
    /// A sequencer at index 0, idle until the first `advance`.
    pub fn new() -> Self {
        Self {
            state: SequencerState::Idle,
            index: 0,
            products_per_cycle: 1,
            clock: 0.0,
            timeline: None,
            completed_cycles: 0,
        }
    }

    /// Start from a specific cycle index instead of 0.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    /// Advance the index by `n` per completed cycle (default 1).
    pub fn with_products_per_cycle(mut self, n: usize) -> Self {
        self.products_per_cycle = n.max(1);
        self
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Current cycle index (the product being, or about to be, shown).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cycles fully completed since creation.
    #[inline]
    pub fn completed_cycles(&self) -> u64 {
        self.completed_cycles
    }

    /// The per-cycle clock, seconds since the current cycle's zero.
    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Stop playback. Absorbing: every later `advance` is a no-op, and the
    /// cycle in flight is abandoned mid-frame with no further presenter
    /// calls.
    pub fn stop(&mut self) {
        self.state = SequencerState::Stopped;
    }

    /// Move the cycle clock forward by `dt` seconds and apply the sampled
    /// schedule to `presenter`.
    ///
    /// Handles the whole per-cycle procedure: mounting the product on cycle
    /// entry (which applies the consistent pre-reveal state), per-frame
    /// sampling with override resolution, and index advancement once the
    /// schedule plus the inter-cycle buffer has elapsed.
    pub fn advance(&mut self, catalog: &Catalog, presenter: &mut dyn Presenter, dt: f32) {
        match self.state {
            SequencerState::Stopped => {}
            SequencerState::Idle => {
                // First frame: try to enter cycle 0. An empty catalog keeps
                // us idle with zero presenter calls.
                if self.begin_cycle(catalog, presenter) {
                    self.state = SequencerState::Playing(Phase::Reveal);
                }
            }
            SequencerState::Playing(_) => {
                self.clock += dt;
                let Some(timeline) = self.timeline.as_ref() else {
                    self.state = SequencerState::Idle;
                    return;
                };
                let duration = timeline.duration();

                if self.clock >= duration + CYCLE_BUFFER {
                    self.completed_cycles += 1;
                    self.index = self.index.wrapping_add(self.products_per_cycle);
                    tracing::debug!(
                        completed = self.completed_cycles,
                        next_index = self.index,
                        "cycle complete"
                    );
                    if self.begin_cycle(catalog, presenter) {
                        self.state = SequencerState::Playing(Phase::Reveal);
                    } else {
                        // Unreachable with a fixed-after-load catalog.
                        self.state = SequencerState::Idle;
                    }
                } else {
                    // Inside the buffer the schedule holds its final values.
                    let t = self.clock.min(duration);
                    for (target, property, value) in timeline.resolve(t) {
                        presenter.apply(target, property, value);
                    }
                    self.state = SequencerState::Playing(phase_at(t));
                }
            }
        }
    }

    /// Mount the product for the current index and apply the initial state.
    /// Returns false (leaving the sequencer presenter-untouched) when the
    /// catalog is empty.
    fn begin_cycle(&mut self, catalog: &Catalog, presenter: &mut dyn Presenter) -> bool {
        let Some(product) = catalog.cycle_product(self.index) else {
            return false;
        };
        tracing::debug!(index = self.index, product = %product.name, "cycle start");

        let mounted = presenter.mount(product);
        let timeline = showcase_timeline(mounted.glyph_count);

        // Consistent pre-reveal state: every track's `from` value.
        for (target, property, value) in timeline.resolve(0.0) {
            presenter.apply(target, property, value);
        }

        self.timeline = Some(timeline);
        self.clock = 0.0;
        true
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}
