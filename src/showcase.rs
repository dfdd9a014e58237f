//! Showcase builder and orchestrator.
//!
//! The showcase owns the whole context explicitly: catalog, presenter,
//! sequencer, fog field, surface and clock live in one struct, passed
//! nothing through globals. Configure with method chaining, then either
//! drive frames yourself with [`RunningShowcase::step`] or hand control to
//! the blocking [`RunningShowcase::run`] loop.
//!
//! # Example
//!
//! ```ignore
//! let mut show = Showcase::new()
//!     .with_catalog_path("products.json")
//!     .with_presenter(MyPresenter::new())
//!     .with_bounds(Bounds::new(1280.0, 720.0))
//!     .start()?;
//!
//! let stop = show.stop_handle();
//! ctrlc_hook(move || stop.stop());
//! show.run();
//! ```

use crate::catalog::Catalog;
use crate::error::ShowcaseError;
use crate::fog::{Bounds, FogField, DEFAULT_POOL_SIZE};
use crate::presenter::Presenter;
use crate::sequencer::Sequencer;
use crate::surface::RasterSurface;
use crate::time::Clock;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A shared flag for stopping a running showcase from outside the loop.
///
/// Cloneable and thread-safe; the loop observes the flag at every frame
/// boundary, so stopping is deterministic - no cycle is ever interrupted
/// mid-computation, only between frames.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Request the showcase to stop at the next frame boundary.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Showcase configuration builder.
///
/// Use method chaining to configure, then call `.start()`.
pub struct Showcase<P: Presenter> {
    catalog: Catalog,
    presenter: Option<P>,
    fog_count: usize,
    bounds: Bounds,
    frame_rate: f32,
    products_per_cycle: usize,
    start_index: usize,
}

impl<P: Presenter> Showcase<P> {
    /// A showcase with an empty catalog, default fog and 60 fps pacing.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::empty(),
            presenter: None,
            fog_count: DEFAULT_POOL_SIZE,
            bounds: Bounds::new(1280.0, 720.0),
            frame_rate: 60.0,
            products_per_cycle: 1,
            start_index: 0,
        }
    }

    /// Use an already-loaded catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Load the catalog from a JSON file, falling back to an empty catalog
    /// (logged, not retried) on failure. With an empty catalog the showcase
    /// still runs: fog drifts, nothing is ever mounted.
    pub fn with_catalog_path(self, path: impl AsRef<Path>) -> Self {
        let catalog = Catalog::load_or_empty(path);
        self.with_catalog(catalog)
    }

    /// Load the catalog from a JSON file, failing fast on a missing or
    /// malformed document instead of falling back to an empty catalog.
    pub fn try_with_catalog_path(self, path: impl AsRef<Path>) -> Result<Self, ShowcaseError> {
        let catalog = Catalog::load(path)?;
        Ok(self.with_catalog(catalog))
    }

    /// Set the presenter backend. Required.
    pub fn with_presenter(mut self, presenter: P) -> Self {
        self.presenter = Some(presenter);
        self
    }

    /// Set the fog particle pool size (default 30).
    pub fn with_fog_count(mut self, count: usize) -> Self {
        self.fog_count = count;
        self
    }

    /// Set the viewport bounds (default 1280 x 720).
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the pacing of the blocking run loop in frames per second.
    pub fn with_frame_rate(mut self, fps: f32) -> Self {
        self.frame_rate = fps.max(1.0);
        self
    }

    /// Advance the catalog index by `n` per completed cycle (default 1).
    pub fn with_products_per_cycle(mut self, n: usize) -> Self {
        self.products_per_cycle = n;
        self
    }

    /// Begin cycling at a specific catalog index instead of 0.
    pub fn starting_at(mut self, index: usize) -> Self {
        self.start_index = index;
        self
    }

    /// Assemble the running context.
    ///
    /// Fails with [`ShowcaseError::NoPresenter`] if no presenter was set.
    pub fn start(self) -> Result<RunningShowcase<P>, ShowcaseError> {
        let presenter = self.presenter.ok_or(ShowcaseError::NoPresenter)?;
        tracing::info!(
            products = self.catalog.len(),
            fog = self.fog_count,
            "showcase starting"
        );
        Ok(RunningShowcase {
            catalog: self.catalog,
            presenter,
            sequencer: Sequencer::new()
                .starting_at(self.start_index)
                .with_products_per_cycle(self.products_per_cycle),
            fog: FogField::new(self.fog_count, self.bounds),
            surface: RasterSurface::new(
                self.bounds.width.max(0.0) as usize,
                self.bounds.height.max(0.0) as usize,
            ),
            clock: Clock::new(),
            frame_rate: self.frame_rate,
            stop: StopHandle::default(),
        })
    }
}

impl<P: Presenter> Default for Showcase<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// The assembled showcase context: both perpetual loops and everything they
/// touch.
pub struct RunningShowcase<P: Presenter> {
    catalog: Catalog,
    presenter: P,
    sequencer: Sequencer,
    fog: FogField,
    surface: RasterSurface,
    clock: Clock,
    frame_rate: f32,
    stop: StopHandle,
}

impl<P: Presenter> RunningShowcase<P> {
    /// Advance both loops by one frame: tick the clock, simulate and paint
    /// the fog, push the sequencer forward by the frame delta.
    ///
    /// The two loops touch disjoint state and are always advanced in the
    /// same order, so a frame is fully deterministic for a given delta.
    pub fn step(&mut self) {
        let dt = self.clock.tick();
        self.fog.tick(&mut self.surface);
        self.sequencer
            .advance(&self.catalog, &mut self.presenter, dt);
    }

    /// Block and run frames at the configured rate until a stop is
    /// requested via [`RunningShowcase::stop_handle`] (or `stop`).
    pub fn run(&mut self) {
        let frame_budget = Duration::from_secs_f32(1.0 / self.frame_rate);
        while !self.stop.is_stopped() {
            let frame_start = Instant::now();
            self.step();
            let spent = frame_start.elapsed();
            if let Some(remaining) = frame_budget.checked_sub(spent) {
                std::thread::sleep(remaining);
            }
        }
        self.sequencer.stop();
        tracing::info!(
            frames = self.clock.frame(),
            cycles = self.sequencer.completed_cycles(),
            wall_secs = self.clock.wall_elapsed().as_secs_f32(),
            "showcase stopped"
        );
    }

    /// A cloneable handle that stops the blocking loop from another thread.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Stop at the next frame boundary.
    pub fn stop(&mut self) {
        self.stop.stop();
        self.sequencer.stop();
    }

    /// Viewport resize signal: recompute bounds without resetting particle
    /// state. Effective on the next frame.
    pub fn resize(&mut self, bounds: Bounds) {
        self.fog.resize(bounds);
        self.surface
            .resize(bounds.width.max(0.0) as usize, bounds.height.max(0.0) as usize);
    }

    /// The fog simulation, for inspection.
    pub fn fog(&self) -> &FogField {
        &self.fog
    }

    /// The cycle sequencer, for inspection.
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// The latest fog frame.
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// The presenter backend.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Use a fixed per-frame delta instead of wall time (deterministic
    /// playback).
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.clock.set_fixed_delta(delta);
    }
}
