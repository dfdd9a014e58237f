//! # Vitrine - Cinematic Product Showcase Engine
//!
//! An unattended, looping visual showcase: vitrine cycles through a catalog
//! of products, playing a three-phase cinematic choreography for each
//! (reveal, idle float, exit) over an ambient drifting-fog backdrop -
//! indefinitely, with no user interaction.
//!
//! ## Quick Start
//!
//! ```ignore
//! use vitrine::prelude::*;
//!
//! fn main() -> Result<(), ShowcaseError> {
//!     let mut show = Showcase::new()
//!         .with_catalog_path("products.json")
//!         .with_presenter(MyPresenter::new())
//!         .with_bounds(Bounds::new(1280.0, 720.0))
//!         .start()?;
//!
//!     show.run(); // blocks until a StopHandle fires
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Two independent perpetual loops
//!
//! - The **fog field** ([`FogField`]) owns a fixed pool of drifting
//!   particles, reset in place when their life expires, painted each frame
//!   through the backend-agnostic [`Surface`] trait.
//! - The **sequencer** ([`Sequencer`]) owns the cycle state: it selects
//!   `catalog[index mod len]`, mounts it through your [`Presenter`], plays
//!   the fixed choreography, then bumps the index and starts over. Forever.
//!
//! Both advance from one cooperative [`RunningShowcase::step`]; they share
//! no mutable state and there is nothing to lock.
//!
//! ### Declarative schedules
//!
//! The choreography is a plain list of `(target, property, offset,
//! duration, easing)` tracks on one per-cycle clock ([`Timeline`]),
//! interpreted by sampling - no tweening-library DSL, no callbacks. The
//! same schedule can drive any presenter backend.
//!
//! ### Presenters
//!
//! Implement [`Presenter`] to map stage roles ([`Target`]) and scalar
//! properties ([`Property`]) to whatever actually displays them. The core
//! calls you; you never call the core.
//!
//! ## Error Behavior
//!
//! The animation math is total. A missing or malformed catalog is logged
//! and yields an empty catalog; with nothing to display the sequencer stays
//! idle (zero presenter calls) while the fog keeps drifting.

pub mod catalog;
pub mod choreography;
pub mod easing;
mod error;
pub mod fog;
pub mod presenter;
pub mod sequencer;
pub mod showcase;
pub mod surface;
pub mod time;
pub mod tween;

pub use catalog::{Catalog, Product};
pub use choreography::{showcase_timeline, Phase};
pub use easing::Ease;
pub use error::{CatalogError, ShowcaseError};
pub use fog::{Bounds, FogField, Particle};
pub use glam::Vec2;
pub use presenter::{Mounted, NullPresenter, Presenter};
pub use sequencer::{Sequencer, SequencerState};
pub use showcase::{RunningShowcase, Showcase, StopHandle};
pub use surface::{RasterSurface, Surface};
pub use time::Clock;
pub use tween::{Property, Target, Timeline, Track};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use vitrine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{Catalog, Product};
    pub use crate::choreography::{showcase_timeline, Phase};
    pub use crate::easing::Ease;
    pub use crate::error::{CatalogError, ShowcaseError};
    pub use crate::fog::{Bounds, FogField};
    pub use crate::presenter::{Mounted, NullPresenter, Presenter};
    pub use crate::sequencer::{Sequencer, SequencerState};
    pub use crate::showcase::{RunningShowcase, Showcase, StopHandle};
    pub use crate::surface::{RasterSurface, Surface};
    pub use crate::time::Clock;
    pub use crate::tween::{Property, Target, Timeline, Track};
    pub use crate::Vec2;
}
