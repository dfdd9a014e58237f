//! The presentation surface the sequencer drives.
//!
//! The core never constructs visual elements itself. It asks a [`Presenter`]
//! to mount a product's representation, then pushes sampled property values
//! at it frame by frame. The call direction is strictly one way: the core
//! calls the presenter, never the reverse.
//!
//! Implementations can be anything that maps [`Target`]/[`Property`] pairs
//! onto real elements - a DOM bridge, a 2D scene graph, a terminal grid.

use crate::catalog::Product;
use crate::tween::{Property, Target};

/// What the presenter reports after mounting a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mounted {
    /// Number of per-glyph handles exposed for the product name. Each glyph
    /// must start fully transparent - the staggered reveal depends on it.
    pub glyph_count: usize,
}

/// A backend that can mount products and receive animated property values.
pub trait Presenter {
    /// Build the visual representation of `product`: card, image, spotlight,
    /// name split into per-glyph handles, underline bar, detail block. Text
    /// fields are set from the product here; glyphs start transparent.
    ///
    /// Replaces whatever the previous cycle mounted.
    fn mount(&mut self, product: &Product) -> Mounted;

    /// Apply one sampled property value to a mounted element.
    ///
    /// Called many times per frame, once per resolved timeline property.
    /// Values arrive in a deterministic order for a given clock offset.
    fn apply(&mut self, target: Target, property: Property, value: f32);
}

/// A presenter that displays nothing. Useful for headless runs and for
/// soaking the sequencer logic without a backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn mount(&mut self, product: &Product) -> Mounted {
        Mounted {
            glyph_count: product.name.chars().count(),
        }
    }

    fn apply(&mut self, _target: Target, _property: Property, _value: f32) {}
}
