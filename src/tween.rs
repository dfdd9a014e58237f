//! Declarative tween schedules.
//!
//! A [`Timeline`] is a flat list of [`Track`]s, each animating one property
//! of one stage target over a fixed window on a shared per-cycle clock.
//! Sampling a timeline at a clock value is a pure function: the same `t`
//! always yields the same property values, regardless of how the caller got
//! there. This keeps the schedule independent of any particular rendering
//! backend - the same timeline can drive a canvas, a native scene graph, or
//! a terminal renderer.
//!
//! # Example
//!
//! ```ignore
//! let tl = Timeline::new(vec![
//!     Track::new(Target::Card, Property::Opacity, 0.0, 1.0)
//!         .at(0.2)
//!         .lasting(1.5)
//!         .ease(Ease::Power3Out),
//! ]);
//!
//! for (target, property, value) in tl.sample(0.9) {
//!     presenter.apply(target, property, value);
//! }
//! ```

use crate::easing::Ease;

/// A stage element a track can address.
///
/// These are roles, not concrete objects: the presenter decides what each
/// role maps to (a DOM node, a sprite, a text cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Full-viewport backdrop behind the product.
    Background,
    /// The light pool highlighting the product.
    Spotlight,
    /// The product card (image container).
    Card,
    /// The product image inside the card.
    Image,
    /// The product name as one block (used on exit).
    NameText,
    /// One glyph of the product name, by index. Glyphs animate individually
    /// during the staggered reveal.
    NameGlyph(usize),
    /// The accent bar under the product name.
    Underline,
    /// The price/meta detail block.
    Details,
}

/// An animatable scalar property of a stage target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// 0.0 transparent .. 1.0 opaque.
    Opacity,
    /// Uniform scale factor, 1.0 = natural size.
    Scale,
    /// Horizontal offset from rest position.
    X,
    /// Vertical offset from rest position.
    Y,
    /// Perspective depth offset. Negative = pushed back, positive = toward
    /// (and past) the camera.
    Depth,
    /// Width in presenter units (the underline bar).
    Width,
    /// Image brightness multiplier, 1.0 = normal, 0.0 = silhouette.
    Brightness,
    /// Image blur radius in presenter units, 0.0 = sharp.
    Blur,
}

/// One scheduled sub-animation: a property sweep over a fixed clock window.
#[derive(Clone, Debug)]
pub struct Track {
    /// What is animated.
    pub target: Target,
    /// Which property of it.
    pub property: Property,
    /// Value before the track starts (also the pre-reveal initial state).
    pub from: f32,
    /// Value at the end of the window.
    pub to: f32,
    /// Start offset from cycle zero, seconds.
    pub start: f32,
    /// Window length, seconds.
    pub duration: f32,
    /// Easing curve over the window.
    pub ease: Ease,
    /// When true the track plays out and back within one window:
    /// `from -> to -> from`. Used for the idle float and spotlight breathing.
    pub yoyo: bool,
}

impl Track {
    /// Create a track starting at clock zero with a one second window,
    /// linear easing, no oscillation. Chain the builder methods to adjust.
    pub fn new(target: Target, property: Property, from: f32, to: f32) -> Self {
        Self {
            target,
            property,
            from,
            to,
            start: 0.0,
            duration: 1.0,
            ease: Ease::Linear,
            yoyo: false,
        }
    }

    /// Set the start offset (seconds from cycle zero).
    pub fn at(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    /// Set the window length in seconds.
    pub fn lasting(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Play out and back within the window (`from -> to -> from`).
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    /// Clock offset at which this track stops changing.
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }

    /// Value of this track at clock `t`.
    ///
    /// Before `start` the value holds at `from`; after `end()` it holds at
    /// the final value (`to`, or `from` again for yoyo tracks). Inside the
    /// window the eased interpolation applies.
    pub fn value_at(&self, t: f32) -> f32 {
        if t <= self.start {
            return self.from;
        }
        if t >= self.end() {
            return if self.yoyo { self.from } else { self.to };
        }
        let mut progress = (t - self.start) / self.duration;
        if self.yoyo {
            // Fold the window: first half runs forward, second half reverses.
            progress = if progress < 0.5 {
                progress * 2.0
            } else {
                2.0 - progress * 2.0
            };
        }
        self.from + (self.to - self.from) * self.ease.apply(progress)
    }
}

/// An immutable schedule of tracks sharing one clock.
#[derive(Clone, Debug, Default)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    /// Build a timeline from its tracks.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The tracks, in schedule order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total schedule length: the latest track end, or 0.0 when empty.
    pub fn duration(&self) -> f32 {
        self.tracks.iter().map(Track::end).fold(0.0, f32::max)
    }

    /// Sample every track at clock `t`.
    ///
    /// Yields `(target, property, value)` in schedule order. At `t = 0.0`
    /// this produces each track's `from` value, which is how the sequencer
    /// applies the consistent pre-reveal initial state.
    pub fn sample(&self, t: f32) -> impl Iterator<Item = (Target, Property, f32)> + '_ {
        self.tracks
            .iter()
            .map(move |track| (track.target, track.property, track.value_at(t)))
    }

    /// Sample with override resolution: one value per `(target, property)`.
    ///
    /// Several tracks may address the same property over different windows
    /// (the card's vertical offset is swept by the entrance, then by the idle
    /// float). The track that started most recently wins; a track that has
    /// not started yet never overrides one that has. When no track for a
    /// property has started, the earliest-scheduled track contributes its
    /// `from` value. Results keep first-seen property order, so repeated
    /// application to a presenter is deterministic.
    pub fn resolve(&self, t: f32) -> Vec<(Target, Property, f32)> {
        // (key, winning start offset, started flag, value)
        let mut resolved: Vec<(Target, Property, f32, bool, f32)> = Vec::new();
        for track in &self.tracks {
            let started = track.start <= t;
            match resolved
                .iter_mut()
                .find(|(tg, pr, ..)| *tg == track.target && *pr == track.property)
            {
                None => resolved.push((
                    track.target,
                    track.property,
                    track.start,
                    started,
                    track.value_at(t),
                )),
                Some(slot) => {
                    let wins = started && (!slot.3 || track.start >= slot.2);
                    if wins {
                        slot.2 = track.start;
                        slot.3 = true;
                        slot.4 = track.value_at(t);
                    }
                }
            }
        }
        resolved
            .into_iter()
            .map(|(target, property, _, _, value)| (target, property, value))
            .collect()
    }
}
