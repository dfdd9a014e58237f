//! The showcase choreography: one cycle's fixed schedule.
//!
//! Every product cycle plays the same three-phase template - reveal, idle
//! float, exit - expressed as a [`Timeline`] of time-offset tracks on a
//! single clock. All offsets are relative to cycle zero, not to each other's
//! completion; the phases are overlapping windows, not sequential barriers.
//!
//! # Offset Table (seconds from cycle start)
//!
//! | Track | Start | Duration |
//! |-------|-------|----------|
//! | Background pan/zoom | 0.0 | whole cycle |
//! | Spotlight on | 0.0 | 2.0 |
//! | Card entrance | 0.2 | 1.5 |
//! | Image defocus removal | 0.4 | 1.2 |
//! | Glyph reveal (stagger 0.05) | 0.8 | 0.5 each |
//! | Underline growth | 1.0 | 0.8 |
//! | Details in | 1.2 | 0.8 |
//! | Card float (yoyo) | 1.7 | 4.0 |
//! | Spotlight breathe (yoyo) | 2.0 | 3.0 |
//! | Text block out | 6.5 | 0.5 |
//! | Card accelerate away | 6.6 | 0.8 |
//! | Image exit blur | 6.6 | 0.5 |
//! | Spotlight off | 6.8 | 0.5 |
//!
//! The template is immutable; [`showcase_timeline`] re-instantiates it fresh
//! for every product (the glyph tracks depend on the name length).

use crate::easing::Ease;
use crate::tween::{Property, Target, Timeline, Track};

/// Total schedule length in seconds. The background pan spans the whole
/// cycle, so this is also that track's duration.
pub const CYCLE_LENGTH: f32 = 7.8;

/// Pause between one cycle's completion and the next cycle's start.
pub const CYCLE_BUFFER: f32 = 0.5;

/// Clock offset where the idle float begins.
pub const IDLE_MARK: f32 = 1.7;

/// Clock offset where the exit sequence begins.
pub const EXIT_MARK: f32 = 6.5;

/// Delay between consecutive glyph reveals.
pub const GLYPH_STAGGER: f32 = 0.05;

/// Final width of the underline bar, presenter units.
pub const UNDERLINE_WIDTH: f32 = 100.0;

/// The three named windows of a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Elements entering: spotlight, card, image focus, text stagger.
    Reveal,
    /// Card floating, spotlight breathing.
    Idle,
    /// Everything leaving the stage.
    Exit,
}

/// Classify a clock offset into its phase window.
///
/// `Reveal` is `[0, 1.7)`, `Idle` is `[1.7, 6.5)`, `Exit` is everything
/// from the exit mark on. Tracks from an earlier phase may still be running
/// inside a later window; this is only the dominant label.
pub fn phase_at(t: f32) -> Phase {
    if t < IDLE_MARK {
        Phase::Reveal
    } else if t < EXIT_MARK {
        Phase::Idle
    } else {
        Phase::Exit
    }
}

/// Build the full cycle schedule for a product whose name has `glyph_count`
/// glyphs.
///
/// Each track's `from` value doubles as the pre-reveal initial state: card
/// hidden, shrunk and pushed back, image black and blurred, spotlight dark
/// at half scale, underline collapsed, details hidden and offset, every
/// glyph transparent.
pub fn showcase_timeline(glyph_count: usize) -> Timeline {
    let mut tracks = vec![
        // Background drifts for the whole cycle.
        Track::new(Target::Background, Property::Scale, 1.1, 1.15)
            .lasting(CYCLE_LENGTH)
            .ease(Ease::SineInOut),
        Track::new(Target::Background, Property::X, -20.0, 0.0)
            .lasting(CYCLE_LENGTH)
            .ease(Ease::SineInOut),
        // Spotlight on.
        Track::new(Target::Spotlight, Property::Opacity, 0.0, 0.8)
            .lasting(2.0)
            .ease(Ease::Power2Out),
        Track::new(Target::Spotlight, Property::Scale, 0.5, 1.2)
            .lasting(2.0)
            .ease(Ease::Power2Out),
        // Card drives in: fade, scale up, depth and vertical offset to rest.
        Track::new(Target::Card, Property::Opacity, 0.0, 1.0)
            .at(0.2)
            .lasting(1.5)
            .ease(Ease::Power3Out),
        Track::new(Target::Card, Property::Scale, 0.8, 1.0)
            .at(0.2)
            .lasting(1.5)
            .ease(Ease::Power3Out),
        Track::new(Target::Card, Property::Depth, -200.0, 0.0)
            .at(0.2)
            .lasting(1.5)
            .ease(Ease::Power3Out),
        Track::new(Target::Card, Property::Y, 50.0, 0.0)
            .at(0.2)
            .lasting(1.5)
            .ease(Ease::Power3Out),
        // Lights on: silhouette to full brightness, blur removed.
        Track::new(Target::Image, Property::Brightness, 0.0, 1.0)
            .at(0.4)
            .lasting(1.2)
            .ease(Ease::Power2InOut),
        Track::new(Target::Image, Property::Blur, 10.0, 0.0)
            .at(0.4)
            .lasting(1.2)
            .ease(Ease::Power2InOut),
    ];

    // Staggered per-glyph reveal.
    for i in 0..glyph_count {
        tracks.push(
            Track::new(Target::NameGlyph(i), Property::Opacity, 0.0, 1.0)
                .at(0.8 + GLYPH_STAGGER * i as f32)
                .lasting(0.5)
                .ease(Ease::Power2Out),
        );
    }

    tracks.extend([
        Track::new(Target::Underline, Property::Width, 0.0, UNDERLINE_WIDTH)
            .at(1.0)
            .lasting(0.8)
            .ease(Ease::Power2Out),
        Track::new(Target::Details, Property::Opacity, 0.0, 1.0)
            .at(1.2)
            .lasting(0.8)
            .ease(Ease::Power2Out),
        Track::new(Target::Details, Property::Y, 20.0, 0.0)
            .at(1.2)
            .lasting(0.8)
            .ease(Ease::Power2Out),
        // Idle: one full up-down-up float, spotlight breathing once.
        Track::new(Target::Card, Property::Y, 0.0, -10.0)
            .at(IDLE_MARK)
            .lasting(4.0)
            .ease(Ease::SineInOut)
            .yoyo(),
        Track::new(Target::Spotlight, Property::Opacity, 0.8, 0.6)
            .at(2.0)
            .lasting(3.0)
            .ease(Ease::SineInOut)
            .yoyo(),
        Track::new(Target::Spotlight, Property::Scale, 1.2, 1.1)
            .at(2.0)
            .lasting(3.0)
            .ease(Ease::SineInOut)
            .yoyo(),
        // Exit: text block first, then the card accelerates past the camera,
        // then the spotlight dies.
        Track::new(Target::NameText, Property::Opacity, 1.0, 0.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::NameText, Property::X, 0.0, -50.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::Underline, Property::Opacity, 1.0, 0.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::Underline, Property::X, 0.0, -50.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::Details, Property::Opacity, 1.0, 0.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::Details, Property::X, 0.0, -50.0)
            .at(EXIT_MARK)
            .lasting(0.5)
            .ease(Ease::Power2In),
        Track::new(Target::Card, Property::Depth, 0.0, 500.0)
            .at(EXIT_MARK + 0.1)
            .lasting(0.8)
            .ease(Ease::Power2In),
        Track::new(Target::Card, Property::Opacity, 1.0, 0.0)
            .at(EXIT_MARK + 0.1)
            .lasting(0.8)
            .ease(Ease::Power2In),
        Track::new(Target::Image, Property::Blur, 0.0, 20.0)
            .at(EXIT_MARK + 0.1)
            .lasting(0.5)
            .ease(Ease::Power1Out),
        Track::new(Target::Spotlight, Property::Opacity, 0.8, 0.0)
            .at(EXIT_MARK + 0.3)
            .lasting(0.5)
            .ease(Ease::Power1Out),
    ]);

    Timeline::new(tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_of(tl: &Timeline, target: Target, property: Property) -> f32 {
        tl.tracks()
            .iter()
            .find(|t| t.target == target && t.property == property)
            .map(|t| t.start)
            .unwrap()
    }

    #[test]
    fn test_reveal_offsets_ordered() {
        let tl = showcase_timeline(4);
        let background = start_of(&tl, Target::Background, Property::Scale);
        let spotlight = start_of(&tl, Target::Spotlight, Property::Opacity);
        let card = start_of(&tl, Target::Card, Property::Opacity);
        let image = start_of(&tl, Target::Image, Property::Brightness);
        let glyph = start_of(&tl, Target::NameGlyph(0), Property::Opacity);
        let underline = start_of(&tl, Target::Underline, Property::Width);
        let details = start_of(&tl, Target::Details, Property::Opacity);

        assert!(background <= spotlight);
        assert!(spotlight <= card);
        assert!((card, image, glyph) == (0.2, 0.4, 0.8));
        assert!((underline, details) == (1.0, 1.2));
    }

    #[test]
    fn test_exit_ordering() {
        let tl = showcase_timeline(4);
        let text = start_of(&tl, Target::NameText, Property::Opacity);
        let card = start_of(&tl, Target::Card, Property::Depth);
        let spotlight = tl
            .tracks()
            .iter()
            .filter(|t| t.target == Target::Spotlight && t.property == Property::Opacity)
            .map(|t| t.start)
            .fold(0.0, f32::max);

        assert_eq!(text, EXIT_MARK);
        // Card depth is animated by the entrance first; the exit track is
        // the later of the two.
        let card_exit = tl
            .tracks()
            .iter()
            .filter(|t| t.target == Target::Card && t.property == Property::Depth)
            .map(|t| t.start)
            .fold(0.0, f32::max);
        assert!(card <= card_exit);
        assert!((card_exit - (EXIT_MARK + 0.1)).abs() < 1e-6);
        assert!((spotlight - (EXIT_MARK + 0.3)).abs() < 1e-6);
        assert!(text < card_exit && card_exit < spotlight);
    }

    #[test]
    fn test_reveal_easing_curves() {
        let tl = showcase_timeline(3);
        let ease_of = |target, property| {
            tl.tracks()
                .iter()
                .find(|t| t.target == target && t.property == property)
                .map(|t| t.ease)
                .unwrap()
        };

        // Quartic for the hero entrance, cubic for the rest of the reveal,
        // cubic in-out for the focus pull.
        assert_eq!(ease_of(Target::Card, Property::Opacity), Ease::Power3Out);
        assert_eq!(ease_of(Target::Card, Property::Depth), Ease::Power3Out);
        assert_eq!(ease_of(Target::Spotlight, Property::Opacity), Ease::Power2Out);
        assert_eq!(ease_of(Target::Spotlight, Property::Scale), Ease::Power2Out);
        assert_eq!(ease_of(Target::NameGlyph(0), Property::Opacity), Ease::Power2Out);
        assert_eq!(ease_of(Target::Underline, Property::Width), Ease::Power2Out);
        assert_eq!(ease_of(Target::Details, Property::Opacity), Ease::Power2Out);
        assert_eq!(ease_of(Target::Image, Property::Brightness), Ease::Power2InOut);
        assert_eq!(ease_of(Target::Background, Property::Scale), Ease::SineInOut);

        // Exit curves accelerate in.
        let exit_ease = tl
            .tracks()
            .iter()
            .find(|t| t.target == Target::NameText && t.property == Property::Opacity)
            .map(|t| t.ease)
            .unwrap();
        assert_eq!(exit_ease, Ease::Power2In);
    }

    #[test]
    fn test_cycle_length_independent_of_name() {
        for glyphs in [0, 1, 8, 24] {
            let tl = showcase_timeline(glyphs);
            assert!((tl.duration() - CYCLE_LENGTH).abs() < 1e-4);
        }
    }

    #[test]
    fn test_glyph_stagger_spacing() {
        let tl = showcase_timeline(3);
        let starts: Vec<f32> = (0..3)
            .map(|i| start_of(&tl, Target::NameGlyph(i), Property::Opacity))
            .collect();
        assert!((starts[1] - starts[0] - GLYPH_STAGGER).abs() < 1e-6);
        assert!((starts[2] - starts[1] - GLYPH_STAGGER).abs() < 1e-6);
    }

    #[test]
    fn test_initial_state_hidden() {
        let tl = showcase_timeline(2);
        let initial = tl.resolve(0.0);
        let value = |target, property| {
            initial
                .iter()
                .find(|(tg, pr, _)| (*tg, *pr) == (target, property))
                .map(|(_, _, v)| *v)
                .unwrap()
        };
        assert_eq!(value(Target::Card, Property::Opacity), 0.0);
        assert_eq!(value(Target::Card, Property::Depth), -200.0);
        assert_eq!(value(Target::Image, Property::Brightness), 0.0);
        assert_eq!(value(Target::Spotlight, Property::Scale), 0.5);
        assert_eq!(value(Target::Underline, Property::Width), 0.0);
        assert_eq!(value(Target::NameGlyph(0), Property::Opacity), 0.0);
        assert_eq!(value(Target::NameGlyph(1), Property::Opacity), 0.0);
    }

    #[test]
    fn test_phase_windows() {
        assert_eq!(phase_at(0.0), Phase::Reveal);
        assert_eq!(phase_at(1.69), Phase::Reveal);
        assert_eq!(phase_at(1.7), Phase::Idle);
        assert_eq!(phase_at(6.49), Phase::Idle);
        assert_eq!(phase_at(6.5), Phase::Exit);
        assert_eq!(phase_at(7.8), Phase::Exit);
    }
}
