//! End-to-end tests over the public API: catalog cycling, choreography
//! ordering, fog behavior under resize, and deterministic stopping.

use std::cell::RefCell;
use std::rc::Rc;

use vitrine::prelude::*;
use vitrine::choreography::{CYCLE_BUFFER, CYCLE_LENGTH, EXIT_MARK};

fn product(name: &str) -> Product {
    Product {
        name: name.to_string(),
        price: "$100".to_string(),
        meta: "spec line".to_string(),
        image_url: format!("{name}.png"),
    }
}

/// Records every presenter call, shared with the test body.
#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<String>>>,
}

impl Presenter for Recorder {
    fn mount(&mut self, product: &Product) -> Mounted {
        self.log.borrow_mut().push(format!("mount:{}", product.name));
        Mounted {
            glyph_count: product.name.chars().count(),
        }
    }

    fn apply(&mut self, _target: Target, _property: Property, _value: f32) {
        self.log.borrow_mut().push("apply".to_string());
    }
}

fn mounts(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
    log.borrow()
        .iter()
        .filter(|e| e.starts_with("mount:"))
        .map(|e| e["mount:".len()..].to_string())
        .collect()
}

#[test]
fn displayed_product_is_index_mod_length() {
    let recorder = Recorder::default();
    let log = recorder.log.clone();
    let mut show = Showcase::new()
        .with_catalog(Catalog::new(vec![product("A"), product("B")]))
        .with_presenter(recorder)
        .with_bounds(Bounds::new(200.0, 100.0))
        .start()
        .unwrap();
    show.set_fixed_delta(Some(0.1));

    // Three full cycles: A, B, then wrapping back to A.
    let frames_per_cycle = ((CYCLE_LENGTH + CYCLE_BUFFER) / 0.1).ceil() as usize + 2;
    for _ in 0..frames_per_cycle * 3 {
        show.step();
    }

    let mounted = mounts(&log);
    assert!(mounted.len() >= 3);
    assert_eq!(&mounted[..3], &["A", "B", "A"]);
    assert!(show.sequencer().completed_cycles() >= 2);
}

#[test]
fn empty_catalog_never_touches_presenter() {
    let recorder = Recorder::default();
    let log = recorder.log.clone();
    let mut show = Showcase::new()
        .with_catalog(Catalog::empty())
        .with_presenter(recorder)
        .start()
        .unwrap();
    show.set_fixed_delta(Some(0.1));

    for _ in 0..500 {
        show.step();
    }
    assert!(log.borrow().is_empty());
    assert_eq!(show.sequencer().state(), SequencerState::Idle);
}

#[test]
fn malformed_catalog_falls_back_to_idle() {
    let dir = std::env::temp_dir().join("vitrine-bad-catalog-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("products.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let recorder = Recorder::default();
    let log = recorder.log.clone();
    let mut show = Showcase::new()
        .with_catalog_path(&path)
        .with_presenter(recorder)
        .start()
        .unwrap();
    show.set_fixed_delta(Some(0.1));
    for _ in 0..50 {
        show.step();
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn reveal_and_exit_offsets_are_ordered() {
    let tl = showcase_timeline(10);
    let start = |target: Target, property: Property| -> f32 {
        tl.tracks()
            .iter()
            .find(|t| t.target == target && t.property == property)
            .map(|t| t.start)
            .unwrap()
    };
    let last_start = |target: Target, property: Property| -> f32 {
        tl.tracks()
            .iter()
            .filter(|t| t.target == target && t.property == property)
            .map(|t| t.start)
            .fold(f32::MIN, f32::max)
    };

    // Reveal: background <= spotlight <= card <= image <= text <= underline
    // <= details.
    let offsets = [
        start(Target::Background, Property::Scale),
        start(Target::Spotlight, Property::Opacity),
        start(Target::Card, Property::Opacity),
        start(Target::Image, Property::Brightness),
        start(Target::NameGlyph(0), Property::Opacity),
        start(Target::Underline, Property::Width),
        start(Target::Details, Property::Opacity),
    ];
    for pair in offsets.windows(2) {
        assert!(pair[0] <= pair[1], "reveal offsets out of order: {offsets:?}");
    }

    // Exit: text fade precedes card acceleration precedes spotlight fade.
    let text_out = start(Target::NameText, Property::Opacity);
    let card_out = last_start(Target::Card, Property::Depth);
    let spot_out = last_start(Target::Spotlight, Property::Opacity);
    assert_eq!(text_out, EXIT_MARK);
    assert!(text_out < card_out);
    assert!(card_out < spot_out);
}

#[test]
fn full_cycle_duration_is_fixed() {
    // Independent of catalog content and fog configuration.
    for (glyphs, _fog) in [(1usize, 5usize), (12, 90)] {
        let tl = showcase_timeline(glyphs);
        assert!((tl.duration() - CYCLE_LENGTH).abs() < 0.05);
    }
}

#[test]
fn resize_mid_run_keeps_fog_state() {
    let mut show = Showcase::new()
        .with_catalog(Catalog::new(vec![product("A")]))
        .with_presenter(NullPresenter)
        .with_bounds(Bounds::new(400.0, 300.0))
        .start()
        .unwrap();
    show.set_fixed_delta(Some(1.0 / 60.0));

    for _ in 0..30 {
        show.step();
    }
    let before: Vec<(f32, f32)> = show
        .fog()
        .particles()
        .iter()
        .map(|p| (p.position.x, p.position.y))
        .collect();

    show.resize(Bounds::new(1920.0, 1080.0));

    // Bounds changed, in-flight particles did not.
    let after: Vec<(f32, f32)> = show
        .fog()
        .particles()
        .iter()
        .map(|p| (p.position.x, p.position.y))
        .collect();
    assert_eq!(before, after);
    assert_eq!(show.fog().bounds(), Bounds::new(1920.0, 1080.0));

    // And the loop keeps going against the new bounds.
    for _ in 0..30 {
        show.step();
    }
    assert_eq!(show.fog().particles().len(), 30);
}

#[test]
fn stop_handle_halts_the_sequencer() {
    let recorder = Recorder::default();
    let log = recorder.log.clone();
    let mut show = Showcase::new()
        .with_catalog(Catalog::new(vec![product("A")]))
        .with_presenter(recorder)
        .start()
        .unwrap();
    show.set_fixed_delta(Some(0.1));
    show.step();
    show.stop();

    let calls = log.borrow().len();
    for _ in 0..100 {
        show.step();
    }
    // Fog keeps ticking (it has no stop condition of its own), but the
    // sequencer makes no further presenter calls.
    assert_eq!(log.borrow().len(), calls);
    assert_eq!(show.sequencer().state(), SequencerState::Stopped);
}
