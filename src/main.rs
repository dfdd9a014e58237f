//! Headless demo: loads `products.json` from the working directory and runs
//! the showcase with a presenter that narrates what it would display.

use vitrine::prelude::*;

/// Logs every mount and a few landmark property values.
#[derive(Default)]
struct TracePresenter;

impl Presenter for TracePresenter {
    fn mount(&mut self, product: &Product) -> Mounted {
        tracing::info!(
            name = %product.name,
            price = %product.price,
            meta = %product.meta,
            "mounting product"
        );
        Mounted {
            glyph_count: product.name.chars().count(),
        }
    }

    fn apply(&mut self, target: Target, property: Property, value: f32) {
        if matches!((target, property), (Target::Card, Property::Opacity)) {
            tracing::trace!(?target, ?property, value, "apply");
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut show = Showcase::new()
        .with_catalog_path("products.json")
        .with_presenter(TracePresenter)
        .with_bounds(Bounds::new(1280.0, 720.0))
        .start()
        .expect("presenter is set above");

    show.run();
}
