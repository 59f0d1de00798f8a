//! Tracing subscriber setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber, once.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs pay no logging
/// cost. `MAGPIE_LOG_TREE=1` switches from flat lines to an indented tree
/// of spans, which reads better when following a single run.
///
/// ```text
/// RUST_LOG=mag_eval=trace magpie run main.mg
/// RUST_LOG=debug MAGPIE_LOG_TREE=1 magpie run a.mg b.mg
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        if std::env::var_os("MAGPIE_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
