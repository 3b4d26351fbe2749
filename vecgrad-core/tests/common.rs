use vecgrad_core::{Graph, GraphConfig};

// Shared across several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_graph<T: vecgrad_core::Scalar>(seed: u64) -> Graph<T> {
    Graph::with_config(GraphConfig::default().with_seed(seed))
}
