use vecgrad_core::{Graph, NodeId};

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The six two-feature samples and their binary targets.
#[allow(dead_code)]
pub fn toy_dataset() -> (Vec<[f32; 2]>, Vec<f32>) {
    let inputs = vec![
        [0.5, 0.1],
        [0.7, 1.0],
        [0.1, -0.2],
        [-0.1, 1.0],
        [-0.5, -0.1],
        [-0.3, 0.2],
    ];
    let targets = vec![1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
    (inputs, targets)
}

/// Leaves for every sample plus one leaf holding all targets.
#[allow(dead_code)]
pub fn dataset_leaves(graph: &mut Graph<f32>) -> (Vec<NodeId>, NodeId) {
    let (inputs, targets) = toy_dataset();
    let xs = inputs.iter().map(|x| graph.leaf_from_slice(x)).collect();
    let target = graph.leaf(targets);
    (xs, target)
}
