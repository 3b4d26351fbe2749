//! Assertion helpers shared by unit and integration tests.

use crate::graph::{Graph, NodeId};
use crate::scalar::Scalar;

/// Panics unless `actual` matches `expected` element by element within
/// `tolerance` (absolute).
pub fn check_slice_near<T: Scalar>(actual: &[T], expected: &[T], tolerance: T, what: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{} length mismatch: actual={:?}, expected={:?}",
        what,
        actual,
        expected
    );
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}

/// Checks the forward values of `id`.
pub fn check_data_near<T: Scalar>(graph: &Graph<T>, id: NodeId, expected: &[T], tolerance: T) {
    let node = graph
        .node(id)
        .unwrap_or_else(|e| panic!("check_data_near: {}", e));
    check_slice_near(node.data(), expected, tolerance, "Data");
}

/// Checks the accumulated gradient of `id`.
pub fn check_grad_near<T: Scalar>(graph: &Graph<T>, id: NodeId, expected: &[T], tolerance: T) {
    let node = graph
        .node(id)
        .unwrap_or_else(|e| panic!("check_grad_near: {}", e));
    check_slice_near(node.grad(), expected, tolerance, "Grad");
}
