//! Trains a small MLP on a six-sample toy problem.
//!
//! Run with `RUST_LOG=info cargo run -p vecgrad-optim --example train_mlp`.

use log::info;
use vecgrad_core::nn::{mse_loss, Mlp, Module};
use vecgrad_core::{Graph, GraphConfig, VecGradError};
use vecgrad_optim::{Optimizer, Sgd, SgdConfig};

const STEPS: usize = 1000;

fn main() -> Result<(), VecGradError> {
    env_logger::init();

    let mut graph: Graph<f32> = Graph::with_config(GraphConfig::default().with_seed(0));
    let mlp = Mlp::new(&mut graph, 2, &[20, 20, 10, 1])?;

    let samples: [[f32; 2]; 6] = [
        [0.5, 0.1],
        [0.7, 1.0],
        [0.1, -0.2],
        [-0.1, 1.0],
        [-0.5, -0.1],
        [-0.3, 0.2],
    ];
    let xs: Vec<_> = samples.iter().map(|x| graph.leaf_from_slice(x)).collect();
    let target = graph.leaf(vec![1.0, 0.0, 1.0, 0.0, 1.0, 1.0]);

    let mut optim = Sgd::new(mlp.parameters(), SgdConfig::default())?;
    info!(
        "training {} parameter nodes for {} steps",
        mlp.parameters().len(),
        STEPS
    );

    let checkpoint = graph.checkpoint();
    for step in 0..STEPS {
        let outputs = xs
            .iter()
            .map(|&x| mlp.forward(&mut graph, x))
            .collect::<Result<Vec<_>, _>>()?;
        let prediction = graph.concat(&outputs)?;
        let loss = mse_loss(&mut graph, prediction, target)?;

        graph.backward(loss)?;
        optim.step(&mut graph)?;
        optim.zero_grad(&mut graph)?;

        if step % 100 == 0 || step + 1 == STEPS {
            info!(
                "step {:4}: loss {:.6}, predictions {:?}",
                step,
                graph.get(loss, 0)?,
                graph.data(prediction)?
            );
        }
        graph.truncate(checkpoint);
    }

    Ok(())
}
