// Trains a small MLP on a four-sample toy problem with plain gradient descent.
//
// Run with `RUST_LOG=debug` to see network construction and backward-pass summaries.

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valuegrad_core::{Value, ValueGradError};
use valuegrad_nn::{Mlp, MlpConfig, Module};

const EPOCHS: usize = 100;
const LEARNING_RATE: f64 = 0.05;

fn main() -> Result<(), ValueGradError> {
    let _ = env_logger::builder().try_init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = Mlp::with_config(3, &[4, 4, 1], &MlpConfig::default(), &mut rng);
    println!("MLP with {} parameters", mlp.num_parameters());

    for epoch in 0..EPOCHS {
        // Forward
        let mut loss = Value::new(0.0);
        for (x, &y) in xs.iter().zip(ys.iter()) {
            let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
            let pred = mlp.forward(&inputs)?;
            let diff = &pred[0] - y;
            loss = &loss + &(&diff * &diff);
        }

        // Backward
        mlp.zero_grad();
        loss.backward();

        // Update
        for p in mlp.parameters() {
            p.set_data(p.data() - LEARNING_RATE * p.grad())?;
        }

        if epoch % 10 == 0 || epoch == EPOCHS - 1 {
            info!("epoch {} loss {:.6}", epoch, loss.data());
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    for (x, &y) in xs.iter().zip(ys.iter()) {
        let inputs: Vec<Value> = x.iter().map(|&v| Value::new(v)).collect();
        let pred = mlp.forward(&inputs)?;
        println!("target {:>5.2}  prediction {:>8.4}", y, pred[0].data());
    }
    Ok(())
}
