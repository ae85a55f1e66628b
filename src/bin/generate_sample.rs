use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Converging monitor history: starts at `start`, relaxes towards `target`.
fn generate_history(
    iterations: usize,
    start: f64,
    target: f64,
    rate: f64,
    noise_level: f64,
    rng: &mut SimpleRng,
) -> Vec<f64> {
    (0..iterations)
        .map(|i| {
            let decay = (-(i as f64) / rate).exp();
            target + (start - target) * decay + rng.gauss(0.0, noise_level * decay)
        })
        .collect()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn write_monitor(path: &Path, point: &str, temperatures: &[f64]) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "\"Convergence history of Static Temperature on {point}\"")?;
    writeln!(out, "\"Iteration\" \"Static Temperature (K)\"")?;
    for (i, t) in temperatures.iter().enumerate() {
        writeln!(out, "{}\t{t:.6}", i + 1)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_dir = Path::new("ExampleData");
    fs::create_dir_all(output_dir).context("creating ExampleData/")?;

    let points = 12;
    let iterations = 400;

    // Every monitor point starts at ambient and settles somewhere between 320 K and 420 K.
    for p in 1..=points {
        let target = 320.0 + 100.0 * (p as f64 - 1.0) / (points as f64 - 1.0);
        let rate = 40.0 + 5.0 * p as f64;
        let history = generate_history(iterations, 293.15, target, rate, 4.0, &mut rng);

        let point = format!("point-{p}");
        write_monitor(&output_dir.join(format!("{point}.out")), &point, &history)?;
    }

    println!(
        "Wrote {points} monitor files ({iterations} iterations each) to {}",
        output_dir.display()
    );
    Ok(())
}
