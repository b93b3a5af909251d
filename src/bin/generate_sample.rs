//! Generate a small demo CSV for trying out the plotter.
//!
//! Columns: `time` (epoch seconds), `temperature`, `humidity`. A few cells
//! are left unparseable or empty so the cleaning step has something to drop.
//!
//! Usage: `cargo run --bin generate_sample [output.csv]`

use std::fs::File;
use std::io::{BufWriter, Write};

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Uniform value in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.csv".to_string());
    let mut out = BufWriter::new(File::create(&path)?);

    writeln!(out, "time,temperature,humidity")?;

    let mut rng = SimpleRng::new(42);
    let start = 1_700_000_000i64; // 2023-11-14T22:13:20Z
    for i in 0..500i64 {
        let t = start + i * 60;
        let temperature = 18.0 + 4.0 * ((i as f64) / 80.0).sin() + rng.unit();
        let humidity = 55.0 + 10.0 * ((i as f64) / 120.0).cos() + 2.0 * rng.unit();

        // cells the cleaning step will have to drop
        if i % 97 == 0 {
            writeln!(out, "{t},n/a,{humidity:.2}")?;
        } else if i % 131 == 0 {
            writeln!(out, "{t},{temperature:.2},")?;
        } else {
            writeln!(out, "{t},{temperature:.2},{humidity:.2}")?;
        }
    }

    out.flush()?;
    println!("wrote {path}");
    Ok(())
}
