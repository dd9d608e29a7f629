//! Test helpers and fixtures for rtneural integration tests
//!
//! ## Tolerance Levels
//!
//! Use the appropriate tolerance from [`tolerances`] module:
//! - `FLOAT_EPSILON` (1e-6): Same computation, different instance or storage
//! - `REFERENCE_EPSILON` (1e-5): Against a hand-written reference implementation
//! - `SILENCE_THRESHOLD` (1e-4): Silence detection

#![allow(dead_code)]

pub mod tolerances;

use rtneural::{LstmLayer, LstmLayerT};

/// Deterministic LSTM parameters in row layout (`4 * hidden` rows).
#[derive(Debug, Clone)]
pub struct LstmParams {
    pub in_size: usize,
    pub hidden_size: usize,
    pub w: Vec<Vec<f32>>,
    pub u: Vec<Vec<f32>>,
    pub b: Vec<f32>,
}

impl LstmParams {
    /// Parameters in `[-scale, scale]`, reproducible from `seed`.
    pub fn random(in_size: usize, hidden_size: usize, scale: f32, seed: u64) -> Self {
        let rows = 4 * hidden_size;
        let mut rng = Lcg(seed);
        let mut matrix = |cols: usize| -> Vec<Vec<f32>> {
            (0..rows)
                .map(|_| (0..cols).map(|_| rng.next() * scale).collect())
                .collect()
        };
        let w = matrix(in_size);
        let u = matrix(hidden_size);
        let b = (0..rows).map(|_| rng.next() * scale).collect();
        Self {
            in_size,
            hidden_size,
            w,
            u,
            b,
        }
    }

    pub fn zeros(in_size: usize, hidden_size: usize) -> Self {
        let rows = 4 * hidden_size;
        Self {
            in_size,
            hidden_size,
            w: vec![vec![0.0; in_size]; rows],
            u: vec![vec![0.0; hidden_size]; rows],
            b: vec![0.0; rows],
        }
    }

    pub fn runtime(&self) -> LstmLayer<f32> {
        let mut lstm = LstmLayer::new(self.in_size, self.hidden_size)
            .expect("Failed to create LSTM layer");
        lstm.set_w_vals(&self.w).expect("Failed to load kernel weights");
        lstm.set_u_vals(&self.u).expect("Failed to load recurrent weights");
        lstm.set_b_vals(&self.b).expect("Failed to load biases");
        lstm
    }

    pub fn fixed<const IN: usize, const OUT: usize>(&self) -> LstmLayerT<f32, IN, OUT> {
        assert_eq!((self.in_size, self.hidden_size), (IN, OUT));
        let mut lstm = LstmLayerT::new();
        lstm.set_w_vals(&self.w).expect("Failed to load kernel weights");
        lstm.set_u_vals(&self.u).expect("Failed to load recurrent weights");
        lstm.set_b_vals(&self.b).expect("Failed to load biases");
        lstm
    }
}

/// Simple LCG for reproducible "random" values in -1..1.
pub struct Lcg(pub u64);

impl Lcg {
    pub fn next(&mut self) -> f32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) as f32 / (1u64 << 31) as f32) * 2.0 - 1.0
    }
}

/// Generate a test signal: sine wave at given frequency for specified samples.
pub fn generate_sine(frequency: f64, sample_rate: f64, num_samples: usize) -> Vec<f32> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * std::f64::consts::PI * frequency * t).sin() as f32
        })
        .collect()
}

/// Generate white noise (values in -1..1).
pub fn generate_noise(num_samples: usize, seed: u64) -> Vec<f32> {
    let mut rng = Lcg(seed);
    (0..num_samples).map(|_| rng.next()).collect()
}

/// Relative comparison with an absolute floor near zero.
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= epsilon * scale
}

/// Assert two output sequences match element by element, with location on failure.
pub fn assert_outputs_equal(a: &[f32], b: &[f32], epsilon: f32, context: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", context);
    if let Some((i, (x, y))) = a
        .iter()
        .zip(b)
        .enumerate()
        .find(|(_, (x, y))| !approx_eq(**x, **y, epsilon))
    {
        panic!(
            "{}: outputs differ at index {}: {} vs {} (diff={})",
            context,
            i,
            x,
            y,
            (x - y).abs()
        );
    }
}

/// Calculate peak amplitude of a signal.
pub fn peak(samples: &[f32]) -> f32 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f32, |a, b| a.max(b))
}

/// Route tracing output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}
