//! LSTM cell with sizes chosen at load time.

use super::kernel::{self, CellParams};
use super::state::LstmState;
use super::weights;
use super::GATES;
use crate::compat::Vec;
use crate::{Error, Float, Layer, LayerShape, LstmConfig, Result};

/// LSTM cell whose sizes are runtime values.
///
/// All buffers are allocated in [`new()`](Self::new) and never resized, so
/// `forward()` and `reset()` are safe to call from the audio thread. Parameters
/// start at zero; load them with the `set_*_vals` methods before use.
///
/// Cloning copies parameters and the current recurrent state.
#[derive(Debug, Clone)]
pub struct LstmLayer<T> {
    shape: LayerShape,

    kernel: Vec<T>,
    recurrent: Vec<T>,
    bias: Vec<T>,

    gates: Vec<T>,
    state: LstmState<T>,
}

impl<T: Float> LstmLayer<T> {
    pub fn new(in_size: usize, hidden_size: usize) -> Result<Self> {
        let shape = LayerShape::new(in_size, hidden_size)?;
        let rows = GATES * hidden_size;

        tracing::debug!(in_size, hidden_size, "created LSTM layer");

        Ok(Self {
            shape,
            kernel: vec![T::ZERO; rows * in_size],
            recurrent: vec![T::ZERO; rows * hidden_size],
            bias: vec![T::ZERO; rows],
            gates: vec![T::ZERO; rows],
            state: LstmState::zeros(hidden_size),
        })
    }

    pub fn from_config(config: &LstmConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.in_size, config.hidden_size)
    }

    #[inline]
    pub fn hidden_size(&self) -> usize {
        self.shape.out_size
    }

    /// Kernel weights: `4 * hidden_size` rows of `in_size` values, in
    /// [`Gate`](super::Gate) order.
    pub fn set_w_vals<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let (n, cols) = (self.hidden_size(), self.shape.in_size);
        let result = weights::load_rows("kernel weights", rows, GATES * n, cols, &mut self.kernel);
        log_load("kernel weights", &result);
        result
    }

    /// Recurrent weights: `4 * hidden_size` rows of `hidden_size` values.
    pub fn set_u_vals<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let n = self.hidden_size();
        let result = weights::load_rows("recurrent weights", rows, GATES * n, n, &mut self.recurrent);
        log_load("recurrent weights", &result);
        result
    }

    /// Biases: `4 * hidden_size` values.
    pub fn set_b_vals(&mut self, values: &[T]) -> Result<()> {
        let result = weights::load_values("biases", values, &mut self.bias);
        log_load("biases", &result);
        result
    }

    /// Kernel weights in export layout: `in_size` rows of `4 * hidden_size` values.
    pub fn set_w_vals_transposed<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let (n, cols) = (self.hidden_size(), self.shape.in_size);
        let result = weights::load_rows_transposed(
            "kernel weights",
            rows,
            GATES * n,
            cols,
            &mut self.kernel,
        );
        log_load("kernel weights", &result);
        result
    }

    /// Recurrent weights in export layout: `hidden_size` rows of `4 * hidden_size` values.
    pub fn set_u_vals_transposed<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let n = self.hidden_size();
        let result = weights::load_rows_transposed(
            "recurrent weights",
            rows,
            GATES * n,
            n,
            &mut self.recurrent,
        );
        log_load("recurrent weights", &result);
        result
    }

    /// Hidden state `h`, which is also the last output.
    #[inline]
    pub fn hidden(&self) -> &[T] {
        &self.state.hidden
    }

    /// Cell state `c`.
    #[inline]
    pub fn cell(&self) -> &[T] {
        &self.state.cell
    }

    #[inline]
    pub fn state(&self) -> &LstmState<T> {
        &self.state
    }

    /// Copy of the recurrent state. Allocates; not for the audio thread.
    pub fn snapshot(&self) -> LstmState<T> {
        self.state.clone()
    }

    /// Overwrite the recurrent state with `state`. Does not allocate.
    pub fn restore(&mut self, state: &LstmState<T>) -> Result<()> {
        let n = self.hidden_size();
        for (what, values) in [("hidden state", &state.hidden), ("cell state", &state.cell)] {
            if values.len() != n {
                return Err(Error::ValueCount {
                    what,
                    expected: n,
                    actual: values.len(),
                });
            }
        }
        self.state.hidden.copy_from_slice(&state.hidden);
        self.state.cell.copy_from_slice(&state.cell);
        Ok(())
    }
}

impl<T: Float> Layer<T> for LstmLayer<T> {
    fn in_size(&self) -> usize {
        self.shape.in_size
    }

    fn out_size(&self) -> usize {
        self.shape.out_size
    }

    #[inline]
    fn forward(&mut self, input: &[T], output: &mut [T]) {
        self.shape.debug_check(input, output);

        let params = CellParams {
            kernel: &self.kernel,
            recurrent: &self.recurrent,
            bias: &self.bias,
        };
        kernel::step(
            &params,
            input,
            &mut self.state.hidden,
            &mut self.state.cell,
            &mut self.gates,
        );
        output.copy_from_slice(&self.state.hidden);
    }

    #[inline]
    fn reset(&mut self) {
        self.state.clear();
    }

    fn name(&self) -> &'static str {
        "lstm"
    }
}

pub(super) fn log_load(what: &'static str, result: &Result<()>) {
    match result {
        Ok(()) => tracing::debug!(what, "loaded LSTM parameters"),
        Err(e) => tracing::warn!(what, error = %e, "rejected LSTM parameters"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_rows(rows: usize, cols: usize, value: f32) -> Vec<Vec<f32>> {
        vec![vec![value; cols]; rows]
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert_eq!(
            LstmLayer::<f32>::new(0, 4).unwrap_err(),
            Error::InvalidSize { what: "in_size" }
        );
        assert!(LstmLayer::<f32>::new(4, 0).is_err());
    }

    #[test]
    fn test_zero_params_give_zero_output() {
        let mut lstm = LstmLayer::<f32>::new(3, 4).unwrap();
        let mut out = [1.0f32; 4];
        for step in 0..10 {
            let x = step as f32 * 0.3 - 1.0;
            lstm.forward(&[x, -x, 2.0 * x], &mut out);
            assert_eq!(out, [0.0; 4]);
            assert!(lstm.state().is_zero());
        }
    }

    #[test]
    fn test_reset_matches_fresh() {
        let mut lstm = LstmLayer::<f32>::new(2, 3).unwrap();
        lstm.set_w_vals(&constant_rows(12, 2, 0.4)).unwrap();
        lstm.set_u_vals(&constant_rows(12, 3, -0.2)).unwrap();
        lstm.set_b_vals(&[0.1; 12]).unwrap();

        let mut out = [0.0f32; 3];
        lstm.forward(&[1.0, -0.5], &mut out);
        assert!(!lstm.state().is_zero());

        lstm.reset();
        let once = lstm.snapshot();
        lstm.reset();
        assert_eq!(lstm.snapshot(), once);
        assert_eq!(once, LstmState::zeros(3));
    }

    #[test]
    fn test_rejected_load_keeps_previous_weights() {
        let mut lstm = LstmLayer::<f32>::new(2, 2).unwrap();
        lstm.set_w_vals(&constant_rows(8, 2, 0.5)).unwrap();
        let before = lstm.kernel.clone();

        let mut bad = constant_rows(8, 2, 9.0);
        bad[7].push(1.0);
        assert!(matches!(
            lstm.set_w_vals(&bad),
            Err(Error::RowLength { row: 7, .. })
        ));
        assert!(lstm.set_w_vals(&constant_rows(7, 2, 9.0)).is_err());
        assert!(lstm.set_u_vals(&constant_rows(8, 3, 9.0)).is_err());
        assert!(lstm.set_b_vals(&[9.0; 4]).is_err());
        assert_eq!(lstm.kernel, before);
    }

    #[test]
    fn test_transposed_load_matches_row_load() {
        let (input, hidden) = (3, 2);
        let rows: Vec<Vec<f32>> = (0..GATES * hidden)
            .map(|r| (0..input).map(|c| (r * input + c) as f32 * 0.01).collect())
            .collect();
        let columns: Vec<Vec<f32>> = (0..input)
            .map(|c| rows.iter().map(|row| row[c]).collect())
            .collect();

        let mut a = LstmLayer::<f32>::new(input, hidden).unwrap();
        let mut b = LstmLayer::<f32>::new(input, hidden).unwrap();
        a.set_w_vals(&rows).unwrap();
        b.set_w_vals_transposed(&columns).unwrap();
        assert_eq!(a.kernel, b.kernel);
    }

    #[test]
    fn test_restore_rejects_wrong_length() {
        let mut lstm = LstmLayer::<f64>::new(1, 3).unwrap();
        let err = lstm.restore(&LstmState::zeros(2)).unwrap_err();
        assert_eq!(
            err,
            Error::ValueCount {
                what: "hidden state",
                expected: 3,
                actual: 2
            }
        );

        let mut short_cell = LstmState::zeros(3);
        short_cell.hidden.fill(0.5);
        short_cell.cell.pop();
        assert_eq!(
            lstm.restore(&short_cell),
            Err(Error::ValueCount {
                what: "cell state",
                expected: 3,
                actual: 2
            })
        );
        assert!(lstm.state().is_zero());
    }

    #[test]
    fn test_name() {
        let lstm = LstmLayer::<f32>::new(1, 1).unwrap();
        assert_eq!(lstm.name(), "lstm");
        assert!(!lstm.is_activation());
    }
}
