//! LSTM cell with compile-time sizes.

use super::kernel::{self, CellParams};
use super::layer::log_load;
use super::state::LstmStateT;
use super::weights;
use super::GATES;
use crate::{Float, Layer, Result};

/// LSTM cell with `IN` inputs and `OUT` hidden units fixed at compile time.
///
/// Every buffer lives inline in the struct: constructing, resetting and running
/// the cell never touches the heap. The hidden state doubles as the output and
/// is read through [`outs()`](Self::outs) instead of being copied out.
///
/// The struct holds `4 * OUT * (IN + OUT + 2) + 2 * OUT` scalars; box it if that
/// is too large for the stack it is built on.
#[derive(Debug, Clone)]
pub struct LstmLayerT<T: Float, const IN: usize, const OUT: usize> {
    kernel: [[[T; IN]; OUT]; GATES],
    recurrent: [[[T; OUT]; OUT]; GATES],
    bias: [[T; OUT]; GATES],

    gates: [[T; OUT]; GATES],
    state: LstmStateT<T, OUT>,
}

impl<T: Float, const IN: usize, const OUT: usize> LstmLayerT<T, IN, OUT> {
    pub const IN_SIZE: usize = IN;
    pub const OUT_SIZE: usize = OUT;

    const NON_EMPTY: () = assert!(IN > 0 && OUT > 0, "LSTM sizes must be positive");

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        Self {
            kernel: [[[T::ZERO; IN]; OUT]; GATES],
            recurrent: [[[T::ZERO; OUT]; OUT]; GATES],
            bias: [[T::ZERO; OUT]; GATES],
            gates: [[T::ZERO; OUT]; GATES],
            state: LstmStateT::zeros(),
        }
    }

    /// Advance one step. The new hidden state is available from [`outs()`](Self::outs).
    #[inline]
    pub fn forward(&mut self, ins: &[T; IN]) {
        self.step(ins);
    }

    /// Hidden state `h`, the output of the most recent `forward()`.
    #[inline]
    pub fn outs(&self) -> &[T; OUT] {
        &self.state.hidden
    }

    /// Cell state `c`.
    #[inline]
    pub fn cell(&self) -> &[T; OUT] {
        &self.state.cell
    }

    #[inline]
    pub fn reset(&mut self) {
        self.state.clear();
    }

    #[inline]
    pub fn snapshot(&self) -> LstmStateT<T, OUT> {
        self.state
    }

    #[inline]
    pub fn restore(&mut self, state: &LstmStateT<T, OUT>) {
        self.state = *state;
    }

    /// Kernel weights: `4 * OUT` rows of `IN` values, in [`Gate`](super::Gate) order.
    pub fn set_w_vals<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let dest = self.kernel.as_flattened_mut().as_flattened_mut();
        let result = weights::load_rows("kernel weights", rows, GATES * OUT, IN, dest);
        log_load("kernel weights", &result);
        result
    }

    /// Recurrent weights: `4 * OUT` rows of `OUT` values.
    pub fn set_u_vals<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let dest = self.recurrent.as_flattened_mut().as_flattened_mut();
        let result = weights::load_rows("recurrent weights", rows, GATES * OUT, OUT, dest);
        log_load("recurrent weights", &result);
        result
    }

    /// Biases: `4 * OUT` values.
    pub fn set_b_vals(&mut self, values: &[T]) -> Result<()> {
        let result = weights::load_values("biases", values, self.bias.as_flattened_mut());
        log_load("biases", &result);
        result
    }

    /// Kernel weights in export layout: `IN` rows of `4 * OUT` values.
    pub fn set_w_vals_transposed<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let dest = self.kernel.as_flattened_mut().as_flattened_mut();
        let result = weights::load_rows_transposed("kernel weights", rows, GATES * OUT, IN, dest);
        log_load("kernel weights", &result);
        result
    }

    /// Recurrent weights in export layout: `OUT` rows of `4 * OUT` values.
    pub fn set_u_vals_transposed<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<()> {
        let dest = self.recurrent.as_flattened_mut().as_flattened_mut();
        let result =
            weights::load_rows_transposed("recurrent weights", rows, GATES * OUT, OUT, dest);
        log_load("recurrent weights", &result);
        result
    }

    #[inline]
    fn step(&mut self, x: &[T]) {
        let params = CellParams {
            kernel: self.kernel.as_flattened().as_flattened(),
            recurrent: self.recurrent.as_flattened().as_flattened(),
            bias: self.bias.as_flattened(),
        };
        kernel::step(
            &params,
            x,
            &mut self.state.hidden,
            &mut self.state.cell,
            self.gates.as_flattened_mut(),
        );
    }
}

impl<T: Float, const IN: usize, const OUT: usize> Default for LstmLayerT<T, IN, OUT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float, const IN: usize, const OUT: usize> Layer<T> for LstmLayerT<T, IN, OUT> {
    fn in_size(&self) -> usize {
        IN
    }

    fn out_size(&self) -> usize {
        OUT
    }

    #[inline]
    fn forward(&mut self, input: &[T], output: &mut [T]) {
        debug_assert_eq!(input.len(), IN, "input length != in_size");
        debug_assert_eq!(output.len(), OUT, "output length != out_size");
        self.step(&input[..IN]);
        output[..OUT].copy_from_slice(&self.state.hidden);
    }

    #[inline]
    fn reset(&mut self) {
        LstmLayerT::reset(self);
    }

    fn name(&self) -> &'static str {
        "lstm"
    }
}
