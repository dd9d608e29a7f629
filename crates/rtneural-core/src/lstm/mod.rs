//! LSTM recurrent cell in two storage strategies.
//!
//! [`LstmLayer`] sizes its buffers from runtime values once, in `new()`.
//! [`LstmLayerT`] takes sizes as const generics and keeps every buffer inline.
//! Both drive the same step kernel, so equal parameters and inputs give
//! bit-identical outputs.
//!
//! # Parameter layout
//!
//! Gate parameters are stacked in [`Gate`] order (input, forget, candidate,
//! output), which is the order Keras/TensorFlow exports use. For `N` hidden
//! units the loaders expect:
//!
//! | loader                   | rows      | values per row |
//! |--------------------------|-----------|----------------|
//! | `set_w_vals`             | `4 * N`   | `in_size`      |
//! | `set_u_vals`             | `4 * N`   | `N`            |
//! | `set_b_vals`             | -         | `4 * N`        |
//! | `set_w_vals_transposed`  | `in_size` | `4 * N`        |
//! | `set_u_vals_transposed`  | `N`       | `4 * N`        |
//!
//! Row `g * N + k` holds unit `k` of gate `g`.

mod fixed;
mod kernel;
mod layer;
mod state;
mod weights;

pub use fixed::LstmLayerT;
pub use layer::LstmLayer;
pub use state::{LstmState, LstmStateT};

/// Number of gates in an LSTM cell.
pub(crate) const GATES: usize = 4;

/// LSTM gate, in parameter stacking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    Input = 0,
    Forget = 1,
    Candidate = 2,
    Output = 3,
}

impl Gate {
    pub const ALL: [Gate; GATES] = [Gate::Input, Gate::Forget, Gate::Candidate, Gate::Output];

    /// Position of this gate's block in stacked parameters.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// First stacked row belonging to this gate, for `hidden_size` units.
    #[inline]
    pub const fn row_offset(self, hidden_size: usize) -> usize {
        self.index() * hidden_size
    }
}
