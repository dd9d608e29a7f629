//! Real-time neural inference kernel: layers that run inside an audio callback.
//!
//! # Primary API
//!
//! - [`Layer`]: shared contract for every stage (`in_size`, `out_size`, `forward`)
//! - [`TanhActivation`] / [`ReLuActivation`] / [`SigmoidActivation`]: elementwise layers
//! - [`Activation`]: elementwise layer over any `Fn(T) -> T`
//! - [`LstmLayer`]: LSTM cell with sizes chosen at load time
//! - [`LstmLayerT`]: LSTM cell with const-generic sizes, no heap at all
//!
//! # Real-time contract
//!
//! `forward()` and `reset()` never allocate and never fail. Anything that can
//! fail, such as construction or weight loading, happens off the audio thread
//! and returns [`Result`]. Input/output lengths are the caller's
//! responsibility and are only checked by `debug_assert!`.
//!
//! # Example
//!
//! ```
//! use rtneural_core::{Layer, LstmLayer};
//!
//! let mut lstm = LstmLayer::<f32>::new(1, 8)?;
//! lstm.set_w_vals(&vec![vec![0.1f32; 1]; 32])?;
//! lstm.set_u_vals(&vec![vec![0.0f32; 8]; 32])?;
//! lstm.set_b_vals(&[0.0f32; 32])?;
//!
//! // In the audio callback
//! let mut out = [0.0f32; 8];
//! lstm.forward(&[0.5], &mut out);
//! # Ok::<(), rtneural_core::Error>(())
//! ```

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
extern crate alloc;

pub mod compat;

pub mod error;
pub use error::{Error, Result};

mod float;
pub use float::Float;

pub mod math;

mod layer;
pub use layer::{Layer, LayerShape};

mod activation;
pub use activation::{
    Activation, ReLuActivation, ReLuActivationT, SigmoidActivation, SigmoidActivationT,
    TanhActivation, TanhActivationT,
};

pub mod config;
pub use config::{ActivationConfig, ActivationKind, LstmConfig};

mod lstm;
pub use lstm::{Gate, LstmLayer, LstmLayerT, LstmState, LstmStateT};
