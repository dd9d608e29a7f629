//! # rtneural - Real-time Neural Inference
//!
//! Neural network layers that run inside an audio callback with no allocation
//! and bounded work per call.
//!
//! ## Architecture
//!
//! rtneural is an umbrella crate over:
//! - **rtneural-core** - `Layer` trait, activations, LSTM cells (`no_std` + `alloc`)
//!
//! Model-file parsing and network composition live outside this crate: a loader
//! builds layers from [`LstmConfig`] / [`ActivationConfig`] and feeds weights
//! through the `set_*_vals` methods.
//!
//! ## Quick Start
//!
//! ```
//! use rtneural::prelude::*;
//!
//! // Off the audio thread: construct and load
//! let mut lstm = LstmLayerT::<f32, 1, 8>::new();
//! lstm.set_w_vals(&[[0.2f32]; 32])?;
//! lstm.set_u_vals(&[[0.0f32; 8]; 32])?;
//! lstm.set_b_vals(&[0.0f32; 32])?;
//!
//! // In the audio callback
//! lstm.forward(&[0.5]);
//! let h = lstm.outs();
//! # assert_eq!(h.len(), 8);
//! # Ok::<(), rtneural::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default) - std integration for `rtneural-core` (error trait, tracing)

/// Re-export of rtneural-core for direct access
pub use rtneural_core as core;

pub use rtneural_core::{
    // Scalars and math backend
    math,
    Float,

    // Layer contract
    Layer,
    LayerShape,

    // Activations
    Activation,
    ReLuActivation,
    ReLuActivationT,
    SigmoidActivation,
    SigmoidActivationT,
    TanhActivation,
    TanhActivationT,

    // LSTM
    Gate,
    LstmLayer,
    LstmLayerT,
    LstmState,
    LstmStateT,

    // Config
    ActivationConfig,
    ActivationKind,
    LstmConfig,
};

mod error;
pub use error::{Error, Result};

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{Error, Result};

    pub use crate::core::{Float, Layer};

    pub use crate::core::{ReLuActivation, SigmoidActivation, TanhActivation};
    pub use crate::core::{ReLuActivationT, SigmoidActivationT, TanhActivationT};

    pub use crate::core::{LstmLayer, LstmLayerT, LstmState, LstmStateT};

    pub use crate::core::{ActivationConfig, ActivationKind, LstmConfig};
}
