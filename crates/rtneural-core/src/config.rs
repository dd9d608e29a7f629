//! Layer configuration, as handed over by a model loader.
//!
//! These are plain `serde` structs so whatever parses a model description can
//! deserialize straight into them. Validation happens here, off the audio thread.

use crate::compat::Box;
use crate::{
    Error, Float, Layer, LstmLayer, ReLuActivation, Result, SigmoidActivation, TanhActivation,
};
use serde::{Deserialize, Serialize};

/// Sizes of an LSTM layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LstmConfig {
    pub in_size: usize,
    pub hidden_size: usize,
}

impl LstmConfig {
    pub fn new(in_size: usize, hidden_size: usize) -> Self {
        Self {
            in_size,
            hidden_size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.in_size == 0 || self.hidden_size == 0 {
            return Err(Error::InvalidConfig(format!(
                "LSTM sizes must be positive (in_size={}, hidden_size={})",
                self.in_size, self.hidden_size
            )));
        }
        Ok(())
    }

    pub fn build<T: Float>(&self) -> Result<LstmLayer<T>> {
        LstmLayer::from_config(self)
    }
}

/// Built-in elementwise activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationKind {
    Tanh,
    Relu,
    Sigmoid,
}

impl ActivationKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActivationKind::Tanh => "tanh",
            ActivationKind::Relu => "relu",
            ActivationKind::Sigmoid => "sigmoid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationConfig {
    pub kind: ActivationKind,
    pub size: usize,
}

impl ActivationConfig {
    pub fn new(kind: ActivationKind, size: usize) -> Self {
        Self { kind, size }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig(format!(
                "{} activation size must be positive",
                self.kind.name()
            )));
        }
        Ok(())
    }

    pub fn build<T: Float>(&self) -> Result<Box<dyn Layer<T>>> {
        self.validate()?;
        let layer: Box<dyn Layer<T>> = match self.kind {
            ActivationKind::Tanh => Box::new(TanhActivation::<T>::new(self.size)?),
            ActivationKind::Relu => Box::new(ReLuActivation::<T>::new(self.size)?),
            ActivationKind::Sigmoid => Box::new(SigmoidActivation::<T>::new(self.size)?),
        };
        Ok(layer)
    }
}
