//! The shared contract every network stage implements.

use crate::{Error, Float, Result};
use dyn_clone::DynClone;

/// A stage transforming a fixed-size input vector into a fixed-size output vector.
///
/// Sizes never change after construction. A composing network holds an ordered
/// `Vec<Box<dyn Layer<T>>>` and relies on nothing beyond this trait.
///
/// # Real-time safety
///
/// `forward()` and `reset()` run on the audio thread. Implementations must not
/// allocate, lock, block, or panic for well-formed input. Passing slices of the
/// wrong length is a caller bug; implementations only `debug_assert!` it.
pub trait Layer<T: Float>: DynClone + Send {
    fn in_size(&self) -> usize;

    fn out_size(&self) -> usize;

    /// Read `in_size()` values from `input`, write `out_size()` values to `output`.
    fn forward(&mut self, input: &[T], output: &mut [T]);

    /// Clear any state carried between `forward()` calls. No-op for stateless layers.
    fn reset(&mut self) {}

    /// Fixed identifier for introspection and logging.
    fn name(&self) -> &'static str;

    fn is_activation(&self) -> bool {
        false
    }
}

dyn_clone::clone_trait_object!(<T> Layer<T> where T: Float);

/// Input and output size of a layer, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerShape {
    pub in_size: usize,
    pub out_size: usize,
}

impl LayerShape {
    pub fn new(in_size: usize, out_size: usize) -> Result<Self> {
        if in_size == 0 {
            return Err(Error::InvalidSize { what: "in_size" });
        }
        if out_size == 0 {
            return Err(Error::InvalidSize { what: "out_size" });
        }
        Ok(Self { in_size, out_size })
    }

    /// Shape of an elementwise layer (`in_size == out_size`).
    pub fn square(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize { what: "size" });
        }
        Ok(Self {
            in_size: size,
            out_size: size,
        })
    }

    #[inline]
    pub(crate) fn debug_check<T>(&self, input: &[T], output: &[T]) {
        debug_assert_eq!(input.len(), self.in_size, "input length != in_size");
        debug_assert_eq!(output.len(), self.out_size, "output length != out_size");
    }
}
