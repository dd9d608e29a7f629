//! Elementwise activation layers.
//!
//! Two families:
//!
//! - Runtime-sized: [`Activation`] wraps any `Fn(T) -> T` and evaluates it one
//!   element at a time; [`TanhActivation`], [`ReLuActivation`] and
//!   [`SigmoidActivation`] route through the slice kernels in [`crate::math`].
//! - Fixed-size: [`TanhActivationT`], [`ReLuActivationT`] and
//!   [`SigmoidActivationT`] keep their output inline and expose it with `outs()`.
//!
//! The closure path and the slice path produce identical values for the same
//! function; a composing network may use either.

use crate::compat::PhantomData;
use crate::{math, Float, Layer, LayerShape, Result};

/// Elementwise layer over a user-supplied function: `out[i] = func(in[i])`.
#[derive(Clone)]
pub struct Activation<T, F> {
    shape: LayerShape,
    func: F,
    _sample: PhantomData<fn(T) -> T>,
}

impl<T, F> Activation<T, F>
where
    T: Float,
    F: Fn(T) -> T + Clone + Send + 'static,
{
    pub fn new(size: usize, func: F) -> Result<Self> {
        Ok(Self {
            shape: LayerShape::square(size)?,
            func,
            _sample: PhantomData,
        })
    }

    pub fn size(&self) -> usize {
        self.shape.in_size
    }
}

impl<T, F> Layer<T> for Activation<T, F>
where
    T: Float,
    F: Fn(T) -> T + Clone + Send + 'static,
{
    fn in_size(&self) -> usize {
        self.shape.in_size
    }

    fn out_size(&self) -> usize {
        self.shape.out_size
    }

    #[inline]
    fn forward(&mut self, input: &[T], output: &mut [T]) {
        self.shape.debug_check(input, output);
        for (o, &x) in output.iter_mut().zip(input) {
            *o = (self.func)(x);
        }
    }

    fn name(&self) -> &'static str {
        "activation"
    }

    fn is_activation(&self) -> bool {
        true
    }
}

macro_rules! slice_activation {
    ($(#[$doc:meta])* $name:ident, $label:literal, $kernel:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<T> {
            shape: LayerShape,
            _sample: PhantomData<fn(T) -> T>,
        }

        impl<T: Float> $name<T> {
            pub fn new(size: usize) -> Result<Self> {
                Ok(Self {
                    shape: LayerShape::square(size)?,
                    _sample: PhantomData,
                })
            }

            pub fn size(&self) -> usize {
                self.shape.in_size
            }
        }

        impl<T: Float> Layer<T> for $name<T> {
            fn in_size(&self) -> usize {
                self.shape.in_size
            }

            fn out_size(&self) -> usize {
                self.shape.out_size
            }

            #[inline]
            fn forward(&mut self, input: &[T], output: &mut [T]) {
                self.shape.debug_check(input, output);
                $kernel(input, output);
            }

            fn name(&self) -> &'static str {
                $label
            }

            fn is_activation(&self) -> bool {
                true
            }
        }
    };
}

slice_activation!(
    /// Hyperbolic tangent activation.
    TanhActivation,
    "tanh",
    math::tanh_slice
);

slice_activation!(
    /// Rectified linear activation, `max(0, x)`.
    ReLuActivation,
    "relu",
    math::relu_slice
);

slice_activation!(
    /// Logistic sigmoid activation. See [`math::sigmoid`] for saturation behaviour.
    SigmoidActivation,
    "sigmoid",
    math::sigmoid_slice
);

macro_rules! fixed_activation {
    ($(#[$doc:meta])* $name:ident, $label:literal, $kernel:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<T: Float, const N: usize> {
            outs: [T; N],
        }

        impl<T: Float, const N: usize> $name<T, N> {
            const NON_EMPTY: () = assert!(N > 0, "activation size must be positive");

            pub fn new() -> Self {
                #[allow(clippy::let_unit_value)]
                let () = Self::NON_EMPTY;
                Self { outs: [T::ZERO; N] }
            }

            pub const fn size(&self) -> usize {
                N
            }

            #[inline]
            pub fn forward(&mut self, ins: &[T; N]) {
                $kernel(ins, &mut self.outs);
            }

            /// Output of the most recent `forward()`.
            #[inline]
            pub fn outs(&self) -> &[T; N] {
                &self.outs
            }
        }

        impl<T: Float, const N: usize> Default for $name<T, N> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: Float, const N: usize> Layer<T> for $name<T, N> {
            fn in_size(&self) -> usize {
                N
            }

            fn out_size(&self) -> usize {
                N
            }

            #[inline]
            fn forward(&mut self, input: &[T], output: &mut [T]) {
                debug_assert_eq!(input.len(), N, "input length != in_size");
                debug_assert_eq!(output.len(), N, "output length != out_size");
                $kernel(&input[..N], &mut self.outs);
                output[..N].copy_from_slice(&self.outs);
            }

            fn reset(&mut self) {
                self.outs = [T::ZERO; N];
            }

            fn name(&self) -> &'static str {
                $label
            }

            fn is_activation(&self) -> bool {
                true
            }
        }
    };
}

fixed_activation!(
    /// Hyperbolic tangent activation with a compile-time size.
    TanhActivationT,
    "tanh",
    math::tanh_slice
);

fixed_activation!(
    /// Rectified linear activation with a compile-time size.
    ReLuActivationT,
    "relu",
    math::relu_slice
);

fixed_activation!(
    /// Logistic sigmoid activation with a compile-time size.
    SigmoidActivationT,
    "sigmoid",
    math::sigmoid_slice
);
