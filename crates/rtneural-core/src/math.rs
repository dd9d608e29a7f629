//! Scalar math backend: matrix-vector products and elementwise maps over slices.
//!
//! Everything here is allocation-free and operates on caller-owned buffers.
//! Matrices are dense, row-major, and passed as flat slices together with their
//! column count.
//!
//! # Saturation policy
//!
//! [`sigmoid`] never calls `exp` on a positive argument:
//!
//! - `x >= 0`: `1 / (1 + exp(-x))`
//! - `x < 0`: `e / (1 + e)` with `e = exp(x)`
//!
//! so `exp` cannot overflow. Large negative inputs reach exactly `0`, large
//! positive inputs reach exactly `1`, and no finite input yields NaN. NaN input
//! propagates as NaN.

use crate::Float;

/// Logistic sigmoid with the saturation policy described in the module docs.
#[inline]
pub fn sigmoid<T: Float>(x: T) -> T {
    if x >= T::ZERO {
        T::ONE / (T::ONE + (-x).exp())
    } else {
        let e = x.exp();
        e / (T::ONE + e)
    }
}

/// Rectified linear unit, `max(0, x)`. NaN maps to `0`.
#[inline]
pub fn relu<T: Float>(x: T) -> T {
    T::ZERO.max(x)
}

/// `out += matrix · x` where `matrix` is `out.len()` rows of `x.len()` columns.
#[inline]
pub fn mat_vec_acc<T: Float>(matrix: &[T], x: &[T], out: &mut [T]) {
    let cols = x.len();
    debug_assert_eq!(matrix.len(), cols * out.len());

    for (acc, row) in out.iter_mut().zip(matrix.chunks_exact(cols)) {
        let mut sum = T::ZERO;
        for (&w, &v) in row.iter().zip(x) {
            sum += w * v;
        }
        *acc += sum;
    }
}

/// `out = matrix · x`.
#[inline]
pub fn mat_vec<T: Float>(matrix: &[T], x: &[T], out: &mut [T]) {
    out.fill(T::ZERO);
    mat_vec_acc(matrix, x, out);
}

#[inline]
pub fn tanh_slice<T: Float>(input: &[T], out: &mut [T]) {
    debug_assert_eq!(input.len(), out.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = x.tanh();
    }
}

#[inline]
pub fn relu_slice<T: Float>(input: &[T], out: &mut [T]) {
    debug_assert_eq!(input.len(), out.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = relu(x);
    }
}

#[inline]
pub fn sigmoid_slice<T: Float>(input: &[T], out: &mut [T]) {
    debug_assert_eq!(input.len(), out.len());
    for (o, &x) in out.iter_mut().zip(input) {
        *o = sigmoid(x);
    }
}

#[inline]
pub fn tanh_in_place<T: Float>(values: &mut [T]) {
    for v in values.iter_mut() {
        *v = v.tanh();
    }
}

#[inline]
pub fn sigmoid_in_place<T: Float>(values: &mut [T]) {
    for v in values.iter_mut() {
        *v = sigmoid(*v);
    }
}
