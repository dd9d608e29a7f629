//! One LSTM time step over borrowed buffers.

use super::GATES;
use crate::{math, Float};

/// Borrowed, stacked parameters of one cell.
pub(crate) struct CellParams<'a, T> {
    /// `GATES * hidden` rows of `in_size` columns.
    pub kernel: &'a [T],
    /// `GATES * hidden` rows of `hidden` columns.
    pub recurrent: &'a [T],
    /// `GATES * hidden` values.
    pub bias: &'a [T],
}

/// Advance `(hidden, cell)` by one step for input `x`.
///
/// Every gate pre-activation is computed from the previous `hidden` into
/// `gates` before `hidden` or `cell` is written, so the state moves from
/// `t - 1` to `t` in one commit.
#[inline]
pub(crate) fn step<T: Float>(
    params: &CellParams<'_, T>,
    x: &[T],
    hidden: &mut [T],
    cell: &mut [T],
    gates: &mut [T],
) {
    let n = hidden.len();
    debug_assert_eq!(cell.len(), n);
    debug_assert_eq!(gates.len(), GATES * n);

    gates.copy_from_slice(params.bias);
    math::mat_vec_acc(params.kernel, x, gates);
    math::mat_vec_acc(params.recurrent, hidden, gates);

    let (i, rest) = gates.split_at_mut(n);
    let (f, rest) = rest.split_at_mut(n);
    let (g, o) = rest.split_at_mut(n);

    math::sigmoid_in_place(i);
    math::sigmoid_in_place(f);
    math::tanh_in_place(g);
    math::sigmoid_in_place(o);

    for k in 0..n {
        let c = f[k] * cell[k] + i[k] * g[k];
        cell[k] = c;
        hidden[k] = o[k] * c.tanh();
    }
}
