//! Recurrent state snapshots.

use crate::compat::Vec;
use crate::Float;

/// Hidden and cell vectors of a [`LstmLayer`](super::LstmLayer).
#[derive(Debug, Clone, PartialEq)]
pub struct LstmState<T> {
    pub hidden: Vec<T>,
    pub cell: Vec<T>,
}

impl<T: Float> LstmState<T> {
    /// The state of a freshly constructed or reset cell.
    pub fn zeros(hidden_size: usize) -> Self {
        Self {
            hidden: vec![T::ZERO; hidden_size],
            cell: vec![T::ZERO; hidden_size],
        }
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.len()
    }

    /// Zero both vectors in place.
    #[inline]
    pub fn clear(&mut self) {
        self.hidden.fill(T::ZERO);
        self.cell.fill(T::ZERO);
    }

    pub fn is_zero(&self) -> bool {
        self.hidden
            .iter()
            .chain(&self.cell)
            .all(|&v| v == T::ZERO)
    }
}

/// Hidden and cell vectors of a [`LstmLayerT`](super::LstmLayerT).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LstmStateT<T, const N: usize> {
    pub hidden: [T; N],
    pub cell: [T; N],
}

impl<T: Float, const N: usize> LstmStateT<T, N> {
    pub const fn zeros() -> Self {
        Self {
            hidden: [T::ZERO; N],
            cell: [T::ZERO; N],
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = Self::zeros();
    }

    pub fn is_zero(&self) -> bool {
        self.hidden
            .iter()
            .chain(&self.cell)
            .all(|&v| v == T::ZERO)
    }
}

impl<T: Float, const N: usize> Default for LstmStateT<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}
