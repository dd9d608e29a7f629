//! Compatibility layer for no_std + alloc.

pub use alloc::{
    boxed::Box,
    string::{String, ToString},
    vec::Vec,
};

pub use core::marker::PhantomData;
