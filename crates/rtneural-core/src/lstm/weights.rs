//! Validated bulk loaders shared by both LSTM variants.
//!
//! Every function checks the whole input before touching `dest`, so a rejected
//! load leaves the previous parameters intact.

use crate::{Error, Float, Result};

/// Copy `expected_rows` rows of `row_len` values into row-major `dest`.
pub(crate) fn load_rows<T: Float, R: AsRef<[T]>>(
    what: &'static str,
    rows: &[R],
    expected_rows: usize,
    row_len: usize,
    dest: &mut [T],
) -> Result<()> {
    debug_assert_eq!(dest.len(), expected_rows * row_len);
    check_rows(what, rows, expected_rows, row_len)?;

    for (chunk, row) in dest.chunks_exact_mut(row_len).zip(rows) {
        chunk.copy_from_slice(row.as_ref());
    }
    Ok(())
}

/// Load from the column-major layout model exports use: `rows[c][r]` lands at
/// `dest[r * row_len + c]`, so `rows` has `row_len` entries of `out_rows` values.
pub(crate) fn load_rows_transposed<T: Float, R: AsRef<[T]>>(
    what: &'static str,
    rows: &[R],
    out_rows: usize,
    row_len: usize,
    dest: &mut [T],
) -> Result<()> {
    debug_assert_eq!(dest.len(), out_rows * row_len);
    check_rows(what, rows, row_len, out_rows)?;

    for (c, column) in rows.iter().enumerate() {
        for (r, &value) in column.as_ref().iter().enumerate() {
            dest[r * row_len + c] = value;
        }
    }
    Ok(())
}

pub(crate) fn load_values<T: Float>(
    what: &'static str,
    values: &[T],
    dest: &mut [T],
) -> Result<()> {
    if values.len() != dest.len() {
        return Err(Error::ValueCount {
            what,
            expected: dest.len(),
            actual: values.len(),
        });
    }
    dest.copy_from_slice(values);
    Ok(())
}

fn check_rows<T, R: AsRef<[T]>>(
    what: &'static str,
    rows: &[R],
    expected_rows: usize,
    row_len: usize,
) -> Result<()> {
    if rows.len() != expected_rows {
        return Err(Error::RowCount {
            what,
            expected: expected_rows,
            actual: rows.len(),
        });
    }
    if let Some((row, bad)) = rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.as_ref().len() != row_len)
    {
        return Err(Error::RowLength {
            what,
            row,
            expected: row_len,
            actual: bad.as_ref().len(),
        });
    }
    Ok(())
}
