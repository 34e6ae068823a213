//! A fixed-capacity bitboard with runtime dimensions.
//!
//! The type is `no_std` friendly and avoids heap allocations. A board of
//! `rows × cols` cells is packed row-major into an array of `W` unsigned
//! words of type `T`, so any board up to `W * T::BITS` cells fits.

use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size `rows * cols` exceeds the storage capacity.
    SizeTooLarge { cells: usize, capacity: usize },
    /// Row or column index is out of bounds.
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { cells, capacity } => {
                write!(f, "SizeTooLarge: {} cells exceed capacity of {}", cells, capacity)
            }
            BitBoardError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// A `rows × cols` bitboard stored in `W` words of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const W: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    rows: usize,
    cols: usize,
    words: [T; W],
}

impl<T, const W: usize> BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Total number of cells the storage can hold.
    pub const CAPACITY: usize = W * Self::WORD_BITS;

    /// Fallible constructor: returns `Err(SizeTooLarge)` if the board does not fit.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BitBoardError> {
        let cells = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if cells > Self::CAPACITY {
            return Err(BitBoardError::SizeTooLarge {
                cells,
                capacity: Self::CAPACITY,
            });
        }
        Ok(BitBoard {
            rows,
            cols,
            words: [T::zero(); W],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), BitBoardError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.words = [T::zero(); W];
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), BitBoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BitBoardError::IndexOutOfBounds { row, col });
        }
        let idx = row * self.cols + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    #[inline]
    fn bit_at(&self, idx: usize) -> bool {
        let word = self.words[idx / Self::WORD_BITS];
        ((word >> (idx % Self::WORD_BITS)) & T::one()) != T::zero()
    }

    /// Iterator over the set bits of the board as `(row, col)`.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T, W> {
        SetBits {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const W: usize> fmt::Debug for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitBoard<{}, {}> {}x{}:",
            any::type_name::<T>(),
            W,
            self.rows,
            self.cols
        )?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const W: usize> fmt::Display for BitBoard<T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                let bit = if self.bit_at(r * self.cols + c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T, const W: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, W>,
    idx: usize,
}

impl<'a, T, const W: usize> Iterator for SetBits<'a, T, W>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cells = self.board.rows * self.board.cols;
        while self.idx < cells {
            let idx = self.idx;
            self.idx += 1;
            if self.board.bit_at(idx) {
                return Some((idx / self.board.cols, idx % self.board.cols));
            }
        }
        None
    }
}
