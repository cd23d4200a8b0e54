//! Zero-copy strided slices with compile-time or runtime extent and stride.
//!
//! A strided slice is a non-owning window over a contiguous buffer that visits
//! every `stride`-th element: a plain contiguous range (stride 1), an
//! every-k-th-element range (stride k), or a reversed range (negative stride).
//! Deriving a subview never copies data; it only recomputes the base pointer,
//! extent and stride.
//!
//! # Core Types
//!
//! - [`StridedSlice`] / [`StridedSliceMut`]: read-only and mutable views
//! - [`Extent`] ([`Const`], [`Dyn`]) and [`Stride`] ([`ConstStride`],
//!   [`DynStride`]): element count and step, either fixed by the type
//!   (zero-sized) or stored at runtime
//! - [`Cursor`] / [`CursorMut`]: random-access stepping cursors
//! - [`Iter`] / [`IterMut`]: double-ended, exact-size element iterators
//!
//! # Subview algebra
//!
//! - `first(n)`, `last(n)`, `drop_first(n)`, `drop_last(n)`
//! - `skip(k)`: every k-th element, `ceil(len / k)` of them
//! - `split_at(mid)`, `reversed()`
//! - `*_const` forms taking the count as a const generic argument; static
//!   inputs keep a static result type, checked at compile time
//!
//! # Widening conversions
//!
//! `into_dyn_extent`, `into_dyn_stride` and `into_dyn` only ever generalize
//! a view's type; a mutable view converts into a read-only one through
//! `as_slice`/`into_slice`. The reverse directions are not offered except
//! as the fallible `try_into_static`.
//!
//! # Example
//!
//! ```rust
//! use strided_slice::StridedSlice;
//!
//! let data: Vec<i32> = (0..10).collect();
//! let view = StridedSlice::from_slice(&data);
//!
//! let every_third = view.skip(3);
//! assert_eq!(every_third, [0, 3, 6, 9]);
//! assert_eq!(view.last(2), [8, 9]);
//! assert_eq!(view.drop_first(2).drop_last(2), [2, 3, 4, 5, 6, 7]);
//!
//! // Equality compares the logical sequence, not the layout.
//! let spread = [1, 9, 2, 9, 3];
//! let strided = StridedSlice::new(&spread, 3, 2).unwrap();
//! let packed = [1, 2, 3];
//! assert_eq!(strided, StridedSlice::from_array(&packed));
//! ```
//!
//! # Compile-time geometry
//!
//! ```rust
//! use strided_slice::{Const, ConstStride, StridedSlice, Unit};
//!
//! let data = [0u8, 1, 2, 3, 4, 5, 6, 7];
//! let view = StridedSlice::from_array(&data); // StridedSlice<u8, Const<8>, Unit>
//! assert_eq!(std::mem::size_of_val(&view), std::mem::size_of::<*const u8>());
//!
//! let tail: StridedSlice<'_, u8, Const<6>, Unit> = view.drop_first_const::<2, _>();
//! let odd: StridedSlice<'_, u8, Const<3>, ConstStride<2>> =
//!     tail.drop_first_const::<1, Const<5>>().skip_const::<2, _, _>();
//! assert_eq!(odd, [3, 5, 7]);
//! ```

mod cmp;
mod cursor;
pub mod extent;
mod iter;
mod raw;
mod view;
mod view_mut;

#[cfg(feature = "parallel")]
mod parallel;

// ============================================================================
// Views
// ============================================================================
pub use view::StridedSlice;
pub use view_mut::StridedSliceMut;

// ============================================================================
// Geometry
// ============================================================================
pub use extent::{Const, ConstStride, Dyn, DynStride, Extent, Reverse, Stride, Unit};

// ============================================================================
// Cursors and iterators
// ============================================================================
pub use cursor::{Cursor, CursorMut};
pub use iter::{Iter, IterMut};

#[cfg(feature = "parallel")]
pub use parallel::{ParIter, ParIterMut};

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur when building or reshaping a strided slice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StridedError {
    /// A stride of zero would alias every element.
    #[error("stride must be non-zero")]
    ZeroStride,

    /// Integer overflow while computing an element offset.
    #[error("offset overflow while computing pointer")]
    OffsetOverflow,

    /// The view would reach outside the borrowed buffer.
    #[error(
        "strided slice (offset={offset}, len={len}, stride={stride}) out of bounds for buffer of length {data_len}"
    )]
    OutOfBounds {
        data_len: usize,
        offset: usize,
        len: usize,
        stride: isize,
    },

    /// The element count disagrees with a static extent.
    #[error("extent mismatch: expected {expected}, got {actual}")]
    ExtentMismatch { expected: usize, actual: usize },

    /// The step disagrees with a static stride.
    #[error("stride mismatch: expected {expected}, got {actual}")]
    StrideMismatch { expected: isize, actual: isize },

    /// Two views that must have the same length do not.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),
}

/// Result type for strided slice operations.
pub type Result<T> = std::result::Result<T, StridedError>;

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn panic_bounds_check(index: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn panic_geometry(msg: &str) -> ! {
    panic!("invalid strided slice geometry: {msg}")
}
