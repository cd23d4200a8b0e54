//! Pointer + extent + stride geometry shared by the read-only and mutable views.
//!
//! `RawStrided` owns no data and carries no lifetime; the public view types
//! wrap it with the borrow they stand for. All subview arithmetic lives here
//! so both views derive geometry the same way.

use std::ptr::NonNull;

use crate::extent::{self, Dyn, DynStride, Extent, Stride};
use crate::{panic_geometry, Result, StridedError};

pub(crate) struct RawStrided<T, E, S> {
    ptr: NonNull<T>,
    extent: E,
    stride: S,
}

impl<T, E: Copy, S: Copy> Clone for RawStrided<T, E, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: Copy, S: Copy> Copy for RawStrided<T, E, S> {}

/// Validate that the elements `offset + i * stride` for `i in 0..len` all lie
/// within `[0, data_len)`, and that the stride is non-zero.
pub(crate) fn validate_bounds(
    data_len: usize,
    offset: usize,
    len: usize,
    stride: isize,
) -> Result<()> {
    if stride == 0 {
        return Err(StridedError::ZeroStride);
    }
    // Empty view - no element is ever accessed
    if len == 0 {
        return if offset <= data_len {
            Ok(())
        } else {
            Err(StridedError::OutOfBounds {
                data_len,
                offset,
                len,
                stride,
            })
        };
    }
    let base = isize::try_from(offset).map_err(|_| StridedError::OffsetOverflow)?;
    let last = isize::try_from(len - 1).map_err(|_| StridedError::OffsetOverflow)?;
    let span = stride
        .checked_mul(last)
        .ok_or(StridedError::OffsetOverflow)?;
    let end = base.checked_add(span).ok_or(StridedError::OffsetOverflow)?;
    let (min_offset, max_offset) = if span >= 0 { (base, end) } else { (end, base) };
    if min_offset < 0 || max_offset as usize >= data_len {
        return Err(StridedError::OutOfBounds {
            data_len,
            offset,
            len,
            stride,
        });
    }
    Ok(())
}

impl<T, E: Extent, S: Stride> RawStrided<T, E, S> {
    /// # Safety
    /// Every element `ptr + i * stride` for `i in 0..extent.get()` must be
    /// valid for the access the wrapping view grants, and the stride must not
    /// be zero.
    #[inline]
    pub(crate) unsafe fn from_parts(ptr: NonNull<T>, extent: E, stride: S) -> Self {
        debug_assert!(stride.get() != 0, "strided slice with zero stride");
        Self {
            ptr,
            extent,
            stride,
        }
    }

    /// Build the geometry for `data[offset + i * stride]`, validating bounds
    /// and agreement with any static extent or stride.
    pub(crate) fn checked(
        data: NonNull<[T]>,
        offset: usize,
        len: usize,
        stride: isize,
    ) -> Result<Self> {
        let data_len = data.len();
        let validated = validate_bounds(data_len, offset, len, stride).and_then(|()| {
            let extent = E::try_new(len).ok_or(StridedError::ExtentMismatch {
                expected: E::STATIC.unwrap_or(len),
                actual: len,
            })?;
            let step = S::try_new(stride).ok_or(StridedError::StrideMismatch {
                expected: S::STATIC.unwrap_or(stride),
                actual: stride,
            })?;
            Ok((extent, step))
        });
        match validated {
            Ok((extent, step)) => {
                let base = data.cast::<T>();
                // SAFETY: offset <= data_len was validated above.
                let ptr = unsafe { NonNull::new_unchecked(base.as_ptr().add(offset)) };
                Ok(Self {
                    ptr,
                    extent,
                    stride: step,
                })
            }
            Err(err) => {
                log::debug!(
                    "rejected strided slice: data_len={data_len} offset={offset} len={len} stride={stride}: {err}"
                );
                Err(err)
            }
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.extent.get()
    }

    #[inline(always)]
    pub(crate) fn stride(&self) -> isize {
        self.stride.get()
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> NonNull<T> {
        self.ptr
    }

    /// Pointer to logical element `index`.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline(always)]
    pub(crate) unsafe fn elem(&self, index: usize) -> *mut T {
        debug_assert!(index < self.len());
        self.ptr.as_ptr().offset(index as isize * self.stride())
    }

    /// Pointer to logical position `index`, which may be one past the end.
    ///
    /// Never dereferenced; uses wrapping arithmetic so positions outside the
    /// buffer (e.g. before the start of a reversed view) stay well defined.
    #[inline]
    pub(crate) fn position(&self, index: usize) -> NonNull<T> {
        let p = self
            .ptr
            .as_ptr()
            .wrapping_offset((index as isize).wrapping_mul(self.stride()));
        NonNull::new(p).unwrap_or(NonNull::dangling())
    }

    /// Re-derive the geometry under other extent and stride types.
    #[inline]
    pub(crate) fn recast<E2: Extent, S2: Stride>(self) -> Option<RawStrided<T, E2, S2>> {
        Some(RawStrided {
            ptr: self.ptr,
            extent: E2::try_new(self.len())?,
            stride: S2::try_new(self.stride())?,
        })
    }

    // ========================================================================
    // Subview algebra
    // ========================================================================

    #[inline]
    #[track_caller]
    pub(crate) fn take_front<R: Extent>(self, count: usize) -> RawStrided<T, R, S> {
        let len = self.len();
        if count > len {
            panic_subview("first", count, len);
        }
        RawStrided {
            ptr: self.ptr,
            extent: extent::extent_from::<R>(count),
            stride: self.stride,
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn take_back<R: Extent>(self, count: usize) -> RawStrided<T, R, S> {
        let len = self.len();
        if count > len {
            panic_subview("last", count, len);
        }
        RawStrided {
            ptr: self.position(len - count),
            extent: extent::extent_from::<R>(count),
            stride: self.stride,
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn drop_front<R: Extent>(self, count: usize) -> RawStrided<T, R, S> {
        let len = self.len();
        if count > len {
            panic_subview("drop_first", count, len);
        }
        RawStrided {
            ptr: self.position(count),
            extent: extent::extent_from::<R>(len - count),
            stride: self.stride,
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn drop_back<R: Extent>(self, count: usize) -> RawStrided<T, R, S> {
        let len = self.len();
        if count > len {
            panic_subview("drop_last", count, len);
        }
        RawStrided {
            ptr: self.ptr,
            extent: extent::extent_from::<R>(len - count),
            stride: self.stride,
        }
    }

    /// Keep every `skip`-th element starting at index 0.
    ///
    /// The last kept index is `(len - 1) / skip`, so `ceil(len / skip)`
    /// elements remain.
    #[inline]
    #[track_caller]
    pub(crate) fn skip_by<R: Extent, Q: Stride>(self, skip: usize) -> RawStrided<T, R, Q> {
        if skip == 0 {
            panic_geometry("skip must be positive");
        }
        let step = isize::try_from(skip)
            .ok()
            .and_then(|k| self.stride().checked_mul(k))
            .unwrap_or_else(|| panic_geometry("skipped stride overflows isize"));
        RawStrided {
            ptr: self.ptr,
            extent: extent::extent_from::<R>(self.len().div_ceil(skip)),
            stride: extent::stride_from::<Q>(step),
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn split_at(self, mid: usize) -> (RawStrided<T, Dyn, S>, RawStrided<T, Dyn, S>) {
        let len = self.len();
        if mid > len {
            panic_subview("split_at", mid, len);
        }
        (self.take_front(mid), self.drop_front(mid))
    }

    /// Same elements in the opposite order.
    #[inline]
    #[track_caller]
    pub(crate) fn reversed(self) -> RawStrided<T, E, DynStride> {
        let len = self.len();
        let step = self
            .stride()
            .checked_neg()
            .unwrap_or_else(|| panic_geometry("reversed stride overflows isize"));
        RawStrided {
            ptr: if len == 0 {
                self.ptr
            } else {
                self.position(len - 1)
            },
            extent: self.extent,
            stride: extent::stride_from::<DynStride>(step),
        }
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn panic_subview(op: &str, count: usize, len: usize) -> ! {
    panic!("{op}({count}) out of range for strided slice of length {len}")
}
