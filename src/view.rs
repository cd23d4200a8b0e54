//! Read-only strided slice.
//!
//! [`StridedSlice`] is a `Copy` view: a base pointer plus an [`Extent`] and a
//! [`Stride`], borrowing the underlying buffer for `'a`. Subviews and
//! conversions are derived by value and never touch the referenced data.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;
use std::ptr::NonNull;

use crate::cursor::Cursor;
use crate::extent::{self, Const, ConstStride, Dyn, DynStride, Extent, Stride, Unit};
use crate::iter::Iter;
use crate::raw::RawStrided;
use crate::{panic_bounds_check, panic_geometry, Result, StridedError};

/// A read-only view over every `stride`-th element of a buffer.
///
/// # Type Parameters
/// - `'a`: Lifetime of the borrowed buffer
/// - `T`: Element type
/// - `E`: Element count, [`Const<N>`] or [`Dyn`] (default)
/// - `S`: Step between elements, [`ConstStride<S>`] or [`DynStride`];
///   defaults to [`Unit`] (contiguous)
///
/// # Example
/// ```
/// use strided_slice::StridedSlice;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let columns = StridedSlice::new(&data, 3, 2).unwrap();
/// assert_eq!(columns, [1.0, 3.0, 5.0]);
/// assert_eq!(columns.reversed(), [5.0, 3.0, 1.0]);
/// ```
pub struct StridedSlice<'a, T, E: Extent = Dyn, S: Stride = Unit> {
    raw: RawStrided<T, E, S>,
    _marker: PhantomData<&'a T>,
}

// SAFETY: a `StridedSlice` only hands out `&T`, like `&[T]`.
unsafe impl<T: Sync, E: Extent, S: Stride> Send for StridedSlice<'_, T, E, S> {}
unsafe impl<T: Sync, E: Extent, S: Stride> Sync for StridedSlice<'_, T, E, S> {}

impl<T, E: Extent, S: Stride> Clone for StridedSlice<'_, T, E, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, E: Extent, S: Stride> Copy for StridedSlice<'_, T, E, S> {}

impl<T: fmt::Debug, E: Extent, S: Stride> fmt::Debug for StridedSlice<'_, T, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> StridedSlice<'a, T> {
    /// View a contiguous slice with unit stride.
    #[inline]
    pub fn from_slice(data: &'a [T]) -> Self {
        // SAFETY: every element of `data` is valid for shared access during 'a.
        unsafe { Self::from_raw(contiguous(NonNull::from(data))) }
    }
}

impl<'a, T, const N: usize> StridedSlice<'a, T, Const<N>, Unit> {
    /// View a fixed-size array; the extent is the array length.
    #[inline]
    pub fn from_array(data: &'a [T; N]) -> Self {
        let raw = contiguous(NonNull::from(&data[..]));
        // SAFETY: as for `from_slice`; the array holds exactly N elements.
        unsafe { Self::from_raw(RawStrided::from_parts(raw.ptr(), Const, ConstStride)) }
    }
}

impl<'a, T> StridedSlice<'a, T, Dyn, DynStride> {
    /// Create a strided view of `len` elements starting at `data[0]`,
    /// `stride` elements apart.
    ///
    /// # Errors
    /// Returns an error if the stride is zero or the view would access
    /// out-of-bounds memory.
    pub fn new(data: &'a [T], len: usize, stride: isize) -> Result<Self> {
        Self::from_parts(data, 0, len, stride)
    }

    /// Create a strided view starting at `data[offset]`.
    ///
    /// A negative stride walks backwards from `offset`.
    ///
    /// # Errors
    /// As for [`StridedSlice::new`].
    pub fn with_offset(data: &'a [T], offset: usize, len: usize, stride: isize) -> Result<Self> {
        Self::from_parts(data, offset, len, stride)
    }
}

impl<'a, T, E: Extent, S: Stride> StridedSlice<'a, T, E, S> {
    /// Create a view of `data[offset + i * stride]` for `i in 0..len` with the
    /// extent and stride types chosen by the caller.
    ///
    /// # Errors
    /// Returns an error if the geometry is out of bounds, the stride is zero,
    /// or `len`/`stride` disagree with a static `E`/`S`.
    pub fn from_parts(data: &'a [T], offset: usize, len: usize, stride: isize) -> Result<Self> {
        let raw = RawStrided::checked(NonNull::from(data), offset, len, stride)?;
        // SAFETY: bounds were validated against `data`, borrowed for 'a.
        Ok(unsafe { Self::from_raw(raw) })
    }

    /// Create a view from a raw start pointer, element count and stride.
    ///
    /// # Safety
    /// `ptr` must be non-null, and `ptr + i * stride` must point to an
    /// initialized `T` valid for reads during `'a` for every `i in 0..len`.
    ///
    /// # Panics
    /// Panics if `stride` is zero or `len`/`stride` disagree with a static
    /// `E`/`S`.
    #[track_caller]
    pub unsafe fn from_raw_parts(ptr: *const T, len: usize, stride: isize) -> Self {
        debug_assert!(!ptr.is_null(), "strided slice from null pointer");
        let extent = E::try_new(len)
            .unwrap_or_else(|| panic_geometry("length disagrees with the static extent"));
        let stride = S::try_new(stride)
            .unwrap_or_else(|| panic_geometry("stride is zero or disagrees with the static stride"));
        Self::from_raw(RawStrided::from_parts(
            NonNull::new_unchecked(ptr as *mut T),
            extent,
            stride,
        ))
    }

    /// # Safety
    /// `raw` must describe elements valid for shared access during `'a`.
    #[inline(always)]
    pub(crate) unsafe fn from_raw(raw: RawStrided<T, E, S>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Re-wrap derived geometry under the same borrow.
    #[inline(always)]
    fn derive<E2: Extent, S2: Stride>(&self, raw: RawStrided<T, E2, S2>) -> StridedSlice<'a, T, E2, S2> {
        // SAFETY: every subview of `self.raw` stays within the elements
        // `self` already grants shared access to.
        unsafe { StridedSlice::from_raw(raw) }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Returns the signed step between logically consecutive elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.raw.stride()
    }

    /// Returns a raw pointer to the first logical element.
    ///
    /// For an empty view this pointer is not dereferenceable.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.ptr().as_ptr()
    }

    /// Returns the element at logical index `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len() {
            // SAFETY: index is in range.
            Some(unsafe { self.get_unchecked(index) })
        } else {
            None
        }
    }

    /// Returns the element at logical index `index` without bounds checking.
    ///
    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &'a T {
        &*self.raw.elem(index)
    }

    /// Returns the first element, or `None` if empty.
    #[inline]
    pub fn first_elem(&self) -> Option<&'a T> {
        self.get(0)
    }

    /// Returns the last element, or `None` if empty.
    #[inline]
    pub fn last_elem(&self) -> Option<&'a T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &'a T {
        match self.first_elem() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &'a T {
        match self.last_elem() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    /// Returns an iterator over the elements in logical order.
    ///
    /// Use `.rev()` for reverse order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        // SAFETY: the elements are valid for shared access during 'a.
        unsafe { Iter::new(self.raw) }
    }

    /// Cursor on the first element.
    #[inline]
    pub fn begin(&self) -> Cursor<'a, T> {
        Cursor::new(self.raw.ptr().as_ptr(), self.stride())
    }

    /// Cursor one logical step past the last element.
    #[inline]
    pub fn end(&self) -> Cursor<'a, T> {
        self.begin() + self.len() as isize
    }

    /// Copy the logical sequence into a new vector.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    // ========================================================================
    // Subviews
    // ========================================================================

    /// The first `count` elements.
    ///
    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn first(&self, count: usize) -> StridedSlice<'a, T, Dyn, S> {
        self.derive(self.raw.take_front(count))
    }

    /// The last `count` elements.
    ///
    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn last(&self, count: usize) -> StridedSlice<'a, T, Dyn, S> {
        self.derive(self.raw.take_back(count))
    }

    /// All but the first `count` elements.
    ///
    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn drop_first(&self, count: usize) -> StridedSlice<'a, T, Dyn, S> {
        self.derive(self.raw.drop_front(count))
    }

    /// All but the last `count` elements.
    ///
    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn drop_last(&self, count: usize) -> StridedSlice<'a, T, Dyn, S> {
        self.derive(self.raw.drop_back(count))
    }

    /// Every `skip`-th element starting with the first.
    ///
    /// The result has `ceil(len / skip)` elements and stride `stride * skip`.
    ///
    /// # Panics
    /// Panics if `skip == 0`.
    ///
    /// # Example
    /// ```
    /// use strided_slice::StridedSlice;
    ///
    /// let data: Vec<u32> = (0..10).collect();
    /// let view = StridedSlice::from_slice(&data).skip(3);
    /// assert_eq!(view.len(), 4);
    /// assert_eq!(view.stride(), 3);
    /// assert_eq!(view, [0, 3, 6, 9]);
    /// ```
    #[inline]
    #[track_caller]
    pub fn skip(&self, skip: usize) -> StridedSlice<'a, T, Dyn, DynStride> {
        self.derive(self.raw.skip_by(skip))
    }

    /// Split into the first `mid` elements and the rest.
    ///
    /// # Panics
    /// Panics if `mid > self.len()`.
    #[inline]
    #[track_caller]
    pub fn split_at(
        &self,
        mid: usize,
    ) -> (StridedSlice<'a, T, Dyn, S>, StridedSlice<'a, T, Dyn, S>) {
        let (head, tail) = self.raw.split_at(mid);
        (self.derive(head), self.derive(tail))
    }

    /// The same elements in reverse order.
    #[inline]
    pub fn reversed(&self) -> StridedSlice<'a, T, E, DynStride> {
        self.derive(self.raw.reversed())
    }

    /// The first `N` elements as a statically sized view.
    ///
    /// Fails to compile if `N` exceeds a static extent:
    ///
    /// ```compile_fail
    /// use strided_slice::StridedSlice;
    ///
    /// let data = [0u8; 8];
    /// let _ = StridedSlice::from_array(&data).first_const::<9>();
    /// ```
    ///
    /// # Panics
    /// Panics if `N > self.len()` for a dynamic extent.
    #[inline]
    #[track_caller]
    pub fn first_const<const N: usize>(&self) -> StridedSlice<'a, T, Const<N>, S> {
        const {
            assert!(
                extent::fits(E::STATIC, N),
                "first_const: count exceeds the static extent"
            )
        };
        self.derive(self.raw.take_front(N))
    }

    /// The last `N` elements as a statically sized view.
    ///
    /// Fails to compile if `N` exceeds a static extent.
    ///
    /// # Panics
    /// Panics if `N > self.len()` for a dynamic extent.
    #[inline]
    #[track_caller]
    pub fn last_const<const N: usize>(&self) -> StridedSlice<'a, T, Const<N>, S> {
        const {
            assert!(
                extent::fits(E::STATIC, N),
                "last_const: count exceeds the static extent"
            )
        };
        self.derive(self.raw.take_back(N))
    }

    /// All but the first `K` elements.
    ///
    /// `R` is the result extent: `Const<{N - K}>` for a `Const<N>` input,
    /// `Dyn` for a dynamic one. Any other choice fails to compile.
    ///
    /// ```
    /// use strided_slice::{Const, StridedSlice};
    ///
    /// let data = [0u8; 8];
    /// let rest = StridedSlice::from_array(&data).drop_first_const::<2, Const<6>>();
    /// assert_eq!(rest.len(), 6);
    /// ```
    ///
    /// ```compile_fail
    /// use strided_slice::{Const, StridedSlice};
    ///
    /// let data = [0u8; 8];
    /// let _ = StridedSlice::from_array(&data).drop_first_const::<2, Const<7>>();
    /// ```
    ///
    /// # Panics
    /// Panics if `K > self.len()` for a dynamic extent.
    #[inline]
    #[track_caller]
    pub fn drop_first_const<const K: usize, R: Extent>(&self) -> StridedSlice<'a, T, R, S> {
        const {
            assert!(
                extent::dropped(E::STATIC, R::STATIC, K),
                "drop_first_const: result extent must be the input extent minus K"
            )
        };
        self.derive(self.raw.drop_front(K))
    }

    /// All but the last `K` elements; `R` follows the rule of
    /// [`drop_first_const`](Self::drop_first_const).
    ///
    /// # Panics
    /// Panics if `K > self.len()` for a dynamic extent.
    #[inline]
    #[track_caller]
    pub fn drop_last_const<const K: usize, R: Extent>(&self) -> StridedSlice<'a, T, R, S> {
        const {
            assert!(
                extent::dropped(E::STATIC, R::STATIC, K),
                "drop_last_const: result extent must be the input extent minus K"
            )
        };
        self.derive(self.raw.drop_back(K))
    }

    /// Every `K`-th element starting with the first.
    ///
    /// `R` must be `Const<{ceil(N / K)}>` for a `Const<N>` input and `Dyn`
    /// otherwise; `Q` must be `ConstStride<{S * K}>` for a `ConstStride<S>`
    /// input and `DynStride` otherwise. Any other choice, or `K == 0`, fails
    /// to compile.
    ///
    /// ```compile_fail
    /// use strided_slice::{Dyn, DynStride, StridedSlice};
    ///
    /// let data = [0u8; 8];
    /// let view = StridedSlice::from_slice(&data).into_dyn();
    /// let _ = view.skip_const::<0, Dyn, DynStride>();
    /// ```
    #[inline]
    #[track_caller]
    pub fn skip_const<const K: usize, R: Extent, Q: Stride>(&self) -> StridedSlice<'a, T, R, Q> {
        const {
            assert!(
                extent::skipped_extent(E::STATIC, R::STATIC, K),
                "skip_const: result extent must be ceil(extent / K)"
            );
            assert!(
                extent::skipped_stride(S::STATIC, Q::STATIC, K),
                "skip_const: result stride must be stride * K"
            );
        };
        self.derive(self.raw.skip_by(K))
    }

    // ========================================================================
    // Widening conversions
    // ========================================================================

    /// Forget a static extent.
    #[inline]
    pub fn into_dyn_extent(self) -> StridedSlice<'a, T, Dyn, S> {
        self.recast_or_panic()
    }

    /// Forget a static stride.
    #[inline]
    pub fn into_dyn_stride(self) -> StridedSlice<'a, T, E, DynStride> {
        self.recast_or_panic()
    }

    /// Forget both a static extent and a static stride.
    #[inline]
    pub fn into_dyn(self) -> StridedSlice<'a, T, Dyn, DynStride> {
        self.recast_or_panic()
    }

    /// Reinterpret under a (possibly static) extent and stride, checking the
    /// current geometry against them.
    ///
    /// # Errors
    /// Returns [`StridedError::ExtentMismatch`] or
    /// [`StridedError::StrideMismatch`] if the geometry disagrees.
    pub fn try_into_static<R: Extent, Q: Stride>(self) -> Result<StridedSlice<'a, T, R, Q>> {
        match self.raw.recast::<R, Q>() {
            Some(raw) => Ok(self.derive(raw)),
            None => Err(recast_error::<R, Q>(self.len(), self.stride())),
        }
    }

    #[inline]
    fn recast_or_panic<R: Extent, Q: Stride>(self) -> StridedSlice<'a, T, R, Q> {
        match self.raw.recast::<R, Q>() {
            Some(raw) => self.derive(raw),
            // Dyn/DynStride accept every valid geometry.
            None => panic_geometry("widening conversion rejected"),
        }
    }
}

/// Unit-stride geometry over a whole slice.
#[inline]
pub(crate) fn contiguous<T>(data: NonNull<[T]>) -> RawStrided<T, Dyn, Unit> {
    // SAFETY: a slice's elements are `ptr + i` for `i in 0..len`.
    unsafe {
        RawStrided::from_parts(
            data.cast::<T>(),
            extent::extent_from::<Dyn>(data.len()),
            ConstStride,
        )
    }
}

/// The error describing why `len`/`stride` do not fit `R`/`Q`.
pub(crate) fn recast_error<R: Extent, Q: Stride>(len: usize, stride: isize) -> StridedError {
    if R::try_new(len).is_none() {
        StridedError::ExtentMismatch {
            expected: R::STATIC.unwrap_or(len),
            actual: len,
        }
    } else {
        StridedError::StrideMismatch {
            expected: Q::STATIC.unwrap_or(stride),
            actual: stride,
        }
    }
}

impl<T, E: Extent, S: Stride> Default for StridedSlice<'_, T, E, S> {
    /// An empty view. Only available for a `Dyn` or `Const<0>` extent.
    ///
    /// ```compile_fail
    /// use strided_slice::{Const, StridedSlice, Unit};
    ///
    /// let _: StridedSlice<'_, u8, Const<3>, Unit> = StridedSlice::default();
    /// ```
    fn default() -> Self {
        const {
            assert!(
                extent::empty_or_dynamic(E::STATIC),
                "default strided slice requires an empty or dynamic extent"
            );
            assert!(
                extent::nonzero_stride(S::STATIC),
                "strided slice stride must be non-zero"
            );
        };
        let stride = extent::stride_from::<S>(S::STATIC.unwrap_or(1));
        // SAFETY: an empty view never dereferences its pointer.
        unsafe {
            Self::from_raw(RawStrided::from_parts(
                NonNull::dangling(),
                extent::extent_from::<E>(0),
                stride,
            ))
        }
    }
}

impl<T, E: Extent, S: Stride> Index<usize> for StridedSlice<'_, T, E, S> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => panic_bounds_check(index, self.len()),
        }
    }
}

impl<'a, T, E: Extent, S: Stride> IntoIterator for StridedSlice<'a, T, E, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E: Extent, S: Stride> IntoIterator for &StridedSlice<'a, T, E, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

// ============================================================================
// Construction and widening via `From`
// ============================================================================

impl<'a, T> From<&'a [T]> for StridedSlice<'a, T> {
    #[inline]
    fn from(data: &'a [T]) -> Self {
        Self::from_slice(data)
    }
}

impl<'a, T> From<&'a Vec<T>> for StridedSlice<'a, T> {
    #[inline]
    fn from(data: &'a Vec<T>) -> Self {
        Self::from_slice(data)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for StridedSlice<'a, T, Const<N>, Unit> {
    #[inline]
    fn from(data: &'a [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<'a, T, S: Stride, const N: usize> From<StridedSlice<'a, T, Const<N>, S>>
    for StridedSlice<'a, T, Dyn, S>
{
    #[inline]
    fn from(view: StridedSlice<'a, T, Const<N>, S>) -> Self {
        view.into_dyn_extent()
    }
}

impl<'a, T, E: Extent, const Q: isize> From<StridedSlice<'a, T, E, ConstStride<Q>>>
    for StridedSlice<'a, T, E, DynStride>
{
    #[inline]
    fn from(view: StridedSlice<'a, T, E, ConstStride<Q>>) -> Self {
        view.into_dyn_stride()
    }
}

impl<'a, T, const N: usize, const Q: isize> From<StridedSlice<'a, T, Const<N>, ConstStride<Q>>>
    for StridedSlice<'a, T, Dyn, DynStride>
{
    #[inline]
    fn from(view: StridedSlice<'a, T, Const<N>, ConstStride<Q>>) -> Self {
        view.into_dyn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extent::Reverse;
    use std::mem::{size_of, size_of_val};

    fn ten() -> Vec<i32> {
        (0..10).collect()
    }

    #[test]
    fn test_from_slice() {
        let data = ten();
        let view = StridedSlice::from_slice(&data);
        assert_eq!(view.len(), 10);
        assert_eq!(view.stride(), 1);
        assert_eq!(view.as_ptr(), data.as_ptr());
        assert!(view.iter().copied().eq(0..10));
    }

    #[test]
    fn test_from_array_is_static() {
        let data = [1u8, 2, 3, 4];
        let view = StridedSlice::from_array(&data);
        assert_eq!(view.len(), 4);
        assert_eq!(size_of::<StridedSlice<'_, u8, Const<4>, Unit>>(), size_of::<*const u8>());
        assert_eq!(
            size_of::<StridedSlice<'_, u8, Dyn, DynStride>>(),
            3 * size_of::<usize>()
        );
        assert_eq!(
            size_of::<StridedSlice<'_, u8, Dyn, Unit>>(),
            2 * size_of::<usize>()
        );
    }

    #[test]
    fn test_new_strided() {
        let data = ten();
        let view = StridedSlice::new(&data, 4, 3).unwrap();
        assert_eq!(view, [0, 3, 6, 9]);
        assert!(StridedSlice::new(&data, 5, 3).is_err());
        assert_eq!(
            StridedSlice::new(&data, 2, 0).unwrap_err(),
            StridedError::ZeroStride
        );
    }

    #[test]
    fn test_with_offset_negative_stride() {
        let data = ten();
        let view = StridedSlice::with_offset(&data, 9, 5, -2).unwrap();
        assert_eq!(view, [9, 7, 5, 3, 1]);
        assert!(StridedSlice::with_offset(&data, 8, 5, -2).is_ok());
        assert!(StridedSlice::with_offset(&data, 7, 5, -2).is_err());
    }

    #[test]
    fn test_from_parts_static_checks() {
        let data = ten();
        let view = StridedSlice::<i32, Const<5>, ConstStride<2>>::from_parts(&data, 0, 5, 2).unwrap();
        assert_eq!(view, [0, 2, 4, 6, 8]);
        assert_eq!(
            StridedSlice::<i32, Const<4>, ConstStride<2>>::from_parts(&data, 0, 5, 2).unwrap_err(),
            StridedError::ExtentMismatch {
                expected: 4,
                actual: 5
            }
        );
        assert_eq!(
            StridedSlice::<i32, Dyn, Reverse>::from_parts(&data, 0, 5, 2).unwrap_err(),
            StridedError::StrideMismatch {
                expected: -1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_from_raw_parts() {
        let data = ten();
        let view: StridedSlice<'_, i32, Dyn, DynStride> =
            unsafe { StridedSlice::from_raw_parts(data.as_ptr().add(1), 3, 4) };
        assert_eq!(view, [1, 5, 9]);
    }

    #[test]
    fn test_accessors() {
        let data = ten();
        let view = StridedSlice::from_slice(&data).skip(2);
        assert_eq!(*view.front(), 0);
        assert_eq!(*view.back(), 8);
        assert_eq!(view[3], 6);
        assert_eq!(view.get(5), None);
        assert_eq!(view.first_elem(), Some(&0));
        assert_eq!(view.last_elem(), Some(&8));
        assert!(!view.is_empty());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_out_of_range() {
        let data = ten();
        let view = StridedSlice::from_slice(&data).skip(3);
        let _ = view[4];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_front_of_empty() {
        let view: StridedSlice<'_, i32> = StridedSlice::default();
        let _ = view.front();
    }

    #[test]
    fn test_default_is_empty() {
        let view: StridedSlice<'_, i32> = StridedSlice::default();
        assert!(view.is_empty());
        assert_eq!(view.iter().next(), None);
        let view: StridedSlice<'_, i32, Const<0>, DynStride> = StridedSlice::default();
        assert_eq!(view.len(), 0);
        assert_eq!(view.stride(), 1);
    }

    #[test]
    fn test_subviews() {
        let data = ten();
        let view = StridedSlice::from_slice(&data);
        assert_eq!(view.first(3), [0, 1, 2]);
        assert_eq!(view.last(2), [8, 9]);
        assert_eq!(view.drop_first(2).drop_last(2), [2, 3, 4, 5, 6, 7]);
        assert_eq!(view.skip(3), [0, 3, 6, 9]);
        assert_eq!(view.first(0).len(), 0);
        assert_eq!(view.last(2).as_ptr(), unsafe { data.as_ptr().add(8) });
        assert_eq!(view.first(2).as_ptr(), data.as_ptr());
    }

    #[test]
    fn test_subviews_on_reversed() {
        let data = ten();
        let rev = StridedSlice::from_slice(&data).reversed();
        assert_eq!(rev.stride(), -1);
        assert_eq!(rev.first(3), [9, 8, 7]);
        assert_eq!(rev.last(3), [2, 1, 0]);
        assert_eq!(rev.skip(4), [9, 5, 1]);
        assert_eq!(rev.reversed(), StridedSlice::from_slice(&data));
    }

    #[test]
    fn test_split_at() {
        let data = ten();
        let (head, tail) = StridedSlice::from_slice(&data).skip(2).split_at(2);
        assert_eq!(head, [0, 2]);
        assert_eq!(tail, [4, 6, 8]);
    }

    #[test]
    #[should_panic(expected = "drop_first(11) out of range")]
    fn test_drop_first_out_of_range() {
        let data = ten();
        let _ = StridedSlice::from_slice(&data).drop_first(11);
    }

    #[test]
    fn test_const_subviews_static() {
        let data = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        let view = StridedSlice::from_array(&data);
        let head: StridedSlice<'_, i32, Const<3>, Unit> = view.first_const::<3>();
        assert_eq!(head, [0, 1, 2]);
        let tail: StridedSlice<'_, i32, Const<2>, Unit> = view.last_const::<2>();
        assert_eq!(tail, [8, 9]);
        let rest: StridedSlice<'_, i32, Const<7>, Unit> = view.drop_first_const::<3, _>();
        assert_eq!(rest.front(), &3);
        let init: StridedSlice<'_, i32, Const<7>, Unit> = view.drop_last_const::<3, _>();
        assert_eq!(init.back(), &6);
        let skipped: StridedSlice<'_, i32, Const<4>, ConstStride<3>> = view.skip_const::<3, _, _>();
        assert_eq!(skipped, [0, 3, 6, 9]);
        assert_eq!(size_of_val(&skipped), size_of::<*const i32>());
    }

    #[test]
    fn test_const_subviews_dynamic() {
        let data = ten();
        let view = StridedSlice::from_slice(&data);
        let head = view.first_const::<4>();
        assert_eq!(head.len(), 4);
        let rest: StridedSlice<'_, i32, Dyn, Unit> = view.drop_first_const::<4, _>();
        assert_eq!(rest, [4, 5, 6, 7, 8, 9]);
        let skipped: StridedSlice<'_, i32, Dyn, ConstStride<2>> = view.skip_const::<2, _, _>();
        assert_eq!(skipped, [0, 2, 4, 6, 8]);
        let dyn_stride = StridedSlice::new(&data, 10, 1).unwrap();
        let skipped: StridedSlice<'_, i32, Dyn, DynStride> = dyn_stride.skip_const::<5, _, _>();
        assert_eq!(skipped, [0, 5]);
    }

    #[test]
    #[should_panic(expected = "first(4) out of range")]
    fn test_first_const_dynamic_out_of_range() {
        let data = [1, 2, 3];
        let _ = StridedSlice::from_slice(&data).first_const::<4>();
    }

    #[test]
    fn test_widening_preserves_geometry() {
        let data = [0u16; 8];
        let view = StridedSlice::<u16, Const<4>, ConstStride<2>>::from_parts(&data, 0, 4, 2).unwrap();
        let a: StridedSlice<'_, u16, Dyn, ConstStride<2>> = view.into_dyn_extent();
        let b: StridedSlice<'_, u16, Const<4>, DynStride> = view.into_dyn_stride();
        let c: StridedSlice<'_, u16, Dyn, DynStride> = view.into_dyn();
        for (ptr, len, stride) in [
            (a.as_ptr(), a.len(), a.stride()),
            (b.as_ptr(), b.len(), b.stride()),
            (c.as_ptr(), c.len(), c.stride()),
        ] {
            assert_eq!(ptr, view.as_ptr());
            assert_eq!(len, 4);
            assert_eq!(stride, 2);
        }
        let d: StridedSlice<'_, u16, Dyn, DynStride> = view.into();
        assert_eq!(d.len(), 4);
        let e: StridedSlice<'_, u16, Dyn, ConstStride<2>> = view.into();
        assert_eq!(e.stride(), 2);
        let f: StridedSlice<'_, u16, Const<4>, DynStride> = view.into();
        assert_eq!(f.stride(), 2);
    }

    #[test]
    fn test_try_into_static() {
        let data = ten();
        let view = StridedSlice::new(&data, 5, 2).unwrap();
        let fixed = view.try_into_static::<Const<5>, ConstStride<2>>().unwrap();
        assert_eq!(fixed, [0, 2, 4, 6, 8]);
        assert_eq!(
            view.try_into_static::<Const<4>, ConstStride<2>>().unwrap_err(),
            StridedError::ExtentMismatch {
                expected: 4,
                actual: 5
            }
        );
        assert_eq!(
            view.try_into_static::<Dyn, Unit>().unwrap_err(),
            StridedError::StrideMismatch {
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_cursor_bounds() {
        let data = ten();
        let view = StridedSlice::from_slice(&data).skip(3);
        let begin = view.begin();
        let end = view.end();
        assert_eq!(end - begin, 4);
        let mut c = begin;
        let mut seen = Vec::new();
        while c != end {
            seen.push(unsafe { *c.get() });
            c.inc();
        }
        assert_eq!(seen, vec![0, 3, 6, 9]);
        assert_eq!(unsafe { *begin.at(2) }, 6);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_cursor_distance_large_skip() {
        let data = [7i32];
        let view = StridedSlice::from_slice(&data).skip(1 << 61);
        assert_eq!(view.len(), 1);
        assert_eq!(view.end() - view.begin(), 1);
        assert!(view.begin() < view.end());
    }

    #[test]
    fn test_cursor_walk_zero_sized() {
        let data = [(); 4];
        let view = StridedSlice::from_slice(&data);
        let (begin, end) = (view.begin(), view.end());
        assert_ne!(begin, end);
        assert_eq!(end - begin, 4);
        let mut c = begin;
        let mut visited = 0;
        while c != end {
            assert_eq!(unsafe { c.get() }, &());
            visited += 1;
            c.inc();
        }
        assert_eq!(visited, view.len());
    }

    #[test]
    fn test_reverse_iteration() {
        let data = ten();
        let view = StridedSlice::from_slice(&data).skip(4);
        let rev: Vec<i32> = view.iter().rev().copied().collect();
        assert_eq!(rev, vec![8, 4, 0]);
        assert_eq!(view.reversed().to_vec(), rev);
    }

    #[test]
    fn test_iter_nth_and_len() {
        let data = ten();
        let view = StridedSlice::from_slice(&data).skip(2);
        let mut it = view.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.nth(1), Some(&2));
        assert_eq!(it.next_back(), Some(&8));
        assert_eq!(it.len(), 2);
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
    }
}
