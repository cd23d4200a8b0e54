//! Mutable strided slice.
//!
//! [`StridedSliceMut`] holds a unique borrow of its elements, so unlike
//! [`StridedSlice`] it is not `Copy`. Subview operations consume the view
//! (reborrow first with [`StridedSliceMut::reborrow`] to keep it), and
//! [`StridedSliceMut::split_at_mut`] yields two disjoint mutable halves.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::NonNull;

use crate::cursor::{Cursor, CursorMut};
use crate::extent::{self, Const, ConstStride, Dyn, DynStride, Extent, Stride, Unit};
use crate::iter::{Iter, IterMut};
use crate::raw::RawStrided;
use crate::view::{contiguous, recast_error, StridedSlice};
use crate::{panic_bounds_check, panic_geometry, Result, StridedError};

/// A mutable view over every `stride`-th element of a buffer.
///
/// Same type parameters as [`StridedSlice`].
///
/// # Example
/// ```
/// use strided_slice::StridedSliceMut;
///
/// let mut data = [0; 6];
/// let mut evens = StridedSliceMut::new(&mut data, 3, 2).unwrap();
/// evens.fill(7);
/// evens[1] = 8;
/// assert_eq!(data, [7, 0, 8, 0, 7, 0]);
/// ```
pub struct StridedSliceMut<'a, T, E: Extent = Dyn, S: Stride = Unit> {
    raw: RawStrided<T, E, S>,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: a `StridedSliceMut` behaves like `&mut [T]`.
unsafe impl<T: Send, E: Extent, S: Stride> Send for StridedSliceMut<'_, T, E, S> {}
unsafe impl<T: Sync, E: Extent, S: Stride> Sync for StridedSliceMut<'_, T, E, S> {}

impl<T: fmt::Debug, E: Extent, S: Stride> fmt::Debug for StridedSliceMut<'_, T, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> StridedSliceMut<'a, T> {
    /// View a contiguous mutable slice with unit stride.
    #[inline]
    pub fn from_slice_mut(data: &'a mut [T]) -> Self {
        // SAFETY: `data` is exclusively borrowed for 'a.
        unsafe { Self::from_raw(contiguous(NonNull::from(data))) }
    }
}

impl<'a, T, const N: usize> StridedSliceMut<'a, T, Const<N>, Unit> {
    /// View a fixed-size mutable array; the extent is the array length.
    #[inline]
    pub fn from_array_mut(data: &'a mut [T; N]) -> Self {
        let raw = contiguous(NonNull::from(&mut data[..]));
        // SAFETY: as for `from_slice_mut`; the array holds exactly N elements.
        unsafe { Self::from_raw(RawStrided::from_parts(raw.ptr(), Const, ConstStride)) }
    }
}

impl<'a, T> StridedSliceMut<'a, T, Dyn, DynStride> {
    /// Create a mutable strided view of `len` elements starting at `data[0]`,
    /// `stride` elements apart.
    ///
    /// # Errors
    /// Returns an error if the stride is zero or the view would access
    /// out-of-bounds memory.
    pub fn new(data: &'a mut [T], len: usize, stride: isize) -> Result<Self> {
        Self::from_parts(data, 0, len, stride)
    }

    /// Create a mutable strided view starting at `data[offset]`.
    ///
    /// # Errors
    /// As for [`StridedSliceMut::new`].
    pub fn with_offset(
        data: &'a mut [T],
        offset: usize,
        len: usize,
        stride: isize,
    ) -> Result<Self> {
        Self::from_parts(data, offset, len, stride)
    }
}

impl<'a, T, E: Extent, S: Stride> StridedSliceMut<'a, T, E, S> {
    /// Create a mutable view of `data[offset + i * stride]` for `i in 0..len`
    /// with the extent and stride types chosen by the caller.
    ///
    /// # Errors
    /// Returns an error if the geometry is out of bounds, the stride is zero,
    /// or `len`/`stride` disagree with a static `E`/`S`.
    pub fn from_parts(
        data: &'a mut [T],
        offset: usize,
        len: usize,
        stride: isize,
    ) -> Result<Self> {
        let raw = RawStrided::checked(NonNull::from(data), offset, len, stride)?;
        // SAFETY: bounds were validated against `data`, exclusively borrowed for 'a.
        Ok(unsafe { Self::from_raw(raw) })
    }

    /// Create a mutable view from a raw start pointer, element count and
    /// stride.
    ///
    /// # Safety
    /// `ptr` must be non-null, and `ptr + i * stride` must point to an
    /// initialized `T` valid for reads and writes during `'a` for every
    /// `i in 0..len`, with no other access to those elements during `'a`.
    ///
    /// # Panics
    /// Panics if `stride` is zero or `len`/`stride` disagree with a static
    /// `E`/`S`.
    #[track_caller]
    pub unsafe fn from_raw_parts_mut(ptr: *mut T, len: usize, stride: isize) -> Self {
        debug_assert!(!ptr.is_null(), "strided slice from null pointer");
        let extent = E::try_new(len)
            .unwrap_or_else(|| panic_geometry("length disagrees with the static extent"));
        let stride = S::try_new(stride)
            .unwrap_or_else(|| panic_geometry("stride is zero or disagrees with the static stride"));
        Self::from_raw(RawStrided::from_parts(
            NonNull::new_unchecked(ptr),
            extent,
            stride,
        ))
    }

    /// # Safety
    /// `raw` must describe elements valid for exclusive access during `'a`.
    #[inline(always)]
    pub(crate) unsafe fn from_raw(raw: RawStrided<T, E, S>) -> Self {
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    /// Re-wrap geometry derived from `self`, which is consumed.
    #[inline(always)]
    fn derive<E2: Extent, S2: Stride>(
        self,
        raw: RawStrided<T, E2, S2>,
    ) -> StridedSliceMut<'a, T, E2, S2> {
        // SAFETY: the subview covers a subset of the elements `self` had
        // exclusive access to, and `self` is gone.
        unsafe { StridedSliceMut::from_raw(raw) }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.len() == 0
    }

    /// Signed step between logically consecutive elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.raw.stride()
    }

    /// Raw const pointer to the first logical element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw.ptr().as_ptr() as *const T
    }

    /// Raw mutable pointer to the first logical element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.raw.ptr().as_ptr()
    }

    /// Element `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Mutable element `index`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len() {
            // SAFETY: index is in range.
            Some(unsafe { self.get_unchecked_mut(index) })
        } else {
            None
        }
    }

    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        &*self.raw.elem(index)
    }

    /// # Safety
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        &mut *self.raw.elem(index)
    }

    /// First element, or `None` if empty.
    #[inline]
    pub fn first_elem(&self) -> Option<&T> {
        self.get(0)
    }

    /// Last element, or `None` if empty.
    #[inline]
    pub fn last_elem(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Mutable first element, or `None` if empty.
    #[inline]
    pub fn first_elem_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Mutable last element, or `None` if empty.
    #[inline]
    pub fn last_elem_mut(&mut self) -> Option<&mut T> {
        let last = self.len().checked_sub(1)?;
        self.get_mut(last)
    }

    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.first_elem() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.last_elem() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.first_elem_mut() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    /// # Panics
    /// Panics if the view is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.last_elem_mut() {
            Some(elem) => elem,
            None => panic_bounds_check(0, 0),
        }
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        // SAFETY: shared access for the duration of the `&self` borrow.
        unsafe { Iter::new(self.raw) }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        // SAFETY: exclusive access for the duration of the `&mut self` borrow.
        unsafe { IterMut::new(self.raw) }
    }

    #[inline]
    pub fn begin(&self) -> Cursor<'_, T> {
        self.as_slice().begin()
    }

    #[inline]
    pub fn end(&self) -> Cursor<'_, T> {
        self.as_slice().end()
    }

    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.raw.ptr().as_ptr(), self.stride())
    }

    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len() as isize;
        self.begin_mut() + len
    }

    /// Collect the elements in logical order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }

    /// Read-only view of the same elements, borrowing `self`.
    #[inline]
    pub fn as_slice(&self) -> StridedSlice<'_, T, E, S> {
        // SAFETY: shared access for the duration of the `&self` borrow.
        unsafe { StridedSlice::from_raw(self.raw) }
    }

    /// Read-only view of the same elements for the full lifetime `'a`.
    #[inline]
    pub fn into_slice(self) -> StridedSlice<'a, T, E, S> {
        // SAFETY: `self` is consumed, so its exclusive access becomes shared.
        unsafe { StridedSlice::from_raw(self.raw) }
    }

    /// A shorter-lived mutable view of the same elements.
    #[inline]
    pub fn reborrow(&mut self) -> StridedSliceMut<'_, T, E, S> {
        // SAFETY: `self` is unusable while the reborrow lives.
        unsafe { StridedSliceMut::from_raw(self.raw) }
    }

    /// Assign `value` to every element.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        for elem in self.iter_mut() {
            elem.clone_from(&value);
        }
    }

    /// Copy every element of `src` into the corresponding element of `self`.
    ///
    /// # Errors
    /// Returns [`StridedError::LengthMismatch`] if the lengths differ.
    pub fn copy_from<E2: Extent, S2: Stride>(&mut self, src: &StridedSlice<'_, T, E2, S2>) -> Result<()>
    where
        T: Clone,
    {
        if self.len() != src.len() {
            return Err(StridedError::LengthMismatch(self.len(), src.len()));
        }
        for (dst, value) in self.iter_mut().zip(src.iter()) {
            dst.clone_from(value);
        }
        Ok(())
    }

    // ========================================================================
    // Subviews
    // ========================================================================

    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn first(self, count: usize) -> StridedSliceMut<'a, T, Dyn, S> {
        let raw = self.raw.take_front(count);
        self.derive(raw)
    }

    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn last(self, count: usize) -> StridedSliceMut<'a, T, Dyn, S> {
        let raw = self.raw.take_back(count);
        self.derive(raw)
    }

    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn drop_first(self, count: usize) -> StridedSliceMut<'a, T, Dyn, S> {
        let raw = self.raw.drop_front(count);
        self.derive(raw)
    }

    /// # Panics
    /// Panics if `count > self.len()`.
    #[inline]
    #[track_caller]
    pub fn drop_last(self, count: usize) -> StridedSliceMut<'a, T, Dyn, S> {
        let raw = self.raw.drop_back(count);
        self.derive(raw)
    }

    /// Every `skip`-th element starting with the first.
    ///
    /// # Panics
    /// Panics if `skip == 0`.
    #[inline]
    #[track_caller]
    pub fn skip(self, skip: usize) -> StridedSliceMut<'a, T, Dyn, DynStride> {
        let raw = self.raw.skip_by(skip);
        self.derive(raw)
    }

    /// Split into two disjoint mutable views at `mid`.
    ///
    /// # Panics
    /// Panics if `mid > self.len()`.
    #[inline]
    #[track_caller]
    pub fn split_at_mut(
        self,
        mid: usize,
    ) -> (StridedSliceMut<'a, T, Dyn, S>, StridedSliceMut<'a, T, Dyn, S>) {
        let (head, tail) = self.raw.split_at(mid);
        // SAFETY: `head` and `tail` cover disjoint logical index ranges, and
        // a non-zero stride maps them to disjoint elements.
        unsafe { (StridedSliceMut::from_raw(head), StridedSliceMut::from_raw(tail)) }
    }

    #[inline]
    pub fn reversed(self) -> StridedSliceMut<'a, T, E, DynStride> {
        let raw = self.raw.reversed();
        self.derive(raw)
    }

    /// See [`StridedSlice::first_const`].
    #[inline]
    #[track_caller]
    pub fn first_const<const N: usize>(self) -> StridedSliceMut<'a, T, Const<N>, S> {
        const {
            assert!(
                extent::fits(E::STATIC, N),
                "first_const: count exceeds the static extent"
            )
        };
        let raw = self.raw.take_front(N);
        self.derive(raw)
    }

    /// See [`StridedSlice::last_const`].
    #[inline]
    #[track_caller]
    pub fn last_const<const N: usize>(self) -> StridedSliceMut<'a, T, Const<N>, S> {
        const {
            assert!(
                extent::fits(E::STATIC, N),
                "last_const: count exceeds the static extent"
            )
        };
        let raw = self.raw.take_back(N);
        self.derive(raw)
    }

    /// See [`StridedSlice::drop_first_const`].
    #[inline]
    #[track_caller]
    pub fn drop_first_const<const K: usize, R: Extent>(self) -> StridedSliceMut<'a, T, R, S> {
        const {
            assert!(
                extent::dropped(E::STATIC, R::STATIC, K),
                "drop_first_const: result extent must be the input extent minus K"
            )
        };
        let raw = self.raw.drop_front(K);
        self.derive(raw)
    }

    /// See [`StridedSlice::drop_last_const`].
    #[inline]
    #[track_caller]
    pub fn drop_last_const<const K: usize, R: Extent>(self) -> StridedSliceMut<'a, T, R, S> {
        const {
            assert!(
                extent::dropped(E::STATIC, R::STATIC, K),
                "drop_last_const: result extent must be the input extent minus K"
            )
        };
        let raw = self.raw.drop_back(K);
        self.derive(raw)
    }

    /// See [`StridedSlice::skip_const`].
    #[inline]
    #[track_caller]
    pub fn skip_const<const K: usize, R: Extent, Q: Stride>(self) -> StridedSliceMut<'a, T, R, Q> {
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
        let raw = self.raw.skip_by(K);
        self.derive(raw)
    }

    // ========================================================================
    // Widening conversions
    // ========================================================================

    #[inline]
    pub fn into_dyn_extent(self) -> StridedSliceMut<'a, T, Dyn, S> {
        self.recast_or_panic()
    }

    #[inline]
    pub fn into_dyn_stride(self) -> StridedSliceMut<'a, T, E, DynStride> {
        self.recast_or_panic()
    }

    #[inline]
    pub fn into_dyn(self) -> StridedSliceMut<'a, T, Dyn, DynStride> {
        self.recast_or_panic()
    }

    /// See [`StridedSlice::try_into_static`].
    ///
    /// # Errors
    /// Returns [`StridedError::ExtentMismatch`] or
    /// [`StridedError::StrideMismatch`] if the geometry disagrees.
    pub fn try_into_static<R: Extent, Q: Stride>(self) -> Result<StridedSliceMut<'a, T, R, Q>> {
        match self.raw.recast::<R, Q>() {
            Some(raw) => Ok(self.derive(raw)),
            None => Err(recast_error::<R, Q>(self.len(), self.stride())),
        }
    }

    #[inline]
    fn recast_or_panic<R: Extent, Q: Stride>(self) -> StridedSliceMut<'a, T, R, Q> {
        match self.raw.recast::<R, Q>() {
            Some(raw) => self.derive(raw),
            None => panic_geometry("widening conversion rejected"),
        }
    }
}

impl<T, E: Extent, S: Stride> Default for StridedSliceMut<'_, T, E, S> {
    /// An empty view. Only available for a `Dyn` or `Const<0>` extent.
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

impl<T, E: Extent, S: Stride> Index<usize> for StridedSliceMut<'_, T, E, S> {
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

impl<T, E: Extent, S: Stride> IndexMut<usize> for StridedSliceMut<'_, T, E, S> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic_bounds_check(index, len),
        }
    }
}

impl<'a, T, E: Extent, S: Stride> IntoIterator for StridedSliceMut<'a, T, E, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        // SAFETY: `self` is consumed, handing its exclusive access to the iterator.
        unsafe { IterMut::new(self.raw) }
    }
}

impl<'b, T, E: Extent, S: Stride> IntoIterator for &'b StridedSliceMut<'_, T, E, S> {
    type Item = &'b T;
    type IntoIter = Iter<'b, T>;

    #[inline]
    fn into_iter(self) -> Iter<'b, T> {
        self.iter()
    }
}

impl<'b, T, E: Extent, S: Stride> IntoIterator for &'b mut StridedSliceMut<'_, T, E, S> {
    type Item = &'b mut T;
    type IntoIter = IterMut<'b, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'b, T> {
        self.iter_mut()
    }
}

// ============================================================================
// Construction and conversion via `From`
// ============================================================================

impl<'a, T> From<&'a mut [T]> for StridedSliceMut<'a, T> {
    #[inline]
    fn from(data: &'a mut [T]) -> Self {
        Self::from_slice_mut(data)
    }
}

impl<'a, T> From<&'a mut Vec<T>> for StridedSliceMut<'a, T> {
    #[inline]
    fn from(data: &'a mut Vec<T>) -> Self {
        Self::from_slice_mut(data)
    }
}

impl<'a, T, const N: usize> From<&'a mut [T; N]> for StridedSliceMut<'a, T, Const<N>, Unit> {
    #[inline]
    fn from(data: &'a mut [T; N]) -> Self {
        Self::from_array_mut(data)
    }
}

impl<'a, T, E: Extent, S: Stride> From<StridedSliceMut<'a, T, E, S>> for StridedSlice<'a, T, E, S> {
    #[inline]
    fn from(view: StridedSliceMut<'a, T, E, S>) -> Self {
        view.into_slice()
    }
}

impl<'a, T, S: Stride, const N: usize> From<StridedSliceMut<'a, T, Const<N>, S>>
    for StridedSliceMut<'a, T, Dyn, S>
{
    #[inline]
    fn from(view: StridedSliceMut<'a, T, Const<N>, S>) -> Self {
        view.into_dyn_extent()
    }
}

impl<'a, T, E: Extent, const Q: isize> From<StridedSliceMut<'a, T, E, ConstStride<Q>>>
    for StridedSliceMut<'a, T, E, DynStride>
{
    #[inline]
    fn from(view: StridedSliceMut<'a, T, E, ConstStride<Q>>) -> Self {
        view.into_dyn_stride()
    }
}

impl<'a, T, const N: usize, const Q: isize>
    From<StridedSliceMut<'a, T, Const<N>, ConstStride<Q>>> for StridedSliceMut<'a, T, Dyn, DynStride>
{
    #[inline]
    fn from(view: StridedSliceMut<'a, T, Const<N>, ConstStride<Q>>) -> Self {
        view.into_dyn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_mut_writes_through() {
        let mut data = vec![0; 5];
        {
            let mut view = StridedSliceMut::from_slice_mut(&mut data);
            for (i, elem) in view.iter_mut().enumerate() {
                *elem = i * 10;
            }
            *view.back_mut() = 99;
        }
        assert_eq!(data, vec![0, 10, 20, 30, 99]);
    }

    #[test]
    fn test_strided_writes() {
        let mut data = vec![0; 10];
        let mut view = StridedSliceMut::new(&mut data, 4, 3).unwrap();
        view[0] = 1;
        view[3] = 4;
        *view.front_mut() += 10;
        assert_eq!(view.get(4), None);
        assert_eq!(view.get_mut(4), None);
        assert_eq!(data, vec![11, 0, 0, 0, 0, 0, 0, 0, 0, 4]);
    }

    #[test]
    fn test_split_at_mut_disjoint() {
        let mut data: Vec<i32> = (0..10).collect();
        let view = StridedSliceMut::from_slice_mut(&mut data).skip(2);
        let (mut head, mut tail) = view.split_at_mut(2);
        head.fill(-1);
        for elem in tail.iter_mut() {
            *elem *= 100;
        }
        assert_eq!(data, vec![-1, 1, -1, 3, 400, 5, 600, 7, 800, 9]);
    }

    #[test]
    fn test_reversed_mut() {
        let mut data = [1, 2, 3, 4];
        let mut rev = StridedSliceMut::from_array_mut(&mut data).reversed();
        rev[0] = 40;
        assert_eq!(rev.stride(), -1);
        assert_eq!(rev.as_slice(), [40, 3, 2, 1]);
        assert_eq!(data, [1, 2, 3, 40]);
    }

    #[test]
    fn test_copy_from() {
        let src_data: Vec<i32> = (0..10).collect();
        let src = StridedSlice::from_slice(&src_data).skip(3);
        let mut dst_data = vec![0; 8];
        let mut dst = StridedSliceMut::new(&mut dst_data, 4, 2).unwrap();
        dst.copy_from(&src).unwrap();
        assert_eq!(
            dst.copy_from(&src.first(2)).unwrap_err(),
            StridedError::LengthMismatch(4, 2)
        );
        assert_eq!(dst_data, vec![0, 0, 3, 0, 6, 0, 9, 0]);
    }

    #[test]
    fn test_reborrow_then_subview() {
        let mut data: Vec<i32> = (0..6).collect();
        let mut view = StridedSliceMut::from_slice_mut(&mut data);
        view.reborrow().drop_first(4).fill(0);
        view.reborrow().first(1).fill(9);
        assert_eq!(view.as_slice(), [9, 1, 2, 3, 0, 0]);
    }

    #[test]
    fn test_into_slice_and_widening() {
        let mut data = [5u8; 6];
        let view = StridedSliceMut::from_array_mut(&mut data);
        let fixed: StridedSliceMut<'_, u8, Const<3>, ConstStride<2>> =
            view.skip_const::<2, _, _>();
        let ptr = fixed.as_ptr();
        let widened: StridedSliceMut<'_, u8, Dyn, DynStride> = fixed.into();
        assert_eq!(widened.as_ptr(), ptr);
        assert_eq!(widened.len(), 3);
        assert_eq!(widened.stride(), 2);
        let read_only: StridedSlice<'_, u8, Dyn, DynStride> = widened.into();
        assert_eq!(read_only, [5, 5, 5]);
    }

    #[test]
    fn test_const_forms_mut() {
        let mut data = [0i32; 8];
        {
            let view = StridedSliceMut::from_array_mut(&mut data);
            let mut tail: StridedSliceMut<'_, i32, Const<6>, Unit> =
                view.drop_first_const::<2, _>();
            tail.last_const::<2>().fill(7);
        }
        assert_eq!(data, [0, 0, 0, 0, 0, 0, 7, 7]);
    }

    #[test]
    fn test_cursor_mut_walk() {
        let mut data = vec![0; 6];
        let mut view = StridedSliceMut::new(&mut data, 3, 2).unwrap();
        let len = view.len() as isize;
        let mut c = view.begin_mut();
        let end = c + len;
        let mut n = 1;
        while c != end {
            unsafe { *c.get_mut() = n };
            n += 1;
            c.inc();
        }
        assert_eq!(data, vec![1, 0, 2, 0, 3, 0]);
    }

    #[test]
    fn test_default_mut_is_empty() {
        let mut view: StridedSliceMut<'_, i32> = StridedSliceMut::default();
        assert!(view.is_empty());
        assert!(view.iter_mut().next().is_none());
        assert_eq!(view.first_elem_mut(), None);
    }
}
