//! Element iterators for strided slices.
//!
//! Both iterators walk a [`Cursor`]/[`CursorMut`] over the remaining logical
//! range and are double-ended, so `iter().rev()` is the reverse traversal.

use std::fmt;
use std::iter::FusedIterator;

use crate::cursor::{Cursor, CursorMut};
use crate::extent::{Extent, Stride};
use crate::raw::RawStrided;

/// Iterator over shared references to the elements of a strided slice.
pub struct Iter<'a, T> {
    front: Cursor<'a, T>,
    len: usize,
}

/// Iterator over mutable references to the elements of a strided slice.
pub struct IterMut<'a, T> {
    front: CursorMut<'a, T>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    /// # Safety
    /// `raw` must describe elements valid for shared access during `'a`.
    #[inline]
    pub(crate) unsafe fn new<E: Extent, S: Stride>(raw: RawStrided<T, E, S>) -> Self {
        Self {
            front: Cursor::new(raw.ptr().as_ptr(), raw.stride()),
            len: raw.len(),
        }
    }

    /// Cursor on the next element yielded from the front.
    #[inline]
    pub fn cursor(&self) -> Cursor<'a, T> {
        self.front
    }
}

impl<'a, T> IterMut<'a, T> {
    /// # Safety
    /// `raw` must describe elements valid for exclusive access during `'a`,
    /// and its stride must be non-zero.
    #[inline]
    pub(crate) unsafe fn new<E: Extent, S: Stride>(raw: RawStrided<T, E, S>) -> Self {
        Self {
            front: CursorMut::new(raw.ptr().as_ptr(), raw.stride()),
            len: raw.len(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: `len > 0`, so the front cursor is on an element.
        let item = unsafe { self.front.get() };
        self.front.inc();
        self.len -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.len {
            self.front += self.len as isize;
            self.len = 0;
            return None;
        }
        self.front += n as isize;
        self.len -= n;
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: `len` was > 0, so index `len` is the last remaining element.
        Some(unsafe { self.front.at(self.len as isize) })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        // SAFETY: the front cursor is on an element no earlier call has
        // yielded; a non-zero stride keeps elements disjoint.
        let item = unsafe { self.front.get_mut() };
        self.front.inc();
        self.len -= 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        if n >= self.len {
            self.front += self.len as isize;
            self.len = 0;
            return None;
        }
        self.front += n as isize;
        self.len -= n;
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.len
    }

    #[inline]
    fn last(mut self) -> Option<&'a mut T> {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: as in `next`, for the last remaining element.
        Some(unsafe { self.front.at_mut(self.len as isize) })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("step", &self.front.step())
            .field("remaining", &self.len)
            .finish()
    }
}

impl<T> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("step", &self.front.step())
            .field("remaining", &self.len)
            .finish()
    }
}
