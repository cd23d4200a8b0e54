//! Random-access cursors stepping through a strided slice.
//!
//! A cursor is the base pointer of the view it came from, the view's step,
//! and a logical position. Moving a cursor never touches memory; only
//! dereferencing does, and that is `unsafe` because a cursor may sit on the
//! one-past-the-end position or anywhere else arithmetic has taken it.
//!
//! Cursor arithmetic is in logical elements: `cursor += n` moves the position
//! by `n`, which is `n * step` elements in memory, and `a - b` is the number
//! of steps between them. Positions are tracked directly, so distances stay
//! exact for zero-sized elements and for strides whose byte span exceeds the
//! address space. Cursors compare by position, which is logical order for
//! any stride sign. Comparing or subtracting cursors from different views is
//! meaningless.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Read-only cursor over a strided slice.
pub struct Cursor<'a, T> {
    base: *const T,
    step: isize,
    pos: isize,
    _marker: PhantomData<&'a T>,
}

/// Cursor over a mutable strided slice.
pub struct CursorMut<'a, T> {
    base: *mut T,
    step: isize,
    pos: isize,
    _marker: PhantomData<&'a mut T>,
}

// SAFETY: a `Cursor` grants at most shared access, like `&T`.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

// SAFETY: a `CursorMut` grants at most exclusive access, like `&mut T`.
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

macro_rules! impl_cursor {
    ($name:ident, $ptr:ty) => {
        impl<'a, T> $name<'a, T> {
            /// Cursor on the first element of a view starting at `base`.
            #[inline]
            pub(crate) fn new(base: $ptr, step: isize) -> Self {
                debug_assert!(step != 0, "cursor with zero step");
                Self {
                    base,
                    step,
                    pos: 0,
                    _marker: PhantomData,
                }
            }

            /// Step between logically consecutive elements.
            #[inline]
            pub fn step(&self) -> isize {
                self.step
            }

            /// Current address.
            #[inline]
            pub fn as_ptr(&self) -> *const T {
                self.base.wrapping_offset(self.pos.wrapping_mul(self.step)) as *const T
            }

            /// Advance by one logical element.
            #[inline]
            pub fn inc(&mut self) -> &mut Self {
                self.pos = self.pos.wrapping_add(1);
                self
            }

            /// Retreat by one logical element.
            #[inline]
            pub fn dec(&mut self) -> &mut Self {
                self.pos = self.pos.wrapping_sub(1);
                self
            }

            /// Number of logical steps from `origin` to `self`.
            #[inline]
            pub fn offset_from(&self, origin: &Self) -> isize {
                debug_assert!(
                    self.base == origin.base && self.step == origin.step,
                    "cursors from different views"
                );
                self.pos.wrapping_sub(origin.pos)
            }

            /// Reference to the current element.
            ///
            /// # Safety
            /// The cursor must be on an element of the view it came from.
            #[inline]
            pub unsafe fn get(&self) -> &'a T {
                self.at(0)
            }

            /// Reference to the element `n` logical steps ahead (`cursor[n]`).
            ///
            /// # Safety
            /// The target position must be an element of the view the cursor
            /// came from.
            #[inline]
            pub unsafe fn at(&self, n: isize) -> &'a T {
                &*self.base.offset((self.pos + n) * self.step)
            }
        }

        impl<T> Clone for $name<'_, T> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<'_, T> {}

        impl<T> AddAssign<isize> for $name<'_, T> {
            #[inline]
            fn add_assign(&mut self, n: isize) {
                self.pos = self.pos.wrapping_add(n);
            }
        }

        impl<T> SubAssign<isize> for $name<'_, T> {
            #[inline]
            fn sub_assign(&mut self, n: isize) {
                self.pos = self.pos.wrapping_sub(n);
            }
        }

        impl<T> Add<isize> for $name<'_, T> {
            type Output = Self;

            #[inline]
            fn add(mut self, n: isize) -> Self {
                self += n;
                self
            }
        }

        impl<T> Sub<isize> for $name<'_, T> {
            type Output = Self;

            #[inline]
            fn sub(mut self, n: isize) -> Self {
                self -= n;
                self
            }
        }

        impl<T> Sub for $name<'_, T> {
            type Output = isize;

            #[inline]
            fn sub(self, origin: Self) -> isize {
                self.offset_from(&origin)
            }
        }

        impl<T> PartialEq for $name<'_, T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.base == other.base && self.pos == other.pos
            }
        }

        impl<T> Eq for $name<'_, T> {}

        impl<T> PartialOrd for $name<'_, T> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<T> Ord for $name<'_, T> {
            #[inline]
            fn cmp(&self, other: &Self) -> Ordering {
                (self.base, self.pos).cmp(&(other.base, other.pos))
            }
        }

        impl<T> fmt::Debug for $name<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("ptr", &self.as_ptr())
                    .field("step", &self.step)
                    .field("pos", &self.pos)
                    .finish()
            }
        }
    };
}

impl_cursor!(Cursor, *const T);
impl_cursor!(CursorMut, *mut T);

impl<'a, T> CursorMut<'a, T> {
    /// Mutable reference to the current element.
    ///
    /// # Safety
    /// The cursor must be on an element of the view it came from, and no other
    /// reference to that element may be live for `'a`.
    #[inline]
    pub unsafe fn get_mut(&self) -> &'a mut T {
        self.at_mut(0)
    }

    /// Mutable reference to the element `n` logical steps ahead.
    ///
    /// # Safety
    /// As for [`CursorMut::get_mut`], at the target position.
    #[inline]
    pub unsafe fn at_mut(&self, n: isize) -> &'a mut T {
        &mut *self.base.offset((self.pos + n) * self.step)
    }

    /// Read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'a, T> {
        Cursor {
            base: self.base as *const T,
            step: self.step,
            pos: self.pos,
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stepping() {
        let data: Vec<i32> = (0..10).collect();
        let mut c = Cursor::new(data.as_ptr(), 3);
        unsafe {
            assert_eq!(*c.get(), 0);
            c.inc();
            assert_eq!(*c.get(), 3);
            c += 2;
            assert_eq!(*c.get(), 9);
            c.dec();
            assert_eq!(*c.get(), 6);
            c -= 2;
            assert_eq!(*c.get(), 0);
            assert_eq!(*c.at(1), 3);
            assert_eq!(*(c + 3).get(), 9);
        }
    }

    #[test]
    fn test_cursor_distance_and_order() {
        let data: Vec<i32> = (0..10).collect();
        let begin = Cursor::new(data.as_ptr(), 2);
        let end = begin + 5;
        assert_eq!(end - begin, 5);
        assert_eq!(begin - end, -5);
        assert!(begin < end);
        assert_eq!(end - 5, begin);
        assert_eq!(begin.step(), 2);
    }

    #[test]
    fn test_cursor_negative_step() {
        let data: Vec<i32> = (0..6).collect();
        let last = unsafe { data.as_ptr().add(5) };
        let mut c = Cursor::new(last, -1);
        let start = c;
        unsafe {
            assert_eq!(*c.get(), 5);
            c.inc();
            assert_eq!(*c.get(), 4);
            assert_eq!(*c.at(2), 2);
        }
        assert_eq!(c - start, 1);
        // logical order, although the address descends
        assert!(c > start);
        assert!(c.as_ptr() < start.as_ptr());
    }

    #[test]
    fn test_cursor_mut_writes() {
        let mut data = vec![0i32; 6];
        let mut c = CursorMut::new(data.as_mut_ptr(), 2);
        for v in 1..=3 {
            unsafe { *c.get_mut() = v };
            c.inc();
        }
        assert_eq!(data, vec![1, 0, 2, 0, 3, 0]);
    }

    #[test]
    fn test_zero_sized_positions_are_distinct() {
        let data = [(); 4];
        let begin = Cursor::new(data.as_ptr(), 1);
        let end = begin + 4;
        assert_ne!(begin, end);
        assert_eq!(end - begin, 4);
        let mut c = begin;
        let mut visited = 0;
        while c != end {
            unsafe { c.get() };
            visited += 1;
            c.inc();
        }
        assert_eq!(visited, 4);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_distance_with_huge_step() {
        let data = [7i32];
        let begin = Cursor::new(data.as_ptr(), 1 << 61);
        let end = begin + 1;
        assert_eq!(end - begin, 1);
        assert_eq!(begin - end, -1);
        assert!(begin < end);
        assert_eq!(unsafe { *begin.get() }, 7);
    }

    #[test]
    fn test_as_cursor_keeps_position() {
        let mut data = vec![1, 2, 3, 4];
        let mut c = CursorMut::new(data.as_mut_ptr(), 2);
        c.inc();
        let read = c.as_cursor();
        assert_eq!(unsafe { *read.get() }, 3);
        assert_eq!(read.as_ptr(), c.as_ptr());
    }
}
