//! Element-wise equality and hashing.
//!
//! Two views are equal when they have the same length and equal elements in
//! logical order. Extent, stride and mutability play no part, so a stride-2
//! view over `[1, 9, 2, 9, 3]` equals a contiguous `[1, 2, 3]`.

use std::hash::{Hash, Hasher};

use crate::extent::{Extent, Stride};
use crate::view::StridedSlice;
use crate::view_mut::StridedSliceMut;

#[inline]
fn eq_elems<'x, 'y, T, U, A, B>(lhs: A, rhs: B) -> bool
where
    T: PartialEq<U> + 'x,
    U: 'y,
    A: ExactSizeIterator<Item = &'x T>,
    B: ExactSizeIterator<Item = &'y U>,
{
    lhs.len() == rhs.len() && lhs.zip(rhs).all(|(a, b)| a == b)
}

impl<T, U, E1, S1, E2, S2> PartialEq<StridedSlice<'_, U, E2, S2>> for StridedSlice<'_, T, E1, S1>
where
    T: PartialEq<U>,
    E1: Extent,
    S1: Stride,
    E2: Extent,
    S2: Stride,
{
    #[inline]
    fn eq(&self, other: &StridedSlice<'_, U, E2, S2>) -> bool {
        eq_elems(self.iter(), other.iter())
    }
}

impl<T, U, E1, S1, E2, S2> PartialEq<StridedSliceMut<'_, U, E2, S2>> for StridedSlice<'_, T, E1, S1>
where
    T: PartialEq<U>,
    E1: Extent,
    S1: Stride,
    E2: Extent,
    S2: Stride,
{
    #[inline]
    fn eq(&self, other: &StridedSliceMut<'_, U, E2, S2>) -> bool {
        eq_elems(self.iter(), other.iter())
    }
}

impl<T, U, E1, S1, E2, S2> PartialEq<StridedSlice<'_, U, E2, S2>> for StridedSliceMut<'_, T, E1, S1>
where
    T: PartialEq<U>,
    E1: Extent,
    S1: Stride,
    E2: Extent,
    S2: Stride,
{
    #[inline]
    fn eq(&self, other: &StridedSlice<'_, U, E2, S2>) -> bool {
        eq_elems(self.iter(), other.iter())
    }
}

impl<T, U, E1, S1, E2, S2> PartialEq<StridedSliceMut<'_, U, E2, S2>>
    for StridedSliceMut<'_, T, E1, S1>
where
    T: PartialEq<U>,
    E1: Extent,
    S1: Stride,
    E2: Extent,
    S2: Stride,
{
    #[inline]
    fn eq(&self, other: &StridedSliceMut<'_, U, E2, S2>) -> bool {
        eq_elems(self.iter(), other.iter())
    }
}

macro_rules! impl_eq_contiguous {
    ($view:ident) => {
        impl<T, U, E: Extent, S: Stride> PartialEq<[U]> for $view<'_, T, E, S>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U]) -> bool {
                eq_elems(self.iter(), other.iter())
            }
        }

        impl<T, U, E: Extent, S: Stride> PartialEq<&[U]> for $view<'_, T, E, S>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &&[U]) -> bool {
                eq_elems(self.iter(), other.iter())
            }
        }

        impl<T, U, E: Extent, S: Stride, const N: usize> PartialEq<[U; N]> for $view<'_, T, E, S>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U; N]) -> bool {
                eq_elems(self.iter(), other.iter())
            }
        }

        impl<T, U, E: Extent, S: Stride> PartialEq<Vec<U>> for $view<'_, T, E, S>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &Vec<U>) -> bool {
                eq_elems(self.iter(), other.iter())
            }
        }

        impl<T: Eq, E: Extent, S: Stride> Eq for $view<'_, T, E, S> {}

        impl<T: Hash, E: Extent, S: Stride> Hash for $view<'_, T, E, S> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                state.write_usize(self.len());
                for elem in self.iter() {
                    elem.hash(state);
                }
            }
        }
    };
}

impl_eq_contiguous!(StridedSlice);
impl_eq_contiguous!(StridedSliceMut);

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    use super::*;
    use crate::extent::{Const, Dyn, DynStride, Unit};

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_equal_across_layouts() {
        let spread = [1, 9, 2, 9, 3];
        let packed = [1, 2, 3];
        let strided = StridedSlice::new(&spread, 3, 2).unwrap();
        let contiguous = StridedSlice::from_array(&packed);
        assert_eq!(strided, contiguous);
        assert_eq!(contiguous, strided);
        assert_eq!(strided, packed);
        assert_eq!(strided, vec![1, 2, 3]);
        assert_eq!(strided, &packed[..]);
    }

    #[test]
    fn test_not_equal() {
        let data = [1, 2, 3, 4];
        let view = StridedSlice::from_slice(&data);
        assert_ne!(view, [1, 2, 3]);
        assert_ne!(view, [1, 2, 3, 5]);
        assert_ne!(view.first(3), view.last(3));
    }

    #[test]
    fn test_reversed_equals_reverse_order() {
        let data = [1, 2, 3];
        let rev = StridedSlice::from_slice(&data).reversed();
        assert_eq!(rev, [3, 2, 1]);
    }

    #[test]
    fn test_mut_and_read_only_compare() {
        let mut a = vec![4, 5, 6];
        let b = [4, 0, 5, 0, 6];
        let view_b: StridedSlice<'_, i32, Dyn, DynStride> = StridedSlice::new(&b, 3, 2).unwrap();
        let view_a = StridedSliceMut::from_slice_mut(&mut a);
        assert_eq!(view_a, view_b);
        assert_eq!(view_b, view_a);
        assert_eq!(view_a, [4, 5, 6]);
        assert_eq!(view_a, view_a.as_slice());
    }

    #[test]
    fn test_empty_views_equal() {
        let empty: StridedSlice<'_, i32, Const<0>, Unit> = StridedSlice::default();
        let data = [1, 2];
        let drained = StridedSlice::from_slice(&data).drop_first(2);
        assert_eq!(empty, drained);
        assert_eq!(empty, Vec::<i32>::new());
    }

    #[test]
    fn test_hash_follows_equality() {
        let spread = [7, 0, 8, 0, 9];
        let packed = [7, 8, 9];
        let strided = StridedSlice::new(&spread, 3, 2).unwrap().into_dyn();
        let contiguous = StridedSlice::from_slice(&packed).into_dyn();
        assert_eq!(hash_of(&strided), hash_of(&contiguous));

        let mut set = HashSet::new();
        set.insert(strided);
        assert!(set.contains(&contiguous));
    }
}
