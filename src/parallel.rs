//! Rayon parallel iteration over strided slices (feature `parallel`).

use rayon::iter::plumbing::{bridge_unindexed, Folder, UnindexedConsumer, UnindexedProducer};
use rayon::prelude::*;

use crate::extent::{Dyn, DynStride, Extent, Stride};
use crate::view::StridedSlice;
use crate::view_mut::StridedSliceMut;

/// Splits a read-only view in half until single elements remain.
struct Producer<'a, T> {
    view: StridedSlice<'a, T, Dyn, DynStride>,
}

impl<'a, T: Sync> UnindexedProducer for Producer<'a, T> {
    type Item = &'a T;

    fn split(self) -> (Self, Option<Self>) {
        let len = self.view.len();
        if len <= 1 {
            return (self, None);
        }
        let (left, right) = self.view.split_at(len / 2);
        (
            Producer { view: left },
            Some(Producer { view: right }),
        )
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.view.iter())
    }
}

/// Mutable counterpart of [`Producer`]; the halves are disjoint.
struct ProducerMut<'a, T> {
    view: StridedSliceMut<'a, T, Dyn, DynStride>,
}

impl<'a, T: Send> UnindexedProducer for ProducerMut<'a, T> {
    type Item = &'a mut T;

    fn split(self) -> (Self, Option<Self>) {
        let len = self.view.len();
        if len <= 1 {
            return (self, None);
        }
        let (left, right) = self.view.split_at_mut(len / 2);
        (
            ProducerMut { view: left },
            Some(ProducerMut { view: right }),
        )
    }

    fn fold_with<F>(self, folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        folder.consume_iter(self.view)
    }
}

/// Parallel iterator over shared references to the elements of a strided
/// slice.
pub struct ParIter<'a, T> {
    view: StridedSlice<'a, T, Dyn, DynStride>,
}

/// Parallel iterator over mutable references to the elements of a strided
/// slice.
pub struct ParIterMut<'a, T> {
    view: StridedSliceMut<'a, T, Dyn, DynStride>,
}

impl<'a, T: Sync> ParallelIterator for ParIter<'a, T> {
    type Item = &'a T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(Producer { view: self.view }, consumer)
    }
}

impl<'a, T: Send> ParallelIterator for ParIterMut<'a, T> {
    type Item = &'a mut T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(ProducerMut { view: self.view }, consumer)
    }
}

impl<'a, T: Sync, E: Extent, S: Stride> StridedSlice<'a, T, E, S> {
    /// Returns a parallel iterator over the elements.
    ///
    /// # Example
    /// ```
    /// use rayon::prelude::*;
    /// use strided_slice::StridedSlice;
    ///
    /// let data: Vec<f64> = (1..=100).map(f64::from).collect();
    /// let odd = StridedSlice::from_slice(&data).skip(2);
    /// let sum: f64 = odd.par_iter().sum();
    /// assert_eq!(sum, 2500.0);
    /// ```
    pub fn par_iter(&self) -> ParIter<'a, T> {
        ParIter {
            view: self.into_dyn(),
        }
    }
}

impl<'a, T: Send, E: Extent, S: Stride> StridedSliceMut<'a, T, E, S> {
    /// Returns a parallel iterator over mutable references to the elements.
    pub fn par_iter_mut(&mut self) -> ParIterMut<'_, T> {
        ParIterMut {
            view: self.reborrow().into_dyn(),
        }
    }
}

impl<'a, T: Sync, E: Extent, S: Stride> IntoParallelIterator for StridedSlice<'a, T, E, S> {
    type Item = &'a T;
    type Iter = ParIter<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter()
    }
}

impl<'a, T: Send, E: Extent, S: Stride> IntoParallelIterator for StridedSliceMut<'a, T, E, S> {
    type Item = &'a mut T;
    type Iter = ParIterMut<'a, T>;

    fn into_par_iter(self) -> Self::Iter {
        ParIterMut {
            view: self.into_dyn(),
        }
    }
}
