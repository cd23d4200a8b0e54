//! Compile-time or runtime extent and stride storage.
//!
//! A strided slice carries two geometric quantities besides its base pointer:
//! the element count (extent) and the signed step between logically
//! consecutive elements (stride). Each can be fixed by the type or decided at
//! runtime:
//!
//! - [`Const<N>`] / [`ConstStride<S>`]: zero-sized; the value is the type.
//! - [`Dyn`] / [`DynStride`]: one stored scalar.
//!
//! A `StridedSlice<'_, T, Const<8>, Unit>` is therefore a single pointer wide,
//! while `StridedSlice<'_, T, Dyn, DynStride>` stores both quantities.

use std::fmt;

mod sealed {
    pub trait Sealed {}
}

/// Element count of a strided slice, fixed by the type or stored at runtime.
///
/// This trait is sealed: the view's soundness depends on `get` returning the
/// value that was validated at construction.
pub trait Extent: Copy + fmt::Debug + sealed::Sealed {
    /// `Some(n)` when the extent is fixed by the type.
    const STATIC: Option<usize>;

    /// Build the extent for `len` elements.
    ///
    /// Returns `None` if the type fixes a different count.
    fn try_new(len: usize) -> Option<Self>;

    /// The element count.
    fn get(&self) -> usize;
}

/// Signed element step of a strided slice, fixed by the type or stored at
/// runtime. A stride is never zero.
///
/// This trait is sealed for the same reason as [`Extent`].
pub trait Stride: Copy + fmt::Debug + sealed::Sealed {
    /// `Some(s)` when the stride is fixed by the type.
    const STATIC: Option<isize>;

    /// Build the stride for `step`.
    ///
    /// Returns `None` for a zero step, or if the type fixes a different step.
    fn try_new(step: isize) -> Option<Self>;

    /// The signed step in elements.
    fn get(&self) -> isize;
}

/// Extent known at compile time.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// Extent decided at runtime.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dyn(usize);

/// Stride known at compile time.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstStride<const S: isize>;

/// Stride decided at runtime.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynStride(isize);

/// Contiguous stride, the default for slices built from contiguous storage.
pub type Unit = ConstStride<1>;

/// Reversed contiguous stride.
pub type Reverse = ConstStride<{ -1 }>;

impl<const N: usize> sealed::Sealed for Const<N> {}
impl sealed::Sealed for Dyn {}
impl<const S: isize> sealed::Sealed for ConstStride<S> {}
impl sealed::Sealed for DynStride {}

impl<const N: usize> Extent for Const<N> {
    const STATIC: Option<usize> = Some(N);

    #[inline]
    fn try_new(len: usize) -> Option<Self> {
        (len == N).then_some(Const)
    }

    #[inline(always)]
    fn get(&self) -> usize {
        N
    }
}

impl Extent for Dyn {
    const STATIC: Option<usize> = None;

    #[inline]
    fn try_new(len: usize) -> Option<Self> {
        Some(Dyn(len))
    }

    #[inline(always)]
    fn get(&self) -> usize {
        self.0
    }
}

impl<const S: isize> Stride for ConstStride<S> {
    const STATIC: Option<isize> = Some(S);

    #[inline]
    fn try_new(step: isize) -> Option<Self> {
        (step != 0 && step == S).then_some(ConstStride)
    }

    #[inline(always)]
    fn get(&self) -> isize {
        S
    }
}

impl Stride for DynStride {
    const STATIC: Option<isize> = None;

    #[inline]
    fn try_new(step: isize) -> Option<Self> {
        (step != 0).then_some(DynStride(step))
    }

    #[inline(always)]
    fn get(&self) -> isize {
        self.0
    }
}

impl<const N: usize> fmt::Debug for Const<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Const<{N}>")
    }
}

impl fmt::Debug for Dyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dyn({})", self.0)
    }
}

impl<const S: isize> fmt::Debug for ConstStride<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConstStride<{S}>")
    }
}

impl fmt::Debug for DynStride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynStride({})", self.0)
    }
}

/// Extent for a count the caller has already checked against
/// [`Extent::STATIC`].
#[inline]
#[track_caller]
pub(crate) fn extent_from<E: Extent>(len: usize) -> E {
    debug_assert!(
        E::STATIC.map_or(true, |n| n == len),
        "extent {len} does not match static extent {:?}",
        E::STATIC
    );
    match E::try_new(len) {
        Some(extent) => extent,
        None => crate::panic_geometry("extent does not match its static value"),
    }
}

/// Stride for a non-zero step the caller has already checked against
/// [`Stride::STATIC`].
#[inline]
#[track_caller]
pub(crate) fn stride_from<S: Stride>(step: isize) -> S {
    match S::try_new(step) {
        Some(stride) => stride,
        None => crate::panic_geometry("stride is zero or does not match its static value"),
    }
}

// ============================================================================
// Compile-time geometry rules for the const-argument subview forms
// ============================================================================
//
// Each rule takes the input axis and the caller-named output axis. A static
// input must produce the exact static result; a dynamic input must produce the
// dynamic marker. These run inside `const { assert!(..) }` blocks, so a
// violation is a compile error at the call site.

/// `first_const::<N>` / `last_const::<N>`: `N` must fit a static input.
pub(crate) const fn fits(input: Option<usize>, count: usize) -> bool {
    match input {
        Some(n) => count <= n,
        None => true,
    }
}

/// `drop_first_const::<K>` / `drop_last_const::<K>`.
pub(crate) const fn dropped(input: Option<usize>, output: Option<usize>, count: usize) -> bool {
    match (input, output) {
        (Some(n), Some(m)) => count <= n && m == n - count,
        (None, None) => true,
        _ => false,
    }
}

/// `skip_const::<K>`, extent axis: `ceil(n / k)` elements remain.
pub(crate) const fn skipped_extent(
    input: Option<usize>,
    output: Option<usize>,
    skip: usize,
) -> bool {
    if skip == 0 {
        return false;
    }
    match (input, output) {
        (Some(n), Some(m)) => m == n.div_ceil(skip),
        (None, None) => true,
        _ => false,
    }
}

/// `skip_const::<K>`, stride axis: the step is multiplied by `k`.
pub(crate) const fn skipped_stride(
    input: Option<isize>,
    output: Option<isize>,
    skip: usize,
) -> bool {
    if skip == 0 || skip > isize::MAX as usize {
        return false;
    }
    match (input, output) {
        (Some(s), Some(q)) => match s.checked_mul(skip as isize) {
            Some(product) => q == product,
            None => false,
        },
        (None, None) => true,
        _ => false,
    }
}

/// A static stride of zero can never describe a view.
pub(crate) const fn nonzero_stride(stride: Option<isize>) -> bool {
    match stride {
        Some(s) => s != 0,
        None => true,
    }
}

/// `Default` is only available for an empty or dynamic extent.
pub(crate) const fn empty_or_dynamic(extent: Option<usize>) -> bool {
    match extent {
        Some(n) => n == 0,
        None => true,
    }
}
