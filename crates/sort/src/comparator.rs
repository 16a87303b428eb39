use std::cmp::Ordering;

/// Order relation for the sorts. An inconsistent one still terminates, in
/// unspecified order.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order given by `Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[inline]
pub(crate) fn greater<T: ?Sized, C: Comparator<T> + ?Sized>(cmp: &C, a: &T, b: &T) -> bool {
    cmp.compare(a, b) == Ordering::Greater
}
