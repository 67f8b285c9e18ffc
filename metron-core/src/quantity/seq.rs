use core::cmp::Ordering;

use super::Quantity;
use crate::Number;

/// Adds up a sequence of quantities; an empty sequence sums to zero.
#[must_use]
pub fn sum<N: Number, U>(quantities: impl IntoIterator<Item = Quantity<N, U>>) -> Quantity<N, U> {
    quantities.into_iter().sum()
}

/// Returns the smallest quantity, or [`None`] if the sequence is empty.
///
/// Of several equal smallest quantities, the first one is returned. A NaN is never picked over
/// an earlier non-NaN quantity, but a leading NaN is returned as is. Unlike [`sort`], NaN is not
/// moved out of the way.
#[must_use]
pub fn minimum<N: Number, U>(
    quantities: impl IntoIterator<Item = Quantity<N, U>>,
) -> Option<Quantity<N, U>> {
    quantities.into_iter().reduce(Quantity::min)
}

/// Returns the largest quantity, or [`None`] if the sequence is empty.
///
/// Of several equal largest quantities, the first one is returned. NaN is handled as in
/// [`minimum`].
#[must_use]
pub fn maximum<N: Number, U>(
    quantities: impl IntoIterator<Item = Quantity<N, U>>,
) -> Option<Quantity<N, U>> {
    quantities.into_iter().reduce(Quantity::max)
}

/// Sorts quantities in ascending order.
///
/// The sort is stable. NaN values are placed after every other value.
pub fn sort<N: Number, U>(quantities: &mut [Quantity<N, U>]) {
    quantities.sort_by(|a, b| nan_last(a.value, b.value));
}

/// Sorts items in ascending order of a quantity-valued key.
///
/// The sort is stable. Items whose key is NaN are placed after every other item.
pub fn sort_by_key<T, N: Number, U>(items: &mut [T], mut key: impl FnMut(&T) -> Quantity<N, U>) {
    items.sort_by(|a, b| nan_last(key(a).value, key(b).value));
}

// `x != x` only holds for NaN
#[allow(clippy::eq_op)]
fn nan_last<N: Number>(a: N, b: N) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a != a, b != b) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            _ => Ordering::Less,
        },
    }
}
