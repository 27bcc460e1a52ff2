//! Distance functions used by the neighborhood query.
//!
//! DBSCAN only ever evaluates the predicate `distance(a, b) <= eps`, so any
//! non-negative function works. Symmetry is assumed for intuitive clusters but
//! never checked, and neither is the triangle inequality.

/// A distance between two points of type `P`.
///
/// Implemented for every closure `Fn(&P, &P) -> f64`, so callers can pass an
/// ad-hoc function without defining a type:
///
/// ```rust
/// use denscan::cluster::Distance;
///
/// let manhattan = |a: &[f64; 2], b: &[f64; 2]| (a[0] - b[0]).abs() + (a[1] - b[1]).abs();
/// assert_eq!(manhattan.distance(&[0.0, 0.0], &[1.0, 2.0]), 3.0);
/// ```
pub trait Distance<P: ?Sized> {
    /// Distance between `a` and `b`. Must be non-negative.
    fn distance(&self, a: &P, b: &P) -> f64;
}

impl<P, F> Distance<P> for F
where
    P: ?Sized,
    F: Fn(&P, &P) -> f64 + ?Sized,
{
    #[inline]
    fn distance(&self, a: &P, b: &P) -> f64 {
        self(a, b)
    }
}

/// Euclidean (L2) distance over dense coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

#[inline]
fn squared_euclidean<T: Copy + Into<f64>>(a: &[T], b: &[T]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x.into() - y.into();
            d * d
        })
        .sum()
}

macro_rules! impl_euclidean {
    ($($t:ty),*) => {
        $(
            impl Distance<[$t]> for Euclidean {
                #[inline]
                fn distance(&self, a: &[$t], b: &[$t]) -> f64 {
                    squared_euclidean(a, b).sqrt()
                }
            }

            impl Distance<Vec<$t>> for Euclidean {
                #[inline]
                fn distance(&self, a: &Vec<$t>, b: &Vec<$t>) -> f64 {
                    squared_euclidean(a, b).sqrt()
                }
            }

            impl<const N: usize> Distance<[$t; N]> for Euclidean {
                #[inline]
                fn distance(&self, a: &[$t; N], b: &[$t; N]) -> f64 {
                    squared_euclidean(a, b).sqrt()
                }
            }
        )*
    };
}

impl_euclidean!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(Euclidean.distance(&[0.0f64, 0.0], &[3.0, 4.0]), 5.0);
        assert_eq!(Euclidean.distance(&vec![1.0f32, 1.0], &vec![1.0, 1.0]), 0.0);

        let a: &[f64] = &[1.0, 2.0, 2.0];
        let b: &[f64] = &[0.0, 0.0, 0.0];
        assert_eq!(Euclidean.distance(a, b), 3.0);
    }

    #[test]
    fn test_closure_distance() {
        let abs = |a: &i32, b: &i32| f64::from((a - b).abs());
        assert_eq!(abs.distance(&3, &-2), 5.0);
    }
}
