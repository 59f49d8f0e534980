//! Conditional map: `filter` and `map` fused into one pass.

use std::iter::FusedIterator;

/// Pushes `op(x)` into `out` for every `x` in `input` accepted by `pred`.
///
/// Inputs are visited once, in order, and the relative order of the accepted elements is
/// preserved. Returns how many outputs were produced.
pub fn transform_if<I, O, P, F, U>(input: I, out: &mut O, pred: P, op: F) -> usize
where
    I: IntoIterator,
    O: Extend<U>,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
{
    let mut produced = 0usize;
    out.extend(input.into_iter().transform_if(pred, op).inspect(|_| produced += 1));
    produced
}

/// Iterator returned by [`TransformIfExt::transform_if`].
#[derive(Debug, Clone)]
pub struct TransformIf<I, P, F> {
    iter: I,
    pred: P,
    op: F,
}

impl<I, P, F, U> Iterator for TransformIf<I, P, F>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        loop {
            let item = self.iter.next()?;
            if (self.pred)(&item) {
                return Some((self.op)(item));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

impl<I, P, F, U> FusedIterator for TransformIf<I, P, F>
where
    I: FusedIterator,
    P: FnMut(&I::Item) -> bool,
    F: FnMut(I::Item) -> U,
{
}

pub trait TransformIfExt: Iterator + Sized {
    /// Lazily maps the elements accepted by `pred` through `op`.
    fn transform_if<P, F, U>(self, pred: P, op: F) -> TransformIf<Self, P, F>
    where
        P: FnMut(&Self::Item) -> bool,
        F: FnMut(Self::Item) -> U,
    {
        TransformIf {
            iter: self,
            pred,
            op,
        }
    }
}

impl<I: Iterator> TransformIfExt for I {}
