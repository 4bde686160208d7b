//! Pull-based walkers and their bridge to `Iterator`.

/// A traversal state object advanced one step at a time.
///
/// The walker does not hold the graph; the caller passes it as `context` on
/// every step. This keeps the graph free for other reads between steps.
pub trait Walker<Context> {
    /// Item produced per step.
    type Item;

    /// Advances one step. Returns `None` once the walk is exhausted.
    fn walk_next(&mut self, context: Context) -> Option<Self::Item>;

    /// Binds this walker to `context`, producing a standard iterator.
    fn iter(self, context: Context) -> WalkerIter<Self, Context>
    where
        Self: Sized,
        Context: Clone,
    {
        WalkerIter {
            walker: self,
            context,
        }
    }
}

impl<'a, C, W: ?Sized + Walker<C>> Walker<C> for &'a mut W {
    type Item = W::Item;

    #[inline]
    fn walk_next(&mut self, context: C) -> Option<Self::Item> {
        (**self).walk_next(context)
    }
}

/// A walker bound to its context.
#[derive(Clone, Debug)]
pub struct WalkerIter<W, C> {
    walker: W,
    context: C,
}

impl<W, C> WalkerIter<W, C>
where
    W: Walker<C>,
    C: Clone,
{
    /// The bound context.
    pub fn context(&self) -> C {
        self.context.clone()
    }

    /// The wrapped walker.
    pub fn inner_ref(&self) -> &W {
        &self.walker
    }

    /// The wrapped walker, mutably.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.walker
    }

    /// Unbinds the walker from its context.
    pub fn into_inner(self) -> W {
        self.walker
    }
}

impl<W, C> Iterator for WalkerIter<W, C>
where
    W: Walker<C>,
    C: Clone,
{
    type Item = W::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.walker.walk_next(self.context.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down from the context value, one step per call.
    struct Countdown {
        taken: usize,
    }

    impl Walker<usize> for Countdown {
        type Item = usize;

        fn walk_next(&mut self, from: usize) -> Option<usize> {
            if self.taken >= from {
                return None;
            }
            self.taken += 1;
            Some(from - self.taken)
        }
    }

    #[test]
    fn test_iter_drains_walker() {
        let out: Vec<_> = Countdown { taken: 0 }.iter(3).collect();
        assert_eq!(out, vec![2, 1, 0]);
    }

    #[test]
    fn test_walk_through_mut_ref_is_resumable() {
        let mut walker = Countdown { taken: 0 };
        assert_eq!((&mut walker).iter(4).next(), Some(3));
        // Stopping the pull loop leaves the walker where it was.
        assert_eq!(walker.walk_next(4), Some(2));
        let mut it = walker.iter(4);
        assert_eq!(it.context(), 4);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.inner_ref().taken, 3);
        it.inner_mut().taken = 4;
        assert_eq!(it.next(), None);
        assert_eq!(it.into_inner().taken, 4);
    }
}
