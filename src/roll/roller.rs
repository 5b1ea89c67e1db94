use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// Where die faces come from.
///
/// Every [Rng] is a `Roller`. Tests plug in a predictable sequence instead.
pub trait Roller {
    type Rolls<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// One face in `1..=faces`.
    fn roll_die(&mut self, faces: NonZeroUInt) -> UInt;

    /// `count` independent faces in `1..=faces`.
    fn roll_dice(&mut self, count: usize, faces: NonZeroUInt) -> Self::Rolls<'_>;
}

impl<R: Rng> Roller for R {
    type Rolls<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut R, UInt>>
    where
        R: 'a;

    fn roll_die(&mut self, faces: NonZeroUInt) -> UInt {
        self.gen_range(1..=faces.get())
    }

    fn roll_dice(&mut self, count: usize, faces: NonZeroUInt) -> Self::Rolls<'_> {
        Uniform::new_inclusive(1, faces.get())
            .sample_iter(self)
            .take(count)
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
