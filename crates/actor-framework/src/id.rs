//! # Id Generation
//!
//! A [`ResourceActor`](crate::ResourceActor) asks its [`IdGenerator`] for a
//! fresh id on every `Create`. Keeping generation behind one trait lets a
//! store switch strategies (counter, random token, ...) without touching the
//! entity or any caller.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::marker::PhantomData;
use std::ops::Range;

/// Produces ids for newly created entities.
///
/// The actor owns its generator exclusively, so implementations may keep
/// mutable state without synchronisation.
pub trait IdGenerator<Id>: Send {
    fn next_id(&mut self) -> Id;
}

impl<Id, F> IdGenerator<Id> for F
where
    F: FnMut() -> Id + Send,
{
    fn next_id(&mut self) -> Id {
        self()
    }
}

/// Monotonic counter starting at 1. Never repeats within a process.
pub struct SequentialIds<Id> {
    next: u64,
    _id: PhantomData<fn() -> Id>,
}

impl<Id> SequentialIds<Id> {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first,
            _id: PhantomData,
        }
    }
}

impl<Id> Default for SequentialIds<Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Id: From<u64>> IdGenerator<Id> for SequentialIds<Id> {
    fn next_id(&mut self) -> Id {
        let id = self.next;
        self.next += 1;
        Id::from(id)
    }
}

/// Uniformly random numbers drawn from a range.
///
/// Collisions are possible once the range fills up; the actor rejects a
/// colliding id with [`FrameworkError::Conflict`](crate::FrameworkError::Conflict)
/// rather than overwriting.
pub struct RandomIds<Id> {
    rng: StdRng,
    range: Range<u64>,
    _id: PhantomData<fn() -> Id>,
}

impl<Id> RandomIds<Id> {
    pub fn new(range: Range<u64>) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
            _id: PhantomData,
        }
    }

    /// Deterministic sequence, for tests.
    pub fn with_seed(seed: u64, range: Range<u64>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
            _id: PhantomData,
        }
    }
}

impl<Id: From<u64>> IdGenerator<Id> for RandomIds<Id> {
    fn next_id(&mut self) -> Id {
        Id::from(self.rng.gen_range(self.range.clone()))
    }
}
