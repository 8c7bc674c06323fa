use std::sync::{
    Arc,
    Mutex,
    MutexGuard,
    PoisonError
};

use crate::math::function::mathfunction::MathFunction;
use crate::math::function::point::Point;

use super::tabulatedfunction::TabulatedFunction;
use super::tabulatedfunctionerror::TabulatedFunctionResult;

pub type SharedTabulatedFunction = Arc<Mutex<Box<dyn TabulatedFunction>>>;

/// Serializes every call on a wrapped tabulated function.
///
/// The mutex belongs to the wrapped storage, not to the wrapper: clones of
/// a wrapper, and wrappers built with [`Self::from_shared`] over the same
/// storage, all contend on one lock. Each call is atomic on its own; use
/// [`Self::do_synchronously`] when several calls must form one critical
/// section.
#[derive(Clone)]
pub struct SynchronizedTabulatedFunction {
    inner: SharedTabulatedFunction,
}

impl SynchronizedTabulatedFunction {
    pub fn new(function: Box<dyn TabulatedFunction>) -> SynchronizedTabulatedFunction {
        SynchronizedTabulatedFunction { inner: Arc::new(Mutex::new(function)) }
    }

    pub fn from_shared(inner: SharedTabulatedFunction) -> SynchronizedTabulatedFunction {
        SynchronizedTabulatedFunction { inner }
    }

    pub fn shared(&self) -> &SharedTabulatedFunction {
        &self.inner
    }

    // A panic inside another critical section cannot break the
    // strictly-increasing invariant (every mutation validates before it
    // writes), so the poisoned guard is still usable.
    fn lock(&self) -> MutexGuard<'_, Box<dyn TabulatedFunction>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `operation` while holding the lock once.
    pub fn do_synchronously<R>(&self, operation: impl FnOnce(&mut dyn TabulatedFunction) -> R) -> R {
        let mut guard = self.lock();
        operation(&mut **guard)
    }

    /// Copies every sample under one lock, then iterates the copy lock-free.
    ///
    /// Mutations made after this call are not visible to the iterator.
    pub fn iter(&self) -> std::vec::IntoIter<Point> {
        self.snapshot().into_iter()
    }

    pub fn snapshot(&self) -> Vec<Point> {
        self.lock().points()
    }
}

impl TabulatedFunction for SynchronizedTabulatedFunction {
    fn count(&self) -> usize {
        self.lock().count()
    }

    fn get_x(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.lock().get_x(index)
    }

    fn get_y(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.lock().get_y(index)
    }

    fn set_y(&mut self, index: usize, value: f64) -> TabulatedFunctionResult<()> {
        self.lock().set_y(index, value)
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        self.lock().index_of_x(x)
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.lock().index_of_y(y)
    }

    fn floor_index_of_x(&self, x: f64) -> usize {
        self.lock().floor_index_of_x(x)
    }

    fn first(&self) -> Point {
        self.lock().first()
    }

    fn last(&self) -> Point {
        self.lock().last()
    }

    fn segment(&self, index: usize) -> (Point, Point) {
        self.lock().segment(index)
    }

    fn insert(&mut self, x: f64, y: f64) -> TabulatedFunctionResult<()> {
        self.lock().insert(x, y)
    }

    fn remove(&mut self, index: usize) -> TabulatedFunctionResult<()> {
        self.lock().remove(index)
    }

    fn points(&self) -> Vec<Point> {
        self.snapshot()
    }

    fn left_bound(&self) -> f64 {
        self.lock().left_bound()
    }

    fn right_bound(&self) -> f64 {
        self.lock().right_bound()
    }
}

impl MathFunction for SynchronizedTabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        self.lock().apply(x)
    }
}

impl IntoIterator for &SynchronizedTabulatedFunction {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
