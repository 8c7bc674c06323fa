use crate::math::function::mathfunction::MathFunction;
use crate::math::function::point::Point;

use super::interpolation;
use super::tabulatedfunction::{
    sample_function,
    TabulatedFunction,
    SAMPLE_EPSILON
};
use super::tabulatedfunctionerror::{
    TabulatedFunctionError,
    TabulatedFunctionResult
};
use super::validation::validate_samples;

// ─────────────────────────────────────────────
// Node
// ─────────────────────────────────────────────
//
// Nodes live in an arena; `prev` / `next` are arena slots, not positions.
// The list is circular: head.prev is the tail.

#[derive(Debug, Clone)]
struct Node {
    x: f64,
    y: f64,
    prev: usize,
    next: usize,
}

impl Node {
    fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

// ─────────────────────────────────────────────
// LinkedListTabulatedFunction
// ─────────────────────────────────────────────

/// Tabulated function backed by a circular doubly linked list.
///
/// Positional access walks from the head or from the tail, whichever is
/// closer. Once a position is found, splicing a node in or out is O(1).
#[derive(Debug, Clone)]
pub struct LinkedListTabulatedFunction {
    nodes: Vec<Node>,
    head: usize,
}

impl LinkedListTabulatedFunction {
    /// Copies both slices, so later changes to the caller's data are not seen.
    pub fn new(x_values: &[f64], y_values: &[f64]) -> TabulatedFunctionResult<LinkedListTabulatedFunction> {
        validate_samples(x_values, y_values)?;
        Ok(Self::from_sorted(x_values, y_values))
    }

    pub fn from_function(
        source: &dyn MathFunction,
        x_from: f64,
        x_to: f64,
        count: usize,
    ) -> TabulatedFunctionResult<LinkedListTabulatedFunction> {
        let (x_values, y_values) = sample_function(source, x_from, x_to, count, 2)?;
        Ok(Self::from_sorted(&x_values, &y_values))
    }

    fn from_sorted(x_values: &[f64], y_values: &[f64]) -> LinkedListTabulatedFunction {
        let n = x_values.len();
        let nodes = x_values
            .iter()
            .zip(y_values.iter())
            .enumerate()
            .map(|(i, (&x, &y))| Node {
                x,
                y,
                prev: (i + n - 1) % n,
                next: (i + 1) % n,
            })
            .collect();
        LinkedListTabulatedFunction { nodes, head: 0 }
    }

    fn tail(&self) -> usize {
        self.nodes[self.head].prev
    }

    fn check_index(&self, index: usize) -> TabulatedFunctionResult<()> {
        if index >= self.nodes.len() {
            return Err(TabulatedFunctionError::IndexOutOfBounds {
                index,
                count: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Arena slot of the node at `index`, walking from the nearer end.
    fn slot_of(&self, index: usize) -> usize {
        let count = self.nodes.len();
        if index <= count / 2 {
            (0..index).fold(self.head, |slot, _| self.nodes[slot].next)
        } else {
            (0..(count - 1 - index)).fold(self.tail(), |slot, _| self.nodes[slot].prev)
        }
    }

    /// Walks forward from the head, yielding `(position, slot)`.
    fn walk(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut slot = self.head;
        (0..self.nodes.len()).map(move |position| {
            let current = slot;
            slot = self.nodes[slot].next;
            (position, current)
        })
    }

    fn splice_before(&mut self, target: usize, x: f64, y: f64) -> usize {
        let slot = self.nodes.len();
        let prev = self.nodes[target].prev;
        self.nodes.push(Node { x, y, prev, next: target });
        self.nodes[prev].next = slot;
        self.nodes[target].prev = slot;
        slot
    }

    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.nodes[slot].prev, self.nodes[slot].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        if self.head == slot {
            self.head = next;
        }

        // Keep the arena dense: move the last slot into the hole and
        // repoint its neighbours.
        let last = self.nodes.len() - 1;
        self.nodes.swap_remove(slot);
        if slot != last {
            let moved_prev = if self.nodes[slot].prev == last { slot } else { self.nodes[slot].prev };
            let moved_next = if self.nodes[slot].next == last { slot } else { self.nodes[slot].next };
            self.nodes[slot].prev = moved_prev;
            self.nodes[slot].next = moved_next;
            self.nodes[moved_prev].next = slot;
            self.nodes[moved_next].prev = slot;
            if self.head == last {
                self.head = slot;
            }
        }
    }
}

impl TabulatedFunction for LinkedListTabulatedFunction {
    fn count(&self) -> usize {
        self.nodes.len()
    }

    fn get_x(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.check_index(index)?;
        Ok(self.nodes[self.slot_of(index)].x)
    }

    fn get_y(&self, index: usize) -> TabulatedFunctionResult<f64> {
        self.check_index(index)?;
        Ok(self.nodes[self.slot_of(index)].y)
    }

    fn set_y(&mut self, index: usize, value: f64) -> TabulatedFunctionResult<()> {
        self.check_index(index)?;
        let slot = self.slot_of(index);
        self.nodes[slot].y = value;
        Ok(())
    }

    fn index_of_x(&self, x: f64) -> Option<usize> {
        self.walk()
            .take_while(|&(_, slot)| self.nodes[slot].x < x + SAMPLE_EPSILON)
            .find(|&(_, slot)| (self.nodes[slot].x - x).abs() < SAMPLE_EPSILON)
            .map(|(position, _)| position)
    }

    fn index_of_y(&self, y: f64) -> Option<usize> {
        self.walk()
            .find(|&(_, slot)| (self.nodes[slot].y - y).abs() < SAMPLE_EPSILON)
            .map(|(position, _)| position)
    }

    fn floor_index_of_x(&self, x: f64) -> usize {
        let count = self.nodes.len();
        if x < self.nodes[self.head].x {
            return 0;
        }
        if x > self.nodes[self.tail()].x {
            return count;
        }
        self.walk()
            .take_while(|&(_, slot)| self.nodes[slot].x <= x)
            .last()
            .map_or(0, |(position, _)| position)
    }

    fn first(&self) -> Point {
        self.nodes[self.head].point()
    }

    fn last(&self) -> Point {
        self.nodes[self.tail()].point()
    }

    fn segment(&self, index: usize) -> (Point, Point) {
        assert!(index + 1 < self.nodes.len(), "segment {} out of range", index);
        let lhs = self.slot_of(index);
        let rhs = self.nodes[lhs].next;
        (self.nodes[lhs].point(), self.nodes[rhs].point())
    }

    fn insert(&mut self, x: f64, y: f64) -> TabulatedFunctionResult<()> {
        if !x.is_finite() {
            return Err(TabulatedFunctionError::NonFiniteValue { index: self.count(), value: x });
        }
        if let Some(index) = self.index_of_x(x) {
            let slot = self.slot_of(index);
            self.nodes[slot].y = y;
            return Ok(());
        }

        let successor = self.walk().find(|&(_, slot)| self.nodes[slot].x > x);
        match successor {
            Some((0, slot)) => {
                self.head = self.splice_before(slot, x, y);
            }
            Some((_, slot)) => {
                self.splice_before(slot, x, y);
            }
            None => {
                // Before the head of a circular list is after the tail.
                let head = self.head;
                self.splice_before(head, x, y);
            }
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> TabulatedFunctionResult<()> {
        self.check_index(index)?;
        if self.nodes.len() == 1 {
            return Err(TabulatedFunctionError::LastSampleRemoval);
        }
        let slot = self.slot_of(index);
        self.unlink(slot);
        Ok(())
    }

    fn points(&self) -> Vec<Point> {
        self.walk()
            .map(|(_, slot)| self.nodes[slot].point())
            .collect()
    }
}

impl MathFunction for LinkedListTabulatedFunction {
    fn apply(&self, x: f64) -> f64 {
        interpolation::evaluate(self, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::function::mathfunction::from_fn;

    fn sample() -> LinkedListTabulatedFunction {
        LinkedListTabulatedFunction::new(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, 4.0, 9.0, 16.0, 25.0]).unwrap()
    }

    fn assert_links_consistent(function: &LinkedListTabulatedFunction) {
        for (slot, node) in function.nodes.iter().enumerate() {
            assert_eq!(function.nodes[node.next].prev, slot);
            assert_eq!(function.nodes[node.prev].next, slot);
        }
        let xs = function.x_values();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "unsorted: {:?}", xs);
    }

    #[test]
    fn test_positional_access_from_both_ends() {
        let function = sample();
        for i in 0..5 {
            assert_eq!(function.get_x(i).unwrap(), (i + 1) as f64);
        }
        assert!(function.get_x(5).is_err());
        assert_eq!(function.left_bound(), 1.0);
        assert_eq!(function.right_bound(), 5.0);
    }

    #[test]
    fn test_lookup() {
        let function = sample();
        assert_eq!(function.index_of_x(4.0), Some(3));
        assert_eq!(function.index_of_x(4.5), None);
        assert_eq!(function.index_of_y(9.0), Some(2));
        assert_eq!(function.floor_index_of_x(0.5), 0);
        assert_eq!(function.floor_index_of_x(2.7), 1);
        assert_eq!(function.floor_index_of_x(5.0), 4);
        assert_eq!(function.floor_index_of_x(6.0), 5);
    }

    #[test]
    fn test_insert_at_head_middle_and_tail() {
        let mut function = sample();
        function.insert(0.0, 0.0).unwrap();
        function.insert(2.5, 6.25).unwrap();
        function.insert(7.0, 49.0).unwrap();
        function.insert(3.0, -9.0).unwrap();
        assert_links_consistent(&function);
        assert_eq!(function.x_values(), vec![0.0, 1.0, 2.0, 2.5, 3.0, 4.0, 5.0, 7.0]);
        assert_eq!(function.get_y(4).unwrap(), -9.0);
        assert_eq!(function.first(), Point::new(0.0, 0.0));
        assert_eq!(function.last(), Point::new(7.0, 49.0));
    }

    #[test]
    fn test_remove_keeps_links() {
        let mut function = sample();
        function.insert(0.0, 0.0).unwrap();
        function.remove(0).unwrap();
        assert_links_consistent(&function);
        function.remove(2).unwrap();
        assert_links_consistent(&function);
        assert_eq!(function.x_values(), vec![1.0, 2.0, 4.0, 5.0]);
        function.remove(3).unwrap();
        function.remove(0).unwrap();
        function.remove(1).unwrap();
        assert_links_consistent(&function);
        assert_eq!(function.points(), vec![Point::new(2.0, 4.0)]);
        assert!(matches!(function.remove(0), Err(TabulatedFunctionError::LastSampleRemoval)));
    }

    #[test]
    fn test_set_y() {
        let mut function = sample();
        function.set_y(3, 0.0).unwrap();
        assert_eq!(function.get_y(3).unwrap(), 0.0);
        assert!(function.set_y(9, 0.0).is_err());
    }

    #[test]
    fn test_from_function_matches_samples() {
        let function = LinkedListTabulatedFunction::from_function(&from_fn(|x| 3.0 * x), 1.0, -1.0, 5).unwrap();
        assert_eq!(function.x_values(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert_eq!(function.apply(0.25), 0.75);
    }
}
