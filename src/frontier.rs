//! Open set of the search. [BinaryHeap] has no decrease-key, so lowering the key of an open cell
//! pushes a second entry and the outdated one is dropped when it surfaces.
use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Debug)]
struct FrontierEntry {
    priority: i32,
    cost: i32,
    point: Point,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.eq(&other.priority) && self.cost.eq(&other.cost)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per priority, then favours the entry with the largest
        // accumulated cost, which is the one closest to the goal
        match other.priority.cmp(&self.priority) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    pushed: usize,
    stale: usize,
}

impl Frontier {
    pub fn with_capacity(capacity: usize) -> Frontier {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            pushed: 0,
            stale: 0,
        }
    }

    pub fn push(&mut self, point: Point, priority: i32, cost: i32) {
        self.pushed += 1;
        self.heap.push(FrontierEntry {
            priority,
            cost,
            point,
        });
    }

    /// Pops the cheapest entry for which `is_current` holds. `is_current` receives the point and
    /// the key it was pushed with and must reject entries whose cell has since been closed or
    /// re-keyed.
    pub fn pop_min<F>(&mut self, mut is_current: F) -> Option<Point>
    where
        F: FnMut(&Point, i32) -> bool,
    {
        while let Some(FrontierEntry {
            priority, point, ..
        }) = self.heap.pop()
        {
            if is_current(&point, priority) {
                return Some(point);
            }
            self.stale += 1;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of entries pushed so far.
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Number of outdated entries discarded so far.
    pub fn stale(&self) -> usize {
        self.stale
    }
}
