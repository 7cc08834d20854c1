use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::Float;
use ordered_float::OrderedFloat;

/// How the Dijkstra frontier finds its next vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontierMode {
    /// Lazy-deletion binary heap, O((V + E) log V)
    #[default]
    BinaryHeap,
    /// Full scan of unsettled vertices on every step, O(V^2)
    LinearScan,
}

/// Set of unsettled vertices for label-setting search.
///
/// Both modes hand out vertices in the same order: smallest current
/// distance first, ties going to the lower vertex index (which is insertion
/// order for [`crate::WeightedGraph`]). Vertices at infinite distance are
/// never handed out.
#[derive(Debug)]
pub struct Frontier<W>
where
    W: Float + Debug,
{
    mode: FrontierMode,
    /// Min-heap of (distance, vertex); may hold stale entries for settled vertices
    heap: BinaryHeap<Reverse<(OrderedFloat<W>, usize)>>,
    settled: Vec<bool>,
    settled_count: usize,
}

impl<W> Frontier<W>
where
    W: Float + Debug,
{
    /// Creates a frontier over `vertex_count` vertices, all unsettled
    pub fn new(mode: FrontierMode, vertex_count: usize) -> Self {
        Frontier {
            mode,
            heap: BinaryHeap::new(),
            settled: vec![false; vertex_count],
            settled_count: 0,
        }
    }

    pub fn mode(&self) -> FrontierMode {
        self.mode
    }

    /// Records that `vertex` now has tentative distance `distance`
    pub fn offer(&mut self, vertex: usize, distance: W) {
        if self.mode == FrontierMode::BinaryHeap && !self.settled[vertex] {
            self.heap.push(Reverse((OrderedFloat(distance), vertex)));
        }
    }

    /// Settles and returns the closest unsettled vertex, or `None` once every
    /// remaining vertex is unreachable
    pub fn settle_next(&mut self, distances: &[W]) -> Option<usize> {
        let next = match self.mode {
            FrontierMode::BinaryHeap => self.pop_heap(),
            FrontierMode::LinearScan => self.scan(distances),
        }?;

        self.settled[next] = true;
        self.settled_count += 1;
        Some(next)
    }

    pub fn is_settled(&self, vertex: usize) -> bool {
        self.settled[vertex]
    }

    /// Number of vertices settled so far
    pub fn settled_count(&self) -> usize {
        self.settled_count
    }

    fn pop_heap(&mut self) -> Option<usize> {
        while let Some(Reverse((distance, vertex))) = self.heap.pop() {
            if self.settled[vertex] || distance.0.is_infinite() {
                continue;
            }
            return Some(vertex);
        }
        None
    }

    fn scan(&self, distances: &[W]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (vertex, &distance) in distances.iter().enumerate() {
            if self.settled[vertex] {
                continue;
            }
            match best {
                Some(b) if distance >= distances[b] => {}
                _ => best = Some(vertex),
            }
        }
        best.filter(|&vertex| distances[vertex].is_finite())
    }
}
