use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A payload paired with the priority it was enqueued at
#[derive(Debug, Clone, Copy)]
pub struct QueueEntry<V, P> {
    pub payload: V,
    pub priority: P,
}

// Entries compare by priority only, reversed so the std max-heap pops the minimum.
impl<V, P: Ord> PartialEq for QueueEntry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<V, P: Ord> Eq for QueueEntry<V, P> {}

impl<V, P: Ord> PartialOrd for QueueEntry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, P: Ord> Ord for QueueEntry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.cmp(&self.priority)
    }
}

/// A minimum-priority queue over opaque payloads
///
/// Several entries for the same payload may coexist; the queue knows nothing
/// about what the payloads mean. Among equal priorities no order is guaranteed.
#[derive(Debug)]
pub struct PriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<QueueEntry<V, P>>,
}

impl<V, P> PriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts a payload with the given priority
    pub fn enqueue(&mut self, payload: V, priority: P) {
        self.heap.push(QueueEntry { payload, priority });
    }

    /// Removes the entry with the smallest priority, or `None` when empty
    pub fn dequeue(&mut self) -> Option<QueueEntry<V, P>> {
        self.heap.pop()
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<&QueueEntry<V, P>> {
        self.heap.peek()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<V, P> Default for PriorityQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
