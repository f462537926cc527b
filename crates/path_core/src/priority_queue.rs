use std::{cmp::Ordering, collections::BinaryHeap};

use crate::constants::Weight;
use crate::error::{Error, Result};

/// Priority queue implementation using a binary heap.
/// The heap is a min heap, so the item with the lowest priority is always at
/// the top. Items with equal priority leave the queue in insertion order.
///
/// There is no decrease-key. To lower the priority of an item, enqueue it
/// again; the older entry stays in the heap and has to be recognised as stale
/// by the caller when it is dequeued.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<HeapItem<T>>,
    next_seq: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, priority: Weight) {
        self.heap.push(HeapItem {
            priority,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    /// Removes the entry with the minimum priority.
    pub fn dequeue(&mut self) -> Result<(T, Weight)> {
        self.pop().ok_or(Error::EmptyQueue)
    }

    pub fn pop(&mut self) -> Option<(T, Weight)> {
        self.heap
            .pop()
            .map(|HeapItem { priority, item, .. }| (item, priority))
    }

    pub fn peek(&self) -> Option<(&T, Weight)> {
        self.heap.peek().map(|top| (&top.item, top.priority))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
struct HeapItem<T> {
    priority: Weight,
    seq: u64,
    item: T,
}

impl<T> Ord for HeapItem<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for HeapItem<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> PartialEq for HeapItem<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapItem<T> {}
