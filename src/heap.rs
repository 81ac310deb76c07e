use crate::EmptyCollection;

/// An array-backed binary min-heap keyed by an ordered key, used as the open
/// list of the informed solvers.
///
/// The heap offers no `decrease_key`: the solvers insert a duplicate entry
/// when they find a cheaper route to a cell and discard stale entries on
/// extraction (lazy deletion). Ties between equal keys are broken by the
/// heap's structural order only; callers that need deterministic behavior
/// encode a tie-break into the key itself.
pub struct MinHeap<K, V> {
    entries: Vec<(K, V)>,
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<K: Ord, V> MinHeap<K, V> {
    pub fn new() -> MinHeap<K, V> {
        MinHeap {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> MinHeap<K, V> {
        MinHeap {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends the entry and sifts it up until its parent's key is no
    /// greater. O(log n).
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.push((key, value));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the value with the minimum key by swapping the
    /// root with the last entry and sifting it down. O(log n).
    pub fn extract_min(&mut self) -> Result<V, EmptyCollection> {
        if self.entries.is_empty() {
            return Err(EmptyCollection);
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let (_, value) = self.entries.pop().ok_or(EmptyCollection)?;
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Ok(value)
    }

    /// The minimum entry without removing it.
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    /// Entries in internal array order (not sorted order).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    fn sift_up(&mut self, mut ix: usize) {
        while ix > 0 {
            let parent = (ix - 1) / 2;
            if self.entries[parent].0 <= self.entries[ix].0 {
                break;
            }
            self.entries.swap(parent, ix);
            ix = parent;
        }
    }

    fn sift_down(&mut self, mut ix: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * ix + 1;
            let right = 2 * ix + 2;
            let mut smallest = ix;
            if left < len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == ix {
                break;
            }
            self.entries.swap(ix, smallest);
            ix = smallest;
        }
    }
}
