use crate::EmptyCollection;

struct ListNode<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly linked sequence with O(1) push and pop at both ends, backing the
/// DFS stack (push back, pop back) and the BFS queue (push back, pop front).
///
/// Links are arena indices rather than pointers: nodes live in a slot vector
/// and freed slots are recycled through a free list, so no operation ever
/// traverses the list.
pub struct DoubleEndedList<T> {
    slots: Vec<Option<ListNode<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoubleEndedList<T> {
    fn default() -> Self {
        DoubleEndedList::new()
    }
}

impl<T> DoubleEndedList<T> {
    pub fn new() -> DoubleEndedList<T> {
        DoubleEndedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, value: T) {
        let ix = self.alloc(ListNode {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(old) => self.link_prev(old, Some(ix)),
            None => self.tail = Some(ix),
        }
        self.head = Some(ix);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let ix = self.alloc(ListNode {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(old) => self.link_next(old, Some(ix)),
            None => self.head = Some(ix),
        }
        self.tail = Some(ix);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        let ix = self.head.ok_or(EmptyCollection)?;
        let node = self.slots[ix].take().ok_or(EmptyCollection)?;
        self.free.push(ix);
        self.head = node.next;
        match node.next {
            Some(next) => self.link_prev(next, None),
            None => self.tail = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        let ix = self.tail.ok_or(EmptyCollection)?;
        let node = self.slots[ix].take().ok_or(EmptyCollection)?;
        self.free.push(ix);
        self.tail = node.prev;
        match node.prev {
            Some(prev) => self.link_next(prev, None),
            None => self.head = None,
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head
            .and_then(|ix| self.slots[ix].as_ref())
            .map(|node| &node.value)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.tail
            .and_then(|ix| self.slots[ix].as_ref())
            .map(|node| &node.value)
    }

    fn alloc(&mut self, node: ListNode<T>) -> usize {
        match self.free.pop() {
            Some(ix) => {
                self.slots[ix] = Some(node);
                ix
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn link_prev(&mut self, ix: usize, prev: Option<usize>) {
        if let Some(node) = self.slots[ix].as_mut() {
            node.prev = prev;
        }
    }

    fn link_next(&mut self, ix: usize, next: Option<usize>) {
        if let Some(node) = self.slots[ix].as_mut() {
            node.next = next;
        }
    }
}
