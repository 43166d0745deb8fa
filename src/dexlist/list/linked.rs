use super::{check_insert_pos, check_remove_pos, PositionalList};
use crate::error::{DexError, Result};
use tracing::trace;

// Index of a node in the arena.
type Link = Option<usize>;

#[derive(Debug)]
struct Node<T> {
    item: Option<T>,
    next: Link,
}

/// Unbounded singly-linked list.
///
/// Nodes live in an arena and point at each other by index. Released nodes
/// are threaded onto a free chain and reused by later inserts. `head` and
/// `tail` are `None` exactly when the list is empty.
#[derive(Debug)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
    tail: Link,
    // Chain of released nodes, linked through `next`.
    free: Link,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, item: T, next: Link) -> Result<usize> {
        if let Some(idx) = self.free {
            self.free = self.nodes[idx].next;
            self.nodes[idx] = Node {
                item: Some(item),
                next,
            };
            return Ok(idx);
        }

        self.nodes
            .try_reserve(1)
            .map_err(|_| DexError::Allocation {
                capacity: self.nodes.len() + 1,
            })?;
        self.nodes.push(Node {
            item: Some(item),
            next,
        });
        Ok(self.nodes.len() - 1)
    }

    /// Detaches the node's element and puts the node on the free chain.
    fn release(&mut self, idx: usize) -> Option<T> {
        let item = self.nodes[idx].item.take();
        self.nodes[idx].next = self.free;
        self.free = Some(idx);
        item
    }

    /// Arena index of the node at `pos`. Caller guarantees `pos < len`.
    fn node_at(&self, pos: usize) -> Option<usize> {
        let mut cursor = self.head;
        for _ in 0..pos {
            cursor = cursor.and_then(|idx| self.nodes[idx].next);
        }
        cursor
    }

    fn push_front(&mut self, item: T) -> Result<()> {
        let idx = self.alloc(item, self.head)?;
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        Ok(())
    }

    fn push_back(&mut self, item: T) -> Result<()> {
        let idx = self.alloc(item, None)?;
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        Ok(())
    }

    fn reset_if_empty(&mut self) {
        if self.len == 0 {
            self.nodes.clear();
            self.head = None;
            self.tail = None;
            self.free = None;
        }
    }
}

impl<T: Clone> PositionalList<T> for LinkedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn insert(&mut self, item: &T, pos: usize) -> Result<()> {
        check_insert_pos(pos, self.len)?;

        if pos == 0 {
            self.push_front(item.clone())?;
        } else if pos == self.len {
            self.push_back(item.clone())?;
        } else {
            let prev = self
                .node_at(pos - 1)
                .ok_or_else(|| DexError::invalid_position(pos, self.len))?;
            let idx = self.alloc(item.clone(), self.nodes[prev].next)?;
            self.nodes[prev].next = Some(idx);
        }

        self.len += 1;
        trace!(pos, len = self.len, "linked insert");
        Ok(())
    }

    fn remove(&mut self, pos: usize) -> Result<T> {
        check_remove_pos(pos, self.len)?;

        let idx = if pos == 0 {
            let idx = self.head.ok_or(DexError::EmptyList)?;
            self.head = self.nodes[idx].next;
            if self.head.is_none() {
                self.tail = None;
            }
            idx
        } else {
            let prev = self
                .node_at(pos - 1)
                .ok_or_else(|| DexError::invalid_position(pos, self.len))?;
            let idx = self.nodes[prev]
                .next
                .ok_or_else(|| DexError::invalid_position(pos, self.len))?;
            self.nodes[prev].next = self.nodes[idx].next;
            if self.tail == Some(idx) {
                self.tail = Some(prev);
            }
            idx
        };

        let item = self.release(idx);
        self.len -= 1;
        self.reset_if_empty();
        trace!(pos, len = self.len, "linked remove");
        item.ok_or_else(|| DexError::invalid_position(pos, self.len + 1))
    }

    fn get(&self, pos: usize) -> Result<&T> {
        check_remove_pos(pos, self.len)?;
        self.node_at(pos)
            .and_then(|idx| self.nodes[idx].item.as_ref())
            .ok_or_else(|| DexError::invalid_position(pos, self.len))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(Iter {
            nodes: &self.nodes,
            cursor: self.head,
        })
    }

    fn insert_back(&mut self, item: &T) -> Result<()> {
        self.push_back(item.clone())?;
        self.len += 1;
        Ok(())
    }

    fn clear(&mut self) {
        self.len = 0;
        self.reset_if_empty();
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Link,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?];
        self.cursor = node.next;
        node.item.as_ref()
    }
}
