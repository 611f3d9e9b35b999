//! A fully-safe formulation of the doubly-linked chain, with no raw
//! pointers: each node is shared between its two neighbors (or the list
//! ends) as two `StaticRc` halves, and `GhostCell` branding makes the link
//! mutations safe under a single `GhostToken`.
//!
//! This is not part of the public API; it exists to cross-check the chain
//! mechanics of [`crate::List`] in a formulation where ownership of every
//! node is fully typed.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

use crate::list::Value;

pub struct List<'id> {
    links: [Option<NodePtr<'id>>; 2],
    len: usize,
}

struct Node<'id> {
    links: [Option<NodePtr<'id>>; 2],
    value: Value,
}

type NodePtr<'id> = Half<GhostCell<'id, Node<'id>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id> Node<'id> {
    const NEXT: usize = 0;
    const PREV: usize = 1;

    fn new(value: Value) -> Self {
        let links = [None, None];
        Self { links, value }
    }
}

impl<'id> Default for List<'id> {
    fn default() -> Self {
        let links = [None, None];
        Self { links, len: 0 }
    }
}

impl<'id> List<'id> {
    const FIRST: usize = 0;
    const LAST: usize = 1;

    /// Attach a new node at the given end.
    ///
    /// One half of the node goes to the list end slot; the other is held by
    /// the former end node (or by the opposite slot when the list was
    /// empty).
    fn push_at(&mut self, side: usize, value: Value, token: &mut GhostToken<'id>) {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let (inner, outer) = Full::split(Full::new(GhostCell::new(Node::new(value))));
        match self.links[side].take() {
            Some(old_end) => {
                old_end.deref().borrow_mut(token).links[oppo] = Some(inner);
                outer.deref().borrow_mut(token).links[side] = Some(old_end);
            }
            None => self.links[oppo] = Some(inner),
        }
        self.links[side] = Some(outer);
        self.len += 1;
    }

    /// Detach the node at the given end and return its value, joining the
    /// two halves back into full ownership.
    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<Value> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let outer = self.links[side].take()?;
        let inner = match outer.deref().borrow_mut(token).links[side].take() {
            Some(new_end) => {
                let inner = new_end.deref().borrow_mut(token).links[oppo]
                    .take()
                    .unwrap();
                self.links[side] = Some(new_end);
                inner
            }
            None => self.links[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(Full::into_box(Full::join(inner, outer)).into_inner().value)
    }

    fn end_value(&self, side: usize, token: &GhostToken<'id>) -> Option<Value> {
        self.links[side]
            .as_ref()
            .map(|end| end.deref().borrow(token).value)
    }
}

impl<'id> List<'id> {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.links[Self::FIRST].is_none()
    }
    pub fn first(&self, token: &GhostToken<'id>) -> Option<Value> {
        self.end_value(Self::FIRST, token)
    }
    pub fn last(&self, token: &GhostToken<'id>) -> Option<Value> {
        self.end_value(Self::LAST, token)
    }
    pub fn add_first(&mut self, value: Value, token: &mut GhostToken<'id>) {
        self.push_at(Self::FIRST, value, token);
    }
    pub fn add_last(&mut self, value: Value, token: &mut GhostToken<'id>) {
        self.push_at(Self::LAST, value, token);
    }
    pub fn pop_first(&mut self, token: &mut GhostToken<'id>) -> Option<Value> {
        self.pop_at(Self::FIRST, token)
    }
    pub fn pop_last(&mut self, token: &mut GhostToken<'id>) -> Option<Value> {
        self.pop_at(Self::LAST, token)
    }
}

#[cfg(test)]
mod tests {
    use crate::experiments::List;
    use ghost_cell::GhostToken;

    #[test]
    fn safe_list_push_pop() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            assert!(list.is_empty());
            assert_eq!(list.len(), 0);

            list.add_last(1, &mut token);
            list.add_first(2, &mut token);
            assert!(!list.is_empty());
            assert_eq!(list.len(), 2);
            assert_eq!(list.first(&token), Some(2));
            assert_eq!(list.last(&token), Some(1));

            assert_eq!(list.pop_last(&mut token), Some(1));
            assert_eq!(list.pop_first(&mut token), Some(2));
            assert_eq!(list.pop_first(&mut token), None);
            assert!(list.is_empty());
        })
    }

    #[test]
    fn safe_list_order() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            for i in 0..5 {
                list.add_last(i, &mut token);
            }
            assert_eq!(list.len(), 5);
            for i in 0..5 {
                assert_eq!(list.pop_first(&mut token), Some(i));
            }
            assert_eq!(list.pop_first(&mut token), None);
        })
    }

    #[test]
    fn safe_list_single_element() {
        GhostToken::new(|mut token| {
            let mut list = List::new();
            list.add_first(7, &mut token);
            assert_eq!(list.first(&token), Some(7));
            assert_eq!(list.last(&token), Some(7));
            assert_eq!(list.pop_last(&mut token), Some(7));
            assert!(list.is_empty());
        })
    }
}
