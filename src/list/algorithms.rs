use crate::list::{List, Value};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl Eq for List {}

impl PartialOrd for List {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl Ord for List {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl List {
    /// Returns `true` if the `List` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.add_last(0);
    /// list.add_last(1);
    /// list.add_last(2);
    ///
    /// assert_eq!(list.contains(0), true);
    /// assert_eq!(list.contains(10), false);
    /// ```
    pub fn contains(&self, value: Value) -> bool {
        self.iter().any(|&element| element == value)
    }

    /// Sort the list in ascending order.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a merge sort over the list structure: the
    /// chain is split at node level into two halves (the first
    /// `len / 2` elements and the rest, each split a single *O*(*n*)
    /// detach), both halves are sorted recursively, and
    /// [`merge`](List::merge) joins them back, taking ties from the left
    /// half.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self) {
        if self.len() < 2 {
            return;
        }
        let mut right = self.split_off(self.len() / 2);
        let mut left = mem::take(self);
        left.sort();
        right.sort();
        List::merge(&mut left, &mut right, self);
    }

    /// Merge two individually sorted lists into `result`.
    ///
    /// Any prior contents of `result` are cleared first. The current first
    /// elements of `left` and `right` are compared repeatedly and the
    /// smaller one is moved to the back of `result`; ties are taken from
    /// `left`. Once one input is exhausted, the remainder of the other is
    /// spliced onto `result` in *O*(1), preserving its order.
    ///
    /// Both inputs end empty, and `result` holds all their elements in
    /// ascending order. Equal-valued elements keep their relative order,
    /// with `left` elements preceding equal-valued `right` elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`left.len()` + `right.len()`)
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_list::List;
    /// use std::iter::FromIterator;
    ///
    /// let mut left = List::from_iter([0, 1, 2]);
    /// let mut right = List::from_iter([3, 4, 5, 6]);
    /// let mut result = List::new();
    ///
    /// List::merge(&mut left, &mut right, &mut result);
    ///
    /// assert!(left.is_empty());
    /// assert!(right.is_empty());
    /// assert_eq!(Vec::from_iter(result), vec![0, 1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn merge(left: &mut List, right: &mut List, result: &mut List) {
        result.clear();
        while let (Some(a), Some(b)) = (left.first(), right.first()) {
            let source = if a <= b { &mut *left } else { &mut *right };
            if let Some(value) = source.pop_first() {
                result.add_last(value);
            }
        }
        // At most one of the inputs still holds elements; splice them over
        // wholesale.
        result.append(left);
        result.append(right);
    }
}
