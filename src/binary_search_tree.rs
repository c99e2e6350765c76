use crate::traversal::{self, Order};
use crate::utils::balanced_height_bound;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use tracing::{debug, trace};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub fn leaf(data: T) -> Self {
        Self {
            data,
            left: None,
            right: None,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    // nodes visited following left links, counting self
    fn left_spine_len(&self) -> usize {
        let mut count = 1;
        let mut cur = self;
        while let Some(left) = cur.left() {
            count += 1;
            cur = left;
        }
        count
    }
}

/// Binary search tree that is balanced on construction and on explicit `rebalance`
///
/// Inserts and deletes edit the structure in place and never rebalance on their own.
/// Duplicates are not stored.
///
/// # Example
/// ```rust
/// use balanced_bst::BinarySearchTree;
/// let mut bst = BinarySearchTree::new_with_values(&[3, 1, 2, 1]);
/// assert_eq!(bst.in_order(), Some(vec![1, 2, 3]));
/// bst.insert(4);
/// bst.insert(5);
/// assert!(!bst.is_balanced());
/// bst.rebalance();
/// assert!(bst.is_balanced());
/// ```
#[derive(Clone, Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self { root: None }
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn new_with_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    /// Build a height-balanced subtree from `values`
    ///
    /// Values are sorted and deduplicated first, so any order and any number of repeats is accepted.
    /// Returns `None` for empty input.
    pub fn build_tree<I>(values: I) -> Option<Box<Node<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let mut sorted: Vec<T> = values.into_iter().collect();
        sorted.sort();
        sorted.dedup();
        Self::top_down_build(sorted)
    }

    // values must be sorted and unique; the median (index len / 2) becomes the subtree root
    fn top_down_build(mut values: Vec<T>) -> Option<Box<Node<T>>> {
        let mid = values.len() / 2;
        if values.is_empty() {
            return None;
        }

        let right = values.split_off(mid + 1);
        let data = values.pop()?;
        Some(Box::new(Node {
            data,
            left: Self::top_down_build(values),
            right: Self::top_down_build(right),
        }))
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        Self::len_recursive(self.root())
    }

    fn len_recursive(node: Option<&Node<T>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::len_recursive(n.left()) + Self::len_recursive(n.right()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        Self::find_from(self.root(), value)
    }

    pub fn find_from<'a>(node: Option<&'a Node<T>>, value: &T) -> Option<&'a Node<T>> {
        let n = node?;
        match value.cmp(&n.data) {
            Ordering::Equal => Some(n),
            Ordering::Less => Self::find_from(n.left(), value),
            Ordering::Greater => Self::find_from(n.right(), value),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    pub fn min(&self) -> Option<&T> {
        let mut cur = self.root()?;
        while let Some(left) = cur.left() {
            cur = left;
        }
        Some(&cur.data)
    }

    pub fn max(&self) -> Option<&T> {
        let mut cur = self.root()?;
        while let Some(right) = cur.right() {
            cur = right;
        }
        Some(&cur.data)
    }

    /// Attach `value` as a new leaf. Returns `false` if the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        Self::insert_recursive(&mut self.root, value)
    }

    fn insert_recursive(node: &mut Option<Box<Node<T>>>, value: T) -> bool {
        match node {
            None => {
                *node = Some(Box::new(Node::leaf(value)));
                true
            }
            Some(n) => match value.cmp(&n.data) {
                Ordering::Equal => {
                    trace!("duplicate insert skipped");
                    false
                }
                Ordering::Less => Self::insert_recursive(&mut n.left, value),
                Ordering::Greater => Self::insert_recursive(&mut n.right, value),
            },
        }
    }

    /// Remove `value` from the tree, returning it if it was present
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut removed = None;
        self.root = Self::delete_from(self.root.take(), value, &mut removed);
        if removed.is_none() {
            trace!("delete of missing value ignored");
        }
        removed
    }

    /// Delete `value` from the subtree rooted at `node` and return the subtree's new root.
    ///
    /// The caller must store the returned subtree back into the slot `node` came from.
    /// When the deleted node has two children the replacement side is picked by comparing
    /// the left spines of both children: a strictly longer left spine on the left child takes
    /// the in-order predecessor, anything else takes the in-order successor.
    pub fn delete_from(
        node: Option<Box<Node<T>>>,
        value: &T,
        removed: &mut Option<T>,
    ) -> Option<Box<Node<T>>> {
        let mut n = node?;
        match value.cmp(&n.data) {
            Ordering::Less => {
                n.left = Self::delete_from(n.left.take(), value, removed);
                Some(n)
            }
            Ordering::Greater => {
                n.right = Self::delete_from(n.right.take(), value, removed);
                Some(n)
            }
            Ordering::Equal => match (n.left.take(), n.right.take()) {
                (None, right) => {
                    *removed = Some(n.data);
                    right
                }
                (left, None) => {
                    *removed = Some(n.data);
                    left
                }
                (Some(left), Some(right)) => {
                    let replacement = if left.left_spine_len() > right.left_spine_len() {
                        let (rest, max) = Self::take_max(left);
                        n.left = rest;
                        n.right = Some(right);
                        max
                    } else {
                        let (rest, min) = Self::take_min(right);
                        n.left = Some(left);
                        n.right = rest;
                        min
                    };
                    *removed = Some(mem::replace(&mut n.data, replacement));
                    Some(n)
                }
            },
        }
    }

    // detach the leftmost node, its right child takes its place
    fn take_min(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.left.take() {
            Some(left) => {
                let (rest, min) = Self::take_min(left);
                node.left = rest;
                (Some(node), min)
            }
            None => {
                let Node { data, right, .. } = *node;
                (right, data)
            }
        }
    }

    // detach the rightmost node, its left child takes its place
    fn take_max(mut node: Box<Node<T>>) -> (Option<Box<Node<T>>>, T) {
        match node.right.take() {
            Some(right) => {
                let (rest, max) = Self::take_max(right);
                node.right = rest;
                (Some(node), max)
            }
            None => {
                let Node { data, left, .. } = *node;
                (left, data)
            }
        }
    }

    pub fn traverse<U, F>(&self, order: Order, f: F) -> Option<Vec<U>>
    where
        F: FnMut(&Node<T>) -> U,
    {
        traversal::traverse(self.root(), order, f)
    }

    pub fn level_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.level_order_with(|n| n.data.clone())
    }

    pub fn level_order_with<U, F>(&self, f: F) -> Option<Vec<U>>
    where
        F: FnMut(&Node<T>) -> U,
    {
        self.traverse(Order::Level, f)
    }

    pub fn in_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.in_order_with(|n| n.data.clone())
    }

    pub fn in_order_with<U, F>(&self, f: F) -> Option<Vec<U>>
    where
        F: FnMut(&Node<T>) -> U,
    {
        self.traverse(Order::In, f)
    }

    pub fn pre_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.pre_order_with(|n| n.data.clone())
    }

    pub fn pre_order_with<U, F>(&self, f: F) -> Option<Vec<U>>
    where
        F: FnMut(&Node<T>) -> U,
    {
        self.traverse(Order::Pre, f)
    }

    pub fn post_order(&self) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.post_order_with(|n| n.data.clone())
    }

    pub fn post_order_with<U, F>(&self, f: F) -> Option<Vec<U>>
    where
        F: FnMut(&Node<T>) -> U,
    {
        self.traverse(Order::Post, f)
    }

    /// Height of the whole tree; -1 when empty, 0 for a single node
    pub fn height(&self) -> isize {
        Self::node_height(self.root())
    }

    /// Height of the live node holding `value`, or -1 if no node holds it
    pub fn height_of(&self, value: &T) -> isize {
        Self::node_height(self.find(value))
    }

    pub fn node_height(node: Option<&Node<T>>) -> isize {
        match node {
            None => -1,
            Some(n) => 1 + Self::node_height(n.left()).max(Self::node_height(n.right())),
        }
    }

    /// Number of edges from the root to the node holding `value`
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut cur = self.root()?;
        let mut count = 0;
        loop {
            cur = match value.cmp(&cur.data) {
                Ordering::Equal => return Some(count),
                Ordering::Less => cur.left()?,
                Ordering::Greater => cur.right()?,
            };
            count += 1;
        }
    }

    pub fn is_balanced(&self) -> bool {
        Self::is_balanced_from(self.root())
    }

    pub fn is_balanced_from(node: Option<&Node<T>>) -> bool {
        match node {
            None => true,
            Some(n) => {
                let left_height = Self::node_height(n.left());
                let right_height = Self::node_height(n.right());
                (left_height - right_height).abs() <= 1
                    && Self::is_balanced_from(n.left())
                    && Self::is_balanced_from(n.right())
            }
        }
    }

    /// Rebuild the tree from its sorted contents so it is height-balanced again
    pub fn rebalance(&mut self) {
        let mut sorted = Vec::new();
        Self::drain_in_order(self.root.take(), &mut sorted);

        let len = sorted.len();
        self.root = Self::top_down_build(sorted);
        debug!(
            len,
            height = self.height(),
            bound = balanced_height_bound(len),
            "rebalanced tree"
        );
    }

    fn drain_in_order(node: Option<Box<Node<T>>>, output: &mut Vec<T>) {
        if let Some(n) = node {
            let Node { data, left, right } = *n;
            Self::drain_in_order(left, output);
            output.push(data);
            Self::drain_in_order(right, output);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let tree = Self {
            root: Self::build_tree(iter),
        };
        debug!(len = tree.len(), height = tree.height(), "built tree");
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display> BinarySearchTree<T> {
    pub fn pretty_print(&self) {
        println!("\n=== Binary Search Tree ===");
        print!("{}", self);
        println!("=========================\n");
    }
}

// right subtree above its parent, left subtree below
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => writeln!(f, "(empty tree)"),
            Some(root) => write_tree(f, root, "", true),
        }
    }
}

fn write_tree<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let new_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_tree(f, right, &new_prefix, false)?;
    }

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "└── " } else { "┌── " },
        node.data
    )?;

    if let Some(left) = node.left() {
        let new_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_tree(f, left, &new_prefix, true)?;
    }
    Ok(())
}
