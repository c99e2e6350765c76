use crate::binary_search_tree::Node;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// breadth first, left child before right
    Level,
    /// left, node, right; ascending for a valid tree
    In,
    /// node, left, right
    Pre,
    /// left, right, node
    Post,
}

/// Visit every node reachable from `start` in `order`, collecting `f(node)` for each
///
/// # Arguments
/// * `start` - Node to start from, usually the root
/// * `order` - Visiting order
/// * `f` - Transform applied to each visited node
///
/// # Returns
/// * `None` if `start` is absent, otherwise the transformed values in visiting order
pub fn traverse<T, U, F>(start: Option<&Node<T>>, order: Order, mut f: F) -> Option<Vec<U>>
where
    F: FnMut(&Node<T>) -> U,
{
    let start = start?;
    let mut output = Vec::new();
    match order {
        Order::Level => level_order(start, &mut f, &mut output),
        Order::In => in_order(Some(start), &mut f, &mut output),
        Order::Pre => pre_order(Some(start), &mut f, &mut output),
        Order::Post => post_order(Some(start), &mut f, &mut output),
    }
    Some(output)
}

fn level_order<T, U, F>(start: &Node<T>, f: &mut F, output: &mut Vec<U>)
where
    F: FnMut(&Node<T>) -> U,
{
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some(cur) = queue.pop_front() {
        output.push(f(cur));
        if let Some(left) = cur.left() {
            queue.push_back(left);
        }
        if let Some(right) = cur.right() {
            queue.push_back(right);
        }
    }
}

fn in_order<T, U, F>(node: Option<&Node<T>>, f: &mut F, output: &mut Vec<U>)
where
    F: FnMut(&Node<T>) -> U,
{
    if let Some(n) = node {
        in_order(n.left(), f, output);
        output.push(f(n));
        in_order(n.right(), f, output);
    }
}

fn pre_order<T, U, F>(node: Option<&Node<T>>, f: &mut F, output: &mut Vec<U>)
where
    F: FnMut(&Node<T>) -> U,
{
    if let Some(n) = node {
        output.push(f(n));
        pre_order(n.left(), f, output);
        pre_order(n.right(), f, output);
    }
}

fn post_order<T, U, F>(node: Option<&Node<T>>, f: &mut F, output: &mut Vec<U>)
where
    F: FnMut(&Node<T>) -> U,
{
    if let Some(n) = node {
        post_order(n.left(), f, output);
        post_order(n.right(), f, output);
        output.push(f(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary_search_tree::BinarySearchTree;

    fn payload(n: &Node<i32>) -> i32 {
        *n.data()
    }

    #[test]
    fn test_orders() {
        let bst = BinarySearchTree::new_with_values(&[1, 2, 3, 4, 5, 6, 7]);
        let root = bst.root();

        assert_eq!(
            traverse(root, Order::Level, payload),
            Some(vec![4, 2, 6, 1, 3, 5, 7])
        );
        assert_eq!(
            traverse(root, Order::In, payload),
            Some(vec![1, 2, 3, 4, 5, 6, 7])
        );
        assert_eq!(
            traverse(root, Order::Pre, payload),
            Some(vec![4, 2, 1, 3, 6, 5, 7])
        );
        assert_eq!(
            traverse(root, Order::Post, payload),
            Some(vec![1, 3, 2, 5, 7, 6, 4])
        );
    }

    #[test]
    fn test_absent_start() {
        for order in [Order::Level, Order::In, Order::Pre, Order::Post] {
            assert_eq!(traverse::<i32, i32, _>(None, order, payload), None);
        }
    }

    #[test]
    fn test_start_below_root() {
        let bst = BinarySearchTree::new_with_values(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(traverse(bst.find(&2), Order::Pre, payload), Some(vec![2, 1, 3]));
        assert_eq!(traverse(bst.find(&7), Order::Level, payload), Some(vec![7]));
    }

    #[test]
    fn test_level_order_skips_missing_children() {
        // 3 -> (1 -> _, 2), 5 -> (4, _)
        let mut bst = BinarySearchTree::new();
        bst.extend([3, 1, 5, 2, 4]);
        assert_eq!(
            traverse(bst.root(), Order::Level, payload),
            Some(vec![3, 1, 5, 2, 4])
        );
    }

    #[test]
    fn test_stateful_transform() {
        let bst = BinarySearchTree::new_with_values(&[10, 20, 30]);
        let mut visited = 0;
        let ranks = traverse(bst.root(), Order::In, |n| {
            visited += 1;
            (visited, *n.data())
        });
        assert_eq!(ranks, Some(vec![(1, 10), (2, 20), (3, 30)]));
        assert_eq!(visited, 3);
    }
}
