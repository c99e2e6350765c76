/// smallest possible height of a tree holding `len` nodes: ceil(log2(len + 1)) - 1
pub fn balanced_height_bound(len: usize) -> isize {
    (usize::BITS - len.leading_zeros()) as isize - 1
}
