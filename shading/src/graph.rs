//! Tree traversal

/// Tells `walk()` how to continue after visiting a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkControl {
    /// Descend into the node's children.
    Continue,

    /// Do not descend into the node's children but keep walking.
    SkipChildren,

    /// Stop the walk.
    Stop,
}

/// Depth-first pre-order walk over a forest. Nodes are visited in the order
/// they are returned by `children`. Returns `true` if the walk was stopped by
/// `visit`.
///
/// * `roots`    - The top level nodes.
/// * `children` - Returns the children of a node.
/// * `visit`    - Called with each node and its depth.
pub fn walk<N, C, V>(roots: Vec<N>, children: C, mut visit: V) -> bool
where
    C: Fn(&N) -> Vec<N>,
    V: FnMut(&N, usize) -> WalkControl,
{
    let mut stack: Vec<(N, usize)> = roots.into_iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        match visit(&node, depth) {
            WalkControl::Stop => return true,
            WalkControl::SkipChildren => {}
            WalkControl::Continue => {
                stack.extend(children(&node).into_iter().rev().map(|c| (c, depth + 1)));
            }
        }
    }

    false
}
