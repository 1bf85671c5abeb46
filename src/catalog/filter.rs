//! Menu-visibility pruning of the category tree.
//!
//! # Responsibilities
//! - Keep exactly the nodes with `include_in_menu == 1`
//! - Filter children before the keep/drop decision (post-order)
//! - Preserve sibling order
//!
//! # Design Decisions
//! - A node survives even if all of its descendants are pruned
//! - Iterative traversal with an explicit work stack; category depth comes
//!   from an external service and is not trusted to fit the call stack
//! - Pure function: no I/O, no failure modes, total over any input

use crate::catalog::types::Category;

/// One in-flight node during the traversal. `node` is `None` only for the
/// virtual frame holding the input sequence itself.
struct Frame {
    node: Option<Category>,
    remaining: std::vec::IntoIter<Category>,
    kept: Vec<Category>,
}

/// Prune a category sequence to its menu-visible nodes.
///
/// Children are filtered recursively and reassigned; a node is then kept in
/// the output iff its `include_in_menu` flag equals 1. Relative order of
/// surviving siblings matches the input.
pub fn filter_menu_visible(categories: Vec<Category>) -> Vec<Category> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut current = Frame {
        node: None,
        remaining: categories.into_iter(),
        kept: Vec::new(),
    };

    loop {
        if let Some(mut next) = current.remaining.next() {
            // Descend: the node's decision waits until its children are done.
            let children = std::mem::take(&mut next.children);
            stack.push(current);
            current = Frame {
                node: Some(next),
                remaining: children.into_iter(),
                kept: Vec::new(),
            };
        } else {
            let finished = current;
            match stack.pop() {
                Some(mut parent) => {
                    if let Some(mut node) = finished.node {
                        node.children = finished.kept;
                        if node.include_in_menu == 1 {
                            parent.kept.push(node);
                        }
                    }
                    current = parent;
                }
                // Virtual frame drained: the filtered sequence is complete.
                None => return finished.kept,
            }
        }
    }
}
