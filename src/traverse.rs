//! Traversal
//!
//! Lazy iterators over the nodes of a tree in the three classic depth-first
//! orders. Each call to a traversal method starts a fresh walk, and the tree
//! is never mutated.
use crate::node::TreeNode;

impl TreeNode {
    /// Visit this node, then its left subtree, then its right subtree.
    pub fn pre_order(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Visit the left subtree, then this node, then the right subtree.
    pub fn in_order(&self) -> InOrder<'_> {
        InOrder {
            stack: vec![(self, false)],
        }
    }

    /// Visit the left subtree, then the right subtree, then this node.
    pub fn post_order(&self) -> PostOrder<'_> {
        PostOrder {
            stack: vec![(self, false)],
        }
    }
}

pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let TreeNode::Decision { left, right, .. } = node {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}

// The flag marks nodes whose left subtree has already been expanded.
pub struct InOrder<'a> {
    stack: Vec<(&'a TreeNode, bool)>,
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            match node {
                TreeNode::Leaf { .. } => return Some(node),
                TreeNode::Decision { left, right, .. } => {
                    if expanded {
                        return Some(node);
                    }
                    self.stack.push((right, false));
                    self.stack.push((node, true));
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

pub struct PostOrder<'a> {
    stack: Vec<(&'a TreeNode, bool)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            match node {
                TreeNode::Leaf { .. } => return Some(node),
                TreeNode::Decision { left, right, .. } => {
                    if expanded {
                        return Some(node);
                    }
                    self.stack.push((node, true));
                    self.stack.push((right, false));
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}
