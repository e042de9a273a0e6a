//! Parse trees.
//!
//! A [`ParseNode`] is either a matched token or an ordered list of child nodes. Nodes carry no rule tag: which
//! production matched is visible only through the shape of the tree. Rules build their node bottom-up and never
//! touch it again once they return.

use std::fmt;

use crate::token::Token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    Leaf(Token),
    Branch(Vec<ParseNode>),
}

impl ParseNode {
    pub fn leaf(token: Token) -> Self {
        ParseNode::Leaf(token)
    }

    pub fn branch(children: Vec<ParseNode>) -> Self {
        ParseNode::Branch(children)
    }

    /// The ε node: a branch with no children.
    pub fn empty() -> Self {
        ParseNode::Branch(Vec::new())
    }

    /// Return `true` for the ε node.
    pub fn is_empty(&self) -> bool {
        matches!(self, ParseNode::Branch(children) if children.is_empty())
    }

    /// Child nodes (empty for a leaf).
    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Leaf(_) => &[],
            ParseNode::Branch(children) => children,
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            ParseNode::Leaf(token) => Some(token),
            ParseNode::Branch(_) => None,
        }
    }

    /// All leaf tokens, left to right.
    pub fn leaves(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'n>(&'n self, out: &mut Vec<&'n Token>) {
        match self {
            ParseNode::Leaf(token) => out.push(token),
            ParseNode::Branch(children) => children.iter().for_each(|child| child.collect_leaves(out)),
        }
    }

    /// Leaf lexemes, left to right.
    pub fn lexemes(&self) -> Vec<&str> {
        self.leaves().into_iter().map(|token| token.lexeme.as_str()).collect()
    }

    /// Leaf lexemes joined by single spaces.
    pub fn source_text(&self) -> String {
        self.lexemes().join(" ")
    }

    /// Nesting depth; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children().iter().map(|child| child.depth() + 1).max().unwrap_or(0)
    }
}

impl From<&Token> for ParseNode {
    fn from(token: &Token) -> Self {
        ParseNode::Leaf(token.clone())
    }
}

/// Renders leaves as their lexeme and branches as `[child child ...]`.
impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseNode::Leaf(token) => f.write_str(&token.lexeme),
            ParseNode::Branch(children) => {
                f.write_str("[")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]")
            }
        }
    }
}
