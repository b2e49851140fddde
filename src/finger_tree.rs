//! A persistent 2-3 finger tree, the backing representation for `string`,
//! `blob`, and `vector` sequences.
//!
//! This is pure representation: per invariant #6 and the GLOSSARY, a
//! sequence's identity hash depends only on element order and contents,
//! never on finger-tree node shape. Chunking parameters here are a free
//! implementation choice (§9) — they exist purely to give sequences
//! amortized O(1) push/pop at both ends and structural sharing between
//! versions: nodes are reference-counted and shared rather than deep-copied
//! on every update.

use std::rc::Rc;

#[derive(Clone)]
enum Digit<T> {
    One(T),
    Two(T, T),
    Three(T, T, T),
    Four(T, T, T, T),
}

impl<T: Clone> Digit<T> {
    fn to_vec(&self) -> Vec<T> {
        match self {
            Digit::One(a) => vec![a.clone()],
            Digit::Two(a, b) => vec![a.clone(), b.clone()],
            Digit::Three(a, b, c) => vec![a.clone(), b.clone(), c.clone()],
            Digit::Four(a, b, c, d) => vec![a.clone(), b.clone(), c.clone(), d.clone()],
        }
    }

    fn push_front(&self, x: T) -> Option<Digit<T>> {
        match self {
            Digit::One(a) => Some(Digit::Two(x, a.clone())),
            Digit::Two(a, b) => Some(Digit::Three(x, a.clone(), b.clone())),
            Digit::Three(a, b, c) => Some(Digit::Four(x, a.clone(), b.clone(), c.clone())),
            Digit::Four(..) => None,
        }
    }

    fn push_back(&self, x: T) -> Option<Digit<T>> {
        match self {
            Digit::One(a) => Some(Digit::Two(a.clone(), x)),
            Digit::Two(a, b) => Some(Digit::Three(a.clone(), b.clone(), x)),
            Digit::Three(a, b, c) => Some(Digit::Four(a.clone(), b.clone(), c.clone(), x)),
            Digit::Four(..) => None,
        }
    }
}

#[derive(Clone)]
enum Node<T> {
    Two(T, T),
    Three(T, T, T),
}

impl<T: Clone> Node<T> {
    fn to_vec(&self) -> Vec<T> {
        match self {
            Node::Two(a, b) => vec![a.clone(), b.clone()],
            Node::Three(a, b, c) => vec![a.clone(), b.clone(), c.clone()],
        }
    }
}

/// A persistent sequence of `T`, sharing structure across versions via
/// `Rc`. Supports amortized O(1) push at either end; full splitting is not
/// needed by the identity engine and is left unimplemented.
#[derive(Clone)]
pub enum FingerTree<T> {
    Empty,
    Single(T),
    Deep(Rc<Digit<T>>, Rc<FingerTree<Node<T>>>, Rc<Digit<T>>),
}

impl<T: Clone> FingerTree<T> {
    pub fn new() -> Self {
        FingerTree::Empty
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FingerTree::Empty)
    }

    pub fn push_front(&self, x: T) -> FingerTree<T> {
        match self {
            FingerTree::Empty => FingerTree::Single(x),
            FingerTree::Single(a) => FingerTree::Deep(
                Rc::new(Digit::One(x)),
                Rc::new(FingerTree::Empty),
                Rc::new(Digit::One(a.clone())),
            ),
            FingerTree::Deep(left, mid, right) => match left.push_front(x) {
                Some(new_left) => {
                    FingerTree::Deep(Rc::new(new_left), Rc::clone(mid), Rc::clone(right))
                }
                None => {
                    // left digit was Four(a,b,c,d); push x in, spill (b,c,d) -> node, keep (x,a)
                    let items = left.to_vec();
                    let node = Node::Three(items[1].clone(), items[2].clone(), items[3].clone());
                    let new_mid = mid.push_front(node);
                    FingerTree::Deep(
                        Rc::new(Digit::Two(x, items[0].clone())),
                        Rc::new(new_mid),
                        Rc::clone(right),
                    )
                }
            },
        }
    }

    pub fn push_back(&self, x: T) -> FingerTree<T> {
        match self {
            FingerTree::Empty => FingerTree::Single(x),
            FingerTree::Single(a) => FingerTree::Deep(
                Rc::new(Digit::One(a.clone())),
                Rc::new(FingerTree::Empty),
                Rc::new(Digit::One(x)),
            ),
            FingerTree::Deep(left, mid, right) => match right.push_back(x) {
                Some(new_right) => {
                    FingerTree::Deep(Rc::clone(left), Rc::clone(mid), Rc::new(new_right))
                }
                None => {
                    let items = right.to_vec();
                    let node = Node::Three(items[0].clone(), items[1].clone(), items[2].clone());
                    let new_mid = mid.push_back(node);
                    FingerTree::Deep(
                        Rc::clone(left),
                        Rc::new(new_mid),
                        Rc::new(Digit::Two(items[3].clone(), x)),
                    )
                }
            },
        }
    }

    /// In-order traversal, materialized. The identity engine only ever
    /// needs the full ordered sequence to fold over, never random access.
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.append_to(&mut out);
        out
    }

    fn append_to(&self, out: &mut Vec<T>) {
        match self {
            FingerTree::Empty => {}
            FingerTree::Single(a) => out.push(a.clone()),
            FingerTree::Deep(left, mid, right) => {
                out.extend(left.to_vec());
                for node in mid.to_vec() {
                    out.extend(node.to_vec());
                }
                out.extend(right.to_vec());
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FingerTree::Empty => 0,
            FingerTree::Single(_) => 1,
            // No cached size field; this is a representation-detail tree,
            // not a performance-critical path for the identity engine.
            _ => self.to_vec().len(),
        }
    }

    pub fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut tree = FingerTree::Empty;
        for item in items {
            tree = tree.push_back(item);
        }
        tree
    }
}

impl<T: Clone> Default for FingerTree<T> {
    fn default() -> Self {
        FingerTree::new()
    }
}
