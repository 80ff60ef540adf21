use indexmap::IndexMap;
use std::{cell::RefCell, rc::Rc};

/// A shape owned by its point and shared by reference with draw buckets.
///
/// `Rc<RefCell<_>>` keeps shapes on the thread that runs layout passes.
pub type SharedShape<S> = Rc<RefCell<S>>;

/// Identity of a shared shape, stable for as long as the shape is alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeKey(usize);

impl ShapeKey {
    pub fn of<S>(shape: &SharedShape<S>) -> Self {
        Self(Rc::as_ptr(shape) as *const () as usize)
    }
}

/// Set of shapes to draw in the current pass, in insertion order
#[derive(Debug)]
pub struct DrawBucket<S> {
    shapes: IndexMap<ShapeKey, SharedShape<S>>,
}

impl<S> Default for DrawBucket<S> {
    fn default() -> Self {
        Self {
            shapes: IndexMap::new(),
        }
    }
}

impl<S> DrawBucket<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shape, returns `false` when it was already in the bucket
    pub fn insert(&mut self, shape: &SharedShape<S>) -> bool {
        self.shapes
            .insert(ShapeKey::of(shape), Rc::clone(shape))
            .is_none()
    }

    pub fn contains(&self, shape: &SharedShape<S>) -> bool {
        self.shapes.contains_key(&ShapeKey::of(shape))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SharedShape<S>> + '_ {
        self.shapes.values()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
