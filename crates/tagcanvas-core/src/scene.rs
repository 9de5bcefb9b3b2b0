//! Element table, stacking order and tag queries.
//!
//! The scene owns every drawn element. Callers only ever hold an
//! [`ElementId`] and address elements through a [`TagOrId`] specifier.

use crate::shapes::Shape;
use crate::tags::{Tag, TagOrId, TagSet};
use kurbo::{Affine, Point, Rect, Vec2};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Opaque handle to one drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(Uuid);

impl ElementId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One drawn shape and its tags.
#[derive(Debug, Clone)]
pub struct Element {
    id: ElementId,
    pub shape: Shape,
    pub tags: TagSet,
}

impl Element {
    pub fn id(&self) -> ElementId {
        self.id
    }
}

/// All elements on a surface, back to front.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: HashMap<ElementId, Element>,
    /// Stacking order (back to front).
    z_order: Vec<ElementId>,
    /// Element under the pointer.
    current: Option<ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape on top of the stack.
    pub fn add(&mut self, shape: Shape, tags: TagSet) -> ElementId {
        let id = ElementId::new();
        log::debug!("Created {} {} with tags [{}]", shape.kind(), id, tags);
        self.z_order.push(id);
        self.elements.insert(id, Element { id, shape, tags });
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Get elements in stacking order (back to front).
    pub fn elements_ordered(&self) -> impl Iterator<Item = &Element> {
        self.z_order.iter().filter_map(|id| self.elements.get(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element under the pointer, as of the last [`Scene::update_current`].
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    /// Recompute the element under `point`: the topmost one within
    /// `close_enough` of it.
    pub fn update_current(&mut self, point: Point, close_enough: f64) -> Option<ElementId> {
        let current = self.elements_at_point(point, close_enough).first().copied();
        if current != self.current {
            log::trace!("Current element: {:?}", current);
        }
        self.current = current;
        current
    }

    fn matches(&self, element: &Element, spec: &TagOrId) -> bool {
        match spec {
            TagOrId::All => true,
            TagOrId::Current => self.current == Some(element.id),
            TagOrId::Tag(tag) => element.tags.contains(tag),
            TagOrId::Id(id) => element.id == *id,
        }
    }

    /// Ids matching `spec`, back to front.
    pub fn find_withtag(&self, spec: &TagOrId) -> Vec<ElementId> {
        match spec {
            TagOrId::Id(id) => self.elements.get(id).map(|e| e.id).into_iter().collect(),
            TagOrId::Current => self.current.into_iter().collect(),
            _ => self
                .elements_ordered()
                .filter(|e| self.matches(e, spec))
                .map(|e| e.id)
                .collect(),
        }
    }

    /// Remove every element matching `spec`. Returns how many were removed.
    pub fn delete(&mut self, spec: &TagOrId) -> usize {
        let doomed = self.find_withtag(spec);
        for id in &doomed {
            self.elements.remove(id);
            if self.current == Some(*id) {
                self.current = None;
            }
        }
        self.z_order.retain(|id| self.elements.contains_key(id));
        if !doomed.is_empty() {
            log::debug!("Deleted {} element(s) matching {:?}", doomed.len(), spec);
        }
        doomed.len()
    }

    /// Remove everything.
    pub fn clear(&mut self) -> usize {
        self.delete(&TagOrId::All)
    }

    /// Translate every element matching `spec` by `delta`.
    pub fn move_items(&mut self, spec: &TagOrId, delta: Vec2) -> usize {
        let ids = self.find_withtag(spec);
        let translate = Affine::translate(delta);
        for id in &ids {
            if let Some(element) = self.elements.get_mut(id) {
                element.shape.transform(translate);
            }
        }
        if !ids.is_empty() {
            log::debug!(
                "Moved {} element(s) matching {:?} by ({}, {})",
                ids.len(),
                spec,
                delta.x,
                delta.y
            );
        }
        ids.len()
    }

    /// Add `tag` to every element matching `spec`. Returns how many gained it.
    pub fn addtag_withtag(&mut self, tag: &Tag, spec: &TagOrId) -> usize {
        let mut count = 0;
        for id in self.find_withtag(spec) {
            if let Some(element) = self.elements.get_mut(&id) {
                if element.tags.insert(tag.clone()) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Remove `tag` from every element matching `spec`. Returns how many lost it.
    pub fn dtag(&mut self, spec: &TagOrId, tag: &Tag) -> usize {
        let mut count = 0;
        for id in self.find_withtag(spec) {
            if let Some(element) = self.elements.get_mut(&id) {
                if element.tags.remove(tag) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn gettags(&self, id: ElementId) -> Option<&TagSet> {
        self.elements.get(&id).map(|e| &e.tags)
    }

    /// Flat coordinate list of one element.
    pub fn coords(&self, id: ElementId) -> Option<Vec<f64>> {
        self.elements.get(&id).map(|e| e.shape.coords())
    }

    /// Union of the bounds of every element matching `spec`.
    pub fn bbox(&self, spec: &TagOrId) -> Option<Rect> {
        self.find_withtag(spec)
            .iter()
            .filter_map(|id| self.elements.get(id))
            .map(|e| e.shape.bounds())
            .reduce(|a, b| a.union(b))
    }

    /// Find elements at a point, front to back.
    pub fn elements_at_point(&self, point: Point, tolerance: f64) -> Vec<ElementId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|&id| {
                self.elements
                    .get(&id)
                    .filter(|e| e.shape.hit_test(point, tolerance))
                    .map(|_| id)
            })
            .collect()
    }

    /// The element nearest to `point`. Anything within `halo` counts as
    /// touching it; among equals the topmost wins.
    pub fn find_closest(&self, point: Point, halo: f64) -> Option<ElementId> {
        let mut best: Option<(ElementId, f64)> = None;
        for &id in self.z_order.iter().rev() {
            let Some(element) = self.elements.get(&id) else {
                continue;
            };
            let mut dist = element.shape.distance(point);
            if dist <= halo {
                dist = 0.0;
            }
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Elements whose bounds overlap `rect`, back to front.
    pub fn find_overlapping(&self, rect: Rect) -> Vec<ElementId> {
        self.elements_ordered()
            .filter(|e| e.shape.intersects_rect(rect))
            .map(|e| e.id)
            .collect()
    }
}
