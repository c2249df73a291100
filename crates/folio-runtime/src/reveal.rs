#![forbid(unsafe_code)]

//! One-shot reveal state for registered elements.
//!
//! # Invariants
//!
//! 1. Each element has exactly two phases: [`RevealPhase::Hidden`] (initial)
//!    and [`RevealPhase::Revealed`] (terminal).
//! 2. `Hidden → Revealed` fires at most once per registration.
//! 3. Nothing moves an element back to `Hidden`; a non-intersecting report is
//!    ignored.
//! 4. Re-registering an id refreshes its layout and keeps its phase.

use std::collections::BTreeMap;

use folio_core::geometry::Rect;

/// Identifier assigned to a revealable node at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visibility phase of a revealable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealed,
}

impl RevealPhase {
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Outcome of an intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// The element just moved `Hidden → Revealed`.
    Revealed,
    /// Nothing changed.
    Unchanged,
    /// The id is not registered.
    Unknown,
}

/// A watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealableElement {
    pub id: ElementId,
    /// Document-space box.
    pub rect: Rect,
    /// 1-based position among the parent's children.
    pub sibling_index: u32,
    pub phase: RevealPhase,
}

/// The set of watched elements, ordered by id.
#[derive(Debug, Clone, Default)]
pub struct RevealRegistry {
    elements: BTreeMap<ElementId, RevealableElement>,
}

impl RevealRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, or refresh the layout of an existing one.
    ///
    /// Returns `true` if the id was new.
    pub fn register(&mut self, id: ElementId, rect: Rect, sibling_index: u32) -> bool {
        match self.elements.get_mut(&id) {
            Some(existing) => {
                existing.rect = rect;
                existing.sibling_index = sibling_index;
                false
            }
            None => {
                self.elements.insert(
                    id,
                    RevealableElement {
                        id,
                        rect,
                        sibling_index,
                        phase: RevealPhase::Hidden,
                    },
                );
                true
            }
        }
    }

    /// Update an element's box. Returns `false` for unknown ids.
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Drop an element.
    pub fn unregister(&mut self, id: ElementId) -> Option<RevealableElement> {
        self.elements.remove(&id)
    }

    /// Apply an intersection report.
    pub fn mark(&mut self, id: ElementId, is_intersecting: bool) -> RevealTransition {
        let Some(element) = self.elements.get_mut(&id) else {
            return RevealTransition::Unknown;
        };
        if !is_intersecting || element.phase.is_revealed() {
            return RevealTransition::Unchanged;
        }
        element.phase = RevealPhase::Revealed;
        RevealTransition::Revealed
    }

    /// Phase of an element; `None` if unregistered.
    #[must_use]
    pub fn phase(&self, id: ElementId) -> Option<RevealPhase> {
        self.elements.get(&id).map(|e| e.phase)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&RevealableElement> {
        self.elements.get(&id)
    }

    /// Elements in id order.
    pub fn iter(&self) -> impl Iterator<Item = &RevealableElement> + '_ {
        self.elements.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements already revealed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.elements.values().filter(|e| e.phase.is_revealed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[u32]) -> RevealRegistry {
        let mut registry = RevealRegistry::new();
        for &id in ids {
            registry.register(ElementId(id), Rect::default(), 1);
        }
        registry
    }

    #[test]
    fn registered_elements_start_hidden() {
        let registry = registry_with(&[1, 2]);
        assert_eq!(registry.phase(ElementId(1)), Some(RevealPhase::Hidden));
        assert_eq!(registry.revealed_count(), 0);
    }

    #[test]
    fn mark_is_one_shot() {
        let mut registry = registry_with(&[1]);
        assert_eq!(registry.mark(ElementId(1), true), RevealTransition::Revealed);
        assert_eq!(registry.mark(ElementId(1), true), RevealTransition::Unchanged);
        assert_eq!(registry.phase(ElementId(1)), Some(RevealPhase::Revealed));
    }

    #[test]
    fn leaving_the_viewport_never_hides() {
        let mut registry = registry_with(&[1]);
        registry.mark(ElementId(1), true);
        assert_eq!(registry.mark(ElementId(1), false), RevealTransition::Unchanged);
        assert_eq!(registry.phase(ElementId(1)), Some(RevealPhase::Revealed));
    }

    #[test]
    fn non_intersecting_report_keeps_hidden() {
        let mut registry = registry_with(&[1]);
        assert_eq!(registry.mark(ElementId(1), false), RevealTransition::Unchanged);
        assert_eq!(registry.phase(ElementId(1)), Some(RevealPhase::Hidden));
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut registry = registry_with(&[]);
        assert_eq!(registry.mark(ElementId(9), true), RevealTransition::Unknown);
        assert!(!registry.set_rect(ElementId(9), Rect::default()));
    }

    #[test]
    fn reregistering_keeps_phase() {
        let mut registry = registry_with(&[1]);
        registry.mark(ElementId(1), true);
        let rect = Rect::new(0.0, 500.0, 100.0, 100.0);
        assert!(!registry.register(ElementId(1), rect, 3));
        let element = registry.get(ElementId(1)).unwrap();
        assert_eq!(element.phase, RevealPhase::Revealed);
        assert_eq!(element.rect, rect);
        assert_eq!(element.sibling_index, 3);
    }

    #[test]
    fn unregister_removes() {
        let mut registry = registry_with(&[1, 2]);
        assert!(registry.unregister(ElementId(1)).is_some());
        assert!(registry.unregister(ElementId(1)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn iteration_is_id_ordered() {
        let registry = registry_with(&[5, 1, 3]);
        let ids: Vec<_> = registry.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}
