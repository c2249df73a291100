#![forbid(unsafe_code)]

//! Viewport-intersection detection.
//!
//! A software rendition of the browser's intersection observer: the host
//! reports element boxes, and [`IntersectionObserver::take_records`]
//! evaluates them against the current viewport.
//!
//! # Semantics
//!
//! - The root is the viewport outset by `root_margin` (negative edges shrink
//!   it, so `0 0 -100px 0` requires elements to clear the bottom 100px).
//! - Ratio is the visible share of the target's area. Zero-area targets have
//!   ratio 1 when they touch the root and 0 otherwise.
//! - A target counts as intersecting when it touches the root and its ratio
//!   is at least `threshold`.
//! - A record is produced for every target on its first evaluation after
//!   `observe`, then only when its intersecting state flips.

use std::collections::BTreeMap;

use folio_core::geometry::{Insets, Rect};

use crate::reveal::ElementId;

/// Observer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction, in `[0, 1]`.
    pub threshold: f64,
    /// CSS-style margin around the viewport.
    pub root_margin: Insets,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: Insets::new(0.0, 0.0, -100.0, 0.0),
        }
    }
}

/// One intersection report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: ElementId,
    pub is_intersecting: bool,
    /// Visible fraction in `[0, 1]`.
    pub ratio: f64,
    /// The target's box at evaluation time.
    pub bounding: Rect,
}

#[derive(Debug, Clone, Copy)]
struct Target {
    rect: Rect,
    last: Option<bool>,
}

/// Watches a set of targets against a viewport.
#[derive(Debug, Clone)]
pub struct IntersectionObserver {
    options: ObserverOptions,
    targets: BTreeMap<ElementId, Target>,
    connected: bool,
}

impl IntersectionObserver {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            targets: BTreeMap::new(),
            connected: true,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ObserverOptions {
        &self.options
    }

    /// Start watching a target. Observing an already-watched id only
    /// refreshes its box.
    pub fn observe(&mut self, id: ElementId, rect: Rect) {
        self.connected = true;
        self.targets
            .entry(id)
            .and_modify(|t| t.rect = rect)
            .or_insert(Target { rect, last: None });
    }

    /// Refresh a watched target's box. Returns `false` if it is not watched.
    pub fn update_target(&mut self, id: ElementId, rect: Rect) -> bool {
        match self.targets.get_mut(&id) {
            Some(target) => {
                target.rect = rect;
                true
            }
            None => false,
        }
    }

    /// Stop watching one target.
    pub fn unobserve(&mut self, id: ElementId) -> bool {
        self.targets.remove(&id).is_some()
    }

    /// Stop watching everything. Later `take_records` calls return nothing
    /// until a target is observed again.
    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.connected = false;
    }

    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether `id` is watched.
    #[must_use]
    pub fn is_observing(&self, id: ElementId) -> bool {
        self.targets.contains_key(&id)
    }

    /// The detection root for a viewport.
    #[must_use]
    pub fn root_for(&self, viewport: Rect) -> Rect {
        viewport.outset(self.options.root_margin)
    }

    /// Evaluate all targets against `viewport` (document-space rectangle of
    /// the visible area) and return the records that are due.
    pub fn take_records(&mut self, viewport: Rect) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }
        let root = self.root_for(viewport);
        let threshold = self.options.threshold;
        let mut records = Vec::new();
        for (&id, target) in &mut self.targets {
            let (touches, ratio) = visible_ratio(&target.rect, &root);
            let is_intersecting = touches && ratio >= threshold;
            if target.last == Some(is_intersecting) {
                continue;
            }
            target.last = Some(is_intersecting);
            records.push(IntersectionEntry {
                target: id,
                is_intersecting,
                ratio,
                bounding: target.rect,
            });
        }
        records
    }
}

/// Whether `target` touches `root`, and the visible fraction of its area.
#[must_use]
pub fn visible_ratio(target: &Rect, root: &Rect) -> (bool, f64) {
    let Some(inter) = target.intersection(root) else {
        return (false, 0.0);
    };
    let area = target.area();
    if area <= 0.0 {
        return (true, 1.0);
    }
    (true, (inter.area() / area).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT_W: f64 = 1280.0;
    const VIEWPORT_H: f64 = 800.0;

    fn viewport_at(scroll: f64) -> Rect {
        Rect::new(0.0, scroll, VIEWPORT_W, VIEWPORT_H)
    }

    fn card(y: f64) -> Rect {
        Rect::new(100.0, y, 400.0, 200.0)
    }

    #[test]
    fn first_evaluation_reports_every_target() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(100.0));
        observer.observe(ElementId(2), card(2000.0));
        let records = observer.take_records(viewport_at(0.0));
        assert_eq!(records.len(), 2);
        assert!(records[0].is_intersecting);
        assert!(!records[1].is_intersecting);
        assert_eq!(records[1].ratio, 0.0);
    }

    #[test]
    fn unchanged_state_produces_no_record() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(100.0));
        observer.take_records(viewport_at(0.0));
        assert!(observer.take_records(viewport_at(10.0)).is_empty());
    }

    #[test]
    fn bottom_margin_delays_entry() {
        // Root bottom sits at scroll + 700. A 200px card at y=690 shows 10px
        // (5%) at scroll 0 and 20px (10%) at scroll 10.
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(690.0));
        let records = observer.take_records(viewport_at(0.0));
        assert!(!records[0].is_intersecting, "only 10px inside the root");

        let records = observer.take_records(viewport_at(10.0));
        assert_eq!(records.len(), 1);
        assert!(records[0].is_intersecting);
        assert!((records[0].ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn without_margin_the_whole_viewport_counts() {
        let mut observer = IntersectionObserver::new(ObserverOptions {
            threshold: 0.1,
            root_margin: Insets::ZERO,
        });
        observer.observe(ElementId(1), card(750.0));
        assert!(observer.take_records(viewport_at(0.0))[0].is_intersecting);
    }

    #[test]
    fn leaving_produces_a_record() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(100.0));
        observer.take_records(viewport_at(0.0));
        let records = observer.take_records(viewport_at(5000.0));
        assert_eq!(records.len(), 1);
        assert!(!records[0].is_intersecting);
    }

    #[test]
    fn zero_area_target_inside_root_counts() {
        let (touches, ratio) = visible_ratio(
            &Rect::new(10.0, 10.0, 0.0, 0.0),
            &Rect::new(0.0, 0.0, 100.0, 100.0),
        );
        assert!(touches);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn disconnect_silences_records() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(100.0));
        observer.disconnect();
        assert!(!observer.is_connected());
        assert_eq!(observer.target_count(), 0);
        assert!(observer.take_records(viewport_at(0.0)).is_empty());
    }

    #[test]
    fn update_target_moves_box() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(3000.0));
        assert!(!observer.take_records(viewport_at(0.0))[0].is_intersecting);
        assert!(observer.update_target(ElementId(1), card(100.0)));
        assert!(observer.take_records(viewport_at(0.0))[0].is_intersecting);
        assert!(!observer.update_target(ElementId(7), card(0.0)));
    }

    #[test]
    fn unobserve_stops_reports() {
        let mut observer = IntersectionObserver::new(ObserverOptions::default());
        observer.observe(ElementId(1), card(100.0));
        assert!(observer.unobserve(ElementId(1)));
        assert!(!observer.unobserve(ElementId(1)));
        assert!(observer.take_records(viewport_at(0.0)).is_empty());
    }
}
