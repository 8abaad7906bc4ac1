//! Geometry of the stacked single-page document
//!
//! The mobile layout renders every section one after the other. Each frame
//! the renderer records where each section landed, which gives the navigator
//! section-relative metrics (the active section is the "page") and gives
//! navigation a concrete anchor offset to snap to.

use super::progress::ScrollMetrics;

/// Vertical extent of one section, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionExtent {
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default)]
pub struct SinglePageDocument {
    extents: Vec<Option<SectionExtent>>,
    height: f32,
}

impl SinglePageDocument {
    pub fn new(section_count: usize) -> Self {
        Self {
            extents: vec![None; section_count],
            height: 0.0,
        }
    }

    /// Record where a section was laid out this frame
    pub fn record(&mut self, index: usize, top: f32, height: f32) {
        if let Some(slot) = self.extents.get_mut(index) {
            *slot = Some(SectionExtent {
                top,
                height: height.max(0.0),
            });
        }
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn extent(&self, index: usize) -> Option<SectionExtent> {
        self.extents.get(index).copied().flatten()
    }

    /// Scroll offset at which the section's anchor sits at the top of the viewport
    pub fn anchor(&self, index: usize) -> Option<f32> {
        self.extent(index).map(|e| e.top)
    }

    /// Metrics for the whole document (drives the progress bar)
    pub fn document_metrics(&self, scroll_top: f32, viewport_height: f32) -> ScrollMetrics {
        ScrollMetrics::new(scroll_top, self.height, viewport_height)
    }

    /// Metrics with the given section treated as the whole document
    pub fn section_metrics(
        &self,
        index: usize,
        scroll_top: f32,
        viewport_height: f32,
    ) -> Option<ScrollMetrics> {
        let extent = self.extent(index)?;
        Some(ScrollMetrics::new(
            scroll_top - extent.top,
            extent.height,
            viewport_height,
        ))
    }

    /// What the section navigator sees: the active section if it has been laid
    /// out, the whole document otherwise
    pub fn metrics_for(
        &self,
        active: Option<usize>,
        scroll_top: f32,
        viewport_height: f32,
    ) -> ScrollMetrics {
        active
            .and_then(|i| self.section_metrics(i, scroll_top, viewport_height))
            .unwrap_or_else(|| self.document_metrics(scroll_top, viewport_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections() -> SinglePageDocument {
        let mut doc = SinglePageDocument::new(3);
        doc.record(0, 0.0, 900.0);
        doc.record(1, 900.0, 1500.0);
        doc.record(2, 2400.0, 1000.0);
        doc.set_height(3400.0);
        doc
    }

    #[test]
    fn test_anchors_follow_layout() {
        let doc = three_sections();
        assert_eq!(doc.anchor(0), Some(0.0));
        assert_eq!(doc.anchor(2), Some(2400.0));
        assert_eq!(doc.anchor(3), None);
    }

    #[test]
    fn test_section_metrics_are_relative() {
        let doc = three_sections();
        let metrics = doc.section_metrics(1, 1500.0, 800.0).unwrap();
        assert_eq!(metrics.scroll_top, 600.0);
        assert_eq!(metrics.document_height, 1500.0);
        assert_eq!(metrics.remaining(), 100.0);
    }

    #[test]
    fn test_metrics_for_falls_back_to_document() {
        let doc = three_sections();
        assert_eq!(doc.metrics_for(Some(2), 2500.0, 800.0).scroll_top, 100.0);
        let whole = doc.metrics_for(None, 2500.0, 800.0);
        assert_eq!(whole.scroll_top, 2500.0);
        assert_eq!(whole.document_height, 3400.0);
    }

    #[test]
    fn test_unrecorded_section_has_no_metrics() {
        let mut doc = SinglePageDocument::new(2);
        doc.record(0, 0.0, 500.0);
        assert!(doc.section_metrics(1, 0.0, 800.0).is_none());
        doc.record(5, 0.0, 10.0);
        assert!(doc.extent(5).is_none());
    }
}
