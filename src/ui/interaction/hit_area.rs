//! Hit area system for mouse interactions.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::models::{Page, VoteDirection};
use crate::state::DraftField;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Header and sidebar
    /// Switch to a page (header tab or Popular Topics entry)
    Navigate(Page),
    /// Focus the header search box
    FocusSearch,
    /// The Sign In button
    SignIn,

    // Assistant panel
    /// Focus the assistant query field
    FocusAssistant,
    /// The send button next to the query field
    SubmitAssistant,
    /// Click on the answer card
    OpenAnswer,
    /// Close the answer dialog (backdrop or close button)
    CloseAnswer,
    /// A "Related Discussions" entry
    OpenReference(String),

    // Post cards
    /// Highlight a post
    SelectPost(usize),
    /// Up or down arrow on a post
    Vote { post: usize, direction: VoteDirection },
    /// "Show all N comments" / "Show less"
    ToggleComments(usize),
    /// The comment input of a post
    FocusComment(usize),
    /// The "Add Comment" button of a post
    SubmitComment(usize),

    // New Post form
    /// Title or content field
    FocusDraft(DraftField),
    /// The "Submit Post" button
    SubmitDraft,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. Later registrations sit on top of earlier ones, so the
/// answer dialog registered last shadows everything beneath it.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Rect of the hovered area, kept across frames so unchanged hover
    /// does not force a redraw
    hovered: Option<Rect>,
    /// Last known mouse position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Returns the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action.clone())
    }

    /// Update the hover state based on mouse position.
    ///
    /// Returns true if the hover state changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        self.pointer = Some((x, y));
        let new_hovered = self.find_index(x, y).map(|i| self.areas[i].rect);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `rect` if the pointer is over it.
    ///
    /// Query right after registering the area: it is then the topmost
    /// candidate, while areas drawn later in the frame are not known yet.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let (x, y) = self.pointer?;
        let area = self.areas.get(self.find_index(x, y)?)?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        let (x, y) = self.pointer?;
        self.areas.get(self.find_index(x, y)?)
    }

    /// Every registered area, bottom to top.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    /// Get the number of registered areas.
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// First registered rect for `action`, for tests and tooling.
    pub fn rect_for(&self, action: &ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .find(|area| &area.action == action)
            .map(|area| area.rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::SignIn);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_zero_size_not_registered() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(5, 5, 0, 1), ClickAction::SignIn, None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), ClickAction::FocusSearch, None);
        registry.update_hover(5, 5);
        assert!(registry.is_hovering());

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.get_hovered().is_none());
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 40, 20), ClickAction::SelectPost(0), None);
        registry.register(
            make_rect(1, 1, 3, 1),
            ClickAction::Vote {
                post: 0,
                direction: VoteDirection::Up,
            },
            None,
        );

        assert_eq!(
            registry.hit_test(2, 1),
            Some(ClickAction::Vote {
                post: 0,
                direction: VoteDirection::Up
            })
        );
        assert_eq!(registry.hit_test(10, 10), Some(ClickAction::SelectPost(0)));
        assert_eq!(registry.hit_test(50, 50), None);
    }

    #[test]
    fn test_update_hover_returns_changed() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 1), ClickAction::SignIn, None);

        assert!(registry.update_hover(1, 0));
        assert!(!registry.update_hover(2, 0));
        assert!(registry.update_hover(20, 0));
    }

    #[test]
    fn test_hover_style_survives_rerender() {
        let rect = make_rect(0, 0, 10, 1);
        let style = Style::default().fg(Color::Yellow);
        let mut registry = HitAreaRegistry::new();
        registry.register(rect, ClickAction::SignIn, Some(style));
        registry.update_hover(3, 0);
        assert_eq!(registry.get_hover_style(rect), Some(style));

        // Pointer position outlives the per-frame areas
        registry.clear();
        registry.register(rect, ClickAction::SignIn, Some(style));
        assert_eq!(registry.get_hover_style(rect), Some(style));
        assert_eq!(registry.get_hover_style(make_rect(0, 1, 10, 1)), None);
    }

    #[test]
    fn test_rect_for() {
        let mut registry = HitAreaRegistry::new();
        let rect = make_rect(4, 4, 6, 1);
        registry.register(rect, ClickAction::SubmitDraft, None);
        assert_eq!(registry.rect_for(&ClickAction::SubmitDraft), Some(rect));
        assert_eq!(registry.rect_for(&ClickAction::SignIn), None);
    }
}
