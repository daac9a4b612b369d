//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the appropriate component through the registry.

use crate::events::Action;

/// A rectangular screen region in terminal cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point falls inside this region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// An interactive region that responds to mouse clicks.
///
/// Components create these during render to define clickable areas.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Unique identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click
    pub on_click: Action,

    /// Priority for overlapping regions (higher = checked first)
    /// Use this for popups that should capture clicks over underlying content
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: action,
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    #[allow(dead_code)]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
///
/// Components register their interactive regions here during render,
/// and the mouse handler queries this registry to dispatch events.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains
    /// the point.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y))
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .map(|r| r.on_click.clone())
            .unwrap_or(Action::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        // Register overlapping regions with different priorities
        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::OpenHelp,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::Advance,
            )
            .with_priority(10),
        );

        // Click in popup area should return popup's action
        assert!(matches!(registry.handle_click(50, 50), Action::Advance));

        // Click outside popup should return background's action
        assert!(matches!(registry.handle_click(5, 5), Action::OpenHelp));
    }

    #[test]
    fn test_clear_drops_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register_click("next", ClickRegion::new(0, 0, 10, 10), Action::Advance);
        registry.clear();

        assert!(matches!(registry.handle_click(5, 5), Action::None));
    }
}
