use crate::scroll::animation::scroll_target;
use crate::scroll::sections::LayoutProvider;

/// Scroll offset past which the desktop header collapses its top bar.
pub const COMPACT_HEADER_THRESHOLD: f64 = 70.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationItem {
    pub section_id: String,
    pub label: String,
    pub is_active: bool,
}

impl NavigationItem {
    pub fn new(section_id: &str, label: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            label: label.to_string(),
            is_active: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    pub items: Vec<NavigationItem>,
}

impl NavigationState {
    pub fn new(items: Vec<NavigationItem>) -> Self {
        Self { items }
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_active)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.section_id.as_str())
    }

    /// Viewport offset a click on item `index` scrolls to. Padding belongs to the
    /// trigger that was clicked, not to the item.
    pub fn scroll_target_for(
        &self,
        index: usize,
        extra_padding: f64,
        layout: &impl LayoutProvider,
    ) -> Option<f64> {
        let item = self.items.get(index)?;
        let bounds = layout.section_bounds(&item.section_id)?;
        Some(scroll_target(bounds.top, extra_padding))
    }

    pub fn index_of(&self, section_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.section_id == section_id)
    }

    /// Marks `index` active and everything else inactive. Out of range clears all.
    pub fn activate(&mut self, index: usize) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.is_active = i == index;
        }
    }

    /// Activates the item whose section contains `offset`. Sections are expected not
    /// to overlap; if they do, the first match in item order wins. No match, or a
    /// section missing from the layout, leaves nothing active.
    pub fn classify(&mut self, offset: f64, layout: &impl LayoutProvider) {
        let hit = self.items.iter().position(|item| {
            layout
                .section_bounds(&item.section_id)
                .map_or(false, |bounds| bounds.contains(offset))
        });
        match hit {
            Some(index) => self.activate(index),
            None => self.items.iter_mut().for_each(|item| item.is_active = false),
        }
    }
}

pub fn header_is_compact(offset: f64, mobile_layout: bool) -> bool {
    !mobile_layout && offset > COMPACT_HEADER_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::sections::LayoutSnapshot;
    use proptest::prelude::*;

    fn site_nav() -> NavigationState {
        NavigationState::new(vec![
            NavigationItem::new("home", "Home"),
            NavigationItem::new("services", "Services"),
            NavigationItem::new("contact", "Contact"),
        ])
    }

    fn site_layout() -> LayoutSnapshot {
        LayoutSnapshot::new()
            .with_section("home", 100.0, 600.0)
            .with_section("services", 700.0, 400.0)
            .with_section("contact", 1100.0, 300.0)
    }

    #[test]
    fn offset_inside_a_section_activates_it() {
        let mut nav = site_nav();
        nav.classify(850.0, &site_layout());
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn section_boundary_belongs_to_the_lower_section() {
        let mut nav = site_nav();
        nav.classify(700.0, &site_layout());
        assert_eq!(nav.active_index(), Some(1));
        nav.classify(699.0, &site_layout());
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn above_first_section_clears_everything() {
        let mut nav = site_nav();
        nav.activate(2);
        nav.classify(20.0, &site_layout());
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn missing_section_is_never_active() {
        let mut nav = site_nav();
        let layout = LayoutSnapshot::new().with_section("home", 0.0, 100.0);
        nav.classify(1200.0, &layout);
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn scroll_target_uses_the_trigger_padding() {
        let nav = site_nav();
        assert_eq!(nav.scroll_target_for(2, 0.0, &site_layout()), Some(1100.0));
        assert_eq!(nav.scroll_target_for(2, 100.0, &site_layout()), Some(1000.0));
        assert_eq!(nav.scroll_target_for(7, 0.0, &site_layout()), None);
    }

    #[test]
    fn header_compacts_past_threshold_on_desktop_only() {
        assert!(!header_is_compact(70.0, false));
        assert!(header_is_compact(70.5, false));
        assert!(!header_is_compact(500.0, true));
    }

    proptest! {
        #[test]
        fn at_most_one_item_active_and_it_contains_the_offset(
            heights in prop::collection::vec(1.0f64..800.0, 1..8),
            start in 0.0f64..300.0,
            offset in 0.0f64..6000.0,
        ) {
            let mut layout = LayoutSnapshot::new();
            let mut items = Vec::new();
            let mut top = start;
            for (i, height) in heights.iter().enumerate() {
                let id = format!("section-{}", i);
                layout = layout.with_section(&id, top, *height);
                items.push(NavigationItem::new(&id, &id));
                top += height;
            }
            let mut nav = NavigationState::new(items);
            nav.classify(offset, &layout);

            let active: Vec<_> = nav.items.iter().filter(|item| item.is_active).collect();
            prop_assert!(active.len() <= 1);

            let expected = nav.items.iter().position(|item| {
                layout.section_bounds(&item.section_id).unwrap().contains(offset)
            });
            prop_assert_eq!(nav.active_index(), expected);
        }
    }
}
