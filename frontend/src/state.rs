use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;

use crate::scroll::navigation::{header_is_compact, NavigationItem, NavigationState};
use crate::scroll::sections::LayoutSnapshot;

/// Widths at or below this use the mobile layout (hamburger menu, no scroll spy).
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Space the desktop header takes above the hero.
pub const DESKTOP_HEADER_HEIGHT: f64 = 130.0;
/// The hero "Contact us" button stops this far above the contact section.
/// Navigation items scroll to the section top itself.
pub const CONTACT_TRIGGER_PADDING: f64 = 100.0;

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

pub fn hero_height(window_width: f64, window_height: f64) -> f64 {
    if is_mobile_width(window_width) {
        window_height
    } else {
        (window_height - DESKTOP_HEADER_HEIGHT).max(0.0)
    }
}

pub fn site_navigation() -> NavigationState {
    NavigationState::new(vec![
        NavigationItem::new("home", "Home"),
        NavigationItem::new("services", "Services"),
        NavigationItem::new("about", "About us"),
        NavigationItem::new("careers", "Careers"),
        NavigationItem::new("contact", "Contact"),
    ])
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// `real_scroll` is false while one of our own animations is moving the viewport.
    Scrolled { offset: f64, real_scroll: bool, layout: LayoutSnapshot },
    Resized { width: f64, height: f64 },
    NavClicked { index: usize },
    HamburgerToggled,
    OverlayClicked,
    ServiceHovered { index: usize },
    ReadMoreToggled { post: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub nav: NavigationState,
    pub header_compact: bool,
    pub mobile_layout: bool,
    pub hero_height: Option<f64>,
    pub menu_open: bool,
    pub active_service: Option<usize>,
    pub expanded_posts: BTreeSet<usize>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(site_navigation())
    }
}

impl PageState {
    pub fn new(nav: NavigationState) -> Self {
        Self {
            nav,
            header_compact: false,
            mobile_layout: false,
            hero_height: None,
            menu_open: false,
            active_service: None,
            expanded_posts: BTreeSet::new(),
        }
    }

    pub fn is_expanded(&self, post: usize) -> bool {
        self.expanded_posts.contains(&post)
    }

    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Scrolled { offset, real_scroll, layout } => {
                self.header_compact = header_is_compact(offset, self.mobile_layout);
                if real_scroll && !self.mobile_layout {
                    self.nav.classify(offset, &layout);
                }
            }
            UiEvent::Resized { width, height } => {
                let mobile = is_mobile_width(width);
                if self.mobile_layout && !mobile {
                    self.menu_open = false;
                }
                self.mobile_layout = mobile;
                self.hero_height = Some(hero_height(width, height));
                if mobile {
                    self.header_compact = false;
                }
            }
            UiEvent::NavClicked { index } => {
                if index < self.nav.items.len() {
                    self.nav.activate(index);
                }
                self.menu_open = false;
            }
            UiEvent::HamburgerToggled => self.menu_open = !self.menu_open,
            UiEvent::OverlayClicked => self.menu_open = false,
            UiEvent::ServiceHovered { index } => self.active_service = Some(index),
            UiEvent::ReadMoreToggled { post } => {
                if !self.expanded_posts.remove(&post) {
                    self.expanded_posts.insert(post);
                }
            }
        }
    }
}

impl Reducible for PageState {
    type Action = UiEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
