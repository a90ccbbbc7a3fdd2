use std::collections::HashMap;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Vertical extent of one page section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, offset: f64) -> bool {
        self.top <= offset && offset < self.top + self.height
    }
}

/// Where sections currently sit on the page. Read on every classification pass,
/// never cached, since fonts and images keep moving things around.
pub trait LayoutProvider {
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds>;
}

/// Layout captured at one instant. Used as the scroll event payload and in tests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    sections: HashMap<String, SectionBounds>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section_id: &str, top: f64, height: f64) -> Self {
        self.sections
            .insert(section_id.to_string(), SectionBounds::new(top, height));
        self
    }

    /// Reads every listed section from another provider.
    pub fn capture<'a>(
        provider: &impl LayoutProvider,
        section_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let sections = section_ids
            .into_iter()
            .filter_map(|id| provider.section_bounds(id).map(|b| (id.to_string(), b)))
            .collect();
        Self { sections }
    }
}

impl LayoutProvider for LayoutSnapshot {
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        self.sections.get(section_id).copied()
    }
}

/// Live layout read from the browser document.
pub struct DomLayout {
    document: web_sys::Document,
}

impl DomLayout {
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl LayoutProvider for DomLayout {
    fn section_bounds(&self, section_id: &str) -> Option<SectionBounds> {
        let element = self
            .document
            .get_element_by_id(section_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds::new(
            element.offset_top() as f64,
            element.offset_height() as f64,
        ))
    }
}
