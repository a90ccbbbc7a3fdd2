use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::components::contact_form::ContactForm;
use crate::components::header::Header;
use crate::components::job_posts::JobPosts;
use crate::components::services::Services;
use crate::scroll::animation::{animate_window_scroll, AnimationHandle, ScrollAnimation};
use crate::scroll::coordinator::ScrollCoordinator;
use crate::scroll::sections::{DomLayout, LayoutSnapshot};
use crate::state::{PageState, UiEvent, CONTACT_TRIGGER_PADDING};

fn window_size(window: &web_sys::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn current_layout(section_ids: &[String]) -> LayoutSnapshot {
    match DomLayout::new() {
        Some(dom) => LayoutSnapshot::capture(&dom, section_ids.iter().map(String::as_str)),
        None => LayoutSnapshot::new(),
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let page = use_reducer(PageState::default);
    let coordinator = use_state(ScrollCoordinator::new);
    // The in-flight animation, if any. Replacing it interrupts the old one.
    let animation: Rc<RefCell<Option<AnimationHandle>>> = use_mut_ref(|| None);

    {
        let dispatcher = page.dispatcher();
        let coordinator = (*coordinator).clone();
        let section_ids: Vec<String> = page.nav.section_ids().map(str::to_string).collect();

        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_dispatcher = dispatcher.clone();
            let scroll_callback = Closure::wrap(Box::new(move || {
                let offset = window_clone.scroll_y().unwrap_or(0.0);
                scroll_dispatcher.dispatch(UiEvent::Scrolled {
                    offset,
                    real_scroll: coordinator.is_real_scroll(),
                    layout: current_layout(&section_ids),
                });
            }) as Box<dyn FnMut()>);

            let resize_window = window.clone();
            let resize_callback = Closure::wrap(Box::new(move || {
                let (width, height) = window_size(&resize_window);
                dispatcher.dispatch(UiEvent::Resized { width, height });
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            ).unwrap();
            window.add_event_listener_with_callback(
                "resize",
                resize_callback.as_ref().unchecked_ref(),
            ).unwrap();

            // Initial check; resize first so the scroll pass knows the layout mode
            resize_callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&JsValue::NULL).unwrap();
            scroll_callback.as_ref().unchecked_ref::<web_sys::js_sys::Function>().call0(&JsValue::NULL).unwrap();

            move || {
                window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ).unwrap();
                window.remove_event_listener_with_callback(
                    "resize",
                    resize_callback.as_ref().unchecked_ref(),
                ).unwrap();
            }
        }, ());
    }

    // (item index, pixels to stop short of the section top)
    let scroll_to = {
        let dispatcher = page.dispatcher();
        let coordinator = (*coordinator).clone();
        let nav = page.nav.clone();
        let animation = animation.clone();
        Callback::from(move |(index, extra_padding): (usize, f64)| {
            if index >= nav.items.len() {
                return;
            }
            dispatcher.dispatch(UiEvent::NavClicked { index });

            let target = DomLayout::new().and_then(|dom| nav.scroll_target_for(index, extra_padding, &dom));
            let Some(target) = target else {
                log::warn!("No section found for navigation item {}", nav.items[index].section_id);
                return;
            };
            let from = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);

            // Take the new guard before the old animation lets go of its own.
            let guard = coordinator.suspend();
            let handle = animate_window_scroll(ScrollAnimation::new(from, target), guard);
            *animation.borrow_mut() = Some(handle);
        })
    };
    let on_nav_click = scroll_to.reform(|index: usize| (index, 0.0));

    let on_toggle_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiEvent::HamburgerToggled))
    };
    let on_overlay_click = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(UiEvent::OverlayClicked))
    };
    let on_service_hover = {
        let dispatcher = page.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(UiEvent::ServiceHovered { index }))
    };
    let on_read_more = {
        let dispatcher = page.dispatcher();
        Callback::from(move |post: usize| dispatcher.dispatch(UiEvent::ReadMoreToggled { post }))
    };

    let contact_index = page.nav.index_of("contact");
    let on_contact_us = {
        let scroll_to = scroll_to.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(index) = contact_index {
                scroll_to.emit((index, CONTACT_TRIGGER_PADDING));
            }
        })
    };

    let hero_style = page
        .hero_height
        .map(|height| format!("height: {}px;", height))
        .unwrap_or_default();

    html! {
        <div class="landing-page">
            <Header
                items={page.nav.items.clone()}
                compact={page.header_compact}
                mobile_layout={page.mobile_layout}
                menu_open={page.menu_open}
                {on_nav_click}
                {on_toggle_menu}
                {on_overlay_click}
            />
            <section
                id="home"
                class={classes!("m-hero", page.mobile_layout.then(|| "m-hero-is-on-mobile"))}
                style={hero_style}
            >
                <h1>{"Clean energy, installed right."}</h1>
                <p>{"Solar, storage and charging solutions for homes and businesses."}</p>
                <a href="#contact" class="m-button js-contact-us-trigger" onclick={on_contact_us}>
                    {"Contact us"}
                </a>
            </section>
            <Services active={page.active_service} on_hover={on_service_hover} />
            <section id="about" class="m-about">
                <h2>{"About us"}</h2>
                <p>{"Teslawatt is a team of engineers and installers who have been building renewable energy systems for over a decade."}</p>
            </section>
            <JobPosts expanded={page.expanded_posts.clone()} on_toggle={on_read_more} />
            <ContactForm />
        </div>
    }
}
