use yew::prelude::*;
use web_sys::MouseEvent;

use crate::scroll::navigation::NavigationItem;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub items: Vec<NavigationItem>,
    pub compact: bool,
    pub mobile_layout: bool,
    pub menu_open: bool,
    pub on_nav_click: Callback<usize>,
    pub on_toggle_menu: Callback<()>,
    pub on_overlay_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        items,
        compact,
        mobile_layout,
        menu_open,
        on_nav_click,
        on_toggle_menu,
        on_overlay_click,
    } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let close_menu = {
        let on_overlay_click = on_overlay_click.clone();
        Callback::from(move |_: MouseEvent| on_overlay_click.emit(()))
    };

    html! {
        <header class={classes!(
            "l-main-header",
            compact.then(|| "l-main-header-is-scrolled"),
            mobile_layout.then(|| "is-mobile-layout"),
        )}>
            <div class={classes!("l-main-header-top", compact.then(|| "is-collapsed"))}>
                <a href="mailto:office@teslawatt.com">{"office@teslawatt.com"}</a>
            </div>
            <div class="l-main-header-bar">
                <a class="m-logo" href="#home">{"Teslawatt"}</a>
                <button
                    class={classes!("m-hamburger-menu", menu_open.then(|| "is-in-x-mode"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={classes!("m-main-navigation", menu_open.then(|| "is-scrolled-in"))}>
                    { for items.iter().enumerate().map(|(index, item)| {
                        let on_nav_click = on_nav_click.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_nav_click.emit(index);
                        });
                        html! {
                            <a
                                href={format!("#{}", item.section_id)}
                                class={classes!(
                                    "m-main-navigation-item",
                                    item.is_active.then(|| "is-active-m-main-navigation-item"),
                                )}
                                {onclick}
                            >
                                { item.label.clone() }
                            </a>
                        }
                    }) }
                </nav>
                {
                    if *menu_open {
                        html! { <div class="mobile-menu-overlay" onclick={close_menu}></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </header>
    }
}
