use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

mod config;
mod model;
mod theme;
mod components {
    pub mod about;
    pub mod area_grid;
    pub mod news_feed;
    pub mod question_board;
}
mod pages {
    pub mod home;
}

use model::{accent_for_section, NAV_LINKS};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

/// Currently highlighted section and the accent the header carries for it.
/// Keeping both in one value means the nav can never show two active links.
#[derive(Clone, PartialEq)]
struct ActiveSection {
    id: String,
    accent: Option<String>,
}

impl ActiveSection {
    fn initial() -> Self {
        ActiveSection::enter("inicio", None)
    }

    /// Activates a section, preferring the matching nav link's color and
    /// falling back to whatever the section element itself carries.
    fn enter(id: &str, fallback: Option<String>) -> Self {
        ActiveSection {
            id: id.to_string(),
            accent: accent_for_section(id).map(str::to_string).or(fallback),
        }
    }
}

fn scroll_section_into_view(section_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(target) = document.get_element_by_id(section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let active = use_state(ActiveSection::initial);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let is_scrolled = is_scrolled.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    is_scrolled.set(theme::header_scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .is_ok()
                    {
                        // Initial state before the first scroll event arrives
                        if let Ok(scroll_y) = window.scroll_y() {
                            is_scrolled.set(theme::header_scrolled(scroll_y));
                        }
                        Box::new(move || {
                            if let Some(win) = web_sys::window() {
                                let _ = win.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    // Re-apply the active link while the user scrolls through the sections.
    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(Array, IntersectionObserver)>::new(
                            move |entries: Array, _observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                                    if !entry.is_intersecting() {
                                        continue;
                                    }
                                    let target = entry.target();
                                    let fallback = target.get_attribute("data-color");
                                    active.set(ActiveSection::enter(&target.id(), fallback));
                                }
                            },
                        );
                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from(theme::SECTION_VISIBILITY_THRESHOLD));
                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            Ok(observer) => {
                                if let Ok(sections) = document.query_selector_all("section[id]") {
                                    for index in 0..sections.length() {
                                        if let Some(section) = sections.item(index) {
                                            if let Ok(section) = section.dyn_into::<Element>() {
                                                observer.observe(&section);
                                            }
                                        }
                                    }
                                }
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(_) => Box::new(|| ()),
                        }
                    } else {
                        Box::new(|| ())
                    };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let header_style = theme::header_accent_style(active.accent.as_deref());

    html! {
        <header
            id="siteHeader"
            class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}
            style={(!header_style.is_empty()).then_some(header_style)}
        >
            <nav class="nav-content">
                <a class="nav-logo" href="#inicio">{"CampusLink"}</a>
                <div class="nav-links">
                    {
                        for NAV_LINKS.iter().map(|link| {
                            let is_active = active.id == link.section_id;
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    active.set(ActiveSection::enter(link.section_id, None));
                                    scroll_section_into_view(link.section_id);
                                })
                            };
                            html! {
                                <a
                                    href={format!("#{}", link.section_id)}
                                    class={classes!("nav-link", is_active.then(|| "active"))}
                                    data-section={link.section_id}
                                    {onclick}
                                >
                                    {link.label}
                                </a>
                            }
                        })
                    }
                </div>
            </nav>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: rgba(255, 255, 255, 0.9);
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    backdrop-filter: blur(8px);
                    box-shadow: 0 2px 12px rgba(15, 23, 42, 0.08);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 2rem;
                }

                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: bold;
                    color: #0f172a;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #475569;
                    text-decoration: none;
                    padding-bottom: 0.2rem;
                    border-bottom: 2px solid transparent;
                    transition: all 0.2s ease;
                }

                .nav-link:hover {
                    color: #0f172a;
                }

                .nav-link.active {
                    color: #0f172a;
                    font-weight: 600;
                    border-bottom-color: var(--active-color, #0f172a);
                }

                @media (max-width: 768px) {
                    .nav-content {
                        flex-direction: column;
                        gap: 0.75rem;
                    }

                    .nav-links {
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_sections_use_the_link_color_over_the_fallback() {
        let active = ActiveSection::enter("noticias", Some("#123456".into()));
        assert_eq!(active.accent.as_deref(), Some("#dc2626"));
    }

    #[test]
    fn unlinked_sections_fall_back_to_their_own_color() {
        let active = ActiveSection::enter("externa", Some("#123456".into()));
        assert_eq!(active.accent.as_deref(), Some("#123456"));
    }

    #[test]
    fn initial_section_is_inicio_with_its_accent() {
        let active = ActiveSection::initial();
        assert_eq!(active.id, "inicio");
        assert_eq!(active.accent.as_deref(), Some("#2563eb"));
    }

    #[test]
    fn section_ids_are_unique_so_one_link_is_active_at_a_time() {
        for link in NAV_LINKS {
            let matching = NAV_LINKS
                .iter()
                .filter(|l| l.section_id == link.section_id)
                .count();
            assert_eq!(matching, 1);
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
