use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent};
use yew::prelude::*;

mod config;
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod feature_card;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use pages::home::{scroll_to_section, Home};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuEvent {
    Toggle,
    Close,
}

/// Single authoritative menu flag; the hamburger and panel classes are both
/// derived from the result at render time.
pub fn menu_transition(open: bool, event: MenuEvent) -> bool {
    match event {
        MenuEvent::Toggle => !open,
        MenuEvent::Close => false,
    }
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD_PX
}

static NAV_LINKS: [(&str, &str); 4] = [
    ("home", "Home"),
    ("about", "About"),
    ("features", "Features"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window_clone.scroll_y() {
                        is_scrolled.set(header_scrolled(scroll_y));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    // Escape closes the menu no matter what has focus.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let key_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        menu_open.set(false);
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        key_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(menu_transition(*menu_open, MenuEvent::Toggle));
        })
    };

    let logo_onclick = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(menu_transition(*menu_open, MenuEvent::Close));
            scroll_to_section("home");
        })
    };

    let links = NAV_LINKS.iter().map(|&(target, label)| {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(menu_transition(*menu_open, MenuEvent::Close));
            scroll_to_section(target);
        });
        html! {
            <a href={format!("#{target}")} class="nav-link" onclick={onclick}>{ label }</a>
        }
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" onclick={logo_onclick}>{"Lumen Studio"}</a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for links }
                </div>
            </div>
        </nav>
    }
}

fn mark_body_loaded() {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("loaded");
    }
}

#[function_component]
fn App() -> Html {
    // Body gets its `loaded` marker once the page load event fires, or right
    // away when the app mounts into an already-complete document.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let destructor: Box<dyn FnOnce()> = if document.ready_state() == "complete" {
                mark_body_loaded();
                Box::new(|| ())
            } else {
                let load_callback = Closure::wrap(Box::new(mark_body_loaded) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "load",
                        load_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "load",
                        load_callback.as_ref().unchecked_ref(),
                    );
                })
            };

            move || destructor()
        },
        (),
    );

    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Lumen Studio site starting");
    info!("Yew CSR build, client-side interactions only");

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_state_follows_click_parity() {
        let mut open = false;
        for clicks in 1..=6 {
            open = menu_transition(open, MenuEvent::Toggle);
            assert_eq!(open, clicks % 2 == 1);
        }
    }

    #[test]
    fn close_is_idempotent() {
        assert!(!menu_transition(true, MenuEvent::Close));
        assert!(!menu_transition(false, MenuEvent::Close));
    }

    #[test]
    fn any_close_after_toggles_lands_closed() {
        let open = [MenuEvent::Toggle, MenuEvent::Toggle, MenuEvent::Toggle]
            .into_iter()
            .fold(false, menu_transition);
        assert!(open);
        assert!(!menu_transition(open, MenuEvent::Close));
    }

    #[test]
    fn header_switches_past_threshold() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(100.0));
        assert!(header_scrolled(100.5));
        assert!(header_scrolled(600.0));
    }
}
