use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

pub fn reveal_style(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;"
    } else {
        "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;"
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: String,
    #[prop_or_default]
    pub class: Classes,
    /// Above-the-fold sections skip the observer and render visible at once.
    #[prop_or(false)]
    pub force_visible: bool,
    #[prop_or_default]
    pub on_visible: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Section that fades in the first time it crosses into the viewport.
///
/// Each section owns its observer; on first intersection the section flips to
/// its resting style, `on_visible` fires, and the observer disconnects, so the
/// transition can never run backwards.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealSectionProps) -> Html {
    let visible = use_state(|| props.force_visible);
    let node = use_node_ref();

    {
        let visible = visible.clone();
        let node = node.clone();
        let on_visible = props.on_visible.clone();
        let force_visible = props.force_visible;
        use_effect_with_deps(
            move |_| {
                let mut teardown: Option<Box<dyn FnOnce()>> = None;
                if !force_visible {
                    if let Some(element) = node.cast::<web_sys::Element>() {
                        let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                            Rc::new(RefCell::new(None));

                        let callback = {
                            let visible = visible.clone();
                            let observer_slot = observer_slot.clone();
                            Closure::wrap(Box::new(
                                move |entries: js_sys::Array, _observer: IntersectionObserver| {
                                    for entry in entries.iter() {
                                        let entry: IntersectionObserverEntry =
                                            entry.unchecked_into();
                                        if entry.is_intersecting() {
                                            visible.set(true);
                                            if let Some(cb) = on_visible.as_ref() {
                                                cb.emit(());
                                            }
                                            if let Some(observer) =
                                                observer_slot.borrow_mut().take()
                                            {
                                                observer.disconnect();
                                            }
                                        }
                                    }
                                },
                            )
                                as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
                        };

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
                        options.set_root_margin(config::REVEAL_ROOT_MARGIN);

                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&element);
                            *observer_slot.borrow_mut() = Some(observer);
                            teardown = Some(Box::new(move || {
                                if let Some(observer) = observer_slot.borrow_mut().take() {
                                    observer.disconnect();
                                }
                                drop(callback);
                            }));
                        }
                    }
                }
                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            class={props.class.clone()}
            ref={node}
            style={reveal_style(*visible)}
        >
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::reveal_style;

    #[test]
    fn hidden_sections_sit_transparent_and_offset() {
        let style = reveal_style(false);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(20px)"));
    }

    #[test]
    fn visible_sections_rest_at_identity() {
        let style = reveal_style(true);
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
    }
}
