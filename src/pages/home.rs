use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::counter::StatItem;
use crate::components::feature_card::FeatureCard;
use crate::components::reveal::RevealSection;
use crate::config;

/// Smooth-scroll to a section by id. Unknown ids are a silent no-op.
pub fn scroll_to_section(section_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id(section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    -(scroll_y * config::PARALLAX_FACTOR)
}

#[function_component(Home)]
pub fn home() -> Html {
    let parallax = use_state(|| 0.0);
    let counters_active = use_state(|| false);

    {
        let parallax = parallax.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Ok(scroll_y) = window_clone.scroll_y() {
                        parallax.set(parallax_offset(scroll_y));
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

    let on_about_visible = {
        let counters_active = counters_active.clone();
        Callback::from(move |_| counters_active.set(true))
    };

    let cta_onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    let hero_content_style = format!("transform: translateY({}px);", *parallax);

    html! {
        <main>
            <style>{ PAGE_CSS }</style>

            <RevealSection id="home" class="hero" force_visible={true}>
                <div class="hero-content" style={hero_content_style}>
                    <h1>{"Design that moves people"}</h1>
                    <p class="hero-subtitle">
                        {"Lumen Studio builds brands, products and campaigns that outlast the scroll."}
                    </p>
                    <button class="cta-button" onclick={cta_onclick}>{"Start a project"}</button>
                </div>
            </RevealSection>

            <RevealSection id="about" class="about" on_visible={on_about_visible}>
                <h2>{"About us"}</h2>
                <p class="section-lead">
                    {"We are a small team of designers and engineers who have shipped work \
                      for startups and household names alike. Numbers we are proud of:"}
                </p>
                <div class="stats-grid">
                    <StatItem target={500} label="Projects delivered" active={*counters_active} />
                    <StatItem target={12} label="Years in business" active={*counters_active} />
                    <StatItem target={8} label="Design awards" active={*counters_active} />
                </div>
            </RevealSection>

            <RevealSection id="features" class="features">
                <h2>{"What we do"}</h2>
                <div class="features-grid">
                    <FeatureCard
                        icon="◆"
                        title="Brand identity"
                        description="Naming, logo systems and guidelines that scale from favicon to billboard."
                    />
                    <FeatureCard
                        icon="▲"
                        title="Product design"
                        description="Interfaces designed in the open, tested with real users, shipped with your team."
                    />
                    <FeatureCard
                        icon="●"
                        title="Web engineering"
                        description="Fast, accessible sites built on modern tooling, measured and tuned."
                    />
                    <FeatureCard
                        icon="■"
                        title="Campaigns"
                        description="Launch films, landing pages and social kits that land the message."
                    />
                </div>
            </RevealSection>

            <RevealSection id="contact" class="contact">
                <h2>{"Get in touch"}</h2>
                <p class="section-lead">{"Tell us what you are building. We reply within two working days."}</p>
                <ContactForm />
            </RevealSection>

            <footer class="footer">
                <p>{"© 2026 Lumen Studio. All rights reserved."}</p>
            </footer>
        </main>
    }
}

const PAGE_CSS: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }
    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1a1a2e;
        background: #fff;
        opacity: 0;
    }
    body.loaded {
        opacity: 1;
        transition: opacity 0.4s ease;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 100;
        background: #fff;
        transition: background 0.3s ease, backdrop-filter 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(10px);
        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        max-width: 1100px;
        margin: 0 auto;
        padding: 1rem 2rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.25rem;
        letter-spacing: 0.05em;
        cursor: pointer;
        text-decoration: none;
        color: inherit;
    }
    .nav-link {
        margin-left: 2rem;
        text-decoration: none;
        color: inherit;
        cursor: pointer;
    }
    .nav-link:hover {
        color: #5b5bd6;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 6px;
    }
    .burger-menu span {
        display: block;
        width: 24px;
        height: 2px;
        background: #1a1a2e;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }
    .burger-menu.active span:nth-child(1) {
        transform: translateY(7px) rotate(45deg);
    }
    .burger-menu.active span:nth-child(2) {
        opacity: 0;
    }
    .burger-menu.active span:nth-child(3) {
        transform: translateY(-7px) rotate(-45deg);
    }
    @media (max-width: 768px) {
        .burger-menu {
            display: flex;
        }
        .nav-right {
            position: absolute;
            top: 100%;
            left: 0;
            width: 100%;
            background: #fff;
            display: none;
            flex-direction: column;
            padding: 1rem 2rem;
            box-shadow: 0 8px 16px rgba(0, 0, 0, 0.1);
        }
        .nav-right.mobile-menu-open {
            display: flex;
        }
        .nav-link {
            margin: 0.5rem 0;
        }
    }
    section {
        max-width: 1100px;
        margin: 0 auto;
        padding: 6rem 2rem;
    }
    .hero {
        min-height: 90vh;
        display: flex;
        align-items: center;
        overflow: hidden;
    }
    .hero h1 {
        font-size: 3.5rem;
        line-height: 1.1;
        margin-bottom: 1rem;
    }
    .hero-subtitle {
        font-size: 1.25rem;
        color: #55556d;
        margin-bottom: 2rem;
        max-width: 36rem;
    }
    .cta-button {
        background: #5b5bd6;
        color: #fff;
        border: none;
        border-radius: 8px;
        padding: 0.9rem 2rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .cta-button:hover {
        background: #4a4ac4;
    }
    .section-lead {
        color: #55556d;
        max-width: 40rem;
        margin-bottom: 2.5rem;
    }
    h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .stats-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
        gap: 1.5rem;
    }
    .stat-item {
        text-align: center;
        padding: 2rem 1rem;
        border-radius: 12px;
        background: #f5f5fa;
        cursor: pointer;
        transition: transform 0.2s ease;
    }
    .stat-number {
        display: block;
        font-size: 2.75rem;
        font-weight: 700;
        color: #5b5bd6;
    }
    .stat-label {
        color: #55556d;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .feature-card {
        padding: 2rem;
        border-radius: 12px;
        background: #fff;
        border: 1px solid #e4e4ef;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .feature-card h3 {
        margin: 0.75rem 0 0.5rem;
    }
    .feature-card p {
        color: #55556d;
    }
    .feature-icon {
        font-size: 1.5rem;
        color: #5b5bd6;
    }
    .contact-form {
        max-width: 32rem;
    }
    .form-group {
        margin-bottom: 1rem;
    }
    .form-group input,
    .form-group textarea {
        width: 100%;
        padding: 0.75rem 1rem;
        border: 1px solid #d4d4e4;
        border-radius: 8px;
        font: inherit;
    }
    .form-message {
        padding: 0.75rem 1rem;
        border-radius: 8px;
        margin-bottom: 1rem;
    }
    .form-message.error {
        background: #fdecec;
        color: #b3261e;
    }
    .form-message.success {
        background: #e8f5e9;
        color: #1b5e20;
    }
    .submit-button {
        background: #1a1a2e;
        color: #fff;
        border: none;
        border-radius: 8px;
        padding: 0.9rem 2rem;
        font-size: 1rem;
        cursor: pointer;
    }
    .submit-button:disabled {
        opacity: 0.6;
        cursor: wait;
    }
    .footer {
        text-align: center;
        padding: 3rem 2rem;
        color: #55556d;
        border-top: 1px solid #e4e4ef;
    }
"#;

#[cfg(test)]
mod tests {
    use super::parallax_offset;

    #[test]
    fn hero_content_tracks_half_the_scroll_offset() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), -100.0);
        assert_eq!(parallax_offset(33.0), -16.5);
    }
}
