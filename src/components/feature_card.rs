use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Card that lifts and scales slightly while the pointer is over it.
#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let style = if *hovered {
        "transform: translateY(-10px) scale(1.02);"
    } else {
        "transform: translateY(0) scale(1);"
    };

    html! {
        <div class="feature-card" style={style} onmouseenter={onmouseenter} onmouseleave={onmouseleave}>
            <div class="feature-icon">{ &props.icon }</div>
            <h3>{ &props.title }</h3>
            <p>{ &props.description }</p>
        </div>
    }
}
