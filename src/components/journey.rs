use log::debug;
use yew::prelude::*;

use crate::config::CarouselConfig;
use crate::dom;
use crate::layout::carousel::{dot_offset, CarouselState, DOT_COUNT};

#[derive(Clone, PartialEq)]
pub struct JourneyStep {
    pub title: String,
    pub body: String,
}

impl JourneyStep {
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct JourneyProps {
    pub steps: Vec<JourneyStep>,
    #[prop_or_default]
    pub config: CarouselConfig,
}

#[function_component(Journey)]
pub fn journey(props: &JourneyProps) -> Html {
    let container_ref = use_node_ref();
    let state = use_state_eq(CarouselState::default);

    // use_state_eq drops the update when nothing changed, so this is cheap on every scroll event
    let refresh = {
        let container_ref = container_ref.clone();
        let state = state.clone();
        let config = props.config.clone();
        move || match dom::element(&container_ref, "journey") {
            Ok(container) => state.set(CarouselState::from_metrics(&dom::scroll_metrics(&container), &config)),
            Err(err) => debug!("journey state not refreshed: {}", err),
        }
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh();
                || ()
            },
            (),
        );
    }

    let onscroll = Callback::from(move |_: Event| refresh());

    let scroll_by = |direction: f64| {
        let container_ref = container_ref.clone();
        let step = props.config.scroll_step;
        Callback::from(move |_: MouseEvent| {
            if let Ok(container) = dom::element(&container_ref, "journey") {
                dom::smooth_scroll_by(&container, direction * step);
            }
        })
    };

    let dots = (0..DOT_COUNT).map(|dot| {
        let container_ref = container_ref.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Ok(container) = dom::element(&container_ref, "journey") {
                let max = dom::scroll_metrics(&container).max_offset();
                dom::smooth_scroll_to(&container, dot_offset(dot, max));
            }
        });
        html! {
            <div class={classes!("journey-dot", (state.active_dot == dot).then_some("active"))} {onclick} />
        }
    });

    html! {
        <div class="journey-carousel">
            <button class="journey-scroll-left" style={state.left.style()} onclick={scroll_by(-1.0)}>
                {"‹"}
            </button>
            <div class="journey" ref={container_ref.clone()} {onscroll}>
                {
                    for props.steps.iter().enumerate().map(|(index, step)| html! {
                        <div class={classes!("journey-step", format!("journey{}", index + 1))}>
                            <span class="journey-number">{(index + 1).to_string()}</span>
                            <h3>{&step.title}</h3>
                            <p>{&step.body}</p>
                        </div>
                    })
                }
            </div>
            <button class="journey-scroll-right" style={state.right.style()} onclick={scroll_by(1.0)}>
                {"›"}
            </button>
            <div class="journey-indicators">
                { for dots }
            </div>
        </div>
    }
}
