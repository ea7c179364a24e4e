use log::debug;
use yew::prelude::*;

use crate::animation::{AnimationLoop, TimeoutScheduler, TypingFrame, TypingSession};
use crate::config::TypewriterConfig;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    #[prop_or_default]
    pub config: TypewriterConfig,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let frame = use_state_eq(TypingFrame::default);

    {
        let set_frame = frame.setter();
        use_effect_with_deps(
            move |config: &TypewriterConfig| {
                debug!("typewriter started");
                let animation = AnimationLoop::start(
                    TimeoutScheduler,
                    TypingSession::new(config.clone()),
                    move |next| set_frame.set(next),
                );
                move || {
                    animation.stop();
                    debug!("typewriter stopped");
                }
            },
            props.config.clone(),
        );
    }

    let config = &props.config;
    let accent = format!("color: {};", config.light_color);

    html! {
        <h1 id="typing-text" class="typing-text">
            <span class="head">{&frame.head}</span>
            {
                if let Some(rest) = &frame.rest {
                    html! { <span class="rest" style={accent.clone()}>{rest}</span> }
                } else {
                    html! {}
                }
            }
            { if frame.line_break { html! { <br /> } } else { html! {} } }
            {
                if let Some(exploration) = &frame.exploration {
                    html! { <span class="exploration" style={accent.clone()}>{exploration}</span> }
                } else {
                    html! {}
                }
            }
            <span
                class="typing-cursor"
                style={format!("display: inline-block; color: {};", frame.caret.color(config))}
            >
                {"|"}
            </span>
        </h1>
    }
}
