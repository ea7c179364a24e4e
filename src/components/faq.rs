use web_sys::MouseEvent;
use yew::prelude::*;

use crate::layout::accordion::Accordion;

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

/// FAQ list where at most one answer is expanded.
#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state_eq(|| Accordion::new(props.entries.len()));

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_: ()| accordion.set(accordion.toggled(index)))
                    };
                    html! {
                        <FaqItem question={entry.question.clone()} open={accordion.is_open(index)} {on_toggle}>
                            <p>{&entry.answer}</p>
                        </FaqItem>
                    }
                })
            }
        </div>
    }
}
