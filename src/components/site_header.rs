use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::RibbonConfig;
use crate::dom;
use crate::layout::nav::{NavLink, NavSelection};
use crate::layout::ribbon::{self, RibbonGeometry, Span};

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub links: Vec<NavLink>,
    #[prop_or_default]
    pub initial_active: usize,
    #[prop_or_default]
    pub ribbon: RibbonConfig,
}

fn measure_ribbon(list: &NodeRef, item: &NodeRef, config: &RibbonConfig) -> Result<RibbonGeometry, dom::DomError> {
    let list = dom::span(list, "nav list")?;
    let item = dom::span(item, "nav item")?;
    Ok(RibbonGeometry::measure(list, item, config))
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let header_ref = use_node_ref();
    let list_ref = use_node_ref();
    let item_refs = use_memo(
        |len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        props.links.len(),
    );
    let selection = use_state_eq(|| NavSelection::new(props.links.len(), props.initial_active));
    let geometry = use_state_eq(|| None::<RibbonGeometry>);

    // Follow the active item, and keep following it across window resizes.
    {
        let list_ref = list_ref.clone();
        let item_refs = item_refs.clone();
        let geometry = geometry.clone();
        let config = props.ribbon.clone();
        use_effect_with_deps(
            move |active: &Option<usize>| {
                let active = *active;
                let reposition = move || {
                    let Some(item) = active.and_then(|index| item_refs.get(index)) else {
                        return;
                    };
                    match measure_ribbon(&list_ref, item, &config) {
                        Ok(next) => geometry.set(Some(next)),
                        Err(err) => debug!("ribbon left in place: {}", err),
                    }
                };
                reposition();

                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let on_resize = Closure::<dyn Fn()>::new(reposition);
                        if let Err(err) = window
                            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
                        {
                            debug!("resize listener not attached: {:?}", err);
                        }
                        Box::new(move || {
                            let _ = window
                                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            selection.active(),
        );
    }

    let on_select = {
        let selection = selection.clone();
        let header_ref = header_ref.clone();
        let links = props.links.clone();
        Callback::from(move |(index, e): (usize, MouseEvent)| {
            e.prevent_default();
            selection.set(selection.activated(index));

            let Some(id) = links.get(index).and_then(|link| ribbon::section_id(&link.href)) else {
                return;
            };
            if let Err(err) = dom::scroll_to_section(id, &header_ref) {
                debug!("not scrolling to #{}: {}", id, err);
            }
        })
    };

    let (shown, ribbon_style) = match &*geometry {
        Some(geometry) => (
            geometry.clone(),
            format!("left: {}px; width: {}px;", geometry.left, geometry.width),
        ),
        // Not measured yet: draw the resting shape but keep it out of sight.
        None => (
            RibbonGeometry::measure(Span::new(0.0, 0.0), Span::new(0.0, 0.0), &props.ribbon),
            "visibility: hidden;".to_string(),
        ),
    };

    html! {
        <header class="site-header" ref={header_ref}>
            <nav class="site-nav">
                <div id="nav-list" class="nav-list" ref={list_ref}>
                    {
                        for props.links.iter().zip(item_refs.iter()).enumerate().map(|(index, (link, item_ref))| {
                            let onclick = on_select.reform(move |e: MouseEvent| (index, e));
                            html! {
                                <a
                                    ref={item_ref.clone()}
                                    href={link.href.clone()}
                                    class={classes!("nav-item", selection.is_active(index).then_some("active"))}
                                    {onclick}
                                >
                                    {&link.label}
                                </a>
                            }
                        })
                    }
                    <div id="ribbon" class="ribbon" style={ribbon_style}>
                        <svg
                            width={shown.width.to_string()}
                            height={shown.svg_height.to_string()}
                            viewBox={shown.view_box.clone()}
                            fill="none"
                            xmlns="http://www.w3.org/2000/svg"
                        >
                            <path d={shown.path.clone()} />
                        </svg>
                    </div>
                </div>
            </nav>
        </header>
    }
}
