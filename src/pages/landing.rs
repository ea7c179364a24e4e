use yew::prelude::*;

use crate::components::faq::{Faq, FaqEntry};
use crate::components::journey::{Journey, JourneyStep};
use crate::components::site_header::SiteHeader;
use crate::components::typewriter::Typewriter;
use crate::layout::nav::NavLink;

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "#home"),
        NavLink::new("About", "#about"),
        NavLink::new("Journey", "#journey"),
        NavLink::new("FAQ", "#faq"),
        NavLink::new("Contact", "#contact"),
    ]
}

fn journey_steps() -> Vec<JourneyStep> {
    vec![
        JourneyStep::new("Visit", "Come see the space, meet the team and watch a morning unfold."),
        JourneyStep::new("Settle in", "A gentle start with short days while your child finds their feet."),
        JourneyStep::new("Explore", "Open-ended materials and outdoor time, every single day."),
        JourneyStep::new("Play", "Long uninterrupted play where ideas get room to grow."),
        JourneyStep::new("Grow", "Regular check-ins so you always know how things are going."),
    ]
}

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            "What ages do you take?",
            "Children from eighteen months up to school age, grouped by stage rather than birthday.",
        ),
        FaqEntry::new(
            "What does a typical day look like?",
            "Free play in the morning, a shared lunch, outdoor exploration and a quiet rest in the afternoon.",
        ),
        FaqEntry::new(
            "How do I book a visit?",
            "Send us a message through the contact section and we will find a time that suits you.",
        ),
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <SiteHeader links={nav_links()} />

            <section id="home" class="hero">
                <Typewriter />
                <p class="hero-subtitle">{"A place for little people to wonder, build and belong."}</p>
            </section>

            <section id="about" class="about">
                <h2>{"About us"}</h2>
                <p>{"We believe childhood is for exploring. Our rooms, garden and routines are built around curiosity, play and care."}</p>
            </section>

            <section id="journey" class="journey-section">
                <h2>{"Your journey with us"}</h2>
                <Journey steps={journey_steps()} />
            </section>

            <section id="faq" class="faq-section">
                <h2>{"Frequently asked questions"}</h2>
                <Faq entries={faq_entries()} />
            </section>

            <section id="contact" class="contact">
                <h2>{"Say hello"}</h2>
                <p>{"hello@foundation.example"}</p>
            </section>

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 72px;
                        z-index: 10;
                        background: #0f0339;
                    }

                    .nav-list {
                        position: relative;
                        display: flex;
                        gap: 2rem;
                        justify-content: center;
                        padding-top: 1.5rem;
                    }

                    .nav-item {
                        position: relative;
                        z-index: 1;
                        color: #ffffff;
                        text-decoration: none;
                    }

                    .nav-item.active {
                        color: #0f0339;
                    }

                    .ribbon {
                        position: absolute;
                        top: 0;
                        transition: left 0.3s ease, width 0.3s ease;
                        pointer-events: none;
                    }

                    .ribbon path {
                        fill: #f6c445;
                    }

                    .hero {
                        min-height: 100vh;
                        padding: 10rem 2rem 4rem;
                        background: linear-gradient(180deg, #f6c445 0%, #e8a33d 100%);
                    }

                    .typing-text {
                        font-size: 3.5rem;
                        line-height: 1.1;
                        color: #0f0339;
                        min-height: 8rem;
                    }

                    .typing-cursor {
                        animation: blink 1s step-end infinite;
                    }

                    @keyframes blink {
                        50% { opacity: 0; }
                    }

                    .journey-carousel {
                        position: relative;
                    }

                    .journey {
                        display: flex;
                        gap: 1.5rem;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                        scrollbar-width: none;
                    }

                    .journey-step {
                        flex: 0 0 280px;
                        scroll-snap-align: start;
                        padding: 2rem;
                        border-radius: 16px;
                        background: #fff7e6;
                    }

                    .journey-scroll-left,
                    .journey-scroll-right {
                        position: absolute;
                        top: 40%;
                        z-index: 2;
                        transition: opacity 0.2s ease;
                    }

                    .journey-scroll-left { left: 0; }
                    .journey-scroll-right { right: 0; }

                    .journey-indicators {
                        display: flex;
                        gap: 0.5rem;
                        justify-content: center;
                        margin-top: 1rem;
                    }

                    .journey-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #d9d4e8;
                        cursor: pointer;
                    }

                    .journey-dot.active {
                        background: #0f0339;
                    }

                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }

                    .faq-item.active .faq-answer {
                        max-height: 400px;
                    }
                "#}
            </style>
        </div>
    }
}
