use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::contact::ContactForm;
use crate::components::counter::{StatItem, Stats};
use crate::components::reveal::Reveal;
use crate::components::typewriter::TypingText;

fn stat(target: &'static str, label: &'static str, suffix: Option<&'static str>) -> StatItem {
    StatItem {
        target: target.into(),
        label: label.into(),
        suffix: suffix.map(AttrValue::from),
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub phrases: Option<AttrValue>,
    #[prop_or_default]
    pub on_navigate: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let stats = vec![
        stat("12500", "Funded traders", Some("+")),
        stat("48", "Countries", None),
        stat("3200000", "Paid out (USD)", Some("+")),
        stat("98", "Payout success rate", Some("%")),
    ];

    html! {
        <div class="landing-page">
            <header id="home" class="hero">
                <div class="hero-content">
                    <h1 class="hero-title">
                        <TypingText phrases={props.phrases.clone()} />
                        <span class="cursor">{"|"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Trade our capital, keep most of the profit, and scale your account as you prove your edge."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#contact" class="hero-cta" on_navigate={props.on_navigate.clone()}>
                            {"Get Funded"}
                        </AnchorLink>
                        <AnchorLink href="#how-it-works" class="hero-link" on_navigate={props.on_navigate.clone()}>
                            {"How it works"}
                        </AnchorLink>
                    </div>
                </div>
            </header>

            <section id="how-it-works" class="features">
                <Reveal class="section-header">
                    <h2>{"How It Works"}</h2>
                </Reveal>
                <div class="features-grid">
                    <Reveal class="feature-item">
                        <h3>{"1. Take the Challenge"}</h3>
                        <p>{"Show consistent results on a simulated account with clear risk rules."}</p>
                    </Reveal>
                    <Reveal class="feature-item">
                        <h3>{"2. Get Funded"}</h3>
                        <p>{"Pass and we hand you a live account backed by our capital."}</p>
                    </Reveal>
                    <Reveal class="feature-item">
                        <h3>{"3. Grow Together"}</h3>
                        <p>{"Keep up to 80% of profits and unlock larger allocations over time."}</p>
                    </Reveal>
                </div>
            </section>

            <Stats items={stats} />

            <Reveal>
                <ContactForm />
            </Reveal>

            <footer class="footer">
                <p>{"Trading involves risk. Past performance does not guarantee future results."}</p>
                <AnchorLink href="#home" class="footer-link" on_navigate={props.on_navigate.clone()}>
                    {"Back to top"}
                </AnchorLink>
            </footer>
        </div>
    }
}
