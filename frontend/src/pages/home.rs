use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::intake::controller::{IntakeEffect, IntakeEvent};
use crate::intake::flow::ModalState;
use crate::intake::form::Field;
use crate::intake::modal::IntakeModal;
use crate::intake::submit::{submit_intake, SubmitError};
use crate::pages::content::{
    DELIVERABLES, ENGAGEMENT_META, INCLUSIONS, NOT_FOR, PRICE_NOTICE, PRICE_STATS, PROBLEMS,
    PROCESS, QUALIFICATIONS, VALUES,
};

pub enum Msg {
    OpenIntake,
    CloseIntake,
    Edit(Field, String),
    Submit,
    Submitted(u32, Result<(), SubmitError>),
    Redirect,
}

impl Msg {
    fn into_event(self) -> IntakeEvent {
        match self {
            Msg::OpenIntake => IntakeEvent::Open,
            Msg::CloseIntake => IntakeEvent::Close,
            Msg::Edit(field, value) => IntakeEvent::Edit(field, value),
            Msg::Submit => IntakeEvent::Submit(Utc::now()),
            Msg::Submitted(session, result) => IntakeEvent::Submitted { session, result },
            Msg::Redirect => IntakeEvent::Redirect,
        }
    }
}

/// Landing page. Owns the intake modal and drives its submission.
pub struct Home {
    modal: ModalState,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            modal: ModalState::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let effects = self.modal.apply(msg.into_event(), config::get_payment_url());

        let mut rerender = false;
        for effect in effects {
            match effect {
                IntakeEffect::Render => rerender = true,
                IntakeEffect::Alert(message) => alert(&message),
                IntakeEffect::Post { session, submission } => {
                    ctx.link().send_future(async move {
                        let result = submit_intake(config::get_form_endpoint(), &submission).await;
                        Msg::Submitted(session, result)
                    });
                }
                IntakeEffect::ReportFailure(message) => {
                    gloo_console::error!(message);
                }
                IntakeEffect::ScheduleRedirect { delay_ms } => {
                    ctx.link().send_future(async move {
                        TimeoutFuture::new(delay_ms).await;
                        Msg::Redirect
                    });
                }
                IntakeEffect::Navigate(url) => {
                    info!("Redirecting to checkout");
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(url) {
                            warn!("Checkout redirect failed: {:?}", e);
                        }
                    }
                }
            }
        }
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let request_audit = link.callback(|_: MouseEvent| Msg::OpenIntake);

        html! {
            <>
                <Nav on_request_audit={request_audit.clone()} />
                <main>
                    <Hero on_request_audit={request_audit.clone()} />
                    <div class="context-bridge">
                        <p class="font-display italic text-muted bridge-text">
                            {"If you received our operational snapshot, this page outlines the full analysis · what it covers, what you receive, and the financial impact of closing the gaps we identified."}
                        </p>
                    </div>
                    <ProblemSection />
                    <ValueSection />
                    <ProcessSection />
                    <DeliverablesSection />
                    <MidCta on_request_audit={request_audit.clone()} />
                    <PricingSection on_request_audit={request_audit.clone()} />
                    <QualificationSection />
                    <FinalCta on_request_audit={request_audit} />
                </main>
                <Footer />
                <RevealOnScroll />
                {
                    if let Some(flow) = self.modal.flow() {
                        html! {
                            <IntakeModal
                                flow={flow.clone()}
                                on_close={link.callback(|_: ()| Msg::CloseIntake)}
                                on_edit={link.callback(|(field, value): (Field, String)| Msg::Edit(field, value))}
                                on_submit={link.callback(|_: ()| Msg::Submit)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </>
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            warn!("Alert failed: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub on_request_audit: Callback<MouseEvent>,
}

#[derive(Properties, PartialEq)]
struct CtaButtonProps {
    label: &'static str,
    #[prop_or_default]
    class: Classes,
    on_click: Callback<MouseEvent>,
}

#[function_component(CtaButton)]
fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button class={classes!("btn-primary", props.class.clone())} onclick={props.on_click.clone()}>
            {props.label}
            <span class="icon-circle">{"→"}</span>
        </button>
    }
}

#[function_component(Hero)]
fn hero(props: &CtaProps) -> Html {
    html! {
        <section class="hero-section">
            <div class="glow-green hero-glow"></div>
            <div class="hero-content">
                <div class="eyebrow-pill reveal"><span class="dot"></span>{"Operational Intelligence Audit"}</div>
                <h1 class="hero-headline reveal">
                    <span class="line-one">{"Your revenue is growing."}</span><br />
                    <span class="line-two italic">{"Your systems are not."}</span>
                </h1>
                <p class="hero-subheadline reveal font-body">
                    {"We find the exact operational failures "}
                    <strong class="text-white">{"costing you measurable revenue"}</strong>
                    {" every month · then show you how to close them permanently."}
                </p>
                <div class="hero-cta reveal">
                    <CtaButton label="Request Intelligence Audit" on_click={props.on_request_audit.clone()} />
                    <div class="hero-meta font-mono text-muted">{ENGAGEMENT_META}</div>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProblemSection)]
fn problem_section() -> Html {
    html! {
        <section class="problem-section">
            <div class="section-label">{"The Problem"}</div>
            <h2 class="section-headline">
                {"Growth without infrastructure "}<span class="italic text-gold">{"costs more"}</span>{" than it earns."}
            </h2>
            <p class="section-body text-muted">
                {"Invisible weekly revenue leakage systematically drains capital from growing companies. When operations stretch beyond their initial design, every friction point compounds."}
            </p>
            <div class="grid-container problem-grid">
                { for PROBLEMS.iter().map(|item| html! {
                    <div class="grid-item problem-card reveal" key={item.num}>
                        <div class="card-top-accent"></div>
                        <div class="problem-num font-display text-dim">{item.num}</div>
                        <h3 class="problem-title text-white font-body">{item.title}</h3>
                        <p class="problem-desc text-muted font-body">{item.desc}</p>
                        <div class="problem-impact font-mono text-green">{item.impact}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ValueSection)]
fn value_section() -> Html {
    html! {
        <section class="bg-surface value-section">
            <div class="section-label">{"The Opportunity"}</div>
            <h2 class="section-headline">
                {"The gap between your growth rate and your systems maturity is "}
                <span class="italic text-gold">{"quantifiable"}</span>{"."}
            </h2>
            <p class="section-body text-muted">
                {"Every operational failure eventually translates into a financial consequence. Closing these gaps produces immediate margin recovery."}
            </p>
            <div class="grid-container value-grid">
                { for VALUES.iter().map(|item| html! {
                    <div class="grid-item value-card reveal" key={item.title}>
                        <div class="value-num font-display text-green">{item.num}</div>
                        <h3 class="value-title text-white font-body">{item.title}</h3>
                        <p class="value-desc text-muted font-body">{item.desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProcessSection)]
fn process_section() -> Html {
    html! {
        <section class="process-section">
            <div class="section-label">{"How It Works"}</div>
            <h2 class="section-headline">
                {"A structured engagement. "}<span class="italic text-gold">{"A precise outcome."}</span>
            </h2>
            <p class="section-body text-muted">
                {"We act as a surgical diagnostic unit inside your business. Our methodology is entirely objective, data-driven, and focused exclusively on financial outcomes."}
            </p>
            <div class="process-list grid-container">
                { for PROCESS.iter().map(|item| html! {
                    <div class="grid-item process-row reveal" key={item.step}>
                        <div class="process-step font-mono text-green">{item.step}</div>
                        <div class="process-content">
                            <h3 class="text-white font-body">{item.title}</h3>
                            <p class="text-muted font-body">{item.desc}</p>
                        </div>
                        <div class="process-day font-mono text-muted">{item.day}</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(DeliverablesSection)]
fn deliverables_section() -> Html {
    html! {
        <section class="deliverables-section">
            <div class="section-label">{"The Deliverable"}</div>
            <h2 class="section-headline">
                {"Not a presentation. "}<span class="italic text-gold">{"A working blueprint."}</span>
            </h2>
            <div class="grid-container deliverables-grid">
                { for DELIVERABLES.iter().map(|item| html! {
                    <div class="grid-item deliverable-card reveal" key={item.num}>
                        <div class="del-num font-mono text-green">{item.num}</div>
                        <h3 class="text-white font-body deliverable-title">{item.title}</h3>
                        <p class="text-muted font-body deliverable-desc">{item.desc}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(MidCta)]
fn mid_cta(props: &CtaProps) -> Html {
    html! {
        <section class="bg-surface mid-cta-section">
            <div class="mid-cta-left reveal">
                <h2 class="mid-cta-headline font-display text-white">
                    {"The audit pays for itself the moment it identifies a single "}
                    <span class="italic text-gold">{"recoverable gap."}</span>
                </h2>
                <p class="text-muted font-body">
                    {"Most engagements surface between three and seven. One decision, made with complete information, changes the trajectory of a scaling company."}
                </p>
            </div>
            <div class="mid-cta-right reveal">
                <CtaButton label="Request Intelligence Audit" on_click={props.on_request_audit.clone()} />
            </div>
        </section>
    }
}

#[function_component(PricingSection)]
fn pricing_section(props: &CtaProps) -> Html {
    html! {
        <section class="pricing-section">
            <div class="section-label">{"The Investment"}</div>
            <h2 class="section-headline">
                {"One engagement. "}<span class="italic text-gold">{"Complete clarity."}</span>
            </h2>
            <div class="pricing-container reveal">
                <div class="price-display">
                    <span class="price-currency font-display text-gold">{"$"}</span>
                    <span class="price-amount font-display text-white">{config::ENGAGEMENT_PRICE}</span>
                </div>
                <div class="price-label font-mono text-muted">
                    {"Operational Intelligence Audit · One-Time Engagement Fee"}
                </div>
                <div class="price-stats font-display text-white">
                    { for PRICE_STATS.iter().map(|stat| html! {
                        <div class="stat-block" key={stat.label}>
                            <span class="stat-val">{stat.value}</span>
                            <span class="stat-lbl font-mono text-muted">{stat.label}</span>
                        </div>
                    }) }
                </div>
                <div class="price-includes">
                    <ul class="includes-list font-body text-white">
                        { for INCLUSIONS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                    </ul>
                </div>
                <div class="price-notice font-mono text-muted bg-surface">{PRICE_NOTICE}</div>
                <CtaButton
                    label="Begin Intelligence Audit"
                    class={classes!("pricing-btn")}
                    on_click={props.on_request_audit.clone()}
                />
            </div>
        </section>
    }
}

#[function_component(QualificationSection)]
fn qualification_section() -> Html {
    html! {
        <section class="bg-surface qual-section">
            <div class="section-label">{"Is This For You"}</div>
            <h2 class="section-headline">
                {"Built specifically for companies "}<span class="italic text-gold">{"at this stage."}</span>
            </h2>
            <p class="section-body text-muted">
                {"Our methodology is engineered exclusively for growth-stage operators ($1M to $20M). We do not serve pre-revenue startups or mature enterprises with established operations functions."}
            </p>
            <div class="grid-container qual-list reveal">
                { for QUALIFICATIONS.iter().map(|item| html! {
                    <div class="grid-item qual-row" key={*item}>
                        <span class="qual-dot bg-green"></span>
                        <span class="text-white font-body">{*item}</span>
                    </div>
                }) }
            </div>
            <div class="qual-not-for font-mono text-muted reveal">{NOT_FOR}</div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta(props: &CtaProps) -> Html {
    html! {
        <section class="final-cta-section center-layout">
            <div class="glow-green final-glow"></div>
            <h2 class="section-headline reveal">
                {"Find out exactly what your current systems are "}
                <span class="italic text-gold">{"costing you."}</span>
            </h2>
            <p class="final-body text-muted font-body reveal">
                {"Complete a short intake form. We review your business profile and confirm the engagement. The analysis begins within one business day of confirmation."}
            </p>
            <div class="final-btn-wrapper reveal">
                <CtaButton label="Request Intelligence Audit" on_click={props.on_request_audit.clone()} />
                <div class="hero-meta font-mono text-muted">{ENGAGEMENT_META}</div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-left font-display text-muted">{"ECCENTRIC SYSTEMS"}</div>
            <div class="footer-right font-mono text-muted">
                <a href="#">{"Privacy Policy"}</a>
                <a href="#">{"Confidentiality"}</a>
                <a href="#">{"Contact"}</a>
            </div>
        </footer>
    }
}
