use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::flow::{IntakeFlow, Phase};
use super::form::{ContactMethod, Field, RevenueRange, TeamSize};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct IntakeModalProps {
    pub flow: IntakeFlow,
    pub on_close: Callback<()>,
    pub on_edit: Callback<(Field, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(IntakeModal)]
pub fn intake_modal(props: &IntakeModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class="modal-box bg-surface" onclick={stop} role="dialog" aria-modal="true">
                <div class="modal-header">
                    <div class="modal-header-top">
                        <span class="section-label" style="margin-bottom: 0;">{"Intake Form"}</span>
                        <button class="modal-close" onclick={close} aria-label="Close">{"×"}</button>
                    </div>
                    <h2 class="font-display text-white modal-title">{"Request Intelligence Audit"}</h2>
                </div>
                <div class="modal-body">
                    if props.flow.phase == Phase::Succeeded {
                        <SuccessPanel />
                    } else {
                        <IntakeFields
                            flow={props.flow.clone()}
                            on_edit={props.on_edit.clone()}
                            on_submit={props.on_submit.clone()}
                        />
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(SuccessPanel)]
fn success_panel() -> Html {
    html! {
        <div class="modal-success center-layout">
            <div class="success-icon text-green font-display">{"✓"}</div>
            <h3 class="font-display text-white success-title">{"Submission Received"}</h3>
            <p class="text-muted font-body success-body">{"Your profile is under review."}</p>
            <p class="font-mono text-green-dim">{"Redirecting to secure checkout..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct IntakeFieldsProps {
    flow: IntakeFlow,
    on_edit: Callback<(Field, String)>,
    on_submit: Callback<()>,
}

#[function_component(IntakeFields)]
fn intake_fields(props: &IntakeFieldsProps) -> Html {
    let form = &props.flow.form;
    let submitting = props.flow.phase == Phase::Submitting;

    let text_input = |field: Field, input_type: &'static str, placeholder: Option<&'static str>| {
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        });
        html! {
            <input
                type={input_type}
                value={form.value(field).to_string()}
                placeholder={placeholder}
                disabled={submitting}
                {oninput}
            />
        }
    };

    let select = |field: Field, empty: Option<&'static str>, labels: Vec<&'static str>| {
        let on_edit = props.on_edit.clone();
        let onchange = Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_edit.emit((field, select.value()));
        });
        let current = form.value(field);
        html! {
            <select {onchange} disabled={submitting}>
                {
                    if let Some(empty) = empty {
                        html! { <option value="" selected={current.is_empty()}>{empty}</option> }
                    } else {
                        html! {}
                    }
                }
                { for labels.into_iter().map(|label| html! {
                    <option value={label} selected={label == current}>{label}</option>
                }) }
            </select>
        }
    };

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="modal-step">
            <div class="form-grid">
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Full Name *"}</label>
                    { text_input(Field::FullName, "text", None) }
                </div>
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Business Email *"}</label>
                    { text_input(Field::Email, "email", None) }
                </div>
            </div>
            <div class="input-group">
                <label class="font-mono text-green form-label">{"Company Name *"}</label>
                { text_input(Field::Company, "text", None) }
            </div>
            <div class="form-grid">
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Annual Revenue Range"}</label>
                    { select(
                        Field::Revenue,
                        Some("Select range..."),
                        RevenueRange::ALL.iter().map(|r| r.label()).collect(),
                    ) }
                </div>
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Team Size"}</label>
                    { select(
                        Field::TeamSize,
                        Some("Select size..."),
                        TeamSize::ALL.iter().map(|s| s.label()).collect(),
                    ) }
                </div>
            </div>
            <div class="input-group">
                <label class="font-mono text-green form-label">{"Current Tool Stack"}</label>
                { text_input(Field::ToolStack, "text", Some("e.g. HubSpot, Slack, Notion, QuickBooks")) }
            </div>
            <div class="form-grid">
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Preferred Contact Method"}</label>
                    { select(
                        Field::ContactMethod,
                        None,
                        ContactMethod::ALL.iter().map(|m| m.label()).collect(),
                    ) }
                </div>
                <div class="input-group">
                    <label class="font-mono text-green form-label">{"Phone Number (Optional)"}</label>
                    { text_input(Field::Phone, "text", None) }
                </div>
            </div>

            <div class="form-divider"></div>

            <div class="payment-notice font-mono text-muted bg-surface">
                {format!(
                    "What happens next: After submitting this form you will be directed to complete payment of ${} via secure checkout. \
                     Once payment is confirmed, a member of our senior team will contact you within one business day to begin the intake process. \
                     Your information is treated with full confidentiality.",
                    config::ENGAGEMENT_PRICE
                )}
            </div>

            if let Some(error) = props.flow.error.as_ref() {
                <div class="error-message font-mono">{error}</div>
            }

            <div class="modal-actions">
                <button class="btn-primary btn-gold w-full" {onclick} disabled={submitting}>
                    { if submitting { "Processing..." } else { "Proceed to Payment →" } }
                </button>
            </div>
        </div>
    }
}
