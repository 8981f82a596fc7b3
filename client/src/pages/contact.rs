//! Contact page: channels, the contact form, and quick answers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is a `FormState<ContactForm>` signal. Submitting validates
//! synchronously; an accepted message runs the simulated send and the form
//! resets itself once the confirmation has been shown.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{Button, ButtonSize};
use crate::components::container::{Container, ContainerSize, Padding};
use crate::components::form_field::{FormField, bind_input, bind_value, field_error};
use crate::components::page_hero::PageHero;
use crate::components::section_intro::SectionIntro;
use crate::content::museum::{CONTACT_CHANNELS, MAIN_PHONE, QUICK_ANSWERS};
use crate::state::contact::{ContactCategory, ContactField, ContactForm};
use crate::state::form::FormState;
use crate::util::motion::{Reveal, stagger};
use crate::util::submission::submit_form;

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(FormState::<ContactForm>::new());
    let submitting = Signal::derive(move || form.with(FormState::is_submitting));
    let confirmed = move || form.with(FormState::is_confirmed);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_form(form);
    };

    view! {
        <form class="form" novalidate=true on:submit=on_submit>
            <Show when=confirmed>
                <div class="form__banner form__banner--success" role="status">
                    "\u{2713} Thank you for your message! We'll get back to you within 24 hours."
                </div>
            </Show>

            <div class="form__row">
                <FormField id="contact-name" label="Full Name" required=true error=field_error(form, ContactField::Name)>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=bind_value(form, ContactField::Name)
                        on:input=bind_input(form, ContactField::Name)
                    />
                </FormField>
                <FormField id="contact-email" label="Email Address" required=true error=field_error(form, ContactField::Email)>
                    <input
                        id="contact-email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=bind_value(form, ContactField::Email)
                        on:input=bind_input(form, ContactField::Email)
                    />
                </FormField>
            </div>

            <FormField id="contact-phone" label="Phone Number (Optional)" error=field_error(form, ContactField::Phone)>
                <input
                    id="contact-phone"
                    type="tel"
                    placeholder="Enter your phone number"
                    prop:value=bind_value(form, ContactField::Phone)
                    on:input=bind_input(form, ContactField::Phone)
                />
            </FormField>

            <FormField id="contact-category" label="Category" required=true error=field_error(form, ContactField::Category)>
                <select
                    id="contact-category"
                    prop:value=bind_value(form, ContactField::Category)
                    on:change=bind_input(form, ContactField::Category)
                >
                    <option value="">"Select a category"</option>
                    {ContactCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </FormField>

            <FormField id="contact-subject" label="Subject" required=true error=field_error(form, ContactField::Subject)>
                <input
                    id="contact-subject"
                    type="text"
                    placeholder="Enter the subject of your message"
                    prop:value=bind_value(form, ContactField::Subject)
                    on:input=bind_input(form, ContactField::Subject)
                />
            </FormField>

            <FormField id="contact-message" label="Message" required=true error=field_error(form, ContactField::Message)>
                <textarea
                    id="contact-message"
                    rows="6"
                    placeholder="Enter your message here..."
                    prop:value=bind_value(form, ContactField::Message)
                    on:input=bind_input(form, ContactField::Message)
                ></textarea>
            </FormField>

            <Button
                button_type="submit"
                size=ButtonSize::Lg
                class="form__submit"
                icon="\u{27A4}"
                loading=submitting
                disabled=Signal::derive(confirmed)
            >
                {move || {
                    if submitting.get() {
                        "Sending..."
                    } else if confirmed() {
                        "Message Sent!"
                    } else {
                        "Send Message"
                    }
                }}
            </Button>
        </form>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact - Musea"/>
        <PageHero
            caption="Get In Touch"
            title="Contact Us"
            image="/images/facial-therapy-scaled.jpg"
            lead="We'd love to hear from you. Whether you have questions about our exhibitions, need help planning your visit, or want to explore partnership opportunities, our team is here to help."
        />

        <section class="section section--light">
            <Container size=ContainerSize::Xl>
                <SectionIntro
                    title="How to Reach Us"
                    lead="Multiple ways to connect with our team and get the information you need."
                />
                <div class="card-grid card-grid--4">
                    {CONTACT_CHANNELS
                        .iter()
                        .enumerate()
                        .map(|(i, channel)| {
                            view! {
                                <div class=format!("card contact-card {}", Reveal::FadeUp.class()) style=stagger(i, 100)>
                                    <span class="contact-card__glyph" aria-hidden="true">{channel.glyph}</span>
                                    <h3 class="type-h5 font-coanda text-primary">{channel.title}</h3>
                                    <ul>
                                        {channel.details.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>

        <section class="section">
            <Container size=ContainerSize::Xl padding=Padding::Lg>
                <div class="split">
                    <div class="reveal reveal--slide-in">
                        <h2 class="type-h3 font-coanda text-primary">"Send Us a Message"</h2>
                        <p class="type-body font-poppins text-secondary">
                            "Fill out the form below and we'll get back to you as soon as possible."
                        </p>
                        <MessageForm/>
                    </div>

                    <aside class="split__aside reveal reveal--fade-in">
                        <div class="card">
                            <h3 class="type-h4 font-coanda text-primary">"Quick Answers"</h3>
                            <dl class="faq">
                                {QUICK_ANSWERS
                                    .iter()
                                    .map(|qa| {
                                        view! {
                                            <dt class="type-h6 font-coanda">{qa.title}</dt>
                                            <dd class="type-body-small text-secondary">{qa.body}</dd>
                                        }
                                    })
                                    .collect_view()}
                            </dl>
                        </div>
                        <div class="card card--accent">
                            <h3 class="type-h5 font-coanda text-inverse">"Need Immediate Help?"</h3>
                            <p class="type-body-small text-inverse">
                                "For urgent matters during museum hours, please call our main number."
                            </p>
                            <a class="card__phone" href=format!("tel:{MAIN_PHONE}")>{MAIN_PHONE}</a>
                        </div>
                    </aside>
                </div>
            </Container>
        </section>
    }
}
