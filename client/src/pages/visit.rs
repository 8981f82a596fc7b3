//! Visit page: practical information and the visit-booking form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Booking state is a `FormState<VisitBooking>` signal scoped to this page.
//! Only name, email, phone, date, and time are checked; party size and
//! special requests are free-form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::button::{Button, ButtonSize};
use crate::components::container::{Container, ContainerSize, Padding};
use crate::components::form_field::{FormField, bind_input, bind_value, field_error};
use crate::components::page_hero::PageHero;
use crate::components::section_intro::SectionIntro;
use crate::content::museum::{ADDRESS, MAIN_PHONE, VISIT_EMAIL};
use crate::content::visit::{ADMISSION, GETTING_HERE, InfoRow, MAX_VISITORS, OPENING_HOURS, SERVICES, TIME_SLOTS, visitors_label};
use crate::state::booking::{BookingField, VisitBooking};
use crate::state::form::FormState;
use crate::util::motion::{Reveal, stagger};
use crate::util::submission::submit_form;

#[component]
fn InfoCard(title: &'static str, glyph: &'static str, index: usize, children: Children) -> impl IntoView {
    view! {
        <div class=format!("card info-card {}", Reveal::FadeUp.class()) style=stagger(index, 100)>
            <div class="info-card__head">
                <span class="info-card__glyph" aria-hidden="true">{glyph}</span>
                <h3 class="type-h5 font-coanda text-primary">{title}</h3>
            </div>
            {children()}
        </div>
    }
}

fn info_rows(rows: &'static [InfoRow]) -> impl IntoView {
    view! {
        <dl class="info-rows">
            {rows
                .iter()
                .map(|row| {
                    view! {
                        <div class="info-rows__row">
                            <dt>{row.label}</dt>
                            <dd>{row.value}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
}

#[component]
fn BookingForm() -> impl IntoView {
    let form = RwSignal::new(FormState::<VisitBooking>::new());
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
                    "\u{2713} Your visit has been successfully booked! We'll send you a confirmation email shortly."
                </div>
            </Show>

            <div class="form__row">
                <FormField id="visit-name" label="Full Name" required=true error=field_error(form, BookingField::Name)>
                    <input
                        id="visit-name"
                        type="text"
                        placeholder="Enter your full name"
                        prop:value=bind_value(form, BookingField::Name)
                        on:input=bind_input(form, BookingField::Name)
                    />
                </FormField>
                <FormField id="visit-email" label="Email Address" required=true error=field_error(form, BookingField::Email)>
                    <input
                        id="visit-email"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=bind_value(form, BookingField::Email)
                        on:input=bind_input(form, BookingField::Email)
                    />
                </FormField>
            </div>

            <FormField id="visit-phone" label="Phone Number" required=true error=field_error(form, BookingField::Phone)>
                <input
                    id="visit-phone"
                    type="tel"
                    placeholder="Enter your phone number"
                    prop:value=bind_value(form, BookingField::Phone)
                    on:input=bind_input(form, BookingField::Phone)
                />
            </FormField>

            <div class="form__row">
                <FormField id="visit-date" label="Visit Date" required=true error=field_error(form, BookingField::Date)>
                    <input
                        id="visit-date"
                        type="date"
                        prop:value=bind_value(form, BookingField::Date)
                        on:input=bind_input(form, BookingField::Date)
                    />
                </FormField>
                <FormField id="visit-time" label="Visit Time" required=true error=field_error(form, BookingField::Time)>
                    <select
                        id="visit-time"
                        prop:value=bind_value(form, BookingField::Time)
                        on:change=bind_input(form, BookingField::Time)
                    >
                        <option value="">"Select time"</option>
                        {TIME_SLOTS
                            .iter()
                            .map(|slot| view! { <option value=slot.value>{slot.label}</option> })
                            .collect_view()}
                    </select>
                </FormField>
            </div>

            <FormField id="visit-visitors" label="Number of Visitors" error=field_error(form, BookingField::Visitors)>
                <select
                    id="visit-visitors"
                    prop:value=bind_value(form, BookingField::Visitors)
                    on:change=bind_input(form, BookingField::Visitors)
                >
                    {(1..=MAX_VISITORS)
                        .map(|n| view! { <option value=n.to_string()>{visitors_label(n)}</option> })
                        .collect_view()}
                </select>
            </FormField>

            <FormField id="visit-message" label="Special Requests (Optional)" error=field_error(form, BookingField::Message)>
                <textarea
                    id="visit-message"
                    rows="4"
                    placeholder="Any special requirements or questions?"
                    prop:value=bind_value(form, BookingField::Message)
                    on:input=bind_input(form, BookingField::Message)
                ></textarea>
            </FormField>

            <Button
                button_type="submit"
                size=ButtonSize::Lg
                class="form__submit"
                icon="\u{25A6}"
                loading=submitting
                disabled=Signal::derive(confirmed)
            >
                {move || {
                    if submitting.get() {
                        "Booking..."
                    } else if confirmed() {
                        "Booking Confirmed!"
                    } else {
                        "Book Your Visit"
                    }
                }}
            </Button>
        </form>
    }
}

#[component]
pub fn VisitPage() -> impl IntoView {
    view! {
        <Title text="Visit - Musea"/>
        <PageHero
            caption="Plan Your Experience"
            title="Visit Musea"
            image="/images/museum.jpg"
            lead="Discover art, culture, and inspiration in our world-class museum. Plan your visit and make the most of your cultural journey with us."
        />

        <section class="section section--light">
            <Container size=ContainerSize::Xl>
                <SectionIntro
                    title="Essential Information"
                    lead="Everything you need to know for your visit to Musea Art Museum."
                />
                <div class="card-grid card-grid--3">
                    <InfoCard title="Opening Hours" glyph="\u{25F7}" index=0>
                        {info_rows(OPENING_HOURS)}
                    </InfoCard>
                    <InfoCard title="Admission Prices" glyph="\u{2637}" index=1>
                        {info_rows(ADMISSION)}
                    </InfoCard>
                    <InfoCard title="Location & Contact" glyph="\u{2316}" index=2>
                        <ul class="info-card__lines">
                            <li>{ADDRESS}</li>
                            <li>{MAIN_PHONE}</li>
                            <li>{VISIT_EMAIL}</li>
                        </ul>
                    </InfoCard>
                </div>
                <ul class="services">
                    {SERVICES
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            view! {
                                <li class=format!("services__item {}", Reveal::ScaleIn.class()) style=stagger(i, 100)>
                                    {*service}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Container>
        </section>

        <section class="section">
            <Container size=ContainerSize::Xl padding=Padding::Lg>
                <div class="split">
                    <div class="reveal reveal--slide-in">
                        <h2 class="type-h3 font-coanda text-primary">"Book Your Visit"</h2>
                        <p class="type-body font-poppins text-secondary">
                            "Reserve your spot and ensure the best experience during your visit."
                        </p>
                        <BookingForm/>
                    </div>

                    <aside class="split__aside reveal reveal--fade-in">
                        <div class="card">
                            <h3 class="type-h4 font-coanda text-primary">"Getting Here"</h3>
                            {GETTING_HERE
                                .iter()
                                .map(|(heading, lines)| {
                                    view! {
                                        <div class="directions">
                                            <h4 class="type-h6 font-coanda">{*heading}</h4>
                                            <ul>{lines.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}</ul>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="card card--dark">
                            <h3 class="type-h5 font-coanda text-inverse">"Need Help?"</h3>
                            <p class="type-body text-inverse">
                                "Our visitor services team is here to help make your visit memorable."
                            </p>
                            <p class="text-inverse">{MAIN_PHONE}</p>
                            <p class="text-inverse">{VISIT_EMAIL}</p>
                        </div>
                    </aside>
                </div>
            </Container>
        </section>
    }
}
