//! Travel registry console page
//!
//! Renders only the document structure: forms, lookup inputs, trigger
//! buttons and result elements with the ids the binder expects. All
//! behaviour is attached afterwards by `crate::binder`.

use contracts::binding::table::*;
use leptos::prelude::*;

/// One named input of a bound form
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub required: bool,
}

const fn field(
    name: &'static str,
    label: &'static str,
    input_type: &'static str,
    required: bool,
) -> FormField {
    FormField {
        name,
        label,
        input_type,
        required,
    }
}

pub const TRAVELER_FIELDS: &[FormField] = &[
    field("pesel", "PESEL", "text", true),
    field("first_name", "First name", "text", true),
    field("last_name", "Last name", "text", true),
    field("email", "Email", "email", true),
    field("login", "Login", "text", true),
    field("password", "Password", "password", true),
    field("age", "Age", "number", false),
    field("phone_number", "Phone number", "tel", false),
    field("passport_number", "Passport number", "text", false),
    field("id_card_number", "ID card number", "text", false),
];

pub const COUNTRY_FIELDS: &[FormField] = &[field("name", "Country name", "text", true)];

pub const CITY_FIELDS: &[FormField] = &[
    field("name", "City name", "text", true),
    field("country_id", "Country ID", "number", true),
];

pub const TRIP_FIELDS: &[FormField] = &[
    field("status", "Status", "text", true),
    field("traveler_pesel", "Traveler PESEL", "text", true),
    field("evacuation_id", "Evacuation ID", "number", false),
];

#[component]
pub fn TravelConsole() -> impl IntoView {
    view! {
        <div id="travel-console" class="page">
            <section class="page__section">
                <h1 class="page__title">"Travelers"</h1>
                <ActionForm
                    form_id=TRAVELER_FORM
                    title="Add traveler"
                    fields=TRAVELER_FIELDS
                    result_id=TRAVELER_RESULT
                />
                <LookupCard
                    title="All travelers"
                    button_id=GET_TRAVELERS
                    button_label="Load travelers"
                    result_id=TRAVELER_LIST
                />
            </section>

            <section class="page__section">
                <h1 class="page__title">"Countries and cities"</h1>
                <ActionForm
                    form_id=COUNTRY_FORM
                    title="Add country"
                    fields=COUNTRY_FIELDS
                    result_id=COUNTRY_RESULT
                />
                <ActionForm
                    form_id=CITY_FORM
                    title="Add city"
                    fields=CITY_FIELDS
                    result_id=CITY_RESULT
                />
                <LookupCard
                    title="Country with cities"
                    input_id=GET_COUNTRY_ID
                    input_label="Country ID"
                    button_id=GET_COUNTRY_BTN
                    button_label="Load country"
                    result_id=COUNTRY_WITH_CITIES
                />
            </section>

            <section class="page__section">
                <h1 class="page__title">"Trips"</h1>
                <ActionForm
                    form_id=TRIP_FORM
                    title="Add trip"
                    fields=TRIP_FIELDS
                    result_id=TRIP_RESULT
                />
                <LookupCard
                    title="Trips of a traveler"
                    input_id=GET_TRIPS_PESEL
                    input_label="Traveler PESEL"
                    button_id=GET_TRIPS_BTN
                    button_label="Load trips"
                    result_id=TRIPS_LIST
                />
            </section>
        </div>
    }
}

/// Form whose named inputs become the JSON body of its binding
#[component]
fn ActionForm(
    form_id: &'static str,
    title: &'static str,
    fields: &'static [FormField],
    result_id: &'static str,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__body">
                <h2 class="section-title">{title}</h2>
                <form id=form_id class="form">
                    {fields
                        .iter()
                        .map(|f| {
                            let input_id = format!("{}-{}", form_id, f.name);
                            view! {
                                <div class="form__group">
                                    <label class="form__label" for=input_id.clone()>
                                        {f.label}
                                    </label>
                                    <input
                                        id=input_id
                                        class="form__input"
                                        type=f.input_type
                                        name=f.name
                                        required=f.required
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                    <button type="submit" class="button button--primary">
                        "Save"
                    </button>
                </form>
                <pre id=result_id class="json-viewer__content"></pre>
            </div>
        </div>
    }
}

/// Button that fetches into a result element, optionally reading one
/// path parameter input
#[component]
fn LookupCard(
    title: &'static str,
    #[prop(optional)]
    input_id: Option<&'static str>,
    #[prop(optional)]
    input_label: &'static str,
    button_id: &'static str,
    button_label: &'static str,
    result_id: &'static str,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__body">
                <h2 class="section-title">{title}</h2>
                {input_id.map(|id| view! {
                    <div class="form__group">
                        <label class="form__label" for=id>{input_label}</label>
                        <input id=id class="form__input" type="text" />
                    </div>
                })}
                <button id=button_id type="button" class="button button--secondary">
                    {button_label}
                </button>
                <pre id=result_id class="json-viewer__content"></pre>
            </div>
        </div>
    }
}
