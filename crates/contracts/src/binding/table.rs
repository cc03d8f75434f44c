//! Bindings of the travel registry console page

use super::{ActionBinding, EndpointTemplate, HttpMethod};

pub const TRAVELER_FORM: &str = "travelerForm";
pub const TRAVELER_RESULT: &str = "travelerResult";
pub const GET_TRAVELERS: &str = "getTravelers";
pub const TRAVELER_LIST: &str = "travelerList";
pub const COUNTRY_FORM: &str = "countryForm";
pub const COUNTRY_RESULT: &str = "countryResult";
pub const CITY_FORM: &str = "cityForm";
pub const CITY_RESULT: &str = "cityResult";
pub const GET_COUNTRY_BTN: &str = "getCountryBtn";
pub const GET_COUNTRY_ID: &str = "getCountryId";
pub const COUNTRY_WITH_CITIES: &str = "countryWithCities";
pub const TRIP_FORM: &str = "tripForm";
pub const TRIP_RESULT: &str = "tripResult";
pub const GET_TRIPS_BTN: &str = "getTripsBtn";
pub const GET_TRIPS_PESEL: &str = "getTripsPesel";
pub const TRIPS_LIST: &str = "tripsList";

pub fn travel_bindings() -> Vec<ActionBinding> {
    vec![
        ActionBinding::form_submit(
            TRAVELER_FORM,
            HttpMethod::Post,
            EndpointTemplate::literal("/travelers"),
            TRAVELER_RESULT,
        ),
        ActionBinding::button_click(
            GET_TRAVELERS,
            HttpMethod::Get,
            EndpointTemplate::literal("/travelers"),
            TRAVELER_LIST,
        ),
        ActionBinding::form_submit(
            COUNTRY_FORM,
            HttpMethod::Post,
            EndpointTemplate::literal("/countries"),
            COUNTRY_RESULT,
        ),
        ActionBinding::form_submit(
            CITY_FORM,
            HttpMethod::Post,
            EndpointTemplate::literal("/cities"),
            CITY_RESULT,
        ),
        ActionBinding::button_click(
            GET_COUNTRY_BTN,
            HttpMethod::Get,
            EndpointTemplate::literal("/countries/").param(GET_COUNTRY_ID),
            COUNTRY_WITH_CITIES,
        ),
        ActionBinding::form_submit(
            TRIP_FORM,
            HttpMethod::Post,
            EndpointTemplate::literal("/trips"),
            TRIP_RESULT,
        ),
        ActionBinding::button_click(
            GET_TRIPS_BTN,
            HttpMethod::Get,
            EndpointTemplate::literal("/travelers/")
                .param(GET_TRIPS_PESEL)
                .then("/trips"),
            TRIPS_LIST,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::dispatch::testing::RecordingTransport;
    use crate::binding::dispatch::{run_binding, ActionOutcome, ActionRequest, OutcomeKind};
    use crate::binding::{RequestPayload, TriggerKind};
    use crate::error::ActionError;
    use std::collections::HashSet;

    const BASE: &str = "http://127.0.0.1:5000";

    fn find(trigger_id: &str) -> Option<ActionBinding> {
        travel_bindings()
            .into_iter()
            .find(|b| b.trigger_id == trigger_id)
    }

    fn binding(trigger_id: &str) -> ActionBinding {
        find(trigger_id).unwrap()
    }

    #[test]
    fn test_table_shape() {
        let bindings = travel_bindings();
        assert_eq!(bindings.len(), 7);

        let triggers: HashSet<_> = bindings.iter().map(|b| b.trigger_id).collect();
        let results: HashSet<_> = bindings.iter().map(|b| b.result_id).collect();
        assert_eq!(triggers.len(), 7);
        assert_eq!(results.len(), 7);

        for b in &bindings {
            match b.trigger {
                TriggerKind::Submit => assert_eq!(b.method, HttpMethod::Post, "{}", b),
                TriggerKind::Click => assert_eq!(b.method, HttpMethod::Get, "{}", b),
            }
        }
    }

    #[test]
    fn test_every_binding_resolves_documented_request() {
        let traveler =
            RequestPayload::from_entries([("pesel", "12345678901"), ("first_name", "Alice")]);
        let country = RequestPayload::from_entries([("name", "Chile")]);
        let city = RequestPayload::from_entries([("name", "Arica"), ("country_id", "3")]);
        let trip = RequestPayload::from_entries([
            ("status", "planned"),
            ("traveler_pesel", "12345678901"),
            ("evacuation_id", ""),
        ]);

        let expected = [
            (
                TRAVELER_FORM,
                Some(&traveler),
                HttpMethod::Post,
                "/travelers",
                Some(r#"{"pesel":"12345678901","first_name":"Alice"}"#),
            ),
            (GET_TRAVELERS, None, HttpMethod::Get, "/travelers", None),
            (
                COUNTRY_FORM,
                Some(&country),
                HttpMethod::Post,
                "/countries",
                Some(r#"{"name":"Chile"}"#),
            ),
            (
                CITY_FORM,
                Some(&city),
                HttpMethod::Post,
                "/cities",
                Some(r#"{"name":"Arica","country_id":"3"}"#),
            ),
            (GET_COUNTRY_BTN, None, HttpMethod::Get, "/countries/3", None),
            (
                TRIP_FORM,
                Some(&trip),
                HttpMethod::Post,
                "/trips",
                Some(r#"{"status":"planned","traveler_pesel":"12345678901","evacuation_id":""}"#),
            ),
            (
                GET_TRIPS_BTN,
                None,
                HttpMethod::Get,
                "/travelers/12345678901/trips",
                None,
            ),
        ];
        let lookup = |id: &str| match id {
            GET_COUNTRY_ID => Some("3".to_string()),
            GET_TRIPS_PESEL => Some("12345678901".to_string()),
            _ => None,
        };

        for (trigger, payload, method, path, body) in expected {
            let request =
                ActionRequest::for_binding(&binding(trigger), BASE, lookup, payload).unwrap();
            assert_eq!(request.method, method, "{}", trigger);
            assert_eq!(request.url, format!("{BASE}{path}"), "{}", trigger);
            assert_eq!(request.body.as_deref(), body, "{}", trigger);
        }
    }

    #[test]
    fn test_only_accepted_submit_clears_form() {
        let created = ActionOutcome {
            kind: OutcomeKind::Success,
            status: Some(201),
            text: "{}".to_string(),
        };
        let rejected = ActionOutcome {
            kind: OutcomeKind::ErrorStatus,
            status: Some(409),
            text: "{}".to_string(),
        };
        let unreachable = ActionOutcome::failed(&ActionError::Transport("offline".into()));

        let form = binding(COUNTRY_FORM);
        assert!(form.clears_form_after(&created));
        assert!(!form.clears_form_after(&rejected));
        assert!(!form.clears_form_after(&unreachable));

        let button = binding(GET_TRAVELERS);
        assert!(!button.resets_form());
        assert!(!button.clears_form_after(&created));
    }

    #[tokio::test]
    async fn test_traveler_submit_scenario() {
        let transport =
            RecordingTransport::replying(201, r#"{"pesel":"12345678901","email":"a@x.pl","login":"alice"}"#);
        let payload =
            RequestPayload::from_entries([("pesel", "12345678901"), ("name", "Alice")]);

        let outcome = run_binding(
            &transport,
            &binding(TRAVELER_FORM),
            BASE,
            |_| None,
            Some(&payload),
        )
        .await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].url, "http://127.0.0.1:5000/travelers");
        assert_eq!(
            sent[0].body.as_deref(),
            Some(r#"{"pesel":"12345678901","name":"Alice"}"#)
        );
        assert_eq!(sent[0].content_type(), Some("application/json"));
        assert!(binding(TRAVELER_FORM).clears_form_after(&outcome));
    }

    #[tokio::test]
    async fn test_rejected_submit_keeps_form() {
        let transport = RecordingTransport::replying(
            400,
            r#"{"error":"Fields 'status' and 'traveler_pesel' are required"}"#,
        );
        let outcome = run_binding(&transport, &binding(TRIP_FORM), BASE, |_| None, None).await;
        assert!(!binding(TRIP_FORM).clears_form_after(&outcome));
        assert!(outcome.text.contains("traveler_pesel"));
    }

    #[tokio::test]
    async fn test_get_country_scenario() {
        let transport = RecordingTransport::replying(200, r#"{"id":3,"name":"Chile","cities":[]}"#);
        let outcome = run_binding(
            &transport,
            &binding(GET_COUNTRY_BTN),
            BASE,
            |_| Some("3".to_string()),
            None,
        )
        .await;

        assert_eq!(transport.sent(), vec![ActionRequest::get("http://127.0.0.1:5000/countries/3")]);
        assert_eq!(
            outcome.text,
            "{\n  \"id\": 3,\n  \"name\": \"Chile\",\n  \"cities\": []\n}"
        );
        assert!(!binding(GET_COUNTRY_BTN).resets_form());
    }

    #[tokio::test]
    async fn test_get_trips_scenario() {
        let transport = RecordingTransport::default();
        run_binding(
            &transport,
            &binding(GET_TRIPS_BTN),
            BASE,
            |_| Some("12345678901".to_string()),
            None,
        )
        .await;

        assert_eq!(
            transport.sent(),
            vec![ActionRequest::get("http://127.0.0.1:5000/travelers/12345678901/trips")]
        );
    }

    #[tokio::test]
    async fn test_empty_country_id_requests_bare_collection_path() {
        let transport = RecordingTransport::default();
        run_binding(
            &transport,
            &binding(GET_COUNTRY_BTN),
            BASE,
            |_| Some(String::new()),
            None,
        )
        .await;

        assert_eq!(transport.sent()[0].url, "http://127.0.0.1:5000/countries/");
    }

    #[tokio::test]
    async fn test_repeated_click_repeats_request() {
        let transport = RecordingTransport::default();
        let b = binding(GET_TRAVELERS);
        run_binding(&transport, &b, BASE, |_| None, None).await;
        run_binding(&transport, &b, BASE, |_| None, None).await;

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
        assert_eq!(sent[0].url, "http://127.0.0.1:5000/travelers");
    }
}
