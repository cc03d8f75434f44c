use crate::pages::travel_console::TravelConsole;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <TravelConsole />
    }
}
