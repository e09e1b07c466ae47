//! Donor directory: organ and blood sections with client-side search.

use api::{ApiClient, DonorRecord};
use dioxus::prelude::*;
use ui::{donor_matches, DonorCard, DonorSearch, Navbar};

use crate::Route;

/// Donor directory page.
#[component]
pub fn Donors() -> Element {
    let query = use_signal(String::new);

    let donors = use_resource(move || async move { ApiClient::default().list_donors().await });

    let body = match &*donors.read() {
        None => rsx! {
            p { class: "donor-placeholder", "Loading donors..." }
        },
        Some(Ok(records)) => {
            let organ: Vec<DonorRecord> =
                records.iter().filter(|d| d.in_organ_list()).cloned().collect();
            let blood: Vec<DonorRecord> =
                records.iter().filter(|d| d.in_blood_list()).cloned().collect();
            rsx! {
                DonorList { title: "Organ Donors", donors: organ, query }
                DonorList { title: "Blood Donors", donors: blood, query }
            }
        }
        // A failed fetch puts both sections in the error state; there is no
        // partial rendering.
        Some(Err(err)) => rsx! {
            DonorListError { title: "Organ Donors", message: "{err}" }
            DonorListError { title: "Blood Donors", message: "{err}" }
        },
    };

    rsx! {
        Navbar {
            Link { class: "nav-link", to: Route::Home {}, "Home" }
            Link { class: "nav-link", to: Route::Donors {}, "Find Donors" }
            Link { class: "nav-link", to: Route::Register {}, "Register" }
        }

        section {
            class: "donors-page",
            h1 { "Registered Donors" }
            DonorSearch { query }
            {body}
        }
    }
}

/// One directory section. Cards stay mounted and are shown or hidden by the
/// search filter.
#[component]
fn DonorList(title: String, donors: Vec<DonorRecord>, query: Signal<String>) -> Element {
    rsx! {
        section {
            class: "donor-list",
            h2 { "{title}" }
            if donors.is_empty() {
                p { class: "donor-placeholder", "No registered donors found yet." }
            } else {
                for donor in donors.iter() {
                    DonorCard {
                        visible: donor_matches(donor, &query()),
                        donor: donor.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn DonorListError(title: String, message: String) -> Element {
    rsx! {
        section {
            class: "donor-list",
            h2 { "{title}" }
            p { class: "donor-error", "Could not load donors: {message}" }
        }
    }
}
