use api::DonorRecord;
use dioxus::prelude::*;

use crate::icons::{FaCalendarDays, FaDroplet, FaLocationDot, FaPhone};
use crate::Icon;

/// A single donor card. Visibility is driven by the search filter so hidden
/// cards stay mounted and reappear when the query changes.
#[component]
pub fn DonorCard(donor: DonorRecord, #[props(default = true)] visible: bool) -> Element {
    rsx! {
        div {
            class: "donor-card",
            style: if visible { "display: flex;" } else { "display: none;" },
            div {
                class: "donor-details",
                h3 { class: "donor-name", "{donor.fullname}" }
                div {
                    class: "donor-detail-item",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    span { "{donor.location_display()}" }
                }
                div {
                    class: "donor-detail-item",
                    Icon { icon: FaPhone, width: 14, height: 14 }
                    span { "{donor.phone}" }
                }
                div {
                    class: "donor-detail-item",
                    Icon { icon: FaCalendarDays, width: 14, height: 14 }
                    span { "Last donated: {donor.last_donated_display()}" }
                }
            }
            div {
                class: "donor-blood-group",
                title: "Blood group",
                Icon { icon: FaDroplet, width: 16, height: 16 }
                span { "{donor.blood_group_display()}" }
            }
        }
    }
}
