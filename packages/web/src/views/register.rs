//! Registration page with donor/hospital role tabs.

use api::{ApiClient, ApiError, RegistrationPayload};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input};
use ui::{alert, name_label, name_placeholder, phone_label, phone_placeholder, use_session, RoleTabs};

use crate::Route;

/// Success alert shown after a completed registration, with the assigned
/// hospital id appended when the backend returns one.
fn success_message(role: Role, hospital_id: Option<&str>) -> String {
    let mut message = format!("{} Registration Successful!", role.title());
    if let Some(id) = hospital_id {
        message.push_str(&format!(" Your hospital ID is {id}."));
    }
    message
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let role = use_signal(|| Role::Donor);
    let mut fullname = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut aadhar = use_signal(String::new);
    let mut weight = use_signal(String::new);
    let mut dob = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let payload = match role() {
                Role::Donor => RegistrationPayload::Donor {
                    fullname: fullname().trim().to_string(),
                    phone: phone().trim().to_string(),
                    email: email().trim().to_string(),
                    password: password(),
                    aadhar: aadhar().trim().to_string(),
                    weight: weight().trim().to_string(),
                    dob: dob().trim().to_string(),
                },
                Role::Hospital => RegistrationPayload::Hospital {
                    fullname: fullname().trim().to_string(),
                    phone: phone().trim().to_string(),
                    email: email().trim().to_string(),
                    password: password(),
                },
            };

            if let Err(message) = payload.validate() {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match ApiClient::default().register(&payload).await {
                Ok(response) => {
                    alert(&success_message(role(), response.hospital_id.as_deref()));
                    nav.push(Route::Login {});
                }
                Err(ApiError::Server(message)) => {
                    loading.set(false);
                    alert(&format!("Registration Failed: {message}"));
                }
                Err(err) => {
                    loading.set(false);
                    tracing::error!("registration request failed: {err}");
                    alert("Connection Error: Is the backend server running?");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }
            p { class: "auth-subtitle", "Join LifeLink as a donor or a hospital" }

            RoleTabs { role }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label { "{name_label(role())}" }
                Input {
                    r#type: "text",
                    placeholder: "{name_placeholder(role())}",
                    value: fullname(),
                    oninput: move |evt: FormEvent| fullname.set(evt.value()),
                }

                label { "{phone_label(role())}" }
                Input {
                    r#type: "tel",
                    placeholder: "{phone_placeholder(role())}",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                label { "Email Address" }
                Input {
                    r#type: "email",
                    placeholder: "Enter your email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                label { "Password" }
                Input {
                    r#type: "password",
                    placeholder: "Choose a password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if role() == Role::Donor {
                    label { "Aadhar Number" }
                    Input {
                        r#type: "text",
                        placeholder: "Enter your Aadhar number",
                        value: aadhar(),
                        oninput: move |evt: FormEvent| aadhar.set(evt.value()),
                    }

                    label { "Weight (kg)" }
                    Input {
                        r#type: "number",
                        placeholder: "Enter your weight",
                        value: weight(),
                        oninput: move |evt: FormEvent| weight.set(evt.value()),
                    }

                    label { "Date of Birth" }
                    Input {
                        r#type: "date",
                        value: dob(),
                        oninput: move |evt: FormEvent| dob.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Registering..." } else { "Register" }
                }
            }

            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_message_is_role_capitalized() {
        assert_eq!(
            success_message(Role::Donor, None),
            "Donor Registration Successful!"
        );
        assert_eq!(
            success_message(Role::Hospital, Some("HOSP-42")),
            "Hospital Registration Successful! Your hospital ID is HOSP-42."
        );
    }
}

