//! Login page with donor/hospital role tabs.

use api::{ApiClient, ApiError, LoginPayload};
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input};
use ui::{
    alert, identifier_label, identifier_placeholder, make_session, use_session, RoleTabs,
    SessionState,
};

use crate::Route;

fn identifier_input_type(role: Role) -> &'static str {
    match role {
        Role::Donor => "email",
        Role::Hospital => "text",
    }
}

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let role = use_signal(|| Role::Donor);
    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home
    if !session().loading && session().user.is_some() {
        nav.replace(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let payload = LoginPayload {
                role: role(),
                identifier: identifier().trim().to_string(),
                password: password(),
            };

            if payload.identifier.is_empty() {
                error.set(Some(format!(
                    "Please enter your {}",
                    identifier_label(role()).to_lowercase()
                )));
                return;
            }
            if payload.password.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match ApiClient::default().login(&payload).await {
                Ok(mut user) => {
                    if user.role.is_none() {
                        user.role = Some(role());
                    }
                    make_session().save(&user);
                    session.set(SessionState {
                        user: Some(user),
                        loading: false,
                    });
                    nav.push(Route::Home {});
                }
                Err(ApiError::Server(message)) => {
                    loading.set(false);
                    alert(&format!("Login Failed: {message}"));
                }
                Err(err) => {
                    loading.set(false);
                    tracing::error!("login request failed: {err}");
                    alert("Connection Error: Is the backend server running?");
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { "LifeLink" }
            p { class: "auth-subtitle", "Sign in to your account" }

            RoleTabs { role }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                label { "{identifier_label(role())}" }
                Input {
                    r#type: "{identifier_input_type(role())}",
                    placeholder: "{identifier_placeholder(role())}",
                    value: identifier(),
                    oninput: move |evt: FormEvent| identifier.set(evt.value()),
                }

                label { "Password" }
                Input {
                    r#type: "password",
                    placeholder: "Enter your password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
