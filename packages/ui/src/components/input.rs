use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = false)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}
