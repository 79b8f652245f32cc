use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Destructive => "btn btn-destructive",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let kind = r#type.clone();

    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{kind}",
            disabled: disabled,
            title: "{title}",
            onclick: move |evt: MouseEvent| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
