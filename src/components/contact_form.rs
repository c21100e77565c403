use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use log::{error, info, warn};

use crate::catalog::Icon;
use crate::contact::{self, ContactRequest};

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    // The body only exists while open, so every reopen starts with empty fields
    html! {
        <div class="contact-overlay">
            <div class="contact-modal">
                <button class="contact-close" onclick={close} aria-label="Cerrar">
                    {Icon::Close.render("contact-close-icon")}
                </button>
                <h3 class="contact-title">{"Contáctanos"}</h3>
                <ContactFormBody on_close={props.on_close.clone()} />
            </div>
            <style>
                {r#"
                .contact-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }
                .contact-modal {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    background: rgba(1, 38, 119, 0.9);
                    border-radius: 1rem;
                    padding: 2rem;
                    animation: fadeIn 0.3s ease-out;
                }
                .contact-close {
                    position: absolute;
                    right: 1rem;
                    top: 1rem;
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .contact-close:hover {
                    color: #fff;
                }
                .contact-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                    text-align: center;
                }
                .contact-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    margin-bottom: 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                    box-sizing: border-box;
                }
                .contact-form textarea {
                    resize: none;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #60a5fa;
                }
                .contact-form input:user-invalid,
                .contact-form textarea:user-invalid {
                    border-color: #f87171;
                }
                .contact-submit {
                    width: 100%;
                    padding: 0.75rem;
                    background: #3b82f6;
                    border: none;
                    border-radius: 0.5rem;
                    color: #fff;
                    font-weight: 600;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .contact-submit:hover {
                    background: #2563eb;
                }
                @keyframes fadeIn {
                    from { opacity: 0; transform: scale(0.95); }
                    to { opacity: 1; transform: scale(1); }
                }
                "#}
            </style>
        </div>
    }
}

/// Closes the modal exactly once and returns the request worth sending, if
/// the fields hold one.
fn finish_submission(
    name: &str,
    email: &str,
    message: &str,
    on_close: &Callback<()>,
) -> Option<ContactRequest> {
    let request = match ContactRequest::new(name, email, message) {
        Ok(request) => Some(request),
        Err(e) => {
            warn!("Contact form submitted incomplete: {}", e);
            None
        }
    };
    on_close.emit(());
    request
}

#[derive(Properties, PartialEq)]
struct ContactFormBodyProps {
    on_close: Callback<()>,
}

#[function_component(ContactFormBody)]
fn contact_form_body(props: &ContactFormBodyProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let Some(request) = finish_submission(&name, &email, &message, &on_close) {
                spawn_local(async move {
                    match contact::submit(request).await {
                        Ok(()) => info!("Contact form handled"),
                        Err(e) => error!("Contact form submission failed: {}", e),
                    }
                });
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <div>
                <label for="name">{"Nombre Completo"}</label>
                <input
                    type="text"
                    id="name"
                    required={true}
                    value={(*name).clone()}
                    oninput={on_name}
                />
            </div>
            <div>
                <label for="email">{"Correo Electrónico"}</label>
                <input
                    type="email"
                    id="email"
                    required={true}
                    value={(*email).clone()}
                    oninput={on_email}
                />
            </div>
            <div>
                <label for="message">{"Mensaje"}</label>
                <textarea
                    id="message"
                    required={true}
                    rows="4"
                    value={(*message).clone()}
                    oninput={on_message}
                />
            </div>
            <button type="submit" class="contact-submit">
                {Icon::Send.render("contact-submit-icon")}
                {"Enviar"}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use crate::test_support::render_html;

    fn counting_close() -> (Callback<()>, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let callback = {
            let closes = closes.clone();
            Callback::from(move |_| closes.set(closes.get() + 1))
        };
        (callback, closes)
    }

    fn render_form(is_open: bool) -> String {
        render_html::<ContactForm>(ContactFormProps {
            is_open,
            on_close: Callback::noop(),
        })
    }

    #[test]
    fn closed_modal_renders_nothing() {
        assert_eq!(render_form(false).trim(), "");
    }

    #[test]
    fn open_modal_renders_one_form_with_three_required_fields() {
        let html = render_form(true);
        assert_eq!(html.matches("<form").count(), 1);
        assert_eq!(html.matches("required=").count(), 3);
        assert!(html.contains("id=\"name\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("<textarea"));
    }

    #[test]
    fn every_reopen_starts_with_empty_fields() {
        for is_open in [true, false, true] {
            let html = render_form(is_open);
            if is_open {
                assert!(html.matches("value=\"\"").count() >= 2, "fields not empty: {}", html);
                assert!(html.contains("></textarea>"));
            } else {
                assert!(html.trim().is_empty());
            }
        }
    }

    #[test]
    fn complete_submission_closes_once() {
        let (on_close, closes) = counting_close();
        let request = finish_submission("Ana", "ana@example.com", "Hola", &on_close);
        assert_eq!(closes.get(), 1);
        assert_eq!(request.map(|r| r.name), Some("Ana".to_string()));
    }

    #[test]
    fn incomplete_submission_still_closes_once_and_sends_nothing() {
        let (on_close, closes) = counting_close();
        let request = finish_submission("Ana", "", "Hola", &on_close);
        assert_eq!(closes.get(), 1);
        assert!(request.is_none());
    }
}
