use leptos::{either::EitherOf3, ev::SubmitEvent, prelude::*, task::spawn_local};

use super::reveal::Reveal;
use crate::{
    contact::{
        submit_form, ContactForm, Field, FormData, ResetTimer, SubmissionClient, SubmissionStatus,
        SubmitError,
    },
    content::{CONTACT_INFO, SOCIAL_LINKS},
    nav::Section,
};

#[server]
pub async fn send_contact_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let data = FormData {
        name,
        email,
        subject,
        message,
    };
    relay_message(&data, crate::relay::installed()).await
}

#[cfg(feature = "ssr")]
async fn relay_message(
    data: &FormData,
    relay: Option<&crate::relay::RelayClient>,
) -> Result<(), ServerFnError> {
    if !data.is_complete() {
        return Err(ServerFnError::new("Missing required fields"));
    }
    let client = relay.ok_or_else(|| ServerFnError::new("Contact relay is not configured"))?;
    client
        .submit(data)
        .await
        .map_err(|e| ServerFnError::new(e.reason().to_string()))
}

/// Browser side of the submission: hands the fields to the server function.
struct ServerFnRelay;

impl SubmissionClient for ServerFnRelay {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        let FormData {
            name,
            email,
            subject,
            message,
        } = data.clone();
        send_contact_message(name, email, subject, message)
            .await
            .map_err(|e| SubmitError::new(e.to_string()))
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="relative min-h-screen overflow-hidden py-24 px-4 sm:px-6 glow-bg">
            <div class="relative z-10 max-w-7xl mx-auto">
                <Reveal class="text-center mb-16">
                    <h2 class="text-5xl sm:text-6xl font-extrabold tracking-tight text-gradient pb-3">
                        "Get In Touch"
                    </h2>
                    <div class="h-1 w-24 bg-gradient-to-r from-sky-400 to-emerald-400 mx-auto mt-4" />
                    <p class="text-gray-400 mt-4 text-lg max-w-2xl mx-auto">
                        "Have a question or want to work together? I'd love to hear from you!"
                    </p>
                </Reveal>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 max-w-6xl mx-auto">
                    <Reveal class="space-y-8">
                        <ContactDetails />
                    </Reveal>
                    <Reveal delay_ms=100>
                        <MessageForm />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <h3 class="text-3xl font-bold text-gradient mb-6">"Let's Connect"</h3>
        <p class="text-gray-400 mb-8 text-lg leading-relaxed">
            "I'm always excited to discuss new projects, creative ideas, or opportunities to collaborate. Whether you have a question or just want to say hi, feel free to reach out!"
        </p>
        <div class="space-y-4">
            {CONTACT_INFO
                .iter()
                .map(|item| {
                    view! {
                        <div class="contact-info-card group relative flex items-center gap-4 p-5 rounded-xl bg-white/5 border border-white/10 backdrop-blur-sm overflow-hidden hover:translate-x-1">
                            <div class=format!(
                                "absolute inset-0 bg-gradient-to-r {} opacity-0 group-hover:opacity-10 transition-opacity duration-500",
                                item.accent,
                            )></div>
                            <div class="relative flex-1">
                                <p class="text-xs text-gray-500 uppercase tracking-wider mb-1">
                                    {item.label}
                                </p>
                                {match item.href {
                                    Some(href) => {
                                        leptos::either::Either::Left(
                                            view! {
                                                <a
                                                    href=href
                                                    class="text-white font-medium hover:text-sky-400 transition-colors duration-300"
                                                >
                                                    {item.value}
                                                </a>
                                            },
                                        )
                                    }
                                    None => {
                                        leptos::either::Either::Right(
                                            view! { <p class="text-white font-medium">{item.value}</p> },
                                        )
                                    }
                                }}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="mt-10 pt-8 border-t border-white/10">
            <h4 class="text-lg font-semibold mb-4 text-gray-300">"Connect on Social Media"</h4>
            <div class="flex gap-4">
                {SOCIAL_LINKS
                    .iter()
                    .map(|social| {
                        view! {
                            <a
                                href=social.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=social.label
                                class="social-link w-14 h-14 rounded-full bg-white/5 border border-white/10 flex items-center justify-center transition-all duration-500 hover:rotate-[360deg] hover:scale-110"
                            >
                                <i class=format!("{} text-2xl text-gray-400", social.icon)></i>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let reset_handle = StoredValue::new(None::<TimeoutHandle>);
    let status = Memo::new(move |_| form.with(ContactForm::status));

    let schedule_reset = move |timer: ResetTimer| {
        let fire = move || {
            form.try_update(|f| f.expire(timer));
        };
        match set_timeout_with_handle(fire, timer.delay()) {
            Ok(handle) => reset_handle.set_value(Some(handle)),
            Err(e) => log::error!("Couldn't schedule form reset: {e:?}"),
        }
    };

    on_cleanup(move || {
        form.try_update(ContactForm::teardown);
        if let Some(handle) = reset_handle.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            match submit_form(&form, &ServerFnRelay).await {
                Ok(Some(timer)) => schedule_reset(timer),
                Ok(None) => {}
                Err(rejected) => log::debug!("Ignoring submit: {rejected}"),
            }
        });
    };

    view! {
        <div class="contact-form-card p-8 rounded-2xl backdrop-blur-sm">
            <h3 class="text-2xl font-bold mb-6 text-white">"Send a Message"</h3>
            <form on:submit=on_submit class="space-y-5">
                <TextInput form=form field=Field::Name label="Your Name" input_type="text" placeholder="John Doe" />
                <TextInput
                    form=form
                    field=Field::Email
                    label="Your Email"
                    input_type="email"
                    placeholder="john@example.com"
                />
                <TextInput
                    form=form
                    field=Field::Subject
                    label="Subject"
                    input_type="text"
                    placeholder="Project Inquiry"
                />
                <div>
                    <label for=Field::Message.as_str() class="block text-sm font-medium text-gray-300 mb-2">
                        "Your Message"
                    </label>
                    <textarea
                        id=Field::Message.as_str()
                        name=Field::Message.as_str()
                        required
                        rows="6"
                        class="form-input resize-none"
                        placeholder="Tell me about your project..."
                        prop:value=move || form.with(|f| f.data().message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="btn-submit w-full relative overflow-hidden rounded-full px-8 py-4 font-semibold text-white text-base shadow-md transition-all duration-500 flex items-center justify-center gap-2 hover:scale-105 active:scale-95"
                    disabled=move || !status.get().accepts_submit()
                >
                    <span class="relative z-10 flex items-center gap-2">
                        {move || status.get().button_label()}
                        <span class=move || match status.get() {
                            SubmissionStatus::Succeeded => "animate-bounce",
                            SubmissionStatus::Sending => "animate-pulse",
                            _ => "",
                        }>"➤"</span>
                    </span>
                </button>
                {move || match status.get() {
                    SubmissionStatus::Succeeded => {
                        EitherOf3::A(
                            view! {
                                <div class="text-center p-4 rounded-lg bg-emerald-500/10 border border-emerald-500/30 fade-in">
                                    <p class="text-emerald-400 text-sm font-medium">
                                        "✓ Thank you for reaching out! I'll get back to you soon."
                                    </p>
                                </div>
                            },
                        )
                    }
                    SubmissionStatus::Failed => {
                        EitherOf3::B(
                            view! {
                                <div class="text-center p-4 rounded-lg bg-red-500/10 border border-red-500/30 fade-in">
                                    <p class="text-red-400 text-sm font-medium">
                                        "✗ Failed to send message. Please try again or email me directly."
                                    </p>
                                </div>
                            },
                        )
                    }
                    SubmissionStatus::Idle | SubmissionStatus::Sending => EitherOf3::C(()),
                }}
            </form>
        </div>
    }
}

#[component]
fn TextInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label for=field.as_str() class="block text-sm font-medium text-gray-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=field.as_str()
                name=field.as_str()
                required
                class="form-input"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.data().get(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use axum::{http::StatusCode, routing::post, Router};

    use super::*;
    use crate::relay::{RelayClient, RelayConfig};

    fn ada() -> FormData {
        FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    async fn counting_relay(status: StatusCode) -> (RelayClient, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = Router::new().route(
            "/ajax/inbox",
            post({
                let hits = Arc::clone(&hits);
                move || async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    status
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let config = RelayConfig {
            endpoint: format!("http://{addr}/ajax/inbox"),
            ..RelayConfig::default()
        };
        (RelayClient::new(&config).unwrap(), hits)
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected() {
        let err = send_contact_message(
            "Ada".to_string(),
            String::new(),
            "Hi".to_string(),
            "Hello".to_string(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Missing required fields"), "{err}");
    }

    #[tokio::test]
    async fn incomplete_form_never_reaches_relay() {
        let (client, hits) = counting_relay(StatusCode::OK).await;
        let mut data = ada();
        data.set_field(Field::Message, "");

        let err = relay_message(&data, Some(&client)).await.unwrap_err();
        assert!(err.to_string().contains("Missing required fields"), "{err}");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_relay_is_an_error() {
        let err = relay_message(&ada(), None).await.unwrap_err();
        assert!(
            err.to_string().contains("Contact relay is not configured"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn complete_form_is_relayed_once() {
        let (client, hits) = counting_relay(StatusCode::OK).await;
        relay_message(&ada(), Some(&client)).await.unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn relay_failure_is_reported() {
        let (client, hits) = counting_relay(StatusCode::INTERNAL_SERVER_ERROR).await;
        let err = relay_message(&ada(), Some(&client)).await.unwrap_err();
        assert!(err.to_string().contains("500"), "{err}");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
