use chrono::Utc;
use leptos::{html, prelude::*};

use crate::contact::{ContactMessage, NoticeBanner, NoticeKind};
#[cfg(feature = "ssr")]
use crate::contact::ContactError;
use crate::content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE};
use crate::section::SectionId;

use super::reveal::use_reveal;

#[server]
pub async fn submit_contact(
    name: String,
    email: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::config::SiteConfig;

    let msg = ContactMessage::new(name, email, message)
        .validated()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let config = use_context::<SiteConfig>().unwrap_or_default();
    relay_contact(&config, &msg).await.map_err(|e| {
        tracing::error!(error = %e, "contact submission failed");
        ServerFnError::new(e.to_string())
    })?;
    tracing::info!(from = %msg.email, "contact submission relayed");
    Ok(())
}

#[cfg(feature = "ssr")]
async fn relay_contact(
    config: &crate::config::SiteConfig,
    msg: &ContactMessage,
) -> Result<(), ContactError> {
    let url = config
        .contact_relay_url
        .as_deref()
        .ok_or(ContactError::NotConfigured)?;
    let client = reqwest::Client::builder()
        .timeout(config.contact_relay_timeout)
        .build()
        .map_err(|e| ContactError::Transport(e.to_string()))?;
    let resp = client
        .post(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .json(msg)
        .send()
        .await
        .map_err(|e| ContactError::Transport(e.to_string()))?;

    let status = resp.status();
    tracing::debug!(%status, "message relay responded");
    if status.is_success() {
        Ok(())
    } else {
        Err(ContactError::Rejected(status))
    }
}

fn error_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(msg) => msg.clone(),
        _ => "Something went wrong. Please try again later.".to_string(),
    }
}

/// The banner plus the timeout that clears it.
#[derive(Clone, Copy)]
struct NoticeHandle {
    banner: StoredValue<NoticeBanner>,
    timeout: StoredValue<Option<TimeoutHandle>>,
    notice: RwSignal<Option<NoticeKind>>,
}

impl NoticeHandle {
    fn new() -> Self {
        Self {
            banner: StoredValue::new(NoticeBanner::new()),
            timeout: StoredValue::new(None),
            notice: RwSignal::new(None),
        }
    }

    fn show(self, kind: NoticeKind) {
        self.banner.update_value(|b| {
            b.show(kind.clone(), Utc::now());
        });
        self.notice.set(Some(kind));
        self.arm();
    }

    fn arm(self) {
        self.clear_timeout();
        let Some(expires_at) = self.banner.try_with_value(|b| b.expires_at()).flatten() else {
            return;
        };
        let wait = (expires_at - Utc::now()).to_std().unwrap_or_default();
        let handle = set_timeout_with_handle(
            move || {
                let still_visible = self
                    .banner
                    .try_update_value(|b| b.visible(Utc::now()).cloned())
                    .flatten();
                if still_visible.is_some() {
                    self.arm();
                } else {
                    self.notice.set(None);
                }
            },
            wait,
        )
        .ok();
        self.timeout.try_set_value(handle);
    }

    fn dismiss(self) {
        self.clear_timeout();
        self.banner.try_update_value(|b| b.dismiss());
        self.notice.set(None);
    }

    fn clear_timeout(self) {
        if let Some(handle) = self.timeout.try_get_value().flatten() {
            handle.clear();
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(SectionId::Contact, section_ref);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let notice = NoticeHandle::new();
    on_cleanup(move || notice.clear_timeout());

    let submit = ServerAction::<SubmitContact>::new();
    let pending = submit.pending();

    Effect::new(move |_| match submit.value().get() {
        Some(Ok(())) => {
            set_name.set(String::new());
            set_email.set(String::new());
            set_message.set(String::new());
            notice.show(NoticeKind::Success);
        }
        Some(Err(e)) => {
            log::warn!("contact submission failed: {e}");
            notice.show(NoticeKind::Error(error_message(&e)));
        }
        None => {}
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let msg = ContactMessage::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        match msg.validated() {
            Ok(msg) => {
                notice.dismiss();
                submit.dispatch(SubmitContact {
                    name: msg.name,
                    email: msg.email,
                    message: msg.message,
                });
            }
            Err(e) => notice.show(NoticeKind::Error(e.to_string())),
        }
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-purple-500 transition-colors";

    view! {
        <section
            id=SectionId::Contact.as_str()
            node_ref=section_ref
            class="py-20 bg-white dark:bg-gray-900"
        >
            <div
                class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 transition-all duration-1000"
                class=("opacity-0", move || !revealed.get())
                class=("translate-y-10", move || !revealed.get())
            >
                <h2 class="text-3xl md:text-4xl font-bold text-center text-gray-900 dark:text-white mb-4">
                    "Get In Touch"
                </h2>
                <p class="text-center text-gray-600 dark:text-gray-300 max-w-2xl mx-auto mb-12">
                    "Have a project in mind or just want to say hello? Drop me a message."
                </p>
                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <ContactDetail icon="✉" label="Email" value=CONTACT_EMAIL />
                        <ContactDetail icon="☎" label="Phone" value=CONTACT_PHONE />
                        <ContactDetail icon="⌖" label="Location" value=CONTACT_LOCATION />
                    </div>
                    <form on:submit=on_submit class="space-y-6" novalidate=true>
                        <div>
                            <label for="contact-name" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                "Name"
                            </label>
                            <input
                                id="contact-name"
                                type="text"
                                class=input_class
                                prop:value=name
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact-email" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                "Email"
                            </label>
                            <input
                                id="contact-email"
                                type="email"
                                class=input_class
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="contact-message" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">
                                "Message"
                            </label>
                            <textarea
                                id="contact-message"
                                rows="5"
                                class=input_class
                                prop:value=message
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="w-full px-8 py-3 bg-purple-600 text-white rounded-lg hover:bg-purple-700 disabled:opacity-60 disabled:cursor-not-allowed transition-colors duration-300"
                        >
                            {move || if pending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                        {move || {
                            notice
                                .notice
                                .get()
                                .map(|kind| match kind {
                                    NoticeKind::Success => {
                                        view! {
                                            <p class="p-4 rounded-lg bg-green-100 dark:bg-green-900/40 text-green-800 dark:text-green-300">
                                                "Thanks! Your message has been sent."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                    NoticeKind::Error(msg) => {
                                        view! {
                                            <p class="p-4 rounded-lg bg-red-100 dark:bg-red-900/40 text-red-800 dark:text-red-300">
                                                {msg}
                                            </p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-4">
            <div class="w-12 h-12 flex items-center justify-center rounded-full bg-purple-100 dark:bg-purple-900/50 text-purple-600 dark:text-purple-400 text-xl">
                {icon}
            </div>
            <div>
                <h3 class="text-sm font-medium text-gray-500 dark:text-gray-400">{label}</h3>
                <p class="text-gray-900 dark:text-white">{value}</p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use std::time::Duration;

    use axum::{http::StatusCode, routing::post, Json, Router};

    use super::*;
    use crate::config::SiteConfig;

    /// Serves a relay on an ephemeral port that answers every well-formed
    /// submission with `status`.
    async fn relay_answering(status: StatusCode) -> String {
        let app = Router::new().route(
            "/relay",
            post(move |Json(_msg): Json<ContactMessage>| async move { status }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("should be able to bind test relay");
        let addr = listener.local_addr().expect("bound address");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("test relay should keep serving");
        });
        format!("http://{addr}/relay")
    }

    fn config(url: impl Into<String>) -> SiteConfig {
        SiteConfig {
            contact_relay_url: Some(url.into()),
            contact_relay_timeout: Duration::from_secs(2),
        }
    }

    fn message() -> ContactMessage {
        ContactMessage::new("Ada", "ada@example.com", "hello")
    }

    #[tokio::test]
    async fn test_relay_requires_configured_url() {
        assert_eq!(
            relay_contact(&SiteConfig::default(), &message()).await,
            Err(ContactError::NotConfigured)
        );
    }

    #[tokio::test]
    async fn test_relay_acknowledges_success_status() {
        let url = relay_answering(StatusCode::OK).await;
        assert_eq!(relay_contact(&config(url), &message()).await, Ok(()));

        let url = relay_answering(StatusCode::ACCEPTED).await;
        assert_eq!(relay_contact(&config(url), &message()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_relay_rejects_error_status() {
        let url = relay_answering(StatusCode::INTERNAL_SERVER_ERROR).await;
        assert_eq!(
            relay_contact(&config(url), &message()).await,
            Err(ContactError::Rejected(StatusCode::INTERNAL_SERVER_ERROR))
        );
    }

    #[tokio::test]
    async fn test_unreachable_relay_is_transport_error() {
        let result = relay_contact(&config("http://127.0.0.1:9/relay"), &message()).await;
        assert!(
            matches!(result, Err(ContactError::Transport(_))),
            "{result:?}"
        );
    }
}
