use leptos::{ev, prelude::*};

use crate::contact::{
    ContactError, Field, SubmitStatus, Submission, SENDING_DELAY, SUCCESS_DISPLAY,
};
use crate::content::{ContactChannel, ContactContent, SiteConfig};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg bg-background border border-border focus:border-primary focus:outline-none transition-colors";

fn text_input(
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
    required: bool,
    submission: RwSignal<Submission>,
) -> impl IntoView {
    let id = format!("contact-{}", field.to_string().to_lowercase());
    view! {
        <div>
            <label for=id.clone() class="block text-sm font-medium mb-2">
                {field.to_string()}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                type=kind
                required=required
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || submission.with(|s| s.form.get(field).to_string())
                on:input=move |ev| submission.update(|s| s.edit(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn Contact(site: &'static SiteConfig, contact: &'static ContactContent) -> impl IntoView {
    let submission = RwSignal::new(Submission::default());
    let status = Memo::new(move |_| submission.with(Submission::status));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let begun = submission.try_update(|s| s.begin(&site.email, &site.default_subject));
        let uri = match begun {
            Some(Ok(uri)) => uri,
            Some(Err(ContactError::Busy)) | None => return,
            Some(Err(e)) => {
                log::warn!("Contact form rejected: {e}");
                return;
            }
        };
        if let Err(e) = window().location().set_href(&uri) {
            log::error!("Couldn't navigate to mailto link: {e:?}");
            submission.update(|s| s.fail(ContactError::Navigation));
            return;
        }
        log::info!("Handed contact message to the mail client");
        set_timeout(
            move || {
                submission.update(Submission::finish);
                set_timeout(move || submission.update(Submission::reset), SUCCESS_DISPLAY);
            },
            SENDING_DELAY,
        );
    };

    let button_label = move || match status.get() {
        SubmitStatus::Idle => "Send Message",
        SubmitStatus::Loading => "Sending...",
        SubmitStatus::Success => "Message Sent!",
        SubmitStatus::Error => "Try Again",
    };
    let button_class = move || match status.get() {
        SubmitStatus::Success => "w-full px-6 py-3 rounded-lg font-medium bg-green-600 text-white",
        SubmitStatus::Error => "w-full px-6 py-3 rounded-lg font-medium bg-red-600 text-white",
        _ => "w-full px-6 py-3 rounded-lg font-medium bg-primary text-primary-foreground hover:opacity-90 transition-opacity disabled:opacity-60",
    };

    view! {
        <div class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2 class="text-3xl sm:text-4xl font-bold mb-4">
                        "Get In " <span class="text-primary">"Touch"</span>
                    </h2>
                    <div class="w-20 h-1 bg-primary mx-auto rounded-full mb-6"></div>
                    <p class="text-muted-foreground max-w-2xl mx-auto">{contact.intro.as_str()}</p>
                </div>
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-4">
                        {contact.channels.iter().map(channel_card).collect_view()}
                        <div class="flex flex-wrap gap-4 pt-4">
                            {contact
                                .actions
                                .iter()
                                .map(|action| {
                                    let external = action.is_external();
                                    view! {
                                        <a
                                            href=action.href.as_str()
                                            target=external.then_some("_blank")
                                            rel=external.then_some("noopener noreferrer")
                                            class="px-4 py-2 rounded-lg border border-border hover:bg-secondary/50 text-sm font-medium transition-colors"
                                        >
                                            {action.label.as_str()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <form
                        class="space-y-6 p-8 rounded-xl bg-card border border-border"
                        novalidate=true
                        on:submit=on_submit
                    >
                        <div class="grid sm:grid-cols-2 gap-6">
                            {text_input(Field::Name, "text", "Your name", true, submission)}
                            {text_input(Field::Email, "email", "you@example.com", true, submission)}
                        </div>
                        {text_input(Field::Subject, "text", "What's this about?", false, submission)}
                        <div>
                            <label for="contact-message" class="block text-sm font-medium mb-2">
                                "Message *"
                            </label>
                            <textarea
                                id="contact-message"
                                rows="6"
                                required=true
                                placeholder="Tell me about your project..."
                                class=INPUT_CLASS
                                prop:value=move || {
                                    submission.with(|s| s.form.get(Field::Message).to_string())
                                }
                                on:input=move |ev| {
                                    submission.update(|s| s.edit(Field::Message, event_target_value(&ev)))
                                }
                            ></textarea>
                        </div>
                        {move || {
                            submission
                                .with(|s| s.error().map(ToString::to_string))
                                .map(|msg| {
                                    view! {
                                        <p role="alert" class="text-sm text-red-400">
                                            {msg}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            class=button_class
                            disabled=move || status.get() == SubmitStatus::Loading
                        >
                            {button_label}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

fn channel_card(channel: &'static ContactChannel) -> impl IntoView {
    let external = channel.is_external();
    view! {
        <a
            href=channel.href.as_str()
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="flex items-center gap-4 p-4 rounded-xl bg-card border border-border hover:border-primary/40 transition-colors"
        >
            <div>
                <p class="text-sm text-muted-foreground">{channel.label.as_str()}</p>
                <p class="font-medium">{channel.value.as_str()}</p>
            </div>
        </a>
    }
}
