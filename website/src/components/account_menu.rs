use leptos::prelude::*;
use setup_blog_app::account::{AccountField, AccountMenuState};
use setup_blog_app::auth::{self, AuthOutcome, AuthRequest, UnconfiguredAuth};

use super::icons::User;
use crate::SiteContext;

/// Account control in the navigation bar: login/register form, logout, and
/// the collaborator's reply shown as-is.
#[component]
pub fn AccountMenu() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let show_registration = ctx.settings.with_value(|s| s.site.show_registration);

    let form = RwSignal::new(None::<AccountMenuState>);
    let status = RwSignal::new(None::<AuthOutcome>);

    let submit = move |request: AuthRequest| {
        form.update(|f| {
            if let Some(f) = f {
                f.pending = true;
            }
        });
        leptos::task::spawn_local(async move {
            let outcome = auth::perform(&UnconfiguredAuth, request).await;
            form.set(None);
            status.set(Some(outcome));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        form.update(|f| {
            if let Some(f) = f.as_mut().filter(|f| !f.pending) {
                request = f.request();
            }
        });
        if let Some(request) = request {
            submit(request);
        }
    };

    let toggle = move |_| {
        form.update(|f| {
            *f = match f.take() {
                Some(_) => None,
                None => Some(AccountMenuState::new()),
            }
        })
    };

    view! {
        <div class="relative">
            <button on:click=toggle aria-label="Account" class="text-[var(--color-text)] hover:text-white">
                <User class="w-6 h-6" />
            </button>
            {move || {
                status
                    .get()
                    .map(|outcome| {
                        let class = if outcome.success {
                            "absolute right-0 mt-2 text-xs whitespace-nowrap text-[var(--color-success)]"
                        } else {
                            "absolute right-0 mt-2 text-xs whitespace-nowrap text-[var(--color-error)]"
                        };
                        view! { <p class=class>{outcome.message}</p> }
                    })
            }}
            {move || {
                form.get()
                    .map(|state| {
                        let fields = state.form.fields();
                        view! {
                            <form
                                on:submit=on_submit
                                class="absolute right-0 mt-3 w-72 p-4 rounded-[14px] bg-[var(--color-paper)] border border-slate-800 space-y-3"
                            >
                                <h3 class="font-semibold text-white">{state.form.title()}</h3>
                                {fields
                                    .iter()
                                    .map(|field| {
                                        let field = *field;
                                        let kind = match field {
                                            AccountField::Password => "password",
                                            AccountField::Email => "email",
                                            AccountField::Username => "text",
                                        };
                                        view! {
                                            <label class="block text-sm text-[var(--color-text-muted)]">
                                                {field.label()}
                                                <input
                                                    type=kind
                                                    prop:value=state.value(field).to_string()
                                                    on:input=move |ev| {
                                                        let value = event_target_value(&ev);
                                                        form.update(|f| {
                                                            if let Some(f) = f {
                                                                f.set_value(field, value);
                                                            }
                                                        });
                                                    }
                                                    class="mt-1 w-full rounded bg-[var(--color-bg)] border border-violet-700 focus:border-[var(--color-secondary)] px-2 py-1 text-white"
                                                />
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                                {state.hint.map(|hint| view! { <p class="text-xs text-[var(--color-error)]">{hint}</p> })}
                                <div class="flex justify-between items-center">
                                    <button
                                        type="submit"
                                        disabled=state.pending
                                        class="px-4 py-2 rounded-[10px] text-white font-semibold uppercase [background:var(--button-gradient)]"
                                    >
                                        {if state.pending { "Working…" } else { state.form.title() }}
                                    </button>
                                    {show_registration
                                        .then(|| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="text-xs text-[var(--color-secondary)]"
                                                    on:click=move |_| {
                                                        form.update(|f| {
                                                            if let Some(f) = f {
                                                                f.switch_form(show_registration);
                                                            }
                                                        })
                                                    }
                                                >
                                                    "Switch form"
                                                </button>
                                            }
                                        })}
                                    <button
                                        type="button"
                                        class="text-xs text-[var(--color-text-muted)]"
                                        on:click=move |_| submit(AuthRequest::Logout)
                                    >
                                        "Log out"
                                    </button>
                                </div>
                            </form>
                        }
                    })
            }}
        </div>
    }
}
