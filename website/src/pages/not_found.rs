use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use setup_blog_app::pages;
use setup_blog_app::routes::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    log::debug!("No route for {}", path);

    view! {
        <section class="pt-40 px-6 text-center">
            <p class="text-6xl font-black text-[var(--color-secondary)]">"404"</p>
            <h1 class="text-3xl font-bold text-white mt-4">{pages::NOT_FOUND_TITLE}</h1>
            <p class="text-[var(--color-text-muted)] mt-4">
                "Nothing lives at " <code class="text-[var(--color-secondary)]">{path}</code>
            </p>
            <A href=HOME_PATH attr:class="inline-block mt-8 text-[var(--color-secondary)] hover:underline">
                "Back to the home page"
            </A>
        </section>
    }
}
