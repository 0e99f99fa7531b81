use leptos::prelude::*;
use leptos_router::components::A;
use setup_blog_app::pages;

#[component]
pub fn Home() -> impl IntoView {
    let page = pages::landing();

    view! {
        <section class="pt-40 pb-24 px-6 flex flex-col items-center relative overflow-hidden">
            <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-violet-600/10 blur-[120px] rounded-full pointer-events-none"></div>

            <h1 class="relative text-5xl md:text-6xl font-bold text-white tracking-tight mb-12">
                {page.heading}
            </h1>

            <div class="relative w-full max-w-md rounded-[14px] bg-[var(--card-bg)] border-l-[5px] border-[var(--color-secondary)] p-8 text-center">
                <h2 class="text-2xl font-semibold text-violet-200 mb-6">{page.card_title}</h2>
                <A
                    href=page.control.path
                    attr:class="inline-block px-[22px] py-[10px] rounded-[10px] text-white font-semibold uppercase [background:var(--button-gradient)] hover:opacity-90 transition-opacity"
                >
                    {page.control.label}
                </A>
            </div>
        </section>
    }
}
