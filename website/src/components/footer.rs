use leptos::prelude::*;
use setup_blog_app::pages;

#[component]
pub fn Footer(footer: pages::Footer) -> impl IntoView {
    view! {
        <footer class="border-t border-[var(--color-secondary)]/20 py-10 mt-16">
            <div class="max-w-5xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-[var(--color-text-muted)] text-sm">
                <p>{footer.text}</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    {footer
                        .social
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.path
                                    target="_blank"
                                    rel="noreferrer"
                                    class="hover:text-[var(--color-secondary)] transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
