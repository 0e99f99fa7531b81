pub mod components;
pub mod pages;

use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Style};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;
use setup_blog_app::config::SiteSettings;
use setup_blog_app::nav::ViewportState;
use setup_blog_app::routes::{self, View};
use setup_blog_core::{content, Section, SiteTheme};

use pages::blog::Blog;
use pages::home::Home;
use pages::not_found::NotFound;

/// Values every page reads; passed through context instead of globals.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub settings: StoredValue<SiteSettings>,
    pub sections: StoredValue<Vec<Section>>,
    pub viewport: RwSignal<ViewportState>,
}

fn window_width() -> u32 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w as u32)
        .unwrap_or(0)
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = SiteSettings::default();
    let sections = content::sections().unwrap_or_else(|e| {
        log::error!("Embedded content rejected: {}", e);
        Vec::new()
    });

    let viewport = RwSignal::new(ViewportState::new(
        window_width(),
        settings.navbar.breakpoint_px,
    ));
    let handle = window_event_listener(leptos::ev::resize, move |_| {
        viewport.update(|v| {
            if let Some(mode) = v.observe(window_width()) {
                log::debug!("Layout mode {:?}", mode);
            }
        });
    });
    on_cleanup(move || handle.remove());

    provide_context(SiteContext {
        settings: StoredValue::new(settings),
        sections: StoredValue::new(sections),
        viewport,
    });

    view! {
        <Style>{SiteTheme::DARK.to_css()}</Style>
        <Router>
            <ScrollToTop />
            <div class="min-h-screen bg-[var(--color-bg)] text-[var(--color-text)] font-[family-name:var(--font-family)]">
                <Navbar />
                <RoutedPage />
            </div>
        </Router>
    }
}

/// Ordered route lookup shared with the terminal reader.
#[component]
fn RoutedPage() -> impl IntoView {
    let location = use_location();

    move || match routes::resolve(&location.pathname.get()) {
        View::Landing => view! { <Home /> }.into_any(),
        View::Documentation => view! { <Blog /> }.into_any(),
        View::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
