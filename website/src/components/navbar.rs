use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use setup_blog_app::nav::{self, NavBarModel, NavItem, NavLayout, NavMenuState};
use setup_blog_app::routes::HOME_PATH;

use super::account_menu::AccountMenu;
use super::icons::{Close, House, Menu};
use crate::SiteContext;

const DRAWER_WIDTH_PX: u32 = 250;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let pathname = use_location().pathname;
    let menu = RwSignal::new(NavMenuState::new());

    let model = Memo::new(move |_| {
        let path = pathname.get();
        ctx.settings.with_value(|s| {
            NavBarModel::build(&s.navbar.links, &path, &ctx.viewport.get(), &menu.get())
        })
    });

    // the overlay only exists in compact mode
    Effect::new(move || {
        if !ctx.viewport.get().is_compact() {
            menu.update(NavMenuState::close);
        }
    });

    // any route change, including back/forward, dismisses the overlay
    Effect::new(move || {
        pathname.track();
        menu.update(NavMenuState::close);
    });

    let height = move || {
        let compact = ctx.viewport.get().is_compact();
        ctx.settings
            .with_value(|s| format!("height: {}px", s.navbar.height_px(compact)))
    };
    let site_name = ctx.settings.with_value(|s| s.site.name.clone());

    let open_menu = move |_| {
        let path = pathname.get_untracked();
        let start = ctx
            .settings
            .with_value(|s| nav::selected_index(&s.navbar.links, &path))
            .unwrap_or(0);
        menu.update(|m| m.open(start));
    };

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-[var(--appbar-bg)] [border-bottom:var(--appbar-border)]"
            style=height
        >
            <div class="max-w-7xl mx-auto h-full px-6 flex items-center justify-between">
                <A href=HOME_PATH attr:class="flex items-center space-x-2 group" attr:aria-label="Home">
                    <House class="w-6 h-6 text-[var(--color-secondary)] group-hover:scale-110 transition-transform" />
                    <span class="font-bold text-white text-lg tracking-tight">{site_name}</span>
                </A>

                <div class="flex items-center space-x-8">
                    {move || match model.get().layout {
                        NavLayout::Expanded { links } => {
                            view! {
                                <nav class="flex items-center space-x-8">
                                    {links
                                        .into_iter()
                                        .map(|item| view! { <NavAnchor item=item /> })
                                        .collect_view()}
                                </nav>
                            }
                                .into_any()
                        }
                        NavLayout::Compact { overlay } => {
                            view! {
                                <button
                                    on:click=open_menu
                                    aria-label="Open navigation"
                                    class="text-[var(--color-text)] hover:text-white"
                                >
                                    <Menu class="w-6 h-6" />
                                </button>
                                {overlay.map(|items| view! { <NavDrawer items=items menu=menu /> })}
                            }
                                .into_any()
                        }
                    }}
                    <AccountMenu />
                </div>
            </div>
        </header>
    }
}

fn link_class(item: &NavItem) -> &'static str {
    if item.is_selected() {
        "text-sm font-medium transition-colors text-[var(--color-secondary)] underline underline-offset-8"
    } else {
        "text-sm font-medium transition-colors text-[var(--color-text-muted)] hover:text-white"
    }
}

#[component]
fn NavAnchor(item: NavItem) -> impl IntoView {
    let class = link_class(&item);
    view! {
        <A href=item.path attr:class=class>
            {item.label}
        </A>
    }
}

#[component]
fn NavDrawer(items: Vec<NavItem>, menu: RwSignal<NavMenuState>) -> impl IntoView {
    let close = move |_| menu.update(NavMenuState::close);

    view! {
        <div class="fixed inset-0 z-40 bg-black/40" on:click=close></div>
        <aside
            class="fixed top-0 right-0 bottom-0 z-50 bg-[var(--color-paper)] border-l border-slate-800 p-4"
            style=format!("width: {}px", DRAWER_WIDTH_PX)
        >
            <button on:click=close aria-label="Close navigation" class="mb-6 ml-auto block text-[var(--color-text-muted)] hover:text-white">
                <Close class="w-5 h-5" />
            </button>
            <nav class="flex flex-col space-y-2">
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let selected = item.is_selected();
                        let class = move || {
                            if menu.get().highlighted() == i {
                                "px-4 py-3 rounded-lg bg-[var(--color-secondary)] text-black font-semibold"
                            } else if selected {
                                "px-4 py-3 rounded-lg text-[var(--color-secondary)]"
                            } else {
                                "px-4 py-3 rounded-lg text-[var(--color-text)] hover:bg-slate-900"
                            }
                        };
                        view! {
                            <A href=item.path attr:class=class on:click=close>
                                {item.label}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
