use leptos::prelude::*;
use setup_blog_app::pages;
use setup_blog_app::toc::{self, Sidebar};
use setup_blog_core::{Block, Section};

use crate::components::badge::{Badge, BadgeColor};
use crate::components::code_block::CodeBlock;
use crate::components::footer::Footer;
use crate::components::step_card::StepCard;
use crate::SiteContext;

#[component]
pub fn Blog() -> impl IntoView {
    let ctx = expect_context::<SiteContext>();
    let margin_px = ctx.settings.with_value(|s| s.docs.scroll_margin_top_px);
    let social = ctx.settings.with_value(|s| s.social.clone());
    let sections = ctx.sections.get_value();

    let page = pages::documentation(&sections, &social, pages::current_year());
    let header = page.header;
    let sidebar = page.sidebar.clone();
    let footer = page.footer.clone();
    let section_views = page
        .sections
        .iter()
        .cloned()
        .map(|section| view! { <SectionView section=section margin_px=margin_px /> })
        .collect_view();

    view! {
        <div class="pt-24 max-w-7xl mx-auto px-6 flex flex-col md:flex-row gap-10">
            <aside class="md:sticky md:top-24 md:self-start md:w-64 shrink-0">
                <p class="px-4 mb-2 text-xs font-semibold uppercase tracking-widest text-[var(--color-text-muted)]">
                    {toc::TOC_TITLE}
                </p>
                <TocSidebar sidebar=sidebar />
            </aside>
            <main class="flex-1 min-w-0">
                <h1 class="text-4xl md:text-5xl font-bold text-white mb-10">{header}</h1>
                {section_views}
                <Footer footer=footer />
            </main>
        </div>
    }
}

#[component]
fn TocSidebar(sidebar: Sidebar) -> impl IntoView {
    match sidebar {
        Sidebar::Placeholder(text) => {
            view! { <p class="text-sm italic text-[var(--color-text-muted)]">{text}</p> }.into_any()
        }
        Sidebar::Entries(entries) => view! {
            <nav class="space-y-1">
                {entries
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <a
                                href=entry.href
                                class="block px-4 py-2 text-sm rounded-lg text-[var(--color-text-muted)] hover:bg-slate-900 hover:text-white transition-colors"
                            >
                                {entry.title}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        }
        .into_any(),
    }
}

#[component]
fn SectionView(section: Section, margin_px: u32) -> impl IntoView {
    let Section { id, title, blocks } = section;

    view! {
        <section id=id style=format!("scroll-margin-top: {}px", margin_px) class="mb-16">
            <h2 class="text-3xl font-semibold text-violet-200 mb-6">{title}</h2>
            {blocks.into_iter().map(block_view).collect_view()}
            <hr class="mt-4 border-slate-800" />
        </section>
    }
}

fn block_view(block: Block) -> AnyView {
    match block {
        Block::Heading { text } => {
            view! { <h3 class="text-2xl font-medium text-violet-300 mt-8 mb-3">{text}</h3> }.into_any()
        }
        Block::Paragraph { text } => {
            view! { <p class="leading-relaxed text-[#CCCCCC] my-3">{text}</p> }.into_any()
        }
        Block::Pills { labels } => view! {
            <div class="flex flex-wrap gap-2 my-4">
                {labels.into_iter().map(|label| view! { <Badge>{label}</Badge> }).collect_view()}
            </div>
        }
        .into_any(),
        Block::Items { items } => view! {
            <ul class="my-4 space-y-3">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li>
                                <p class="font-semibold text-white">{item.primary}</p>
                                {item
                                    .secondary
                                    .map(|s| view! { <p class="text-sm text-[var(--color-text-muted)]">{s}</p> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        Block::Step(step) => view! { <StepCard step=step /> }.into_any(),
        Block::Choice { title, choice, tone, note } => view! {
            <div class="my-4">
                <p class="flex items-center gap-3">
                    <span class="font-semibold text-white">{title}</span>
                    <Badge color=BadgeColor::from(tone)>{choice}</Badge>
                </p>
                <p class="text-sm text-[var(--color-text-muted)] mt-1">{note}</p>
            </div>
        }
        .into_any(),
        Block::Code { caption, text } => view! {
            <div>
                {caption.map(|c| view! { <p class="text-sm text-[var(--color-text-muted)] mt-4">{c}</p> })}
                <CodeBlock code=text />
            </div>
        }
        .into_any(),
        Block::Summary { text } => view! {
            <p class="mt-6 p-4 rounded-lg border border-[var(--color-success)]/40 text-[var(--color-text)]">
                <span class="font-semibold text-[var(--color-success)]">"Result: "</span>
                {text}
            </p>
        }
        .into_any(),
    }
}
