//! Main render/view function (View in TEA pattern)

use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use setup_blog_app::doc_view_state::DocViewState;
use setup_blog_app::pages::{self, DocumentationPage, Page};
use setup_blog_app::AppState;

use crate::layout;
use crate::theme::palette;
use crate::widgets;

/// Render the complete UI.
///
/// Takes `&mut AppState` because the documentation column reports its
/// layout (line count, viewport, heading rows) back into `doc_view`.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.header_rows());
    let nav = state.nav_bar();

    frame.render_widget(
        widgets::NavBar::new(&nav, &state.settings.site.name).account_open(state.account.is_some()),
        areas.header,
    );

    let page = pages::compose(
        &state.route,
        &state.sections,
        &state.settings.social,
        pages::current_year(),
    );
    match &page {
        Page::Landing(landing) => frame.render_widget(widgets::LandingView::new(landing), areas.body),
        Page::Documentation(doc) => {
            render_documentation(frame, areas.body, doc, &mut state.doc_view)
        }
        Page::NotFound(not_found) => {
            frame.render_widget(widgets::NotFoundView::new(not_found), areas.body)
        }
    }

    match &state.route_prompt {
        Some(input) => frame.render_widget(widgets::RoutePrompt::new(input), areas.status),
        None => frame.render_widget(
            widgets::StatusLine::new(page.view(), state.viewport.is_compact())
                .auth_status(state.auth_status.as_ref()),
            areas.status,
        ),
    }

    // Overlays last
    if let Some(items) = nav.overlay_items() {
        frame.render_widget(
            widgets::NavDrawer::new(items, state.nav_menu.highlighted()),
            area,
        );
    }

    if let Some(account) = &state.account {
        frame.render_widget(
            widgets::AccountMenu::new(account).show_registration(state.settings.site.show_registration),
            area,
        );
    }
}

fn render_documentation(
    frame: &mut Frame,
    body: Rect,
    page: &DocumentationPage<'_>,
    doc_view: &mut DocViewState,
) {
    let areas = layout::documentation(body);

    // reading column first so the sidebar sees the fresh heading rows
    frame.render_stateful_widget(widgets::DocView::new(page), areas.main, doc_view);

    frame.render_widget(
        widgets::TocSidebar::new(&page.sidebar)
            .selected(doc_view.toc_selected)
            .current(doc_view.current_section()),
        areas.sidebar,
    );
}
