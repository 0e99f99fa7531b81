mod account_menu;
mod doc_view;
mod landing;
pub mod modal_overlay;
mod nav_drawer;
mod navbar;
mod not_found;
mod status_line;
mod toc_sidebar;

pub use account_menu::AccountMenu;
pub use doc_view::DocView;
pub use landing::LandingView;
pub use nav_drawer::NavDrawer;
pub use navbar::{NavBar, HOME_GLYPH, MENU_GLYPH};
pub use not_found::NotFoundView;
pub use status_line::{RoutePrompt, StatusLine};
pub use toc_sidebar::TocSidebar;
