pub mod account_menu;
pub mod badge;
pub mod code_block;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod step_card;
