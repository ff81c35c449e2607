//! Presentational components. All state lives in the app layer; these render
//! props and forward events back up.

pub mod click_area;
pub mod leaderboard_modal;
pub mod modal;
pub mod name_modal;
pub mod skins_modal;
pub mod upgrade_panel;
