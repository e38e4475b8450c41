//! Mouse interaction system for ShipTalk.
//!
//! Render code registers a [`HitArea`] for every button and control; the
//! event loop hit-tests left clicks and passes the resulting
//! [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
