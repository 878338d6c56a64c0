//! Headless TravelLight web client.
//!
//! Each page is a state holder with event handlers:
//! - `inquiry`: the 1:1 inquiry form and its submission flow.
//! - `careers`: job posting dialogs, applications and talent pool sign-up.
//! - `navbar`: top navigation menus.
//!
//! Collaborators sit behind traits so pages can be driven by the CLI or by tests:
//! `auth::AuthProvider`, `navigation::Navigator`, and the services in `api`.

pub mod api;
pub mod auth;
pub mod careers;
pub mod inquiry;
pub mod messages;
pub mod navbar;
pub mod navigation;
pub mod notification;

#[cfg(test)]
pub(crate) mod testing;
