//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. The app routes events to the current screen and applies the
//! `ScreenAction` it returns:
//!
//! ```text
//! match current_screen {
//!     ScreenId::MainMenu => main_menu.handle_event(...),
//!     ScreenId::MyServices => my_services.handle_event(...),
//!     ScreenId::NewService => new_service.handle_event(...),
//! }
//! ```

pub mod main_menu;
pub mod my_services;
pub mod new_service;
pub mod screen_trait;

pub use main_menu::MainMenuScreen;
pub use my_services::MyServicesScreen;
pub use new_service::NewServiceScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
