//! Screen trait and associated types.
//!
//! Screens own their state, render themselves, and handle events by
//! returning a `ScreenAction` instead of mutating app state directly.
//! Context objects give read-only access to shared resources, including
//! the API client and the runtime that drives it.

use crate::api::ServiceApi;
use crate::config::Config;
use crate::widgets::Toast;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::runtime::Runtime;

/// Identifies each screen for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    MainMenu,
    MyServices,
    NewService,
}

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Context provided for handling events.
///
/// Carries the API client and the runtime screens use to drive it; network
/// actions run to completion via `runtime.block_on` while the event loop
/// waits.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Backend API client.
    pub api: &'a ServiceApi,
    /// Runtime for blocking on API calls.
    pub runtime: &'a Runtime,
    /// The citizen's account mail, scoping every backend call.
    pub mail: &'a str,
}

impl<'a> ScreenContext<'a> {
    /// Create a new screen context.
    pub fn new(config: &'a Config, api: &'a ServiceApi, runtime: &'a Runtime) -> Self {
        Self {
            config,
            api,
            runtime,
            mail: config.mail.as_deref().unwrap_or_default(),
        }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Default)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Navigate to a different screen.
    Navigate(ScreenId),
    /// Show a toast notification.
    ShowToast(Toast),
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event, returning what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, navigation keybindings are disabled so users can type freely.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the screen is entered (navigated to).
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
