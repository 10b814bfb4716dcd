//! Application runtime: owns the terminal, the screens, and the event loop.

use crate::api::ServiceApi;
use crate::config::Config;
use crate::screens::{
    MainMenuScreen, MyServicesScreen, NewServiceScreen, RenderContext, Screen, ScreenAction,
    ScreenContext, ScreenId,
};
use crate::styles;
use crate::tui::Tui;
use crate::widgets::ToastManager;
use anyhow::{Context, Result};
use crossterm::event::Event;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::error;

/// How long to wait for an event before redrawing (drives toast expiry).
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The application: screens, shared resources, and the main loop.
pub struct App {
    config: Config,
    api: ServiceApi,
    runtime: Runtime,
    tui: Tui,
    toasts: ToastManager,
    current_screen: ScreenId,
    main_menu: MainMenuScreen,
    my_services: MyServicesScreen,
    new_service: NewServiceScreen,
    should_quit: bool,
}

impl App {
    /// Build the app from a resolved configuration.
    pub fn new(config: Config) -> Result<Self> {
        styles::init_theme(config.theme.parse().unwrap_or_default());

        let runtime = Runtime::new().context("Failed to create async runtime")?;
        let api = ServiceApi::new(&config.base_url);
        let tui = Tui::new()?;

        Ok(Self {
            config,
            api,
            runtime,
            tui,
            toasts: ToastManager::new(),
            current_screen: ScreenId::MainMenu,
            main_menu: MainMenuScreen::new(),
            my_services: MyServicesScreen::new(),
            new_service: NewServiceScreen::new(),
            should_quit: false,
        })
    }

    /// Run the main loop until quit.
    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        let result = self.event_loop();
        self.tui.exit()?;
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_quit {
            self.draw()?;
            if let Some(event) = self.tui.poll_event(EVENT_POLL_INTERVAL)? {
                self.handle_event(event)?;
            }
            self.toasts.tick();
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let config = &self.config;
        let current_screen = self.current_screen;
        let main_menu = &mut self.main_menu;
        let my_services = &mut self.my_services;
        let new_service = &mut self.new_service;
        let toasts = &self.toasts;

        self.tui.terminal_mut().draw(|frame| {
            let ctx = RenderContext::new(config);
            let area = frame.area();
            let result = match current_screen {
                ScreenId::MainMenu => main_menu.render(frame, area, &ctx),
                ScreenId::MyServices => my_services.render(frame, area, &ctx),
                ScreenId::NewService => new_service.render(frame, area, &ctx),
            };
            if let Err(err) = result {
                error!("Render error: {:#}", err);
            }
            toasts.render(frame, area);
        })?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = {
            let ctx = ScreenContext::new(&self.config, &self.api, &self.runtime);
            match self.current_screen {
                ScreenId::MainMenu => self.main_menu.handle_event(event, &ctx)?,
                ScreenId::MyServices => self.my_services.handle_event(event, &ctx)?,
                ScreenId::NewService => self.new_service.handle_event(event, &ctx)?,
            }
        };
        self.apply_action(action)
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::ShowToast(toast) => self.toasts.push(toast),
            ScreenAction::Navigate(screen) => {
                self.current_screen = screen;
                let ctx = ScreenContext::new(&self.config, &self.api, &self.runtime);
                match screen {
                    ScreenId::MainMenu => self.main_menu.on_enter(&ctx)?,
                    ScreenId::MyServices => self.my_services.on_enter(&ctx)?,
                    ScreenId::NewService => self.new_service.on_enter(&ctx)?,
                }
            }
        }
        Ok(())
    }
}
