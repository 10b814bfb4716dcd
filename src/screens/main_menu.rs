//! Main menu screen: routes to the two service screens.

use crate::components::{Footer, Header};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::create_standard_layout;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};
use ratatui::Frame;

/// Menu entries in display order.
const MENU_ITEMS: &[(&str, &str)] = &[
    ("My Services", "Browse and delete your registered listings"),
    ("New Service", "Register a new commerce or professional listing"),
    ("Quit", "Exit the application"),
];

/// State owned by the main menu screen.
#[derive(Debug)]
pub struct MainMenuState {
    pub list_state: ListState,
}

impl Default for MainMenuState {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { list_state }
    }
}

/// Main menu screen controller.
#[derive(Debug, Default)]
pub struct MainMenuScreen {
    pub state: MainMenuState,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected(&self) -> usize {
        self.state.list_state.selected().unwrap_or(0)
    }

    fn move_up(&mut self) {
        let current = self.selected();
        let next = if current == 0 {
            MENU_ITEMS.len() - 1
        } else {
            current - 1
        };
        self.state.list_state.select(Some(next));
    }

    fn move_down(&mut self) {
        let next = (self.selected() + 1) % MENU_ITEMS.len();
        self.state.list_state.select(Some(next));
    }

    fn confirm(&self) -> ScreenAction {
        match self.selected() {
            0 => ScreenAction::Navigate(ScreenId::MyServices),
            1 => ScreenAction::Navigate(ScreenId::NewService),
            _ => ScreenAction::Quit,
        }
    }
}

impl Screen for MainMenuScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);

        Header::render(
            frame,
            header_area,
            " MiMuni ",
            "Municipal services for your neighborhood",
        )?;

        let items: Vec<ListItem> = MENU_ITEMS
            .iter()
            .map(|(name, description)| {
                ListItem::new(vec![
                    Line::styled(*name, t.text_style()),
                    Line::styled(format!("  {}", description), t.muted_style()),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(t.border_style())
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, content_area, &mut self.state.list_state);

        Footer::render(frame, footer_area, &ctx.config.keymap.footer_navigation())?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        let Some(action) = ctx.config.keymap.get_action(key.code, key.modifiers) else {
            return Ok(ScreenAction::None);
        };

        use crate::keymap::Action;
        match action {
            Action::MoveUp => self.move_up(),
            Action::MoveDown => self.move_down(),
            Action::GoToTop => self.state.list_state.select(Some(0)),
            Action::GoToEnd => self.state.list_state.select(Some(MENU_ITEMS.len() - 1)),
            Action::Confirm => return Ok(self.confirm()),
            Action::Quit | Action::Cancel => return Ok(ScreenAction::Quit),
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
