//! My Services screen: the citizen's registered listings.
//!
//! Shows either the professional or the commerce list (never both), loads
//! both lists when the screen is entered, and deletes a listing through an
//! explicit confirm step. A delete always re-fetches the affected list so
//! the view reflects what the backend actually holds.

use crate::api::{CommerceListing, ProfessionalListing, ServiceKind};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::create_standard_layout;
use crate::widgets::{Dialog, DialogVariant, Toast};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, ListState, Padding, Paragraph, Scrollbar,
    ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;
use tracing::{error, info};

/// Which listing collection is currently shown. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Professional,
    Commerce,
}

impl ViewMode {
    pub fn kind(&self) -> ServiceKind {
        match self {
            ViewMode::Professional => ServiceKind::Professional,
            ViewMode::Commerce => ServiceKind::Commerce,
        }
    }
}

/// A delete waiting for the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub kind: ServiceKind,
    pub id: i64,
    /// Short label shown in the confirmation dialog.
    pub label: String,
}

/// State owned by the My Services screen.
#[derive(Debug, Default)]
pub struct MyServicesState {
    pub view_mode: ViewMode,
    pub professional: Vec<ProfessionalListing>,
    pub commerce: Vec<CommerceListing>,
    pub list_state: ListState,
    pub scrollbar_state: ScrollbarState,
    pub pending_delete: Option<PendingDelete>,
}

/// My Services screen controller.
#[derive(Debug, Default)]
pub struct MyServicesScreen {
    pub state: MyServicesState,
}

impl MyServicesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows in the visible list.
    pub fn visible_len(&self) -> usize {
        match self.state.view_mode {
            ViewMode::Professional => self.state.professional.len(),
            ViewMode::Commerce => self.state.commerce.len(),
        }
    }

    /// Whether the professional list is the one on screen.
    pub fn is_professional_visible(&self) -> bool {
        self.state.view_mode == ViewMode::Professional
    }

    /// Whether the commerce list is the one on screen.
    pub fn is_commerce_visible(&self) -> bool {
        self.state.view_mode == ViewMode::Commerce
    }

    /// Switch the visible list. Idempotent; entered state elsewhere is kept.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.state.view_mode != mode {
            self.state.view_mode = mode;
            self.reset_selection();
        }
    }

    fn reset_selection(&mut self) {
        let select = if self.visible_len() == 0 { None } else { Some(0) };
        self.state.list_state.select(select);
        self.state.scrollbar_state = self.state.scrollbar_state.position(0);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        match self.state.list_state.selected() {
            None if len > 0 => self.state.list_state.select(Some(0)),
            Some(_) if len == 0 => self.state.list_state.select(None),
            Some(i) if i >= len => self.state.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let current = self.state.list_state.selected().unwrap_or(0) as i64;
        let next = (current + delta).clamp(0, len as i64 - 1) as usize;
        self.state.list_state.select(Some(next));
        self.state.scrollbar_state = self.state.scrollbar_state.position(next);
    }

    /// Load the professional list, replacing the collection on success.
    /// Failures are logged and swallowed; the previous collection stays.
    pub fn load_professional(&mut self, ctx: &ScreenContext) {
        match ctx
            .runtime
            .block_on(ctx.api.my_professional_services(ctx.mail))
        {
            Ok(listings) => {
                info!("Loaded {} professional listing(s)", listings.len());
                self.state.professional = listings;
            }
            Err(err) => {
                error!("Failed to load professional listings: {:#}", err);
            }
        }
        self.clamp_selection();
    }

    /// Load the commerce list, replacing the collection on success.
    /// Failures are logged and swallowed; the previous collection stays.
    pub fn load_commerce(&mut self, ctx: &ScreenContext) {
        match ctx.runtime.block_on(ctx.api.my_commerce_services(ctx.mail)) {
            Ok(listings) => {
                info!("Loaded {} commerce listing(s)", listings.len());
                self.state.commerce = listings;
            }
            Err(err) => {
                error!("Failed to load commerce listings: {:#}", err);
            }
        }
        self.clamp_selection();
    }

    fn refresh_visible(&mut self, ctx: &ScreenContext) {
        match self.state.view_mode {
            ViewMode::Professional => self.load_professional(ctx),
            ViewMode::Commerce => self.load_commerce(ctx),
        }
    }

    /// Start the delete protocol for the selected row. No-op on an empty list.
    pub fn request_delete_selected(&mut self) {
        let Some(index) = self.state.list_state.selected() else {
            return;
        };
        let pending = match self.state.view_mode {
            ViewMode::Professional => self.state.professional.get(index).map(|listing| {
                PendingDelete {
                    kind: ServiceKind::Professional,
                    id: listing.id,
                    label: format!("{} {}", listing.first_name, listing.last_name),
                }
            }),
            ViewMode::Commerce => self.state.commerce.get(index).map(|listing| PendingDelete {
                kind: ServiceKind::Commerce,
                id: listing.id,
                label: listing.address.clone(),
            }),
        };
        self.state.pending_delete = pending;
    }

    /// Execute the pending delete, then re-fetch the affected list
    /// regardless of the outcome.
    pub fn confirm_pending_delete(&mut self, ctx: &ScreenContext) -> ScreenAction {
        let Some(pending) = self.state.pending_delete.take() else {
            return ScreenAction::None;
        };

        let result = ctx
            .runtime
            .block_on(ctx.api.delete_service(pending.kind, ctx.mail, pending.id));

        let toast = match result {
            Ok(()) => {
                info!("Deleted {} listing {}", pending.kind.label(), pending.id);
                Toast::success(format!("{} listing deleted", pending.kind.label()))
            }
            Err(err) => {
                error!(
                    "Failed to delete {} listing {}: {:#}",
                    pending.kind.label(),
                    pending.id,
                    err
                );
                Toast::error(format!("Could not delete {} listing", pending.kind.label()))
            }
        };

        // The view must reflect the backend either way
        match pending.kind {
            ServiceKind::Professional => self.load_professional(ctx),
            ServiceKind::Commerce => self.load_commerce(ctx),
        }

        ScreenAction::ShowToast(toast)
    }

    /// Drop the pending delete. Issues no network traffic.
    pub fn decline_pending_delete(&mut self) {
        self.state.pending_delete = None;
    }

    fn render_view_tabs(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let tab = |label: &str, count: usize, active: bool| {
            let text = format!(" {} ({}) ", label, count);
            if active {
                Span::styled(text, t.highlight_style())
            } else {
                Span::styled(text, t.muted_style())
            }
        };

        let line = Line::from(vec![
            tab(
                "Professional",
                self.state.professional.len(),
                self.is_professional_visible(),
            ),
            Span::raw("  "),
            tab(
                "Commerce",
                self.state.commerce.len(),
                self.is_commerce_visible(),
            ),
        ]);

        let tabs = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(t.border_style()),
        );
        frame.render_widget(tabs, area);
    }

    fn listing_items(&self) -> Vec<ListItem<'static>> {
        let t = theme();
        match self.state.view_mode {
            ViewMode::Professional => self
                .state
                .professional
                .iter()
                .map(|listing| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(
                                format!("{} {}", listing.first_name, listing.last_name),
                                t.text_style(),
                            ),
                            Span::raw("  "),
                            Span::styled(listing.status.clone(), t.status_style(&listing.status)),
                        ]),
                        Line::styled(
                            format!(
                                "  {} | {} | {}",
                                listing.category, listing.schedule, listing.contact
                            ),
                            t.muted_style(),
                        ),
                        Line::styled(format!("  {}", listing.description), t.muted_style()),
                    ])
                })
                .collect(),
            ViewMode::Commerce => self
                .state
                .commerce
                .iter()
                .map(|listing| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(listing.address.clone(), t.text_style()),
                            Span::raw("  "),
                            Span::styled(listing.status.clone(), t.status_style(&listing.status)),
                        ]),
                        Line::styled(format!("  {}", listing.contact), t.muted_style()),
                        Line::styled(format!("  {}", listing.description), t.muted_style()),
                    ])
                })
                .collect(),
        }
    }

    fn footer_text(&self, ctx: &RenderContext) -> String {
        let keymap = &ctx.config.keymap;
        format!(
            "{}: Navigate | ←/→: View | {}: Delete | {}: Refresh | {}: Back",
            keymap.navigation_display(),
            keymap.get_key_display_for_action(Action::Delete),
            keymap.get_key_display_for_action(Action::Refresh),
            keymap.quit_display(),
        )
    }
}

impl Screen for MyServicesScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);

        Header::render(
            frame,
            header_area,
            " MiMuni - My Services ",
            "Your registered service listings",
        )?;

        let chunks =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(content_area);
        self.render_view_tabs(frame, chunks[0]);

        let list_area = chunks[1];
        let len = self.visible_len();

        if len == 0 {
            let empty = Paragraph::new("No listings in this view")
                .style(t.muted_style())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(t.border_style()),
                );
            frame.render_widget(empty, list_area);
        } else {
            let list = List::new(self.listing_items())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(t.border_style())
                        .padding(Padding::horizontal(1)),
                )
                .highlight_style(t.highlight_style())
                .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
            frame.render_stateful_widget(list, list_area, &mut self.state.list_state);

            self.state.scrollbar_state = self.state.scrollbar_state.content_length(len);
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            frame.render_stateful_widget(scrollbar, list_area, &mut self.state.scrollbar_state);
        }

        Footer::render(frame, footer_area, &self.footer_text(ctx))?;

        if let Some(pending) = &self.state.pending_delete {
            let content = format!(
                "Delete the {} listing \"{}\"?\n\nThis cannot be undone.",
                pending.kind.label().to_lowercase(),
                pending.label
            );
            let dialog = Dialog::new("Delete listing", &content)
                .variant(DialogVariant::Warning)
                .footer("Y: Delete | N: Keep");
            frame.render_widget(dialog, area);
        }

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

        // Confirmation dialog takes over while a delete is pending
        if self.state.pending_delete.is_some() {
            return Ok(match action {
                Action::Yes | Action::Confirm => self.confirm_pending_delete(ctx),
                Action::No | Action::Cancel | Action::Quit => {
                    self.decline_pending_delete();
                    ScreenAction::None
                }
                _ => ScreenAction::None,
            });
        }

        match action {
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-10),
            Action::PageDown => self.move_selection(10),
            Action::GoToTop => {
                if self.visible_len() > 0 {
                    self.state.list_state.select(Some(0));
                }
            }
            Action::GoToEnd => {
                let len = self.visible_len();
                if len > 0 {
                    self.state.list_state.select(Some(len - 1));
                }
            }
            Action::MoveLeft | Action::PrevTab => self.set_view_mode(ViewMode::Professional),
            Action::MoveRight | Action::NextTab => self.set_view_mode(ViewMode::Commerce),
            Action::Delete => self.request_delete_selected(),
            Action::Refresh => self.refresh_visible(ctx),
            Action::Create => return Ok(ScreenAction::Navigate(ScreenId::NewService)),
            Action::Cancel | Action::Quit => {
                return Ok(ScreenAction::Navigate(ScreenId::MainMenu))
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn on_enter(&mut self, ctx: &ScreenContext) -> Result<()> {
        // Both lists load on activation so switching views is instant,
        // regardless of which view is shown first
        self.state.view_mode = ViewMode::Professional;
        self.load_professional(ctx);
        self.load_commerce(ctx);
        self.reset_selection();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn professional(id: i64) -> ProfessionalListing {
        ProfessionalListing {
            id,
            first_name: "Juan".to_string(),
            last_name: "Perez".to_string(),
            contact: "11-4444-5555".to_string(),
            schedule: "9 a 18".to_string(),
            category: "Electrician".to_string(),
            description: "Home installs".to_string(),
            status: "HABILITADO".to_string(),
        }
    }

    fn commerce(id: i64) -> CommerceListing {
        CommerceListing {
            id,
            address: "Av. Mitre 1200".to_string(),
            contact: "info@shop.test".to_string(),
            description: "Bakery".to_string(),
            status: "PENDIENTE".to_string(),
        }
    }

    #[test]
    fn test_exactly_one_view_visible() {
        let mut screen = MyServicesScreen::new();
        assert!(screen.is_professional_visible());
        assert!(!screen.is_commerce_visible());

        screen.set_view_mode(ViewMode::Commerce);
        assert!(screen.is_commerce_visible());
        assert!(!screen.is_professional_visible());

        // Idempotent
        screen.set_view_mode(ViewMode::Commerce);
        assert!(screen.is_commerce_visible());
    }

    #[test]
    fn test_view_switch_keeps_collections() {
        let mut screen = MyServicesScreen::new();
        screen.state.professional = vec![professional(1), professional(2)];
        screen.state.commerce = vec![commerce(3)];

        screen.set_view_mode(ViewMode::Commerce);
        assert_eq!(screen.state.professional.len(), 2);
        assert_eq!(screen.state.commerce.len(), 1);
        assert_eq!(screen.visible_len(), 1);
    }

    #[test]
    fn test_request_delete_on_empty_list_is_noop() {
        let mut screen = MyServicesScreen::new();
        screen.state.list_state.select(Some(0));
        screen.request_delete_selected();
        assert!(screen.state.pending_delete.is_none());
    }

    #[test]
    fn test_request_delete_captures_selected_row() {
        let mut screen = MyServicesScreen::new();
        screen.state.professional = vec![professional(1), professional(2)];
        screen.state.list_state.select(Some(1));
        screen.request_delete_selected();

        let pending = screen.state.pending_delete.as_ref().unwrap();
        assert_eq!(pending.id, 2);
        assert_eq!(pending.kind, ServiceKind::Professional);
    }

    #[test]
    fn test_decline_clears_pending() {
        let mut screen = MyServicesScreen::new();
        screen.state.professional = vec![professional(1)];
        screen.state.list_state.select(Some(0));
        screen.request_delete_selected();
        assert!(screen.state.pending_delete.is_some());

        screen.decline_pending_delete();
        assert!(screen.state.pending_delete.is_none());
    }

    #[test]
    fn test_selection_clamps_to_list() {
        let mut screen = MyServicesScreen::new();
        screen.state.professional = vec![professional(1), professional(2)];
        screen.state.list_state.select(Some(0));
        screen.move_selection(10);
        assert_eq!(screen.state.list_state.selected(), Some(1));
        screen.move_selection(-10);
        assert_eq!(screen.state.list_state.selected(), Some(0));
    }
}
