//! New Service screen: register a new commerce or professional listing.
//!
//! A kind selector switches which fields are rendered and which endpoint
//! receives the submission; values typed into either kind's fields survive
//! switching. Photos are attached as file paths and only read at submit
//! time. Submission performs no field validation, matching the backend's
//! contract of accepting empty values.

use crate::api::{PhotoAttachment, ServiceForm, ServiceKind};
use crate::components::{Footer, Header};
use crate::keymap::Action;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, ScreenId};
use crate::styles::theme;
use crate::utils::{centered_popup, create_standard_layout, TextInput};
use crate::widgets::{Dialog, DialogVariant, TextInputWidget, TextInputWidgetExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use tracing::{error, info};

/// Maximum description length, enforced at input time.
const DESCRIPTION_MAX_LEN: usize = 1000;

/// Focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Address,
    Contact,
    Schedule,
    Category,
    Description,
}

const COMMERCE_FIELDS: &[FormField] = &[
    FormField::Kind,
    FormField::Address,
    FormField::Contact,
    FormField::Description,
];

const PROFESSIONAL_FIELDS: &[FormField] = &[
    FormField::Kind,
    FormField::Contact,
    FormField::Schedule,
    FormField::Category,
    FormField::Description,
];

/// Outcome of a submission, shown as a blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub message: String,
    pub is_error: bool,
}

/// State owned by the New Service screen.
#[derive(Debug)]
pub struct NewServiceState {
    pub kind: ServiceKind,
    pub address: TextInput,
    pub contact: TextInput,
    pub schedule: TextInput,
    pub category: TextInput,
    pub description: TextInput,
    pub photos: Vec<PhotoAttachment>,
    pub focused: FormField,
    /// Some while the photo path prompt is open.
    pub attach_prompt: Option<TextInput>,
    /// Some while the submit result dialog is open.
    pub outcome: Option<SubmitOutcome>,
}

impl Default for NewServiceState {
    fn default() -> Self {
        Self {
            kind: ServiceKind::Commerce,
            address: TextInput::new(),
            contact: TextInput::new(),
            schedule: TextInput::new(),
            category: TextInput::new(),
            description: TextInput::with_max_len(DESCRIPTION_MAX_LEN),
            photos: Vec::new(),
            focused: FormField::Kind,
            attach_prompt: None,
            outcome: None,
        }
    }
}

/// New Service screen controller.
#[derive(Debug, Default)]
pub struct NewServiceScreen {
    pub state: NewServiceState,
}

impl NewServiceScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields rendered for the current kind, in tab order.
    pub fn fields(&self) -> &'static [FormField] {
        match self.state.kind {
            ServiceKind::Commerce => COMMERCE_FIELDS,
            ServiceKind::Professional => PROFESSIONAL_FIELDS,
        }
    }

    /// Switch the listing kind. Entered values are kept for both kinds.
    pub fn set_kind(&mut self, kind: ServiceKind) {
        self.state.kind = kind;
        // Keep focus valid; fields not rendered for this kind fall back to Contact
        if !self.fields().contains(&self.state.focused) {
            self.state.focused = FormField::Contact;
        }
    }

    /// Append a photo attachment. Order is preserved; duplicates are allowed.
    pub fn attach_photo(&mut self, path: impl Into<std::path::PathBuf>) {
        self.state.photos.push(PhotoAttachment::new(path.into()));
    }

    /// Open the photo path prompt.
    pub fn open_attach_prompt(&mut self) {
        self.state.attach_prompt = Some(TextInput::new());
    }

    /// Close the prompt without attaching anything.
    pub fn cancel_attach_prompt(&mut self) {
        self.state.attach_prompt = None;
    }

    /// Close the prompt, attaching the entered path. An empty path is
    /// treated as a cancel.
    pub fn confirm_attach_prompt(&mut self) {
        if let Some(prompt) = self.state.attach_prompt.take() {
            let path = prompt.text_trimmed().to_string();
            if !path.is_empty() {
                self.attach_photo(path);
            }
        }
    }

    /// Build the submit payload from the current field values.
    ///
    /// The match on kind is exhaustive: a commerce form never carries
    /// schedule or category, and a professional form never carries address.
    pub fn build_form(&self) -> ServiceForm {
        match self.state.kind {
            ServiceKind::Commerce => ServiceForm::Commerce {
                address: self.state.address.text().to_string(),
                contact: self.state.contact.text().to_string(),
            },
            ServiceKind::Professional => ServiceForm::Professional {
                contact: self.state.contact.text().to_string(),
                schedule: self.state.schedule.text().to_string(),
                category: self.state.category.text().to_string(),
            },
        }
    }

    /// Submit the form to the kind-appropriate endpoint.
    ///
    /// No pre-submit validation; whatever is in the fields goes out.
    pub fn submit(&mut self, ctx: &ScreenContext) {
        let form = self.build_form();
        let description = self.state.description.text().to_string();

        let result = ctx.runtime.block_on(ctx.api.create_service(
            ctx.mail,
            &description,
            &form,
            &self.state.photos,
        ));

        self.state.outcome = Some(match result {
            Ok(()) => {
                info!("Submitted {} listing", form.kind().label());
                SubmitOutcome {
                    message: "Listing submitted. Approval can take up to 15 business days."
                        .to_string(),
                    is_error: false,
                }
            }
            Err(err) => {
                error!("Failed to submit {} listing: {:#}", form.kind().label(), err);
                SubmitOutcome {
                    message: format!("Could not submit the listing: {:#}", err),
                    is_error: true,
                }
            }
        });
    }

    /// Dismiss the submit result dialog.
    pub fn dismiss_outcome(&mut self) {
        self.state.outcome = None;
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.state.focused {
            FormField::Kind => None,
            FormField::Address => Some(&mut self.state.address),
            FormField::Contact => Some(&mut self.state.contact),
            FormField::Schedule => Some(&mut self.state.schedule),
            FormField::Category => Some(&mut self.state.category),
            FormField::Description => Some(&mut self.state.description),
        }
    }

    fn focus_step(&mut self, forward: bool) {
        let fields = self.fields();
        let current = fields
            .iter()
            .position(|f| *f == self.state.focused)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % fields.len()
        } else {
            (current + fields.len() - 1) % fields.len()
        };
        self.state.focused = fields[next];
    }

    fn field_title(field: FormField) -> &'static str {
        match field {
            FormField::Kind => "Type",
            FormField::Address => "Address",
            FormField::Contact => "Contact",
            FormField::Schedule => "Schedule",
            FormField::Category => "Category",
            FormField::Description => "Description",
        }
    }

    fn field_placeholder(field: FormField) -> &'static str {
        match field {
            FormField::Kind => "",
            FormField::Address => "Street and number...",
            FormField::Contact => "Phone or email...",
            FormField::Schedule => "e.g. Mon-Fri 9 to 18",
            FormField::Category => "e.g. Electrician",
            FormField::Description => "Describe the service you offer...",
        }
    }

    fn render_kind_selector(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let focused = self.state.focused == FormField::Kind;
        let pick = |kind: ServiceKind| {
            let text = format!(" {} ", kind.label());
            if self.state.kind == kind {
                Span::styled(text, t.highlight_style())
            } else {
                Span::styled(text, t.muted_style())
            }
        };

        let line = Line::from(vec![
            pick(ServiceKind::Commerce),
            Span::raw("  "),
            pick(ServiceKind::Professional),
        ]);

        let border_style = if focused {
            t.border_focused_style()
        } else {
            t.border_style()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Type ");
        let selector = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(selector, area);
    }

    fn render_photos(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let lines: Vec<Line> = if self.state.photos.is_empty() {
            vec![Line::styled("No photos attached", t.muted_style())]
        } else {
            self.state
                .photos
                .iter()
                .enumerate()
                .map(|(i, photo)| {
                    Line::from(vec![
                        Span::styled(format!("foto_{}.jpg", i), t.emphasis_style()),
                        Span::styled(format!("  {}", photo.path.display()), t.muted_style()),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style())
            .title(format!(" Photos ({}) ", self.state.photos.len()));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_attach_prompt(&self, frame: &mut Frame, area: Rect) {
        if let Some(prompt) = &self.state.attach_prompt {
            let popup = centered_popup(area, 64, 3);
            frame.render_widget(Clear, popup);
            let widget = TextInputWidget::new(prompt)
                .title("Photo path (Enter: attach, Esc: cancel)")
                .placeholder("/path/to/photo.jpg")
                .focused(true);
            frame.render_text_input_widget(widget, popup);
        }
    }

    fn footer_text(&self, ctx: &RenderContext) -> String {
        let keymap = &ctx.config.keymap;
        format!(
            "Tab: Next field | {}: Attach photo | {}: Submit | Esc: Back",
            keymap.get_key_display_for_action(Action::Attach),
            keymap.get_key_display_for_action(Action::Submit),
        )
    }
}

impl Screen for NewServiceScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let (header_area, content_area, footer_area) = create_standard_layout(area, 4, 2);

        Header::render(
            frame,
            header_area,
            " MiMuni - New Service ",
            "Register a new service listing",
        )?;

        // Kind selector, one row per text field, photos
        let field_count = self.fields().len() - 1; // minus the kind selector
        let mut constraints = vec![Constraint::Length(3)];
        constraints.extend(std::iter::repeat(Constraint::Length(3)).take(field_count));
        constraints.push(Constraint::Min(3));
        let rows = Layout::vertical(constraints).split(content_area);

        self.render_kind_selector(frame, rows[0]);

        let mut row = 1;
        for field in self.fields().iter().copied() {
            if field == FormField::Kind {
                continue;
            }
            let input = match field {
                FormField::Address => &self.state.address,
                FormField::Contact => &self.state.contact,
                FormField::Schedule => &self.state.schedule,
                FormField::Category => &self.state.category,
                FormField::Description => &self.state.description,
                FormField::Kind => unreachable!(),
            };
            let widget = TextInputWidget::new(input)
                .title(Self::field_title(field))
                .placeholder(Self::field_placeholder(field))
                .focused(self.state.focused == field && self.state.attach_prompt.is_none());
            frame.render_text_input_widget(widget, rows[row]);
            row += 1;
        }

        self.render_photos(frame, rows[row]);

        Footer::render(frame, footer_area, &self.footer_text(ctx))?;

        self.render_attach_prompt(frame, area);

        if let Some(outcome) = &self.state.outcome {
            let variant = if outcome.is_error {
                DialogVariant::Error
            } else {
                DialogVariant::Default
            };
            let dialog = Dialog::new("New listing", &outcome.message)
                .variant(variant)
                .footer("Enter: Close");
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

        let action = ctx.config.keymap.get_action(key.code, key.modifiers);

        // Result dialog takes over until dismissed
        if self.state.outcome.is_some() {
            if matches!(action, Some(Action::Confirm | Action::Cancel)) {
                self.dismiss_outcome();
            }
            return Ok(ScreenAction::None);
        }

        // Photo path prompt takes over while open
        if self.state.attach_prompt.is_some() {
            match action {
                Some(Action::Confirm) => self.confirm_attach_prompt(),
                Some(Action::Cancel) => self.cancel_attach_prompt(),
                Some(a) if TextInput::is_action_allowed_when_focused(&a) => {
                    if let Some(prompt) = self.state.attach_prompt.as_mut() {
                        prompt.handle_action(a);
                    }
                }
                _ => {
                    if let Some(prompt) = self.state.attach_prompt.as_mut() {
                        if !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                        {
                            prompt.handle_key(key.code);
                        }
                    }
                }
            }
            return Ok(ScreenAction::None);
        }

        let input_focused = self.state.focused != FormField::Kind;

        if let Some(action) = action {
            if !input_focused || TextInput::is_action_allowed_when_focused(&action) {
                match action {
                    Action::Attach => self.open_attach_prompt(),
                    Action::Submit => self.submit(ctx),
                    Action::NextTab | Action::Confirm => self.focus_step(true),
                    Action::PrevTab => self.focus_step(false),
                    Action::Cancel => return Ok(ScreenAction::Navigate(ScreenId::MainMenu)),
                    Action::Quit if !input_focused => {
                        return Ok(ScreenAction::Navigate(ScreenId::MainMenu))
                    }
                    Action::MoveLeft if self.state.focused == FormField::Kind => {
                        self.set_kind(ServiceKind::Commerce);
                    }
                    Action::MoveRight if self.state.focused == FormField::Kind => {
                        self.set_kind(ServiceKind::Professional);
                    }
                    Action::MoveUp if !input_focused => {}
                    Action::MoveDown if !input_focused => self.focus_step(true),
                    other => {
                        if let Some(input) = self.focused_input_mut() {
                            input.handle_action(other);
                        }
                    }
                }
                return Ok(ScreenAction::None);
            }
        }

        // Raw typing into the focused field
        if let Some(input) = self.focused_input_mut() {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                input.handle_key(key.code);
            }
        }

        Ok(ScreenAction::None)
    }

    fn is_input_focused(&self) -> bool {
        self.state.attach_prompt.is_some()
            || (self.state.outcome.is_none() && self.state.focused != FormField::Kind)
    }
}
