use crate::config::Config;
use crate::export::{export_quotation, ExportFormat};
use crate::model::{
    BedroomItem, BhkType, ClientField, LivingRoomItem, RoomField, WorkCategory, WorkField,
};
use crate::state::{reduce, Action, QuoteForm};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Navigate,
    Editing,
}

/// One focusable line of the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormRow {
    Client(ClientField),
    Bhk,
    ActiveBedroom,
    BedroomItem(BedroomItem),
    BedroomField(RoomField),
    LivingItem(LivingRoomItem),
    LivingField(RoomField),
    Work(WorkCategory, WorkField),
}

impl FormRow {
    /// Rows in display order.
    #[must_use]
    pub fn all() -> Vec<FormRow> {
        let mut rows: Vec<FormRow> = ClientField::ALL
            .iter()
            .map(|&f| FormRow::Client(f))
            .collect();
        rows.push(FormRow::Bhk);
        rows.push(FormRow::ActiveBedroom);
        rows.extend(BedroomItem::ALL.iter().map(|&i| FormRow::BedroomItem(i)));
        rows.push(FormRow::BedroomField(RoomField::Area));
        rows.push(FormRow::BedroomField(RoomField::Rate));
        rows.extend(LivingRoomItem::ALL.iter().map(|&i| FormRow::LivingItem(i)));
        rows.push(FormRow::LivingField(RoomField::Area));
        rows.push(FormRow::LivingField(RoomField::Rate));
        for category in WorkCategory::ALL {
            rows.push(FormRow::Work(category, WorkField::Quantity));
            rows.push(FormRow::Work(category, WorkField::Rate));
        }
        rows
    }

    #[must_use]
    pub fn section(self) -> &'static str {
        match self {
            FormRow::Client(_) => "Client Details",
            FormRow::Bhk
            | FormRow::ActiveBedroom
            | FormRow::BedroomItem(_)
            | FormRow::BedroomField(_) => "Bedrooms",
            FormRow::LivingItem(_) | FormRow::LivingField(_) => "Living Room",
            FormRow::Work(category, _) => category.name(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormRow::Client(field) => field.label(),
            FormRow::Bhk => "BHK Type",
            FormRow::ActiveBedroom => "Editing Bedroom",
            FormRow::BedroomItem(item) => item.label(),
            FormRow::LivingItem(item) => item.label(),
            FormRow::BedroomField(RoomField::Area) => "Bedroom Area (sqft)",
            FormRow::LivingField(RoomField::Area) => "Living Room Area (sqft)",
            FormRow::BedroomField(RoomField::Rate) | FormRow::LivingField(RoomField::Rate) => {
                "Rate per sqft"
            }
            FormRow::Work(category, WorkField::Quantity) => category.quantity_label(),
            FormRow::Work(category, WorkField::Rate) => category.rate_label(),
        }
    }

    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormRow::Client(_)
                | FormRow::BedroomField(_)
                | FormRow::LivingField(_)
                | FormRow::Work(..)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub form: QuoteForm,
    pub config: Config,
    pub out_dir: PathBuf,
    pub rows: Vec<FormRow>,
    pub selected: usize,
    pub mode: Mode,
    pub input: String,
    pub cursor_position: usize,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(form: QuoteForm, config: Config, out_dir: PathBuf) -> Self {
        Self {
            form,
            config,
            out_dir,
            rows: FormRow::all(),
            selected: 0,
            mode: Mode::Navigate,
            input: String::new(),
            cursor_position: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        super::form::draw_form(frame, self);
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code, key.modifiers);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Status messages last until the next key
        self.status = None;
        match self.mode {
            Mode::Navigate => self.handle_navigate_keys(code, modifiers),
            Mode::Editing => self.handle_editing_keys(code),
        }
    }

    #[must_use]
    pub fn selected_row(&self) -> FormRow {
        self.rows[self.selected]
    }

    fn handle_navigate_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('e') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.export(ExportFormat::Pdf);
            }
            KeyCode::F(5) => self.export(ExportFormat::Pdf),
            KeyCode::F(6) => self.export(ExportFormat::Json),
            KeyCode::F(7) => self.export(ExportFormat::Csv),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_row(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.next_row(),
            KeyCode::Left | KeyCode::Char('h') => self.step(false),
            KeyCode::Right | KeyCode::Char('l') => self.step(true),
            KeyCode::Char(c @ '1'..='3') if self.selected_row() == FormRow::Bhk => {
                if let Some(n) = c.to_digit(10) {
                    self.set_bhk(n as usize);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => {}
        }
    }

    fn handle_editing_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.finish_editing(),
            KeyCode::Esc => self.cancel_editing(),
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let at = self.byte_offset(self.cursor_position - 1);
                    self.input.remove(at);
                    self.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor_position);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.chars().count() {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            KeyCode::Char(c) => {
                let at = self.byte_offset(self.cursor_position);
                self.input.insert(at, c);
                self.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    fn previous_row(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn next_row(&mut self) {
        if self.selected < self.rows.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Left/right on the BHK and bedroom selector rows.
    fn step(&mut self, forward: bool) {
        match self.selected_row() {
            FormRow::Bhk => {
                let bhk = self.form.quotation.bhk_type();
                let next = if forward { bhk.next() } else { bhk.previous() };
                self.dispatch(Action::SetBhkType(next));
            }
            FormRow::ActiveBedroom => {
                let active = self.form.active_bedroom;
                let target = if forward {
                    active + 1
                } else {
                    active.saturating_sub(1)
                };
                if target < self.form.quotation.bedrooms.len() {
                    self.dispatch(Action::SelectBedroom(target));
                }
            }
            _ => {}
        }
    }

    fn set_bhk(&mut self, n: usize) {
        match BhkType::try_from(n) {
            Ok(bhk) => self.dispatch(Action::SetBhkType(bhk)),
            Err(e) => self.status = Some(Status::Error(e.to_string())),
        }
    }

    fn activate(&mut self) {
        let row = self.selected_row();
        let index = self.form.active_bedroom;
        match row {
            FormRow::BedroomItem(item) => self.dispatch(Action::ToggleBedroomItem { index, item }),
            FormRow::LivingItem(item) => self.dispatch(Action::ToggleLivingRoomItem(item)),
            FormRow::Bhk | FormRow::ActiveBedroom => self.step(true),
            _ if row.is_text() => self.start_editing(),
            _ => {}
        }
    }

    /// Current raw value of a text row.
    #[must_use]
    pub fn row_value(&self, row: FormRow) -> String {
        let quotation = &self.form.quotation;
        let bedroom = quotation.bedrooms.get(self.form.active_bedroom);
        match row {
            FormRow::Client(field) => quotation.client.field(field).to_string(),
            FormRow::Bhk => quotation.bhk_type().label().to_string(),
            FormRow::ActiveBedroom => format!(
                "Bedroom {} of {}",
                self.form.active_bedroom + 1,
                quotation.bedrooms.len()
            ),
            FormRow::BedroomItem(item) => {
                checkbox(bedroom.is_some_and(|b| b.items.get(item))).to_string()
            }
            FormRow::BedroomField(field) => bedroom
                .map(|b| b.field(field).to_string())
                .unwrap_or_default(),
            FormRow::LivingItem(item) => {
                checkbox(quotation.living_room.items.get(item)).to_string()
            }
            FormRow::LivingField(field) => quotation.living_room.field(field).to_string(),
            FormRow::Work(category, field) => {
                quotation.work_item(category).field(field).to_string()
            }
        }
    }

    pub fn start_editing(&mut self) {
        self.input = self.row_value(self.selected_row());
        self.cursor_position = self.input.chars().count();
        self.mode = Mode::Editing;
    }

    pub fn cancel_editing(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
        self.mode = Mode::Navigate;
    }

    pub fn finish_editing(&mut self) {
        let value = std::mem::take(&mut self.input);
        let action = match self.selected_row() {
            FormRow::Client(field) => Some(Action::SetClientField { field, value }),
            FormRow::BedroomField(field) => Some(Action::UpdateBedroomField {
                index: self.form.active_bedroom,
                field,
                value,
            }),
            FormRow::LivingField(field) => Some(Action::UpdateLivingRoomField { field, value }),
            FormRow::Work(category, field) => Some(Action::UpdateCategoryField {
                category,
                field,
                value,
            }),
            _ => None,
        };
        if let Some(action) = action {
            self.dispatch(action);
        }
        self.cursor_position = 0;
        self.mode = Mode::Navigate;
    }

    /// Run `action` through the reducer; the form is only replaced on success.
    pub fn dispatch(&mut self, action: Action) {
        match reduce(&self.form, action) {
            Ok(next) => self.form = next,
            Err(e) => {
                tracing::warn!(error = %e, "rejected form update");
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        if let Err(e) = self.form.quotation.ready_for_export() {
            self.status = Some(Status::Error(e.to_string()));
            return;
        }

        let snapshot = self
            .form
            .quotation
            .snapshot(chrono::Local::now().date_naive());
        let millis = chrono::Utc::now().timestamp_millis();

        self.status = Some(
            match export_quotation(&snapshot, &self.config, format, &self.out_dir, millis) {
                Ok(path) => Status::Info(format!("Saved {}", path.display())),
                Err(e) => {
                    tracing::error!(error = %e, "export failed");
                    Status::Error(format!(
                        "{} generation failed: {e}",
                        format.extension().to_uppercase()
                    ))
                }
            },
        );
    }
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
