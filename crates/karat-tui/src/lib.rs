// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use karat_app::{
    AppCommand, AppEvent, AppMode, AppState, Branch, BranchStatus, DashboardCounts, DeleteKind,
    DeleteTarget, FormKind, FormPayload, FormTarget, MetalType, Product, ProductCategory,
    ProductCollection, ProductStatus, Purity, RequestId, RequestKind, RequestStatus, Review,
    ReviewId, ReviewStatus, Role, ServiceRequest, TabKind, User, UserStatus,
};
use karat_store::filter::{
    BranchFilter, ProductFilter, RequestFilter, ReviewFilter, RoleFilter, UserFilter,
};
use karat_store::validation::{
    format_date, format_rupees, format_weight_grams, parse_price_input, parse_weight_input,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const SELECTION_MARK: &str = "▸";
const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";

/// Store access for the console. One implementation owns the per-screen
/// stores; tests substitute a fake.
pub trait AdminRuntime {
    fn dashboard_counts(&mut self) -> DashboardCounts;
    fn list_branches(&mut self) -> Vec<Branch>;
    fn list_products(&mut self) -> Vec<Product>;
    fn list_requests(&mut self) -> Vec<ServiceRequest>;
    fn list_reviews(&mut self) -> Vec<Review>;
    fn list_users(&mut self) -> Vec<User>;
    fn list_roles(&mut self) -> Vec<Role>;
    fn apply_form(&mut self, payload: &FormPayload, target: FormTarget) -> Result<()>;
    fn delete(&mut self, target: &DeleteTarget) -> Result<bool>;
    fn set_request_status(&mut self, id: RequestId, status: RequestStatus) -> Result<bool>;
    fn set_review_status(&mut self, id: ReviewId, status: ReviewStatus) -> Result<bool>;
    /// Fire-and-forget stub; nothing is delivered anywhere.
    fn send_customer_email(&mut self, id: RequestId, message: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TableSelection {
    branches: usize,
    products: usize,
    requests: usize,
    reviews: usize,
    users: usize,
    roles: usize,
}

impl TableSelection {
    fn get(&self, tab: TabKind) -> usize {
        match tab {
            TabKind::Branches => self.branches,
            TabKind::Products => self.products,
            TabKind::Requests => self.requests,
            TabKind::Reviews => self.reviews,
            TabKind::Users => self.users,
            TabKind::Roles => self.roles,
            TabKind::Dashboard | TabKind::Showcase => 0,
        }
    }

    fn set(&mut self, tab: TabKind, value: usize) {
        match tab {
            TabKind::Branches => self.branches = value,
            TabKind::Products => self.products = value,
            TabKind::Requests => self.requests = value,
            TabKind::Reviews => self.reviews = value,
            TabKind::Users => self.users = value,
            TabKind::Roles => self.roles = value,
            TabKind::Dashboard | TabKind::Showcase => {}
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Filters {
    branch: BranchFilter,
    product: ProductFilter,
    request: RequestFilter,
    review: ReviewFilter,
    user: UserFilter,
    role: RoleFilter,
}

impl Filters {
    fn search_mut(&mut self, tab: TabKind) -> Option<&mut String> {
        match tab {
            TabKind::Branches => Some(&mut self.branch.search),
            TabKind::Products => Some(&mut self.product.search),
            TabKind::Requests => Some(&mut self.request.search),
            TabKind::Reviews => Some(&mut self.review.search),
            TabKind::Users => Some(&mut self.user.search),
            TabKind::Roles => Some(&mut self.role.search),
            TabKind::Dashboard | TabKind::Showcase => None,
        }
    }

    fn search(&self, tab: TabKind) -> &str {
        match tab {
            TabKind::Branches => &self.branch.search,
            TabKind::Products => &self.product.search,
            TabKind::Requests => &self.request.search,
            TabKind::Reviews => &self.review.search,
            TabKind::Users => &self.user.search,
            TabKind::Roles => &self.role.search,
            TabKind::Dashboard | TabKind::Showcase => "",
        }
    }

    fn clear_for(&mut self, tab: TabKind) {
        match tab {
            TabKind::Branches => self.branch = BranchFilter::default(),
            TabKind::Products => self.product = ProductFilter::default(),
            TabKind::Requests => self.request = RequestFilter::default(),
            TabKind::Reviews => self.review = ReviewFilter::default(),
            TabKind::Users => self.user = UserFilter::default(),
            TabKind::Roles => self.role = RoleFilter::default(),
            TabKind::Dashboard | TabKind::Showcase => {}
        }
    }

    fn is_restrictive(&self, tab: TabKind) -> bool {
        match tab {
            TabKind::Branches => self.branch.is_restrictive(),
            TabKind::Products => self.product.is_restrictive(),
            TabKind::Requests => self.request.is_restrictive(),
            TabKind::Reviews => self.review.is_restrictive(),
            TabKind::Users => self.user.is_restrictive(),
            TabKind::Roles => self.role.is_restrictive(),
            TabKind::Dashboard | TabKind::Showcase => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DetailsFocus {
    #[default]
    Actions,
    Notes,
    Response,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct DetailsUiState {
    request_id: Option<RequestId>,
    notes: String,
    response: String,
    focus: DetailsFocus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormUiState {
    kind: FormKind,
    field_index: usize,
    weight_text: String,
    price_text: String,
    permissions_text: String,
}

impl FormUiState {
    fn for_payload(payload: &FormPayload) -> Self {
        let (weight_text, price_text, permissions_text) = match payload {
            FormPayload::Product(product) => {
                let weight = if product.weight_grams > 0.0 {
                    product.weight_grams.to_string()
                } else {
                    String::new()
                };
                let price = if product.price_rupees > 0 {
                    product.price_rupees.to_string()
                } else {
                    String::new()
                };
                (weight, price, String::new())
            }
            FormPayload::Role(role) => (String::new(), String::new(), role.permissions.join(", ")),
            FormPayload::Branch(_) | FormPayload::User(_) => {
                (String::new(), String::new(), String::new())
            }
        };
        Self {
            kind: payload.kind(),
            field_index: 0,
            weight_text,
            price_text,
            permissions_text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct ViewData {
    counts: DashboardCounts,
    branches: Vec<Branch>,
    products: Vec<Product>,
    requests: Vec<ServiceRequest>,
    reviews: Vec<Review>,
    users: Vec<User>,
    roles: Vec<Role>,
    filters: Filters,
    selection: TableSelection,
    form_ui: Option<FormUiState>,
    details: DetailsUiState,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AdminRuntime>(state: &mut AppState, runtime: &mut R) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();
    refresh_view_data(runtime, &mut view_data);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = event::poll(Duration::from_millis(120)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) => {
                    if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

/// The notifier: fire-and-forget status acknowledgments on the bottom
/// line, auto-cleared after a few seconds.
fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.set_status(message.into());
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn refresh_view_data<R: AdminRuntime>(runtime: &mut R, view_data: &mut ViewData) {
    view_data.counts = runtime.dashboard_counts();
    view_data.branches = runtime.list_branches();
    view_data.products = runtime.list_products();
    view_data.requests = runtime.list_requests();
    view_data.reviews = runtime.list_reviews();
    view_data.users = runtime.list_users();
    view_data.roles = runtime.list_roles();
    clamp_selection(view_data);
}

fn handle_key_event<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        view_data.help_visible = false;
        return false;
    }

    match state.mode {
        AppMode::Browse => handle_browse_key(state, runtime, view_data, internal_tx, key),
        AppMode::Search => {
            handle_search_key(state, view_data, key);
            false
        }
        AppMode::Form(_) => {
            handle_form_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::ConfirmDelete => {
            handle_confirm_key(state, runtime, view_data, internal_tx, key);
            false
        }
        AppMode::Details => {
            handle_details_key(state, runtime, view_data, internal_tx, key);
            false
        }
    }
}

fn handle_browse_key<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            view_data.help_visible = true;
        }
        (KeyCode::Tab, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::NextTab);
        }
        (KeyCode::BackTab, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
            state.dispatch(AppCommand::PrevTab);
        }
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
            move_selection(state, view_data, 1);
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
            move_selection(state, view_data, -1);
        }
        (KeyCode::Char('/'), _) => {
            if view_data.filters.search_mut(state.active_tab).is_some() {
                state.dispatch(AppCommand::EnterSearch);
            } else {
                emit_status(state, view_data, internal_tx, "search unavailable here");
            }
        }
        (KeyCode::Esc, _) => {
            if view_data.filters.is_restrictive(state.active_tab) {
                view_data.filters.clear_for(state.active_tab);
                emit_status(state, view_data, internal_tx, "filters cleared");
            }
        }
        (KeyCode::Char('a'), KeyModifiers::NONE) => {
            if let Some(kind) = form_for_tab(state.active_tab) {
                open_create_form(state, view_data, kind);
            } else {
                emit_status(state, view_data, internal_tx, "form unavailable");
            }
        }
        (KeyCode::Char('e'), KeyModifiers::NONE) => {
            open_edit_for_selection(state, view_data, internal_tx);
        }
        (KeyCode::Char('d'), KeyModifiers::NONE) => {
            request_delete_for_selection(state, view_data, internal_tx);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            if state.active_tab == TabKind::Products {
                view_data.filters.product.category =
                    cycle_filter(view_data.filters.product.category, &ProductCategory::ALL);
                clamp_selection(view_data);
            }
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => match state.active_tab {
            TabKind::Products => {
                view_data.filters.product.status =
                    cycle_filter(view_data.filters.product.status, &ProductStatus::ALL);
                clamp_selection(view_data);
            }
            TabKind::Requests => {
                view_data.filters.request.status =
                    cycle_filter(view_data.filters.request.status, &RequestStatus::ALL);
                clamp_selection(view_data);
            }
            TabKind::Reviews => {
                view_data.filters.review.status =
                    cycle_filter(view_data.filters.review.status, &ReviewStatus::ALL);
                clamp_selection(view_data);
            }
            _ => {}
        },
        (KeyCode::Char('t'), KeyModifiers::NONE) => {
            if state.active_tab == TabKind::Requests {
                view_data.filters.request.kind =
                    cycle_filter(view_data.filters.request.kind, &RequestKind::ALL);
                clamp_selection(view_data);
            }
        }
        (KeyCode::Enter, _) => {
            if state.active_tab == TabKind::Requests {
                if let Some(request) = selected_request(view_data).cloned() {
                    view_data.details = DetailsUiState {
                        request_id: Some(request.id),
                        ..DetailsUiState::default()
                    };
                    state.dispatch(AppCommand::OpenDetails);
                }
            }
        }
        (KeyCode::Char('A'), _) => {
            quick_moderate(state, runtime, view_data, internal_tx, Moderation::Approve);
        }
        (KeyCode::Char('R'), _) => {
            quick_moderate(state, runtime, view_data, internal_tx, Moderation::Reject);
        }
        _ => {}
    }
    false
}

fn handle_search_key(state: &mut AppState, view_data: &mut ViewData, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            state.dispatch(AppCommand::LeaveSearch);
        }
        KeyCode::Backspace => {
            if let Some(search) = view_data.filters.search_mut(state.active_tab) {
                search.pop();
            }
            clamp_selection(view_data);
        }
        KeyCode::Char(ch) => {
            if let Some(search) = view_data.filters.search_mut(state.active_tab) {
                search.push(ch);
            }
            clamp_selection(view_data);
        }
        _ => {}
    }
}

fn handle_form_key<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Esc => {
            let events = state.dispatch(AppCommand::CancelForm);
            view_data.form_ui = None;
            process_app_events(state, runtime, view_data, internal_tx, events);
        }
        KeyCode::Enter => {
            let events = state.dispatch(AppCommand::SubmitForm);
            process_app_events(state, runtime, view_data, internal_tx, events);
        }
        KeyCode::Down | KeyCode::Tab => move_form_cursor(view_data, 1),
        KeyCode::Up | KeyCode::BackTab => move_form_cursor(view_data, -1),
        KeyCode::Backspace => edit_active_field(state, view_data, None),
        KeyCode::Char(ch) => {
            if active_field_is_choice(view_data) {
                if let Some(digit) = ch.to_digit(10) {
                    if digit >= 1 {
                        apply_form_choice(state, view_data, (digit - 1) as usize);
                    }
                }
            } else {
                edit_active_field(state, view_data, Some(ch));
            }
        }
        _ => {}
    }
}

fn handle_confirm_key<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            let events = state.dispatch(AppCommand::ConfirmDelete);
            process_app_events(state, runtime, view_data, internal_tx, events);
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            state.dispatch(AppCommand::CancelDelete);
        }
        _ => {}
    }
}

fn handle_details_key<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    match view_data.details.focus {
        DetailsFocus::Actions => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                state.dispatch(AppCommand::CloseDetails);
                view_data.details = DetailsUiState::default();
            }
            KeyCode::Char('s') => {
                cycle_details_status(state, runtime, view_data, internal_tx);
            }
            KeyCode::Char('n') => {
                view_data.details.focus = DetailsFocus::Notes;
            }
            KeyCode::Char('r') => {
                view_data.details.focus = DetailsFocus::Response;
            }
            _ => {}
        },
        DetailsFocus::Notes => match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                view_data.details.focus = DetailsFocus::Actions;
            }
            KeyCode::Backspace => {
                view_data.details.notes.pop();
            }
            KeyCode::Char(ch) => view_data.details.notes.push(ch),
            _ => {}
        },
        DetailsFocus::Response => match key.code {
            KeyCode::Esc => {
                view_data.details.focus = DetailsFocus::Actions;
            }
            KeyCode::Enter => {
                send_customer_response(state, runtime, view_data, internal_tx);
            }
            KeyCode::Backspace => {
                view_data.details.response.pop();
            }
            KeyCode::Char(ch) => view_data.details.response.push(ch),
            _ => {}
        },
    }
}

fn send_customer_response<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(request_id) = view_data.details.request_id else {
        return;
    };
    if view_data.details.response.trim().is_empty() {
        emit_status(state, view_data, internal_tx, "enter a response message first");
        return;
    }
    let message = view_data.details.response.clone();
    match runtime.send_customer_email(request_id, &message) {
        Ok(()) => {
            view_data.details.response.clear();
            view_data.details.focus = DetailsFocus::Actions;
            emit_status(state, view_data, internal_tx, "email sent to customer");
        }
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("send failed: {error}"));
        }
    }
}

fn cycle_details_status<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(request_id) = view_data.details.request_id else {
        return;
    };
    let Some(request) = view_data
        .requests
        .iter()
        .find(|request| request.id == request_id)
    else {
        return;
    };
    let all = RequestStatus::ALL;
    let position = all
        .iter()
        .position(|status| *status == request.status)
        .unwrap_or(0);
    let next = all[(position + 1) % all.len()];

    match runtime.set_request_status(request_id, next) {
        Ok(true) => {
            refresh_view_data(runtime, view_data);
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("request marked {}", next.as_str().to_lowercase()),
            );
        }
        Ok(false) => {
            emit_status(state, view_data, internal_tx, "request no longer exists");
        }
        Err(error) => {
            emit_status(state, view_data, internal_tx, format!("update failed: {error}"));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Moderation {
    Approve,
    Reject,
}

/// One-keystroke accept/reject for pending requests and reviews. Status
/// changes are not destructive, so they skip the confirmation gate.
fn quick_moderate<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    moderation: Moderation,
) {
    match state.active_tab {
        TabKind::Requests => {
            let Some(request) = selected_request(view_data) else {
                emit_status(state, view_data, internal_tx, "no request selected");
                return;
            };
            if request.status != RequestStatus::Pending {
                emit_status(state, view_data, internal_tx, "request is not pending");
                return;
            }
            let id = request.id;
            let status = match moderation {
                Moderation::Approve => RequestStatus::Accepted,
                Moderation::Reject => RequestStatus::Rejected,
            };
            if matches!(runtime.set_request_status(id, status), Ok(true)) {
                refresh_view_data(runtime, view_data);
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("request {}", status.as_str().to_lowercase()),
                );
            }
        }
        TabKind::Reviews => {
            let Some(review) = selected_review(view_data) else {
                emit_status(state, view_data, internal_tx, "no review selected");
                return;
            };
            if review.status != ReviewStatus::Pending {
                emit_status(state, view_data, internal_tx, "review is not pending");
                return;
            }
            let id = review.id;
            let status = match moderation {
                Moderation::Approve => ReviewStatus::Approved,
                Moderation::Reject => ReviewStatus::Rejected,
            };
            if matches!(runtime.set_review_status(id, status), Ok(true)) {
                refresh_view_data(runtime, view_data);
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("review {}", status.as_str().to_lowercase()),
                );
            }
        }
        _ => {}
    }
}

fn process_app_events<R: AdminRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    events: Vec<AppEvent>,
) {
    for event in events {
        match event {
            AppEvent::FormAccepted { payload, target } => {
                let noun = payload.kind().label();
                let verb = match target {
                    FormTarget::Create => "added",
                    FormTarget::Edit(_) => "updated",
                };
                match runtime.apply_form(&payload, target) {
                    Ok(()) => {
                        view_data.form_ui = None;
                        refresh_view_data(runtime, view_data);
                        emit_status(state, view_data, internal_tx, format!("{noun} {verb}"));
                    }
                    Err(error) => {
                        emit_status(state, view_data, internal_tx, format!("save failed: {error}"));
                    }
                }
            }
            AppEvent::FormBlocked => {
                let count = state.form.errors().len();
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("{count} field(s) need attention"),
                );
            }
            AppEvent::DeleteConfirmed(target) => {
                let noun = target.kind.label();
                match runtime.delete(&target) {
                    Ok(true) => {
                        refresh_view_data(runtime, view_data);
                        emit_status(state, view_data, internal_tx, format!("{noun} deleted"));
                    }
                    Ok(false) => {
                        emit_status(state, view_data, internal_tx, format!("{noun} was not deleted"));
                    }
                    Err(error) => {
                        emit_status(
                            state,
                            view_data,
                            internal_tx,
                            format!("delete failed: {error}"),
                        );
                    }
                }
            }
            AppEvent::ModeChanged(_)
            | AppEvent::TabChanged(_)
            | AppEvent::StatusUpdated(_)
            | AppEvent::StatusCleared => {}
        }
    }
}

const fn form_for_tab(tab: TabKind) -> Option<FormKind> {
    match tab {
        TabKind::Branches => Some(FormKind::Branch),
        TabKind::Products => Some(FormKind::Product),
        TabKind::Users => Some(FormKind::User),
        TabKind::Roles => Some(FormKind::Role),
        TabKind::Dashboard | TabKind::Showcase | TabKind::Requests | TabKind::Reviews => None,
    }
}

fn open_create_form(state: &mut AppState, view_data: &mut ViewData, kind: FormKind) {
    state.dispatch(AppCommand::OpenCreate(kind));
    if let Some(payload) = state.form.payload() {
        view_data.form_ui = Some(FormUiState::for_payload(payload));
    }
}

fn open_edit_for_selection(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let opened = match state.active_tab {
        TabKind::Branches => selected_branch(view_data).cloned().map(|branch| {
            (
                branch.id.get(),
                FormPayload::Branch(karat_app::BranchFormInput::from_record(&branch)),
            )
        }),
        TabKind::Products => selected_product(view_data).cloned().map(|product| {
            (
                product.id.get(),
                FormPayload::Product(karat_app::ProductFormInput::from_record(&product)),
            )
        }),
        TabKind::Users => selected_user(view_data).cloned().map(|user| {
            (
                user.id.get(),
                FormPayload::User(karat_app::UserFormInput::from_record(&user)),
            )
        }),
        TabKind::Roles => selected_role(view_data).cloned().map(|role| {
            (
                role.id.get(),
                FormPayload::Role(karat_app::RoleFormInput::from_record(&role)),
            )
        }),
        _ => {
            emit_status(state, view_data, internal_tx, "editing unavailable here");
            return;
        }
    };

    let Some((target_id, payload)) = opened else {
        emit_status(state, view_data, internal_tx, "no row selected");
        return;
    };
    view_data.form_ui = Some(FormUiState::for_payload(&payload));
    state.dispatch(AppCommand::OpenEdit { target_id, payload });
}

fn request_delete_for_selection(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let target = match state.active_tab {
        TabKind::Branches => selected_branch(view_data).map(|branch| DeleteTarget {
            kind: DeleteKind::Branch,
            id: branch.id.get(),
            label: branch.name.clone(),
        }),
        TabKind::Products => selected_product(view_data).map(|product| DeleteTarget {
            kind: DeleteKind::Product,
            id: product.id.get(),
            label: product.name.clone(),
        }),
        TabKind::Reviews => selected_review(view_data).map(|review| DeleteTarget {
            kind: DeleteKind::Review,
            id: review.id.get(),
            label: review.title.clone(),
        }),
        TabKind::Users => selected_user(view_data).map(|user| DeleteTarget {
            kind: DeleteKind::User,
            id: user.id.get(),
            label: user.full_name(),
        }),
        TabKind::Roles => {
            let Some(role) = selected_role(view_data) else {
                emit_status(state, view_data, internal_tx, "no row selected");
                return;
            };
            let user_count = role.user_count;
            let staged = DeleteTarget {
                kind: DeleteKind::Role,
                id: role.id.get(),
                label: role.name.clone(),
            };
            if user_count > 0 {
                // Guarded deletion: the gate never opens for a role in use.
                emit_status(
                    state,
                    view_data,
                    internal_tx,
                    format!("role has {user_count} assigned user(s)"),
                );
                return;
            }
            Some(staged)
        }
        TabKind::Requests => {
            emit_status(state, view_data, internal_tx, "requests cannot be deleted");
            return;
        }
        TabKind::Dashboard | TabKind::Showcase => return,
    };

    let Some(target) = target else {
        emit_status(state, view_data, internal_tx, "no row selected");
        return;
    };
    state.dispatch(AppCommand::RequestDelete(target));
}

fn cycle_filter<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let position = all.iter().position(|item| *item == value)?;
            if position + 1 == all.len() {
                None
            } else {
                Some(all[position + 1])
            }
        }
    }
}

fn filtered_branches(view_data: &ViewData) -> Vec<&Branch> {
    view_data.filters.branch.iter(&view_data.branches).collect()
}

fn filtered_products(view_data: &ViewData) -> Vec<&Product> {
    view_data.filters.product.iter(&view_data.products).collect()
}

fn filtered_requests(view_data: &ViewData) -> Vec<&ServiceRequest> {
    view_data.filters.request.iter(&view_data.requests).collect()
}

fn filtered_reviews(view_data: &ViewData) -> Vec<&Review> {
    view_data.filters.review.iter(&view_data.reviews).collect()
}

fn filtered_users(view_data: &ViewData) -> Vec<&User> {
    view_data.filters.user.iter(&view_data.users).collect()
}

fn filtered_roles(view_data: &ViewData) -> Vec<&Role> {
    view_data.filters.role.iter(&view_data.roles).collect()
}

fn filtered_row_count(view_data: &ViewData, tab: TabKind) -> usize {
    match tab {
        TabKind::Branches => filtered_branches(view_data).len(),
        TabKind::Products => filtered_products(view_data).len(),
        TabKind::Requests => filtered_requests(view_data).len(),
        TabKind::Reviews => filtered_reviews(view_data).len(),
        TabKind::Users => filtered_users(view_data).len(),
        TabKind::Roles => filtered_roles(view_data).len(),
        TabKind::Dashboard | TabKind::Showcase => 0,
    }
}

fn selected_branch(view_data: &ViewData) -> Option<&Branch> {
    filtered_branches(view_data)
        .get(view_data.selection.get(TabKind::Branches))
        .copied()
}

fn selected_product(view_data: &ViewData) -> Option<&Product> {
    filtered_products(view_data)
        .get(view_data.selection.get(TabKind::Products))
        .copied()
}

fn selected_request(view_data: &ViewData) -> Option<&ServiceRequest> {
    filtered_requests(view_data)
        .get(view_data.selection.get(TabKind::Requests))
        .copied()
}

fn selected_review(view_data: &ViewData) -> Option<&Review> {
    filtered_reviews(view_data)
        .get(view_data.selection.get(TabKind::Reviews))
        .copied()
}

fn selected_user(view_data: &ViewData) -> Option<&User> {
    filtered_users(view_data)
        .get(view_data.selection.get(TabKind::Users))
        .copied()
}

fn selected_role(view_data: &ViewData) -> Option<&Role> {
    filtered_roles(view_data)
        .get(view_data.selection.get(TabKind::Roles))
        .copied()
}

fn move_selection(state: &AppState, view_data: &mut ViewData, delta: isize) {
    let tab = state.active_tab;
    let count = filtered_row_count(view_data, tab);
    if count == 0 {
        view_data.selection.set(tab, 0);
        return;
    }
    let current = view_data.selection.get(tab) as isize;
    let next = (current + delta).rem_euclid(count as isize) as usize;
    view_data.selection.set(tab, next);
}

fn clamp_selection(view_data: &mut ViewData) {
    for tab in TabKind::ALL {
        let count = filtered_row_count(view_data, tab);
        let selected = view_data.selection.get(tab);
        if count == 0 {
            view_data.selection.set(tab, 0);
        } else if selected >= count {
            view_data.selection.set(tab, count - 1);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldSlot {
    Text,
    Weight,
    Price,
    Permissions,
    BranchStatus,
    ProductCategory,
    ProductCollection,
    MetalType,
    Purity,
    ProductStatus,
    UserStatus,
    RoleName,
}

impl FieldSlot {
    const fn is_choice(self) -> bool {
        matches!(
            self,
            Self::BranchStatus
                | Self::ProductCategory
                | Self::ProductCollection
                | Self::MetalType
                | Self::Purity
                | Self::ProductStatus
                | Self::UserStatus
                | Self::RoleName
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldSpec {
    label: &'static str,
    error_key: Option<&'static str>,
    slot: FieldSlot,
}

fn form_field_specs(kind: FormKind) -> &'static [FieldSpec] {
    match kind {
        FormKind::Branch => &[
            FieldSpec { label: "name", error_key: Some("name"), slot: FieldSlot::Text },
            FieldSpec { label: "address", error_key: Some("address"), slot: FieldSlot::Text },
            FieldSpec { label: "city", error_key: Some("city"), slot: FieldSlot::Text },
            FieldSpec { label: "state", error_key: Some("state"), slot: FieldSlot::Text },
            FieldSpec {
                label: "postal code",
                error_key: Some("postal_code"),
                slot: FieldSlot::Text,
            },
            FieldSpec { label: "phone", error_key: Some("phone"), slot: FieldSlot::Text },
            FieldSpec { label: "email", error_key: Some("email"), slot: FieldSlot::Text },
            FieldSpec { label: "hours", error_key: None, slot: FieldSlot::Text },
            FieldSpec { label: "status", error_key: None, slot: FieldSlot::BranchStatus },
        ],
        FormKind::Product => &[
            FieldSpec { label: "name", error_key: Some("name"), slot: FieldSlot::Text },
            FieldSpec { label: "sku", error_key: Some("sku"), slot: FieldSlot::Text },
            FieldSpec {
                label: "category",
                error_key: None,
                slot: FieldSlot::ProductCategory,
            },
            FieldSpec {
                label: "collection",
                error_key: None,
                slot: FieldSlot::ProductCollection,
            },
            FieldSpec { label: "metal", error_key: None, slot: FieldSlot::MetalType },
            FieldSpec { label: "purity", error_key: None, slot: FieldSlot::Purity },
            FieldSpec {
                label: "weight (g)",
                error_key: Some("weight"),
                slot: FieldSlot::Weight,
            },
            FieldSpec {
                label: "price (₹)",
                error_key: Some("price"),
                slot: FieldSlot::Price,
            },
            FieldSpec { label: "image", error_key: None, slot: FieldSlot::Text },
            FieldSpec { label: "status", error_key: None, slot: FieldSlot::ProductStatus },
        ],
        FormKind::User => &[
            FieldSpec {
                label: "first name",
                error_key: Some("first_name"),
                slot: FieldSlot::Text,
            },
            FieldSpec {
                label: "last name",
                error_key: Some("last_name"),
                slot: FieldSlot::Text,
            },
            FieldSpec { label: "email", error_key: Some("email"), slot: FieldSlot::Text },
            FieldSpec { label: "phone", error_key: Some("phone"), slot: FieldSlot::Text },
            FieldSpec { label: "role", error_key: Some("role"), slot: FieldSlot::RoleName },
            FieldSpec { label: "status", error_key: None, slot: FieldSlot::UserStatus },
        ],
        FormKind::Role => &[
            FieldSpec { label: "name", error_key: Some("name"), slot: FieldSlot::Text },
            FieldSpec {
                label: "description",
                error_key: Some("description"),
                slot: FieldSlot::Text,
            },
            FieldSpec { label: "color", error_key: None, slot: FieldSlot::Text },
            FieldSpec {
                label: "permissions",
                error_key: None,
                slot: FieldSlot::Permissions,
            },
        ],
    }
}

fn move_form_cursor(view_data: &mut ViewData, delta: isize) {
    let Some(form_ui) = view_data.form_ui.as_mut() else {
        return;
    };
    let fields = form_field_specs(form_ui.kind);
    let len = fields.len() as isize;
    form_ui.field_index = (form_ui.field_index as isize + delta).rem_euclid(len) as usize;
}

fn active_field_spec(view_data: &ViewData) -> Option<FieldSpec> {
    let form_ui = view_data.form_ui.as_ref()?;
    form_field_specs(form_ui.kind)
        .get(form_ui.field_index)
        .copied()
}

fn active_field_is_choice(view_data: &ViewData) -> bool {
    active_field_spec(view_data).is_some_and(|spec| spec.slot.is_choice())
}

fn plain_text_slot<'a>(payload: &'a mut FormPayload, index: usize) -> Option<&'a mut String> {
    match payload {
        FormPayload::Branch(branch) => match index {
            0 => Some(&mut branch.name),
            1 => Some(&mut branch.address),
            2 => Some(&mut branch.city),
            3 => Some(&mut branch.state),
            4 => Some(&mut branch.postal_code),
            5 => Some(&mut branch.phone),
            6 => Some(&mut branch.email),
            7 => Some(&mut branch.hours),
            _ => None,
        },
        FormPayload::Product(product) => match index {
            0 => Some(&mut product.name),
            1 => Some(&mut product.sku),
            8 => Some(&mut product.image),
            _ => None,
        },
        FormPayload::User(user) => match index {
            0 => Some(&mut user.first_name),
            1 => Some(&mut user.last_name),
            2 => Some(&mut user.email),
            3 => Some(&mut user.phone),
            _ => None,
        },
        FormPayload::Role(role) => match index {
            0 => Some(&mut role.name),
            1 => Some(&mut role.description),
            2 => Some(&mut role.color),
            _ => None,
        },
    }
}

fn edit_buffer(buffer: &mut String, edit: Option<char>) {
    match edit {
        Some(ch) => buffer.push(ch),
        None => {
            buffer.pop();
        }
    }
}

/// `edit` is a character to append, or `None` for backspace.
fn edit_active_field(state: &mut AppState, view_data: &mut ViewData, edit: Option<char>) {
    let Some(spec) = active_field_spec(view_data) else {
        return;
    };
    let Some(form_ui) = view_data.form_ui.as_mut() else {
        return;
    };
    let Some(mut payload) = state.form.payload().cloned() else {
        return;
    };

    match spec.slot {
        FieldSlot::Text => {
            if let Some(slot) = plain_text_slot(&mut payload, form_ui.field_index) {
                edit_buffer(slot, edit);
            }
        }
        FieldSlot::Weight => {
            edit_buffer(&mut form_ui.weight_text, edit);
            if let FormPayload::Product(product) = &mut payload {
                product.weight_grams = parse_weight_input(&form_ui.weight_text);
            }
        }
        FieldSlot::Price => {
            edit_buffer(&mut form_ui.price_text, edit);
            if let FormPayload::Product(product) = &mut payload {
                product.price_rupees = parse_price_input(&form_ui.price_text);
            }
        }
        FieldSlot::Permissions => {
            edit_buffer(&mut form_ui.permissions_text, edit);
            if let FormPayload::Role(role) = &mut payload {
                role.permissions = parse_permissions(&form_ui.permissions_text);
            }
        }
        _ => return,
    }

    state.dispatch(AppCommand::SetFormPayload(payload));
}

fn parse_permissions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|permission| !permission.is_empty())
        .map(str::to_owned)
        .collect()
}

fn apply_form_choice(state: &mut AppState, view_data: &mut ViewData, choice_index: usize) {
    let Some(spec) = active_field_spec(view_data) else {
        return;
    };
    let Some(mut payload) = state.form.payload().cloned() else {
        return;
    };

    let applied = match (&mut payload, spec.slot) {
        (FormPayload::Branch(branch), FieldSlot::BranchStatus) => {
            pick_choice(&BranchStatus::ALL, choice_index)
                .map(|status| branch.status = status)
                .is_some()
        }
        (FormPayload::Product(product), FieldSlot::ProductCategory) => {
            pick_choice(&ProductCategory::ALL, choice_index)
                .map(|category| product.category = category)
                .is_some()
        }
        (FormPayload::Product(product), FieldSlot::ProductCollection) => {
            pick_choice(&ProductCollection::ALL, choice_index)
                .map(|collection| product.collection = collection)
                .is_some()
        }
        (FormPayload::Product(product), FieldSlot::MetalType) => {
            pick_choice(&MetalType::ALL, choice_index)
                .map(|metal| product.metal_type = metal)
                .is_some()
        }
        (FormPayload::Product(product), FieldSlot::Purity) => {
            pick_choice(&Purity::ALL, choice_index)
                .map(|purity| product.purity = purity)
                .is_some()
        }
        (FormPayload::Product(product), FieldSlot::ProductStatus) => {
            pick_choice(&ProductStatus::ALL, choice_index)
                .map(|status| product.status = status)
                .is_some()
        }
        (FormPayload::User(user), FieldSlot::UserStatus) => {
            pick_choice(&UserStatus::ALL, choice_index)
                .map(|status| user.status = status)
                .is_some()
        }
        (FormPayload::User(user), FieldSlot::RoleName) => {
            match view_data.roles.get(choice_index) {
                Some(role) => {
                    user.role = role.name.clone();
                    true
                }
                None => false,
            }
        }
        _ => false,
    };

    if applied {
        state.dispatch(AppCommand::SetFormPayload(payload));
    }
}

fn pick_choice<T: Copy>(all: &[T], index: usize) -> Option<T> {
    all.get(index).copied()
}

fn field_value(view_data: &ViewData, payload: &FormPayload, index: usize) -> String {
    let Some(form_ui) = view_data.form_ui.as_ref() else {
        return String::new();
    };
    match payload {
        FormPayload::Branch(branch) => match index {
            0 => branch.name.clone(),
            1 => branch.address.clone(),
            2 => branch.city.clone(),
            3 => branch.state.clone(),
            4 => branch.postal_code.clone(),
            5 => branch.phone.clone(),
            6 => branch.email.clone(),
            7 => branch.hours.clone(),
            8 => branch.status.as_str().to_owned(),
            _ => String::new(),
        },
        FormPayload::Product(product) => match index {
            0 => product.name.clone(),
            1 => product.sku.clone(),
            2 => product.category.as_str().to_owned(),
            3 => product.collection.as_str().to_owned(),
            4 => product.metal_type.as_str().to_owned(),
            5 => product.purity.as_str().to_owned(),
            6 => form_ui.weight_text.clone(),
            7 => form_ui.price_text.clone(),
            8 => product.image.clone(),
            9 => product.status.as_str().to_owned(),
            _ => String::new(),
        },
        FormPayload::User(user) => match index {
            0 => user.first_name.clone(),
            1 => user.last_name.clone(),
            2 => user.email.clone(),
            3 => user.phone.clone(),
            4 => user.role.clone(),
            5 => user.status.as_str().to_owned(),
            _ => String::new(),
        },
        FormPayload::Role(role) => match index {
            0 => role.name.clone(),
            1 => role.description.clone(),
            2 => role.color.clone(),
            3 => form_ui.permissions_text.clone(),
            _ => String::new(),
        },
    }
}

fn choice_labels(view_data: &ViewData, slot: FieldSlot) -> Vec<String> {
    match slot {
        FieldSlot::BranchStatus => BranchStatus::ALL
            .iter()
            .map(|status| status.as_str().to_owned())
            .collect(),
        FieldSlot::ProductCategory => ProductCategory::ALL
            .iter()
            .map(|category| category.as_str().to_owned())
            .collect(),
        FieldSlot::ProductCollection => ProductCollection::ALL
            .iter()
            .map(|collection| collection.as_str().to_owned())
            .collect(),
        FieldSlot::MetalType => MetalType::ALL
            .iter()
            .map(|metal| metal.as_str().to_owned())
            .collect(),
        FieldSlot::Purity => Purity::ALL
            .iter()
            .map(|purity| purity.as_str().to_owned())
            .collect(),
        FieldSlot::ProductStatus => ProductStatus::ALL
            .iter()
            .map(|status| status.as_str().to_owned())
            .collect(),
        FieldSlot::UserStatus => UserStatus::ALL
            .iter()
            .map(|status| status.as_str().to_owned())
            .collect(),
        FieldSlot::RoleName => view_data.roles.iter().map(|role| role.name.clone()).collect(),
        FieldSlot::Text | FieldSlot::Weight | FieldSlot::Price | FieldSlot::Permissions => {
            Vec::new()
        }
    }
}

fn render(frame: &mut ratatui::Frame<'_>, state: &AppState, view_data: &ViewData) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.area());

    let selected = TabKind::ALL
        .iter()
        .position(|tab| *tab == state.active_tab)
        .unwrap_or(0);
    let tab_titles = TabKind::ALL
        .iter()
        .map(|tab| tab.label().to_owned())
        .collect::<Vec<String>>();
    let tabs = Tabs::new(tab_titles)
        .block(Block::default().title("karat").borders(Borders::ALL))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .select(selected);
    frame.render_widget(tabs, layout[0]);

    match state.active_tab {
        TabKind::Dashboard => {
            let body = Paragraph::new(render_dashboard_text(view_data))
                .block(Block::default().borders(Borders::ALL).title("dashboard"));
            frame.render_widget(body, layout[1]);
        }
        TabKind::Showcase => {
            let body = Paragraph::new(render_showcase_text(view_data))
                .block(Block::default().borders(Borders::ALL).title("storefront"));
            frame.render_widget(body, layout[1]);
        }
        tab => render_entity_table(frame, layout[1], state, view_data, tab),
    }

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let AppMode::Form(kind) = state.mode {
        let area = centered_rect(66, 72, frame.area());
        frame.render_widget(Clear, area);
        let title = form_overlay_title(state, kind);
        let form = Paragraph::new(render_form_overlay_text(state, view_data))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(form, area);
    }

    if state.mode == AppMode::ConfirmDelete {
        let area = centered_rect(54, 22, frame.area());
        frame.render_widget(Clear, area);
        let confirm = Paragraph::new(render_confirm_overlay_text(state)).block(
            Block::default()
                .title("confirm delete")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );
        frame.render_widget(confirm, area);
    }

    if state.mode == AppMode::Details {
        let area = centered_rect(78, 72, frame.area());
        frame.render_widget(Clear, area);
        let details = Paragraph::new(render_details_overlay_text(view_data))
            .block(Block::default().title("request details").borders(Borders::ALL));
        frame.render_widget(details, area);
    }

    if view_data.help_visible {
        let area = centered_rect(72, 66, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_entity_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    state: &AppState,
    view_data: &ViewData,
    tab: TabKind,
) {
    let filtered = filtered_row_count(view_data, tab);
    if filtered == 0 {
        let message = empty_state_text(view_data, tab);
        let body = Paragraph::new(message)
            .block(Block::default().borders(Borders::ALL).title(table_title(state, view_data, tab)));
        frame.render_widget(body, area);
        return;
    }

    let selected = view_data.selection.get(tab);
    let (header, rows, widths) = table_contents(view_data, tab, selected);

    let table = Table::new(rows, widths)
        .header(header.style(Style::default().add_modifier(Modifier::BOLD)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(table_title(state, view_data, tab)),
        );
    frame.render_widget(table, area);
}

fn table_contents<'a>(
    view_data: &'a ViewData,
    tab: TabKind,
    selected: usize,
) -> (Row<'a>, Vec<Row<'a>>, Vec<Constraint>) {
    let mark = |index: usize| {
        if index == selected {
            SELECTION_MARK
        } else {
            " "
        }
    };

    match tab {
        TabKind::Branches => {
            let header = Row::new(vec![" ", "name", "city", "phone", "status"]);
            let rows = filtered_branches(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, branch)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(branch.name.clone()),
                        Cell::from(branch.city.clone()),
                        Cell::from(branch.phone.clone()),
                        Cell::from(branch.status.as_str()),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Min(28),
                Constraint::Length(14),
                Constraint::Length(18),
                Constraint::Length(10),
            ];
            (header, rows, widths)
        }
        TabKind::Products => {
            let header = Row::new(vec![" ", "name", "sku", "category", "price", "weight", "status"]);
            let rows = filtered_products(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, product)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(product.name.clone()),
                        Cell::from(product.sku.clone()),
                        Cell::from(product.category.as_str()),
                        Cell::from(format_rupees(product.price_rupees)),
                        Cell::from(format_weight_grams(product.weight_grams)),
                        Cell::from(product.status.as_str()),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Min(24),
                Constraint::Length(10),
                Constraint::Length(10),
                Constraint::Length(12),
                Constraint::Length(8),
                Constraint::Length(12),
            ];
            (header, rows, widths)
        }
        TabKind::Requests => {
            let header = Row::new(vec![" ", "id", "type", "customer", "subject", "priority", "status"]);
            let rows = filtered_requests(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, request)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(request.display_id()),
                        Cell::from(request.kind.as_str()),
                        Cell::from(request.customer_name.clone()),
                        Cell::from(request.subject.clone()),
                        Cell::from(request.priority.as_str()),
                        Cell::from(request.status.as_str()),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Min(24),
                Constraint::Length(8),
                Constraint::Length(11),
            ];
            (header, rows, widths)
        }
        TabKind::Reviews => {
            let header = Row::new(vec![" ", "id", "product", "customer", "rating", "date", "status"]);
            let rows = filtered_reviews(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, review)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(review.display_id()),
                        Cell::from(review.product_name.clone()),
                        Cell::from(review.customer_name.clone()),
                        Cell::from(format_stars(review.rating)),
                        Cell::from(format_date(review.date)),
                        Cell::from(review.status.as_str()),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Min(22),
                Constraint::Length(16),
                Constraint::Length(6),
                Constraint::Length(11),
                Constraint::Length(9),
            ];
            (header, rows, widths)
        }
        TabKind::Users => {
            let header = Row::new(vec![" ", "name", "email", "role", "status", "last login"]);
            let rows = filtered_users(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, user)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(user.full_name()),
                        Cell::from(user.email.clone()),
                        Cell::from(user.role.clone()),
                        Cell::from(user.status.as_str()),
                        Cell::from(format_date(user.last_login)),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Length(18),
                Constraint::Min(26),
                Constraint::Length(16),
                Constraint::Length(9),
                Constraint::Length(11),
            ];
            (header, rows, widths)
        }
        TabKind::Roles => {
            let header = Row::new(vec![" ", "name", "users", "permissions", "description"]);
            let rows = filtered_roles(view_data)
                .into_iter()
                .enumerate()
                .map(|(index, role)| {
                    Row::new(vec![
                        Cell::from(mark(index)),
                        Cell::from(role.name.clone()),
                        Cell::from(role.user_count.to_string()),
                        Cell::from(role.permissions.join(", ")),
                        Cell::from(role.description.clone()),
                    ])
                })
                .collect();
            let widths = vec![
                Constraint::Length(1),
                Constraint::Length(18),
                Constraint::Length(6),
                Constraint::Length(30),
                Constraint::Min(20),
            ];
            (header, rows, widths)
        }
        TabKind::Dashboard | TabKind::Showcase => {
            (Row::new(Vec::<Cell>::new()), Vec::new(), Vec::new())
        }
    }
}

fn table_title(state: &AppState, view_data: &ViewData, tab: TabKind) -> String {
    let total = match tab {
        TabKind::Branches => view_data.branches.len(),
        TabKind::Products => view_data.products.len(),
        TabKind::Requests => view_data.requests.len(),
        TabKind::Reviews => view_data.reviews.len(),
        TabKind::Users => view_data.users.len(),
        TabKind::Roles => view_data.roles.len(),
        TabKind::Dashboard | TabKind::Showcase => 0,
    };
    let shown = filtered_row_count(view_data, tab);

    let mut title = format!("{} {shown}/{total}", tab.label());
    let search = view_data.filters.search(tab);
    if state.mode == AppMode::Search {
        title.push_str(&format!(" search:{search}▌"));
    } else if !search.trim().is_empty() {
        title.push_str(&format!(" search:{search}"));
    }
    if let Some(summary) = filter_summary(view_data, tab) {
        title.push(' ');
        title.push_str(&summary);
    }
    title
}

fn filter_summary(view_data: &ViewData, tab: TabKind) -> Option<String> {
    match tab {
        TabKind::Products => {
            let mut parts = Vec::new();
            if let Some(category) = view_data.filters.product.category {
                parts.push(format!("category:{}", category.as_str()));
            }
            if let Some(status) = view_data.filters.product.status {
                parts.push(format!("status:{}", status.as_str()));
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        TabKind::Requests => {
            let mut parts = Vec::new();
            if let Some(kind) = view_data.filters.request.kind {
                parts.push(format!("type:{}", kind.as_str()));
            }
            if let Some(status) = view_data.filters.request.status {
                parts.push(format!("status:{}", status.as_str()));
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        TabKind::Reviews => view_data
            .filters
            .review
            .status
            .map(|status| format!("status:{}", status.as_str())),
        _ => None,
    }
}

/// Distinguishes "no data yet" from "filters too narrow".
fn empty_state_text(view_data: &ViewData, tab: TabKind) -> String {
    let total = match tab {
        TabKind::Branches => view_data.branches.len(),
        TabKind::Products => view_data.products.len(),
        TabKind::Requests => view_data.requests.len(),
        TabKind::Reviews => view_data.reviews.len(),
        TabKind::Users => view_data.users.len(),
        TabKind::Roles => view_data.roles.len(),
        TabKind::Dashboard | TabKind::Showcase => 0,
    };
    let label = tab.label();
    if total > 0 {
        return format!("no {label} match -- adjust your search or filters (esc clears)");
    }
    if form_for_tab(tab).is_some() {
        format!("no {label} yet -- press a to add the first one")
    } else {
        format!("no {label} at the moment")
    }
}

fn render_dashboard_text(view_data: &ViewData) -> String {
    [
        "welcome back, admin".to_owned(),
        String::new(),
        format!("total branches:   {}", view_data.counts.branches),
        format!("total products:   {}", view_data.counts.products),
        format!("pending requests: {}", view_data.counts.pending_requests),
        format!("pending reviews:  {}", view_data.counts.pending_reviews),
        String::new(),
        "branches  -- manage boutique locations, hours, and contact details".to_owned(),
        "products  -- add, edit, and organize jewelry products and collections".to_owned(),
        "requests  -- handle service tickets and custom design inquiries".to_owned(),
        "reviews   -- approve, reject, or moderate customer product reviews".to_owned(),
        "users     -- create roles and manage admin user permissions".to_owned(),
    ]
    .join("\n")
}

fn render_showcase_text(view_data: &ViewData) -> String {
    let mut lines = vec!["best selling pieces".to_owned(), String::new()];
    let published: Vec<&Product> = view_data
        .products
        .iter()
        .filter(|product| product.status == ProductStatus::Published)
        .collect();
    if published.is_empty() {
        lines.push("nothing published yet".to_owned());
    } else {
        for product in published {
            lines.push(format!(
                "  {} -- {} · {} {} ({})",
                product.name,
                format_rupees(product.price_rupees),
                product.purity.as_str(),
                product.metal_type.as_str(),
                product.sku,
            ));
        }
    }

    lines.push(String::new());
    lines.push("store locator".to_owned());
    lines.push(String::new());
    let active: Vec<&Branch> = view_data
        .branches
        .iter()
        .filter(|branch| branch.status == BranchStatus::Active)
        .collect();
    if active.is_empty() {
        lines.push("no active branches".to_owned());
    } else {
        for branch in active {
            lines.push(format!(
                "  {} -- {}, {} {} {}",
                branch.name, branch.address, branch.city, branch.state, branch.postal_code,
            ));
            lines.push(format!("      {} · {}", branch.phone, branch.hours));
        }
    }
    lines.join("\n")
}

fn form_overlay_title(state: &AppState, kind: FormKind) -> String {
    let verb = match state.form.target() {
        Some(FormTarget::Edit(_)) => "edit",
        _ => "add",
    };
    format!("{verb} {}", kind.label())
}

fn render_form_overlay_text(state: &AppState, view_data: &ViewData) -> String {
    let Some(form_ui) = view_data.form_ui.as_ref() else {
        return String::new();
    };
    let Some(payload) = state.form.payload() else {
        return String::new();
    };

    let specs = form_field_specs(form_ui.kind);
    let errors = state.form.errors();
    let mut lines = Vec::new();
    for (index, spec) in specs.iter().enumerate() {
        let marker = if index == form_ui.field_index {
            SELECTION_MARK
        } else {
            " "
        };
        let value = field_value(view_data, payload, index);
        lines.push(format!("{marker} {:<12} {value}", spec.label));

        if index == form_ui.field_index && spec.slot.is_choice() {
            let choices = choice_labels(view_data, spec.slot);
            let rendered = choices
                .iter()
                .enumerate()
                .map(|(choice_index, label)| format!("{} {label}", choice_index + 1))
                .collect::<Vec<String>>()
                .join("  ");
            lines.push(format!("      [{rendered}]"));
        }

        if let Some(key) = spec.error_key {
            if let Some(message) = errors.get(key) {
                lines.push(format!("      ! {message}"));
            }
        }
    }

    lines.push(String::new());
    lines.push("enter save · esc cancel · tab next field".to_owned());
    lines.join("\n")
}

fn render_confirm_overlay_text(state: &AppState) -> String {
    let Some(target) = state.delete.pending() else {
        return String::new();
    };
    [
        format!("delete {} \"{}\"?", target.kind.label(), target.label),
        String::new(),
        "this action cannot be undone".to_owned(),
        String::new(),
        "y confirm · n cancel".to_owned(),
    ]
    .join("\n")
}

fn render_details_overlay_text(view_data: &ViewData) -> String {
    let Some(request_id) = view_data.details.request_id else {
        return String::new();
    };
    let Some(request) = view_data
        .requests
        .iter()
        .find(|request| request.id == request_id)
    else {
        return "request no longer exists".to_owned();
    };

    let notes_marker = if view_data.details.focus == DetailsFocus::Notes {
        "▌"
    } else {
        ""
    };
    let response_marker = if view_data.details.focus == DetailsFocus::Response {
        "▌"
    } else {
        ""
    };

    [
        format!("{}  {}", request.display_id(), request.kind.as_str()),
        format!(
            "{} priority · submitted {}",
            request.priority.as_str(),
            format_date(request.submitted)
        ),
        String::new(),
        format!("customer  {}", request.customer_name),
        format!("email     {}", request.customer_email),
        format!("phone     {}", request.customer_phone),
        String::new(),
        format!("subject   {}", request.subject),
        format!("          {}", request.description),
        String::new(),
        format!("status    {}  (s to cycle)", request.status.as_str()),
        String::new(),
        format!("internal notes (n to edit): {}{notes_marker}", view_data.details.notes),
        format!(
            "response (r to edit, enter sends): {}{response_marker}",
            view_data.details.response
        ),
        String::new(),
        "esc close".to_owned(),
    ]
    .join("\n")
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if let Some(status) = &state.status_line {
        return status.clone();
    }
    match state.mode {
        AppMode::Browse => match state.active_tab {
            TabKind::Dashboard | TabKind::Showcase => {
                "tab switch · ? help · q quit".to_owned()
            }
            TabKind::Requests => {
                "j/k move · enter details · A accept · R reject · / search · t type · s status"
                    .to_owned()
            }
            TabKind::Reviews => {
                "j/k move · A approve · R reject · d delete · / search · s status".to_owned()
            }
            _ => "j/k move · a add · e edit · d delete · / search · ? help".to_owned(),
        },
        AppMode::Search => format!(
            "searching {} -- enter/esc to finish",
            state.active_tab.label()
        ),
        AppMode::Form(kind) => format!("{} form -- enter save, esc cancel", kind.label()),
        AppMode::ConfirmDelete => "confirm delete -- y/n".to_owned(),
        AppMode::Details => match view_data.details.focus {
            DetailsFocus::Actions => "s status · n notes · r response · esc close".to_owned(),
            DetailsFocus::Notes => "editing notes -- esc done".to_owned(),
            DetailsFocus::Response => "editing response -- enter sends, esc done".to_owned(),
        },
    }
}

fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    let mut stars = STAR_FILLED.repeat(filled);
    stars.push_str(&STAR_EMPTY.repeat(5 - filled));
    stars
}

fn help_overlay_text() -> &'static str {
    "navigation\n\
     \x20 tab / shift-tab   switch tab (also h/l)\n\
     \x20 j/k               move row selection\n\
     \x20 /                 search the current list\n\
     \x20 esc               clear filters\n\
     \n\
     lists\n\
     \x20 a                 add (branches, products, users, roles)\n\
     \x20 e                 edit the selected row\n\
     \x20 d                 delete (asks for confirmation)\n\
     \x20 c / s / t         cycle category, status, and type filters\n\
     \n\
     requests & reviews\n\
     \x20 enter             open request details\n\
     \x20 A / R             accept or reject a pending item\n\
     \n\
     press any key to close"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::{
        AdminRuntime, DetailsFocus, InternalEvent, ViewData, cycle_filter, empty_state_text,
        filtered_products, format_stars, handle_key_event, parse_permissions, refresh_view_data,
        table_title,
    };
    use anyhow::Result;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use karat_app::{
        AppMode, AppState, Branch, DashboardCounts, DeleteTarget, FormPayload, FormTarget, Product,
        ProductStatus, RequestId, RequestStatus, Review, ReviewId, ReviewStatus, Role,
        ServiceRequest, TabKind, User,
    };
    use karat_store::{seed, RequestStore, ReviewStore};
    use std::sync::mpsc::{self, Sender};

    #[derive(Debug, Default)]
    struct TestRuntime {
        branches: karat_store::BranchStore,
        products: karat_store::ProductStore,
        requests: RequestStore,
        reviews: ReviewStore,
        users: karat_store::UserStore,
        roles: karat_store::RoleStore,
        applied_forms: Vec<(FormPayload, FormTarget)>,
        deletes: Vec<DeleteTarget>,
        emails: Vec<(RequestId, String)>,
    }

    impl TestRuntime {
        fn seeded() -> Self {
            Self {
                branches: seed::branches(),
                products: seed::products(),
                requests: seed::requests(),
                reviews: seed::reviews(),
                users: seed::users(),
                roles: seed::roles(),
                ..Self::default()
            }
        }
    }

    impl AdminRuntime for TestRuntime {
        fn dashboard_counts(&mut self) -> DashboardCounts {
            karat_store::dashboard_counts(
                &self.branches,
                &self.products,
                &self.requests,
                &self.reviews,
            )
        }

        fn list_branches(&mut self) -> Vec<Branch> {
            self.branches.list().to_vec()
        }

        fn list_products(&mut self) -> Vec<Product> {
            self.products.list().to_vec()
        }

        fn list_requests(&mut self) -> Vec<ServiceRequest> {
            self.requests.list().to_vec()
        }

        fn list_reviews(&mut self) -> Vec<Review> {
            self.reviews.list().to_vec()
        }

        fn list_users(&mut self) -> Vec<User> {
            self.users.list().to_vec()
        }

        fn list_roles(&mut self) -> Vec<Role> {
            self.roles.list().to_vec()
        }

        fn apply_form(&mut self, payload: &FormPayload, target: FormTarget) -> Result<()> {
            self.applied_forms.push((payload.clone(), target));
            if let (FormPayload::Branch(branch), FormTarget::Create) = (payload, target) {
                self.branches.create(&karat_store::NewBranch {
                    name: branch.name.clone(),
                    address: branch.address.clone(),
                    city: branch.city.clone(),
                    state: branch.state.clone(),
                    postal_code: branch.postal_code.clone(),
                    phone: branch.phone.clone(),
                    email: branch.email.clone(),
                    hours: branch.hours.clone(),
                    status: branch.status,
                });
            }
            Ok(())
        }

        fn delete(&mut self, target: &DeleteTarget) -> Result<bool> {
            self.deletes.push(target.clone());
            let removed = match target.kind {
                karat_app::DeleteKind::Branch => {
                    self.branches.remove(karat_app::BranchId::new(target.id))
                }
                karat_app::DeleteKind::Product => {
                    self.products.remove(karat_app::ProductId::new(target.id))
                }
                karat_app::DeleteKind::Review => {
                    self.reviews.remove(ReviewId::new(target.id))
                }
                karat_app::DeleteKind::User => {
                    self.users.remove(karat_app::UserId::new(target.id))
                }
                karat_app::DeleteKind::Role => {
                    self.roles.remove(karat_app::RoleId::new(target.id))
                }
            };
            Ok(removed)
        }

        fn set_request_status(&mut self, id: RequestId, status: RequestStatus) -> Result<bool> {
            Ok(self.requests.set_status(id, status))
        }

        fn set_review_status(&mut self, id: ReviewId, status: ReviewStatus) -> Result<bool> {
            Ok(self.reviews.set_status(id, status))
        }

        fn send_customer_email(&mut self, id: RequestId, message: &str) -> Result<()> {
            self.emails.push((id, message.to_owned()));
            Ok(())
        }
    }

    fn setup() -> (AppState, TestRuntime, ViewData, Sender<InternalEvent>) {
        let state = AppState::default();
        let mut runtime = TestRuntime::seeded();
        let mut view_data = ViewData::default();
        refresh_view_data(&mut runtime, &mut view_data);
        let (tx, _rx) = mpsc::channel();
        // The receiver is dropped on purpose; status-clear sends are
        // fire-and-forget and may fail silently.
        (state, runtime, view_data, tx)
    }

    fn press(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &Sender<InternalEvent>,
        code: KeyCode,
    ) -> bool {
        handle_key_event(
            state,
            runtime,
            view_data,
            tx,
            KeyEvent::new(code, KeyModifiers::NONE),
        )
    }

    fn go_to_tab(
        state: &mut AppState,
        runtime: &mut TestRuntime,
        view_data: &mut ViewData,
        tx: &Sender<InternalEvent>,
        tab: TabKind,
    ) {
        while state.active_tab != tab {
            press(state, runtime, view_data, tx, KeyCode::Tab);
        }
    }

    #[test]
    fn quit_from_browse_mode() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        assert!(press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('q')));
    }

    #[test]
    fn search_typing_narrows_the_product_list() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Products);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('/'));
        assert_eq!(state.mode, AppMode::Search);
        for ch in "gold".chars() {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(ch));
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);

        assert_eq!(state.mode, AppMode::Browse);
        let names: Vec<&str> = filtered_products(&view_data)
            .into_iter()
            .map(|product| product.name.as_str())
            .collect();
        assert_eq!(names, vec!["Gold Chain Necklace"]);
    }

    #[test]
    fn escape_clears_filters() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Products);
        view_data.filters.product.search = "gold".to_owned();

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Esc);
        assert!(view_data.filters.product.search.is_empty());
        assert_eq!(filtered_products(&view_data).len(), 2);
    }

    #[test]
    fn delete_requires_confirmation_and_cancel_keeps_the_row() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Branches);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('d'));
        assert_eq!(state.mode, AppMode::ConfirmDelete);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('n'));
        assert_eq!(state.mode, AppMode::Browse);
        assert!(runtime.deletes.is_empty());
        assert_eq!(runtime.branches.len(), 2);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('d'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('y'));
        assert_eq!(runtime.deletes.len(), 1);
        assert_eq!(runtime.branches.len(), 1);
        assert_eq!(view_data.branches.len(), 1);
    }

    #[test]
    fn role_in_use_never_reaches_the_gate() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Roles);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('d'));
        assert_eq!(state.mode, AppMode::Browse);
        assert!(state.delete.pending().is_none());
        assert!(runtime.deletes.is_empty());
        assert_eq!(runtime.roles.len(), 3);
        assert!(
            state
                .status_line
                .as_deref()
                .is_some_and(|line| line.contains("assigned user"))
        );
    }

    #[test]
    fn create_branch_through_the_form_overlay() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Branches);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('a'));
        assert!(matches!(state.mode, AppMode::Form(_)));

        // Submitting the blank form stays open with errors.
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert!(matches!(state.mode, AppMode::Form(_)));
        assert!(!state.form.errors().is_empty());
        assert!(runtime.applied_forms.is_empty());

        let fills = [
            "Test", "1 St", "Pune", "MH", "411001", "+91 1", "a@b.com",
        ];
        for (index, text) in fills.iter().enumerate() {
            for ch in text.chars() {
                press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(ch));
            }
            if index < fills.len() - 1 {
                press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Tab);
            }
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);

        assert_eq!(state.mode, AppMode::Browse);
        assert_eq!(runtime.applied_forms.len(), 1);
        assert_eq!(runtime.branches.len(), 3);
        let created = &runtime.branches.list()[2];
        assert_eq!(created.name, "Test");
        assert_eq!(created.status, karat_app::BranchStatus::Active);
    }

    #[test]
    fn quick_accept_updates_a_pending_request() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Requests);

        // Seeded row 0 is pending.
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('A'));
        assert_eq!(
            runtime.requests.list()[0].status,
            RequestStatus::Accepted
        );

        // The second row is already accepted; rejecting it is refused.
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('j'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('R'));
        assert_eq!(
            runtime.requests.list()[1].status,
            RequestStatus::Accepted
        );
    }

    #[test]
    fn details_overlay_sends_customer_email() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Requests);

        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert_eq!(state.mode, AppMode::Details);

        // An empty response is refused.
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('r'));
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert!(runtime.emails.is_empty());
        assert_eq!(view_data.details.focus, DetailsFocus::Response);

        for ch in "On it".chars() {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char(ch));
        }
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);
        assert_eq!(runtime.emails.len(), 1);
        assert_eq!(runtime.emails[0].1, "On it");
        assert!(view_data.details.response.is_empty());
    }

    #[test]
    fn details_status_cycles_without_restriction() {
        let (mut state, mut runtime, mut view_data, tx) = setup();
        go_to_tab(&mut state, &mut runtime, &mut view_data, &tx, TabKind::Requests);
        press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Enter);

        // Pending -> Accepted -> ... -> Completed -> Pending again.
        for expected in [
            RequestStatus::Accepted,
            RequestStatus::Rejected,
            RequestStatus::InProgress,
            RequestStatus::Completed,
            RequestStatus::Pending,
        ] {
            press(&mut state, &mut runtime, &mut view_data, &tx, KeyCode::Char('s'));
            assert_eq!(runtime.requests.list()[0].status, expected);
        }
    }

    #[test]
    fn cycle_filter_walks_all_then_back_to_none() {
        let mut current: Option<ProductStatus> = None;
        let mut seen = Vec::new();
        for _ in 0..=ProductStatus::ALL.len() {
            current = cycle_filter(current, &ProductStatus::ALL);
            seen.push(current);
        }
        assert_eq!(seen[0], Some(ProductStatus::Published));
        assert_eq!(seen[ProductStatus::ALL.len() - 1], Some(ProductStatus::OutOfStock));
        assert_eq!(seen[ProductStatus::ALL.len()], None);
    }

    #[test]
    fn empty_state_distinguishes_no_data_from_narrow_filters() {
        let (_state, mut runtime, mut view_data, _tx) = setup();
        view_data.filters.product.search = "zzz".to_owned();
        let message = empty_state_text(&view_data, TabKind::Products);
        assert!(message.contains("adjust your search"));

        runtime.products = karat_store::ProductStore::new();
        refresh_view_data(&mut runtime, &mut view_data);
        let message = empty_state_text(&view_data, TabKind::Products);
        assert!(message.contains("press a to add"));

        let message = empty_state_text(&view_data, TabKind::Requests);
        assert!(!message.contains("press a"));
    }

    #[test]
    fn table_title_reports_filtered_counts() {
        let (state, _runtime, mut view_data, _tx) = setup();
        view_data.filters.product.search = "gold".to_owned();
        let title = table_title(&state, &view_data, TabKind::Products);
        assert!(title.starts_with("products 1/2"));
        assert!(title.contains("search:gold"));
    }

    #[test]
    fn star_rendering() {
        assert_eq!(format_stars(5), "★★★★★");
        assert_eq!(format_stars(4), "★★★★☆");
        assert_eq!(format_stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn permissions_parse_from_comma_separated_text() {
        assert_eq!(
            parse_permissions("products, reviews,,  requests "),
            vec!["products", "reviews", "requests"]
        );
        assert!(parse_permissions("   ").is_empty());
    }
}
