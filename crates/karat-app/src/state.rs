// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{FieldErrors, FormKind, FormPayload, TabKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Browse,
    Search,
    Form(FormKind),
    ConfirmDelete,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    Branch,
    Product,
    Review,
    User,
    Role,
}

impl DeleteKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Product => "product",
            Self::Review => "review",
            Self::User => "user",
            Self::Role => "role",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub kind: DeleteKind,
    pub id: i64,
    pub label: String,
}

/// The one form overlay a screen may have open: which record it is
/// bound to, the payload being edited, and the last validation result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    payload: Option<FormPayload>,
    target: Option<FormTarget>,
    errors: FieldErrors,
}

impl FormSession {
    pub fn is_open(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&FormPayload> {
        self.payload.as_ref()
    }

    pub fn target(&self) -> Option<FormTarget> {
        self.target
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn open(&mut self, payload: FormPayload, target: FormTarget) {
        self.payload = Some(payload);
        self.target = Some(target);
        self.errors.clear();
    }

    fn close(&mut self) {
        self.payload = None;
        self.target = None;
        self.errors.clear();
    }
}

/// Two-step destructive guard. A removal is only ever performed in
/// response to a `DeleteConfirmed` event, and that event only fires for
/// a target previously staged here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteGate {
    pending: Option<DeleteTarget>,
}

impl DeleteGate {
    pub fn pending(&self) -> Option<&DeleteTarget> {
        self.pending.as_ref()
    }

    fn stage(&mut self, target: DeleteTarget) {
        self.pending = Some(target);
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn take(&mut self) -> Option<DeleteTarget> {
        self.pending.take()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub mode: AppMode,
    pub active_tab: TabKind,
    pub status_line: Option<String>,
    pub form: FormSession,
    pub delete: DeleteGate,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browse,
            active_tab: TabKind::Dashboard,
            status_line: None,
            form: FormSession::default(),
            delete: DeleteGate::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    NextTab,
    PrevTab,
    EnterSearch,
    LeaveSearch,
    OpenCreate(FormKind),
    OpenEdit { target_id: i64, payload: FormPayload },
    SetFormPayload(FormPayload),
    SubmitForm,
    CancelForm,
    RequestDelete(DeleteTarget),
    CancelDelete,
    ConfirmDelete,
    OpenDetails,
    CloseDetails,
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    ModeChanged(AppMode),
    TabChanged(TabKind),
    FormAccepted {
        payload: FormPayload,
        target: FormTarget,
    },
    FormBlocked,
    DeleteConfirmed(DeleteTarget),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::NextTab => self.rotate_tab(1),
            AppCommand::PrevTab => self.rotate_tab(-1),
            AppCommand::EnterSearch => {
                if self.mode != AppMode::Browse {
                    return Vec::new();
                }
                self.set_mode(AppMode::Search)
            }
            AppCommand::LeaveSearch => {
                if self.mode != AppMode::Search {
                    return Vec::new();
                }
                self.set_mode(AppMode::Browse)
            }
            AppCommand::OpenCreate(kind) => {
                self.form.open(FormPayload::blank_for(kind), FormTarget::Create);
                self.set_mode(AppMode::Form(kind))
            }
            AppCommand::OpenEdit { target_id, payload } => {
                let kind = payload.kind();
                self.form.open(payload, FormTarget::Edit(target_id));
                self.set_mode(AppMode::Form(kind))
            }
            AppCommand::SetFormPayload(payload) => {
                let kind_matches = self
                    .form
                    .payload()
                    .is_some_and(|current| current.kind() == payload.kind());
                if kind_matches {
                    self.form.payload = Some(payload);
                }
                Vec::new()
            }
            AppCommand::SubmitForm => self.submit_form(),
            AppCommand::CancelForm => {
                if !self.form.is_open() {
                    return Vec::new();
                }
                self.form.close();
                self.set_mode(AppMode::Browse)
            }
            AppCommand::RequestDelete(target) => {
                if self.mode != AppMode::Browse {
                    return Vec::new();
                }
                self.delete.stage(target);
                self.set_mode(AppMode::ConfirmDelete)
            }
            AppCommand::CancelDelete => {
                if self.delete.pending().is_none() {
                    return Vec::new();
                }
                self.delete.cancel();
                self.set_mode(AppMode::Browse)
            }
            AppCommand::ConfirmDelete => {
                let Some(target) = self.delete.take() else {
                    return Vec::new();
                };
                let mut events = vec![AppEvent::DeleteConfirmed(target)];
                events.extend(self.set_mode(AppMode::Browse));
                events
            }
            AppCommand::OpenDetails => {
                if self.mode != AppMode::Browse {
                    return Vec::new();
                }
                self.set_mode(AppMode::Details)
            }
            AppCommand::CloseDetails => {
                if self.mode != AppMode::Details {
                    return Vec::new();
                }
                self.set_mode(AppMode::Browse)
            }
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) -> AppEvent {
        let message = message.into();
        self.status_line = Some(message.clone());
        AppEvent::StatusUpdated(message)
    }

    fn submit_form(&mut self) -> Vec<AppEvent> {
        let Some(payload) = self.form.payload().cloned() else {
            return Vec::new();
        };
        let errors = payload.validate();
        if !errors.is_empty() {
            self.form.errors = errors;
            return vec![AppEvent::FormBlocked];
        }

        let target = self.form.target().unwrap_or(FormTarget::Create);
        self.form.close();
        let mut events = vec![AppEvent::FormAccepted { payload, target }];
        events.extend(self.set_mode(AppMode::Browse));
        events
    }

    fn rotate_tab(&mut self, delta: isize) -> Vec<AppEvent> {
        if !matches!(self.mode, AppMode::Browse | AppMode::Search) {
            return Vec::new();
        }
        let tabs = TabKind::ALL;
        let current = tabs
            .iter()
            .position(|tab| *tab == self.active_tab)
            .unwrap_or(0) as isize;
        let len = tabs.len() as isize;
        let next = (current + delta).rem_euclid(len) as usize;
        self.active_tab = tabs[next];
        vec![AppEvent::TabChanged(self.active_tab)]
    }

    fn set_mode(&mut self, mode: AppMode) -> Vec<AppEvent> {
        self.mode = mode;
        vec![AppEvent::ModeChanged(mode)]
    }
}
