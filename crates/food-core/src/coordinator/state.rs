//! Page state types shared with the presentation layer.

use crate::domain::{FoodItem, MutationKind};
use crate::validation::FormErrors;

pub const LOAD_FAILED: &str = "Failed to load data. Please try again.";
pub const ADD_FAILED: &str = "Failed to add item.";
pub const UPDATE_FAILED: &str = "Failed to update item.";
pub const DELETE_FAILED: &str = "Failed to delete item.";
pub const INVALID_SELECTION: &str = "Invalid selection.";
pub const BUSY: &str = "Another change is still being saved.";

/// Load axis; error and loading can never coexist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Which modal is open, carrying the selected item for edit/delete
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveModal {
    #[default]
    Closed,
    Add,
    Edit(FoodItem),
    Delete(FoodItem),
}

impl ActiveModal {
    pub fn selected(&self) -> Option<&FoodItem> {
        match self {
            ActiveModal::Edit(item) | ActiveModal::Delete(item) => Some(item),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveModal::Closed)
    }

    /// Same kind of modal over the same item id
    pub fn same_target(&self, other: &ActiveModal) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
            && self.selected().map(|item| &item.id) == other.selected().map(|item| &item.id)
    }
}

/// Result of a form submission or delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    /// Rejected locally; nothing was sent
    Invalid(FormErrors),
    /// Rejected by the server, the transport, or the in-flight guard
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, SubmitOutcome::Saved)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owned copy of the page state for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub foods: Vec<FoodItem>,
    pub load: LoadState,
    pub pending: Option<MutationKind>,
    pub modal: ActiveModal,
    pub search: String,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            foods: Vec::new(),
            load: LoadState::Loading,
            pending: None,
            modal: ActiveModal::Closed,
            search: String::new(),
        }
    }
}

#[derive(Debug)]
pub(super) struct PageState {
    pub foods: Vec<FoodItem>,
    pub load: LoadState,
    pub pending: Option<MutationKind>,
    pub modal: ActiveModal,
    /// Sequence number of the newest list call
    pub issued: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            foods: Vec::new(),
            load: LoadState::Loading,
            pending: None,
            modal: ActiveModal::Closed,
            issued: 0,
        }
    }
}
