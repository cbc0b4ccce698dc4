//! Headless panel core (state/action/effect).

pub mod action;
pub mod effect;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use state::{
    ConfirmDialogState, ContextMenuEntry, ContextMenuState, ExplorerState, ImportPickerState,
    InputDialogKind, InputDialogState, PanelState, PendingAction, UiState,
};
pub use store::{DispatchResult, Store};
