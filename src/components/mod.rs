//! UI Components
//!
//! Reusable Leptos components.

mod busy_spinner;
mod create_list_prompt;
mod task_entry_form;
mod task_list;
mod wallet_bar;

pub use busy_spinner::BusySpinner;
pub use create_list_prompt::CreateListPrompt;
pub use task_entry_form::TaskEntryForm;
pub use task_list::TaskList;
pub use wallet_bar::WalletBar;
