//! Reusable UI components

pub mod chat_input;
pub mod chat_message;
pub mod drop_overlay;
pub mod file_list;
pub mod header;
pub mod loading;
pub mod toaster;

pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use drop_overlay::DropOverlay;
pub use file_list::AttachedFiles;
pub use header::Header;
pub use loading::{FullPageLoading, LoadingSpinner, TypingIndicator};
pub use toaster::Toaster;
