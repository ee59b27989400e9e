// Components module - reusable UI building blocks
//
// Shell components are rendered in every frame:
// - Title bar: App name, source, loading spinner
// - Search bar: Search stub input
// - Status bar: Feed counters and key hints
// - Logs panel: System log entries (toggleable)
//
// The cards panel is the TUI's Renderer for feed snapshots.

pub mod cards_panel;
pub mod logs_panel;
pub mod scrollbar;
pub mod search_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use cards_panel::CardsPanel;
pub use toast::Toast;
