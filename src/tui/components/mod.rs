//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: Top status line with backend URL and fetch status
//! - `TabBar`: One tab per endpoint with record counts
//! - `SearchBar`: Search input; reports the full new value on each keystroke
//! - `ErrorBanner`: Fetch error with a retry control
//! - `StatsFooter`: Per-endpoint record counts
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! - `RecordList`: Filtered rows with selection and click hit areas
//! - `DetailModal`: Scrollable JSON dump of the selected record
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing `App`. This makes dependencies explicit and components
//! testable with `TestBackend`.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── tab_bar.rs       (Endpoint tabs)
//! ├── search_bar.rs    (Search input)
//! ├── error_banner.rs  (Error + retry)
//! ├── record_list.rs   (List renderer)
//! ├── record_row.rs    (Per-endpoint row layouts)
//! ├── detail_modal.rs  (Item details overlay)
//! └── stats_footer.rs  (Data statistics)
//! ```

pub mod detail_modal;
pub mod error_banner;
pub mod record_list;
pub mod record_row;
pub mod search_bar;
pub mod stats_footer;
pub mod tab_bar;
pub mod title_bar;

pub use detail_modal::{DetailModal, DetailModalState, ModalClick};
pub use error_banner::ErrorBanner;
pub use record_list::{RecordList, RecordListState};
pub use search_bar::SearchBar;
pub use stats_footer::{StatEntry, StatsFooter};
pub use tab_bar::{TabBar, TabInfo};
pub use title_bar::TitleBar;
