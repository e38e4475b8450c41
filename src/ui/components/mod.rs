//! Reusable UI Components
//!
//! Small building blocks shared by the header, post cards, the assistant
//! panel and the New Post form.
//!
//! ## Components
//!
//! - `Button` - Bracketed clickable label that registers a hit area
//! - `TabSelector` - Horizontal tab row with arrow markers
//! - `InputField` - Bordered text input with focus handling and placeholder
//! - `StatusIndicator` - Spinner and info indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod button;
mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use button::{button_width, render_button, ButtonKind};
pub use dialog_frame::{dialog_rect, render_dialog_frame, DialogFrameConfig};
pub use input_field::{input_lines, render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, spinner_frame_for_tick, StatusIndicatorType};
pub use tab_selector::{place_tab_row, render_tab_selector, TabItem, TabRow};
