//! Utility vocabularies - one closed enum per playground axis
//!
//! Each axis type:
//! - `class()` → the class a visitor copies
//! - `to_css()` → inline declarations the preview renders in its place
//! - `ALL` / `CHOICES` → closed set, in display order

pub mod class;
pub mod accessibility;
pub mod alignment;
pub mod border;
pub mod flex;
pub mod spacing;
pub mod transform;

pub use accessibility::ScreenReader;
pub use alignment::{JustifyItems, JustifySelf};
pub use border::{BorderColor, BorderRadius, BorderStyle, BorderSwatch, BorderWidth};
pub use class::{Choice, UtilityClass};
pub use flex::{AlignItems, Flex, FlexBasis, FlexDirection, FlexGrow, FlexShrink, FlexWrap, JustifyContent};
pub use spacing::{ContainerWidth, FlowDirection, GapMode, GapSize, ItemCount, LayoutMode, gap_rule};
pub use transform::{Duration, Easing, Skew, Translate};
