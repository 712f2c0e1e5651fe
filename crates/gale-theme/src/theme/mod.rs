//! Design tokens and the rules for layering them.
//!
//! - [`TokenSet`] / [`ThemeTokens`]: ordered token maps with the
//!   category-scoped merge used for `theme.extend`
//! - [`ColorValue`]: color literal parsing, used by
//!   [`ThemeTokens::validate_colors`]

mod color;
mod tokens;

pub use color::{is_color_category, ColorValue, COLOR_CATEGORIES};
pub use tokens::{ThemeTokens, TokenSet};
