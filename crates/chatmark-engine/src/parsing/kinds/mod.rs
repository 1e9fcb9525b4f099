//! # Markup Kinds
//!
//! Types that own their syntax delimiters. The segment scanner, line
//! classifier and emphasis pass ask these types for markers; they never
//! hardcode a backtick or asterisk themselves.
//!
//! - **`CodeFence`**: `FENCE = "```"` - raw zone spanning lines
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone within text
//! - **`Emphasis`**: strong/em rules with their marker patterns
//! - **`Bullet`**: `*`, `-`, `+` list item markers

pub mod bullet;
pub mod code_fence;
pub mod code_span;
pub mod emphasis;

pub use bullet::Bullet;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, EmphasisRule};
