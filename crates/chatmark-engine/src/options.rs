use serde::{Deserialize, Serialize};

/// Switches for the optional formatting stages.
///
/// Escaping always runs. A disabled stage leaves its markers in the output
/// as literal (escaped) text. Every field defaults to `true`, so a partial
/// `[format]` table in the config file only needs the stages it turns off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Triple-backtick fenced blocks become `<pre><code>`.
    pub code_blocks: bool,
    /// Single-backtick spans become `<code>`.
    pub inline_code: bool,
    /// `**`/`__` strong and `*`/`_` em.
    pub emphasis: bool,
    /// Bullet lines grouped into `<ul>` runs.
    pub lists: bool,
    /// Join lines with `<br>` rather than a bare newline.
    pub line_breaks: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            code_blocks: true,
            inline_code: true,
            emphasis: true,
            lists: true,
            line_breaks: true,
        }
    }
}
