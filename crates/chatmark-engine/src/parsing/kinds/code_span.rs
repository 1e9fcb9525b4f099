/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no emphasis or list parsing happens inside
/// them. A span needs at least one byte between its backticks.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
    /// Two adjacent ticks: an empty span, which is not code.
    pub const EMPTY: &'static [u8] = b"``";
}
