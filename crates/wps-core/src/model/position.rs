/// How a position's hook delivers content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStyle {
    /// Callback output is emitted verbatim at the insertion point
    Action,
    /// Callback receives the current value and returns the transformed value
    Filter,
}

impl HookStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookStyle::Action => "action",
            HookStyle::Filter => "filter",
        }
    }
}

/// A named insertion point on the product detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionEntry {
    pub key: String,
    pub label: String,
    pub hook: String,
    pub priority: i32,
    pub style: HookStyle,
}

impl PositionEntry {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        hook: impl Into<String>,
        priority: i32,
        style: HookStyle,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            hook: hook.into(),
            priority,
            style,
        }
    }

    pub fn is_filter_style(&self) -> bool {
        self.style == HookStyle::Filter
    }
}
