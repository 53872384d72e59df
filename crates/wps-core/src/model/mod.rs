pub mod position;
pub mod product;
pub mod rule;
pub mod snippet;

pub use position::{HookStyle, PositionEntry};
pub use product::{PageContext, ProductContext};
pub use rule::{PlacementRule, RawRule, SnippetRef};
pub use snippet::Snippet;
