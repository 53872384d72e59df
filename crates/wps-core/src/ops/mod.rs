pub mod options;
pub mod rule_set;
pub mod snippet_store;

pub use options::{MemoryOptionStore, OptionStore};
pub use rule_set::RuleSet;
pub use snippet_store::SnippetStore;
