//! cheatsheet-catalog - Content catalog for the Role Context Manager cheatsheet
//!
//! This crate holds the single source of truth that every cheatsheet
//! renderer serializes: lifecycle phases with their commands and agents,
//! the scope explanation, quick-reference tables, usage patterns and the
//! SessionStart hook example.
//!
//! All content is `&'static` data. Tables that summarize other parts of the
//! catalog (the slash command table, the agent table, the hook settings
//! JSON) are derived on demand so they cannot drift from the entries they
//! summarize.
//!
//! # Example
//!
//! ```
//! use cheatsheet_catalog::{catalog, SectionId};
//!
//! let catalog = catalog();
//! assert_eq!(catalog.commands().count(), 11);
//! assert_eq!(SectionId::ALL[0].anchor(), "setup");
//! ```

mod content;
pub mod inline;
pub mod model;

pub use content::CATALOG;
pub use inline::{plain_text, Inline, Rich};
pub use model::{
    AgentEntry, Catalog, CommandEntry, CommandRow, Detail, Flag, FlagLayout, FooterLine,
    HookCommand, HookOutcome, HookSection, Pattern, Phase, ReferenceRow, ReferenceSection,
    ScopeRow, ScopeSection, SectionId,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The Role Context Manager cheatsheet catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
