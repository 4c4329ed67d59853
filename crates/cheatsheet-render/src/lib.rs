//! cheatsheet-render - HTML and Markdown output for the cheatsheet
//!
//! Both renderers walk the same [`cheatsheet_catalog::Catalog`] and emit
//! the same section structure, so the two artifacts stay in sync without
//! any shared literal text.
//!
//! # Example
//!
//! ```
//! use cheatsheet_catalog::catalog;
//! use cheatsheet_render::{render_html, render_markdown};
//!
//! let md = render_markdown(catalog());
//! assert!(md.starts_with("# Role Context Manager - Cheatsheet\n"));
//!
//! let html = render_html(catalog());
//! assert!(html.contains("<h1 id=\"setup\">Initial Setup Phase</h1>"));
//! ```

pub mod html;
pub mod markdown;
mod style;

pub use html::{escape_html, render_html, HtmlRenderer};
pub use markdown::{render_markdown, slugify, MarkdownRenderer};
pub use style::STYLESHEET;
