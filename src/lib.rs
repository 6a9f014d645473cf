//! redirectmatter: keep `redirect_from` aliases and `published` flags in
//! Markdown front matter up to date
//!
//! The content tree is first copied into a disposable, marker-guarded
//! destination; only that copy is edited. For every Markdown file in the
//! configured collections:
//!
//! - entries dated in the future get `published: false` and lose their
//!   `redirect_from` field;
//! - everything else gets `/<collection>/<slug>/` listed in `redirect_from`.
//!
//! Front matter is edited line by line, never re-serialized, so the rest of
//! the block and the whole body stay byte-identical.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use redirectmatter::{run, Config, Policy, Result};
//!
//! fn main() -> Result<()> {
//!     let config = Config::default();
//!     let summary = run(&config, &Policy::scheduled_today())?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```
//!
//! ## Editing a single block
//!
//! ```rust
//! use redirectmatter::FrontMatter;
//!
//! let mut fm = FrontMatter::from_text("title: Hello\nredirect_from: [/old/]\n");
//! assert!(fm.ensure_redirect("blog", "hello"));
//! assert_eq!(
//!     fm.to_text(),
//!     "title: Hello\nredirect_from:\n  - /old/\n  - /blog/hello/\n"
//! );
//! assert!(!fm.ensure_redirect("blog", "hello"));
//! ```

pub use crate::config::Config;
pub use crate::core::{Document, FrontMatter, Policy, RedirectBlock, RedirectStyle};
pub use crate::error::{RedirectError, Result};
pub use crate::io::{Stager, Staging};
pub use crate::ops::{run, Summary};

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod ops;
