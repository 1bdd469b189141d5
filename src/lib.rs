//! # blog-nav
//!
//! Post-processes a rendered blog page with previous/next navigation. The
//! page's own JSON representation (the page URL with `?format=json`) carries
//! metadata for the neighboring posts in its collection; this crate fetches
//! it, builds a navigation block, and inserts the block into the page's HTML.
//!
//! # Architecture: One Pass, Six Stages
//!
//! ```text
//! resolve config → fetch page data → resolve theme
//!                → build navigation tree → render markup → insert into page
//! ```
//!
//! The pipeline runs at most once per page ([`pipeline::Pipeline::run`]
//! consumes the pipeline) and absorbs every failure: a page without
//! pagination data, a dead endpoint, or hollow adjacent items all degrade to
//! "no navigation" with a diagnostic, never an error. The page stays usable
//! either way — navigation is an augmentation, not a dependency.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Defaults, caller overrides, shallow merge, TOML loading |
//! | [`data`] | Deserialized endpoint types: pagination and adjacent items |
//! | [`fetch`] | Data-URL derivation and retrieval behind the [`fetch::Fetch`] seam |
//! | [`theme`] | Theme token precedence: override → page annotation → fallback |
//! | [`thumbnail`] | Per-item thumbnail URL fallback chain |
//! | [`node`] | Typed in-memory navigation tree |
//! | [`builder`] | Eligibility rules and tree assembly |
//! | [`render`] | Maud serialization behind the [`render::Renderer`] seam |
//! | [`page`] | Host document: theme probe, target resolution, insertion |
//! | [`pipeline`] | Stage wiring and the absorb-everything failure policy |
//!
//! # Design Decisions
//!
//! ## Tree, Then Markup
//!
//! Navigation is assembled as a typed node tree ([`node`]) with no document
//! in sight, then serialized by a replaceable [`render::Renderer`]. Assembly
//! logic — eligibility, ordering, fallbacks — is tested on plain values;
//! only the thin rendering layer knows about markup at all.
//!
//! ## Explicit Configuration Injection
//!
//! The pipeline takes its [`config::NavConfig`] as an argument. There is no
//! ambient settings lookup: the CLI (or an embedding program) resolves
//! overrides once and hands the result in.
//!
//! ## Heuristic Thumbnail Extraction
//!
//! Thumbnails extracted from post bodies use a single ordered regex scan,
//! not a markup parser. The chain is documented in [`thumbnail`] and its
//! precedence is pinned by tests; a miss is a normal outcome, so the
//! heavier machinery would buy nothing.
//!
//! ## Best-Effort by Contract
//!
//! Every failure mode maps to an [`pipeline::AugmentOutcome`] variant and a
//! diagnostic on the `tracing` subscriber. The library never panics on bad
//! input and never mutates the document unless it has something to insert.

pub mod builder;
pub mod config;
pub mod data;
pub mod fetch;
pub mod node;
pub mod page;
pub mod pipeline;
pub mod render;
pub mod theme;
pub mod thumbnail;
