//! # Photo Catalog
//!
//! Turns a batch of product photographs into a printable catalog: a cover
//! page followed by A4 pages holding a 3×3 grid of photos, each labeled with
//! a sequential product code. A companion inventory sheet lists the same
//! codes with the photo file names and a stock count.
//!
//! # Pipeline
//!
//! ```text
//! 1. Collect   files / dirs       →  ordered photo list      (scan)
//! 2. Validate  title, base, list  →  codes + render input    (request, codes)
//! 3. Render    input + config     →  PDF bytes in memory     (catalog, render)
//! 4. Store     bytes              →  outputs/Title.pdf       (storage)
//! ```
//!
//! Rendering never touches the output directory. A catalog is either written
//! complete or not at all.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`codes`] | `{BASE}-{NNN}` code generation and suggested file names |
//! | [`layout`] | Grid math: cells, pages, the layout cursor, fit-to-box sizing |
//! | [`photo`] | Photo decoding and downsampling to RGB rasters |
//! | [`render`] | Drawing backend trait, text metrics, the printpdf backend |
//! | [`catalog`] | The catalog renderer: cover, grid pages, placeholders |
//! | [`inventory`] | Inventory rows and JSON export |
//! | [`scan`] | Expanding file and directory arguments into photos |
//! | [`request`] | Required-input validation before any rendering |
//! | [`batch`] | Several catalogs from one jobs file, rendered in parallel |
//! | [`storage`] | Atomic artifact writes |
//! | [`config`] | `catalog.toml` loading, merging over stock defaults, validation |
//! | [`types`] | Shared types (`ImageRef`) |
//! | [`output`] | CLI output formatting for progress and summaries |
//!
//! # Design Decisions
//!
//! ## Explicit Layout State
//!
//! Grid position lives in a [`layout::LayoutCursor`] owned by a single render
//! call. There are no global counters, so any number of catalogs can render at
//! once (see [`batch`]) without disturbing each other's pagination.
//!
//! ## Bad Photos Degrade, They Don't Abort
//!
//! A photo that fails to load becomes an `Error: <path>` line in its cell. The
//! code is still printed and the rest of the catalog renders. Only
//! configuration and backend failures abort a document, and they do so before
//! anything is written.
//!
//! ## Backend Trait
//!
//! The renderer draws through [`render::DocumentBackend`]. Production uses
//! printpdf with the built-in Helvetica faces, so no font files ship with the
//! binary. Unit tests swap in a recording mock and assert on exact positions
//! without parsing PDF.

pub mod batch;
pub mod catalog;
pub mod codes;
pub mod config;
pub mod inventory;
pub mod layout;
pub mod output;
pub mod photo;
pub mod render;
pub mod request;
pub mod scan;
pub mod storage;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
