//! Angex - translatable-string extractor for AngularJS templates
//!
//! Angex is a CLI tool and library for extracting gettext messages from
//! AngularJS/HTML templates. It recognises `<translate>` tags, `translate`
//! directive attributes (with `translate-plural` and `translate-comment`),
//! and `{$ 'literal' | translate $}` filter expressions, and renders the
//! collected messages as a POT catalog.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Core template scanner producing message records
//! - `pot`: POT catalog building and rendering
//! - `scanner`: Template file discovery

pub mod cli;
pub mod config;
pub mod extract;
pub mod pot;
pub mod scanner;
