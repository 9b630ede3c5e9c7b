//! tagnotes Notes - Release note generation
//!
//! This crate classifies commits by the ticket or pull request they
//! reference, resolves a title for each reference and assembles the
//! deduplicated markdown release note.

pub mod assembler;
pub mod generator;
pub mod parser;
pub mod resolver;
pub mod types;

pub use assembler::NoteAssembler;
pub use generator::NotesGenerator;
pub use parser::{ParserRegistry, PullRequestParser, ReferenceParser, TrackerParser};
pub use resolver::{HtmlTitleResolver, TitleResolver};
pub use types::{NoteEntry, Reference, ReferenceKind, ReleaseDocument, TitleResult};
