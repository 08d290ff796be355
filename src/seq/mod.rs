//! Analyses over nucleotide sequences.
//! Sequences are arbitrary text: there is no alphabet check, and only GC-content
//! treats non-A,C,G,T characters specially.

pub mod content;
pub mod count;
pub mod similarity;
pub mod disease;
pub mod motif;

pub use content::{gc_content, gc_percentage};
pub use count::mutation_check;
pub use similarity::{sequence_similarity, similarity_percentage};
pub use disease::{disease_detection, Finding};
