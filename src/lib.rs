//! # Succinct String Dictionary
//!
//! *A static set of byte strings, a few bits per trie node.*
//!
//! ## Intuition First
//!
//! Picture a phone book compressed down to its bare branching structure.
//! A pointer-based trie spends a machine word (or several) per node just to
//! say "this node's children live over there". For a dictionary of millions
//! of keys the pointers dwarf the keys.
//!
//! A LOUDS trie throws the pointers away. The tree shape is flattened into
//! a bit sequence — each node writes one 0 per child and then a closing 1,
//! in breadth-first order — and parent/child hops become *rank* and
//! *select* arithmetic over that sequence. The node "address" is nothing
//! but a position in the bit vector.
//!
//! ## The Problem
//!
//! A string dictionary needs four things at once:
//! - **Membership**: is this byte string a key, and which one ($O(|q|)$)?
//! - **Prefix queries**: which keys prefix a query; which keys a query
//!   prefixes?
//! - **Reverse lookup**: key id back to bytes, for decoding.
//! - **Space**: close to the entropy of the key set, not a word per node.
//!
//! ## Historical Context
//!
//! ```text
//! 1959  de la Briandais  Tries as linked structures
//! 1968  Morrison         PATRICIA: path compression for suffixes
//! 1989  Jacobson         LOUDS: trees in 2n + o(n) bits with rank/select
//! 2006  Delpratt et al.  Engineering LOUDS for practical use
//! 2008  Okanohara        Practical entropy-compressed rank/select
//! 2011  Yata             marisa-trie: recursive tail compression
//! ```
//!
//! Jacobson's observation was that an ordered tree is determined by its
//! level-order degree sequence, and that unary-coding the degrees yields a
//! bit vector on which rank and select recover every navigation step a
//! pointer machine would take.
//!
//! ## Mathematical Formulation
//!
//! For a trie of $n$ nodes the shape costs $2n + o(n)$ bits; one terminal
//! bit and one tail bit per node cost $2n$ more; edge labels cost $8$ bits
//! per non-root node. Key identifiers are ranks over the terminal vector,
//! so they are dense in $[0, N)$ for $N$ keys and need no storage at all.
//!
//! Single-child suffix chains are cut out entirely: the suffix is stored
//! once as a *tail* string, and tails can themselves be folded into a
//! second LOUDS trie over the reversed tails, sharing common endings.
//!
//! ## Complexity Analysis
//!
//! - **Lookup**: $O(|q| \cdot \sigma)$ where $\sigma$ bounds the sibling
//!   scan; rank/select themselves are $O(1)$.
//! - **Build**: $O(L \log L)$ for sorting $L$ input bytes, then one
//!   breadth-first pass.
//! - **Space**: a few bits per node plus the tail bytes.
//!
//! ## What Could Go Wrong
//!
//! 1. **Staticity**: there is no insert or delete. Rebuilding is the only
//!    mutation, which is why construction is kept a single cheap pass.
//! 2. **Identifier stability**: ids are ranks, so they are stable for the
//!    life of a trie but not across rebuilds with different key sets.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`Trie`**: the dictionary — exact match, common-prefix and
//!   predictive search, id-to-key decoding, byte-buffer round-trips.
//! - **`BitVector`**: the rank/select workhorse underneath.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Space-efficient Static Trees and Graphs."
//! - Delpratt, O., Rahman, N., & Raman, R. (2006). "Engineering the LOUDS
//!   Succinct Tree Representation."
//! - Yata, S. (2011). "Dictionary Compression by Nesting Prefix/Patricia
//!   Tries."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitvec;
mod builder;
mod codec;
pub mod error;
mod tail;
pub mod trie;

pub use bitvec::{BitVector, BitVectorBuilder};
pub use error::{Error, Result};
pub use trie::{Cursor, Match, Step, Trie, NOT_FOUND};
