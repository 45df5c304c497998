//! The huffman_coding module builds the prefix-code tree and the code tables
//! for the huffzip codec.
//!
//! Tree construction is the classic greedy merge: every symbol that occurs
//! in the input becomes a weighted leaf in a min-priority queue, and the two
//! lightest nodes are repeatedly merged until a single root remains. Codes
//! are then the root-to-leaf paths, which makes the code set prefix-free by
//! construction.
//!
//! Ties between equal-weight nodes are broken by an insertion sequence
//! number (the symbol value for leaves), so the same input always produces
//! the same tree and the same packed output.

pub mod codebook;
pub mod huffman;
