//! The tools module provides helper functions for the huffzip codec.
//!
//! The tools are:
//! - cli: Command line interface for the huffzip binary.
//! - freq_count: Frequency count over the input bytes.
//! - bitstring: Printable 0/1 rendering of a packed stream, for text-only
//!   channels. The byte form stays canonical.

pub mod bitstring;
pub mod cli;
pub mod freq_count;
