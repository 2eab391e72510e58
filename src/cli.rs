// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the pincer command-line interface.
//!
//! One subcommand per algorithm. Sequences are given as a comma-separated
//! list of integers (`"0,1,2,3,4"`); the searches additionally take a
//! `--target`. Results print in their lexical form by default, or as JSON
//! with `--json`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pincer",
    about = "Two-pointer scan algorithms over integer sequences",
    version
)]
pub struct Cli {
    /// Emit results as JSON instead of the lexical form
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reverse a sequence in place
    Reverse {
        /// Comma-separated integers, e.g. "0,1,2,3,4"
        sequence: String,
    },

    /// Move all zeroes to the tail of a sequence
    MoveZeroes {
        /// Comma-separated integers, e.g. "0,1,0,2"
        sequence: String,
    },

    /// Find a pair summing to a target in a sorted sequence
    TwoSum {
        /// Comma-separated integers, sorted non-decreasing
        sequence: String,

        /// The sum to search for
        #[arg(short, long)]
        target: i64,
    },

    /// Find a triplet summing to a target in a sorted sequence
    ThreeSum {
        /// Comma-separated integers, sorted non-decreasing
        sequence: String,

        /// The sum to search for
        #[arg(short, long)]
        target: i64,
    },
}
