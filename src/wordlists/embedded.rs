//! Embedded dictionary
//!
//! Generated at build time from `data/words.txt`.

include!(concat!(env!("OUT_DIR"), "/words.rs"));
