//! One-shot data population routines, run through the `seed-up` and
//! `seed-down` binary subcommands after schema migrations have been applied.

pub mod occasions;
