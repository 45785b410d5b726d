//! A library for deciding whether a propositional query is entailed by a knowledge base of clauses.
//!
//! otter_res answers the question 'does the knowledge base entail the query?' by refutation.
//! The negation of the query is converted to conjunctive normal form, added to the clauses of the knowledge base, and resolution is applied round by round until either the empty clause is derived (the query is entailed) or no unseen clause can be derived (the query is not entailed).
//!
//! # Orientation
//!
//! The library is designed around a [context].
//! A context holds a [configuration](config), a [knowledge base](db::knowledge_base), and counters for the most recent query.
//!
//! - Formulas are [parsed](parse) from infix strings into an [expression](structures::expression) tree.
//! - Expressions are converted to clauses by a sequence of rewrites, see [cnf].
//! - The search itself is factored into [procedures]: resolution of a pair of clauses, and rounds of refutation.
//! - The result of a query is a [trace](reports::Trace), which [io] writes in a line-oriented format.
//!
//! # Example
//!
//! ```rust
//! # use otter_res::config::Config;
//! # use otter_res::context::Context;
//! # use otter_res::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! assert!(the_context.tell_string("A OR B").is_ok());
//! assert!(the_context.tell_string("-A OR C").is_ok());
//! assert!(the_context.tell_string("-B OR C").is_ok());
//!
//! let trace = the_context.ask("C").expect("well-formed query");
//! assert_eq!(trace.report, Report::Entailed);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) the rounds of a refutation can be followed with `RUST_LOG=resolution=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod cnf;
pub mod config;
pub mod context;
pub mod db;
pub mod io;
pub mod misc;
pub mod parse;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
