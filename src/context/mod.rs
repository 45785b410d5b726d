/*!
The context --- to which clauses are told and within which queries are asked.

A context binds a [Config] to a [KnowledgeBase], together with [Counters] and (optionally) the [DerivationGraph] of the most recent query.

# Example
```rust
# use otter_res::context::Context;
# use otter_res::config::Config;
# use otter_res::reports::Report;
let mut the_context = Context::from_config(Config::default());

assert!(the_context.tell_string("A OR B").is_ok());
assert!(the_context.tell_string("-A OR C").is_ok());
assert!(the_context.tell_string("-B OR C").is_ok());

let trace = the_context.ask("C").expect("a query");
assert_eq!(trace.report, Report::Entailed);

let trace = the_context.ask("A AND B").expect("a query");
assert_eq!(trace.report, Report::NotEntailed);

assert!(the_context.ask("C OR").is_err());
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        derivation::{DerivationGraph, Proof},
        knowledge_base::KnowledgeBase,
    },
    parse::parse_expression,
    reports::Trace,
    structures::{clause::Clause, expression::Expression},
    types::err::ErrorKind,
};

pub struct Context {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to the most recent query.
    pub counters: Counters,

    /// The knowledge base.
    /// See [db::knowledge_base](crate::db::knowledge_base) for details.
    pub kb: KnowledgeBase,

    /// The derivations of the most recent query, if recorded.
    pub derivations: Option<DerivationGraph>,
}

impl Context {
    /// A context with an empty knowledge base.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            kb: KnowledgeBase::default(),
            derivations: None,
        }
    }

    /// Tells `clause` to the knowledge base.
    pub fn tell(&mut self, clause: Clause) {
        self.kb.tell(clause);
    }

    /// Reads `string` as a clause and tells the clause to the knowledge base.
    pub fn tell_string(&mut self, string: &str) -> Result<(), ErrorKind> {
        self.kb.tell_string(string)?;
        Ok(())
    }

    /// Parses `query` and asks whether the query is entailed by the knowledge base.
    ///
    /// A query which does not parse is an error, and nothing else is done.
    pub fn ask(&mut self, query: &str) -> Result<Trace, ErrorKind> {
        let expression = parse_expression(query)?;
        Ok(self.ask_expression(&expression))
    }

    /// Asks whether `expression` is entailed by the knowledge base, by refutation of the clauses of its negation.
    pub fn ask_expression(&mut self, expression: &Expression) -> Trace {
        let negated_query = expression.clone().not().cnf();
        self.refute(&negated_query)
    }

    /// A proof of the empty clause from the most recent query, if the query was entailed and derivations were recorded.
    pub fn refutation_proof(&self) -> Option<Proof> {
        self.derivations.as_ref()?.refutation()
    }
}
