use otter_res::{
    config::{Config, PairSelection},
    context::Context,
    db::derivation::Source,
    reports::Report,
    structures::clause::Clause,
    types::err::{self, ErrorKind},
};

mod basic {

    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.tell_string("A").is_ok());
        assert_eq!(the_context.ask("A").unwrap().report, Report::Entailed);
        assert_eq!(the_context.ask("-A").unwrap().report, Report::NotEntailed);
    }

    #[test]
    fn contradiction_entails_everything() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.tell_string("A").is_ok());
        assert!(the_context.tell_string("-A").is_ok());
        for query in ["B", "-B", "B AND -B", "C => D"] {
            assert_eq!(the_context.ask(query).unwrap().report, Report::Entailed);
        }
    }

    #[test]
    fn tautology_is_entailed_by_nothing() {
        let mut the_context = Context::from_config(Config::default());
        let trace = the_context.ask("A OR -A").unwrap();
        assert_eq!(trace.report, Report::Entailed);
        assert_eq!(trace.rounds.len(), 1);
    }

    #[test]
    fn malformed_clause() {
        let mut the_context = Context::from_config(Config::default());
        assert_eq!(
            the_context.tell_string("A OR AB"),
            Err(ErrorKind::Clause(err::ClauseError::Literal("AB".to_string())))
        );
        assert_eq!(
            the_context.tell_string("A OR"),
            Err(ErrorKind::Clause(err::ClauseError::Empty))
        );
        assert!(the_context.kb.is_empty());
    }

    #[test]
    fn malformed_query() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.tell_string("A").is_ok());
        assert_eq!(
            the_context.ask("(A AND B"),
            Err(ErrorKind::Parse(err::ParseError::UnmatchedOpen))
        );
        assert_eq!(
            the_context.ask("A ? B"),
            Err(ErrorKind::Parse(err::ParseError::Character('?')))
        );
        assert_eq!(the_context.counters.rounds, 0);
    }

    #[test]
    fn duplicates_kept_in_kb() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.tell_string("A OR B").is_ok());
        assert!(the_context.tell_string("B OR A").is_ok());
        let copy = Clause::from_literals(the_context.kb.clauses()[0].literals().copied());
        the_context.tell(copy);
        assert_eq!(the_context.kb.len(), 3);

        assert_eq!(the_context.ask("A OR B").unwrap().report, Report::Entailed);
    }

    #[test]
    fn proof() {
        let mut config = Config::default();
        config.record_derivations.value = true;

        let mut the_context = Context::from_config(config);
        assert!(the_context.tell_string("-P OR Q").is_ok());
        assert!(the_context.tell_string("P").is_ok());
        assert_eq!(the_context.ask("Q").unwrap().report, Report::Entailed);

        let proof = the_context.refutation_proof().unwrap();
        let steps = proof
            .steps
            .iter()
            .map(|step| step.clause.to_string())
            .collect::<Vec<_>>();
        assert_eq!(steps.len(), 5);
        assert_eq!(steps.last().unwrap(), "{}");
        assert!(steps.contains(&"-Q".to_string()));

        let premises = proof
            .steps
            .iter()
            .filter(|step| matches!(step.source, Source::KnowledgeBase | Source::NegatedQuery))
            .count();
        assert_eq!(premises, 3);
    }

    #[test]
    fn no_proof_without_recording() {
        let mut the_context = Context::from_config(Config::default());
        assert!(the_context.tell_string("A").is_ok());
        assert_eq!(the_context.ask("A").unwrap().report, Report::Entailed);
        assert!(the_context.refutation_proof().is_none());
    }

    #[test]
    fn frontier_counts_fewer_pairs() {
        let kb = ["A OR B", "-A OR C", "-B OR C"];

        let mut all = Context::from_config(Config::default());
        let mut config = Config::default();
        config.pair_selection.value = PairSelection::Frontier;
        let mut frontier = Context::from_config(config);

        for clause in kb {
            assert!(all.tell_string(clause).is_ok());
            assert!(frontier.tell_string(clause).is_ok());
        }

        assert_eq!(all.ask("C").unwrap(), frontier.ask("C").unwrap());
        assert!(frontier.counters.pairs < all.counters.pairs);
        assert_eq!(frontier.counters.rounds, all.counters.rounds);
    }
}
