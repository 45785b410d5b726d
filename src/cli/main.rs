use std::{
    fs::File,
    io::{BufReader, BufWriter},
};

use clap::Parser;
use otter_res::{
    config::Config,
    context::Context,
    io::{read_problem, write_trace},
    reports::Report,
};

mod args;

use args::Args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let config: Config = args.config();

    println!("c Reading problem from {:?}", args.input);

    let file = match File::open(&args.input) {
        Ok(file) => file,
        Err(e) => {
            println!("c Failed to open {:?}: {e}", args.input);
            std::process::exit(1);
        }
    };

    let problem = match read_problem(BufReader::new(file)) {
        Ok(problem) => problem,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let mut the_context = Context::from_config(config);
    for clause in problem.clauses {
        the_context.tell(clause);
    }

    println!("c Asking: {}", problem.query);
    let trace = the_context.ask_expression(&problem.query);

    println!("c {}", the_context.counters);

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && std::fs::create_dir_all(parent).is_err() {
            println!("c Failed to create {parent:?}");
            std::process::exit(2);
        }
    }

    let written = match File::create(&args.output) {
        Ok(file) => write_trace(&trace, &mut BufWriter::new(file)),
        Err(e) => Err(otter_res::types::err::ErrorKind::Output(e.kind())),
    };
    if let Err(e) = written {
        println!("c Failed to write {:?}: {e}", args.output);
        std::process::exit(2);
    }

    if trace.report == Report::Entailed && args.proof {
        match the_context.refutation_proof() {
            Some(proof) => print!("{proof}"),
            None => println!("c No proof was recorded"),
        }
    }

    println!("s {}", trace.report);
}
