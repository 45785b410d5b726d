/*!
The line-oriented boundary of the library.

# Input

```none
<query>
<n>
<clause 1>
...
<clause n>
```

The query is a formula, see [parse](crate::parse).
Each clause is given in clause form, e.g. `A OR -B OR C`, and is told as is (not through [cnf](crate::cnf)).
Lines after the `n`th clause are ignored.

# Output

For each round of a refutation, a count of the clauses derived in the round followed by those clauses, one per line.
Then, the report: `YES`, `NO`, or `UNKNOWN`.

```rust
# use otter_res::io::{read_problem, write_trace};
# use otter_res::context::Context;
# use otter_res::config::Config;
let input = "A\n2\nA OR B\n-B\n";
let problem = read_problem(input.as_bytes()).expect("a problem");

let mut the_context = Context::from_config(Config::default());
for clause in problem.clauses {
    the_context.tell(clause);
}
let trace = the_context.ask_expression(&problem.query);

let mut output = vec![];
write_trace(&trace, &mut output).expect("a trace");
assert_eq!(String::from_utf8(output).expect("utf8"), "2\nA\nB\n1\n{}\nYES\n");
```
*/

use std::io::{BufRead, Write};

use crate::{
    parse::parse_expression,
    reports::Trace,
    structures::{clause::Clause, expression::Expression},
    types::err::{self, ErrorKind},
};

/// A query together with the clauses to tell before asking the query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub query: Expression,
    pub clauses: Vec<Clause>,
}

/// Reads the next line to `buffer`, without the line ending.
fn next_line(reader: &mut impl BufRead, buffer: &mut String, line: usize) -> Result<(), err::InputError> {
    buffer.clear();
    match reader.read_line(buffer) {
        Ok(0) => Err(err::InputError::MissingLine(line)),
        Ok(_) => {
            let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
            buffer.truncate(trimmed);
            Ok(())
        }
        Err(_) => Err(err::InputError::Read(line)),
    }
}

/// Reads a problem, failing at the first malformed line.
pub fn read_problem(mut reader: impl BufRead) -> Result<Problem, ErrorKind> {
    let mut buffer = String::with_capacity(1024);

    next_line(&mut reader, &mut buffer, 1)?;
    let query = parse_expression(buffer.trim()).map_err(err::InputError::Query)?;

    next_line(&mut reader, &mut buffer, 2)?;
    let count = match buffer.trim().parse::<usize>() {
        Ok(count) => count,
        Err(_) => return Err(err::InputError::Count(2).into()),
    };

    // The count is unchecked until each line is read.
    let mut clauses = Vec::default();
    for line in (0..count).map(|offset| offset.saturating_add(3)) {
        next_line(&mut reader, &mut buffer, line)?;
        match buffer.trim().parse::<Clause>() {
            Ok(clause) => clauses.push(clause),
            Err(e) => return Err(err::InputError::Clause(line, e).into()),
        }
    }

    Ok(Problem { query, clauses })
}

/// Writes `trace` to `writer`.
pub fn write_trace(trace: &Trace, writer: &mut impl Write) -> Result<(), ErrorKind> {
    let output = |e: std::io::Error| ErrorKind::Output(e.kind());

    for round in &trace.rounds {
        writeln!(writer, "{}", round.clauses.len()).map_err(output)?;
        for clause in &round.clauses {
            writeln!(writer, "{clause}").map_err(output)?;
        }
    }
    writeln!(writer, "{}", trace.report).map_err(output)?;
    writer.flush().map_err(output)?;
    Ok(())
}
