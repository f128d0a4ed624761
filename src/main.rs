use clap::Parser;
use serde::Serialize;

use labkit::Result;

mod cli;
use cli::demo::{rational_demo, vector_demo, Step};
use cli::display::{self, row, section_bot, section_top};
use cli::eval::{evaluate, Evaluation, Outcome};
use cli::{Cli, Commands, DemoTarget};

#[derive(Serialize)]
struct DemoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    vector: Option<Vec<Step>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rational: Option<Vec<Step>>,
}

fn main() {
    let cli = Cli::parse();
    cli::logger::init_cli_logger(cli.verbose);

    let outcome = match cli.command {
        Commands::Demo { target } => run_demo(target, cli.json),
        Commands::Eval { lhs, op, rhs } => run_eval(&lhs, &op, &rhs, cli.json),
    };

    if let Err(e) = outcome {
        tracing::error!(kind = e.kind(), "command failed");
        display::fatal(&e.to_string());
        std::process::exit(1);
    }
}

fn run_demo(target: DemoTarget, json: bool) -> Result<()> {
    let wants = |t: DemoTarget| target == t || target == DemoTarget::All;
    let report = DemoReport {
        vector: wants(DemoTarget::Vector).then(vector_demo).transpose()?,
        rational: wants(DemoTarget::Rational).then(rational_demo).transpose()?,
    };

    if json {
        print_json(&report);
        return Ok(());
    }

    if let Some(steps) = &report.vector {
        print_section("DYNAMIC ARRAY", steps);
    }
    if let Some(steps) = &report.rational {
        print_section("RATIONAL<i8>", steps);
    }
    Ok(())
}

fn run_eval(lhs: &str, op: &str, rhs: &str, json: bool) -> Result<()> {
    let evaluation = evaluate(lhs, op, rhs)?;
    if json {
        print_json(&evaluation);
    } else {
        print_evaluation(&evaluation);
    }
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{}", text),
        // only reachable with non-string map keys, which none of the reports have
        Err(e) => display::fatal(&format!("failed to serialize report: {}", e)),
    }
}

fn print_section(title: &str, steps: &[Step]) {
    section_top(title);
    for step in steps {
        row(&display::themed(display::CYAN, &[], &step.label));
        if step.error {
            row(&format!("  {}", display::expected_error(&step.output)));
        } else if matches!(step.output.as_str(), "true" | "false") {
            row(&format!("  {}", display::truth(step.output == "true")));
        } else {
            for line in display::wrap(&step.output, display::BOX_WIDTH - 4) {
                row(&format!("  {}", line));
            }
        }
        if let (Some(len), Some(capacity)) = (step.len, step.capacity) {
            row(&format!("  {}", display::size_capacity(len, capacity)));
        }
    }
    section_bot();
}

fn print_evaluation(evaluation: &Evaluation) {
    let result = match evaluation.result {
        Outcome::Value(value) => value.to_string(),
        Outcome::Truth(truth) => display::truth(truth),
    };
    println!(
        "({}) {} ({}) = {}",
        evaluation.lhs, evaluation.op, evaluation.rhs, result
    );
}
