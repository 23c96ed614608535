use anyhow::{anyhow, Context, Result};
use clap::{arg, value_parser, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use u_tsp::loader::load_matrix;
use u_tsp::report::{format_route, run_all, RunReport, RunSettings, Strategy};
use u_tsp::sa::CoolingSchedule;

fn cli() -> Command {
    Command::new("u-tsp")
        .about("Searches for short round trips over a distance matrix")
        .arg(
            arg!(<FILE> "Distance matrix file (';' or whitespace separated, optional header of names)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-i --iterations [N] "Iteration limit for every strategy")
                .default_value("1000")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--tabu [SIZE] "Tabu memory size")
                .default_value("10")
                .value_parser(value_parser!(usize)),
        )
        .arg(arg!(--aspiration "Let tabu moves through when they reach a new best"))
        .arg(
            arg!(--temperature [T] "Initial annealing temperature")
                .default_value("100")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            arg!(--alpha [A] "Geometric cooling factor per iteration")
                .default_value("0.995")
                .value_parser(value_parser!(f64)),
        )
        .arg(arg!(--seed [SEED] "Random seed").value_parser(value_parser!(u64)))
        .arg(
            arg!(-s --strategy [NAME] "Strategy to run: all, random, exhaustive, hill-best, hill-random, tabu, sa")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String)),
        )
        .arg(arg!(--json "Print results as JSON"))
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn strategies(matches: &ArgMatches) -> Result<Vec<Strategy>> {
    let names: Vec<&String> = matches
        .get_many::<String>("strategy")
        .map(|v| v.collect())
        .unwrap_or_default();
    if names.is_empty() || names.iter().any(|n| n.as_str() == "all") {
        return Ok(Strategy::ALL.to_vec());
    }
    names
        .into_iter()
        .map(|n| n.parse::<Strategy>().map_err(|e| anyhow!(e)))
        .collect()
}

#[derive(Serialize)]
struct RunRecord<'a> {
    strategy: Strategy,
    route: Vec<&'a str>,
    cities: &'a [usize],
    cost: f64,
    iterations: usize,
    best_iteration: usize,
    runtime_ms: f64,
}

impl<'a> RunRecord<'a> {
    fn new(report: &'a RunReport, names: &'a [String]) -> Self {
        let cities = report.result.tour.cities();
        Self {
            strategy: report.strategy,
            route: cities.iter().map(|&c| names[c].as_str()).collect(),
            cities,
            cost: report.result.cost(),
            iterations: report.result.iterations,
            best_iteration: report.result.best_iteration,
            runtime_ms: report.elapsed.as_secs_f64() * 1e3,
        }
    }
}

fn main() -> Result<()> {
    enable_tracing();
    let matches = cli().get_matches();

    let path = matches
        .get_one::<PathBuf>("FILE")
        .ok_or_else(|| anyhow!("FILE is required"))?;
    let loaded = load_matrix(path).with_context(|| format!("failed to load {}", path.display()))?;

    let settings = RunSettings {
        max_iterations: *matches.get_one::<usize>("iterations").unwrap_or(&1000),
        tabu_size: *matches.get_one::<usize>("tabu").unwrap_or(&10),
        aspiration: matches.get_flag("aspiration"),
        cooling: CoolingSchedule::Geometric {
            initial: *matches.get_one::<f64>("temperature").unwrap_or(&100.0),
            alpha: *matches.get_one::<f64>("alpha").unwrap_or(&0.995),
        },
        seed: matches.get_one::<u64>("seed").copied(),
    };
    let selected = strategies(&matches)?;

    tracing::info!(
        locations = loaded.matrix.size(),
        strategies = selected.len(),
        "starting runs"
    );
    let reports = run_all(&loaded.matrix, &selected, &settings).context("search failed")?;

    if matches.get_flag("json") {
        let records: Vec<RunRecord> = reports
            .iter()
            .map(|r| RunRecord::new(r, &loaded.names))
            .collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (k, report) in reports.iter().enumerate() {
        if k > 0 {
            println!();
        }
        if report.strategy == Strategy::Tabu {
            println!("{} (tabu size {}):", report.strategy, settings.tabu_size);
        } else {
            println!("{}:", report.strategy);
        }
        println!(
            "{}",
            format_route(report.result.tour.cities(), &loaded.names)
        );
        println!("Cost: {:.2}", report.result.cost());
        println!("Time: {:.3} ms", report.elapsed.as_secs_f64() * 1e3);
        if report.strategy != Strategy::RandomTour {
            println!("Iterations: {}", report.result.iterations);
        }
    }
    Ok(())
}
