use std::error::Error;
use std::path::Path;
use std::process;

use clap::{App, Arg, ArgMatches};
use log::info;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use sokoban_search::config::{self, Config};
use sokoban_search::level::Level;
use sokoban_search::report;
use sokoban_search::solver::SearchResult;
use sokoban_search::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("sokoban-search")
        .author("martin-t")
        .version("0.1")
        .about("Solves Sokoban levels using uninformed and informed search")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .value_name("FILE")
                .help("JSON config, the other options override it"),
        )
        .arg(
            Arg::with_name("method")
                .short("m")
                .long("method")
                .takes_value(true)
                .help("BFS (default), DFS, IDDFS, A* or GREEDY"),
        )
        .arg(
            Arg::with_name("heuristic")
                .short("e")
                .long("heuristic")
                .takes_value(true)
                .help("MANHATTAN, GREEDY_MATCHING or SUM_OF_DISTANCE, required by A* and GREEDY"),
        )
        .arg(
            Arg::with_name("pruning")
                .short("p")
                .long("pruning")
                .help("skip deadlocked states"),
        )
        .arg(
            Arg::with_name("node-limit")
                .long("node-limit")
                .takes_value(true)
                .value_name("NODES")
                .help("stop after expanding this many nodes"),
        )
        .arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .takes_value(true)
                .value_name("SECONDS")
                .help("stop after this many seconds"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("NAME")
                .help("write metrics_NAME.json when solved"),
        )
        .arg(
            Arg::with_name("output-dir")
                .long("output-dir")
                .takes_value(true)
                .value_name("DIR")
                .default_value("output"),
        )
        .arg(
            Arg::with_name("animation")
                .short("a")
                .long("animation")
                .help("also write animation_NAME.csv"),
        )
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("print counts by depth"),
        )
        .arg(Arg::with_name("level").help("XSB level file, overrides map_name"))
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let config = load_config(matches)?;

    let level_path = matches
        .value_of("level")
        .map(str::to_owned)
        .or_else(|| config.map_name.clone())
        .ok_or("No level - pass a level file or set map_name in the config")?;
    let level = level_path
        .load_level()
        .map_err(|err| format!("Can't load level {}: {}", level_path, err))?;

    println!("Solving {} using {}...", level_path, config.method);
    let result = level.solve(&config)?;
    print_result(&level, &result, matches.is_present("stats"));

    if result.is_success() {
        if let Some(ref name) = config.output_file {
            let dir = matches.value_of("output-dir").unwrap_or("output");
            info!("Writing results to {}", dir);
            let written =
                report::write_results(&result, Path::new(dir), name, config.generate_animation)?;
            for path in written {
                println!("Wrote {}", path.display());
            }
        }
    }
    Ok(())
}

fn load_config(matches: &ArgMatches<'_>) -> Result<Config, Box<dyn Error>> {
    let mut config = match matches.value_of("config") {
        Some(path) => {
            info!("Loading config {}", path);
            Config::load(path)?
        }
        None => Config::default(),
    };

    if let Some(method) = matches.value_of("method") {
        config.method = method.parse()?;
    }
    if let Some(heuristic) = matches.value_of("heuristic") {
        config.heuristic = Some(heuristic.parse()?);
    }
    if matches.is_present("pruning") {
        config.pruning = true;
    }
    if let Some(nodes) = matches.value_of("node-limit") {
        config.node_limit = Some(nodes.parse()?);
    }
    if let Some(secs) = matches.value_of("time-limit") {
        config.time_limit = Some(config::parse_time_limit(secs.parse()?)?);
    }
    if let Some(name) = matches.value_of("output") {
        config.output_file = Some(name.to_owned());
    }
    if matches.is_present("animation") {
        config.generate_animation = true;
    }
    Ok(config)
}

fn print_result(level: &Level, result: &SearchResult, print_stats: bool) {
    let stats = result.stats();

    let mut table = Table::new();
    let mut add = |name: &str, value: String| {
        table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
    };
    add("Algorithm", result.method().to_string());
    add("Result", result.terminal_reason().to_string());
    if result.is_success() {
        add("Cost", result.cost().to_string());
        add("Path length", result.path_len().to_string());
    }
    add("Nodes expanded", stats.nodes_expanded().separated_string());
    add("Max frontier size", stats.max_frontier().separated_string());
    add("Pruned", stats.pruned().separated_string());
    add(
        "Processing time",
        format!("{:.4} s", stats.elapsed().as_secs_f64()),
    );
    table.printstd();

    if print_stats {
        println!("{}", stats);
    }

    if result.is_success() {
        println!("Found solution:");
        for state in result.path() {
            println!("{}", level.map.xsb_with_state(state));
        }
        println!("{}", result.moves());
        println!("Moves: {}", result.moves().move_cnt());
        println!("Pushes: {}", result.moves().push_cnt());
    } else {
        println!("No solution");
    }
}
