//! Interactive flight route planner
use std::path::{Path, PathBuf};

use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::routes::{self, Airport, Flight};

/// Print network info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Network has {} airports and {} scheduled flights",
        context.airports.len(),
        context.flights.len()
    )))
}

fn list_airports(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let mut out = String::new();
    for airport in &context.airports {
        out.push_str(&format!("{} - {}\n", airport.code, airport.full_name));
    }
    Ok(Some(out))
}

fn find_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap().to_uppercase();
    let to = args.get_one::<String>("to").unwrap().to_uppercase();

    match routes::find_fastest_route(&context.airports, &context.flights, &from, &to) {
        Ok(route) => Ok(Some(format!(
            "Fastest route: {}\nTotal duration: {} hours",
            route.airport_codes.join(" -> "),
            route.total_duration_in_hours
        ))),
        Err(err) => Ok(Some(format!("{err:#}"))),
    }
}

struct Context {
    airports: Vec<Airport>,
    flights: Vec<Flight>,
}

impl Context {
    fn new(airports: Vec<Airport>, flights: Vec<Flight>) -> Self {
        Self { airports, flights }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crates/repl/flights_data".to_string());
    let data_dir = Path::new(&data_dir);

    let airports =
        routes::load_airports(&data_dir.join("airports.json")).expect("Failed to load airports");
    let flights =
        routes::load_flights(&data_dir.join("flights.json")).expect("Failed to load flights");

    let context = Context::new(airports, flights);

    let mut repl = Repl::new(context)
        .with_name("Flight route planner")
        .with_version("v0.1.0")
        .with_description("Finds the fastest route between two airports")
        .with_banner("Welcome to the flight route planner")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print network info"), info)
        .with_command(
            Command::new("airports").about("List available airports"),
            list_airports,
        )
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("Departure airport code"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("Destination airport code"),
                )
                .about("Find the fastest route between two airports"),
            find_route,
        );

    repl.run()
}
