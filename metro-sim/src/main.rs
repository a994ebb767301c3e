use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use metro_sim::ingest::{self, LoadError};
use metro_sim::query::Reachability;
use metro_sim::session::Session;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut rng = StdRng::from_os_rng();

    if let Err(err) = run(&mut input, &mut rng) {
        eprintln!("IO error: {err}");
    }
}

fn run(input: &mut impl BufRead, rng: &mut StdRng) -> io::Result<()> {
    let Some(mut session) = setup(input, rng)? else {
        return Ok(());
    };
    let id_range = format!("[1 - {}]", session.train_count());

    loop {
        let choice = prompt(
            input,
            "Continue simulation [1], Train info [2], All trains [3], Route info [4], Export status [5], Exit [q].\nSelect an option: ",
        )?;

        match choice.as_str() {
            "1" => {
                session.advance_all(rng);
                println!("Advanced all trains one step.");
            }
            "2" => {
                let answer = prompt(input, &format!("Which train {id_range}: "))?;
                match answer.parse::<u32>() {
                    Ok(id) => match session.status(id) {
                        Some(status) => println!("\n{status}\n"),
                        None => println!("No train with id {id}."),
                    },
                    Err(_) => println!("Invalid input!"),
                }
            }
            "3" => {
                println!();
                for status in session.status_all() {
                    println!("{status}");
                }
                println!();
            }
            "4" => route_info(input, &session)?,
            "5" => {
                let statuses = session.status_all();
                // Status records are plain data; serialization cannot fail.
                println!("{}", serde_json::to_string_pretty(&statuses).expect("status serializes"));
            }
            "q" | "Q" => break,
            _ => println!("Invalid input!"),
        }
    }

    Ok(())
}

/// Prompt for the two source files and the train count until a session
/// can be built. A dataset that builds to an empty network ends the run.
fn setup(input: &mut impl BufRead, rng: &mut StdRng) -> io::Result<Option<Session>> {
    loop {
        let stations_file = prompt(input, "Enter name of stations file: ")?;
        let connections_file = prompt(input, "Enter name of connections file: ")?;

        let (connection_lines, station_lines) =
            match load_sources(&connections_file, &stations_file) {
                Ok(sources) => sources,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

        let count_answer = prompt(input, "Enter how many trains to simulate: ")?;
        let train_count = match count_answer.parse::<u32>() {
            Ok(count) if count >= 1 => count,
            _ => {
                println!("Invalid input!");
                continue;
            }
        };

        let connection_rows = ingest::connection_rows(&connection_lines);
        let station_rows = ingest::station_rows(&station_lines);

        match Session::build(&connection_rows, &station_rows, train_count, rng) {
            Ok(session) => return Ok(Some(session)),
            Err(err) => {
                println!("Could not build a network: {err}");
                return Ok(None);
            }
        }
    }
}

fn load_sources(
    connections_file: &str,
    stations_file: &str,
) -> Result<(Vec<String>, Vec<String>), LoadError> {
    let connections = ingest::read_lines(connections_file)?;
    let stations = ingest::read_lines(stations_file)?;
    Ok((connections, stations))
}

fn route_info(input: &mut impl BufRead, session: &Session) -> io::Result<()> {
    let from = prompt(input, "Select a start station: ")?;
    let to = prompt(input, "Select an end station: ")?;
    let Ok(timesteps) = prompt(input, "Select timesteps: ")?.parse::<usize>() else {
        println!("Invalid input!");
        return Ok(());
    };

    match session.check_route(&from, &to, timesteps) {
        Reachability::Within { .. } => {
            println!("Station {to} is reachable from station {from} within {timesteps} timesteps.");
        }
        Reachability::Beyond { .. } | Reachability::NoInterchange => {
            println!(
                "Station {to} is not reachable from station {from} within {timesteps} timesteps."
            );
        }
        Reachability::UnknownStation(_) => {
            println!("Couldn't find one or more of the given stations!");
        }
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
