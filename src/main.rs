use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use poketeam::{ApiConfig, ApiError, PokemonTeam, TeamStore};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env();
    info!("Using team API at {}.", config.base_url());
    let store = TeamStore::new(config);

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        usage();
        return ExitCode::FAILURE;
    };

    match run(&store, command, rest).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(store: &TeamStore, command: &str, rest: &[String]) -> Result<(), ApiError> {
    match (command, rest) {
        ("list", []) => {
            let teams = store.api_get_teams().await?;
            if teams.is_empty() {
                println!("No teams saved yet.");
            }
            for team in teams {
                println!(
                    "{:<6} {} ({} pokemons)",
                    team.id.as_deref().unwrap_or("-"),
                    team.name,
                    team.pokemons.len()
                );
            }
            Ok(())
        }
        ("show", [team_id]) => {
            let team = store.api_get_team(team_id).await?;
            print_team(&team);
            Ok(())
        }
        ("create", [name, rest @ ..]) if rest.len() <= 1 => {
            let team = PokemonTeam {
                name: name.clone(),
                subname: rest.first().cloned().unwrap_or_default(),
                ..PokemonTeam::default()
            };
            // The post installs the persisted record as the current team.
            let created = store.api_post_team(&team).await?;
            println!(
                "Created team {} with id {}.",
                created.name,
                created.id.as_deref().unwrap_or("-")
            );
            Ok(())
        }
        ("delete", [team_id]) => {
            store.api_delete_team(team_id).await?;
            println!("Team {} was successfully removed.", team_id);
            Ok(())
        }
        _ => {
            usage();
            Err(ApiError::Unknown(format!("unknown command: {}", command)))
        }
    }
}

fn print_team(team: &PokemonTeam) {
    println!("{}", team.name);
    if !team.subname.is_empty() {
        println!("  {}", team.subname);
    }
    for pokemon in &team.pokemons {
        let types: Vec<&str> = pokemon.types.iter().map(|t| t.name.as_str()).collect();
        println!(
            "  #{:<4} {} [{}]",
            pokemon.pokedex_id,
            pokemon.name,
            types.join(", ")
        );
    }
}

fn usage() {
    eprintln!("Usage: poketeam <command>");
    eprintln!("  list                     list saved teams");
    eprintln!("  show <id>                show one team");
    eprintln!("  create <name> [subname]  create an empty team");
    eprintln!("  delete <id>              delete a team");
}
