use clap::{value_parser, Arg, ArgMatches, Command};
use playgraph::configuration::{create_config, ConfigFolder, Overrides};
use playgraph::startup::run;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli().get_matches();
    let cfg_folder = ConfigFolder::new();

    match args.subcommand() {
        Some(("run", run_args)) => {
            println!("\x1b[1m\x1b[34mStarting graph generation...\x1b[0m");
            run(cfg_folder, overrides_from(run_args))
        }
        Some(("config", _)) => {
            println!("\x1b[1m\x1b[34mConfiguring playgraph...\x1b[0m");
            create_config(cfg_folder)
        }
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn cli() -> Command {
    Command::new("playgraph")
        .about("🎵 Artist co-occurrence graphs from playlist dumps 🎵")
        .subcommand(
            Command::new("run")
                .about("🚀 Sample playlists and build the artist graph")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_name("FILE")
                        .help("Configuration file to use instead of ~/.playgraph/config.yaml")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_name("DIR")
                        .help("Directory holding the playlist files")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .help("Where to write the graph document")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("playlists")
                        .long("playlists")
                        .short('n')
                        .value_name("N")
                        .help("Number of playlists to sample")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("threshold")
                        .long("threshold")
                        .short('t')
                        .value_name("WEIGHT")
                        .help("Minimum co-occurrence count for an edge")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .help("Shuffle seed for a reproducible sample")
                        .value_parser(value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("config").about("🛠️ Create or update configuration file for playgraph"),
        )
}

fn overrides_from(args: &ArgMatches) -> Overrides {
    Overrides {
        config_file: args.get_one::<PathBuf>("config").cloned(),
        input_dir: args.get_one::<PathBuf>("input").cloned(),
        output_path: args.get_one::<PathBuf>("output").cloned(),
        target_playlists: args.get_one::<usize>("playlists").copied(),
        threshold: args.get_one::<u64>("threshold").copied(),
        seed: args.get_one::<u64>("seed").copied(),
    }
}

fn print_usage() {
    println!("\x1b[1m\x1b[31mInvalid command!\x1b[0m\n");
    println!("📖 Available Commands:");
    println!("  \x1b[1m\x1b[32mplaygraph run\x1b[0m    - 🚀 Build the artist graph");
    println!("  \x1b[1m\x1b[32mplaygraph config\x1b[0m - 🛠️  Create or update configuration file");
    println!("\x1b[33mRun `playgraph run --help` for the available overrides.\x1b[0m\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn test_run_flags_become_overrides() {
        let args = cli().get_matches_from([
            "playgraph", "run", "-i", "slices", "-o", "out.json", "-n", "500", "-t", "3",
            "--seed", "9",
        ]);
        let (_, run_args) = args.subcommand().unwrap();

        let overrides = overrides_from(run_args);

        assert_eq!(overrides.input_dir, Some(PathBuf::from("slices")));
        assert_eq!(overrides.output_path, Some(PathBuf::from("out.json")));
        assert_eq!(overrides.target_playlists, Some(500));
        assert_eq!(overrides.threshold, Some(3));
        assert_eq!(overrides.seed, Some(9));
        assert!(overrides.config_file.is_none());
    }
}
