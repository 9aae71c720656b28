use crate::graph::DEFAULT_THRESHOLD;
use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

/// Default number of playlists sampled per run.
pub const DEFAULT_TARGET_PLAYLISTS: usize = 1_000_000;

/// Default number of heaviest edges listed in the summary.
pub const DEFAULT_TOP_EDGES: usize = 10;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub target_playlists: usize,
    pub threshold: u64,
    pub seed: Option<u64>,
    pub top_edges: usize,
    pub dump_graph: bool,
    pub show_progress: bool,
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub input_dir: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub target_playlists: Option<usize>,
    pub threshold: Option<u64>,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(input_dir) = &overrides.input_dir {
            self.input_dir = input_dir.clone();
        }
        if let Some(output_path) = &overrides.output_path {
            self.output_path = output_path.clone();
        }
        if let Some(target) = overrides.target_playlists {
            self.target_playlists = target;
        }
        if let Some(threshold) = overrides.threshold {
            self.threshold = threshold;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

/// Loads settings from defaults, the YAML file and `PLAYGRAPH_*` variables,
/// in increasing order of precedence.
///
/// A missing file is an error only when `required` is set.
pub fn get_configuration(cfg_file: &Path, required: bool) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .set_default("input_dir", "data")?
        .set_default("output_path", "graph.json")?
        .set_default("target_playlists", DEFAULT_TARGET_PLAYLISTS as i64)?
        .set_default("threshold", DEFAULT_THRESHOLD as i64)?
        .set_default("top_edges", DEFAULT_TOP_EDGES as i64)?
        .set_default("dump_graph", true)?
        .set_default("show_progress", true)?
        .add_source(
            File::from(cfg_file)
                .format(FileFormat::Yaml)
                .required(required),
        )
        .add_source(Environment::with_prefix("PLAYGRAPH").try_parsing(true))
        .build()?;

    settings.try_deserialize::<Settings>()
}

pub struct ConfigFolder {
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
}

impl ConfigFolder {
    /// Uses `$HOME/.playgraph`, or `./.playgraph` when `HOME` is unset.
    pub fn new() -> Self {
        let home_dir = env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self::at(&home_dir)
    }

    pub fn at(home_dir: &Path) -> Self {
        Self {
            config_dir: get_config_dir_name(home_dir),
            config_file: get_config_file_name(home_dir),
        }
    }
}

impl Default for ConfigFolder {
    fn default() -> Self {
        Self::new()
    }
}

fn get_config_dir_name(home_dir: &Path) -> PathBuf {
    home_dir.join(".playgraph")
}

fn get_config_file_name(home_dir: &Path) -> PathBuf {
    home_dir.join(".playgraph").join("config.yaml")
}

pub fn create_config(cfg_folder: ConfigFolder) -> anyhow::Result<()> {
    println!("\x1b[1m\x1b[32mCreating configuration...\x1b[0m");

    if cfg_folder.config_file.exists() && !confirm_overwrite()? {
        println!("\x1b[33mOperation cancelled.\x1b[0m");
        return Ok(());
    }

    write_config_template(&cfg_folder)?;

    println!("\x1b[32mConfiguration file created at:");
    println!("  -> {}", cfg_folder.config_file.display());
    println!("\x1b[0mPlease edit the configuration file with your specific settings.");

    Ok(())
}

fn write_config_template(cfg_folder: &ConfigFolder) -> io::Result<()> {
    fs::create_dir_all(&cfg_folder.config_dir)?;

    let config_content = include_str!("config_template.yaml");
    fs::write(&cfg_folder.config_file, config_content)
}

fn confirm_overwrite() -> Result<bool, io::Error> {
    println!("\x1b[31mThe configuration file already exists.");
    println!("Do you want to overwrite it? Your settings will be lost. (y/N)\x1b[0m");

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}
