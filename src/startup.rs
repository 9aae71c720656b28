//! # The Main Entry Point of Graph Generation
//!
//! Orchestrates one run from configuration loading to the written graph.
//!
//! # Steps:
//! 1. Loads the configuration and applies command line overrides
//! 2. Samples playlists from the input directory
//! 3. Counts artist co-occurrences
//! 4. Filters pairs into the graph
//! 5. Writes the graph and prints the summary

use crate::configuration::{self, ConfigFolder, Overrides, Settings};
use crate::foundation::GraphError;
use crate::graph::{self, GraphBuild, SummaryOptions};
use crate::sampling::Sampler;
use anyhow::Context;
use std::io::{self, Write};
use tracing::info;

pub fn run(cfg_folder: ConfigFolder, overrides: Overrides) -> anyhow::Result<()> {
    run_with_output(cfg_folder, overrides, &mut io::stdout().lock())
}

/// Same as [`run`], with every console line written to `out`.
pub fn run_with_output<W: Write>(
    cfg_folder: ConfigFolder,
    overrides: Overrides,
    out: &mut W,
) -> anyhow::Result<()> {
    let (config_file, required) = match &overrides.config_file {
        Some(path) => (path.clone(), true),
        None => (cfg_folder.config_file, false),
    };

    let settings = configuration::get_configuration(&config_file, required)
        .with_context(|| {
            format!(
                "Unable to parse configuration file {}",
                config_file.display()
            )
        })?
        .with_overrides(&overrides);

    writeln!(
        out,
        "\x1b[1m\x1b[34mBuilding artist graph from {}...\x1b[0m",
        settings.input_dir.display()
    )?;

    let build = generate_graph(&settings, out).context("Graph generation failed")?;

    graph::print_summary(
        out,
        &build,
        SummaryOptions {
            dump_graph: settings.dump_graph,
            top_edges: settings.top_edges,
        },
    )
    .context("Failed to print the graph summary")?;

    writeln!(
        out,
        "\x1b[32mGraph written to {}\x1b[0m",
        settings.output_path.display()
    )?;
    Ok(())
}

/// Runs sampling, counting, filtering and writing for `settings`.
///
/// The selected playlists are dropped as soon as they are counted. The
/// sampler's count line goes to `out`.
pub fn generate_graph<W: Write>(
    settings: &Settings,
    out: &mut W,
) -> Result<GraphBuild, GraphError> {
    let playlists = Sampler::new(settings.target_playlists, settings.seed)
        .with_progress(settings.show_progress)
        .sample(&settings.input_dir, out)?;

    let table = graph::aggregate_playlists(&playlists, settings.show_progress);
    drop(playlists);

    let build = graph::build_graph(&table, settings.threshold);
    info!(
        nodes = build.graph.nodes.len(),
        edges = build.graph.edges.len(),
        threshold = settings.threshold,
        "graph built"
    );

    graph::write_graph(&settings.output_path, &build.graph)?;
    Ok(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Edge, Graph, Node};
    use serde_json::json;
    use std::fs;
    use std::io;
    use std::path::Path;
    use tempfile::TempDir;

    fn settings_for(input_dir: &Path, output_path: &Path, threshold: u64) -> Settings {
        Settings {
            input_dir: input_dir.to_path_buf(),
            output_path: output_path.to_path_buf(),
            target_playlists: 1_000_000,
            threshold,
            seed: Some(1),
            top_edges: 10,
            dump_graph: false,
            show_progress: false,
        }
    }

    fn write_slice(dir: &Path, name: &str, playlists: serde_json::Value) {
        let body = json!({"info": {"generated_on": "2017-12-03"}, "playlists": playlists});
        fs::write(dir.join(name), body.to_string()).unwrap();
    }

    fn tracks(artists: &[&str]) -> serde_json::Value {
        let tracks: Vec<_> = artists
            .iter()
            .map(|artist| json!({"artist_name": format!("spotify:artist:{artist}"), "track_name": "x"}))
            .collect();
        json!({ "tracks": tracks })
    }

    #[test]
    fn test_generate_graph_end_to_end() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let output_path = output.path().join("graph.json");

        write_slice(
            input.path(),
            "mpd.slice.0-2.json",
            json!([tracks(&["A", "B", "C"]), tracks(&["A", "B"]), tracks(&["C"])]),
        );
        write_slice(
            input.path(),
            "mpd.slice.3-4.json",
            json!([tracks(&["B", "A", "A"]), json!({"tracks": [{"track_name": "untagged"}]})]),
        );

        let build = generate_graph(
            &settings_for(input.path(), &output_path, 2),
            &mut io::sink(),
        )
        .unwrap();

        let expected_edges = vec![Edge {
            source: "A".into(),
            target: "B".into(),
            weight: 3,
        }];
        assert_eq!(build.graph.edges, expected_edges);
        assert_eq!(build.strongest.map(|pair| pair.weight), Some(3));

        let written: Graph = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
        assert_eq!(written.edges, expected_edges);
        let mut ids: Vec<_> = written.nodes.into_iter().map(|Node { id }| id).collect();
        ids.sort();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn test_generate_graph_respects_target() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let output_path = output.path().join("graph.json");
        let playlists: Vec<_> = (0..10).map(|_| tracks(&["A", "B"])).collect();
        write_slice(input.path(), "mpd.slice.json", json!(playlists));

        let mut settings = settings_for(input.path(), &output_path, 0);
        settings.target_playlists = 4;
        let build = generate_graph(&settings, &mut io::sink()).unwrap();

        assert_eq!(build.graph.edges[0].weight, 4);
    }

    #[test]
    fn test_generate_graph_fails_on_missing_playlists() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let output_path = output.path().join("graph.json");
        fs::write(input.path().join("bad.json"), r#"{"info": {}}"#).unwrap();

        let err = generate_graph(
            &settings_for(input.path(), &output_path, 0),
            &mut io::sink(),
        )
        .unwrap_err();

        assert!(matches!(err, GraphError::MissingPlaylists { .. }));
        assert!(!output_path.exists());
    }

    #[test]
    fn test_run_with_explicit_config() {
        let home = TempDir::new().unwrap();
        let input = TempDir::new().unwrap();
        let output_path = home.path().join("graph.json");
        write_slice(input.path(), "a.json", json!([tracks(&["A", "B"])]));

        let cfg_file = home.path().join("run.yaml");
        fs::write(
            &cfg_file,
            format!(
                "input_dir: {:?}\noutput_path: {:?}\nthreshold: 1\ndump_graph: false\nshow_progress: false\n",
                input.path(),
                output_path
            ),
        )
        .unwrap();

        let overrides = Overrides {
            config_file: Some(cfg_file),
            ..Default::default()
        };
        let mut out = Vec::new();
        run_with_output(ConfigFolder::at(home.path()), overrides, &mut out).unwrap();

        let written: Graph = serde_json::from_slice(&fs::read(&output_path).unwrap()).unwrap();
        assert_eq!(written.edges.len(), 1);

        let text = String::from_utf8(out).unwrap();
        let building = text.find("Building artist graph from").unwrap();
        let selected = text.find("Selected 1 playlists.\n").unwrap();
        let strongest = text.find("Strongest pair: A - B (1)").unwrap();
        let count = text.find("\n1\n").unwrap();
        let written_to = text.find("Graph written to").unwrap();
        assert!(building < selected);
        assert!(selected < strongest);
        assert!(strongest < count);
        assert!(count < written_to);
    }

    #[test]
    fn test_run_with_missing_explicit_config() {
        let home = TempDir::new().unwrap();
        let overrides = Overrides {
            config_file: Some(home.path().join("absent.yaml")),
            ..Default::default()
        };

        let mut out = Vec::new();
        assert!(run_with_output(ConfigFolder::at(home.path()), overrides, &mut out).is_err());
        assert!(out.is_empty());
    }
}
