use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One playlist dump file, e.g. a slice of the Million Playlist Dataset.
///
/// `playlists` is optional at the type level so that a file without it can be
/// reported as a schema error instead of a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct PlaylistFile {
    pub playlists: Option<Vec<Playlist>>,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pid: Option<u64>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub artist_name: Option<String>, // colon-delimited, last segment is the artist id
    #[serde(default)]
    pub artist_uri: Option<String>,
    #[serde(default)]
    pub track_name: Option<String>,
    #[serde(default)]
    pub track_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: u64,
}

/// The emitted artifact. Field order matches the output document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[cfg(test)]
impl Track {
    pub fn by(artist_name: &str) -> Self {
        Self {
            artist_name: Some(artist_name.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Playlist {
    pub fn of(artist_names: &[&str]) -> Self {
        Self {
            tracks: artist_names.iter().map(|name| Track::by(name)).collect(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_file_keeps_metadata() {
        let raw = r#"{
            "info": {"slice": "0-999", "version": "v1"},
            "playlists": [
                {"name": "road trip", "pid": 7, "num_tracks": 1,
                 "tracks": [{"artist_name": "spotify:artist:abc", "pos": 0}]}
            ]
        }"#;

        let file: PlaylistFile = serde_json::from_str(raw).unwrap();
        let playlists = file.playlists.unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].pid, Some(7));
        assert_eq!(
            playlists[0].tracks[0].artist_name.as_deref(),
            Some("spotify:artist:abc")
        );
        assert!(file.metadata.contains_key("info"));
        assert!(!file.metadata.contains_key("playlists"));
    }

    #[test]
    fn test_missing_fields_default() {
        let file: PlaylistFile = serde_json::from_str(r#"{"playlists": [{}, {"tracks": [{}]}]}"#).unwrap();
        let playlists = file.playlists.unwrap();

        assert!(playlists[0].tracks.is_empty());
        assert!(playlists[1].tracks[0].artist_name.is_none());
    }

    #[test]
    fn test_missing_playlists_is_none() {
        let file: PlaylistFile = serde_json::from_str(r#"{"info": {}}"#).unwrap();
        assert!(file.playlists.is_none());
    }

    #[test]
    fn test_graph_serializes_in_document_shape() {
        let graph = Graph {
            nodes: vec![Node { id: "A".into() }, Node { id: "B".into() }],
            edges: vec![Edge {
                source: "A".into(),
                target: "B".into(),
                weight: 1000,
            }],
        };

        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            r#"{"nodes":[{"id":"A"},{"id":"B"}],"edges":[{"source":"A","target":"B","weight":1000}]}"#
        );
    }
}
