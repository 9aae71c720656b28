/// Extracts the artist id from a colon-delimited artist name field.
///
/// The id is the segment after the last `:`. A value without any `:` is its own
/// id. Empty values, and values whose last segment is empty, yield `None`.
///
/// Two different artists whose names end in the same segment share an id.
///
/// # Examples
///
/// ```
/// use playgraph::foundation::utils::extract_artist_id;
///
/// assert_eq!(extract_artist_id("spotify:artist:3TVXtAsR1Inumwj472S9r4"), Some("3TVXtAsR1Inumwj472S9r4"));
/// assert_eq!(extract_artist_id("Drake"), Some("Drake"));
/// assert_eq!(extract_artist_id("spotify:artist:"), None);
/// ```
pub fn extract_artist_id(artist_name: &str) -> Option<&str> {
    artist_name
        .rsplit(':')
        .next()
        .filter(|segment| !segment.is_empty())
}
