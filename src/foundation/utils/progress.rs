use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Creates a progress bar in the project's usual style.
///
/// Returns a hidden bar when `visible` is false so callers can tick it
/// unconditionally.
///
/// # Arguments
///
/// * `total` - The total number of steps or items to track.
/// * `unit` - A string representing the unit of measurement (e.g., "files" or "playlists").
/// * `visible` - Whether the bar is drawn at all.
pub fn create_progress_bar(total: u64, unit: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::hidden());
    }

    let progress = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(&format!(
        "{{elapsed_precise}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {unit} {{msg}}"
    )) {
        progress.set_style(style.progress_chars("##-"));
    }
    progress
}
