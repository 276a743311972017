use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, error, info, LevelFilter};
use rayon::prelude::*;

use crate::cli::logging::set_log_level;
use crate::cli::types::Commands;
use crate::config::TocSettings;
use crate::toc::{contains_placeholder, filter_content, ProcessOptions, RenderMode};
use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs::{list_html_files, read_file, write_file};

/// Counts reported after a render run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    /// Documents read and written
    pub rendered: usize,
    /// Documents that went through TOC generation
    pub with_toc: usize,
}

/// Handle the render command
pub async fn handle_render_command(command: &Commands, settings: &TocSettings) -> BoxResult<()> {
    if let Commands::Render { input, output, mode, force, verbose } = command {
        if *verbose {
            set_log_level(LevelFilter::Debug);
        }

        let mode = RenderMode::from_param(mode.as_deref());
        let summary = render_path(input, output.as_deref(), mode, *force, settings)
            .map_err(|e| format!("Render failed: {}", e))?;
        info!(
            "Rendered {} documents, {} with a table of contents",
            summary.rendered, summary.with_toc
        );
    }
    Ok(())
}

/// Render a single file or every HTML file below a directory
///
/// A single file is written to `output`, or to stdout when no output is given.
/// A directory requires an output directory and keeps relative paths.
pub fn render_path(
    input: &Path,
    output: Option<&Path>,
    mode: RenderMode,
    force: bool,
    settings: &TocSettings,
) -> BoxResult<RenderSummary> {
    if input.is_dir() {
        let output = output.ok_or_else(|| {
            TocError::Generic("An output directory is required when rendering a directory".to_string())
        })?;
        return render_directory(input, output, mode, force, settings);
    }

    let html = read_file(input)?;
    let (content, with_toc) = render_document(&html, mode, force, settings);
    match output {
        Some(path) => write_file(path, &content)?,
        None => print!("{}", content),
    }

    Ok(RenderSummary {
        rendered: 1,
        with_toc: usize::from(with_toc),
    })
}

/// Process one document; also reports whether the gate was open
fn render_document(html: &str, mode: RenderMode, force: bool, settings: &TocSettings) -> (String, bool) {
    let contains_toc = force || contains_placeholder(html, settings);
    let options = ProcessOptions::new(contains_toc, mode);
    (filter_content(html, &options, settings), contains_toc)
}

fn render_directory(
    input: &Path,
    output: &Path,
    mode: RenderMode,
    force: bool,
    settings: &TocSettings,
) -> BoxResult<RenderSummary> {
    let files = list_html_files(input)?;
    info!("Rendering {} HTML files from {}", files.len(), input.display());

    let rendered = AtomicUsize::new(0);
    let with_toc = AtomicUsize::new(0);
    let failed = AtomicUsize::new(0);

    files.par_iter().for_each(|file| {
        let Ok(relative) = file.strip_prefix(input) else {
            error!("{} is outside {}", file.display(), input.display());
            failed.fetch_add(1, Ordering::Relaxed);
            return;
        };
        let destination = output.join(relative);

        let html = match read_file(file) {
            Ok(html) => html,
            Err(e) => {
                error!("{}", e);
                failed.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        let (content, has_toc) = render_document(&html, mode, force, settings);
        if let Err(e) = write_file(&destination, &content) {
            error!("{}", e);
            failed.fetch_add(1, Ordering::Relaxed);
            return;
        }

        debug!("Rendered {} -> {}", file.display(), destination.display());
        rendered.fetch_add(1, Ordering::Relaxed);
        if has_toc {
            with_toc.fetch_add(1, Ordering::Relaxed);
        }
    });

    let failed = failed.into_inner();
    if failed > 0 {
        return Err(format!("{} of {} files failed to render", failed, files.len()).into());
    }

    Ok(RenderSummary {
        rendered: rendered.into_inner(),
        with_toc: with_toc.into_inner(),
    })
}
