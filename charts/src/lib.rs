use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::Result;
use serde::Serialize;

pub mod bar;
pub mod line;
pub mod palette;

pub use bar::render_summary;
pub use line::render_scaling;

pub fn ensure_plot_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Writes the parsed report as JSON under `<dir>/plot_data/<stem>.json` so a
/// rendered chart can be re-plotted or inspected without the original stream.
pub fn dump_plot_data<T: Serialize>(dir: &Path, stem: &str, data: &T) -> Result<PathBuf> {
    let data_dir = dir.join("plot_data");
    if !data_dir.exists() {
        fs::create_dir_all(&data_dir)?;
    }
    let path = data_dir.join(format!("{stem}.json"));
    fs::write(&path, serde_json::to_string(data)?)?;
    Ok(path)
}
