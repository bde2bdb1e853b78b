/// WF3D Terminal Viewer - Drag-to-rotate wireframe
///
/// Loads `object.txt` from next to the executable (or the current directory,
/// or the path given as the only argument) and shows it in the terminal.
/// Controls:
///   - Left-drag: Rotate the figure
///   - Q/ESC/Ctrl-C: Quit
use std::env;
use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::{info, LevelFilter};
use wf3d_core::{load_file, ViewerConfig};
use wf3d_terminal::TerminalApp;

const MESH_FILE: &str = "object.txt";
const CONFIG_FILE: &str = "wf3d.toml";
const LOG_FILE: &str = "wf3d-terminal.log";

/// Log to a file: the alternate screen owns the terminal while running.
fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if env::var_os("RUST_LOG").is_none() {
        builder.filter_level(LevelFilter::Info);
    }
    if let Ok(file) = File::create(env::temp_dir().join(LOG_FILE)) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

fn mesh_path() -> PathBuf {
    if let Some(arg) = env::args_os().nth(1) {
        return PathBuf::from(arg);
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MESH_FILE)))
        .filter(|path| path.is_file())
        .unwrap_or_else(|| PathBuf::from(MESH_FILE))
}

fn load_config(mesh_path: &Path) -> Result<ViewerConfig, Box<dyn Error>> {
    let path = mesh_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_FILE);
    if path.is_file() {
        info!("using config {}", path.display());
        Ok(ViewerConfig::load_from_file(&path)?)
    } else {
        Ok(ViewerConfig::default())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let path = mesh_path();
    println!("WF3D Terminal Viewer - Loading {}...", path.display());

    let mesh = load_file(&path).map_err(|e| format!("failed to load {}: {e}", path.display()))?;
    let config = load_config(&path)?;

    info!(
        "loaded {} vertices and {} faces from {}",
        mesh.vertex_count(),
        mesh.face_count(),
        path.display()
    );

    let mut app = TerminalApp::new(mesh, config);
    app.run()?;

    println!("Thank you for using WF3D Terminal Viewer!");
    Ok(())
}
