/// Terminal frontend for the wireframe viewer
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self},
};
use std::io::{self, stdout};
use wf3d_core::{Mesh, Viewer, ViewerConfig};

pub mod renderer;

pub use renderer::{TerminalCanvas, Viewport};

/// Main application struct for terminal wireframe viewing
pub struct TerminalApp {
    viewer: Viewer,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, config: ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(mesh, config),
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Take over the terminal and run until quit. The terminal is restored
    /// even when the render loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let result = self.main_loop(width, height);

        // Cleanup: raw mode goes first and every step runs
        first_error([
            result,
            terminal::disable_raw_mode(),
            execute!(
                stdout(),
                DisableMouseCapture,
                terminal::LeaveAlternateScreen,
                cursor::Show
            ),
        ])
    }

    fn main_loop(&mut self, width: u16, height: u16) -> io::Result<()> {
        let window_size = f64::from(self.viewer.config().window_size);
        let mut canvas = TerminalCanvas::new(stdout(), width, height, window_size);
        canvas.set_status(status_line(self.viewer.mesh()));
        self.viewer.run(&mut canvas)
    }
}

/// First failure among steps that have all already run
fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    results.into_iter().collect()
}

fn status_line(mesh: &Mesh) -> String {
    format!(
        "WF3D | {} vertices, {} faces | Drag=Rotate Q=Quit",
        mesh.vertex_count(),
        mesh.face_count()
    )
}
