/// Per-frame orchestration of projection, drawing and input
use log::info;

use crate::canvas::{Canvas, InputEvent};
use crate::config::ViewerConfig;
use crate::geometry::Mesh;
use crate::interaction::DragController;
use crate::projection::{Projection, ScreenPoint};
use crate::transform::RotationState;

/// Render loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the mesh, the drag controller and the loop state
pub struct Viewer {
    mesh: Mesh,
    config: ViewerConfig,
    projection: Projection,
    controller: DragController,
    state: LoopState,
}

impl Viewer {
    pub fn new(mesh: Mesh, config: ViewerConfig) -> Self {
        Self {
            projection: config.projection(),
            controller: DragController::from_config(&config),
            mesh,
            config,
            state: LoopState::Running,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn rotation(&self) -> &RotationState {
        self.controller.rotation()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Project every vertex under the current rotation
    pub fn screen_points(&self) -> Vec<ScreenPoint> {
        self.projection.project_all(&self.mesh, self.controller.rotation())
    }

    /// Run one iteration: clear, draw edges and vertices, handle input,
    /// present. Does nothing once terminated.
    pub fn frame<C: Canvas>(&mut self, canvas: &mut C) -> Result<LoopState, C::Error> {
        if self.state == LoopState::Terminated {
            return Ok(self.state);
        }

        canvas.clear(self.config.background)?;

        let points = self.screen_points();

        for face in &self.mesh.faces {
            for (a, b) in face.edges() {
                canvas.draw_line(
                    points[a],
                    points[b],
                    self.config.edge_color,
                    self.config.edge_width,
                )?;
            }
        }

        for &point in &points {
            canvas.draw_point(point, self.config.vertex_color, self.config.vertex_radius)?;
        }

        for event in canvas.poll_events()? {
            self.handle_event(event);
        }

        canvas.present()?;
        Ok(self.state)
    }

    /// Run frames until a quit event arrives
    pub fn run<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        info!(
            "render loop started: {} vertices, {} faces",
            self.mesh.vertex_count(),
            self.mesh.face_count()
        );
        while self.frame(canvas)? == LoopState::Running {}
        info!("render loop terminated");
        Ok(())
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.state = LoopState::Terminated,
            InputEvent::PointerMove { position, buttons } => {
                self.controller.on_pointer_move(position, buttons.primary);
            }
        }
    }
}
