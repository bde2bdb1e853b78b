use approx::assert_abs_diff_eq;
use wf3d_core::{
    load, Canvas, Color, InputEvent, LoopState, PointerButtons, PointerPosition, ScreenPoint,
    Viewer, ViewerConfig,
};

const TETRAHEDRON: &str = "\
4,4
a,1,1,1
b,1,-1,-1
c,-1,1,-1
d,-1,-1,1
1,2,3
1,2,4
1,3,4
2,3,4
";

#[derive(Default)]
struct RecordingCanvas {
    clears: usize,
    points: Vec<ScreenPoint>,
    lines: Vec<(ScreenPoint, ScreenPoint)>,
    presents: usize,
    pending: Vec<InputEvent>,
}

impl Canvas for RecordingCanvas {
    type Error = std::convert::Infallible;

    fn clear(&mut self, _color: Color) -> Result<(), Self::Error> {
        self.clears += 1;
        self.points.clear();
        self.lines.clear();
        Ok(())
    }

    fn draw_point(
        &mut self,
        center: ScreenPoint,
        _color: Color,
        _radius: f64,
    ) -> Result<(), Self::Error> {
        self.points.push(center);
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: ScreenPoint,
        to: ScreenPoint,
        _color: Color,
        _width: f64,
    ) -> Result<(), Self::Error> {
        self.lines.push((from, to));
        Ok(())
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, Self::Error> {
        Ok(std::mem::take(&mut self.pending))
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presents += 1;
        Ok(())
    }
}

#[test]
fn test_load_tetrahedron() {
    let mesh = load(TETRAHEDRON).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.face_count(), 4);
    assert!(mesh
        .faces
        .iter()
        .all(|face| face.len() == 3 && face.indices.iter().all(|&i| i < 4)));
}

#[test]
fn test_first_frame_at_zero_rotation() {
    let mesh = load(TETRAHEDRON).unwrap();
    let mut viewer = Viewer::new(mesh.clone(), ViewerConfig::default());
    let mut canvas = RecordingCanvas::default();

    assert_eq!(viewer.frame(&mut canvas).unwrap(), LoopState::Running);

    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.presents, 1);
    assert_eq!(canvas.points.len(), 4);
    assert_eq!(canvas.lines.len(), 12);

    for (vertex, point) in mesh.vertices.iter().zip(&canvas.points) {
        let expected = ScreenPoint::new(
            vertex.position.x * 100.0 + 300.0,
            vertex.position.y * 100.0 + 300.0,
        );
        assert_abs_diff_eq!(*point, expected, epsilon = 1e-9);
    }

    // First face 1,2,3: a->b, b->c, then c->a closes the loop
    let a = canvas.points[0];
    let b = canvas.points[1];
    let c = canvas.points[2];
    assert_eq!(&canvas.lines[..3], &[(a, b), (b, c), (c, a)]);
}

#[test]
fn test_drag_then_quit() {
    let mesh = load(TETRAHEDRON).unwrap();
    let mut viewer = Viewer::new(mesh, ViewerConfig::default());
    let mut canvas = RecordingCanvas::default();

    let start = viewer.screen_points();
    canvas.pending = vec![
        InputEvent::PointerMove {
            position: PointerPosition::new(0.0, 0.0),
            buttons: PointerButtons::PRIMARY,
        },
        InputEvent::PointerMove {
            position: PointerPosition::new(0.0, 60.0),
            buttons: PointerButtons::PRIMARY,
        },
    ];
    viewer.frame(&mut canvas).unwrap();
    assert_abs_diff_eq!(viewer.rotation().x, 0.1 * std::f64::consts::TAU, epsilon = 1e-12);
    assert_eq!(viewer.rotation().y, 0.0);
    assert_eq!(viewer.rotation().z, 0.0);

    // The frame that saw the drag was drawn with the old rotation
    assert_eq!(canvas.points, start);

    viewer.frame(&mut canvas).unwrap();
    assert_ne!(canvas.points, start);
    assert_eq!(canvas.lines.len(), 12);

    canvas.pending = vec![InputEvent::Quit];
    assert_eq!(viewer.frame(&mut canvas).unwrap(), LoopState::Terminated);
    assert!(!viewer.is_running());
}
