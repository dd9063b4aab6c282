//! End-to-end editing session through the public API

use glam::{IVec3, Mat4, Vec2, Vec3};
use voxsel::core::camera::Camera;
use voxsel::core::EditorConfig;
use voxsel::math::Aabb;
use voxsel::render::{BoxRenderer, BoxStyle, LineBatch};
use voxsel::selection::{
    update_cursor_from_ray, EditState, SelectionBox, SelectionGroup, SelectionGroupEditor,
};

#[derive(Default)]
struct CountingRenderer {
    styles: Vec<BoxStyle>,
}

impl BoxRenderer for CountingRenderer {
    fn draw_box(&mut self, _bounds: &Aabb, style: BoxStyle, _transform: &Mat4, _camera: Option<Vec3>) {
        self.styles.push(style);
    }
}

fn v(x: i32, y: i32, z: i32) -> IVec3 {
    IVec3::new(x, y, z)
}

#[test]
fn test_build_resize_and_remove() {
    let mut editor = SelectionGroupEditor::new();

    // Drag out the first box
    editor.update_cursor(v(0, 0, 0), None);
    editor.toggle_box_select(false);
    editor.update_cursor(v(3, 3, 3), None);
    editor.toggle_box_select(false);

    // Add a second box with the modifier held
    editor.update_cursor(v(10, 0, 0), None);
    editor.toggle_box_select(true);
    editor.update_cursor(v(12, 1, 1), None);
    editor.toggle_box_select(true);

    assert_eq!(
        editor.boxes(),
        &[
            SelectionBox::new(v(0, 0, 0), v(3, 3, 3)),
            SelectionBox::new(v(10, 0, 0), v(12, 1, 1)),
        ]
    );

    // Pick the first box by casting a ray at it
    let config = EditorConfig::default();
    let ray = voxsel::math::Ray::new(Vec3::new(-5.0, 1.5, 1.5), Vec3::X);
    let pick = update_cursor_from_ray(&mut editor, &ray, &config);
    assert_eq!(pick.hover_index, Some(0));
    assert_eq!(pick.position, v(0, 1, 1));
    editor.toggle_box_select(false);
    assert_eq!(editor.active_box_index(), Some(0));

    // Grab its -x face and pull it out
    editor.update_cursor(v(0, 1, 1), Some(0));
    assert_eq!(editor.toggle_box_select(false), Some(v(0, 1, 1)));
    editor.update_cursor(v(-4, 9, 9), None);
    editor.disable_box_select();
    assert_eq!(editor.boxes()[0].min(), v(-4, 0, 0));
    assert_eq!(editor.boxes()[0].max(), v(3, 3, 3));

    // While editable only one copy of the active box is drawn
    let mut renderer = CountingRenderer::default();
    editor.render(&mut renderer, &Mat4::IDENTITY, None);
    assert_eq!(renderer.styles, vec![BoxStyle::Committed, BoxStyle::ActiveStatic]);

    // Removing it moves focus to the remaining box
    editor.deselect_active();
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.active_box_index(), Some(0));
    assert_eq!(
        editor.active_box().map(|b| b.selection_box()),
        Some(SelectionBox::new(v(10, 0, 0), v(12, 1, 1)))
    );

    editor.deselect_active();
    assert_eq!(editor.state(), &EditState::Empty { parked: None });
}

#[test]
fn test_camera_pick_and_draw() {
    let mut editor = SelectionGroupEditor::new();
    editor.set_selection_group(SelectionGroup::from(vec![SelectionBox::new(v(-1, -1, -1), v(0, 0, 0))]));

    let camera = Camera::default();
    let viewport = Vec2::new(800.0, 600.0);
    let ray = camera.screen_ray(viewport * 0.5, viewport);

    let (index, _) = editor.closest_intersection(ray.origin, ray.direction);
    assert_eq!(index, Some(0));

    let mut batch = LineBatch::default();
    editor.render(&mut batch, &camera.view_projection(), Some(camera.position));
    assert_eq!(batch.box_count(), 1);
    assert!(!batch.as_bytes().is_empty());
}

#[test]
fn test_editable_toggle_preserves_selection() {
    let mut editor = SelectionGroupEditor::new();
    editor.update_cursor(v(1, 1, 1), None);
    editor.toggle_box_select(false);
    editor.toggle_box_select(false);

    editor.set_editable(false);
    editor.update_cursor(v(7, 7, 7), None);
    assert_eq!(editor.toggle_box_select(false), None);
    assert_eq!(editor.len(), 1);

    editor.set_editable(true);
    let active = editor.active_box().unwrap();
    assert!(active.is_static());
    assert_eq!(active.selection_box(), SelectionBox::voxel(v(1, 1, 1)));
}
