//! Cursor placement from a view ray

use crate::core::config::EditorConfig;
use crate::core::types::IVec3;
use crate::math::Ray;
use super::editor::SelectionGroupEditor;

/// Where the cursor landed for one view ray
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorPick {
    /// Voxel under the cursor
    pub position: IVec3,
    /// Committed box the cursor rests on
    pub hover_index: Option<usize>,
}

/// Place the cursor along `ray`.
///
/// The cursor snaps to the voxel where the ray enters the closest committed
/// box. Without a hit it floats `pick_distance` along the ray.
pub fn pick_cursor(editor: &SelectionGroupEditor, ray: &Ray, config: &EditorConfig) -> CursorPick {
    let length = ray.direction.length();
    let hit = editor
        .closest_hit(ray.origin, ray.direction)
        .filter(|(_, t)| t * length <= config.max_pick_distance);

    match hit {
        Some((index, t)) => {
            let selection = &editor.boxes()[index];
            // Entry point sits on a face; clamp so it rounds into the box
            let position = ray.at(t).floor().as_ivec3().clamp(selection.min(), selection.max());
            CursorPick { position, hover_index: Some(index) }
        }
        None => {
            let t = if length > 0.0 { config.pick_distance / length } else { 0.0 };
            CursorPick {
                position: ray.at(t).floor().as_ivec3(),
                hover_index: None,
            }
        }
    }
}

/// Pick and feed the result straight into the editor
pub fn update_cursor_from_ray(editor: &mut SelectionGroupEditor, ray: &Ray, config: &EditorConfig) -> CursorPick {
    let pick = pick_cursor(editor, ray, config);
    editor.update_cursor(pick.position, pick.hover_index);
    pick
}
