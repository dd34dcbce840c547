//! Pointer-pick reactions.
//!
//! A stateless reduce over the frame's hit list. Every hit is visited in
//! ascending distance order with no early exit, so a farther hit can overwrite
//! the effect of a nearer one. Reactions are independent per matched object
//! and insensitive to hit order for the current object set.

use crate::error::SceneError;
use crate::frame::FrameInfo;
use crate::state::SceneState;
use crate::types::{PickHit, SceneDelta, HIGHLIGHT_COLOR};

/// Apply pick reactions for one frame and return the deltas.
///
/// A hit on the designated sphere paints it with [`HIGHLIGHT_COLOR`]. A hit
/// on an object carrying the designated box tag assigns the frame time to its
/// rotation, the same formula as the ambient spin; when both target the same
/// object the double write is intentional and agrees.
pub fn dispatch(
    frame: FrameInfo,
    hits: &[PickHit],
    state: &mut SceneState,
) -> Result<Vec<SceneDelta>, SceneError> {
    if hits.is_empty() {
        // the common case
        return Ok(Vec::new());
    }

    let sphere = state.designations.pick_sphere;
    let box_tag = state.designations.pick_box_tag.clone();
    let mut deltas = Vec::new();

    for hit in hits {
        if sphere == Some(hit.id) {
            let object = state.get_mut(hit.id)?;
            object.material.color = HIGHLIGHT_COLOR;
            deltas.push(SceneDelta::Material {
                id: hit.id,
                color: object.material.color,
                wireframe: object.material.wireframe,
            });
        }

        if let Some(tag) = box_tag.as_deref() {
            let object = state.get_mut(hit.id)?;
            if object.tag == tag {
                object.transform.rotation.x = frame.time;
                object.transform.rotation.y = frame.time;
                deltas.push(SceneDelta::Transform {
                    id: hit.id,
                    transform: object.transform,
                });
            }
        }
    }

    Ok(deltas)
}
