use super::textured_builder;
use crate::state::SceneState;

/// Final stage: wires the pointer-pick reactions. The sphere highlight role
/// is already designated by the second stage; this stage arms the tagged box
/// so pointer hits spin it.
pub fn create_picking_scene() -> SceneState {
    let mut builder = textured_builder();
    builder.designations_mut().pick_box_tag = Some("theBox".to_string());
    builder.build()
}
