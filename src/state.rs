//! Single source of truth for all mutable animation state.
//!
//! `SceneState` owns the object registry, the designated-object table, the
//! animation options, the spot light and the environment. It does no I/O and
//! has no side effects beyond in-memory mutation; the render loop and the
//! pick dispatcher borrow it per tick.

use std::collections::HashMap;

use crate::error::SceneError;
use crate::options::{AnimationOptions, OptionValue};
use crate::types::{AnimatableObject, Environment, ObjectId, SpotLight};

/// Objects singled out by the update and pick logic.
///
/// Roles are optional so earlier scene stages can run without a sphere or a
/// light; a role that is set must resolve to a registered object.
#[derive(Debug, Clone, Default)]
pub struct Designations {
    /// Gets the absolute time-based rotation every tick
    pub spinner: Option<ObjectId>,
    /// Gets the phase-accumulator vertical bounce every tick
    pub bouncer: Option<ObjectId>,
    /// Highlighted when a pointer ray hits it
    pub pick_sphere: Option<ObjectId>,
    /// Objects with this tag spin when a pointer ray hits them
    pub pick_box_tag: Option<String>,
}

#[derive(Debug, Default)]
pub struct SceneState {
    objects: Vec<AnimatableObject>,
    index: HashMap<ObjectId, usize>,
    pub designations: Designations,
    pub options: AnimationOptions,
    pub light: Option<SpotLight>,
    pub environment: Environment,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the registry. Ids must be unique; the scene builder
    /// allocates them sequentially.
    pub fn register(&mut self, object: AnimatableObject) -> ObjectId {
        let id = object.id;
        debug_assert!(
            !self.index.contains_key(&id),
            "duplicate object id {id} registered"
        );
        self.index.insert(id, self.objects.len());
        self.objects.push(object);
        id
    }

    pub fn get(&self, id: ObjectId) -> Result<&AnimatableObject, SceneError> {
        self.index
            .get(&id)
            .map(|&slot| &self.objects[slot])
            .ok_or(SceneError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Result<&mut AnimatableObject, SceneError> {
        match self.index.get(&id) {
            Some(&slot) => Ok(&mut self.objects[slot]),
            None => Err(SceneError::NotFound(id)),
        }
    }

    pub fn objects(&self) -> &[AnimatableObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Apply one named option edit.
    ///
    /// Validation happens first; a rejected edit leaves both the options and
    /// the scene untouched. `sphere_color` and `wireframe` also land on the
    /// designated sphere's material immediately, matching the control-surface
    /// behavior of the original scene; the numeric options are picked up by
    /// the next tick.
    pub fn set_option(&mut self, name: &str, value: OptionValue) -> Result<(), SceneError> {
        self.options.set(name, value)?;

        if let Some(id) = self.designations.pick_sphere {
            let color = self.options.sphere_color;
            let wireframe = self.options.wireframe;
            match name {
                "sphere_color" => self.get_mut(id)?.material.color = color,
                "wireframe" => self.get_mut(id)?.material.wireframe = wireframe,
                _ => {}
            }
        }
        Ok(())
    }

    /// Check every designated role against the registry. Called once at
    /// session start; a missing object is fatal before the loop begins.
    pub fn validate_designations(&self) -> Result<(), SceneError> {
        let roles = [
            ("spinner", self.designations.spinner),
            ("bouncer", self.designations.bouncer),
            ("pick sphere", self.designations.pick_sphere),
        ];
        for (role, id) in roles {
            if let Some(id) = id {
                if !self.index.contains_key(&id) {
                    return Err(SceneError::Configuration {
                        role,
                        detail: id.to_string(),
                    });
                }
            }
        }
        if let Some(tag) = &self.designations.pick_box_tag {
            if !self.objects.iter().any(|object| &object.tag == tag) {
                return Err(SceneError::Configuration {
                    role: "pick box",
                    detail: format!("tag {tag:?}"),
                });
            }
        }
        Ok(())
    }
}
