use bevy::animation::graph::AnimationNodeIndex;
use bevy::gltf::Gltf;
use bevy::prelude::*;
use reptilesim::animation::AnimationDriver;
use reptilesim::loader::{LoadGuard, LoadTicket};
use reptilesim::species::VariantKey;

pub struct PendingLoad {
    pub ticket: LoadTicket,
    pub path: String,
    pub handle: Handle<Gltf>,
}

/// In-flight model loads. Loads are never cancelled; completions older than
/// the latest request are dropped when they arrive.
#[derive(Resource, Default)]
pub struct ModelLoader {
    pub guard: LoadGuard,
    pub in_flight: Vec<PendingLoad>,
}

pub struct WalkClip {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
}

/// The single model currently attached to the scene. Holding the strong
/// glTF handle keeps its meshes alive; dropping it releases them.
pub struct ActiveModel {
    pub variant: VariantKey,
    pub root: Entity,
    pub gltf: Handle<Gltf>,
    pub walk: Option<WalkClip>,
}

#[derive(Resource, Default)]
pub struct ActiveCreature(pub Option<ActiveModel>);

impl ActiveCreature {
    pub fn variant(&self) -> Option<VariantKey> {
        self.0.as_ref().map(|model| model.variant)
    }

    pub fn walk_node(&self) -> Option<AnimationNodeIndex> {
        self.0.as_ref()?.walk.as_ref().map(|walk| walk.node)
    }

    pub fn has_walk_clip(&self) -> bool {
        self.walk_node().is_some()
    }
}

/// Non-owning link from the animation driver to the player inside the
/// active model. Invalid as soon as the model is swapped out.
#[derive(Resource)]
pub struct AnimationBinding {
    pub driver: AnimationDriver,
    pub player: Option<Entity>,
}

impl AnimationBinding {
    pub fn new(reference_speed: f32) -> Self {
        Self {
            driver: AnimationDriver::new(reference_speed),
            player: None,
        }
    }

    pub fn bind(&mut self, player: Entity) {
        self.player = Some(player);
        self.driver.bind();
    }

    pub fn release(&mut self) {
        self.player = None;
        self.driver.unbind();
    }
}
