use crate::creature::components::{ModelPrepared, ModelRoot};
use crate::creature::resources::*;
use crate::events::{LoadModelRequest, ModelSwapped};
use crate::simulation::resources::{Locomotion, Selection, ViewerSettings};
use bevy::asset::{LoadState, RecursiveDependencyLoadState};
use bevy::gltf::Gltf;
use bevy::light::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::scene::{SceneInstance, SceneSpawner};
use reptilesim::animation::DriverCommand;
use reptilesim::error::LoadError;
use reptilesim::loader::{ClipSelection, LoadGuard, LoadTicket};
use reptilesim::species::VariantKey;

pub fn request_initial_model(
    selection: Res<Selection>,
    mut load_requests: MessageWriter<LoadModelRequest>,
) {
    load_requests.write(LoadModelRequest {
        variant: selection.variant(),
    });
}

pub fn start_model_loads(
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
    mut load_requests: MessageReader<LoadModelRequest>,
    mut loader: ResMut<ModelLoader>,
) {
    for request in load_requests.read() {
        let path = request.variant.asset_path(&settings);
        let ticket = loader.guard.begin(request.variant);
        info!(
            "Loading {:?} from {} (generation {})",
            request.variant, path, ticket.generation
        );
        let handle = asset_server.load::<Gltf>(path.clone());
        loader.in_flight.push(PendingLoad {
            ticket,
            path,
            handle,
        });
    }
}

/// Swaps in the newest completed load. Older completions are dropped and a
/// failed load keeps the previous model on screen.
pub fn finish_model_loads(
    mut commands: Commands,
    settings: Res<ViewerSettings>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut loader: ResMut<ModelLoader>,
    mut active: ResMut<ActiveCreature>,
    mut binding: ResMut<AnimationBinding>,
    mut swaps: MessageWriter<ModelSwapped>,
) {
    let in_flight = std::mem::take(&mut loader.in_flight);
    for pending in in_flight {
        let progress = load_progress(&asset_server, &pending);
        match classify_completion(&loader.guard, &pending.ticket, progress) {
            Completion::Loading => {
                loader.in_flight.push(pending);
                continue;
            }
            Completion::Stale(stale) => {
                debug!("Discarding {}: {stale}", pending.path);
                continue;
            }
            Completion::Failed(err) => {
                error!("{err}; keeping the current model");
                continue;
            }
            Completion::Ready => {}
        }

        let Some(gltf) = gltfs.get(&pending.handle) else {
            error!("{} finished loading but is no longer available", pending.path);
            continue;
        };
        let Some(scene) = gltf
            .default_scene
            .clone()
            .or_else(|| gltf.scenes.first().cloned())
        else {
            error!("{} contains no scene; keeping the current model", pending.path);
            continue;
        };
        let clip = walk_clip(gltf, &settings.animation.walk_clip_name, &pending.path);

        let variant = pending.ticket.variant;
        swap_in_model(
            &mut commands,
            &mut graphs,
            &mut active,
            &mut binding,
            LoadedModel {
                variant,
                gltf: pending.handle,
                scene,
                clip,
            },
        );
        info!("Swapped in {variant:?}");
        swaps.write(ModelSwapped { variant });
    }
}

#[derive(Debug, PartialEq)]
enum Completion {
    Loading,
    Stale(LoadError),
    Failed(LoadError),
    Ready,
}

/// Stale completions are dropped whether they succeeded or not; only the
/// newest ticket may report a failure or swap.
fn classify_completion(
    guard: &LoadGuard,
    ticket: &LoadTicket,
    progress: Result<bool, LoadError>,
) -> Completion {
    if matches!(progress, Ok(false)) {
        return Completion::Loading;
    }
    if let Err(stale) = guard.check(ticket) {
        return Completion::Stale(stale);
    }
    match progress {
        Ok(_) => Completion::Ready,
        Err(err) => Completion::Failed(err),
    }
}

struct LoadedModel {
    variant: VariantKey,
    gltf: Handle<Gltf>,
    scene: Handle<Scene>,
    clip: Option<Handle<AnimationClip>>,
}

/// Releases the current model and attaches `loaded` in the same command
/// flush, so no frame ever shows zero or two models.
fn swap_in_model(
    commands: &mut Commands,
    graphs: &mut Assets<AnimationGraph>,
    active: &mut ActiveCreature,
    binding: &mut AnimationBinding,
    loaded: LoadedModel,
) -> Entity {
    if let Some(previous) = active.0.take() {
        commands.entity(previous.root).despawn();
        if let Some(walk) = previous.walk {
            graphs.remove(&walk.graph);
        }
        debug!("Released {:?} ({:?})", previous.variant, previous.gltf.id());
    }
    binding.release();

    let LoadedModel {
        variant,
        gltf,
        scene,
        clip,
    } = loaded;
    let walk = clip.map(|clip| {
        let (graph, node) = AnimationGraph::from_clip(clip);
        WalkClip {
            graph: graphs.add(graph),
            node,
        }
    });
    let root = commands
        .spawn((
            SceneRoot(scene),
            Transform::default(),
            ModelRoot { variant },
            Name::new(format!("{variant:?}")),
        ))
        .id();

    active.0 = Some(ActiveModel {
        variant,
        root,
        gltf,
        walk,
    });
    root
}

fn load_progress(asset_server: &AssetServer, pending: &PendingLoad) -> Result<bool, LoadError> {
    let failure = |reason: String| LoadError::AssetLoadFailure {
        path: pending.path.clone(),
        reason,
    };
    if let Some(LoadState::Failed(err)) = asset_server.get_load_state(&pending.handle) {
        return Err(failure(err.to_string()));
    }
    match asset_server.get_recursive_dependency_load_state(&pending.handle) {
        Some(RecursiveDependencyLoadState::Loaded) => Ok(true),
        Some(RecursiveDependencyLoadState::Failed(err)) => Err(failure(err.to_string())),
        _ => Ok(false),
    }
}

fn walk_clip(gltf: &Gltf, walk_clip_name: &str, path: &str) -> Option<Handle<AnimationClip>> {
    let names: Vec<Option<&str>> = gltf
        .animations
        .iter()
        .map(|clip| {
            gltf.named_animations
                .iter()
                .find(|(_, named)| *named == clip)
                .map(|(name, _)| &**name)
        })
        .collect();

    match ClipSelection::select(&names, walk_clip_name) {
        ClipSelection::Named { index } => gltf.animations.get(index).cloned(),
        ClipSelection::Fallback { index, name } => {
            warn!(
                "{path} has no \"{walk_clip_name}\" clip, falling back to \"{}\"",
                name.as_deref().unwrap_or("<unnamed>")
            );
            gltf.animations.get(index).cloned()
        }
        ClipSelection::Missing => {
            warn!("{path} has no animation clips; movement controls are inert");
            None
        }
    }
}

/// Once the scene has been instantiated: every mesh casts and receives
/// shadows, and the walk clip is bound to the model's animation player.
pub fn prepare_loaded_model(
    mut commands: Commands,
    scene_spawner: Res<SceneSpawner>,
    active: Res<ActiveCreature>,
    mut binding: ResMut<AnimationBinding>,
    roots: Query<(Entity, &ModelRoot, &SceneInstance), Without<ModelPrepared>>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Some(model) = active.0.as_ref() else {
        return;
    };

    for (root, marker, instance) in &roots {
        if root != model.root || !scene_spawner.instance_is_ready(**instance) {
            continue;
        }

        let mut player_entity = None;
        for entity in children.iter_descendants(root) {
            if meshes.contains(entity) {
                commands
                    .entity(entity)
                    .remove::<(NotShadowCaster, NotShadowReceiver)>();
            }
            if player_entity.is_none() && players.contains(entity) {
                player_entity = Some(entity);
            }
        }
        commands.entity(root).insert(ModelPrepared);

        let Some(walk) = model.walk.as_ref() else {
            continue;
        };
        let Some(player_entity) = player_entity else {
            warn!("{:?} has clips but no animation player", marker.variant);
            continue;
        };
        let Ok(mut player) = players.get_mut(player_entity) else {
            continue;
        };

        commands
            .entity(player_entity)
            .insert(AnimationGraphHandle(walk.graph.clone()));
        player.play(walk.node).repeat().pause();
        binding.bind(player_entity);
        debug!("Walk clip bound for {:?}", marker.variant);
    }
}

pub fn drive_animation(
    locomotion: Res<Locomotion>,
    active: Res<ActiveCreature>,
    mut binding: ResMut<AnimationBinding>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let Some(player_entity) = binding.player else {
        return;
    };
    let Some(node) = active.walk_node() else {
        return;
    };
    let Ok(mut player) = players.get_mut(player_entity) else {
        binding.release();
        return;
    };
    let Some(command) = binding.driver.sync(&locomotion.0) else {
        return;
    };
    let Some(animation) = player.animation_mut(node) else {
        return;
    };

    match command {
        DriverCommand::Play { rate } => {
            animation.set_speed(rate).resume();
        }
        DriverCommand::SetRate { rate } => {
            animation.set_speed(rate);
        }
        DriverCommand::Pause => {
            animation.pause();
        }
    }
}
