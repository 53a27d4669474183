use bevy::asset::LoadState;
use bevy::prelude::*;
use logofield_core::{LogoSpec, SwarmError, SwarmResult};
use logofield_sim::state::report_startup_failure;
use logofield_sim::{DriverState, SwarmStartupFailed};
use std::collections::HashMap;

/// Loaded logo images by logo id. Bodies never hold their image; the renderer
/// looks it up here every frame.
#[derive(Resource, Debug, Clone, Default)]
pub struct ImageMap(HashMap<String, Handle<Image>>);

impl ImageMap {
    pub fn get(&self, id: &str) -> Option<&Handle<Image>> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Handle<Image>)> for ImageMap {
    fn from_iter<T: IntoIterator<Item = (String, Handle<Image>)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Where one image load stands
#[derive(Debug, Clone, PartialEq)]
pub enum AssetStatus {
    Pending,
    Loaded,
    Failed(String),
}

struct PendingImage {
    id: String,
    path: String,
    handle: Handle<Image>,
}

/// All-or-nothing load of every logo image for one mount
#[derive(Resource)]
pub struct ImageLoad {
    pending: Vec<PendingImage>,
}

impl ImageLoad {
    /// Start loading every logo's image
    pub fn begin(logos: &[LogoSpec], asset_server: &AssetServer) -> Self {
        Self::from_handles(
            logos
                .iter()
                .map(|logo| {
                    let handle = asset_server.load::<Image>(logo.image.clone());
                    (logo.id.clone(), logo.image.clone(), handle)
                }),
        )
    }

    /// Track loads that are already in flight, in input order
    pub fn from_handles(handles: impl IntoIterator<Item = (String, String, Handle<Image>)>) -> Self {
        Self {
            pending: handles
                .into_iter()
                .map(|(id, path, handle)| PendingImage { id, path, handle })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Check every load.
    ///
    /// The first failure in input order fails the whole load, even while other
    /// images are still in flight. Otherwise yields the full map once every
    /// image is in, and `None` while any is pending.
    pub fn poll(
        &self,
        mut status_of: impl FnMut(&Handle<Image>) -> AssetStatus,
    ) -> SwarmResult<Option<ImageMap>> {
        let mut all_loaded = true;
        for image in &self.pending {
            match status_of(&image.handle) {
                AssetStatus::Loaded => {}
                AssetStatus::Pending => all_loaded = false,
                AssetStatus::Failed(reason) => {
                    return Err(SwarmError::ResourceLoad {
                        id: image.id.clone(),
                        path: image.path.clone(),
                        reason,
                    });
                }
            }
        }

        if !all_loaded {
            return Ok(None);
        }
        Ok(Some(
            self.pending
                .iter()
                .map(|image| (image.id.clone(), image.handle.clone()))
                .collect(),
        ))
    }
}

pub fn asset_status(asset_server: &AssetServer, handle: &Handle<Image>) -> AssetStatus {
    match asset_server.get_load_state(handle.id()) {
        Some(LoadState::Loaded) => AssetStatus::Loaded,
        Some(LoadState::Failed(err)) => AssetStatus::Failed(err.to_string()),
        _ => AssetStatus::Pending,
    }
}

/// Poll the image load once per frame while idle. Success hands the map over
/// and starts the frame driver; failure aborts startup. Either way the load is
/// dropped, so completion is signalled exactly once.
pub fn poll_image_load(
    mut commands: Commands,
    load: Res<ImageLoad>,
    asset_server: Res<AssetServer>,
    mut next_state: ResMut<NextState<DriverState>>,
    mut failures: EventWriter<SwarmStartupFailed>,
) {
    match load.poll(|handle| asset_status(&asset_server, handle)) {
        Ok(None) => {}
        Ok(Some(images)) => {
            info!("Loaded {} logo images", images.len());
            commands.insert_resource(images);
            commands.remove_resource::<ImageLoad>();
            next_state.set(DriverState::Running);
        }
        Err(error) => {
            commands.remove_resource::<ImageLoad>();
            report_startup_failure(error, &mut failures, &mut next_state);
        }
    }
}

/// Release image handles on unmount
pub fn release_images(mut commands: Commands) {
    commands.remove_resource::<ImageLoad>();
    commands.remove_resource::<ImageMap>();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(n: u128) -> Handle<Image> {
        Handle::weak_from_u128(n)
    }

    fn three_logos() -> ImageLoad {
        ImageLoad::from_handles([
            ("react".to_string(), "logos/react.png".to_string(), handle(1)),
            ("rust".to_string(), "logos/rust.png".to_string(), handle(2)),
            ("css".to_string(), "logos/css.png".to_string(), handle(3)),
        ])
    }

    #[test]
    fn test_pending_until_all_loaded() {
        let load = three_logos();
        let result = load.poll(|h| {
            if *h == handle(2) {
                AssetStatus::Pending
            } else {
                AssetStatus::Loaded
            }
        });
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_all_loaded_yields_full_map() {
        let load = three_logos();
        let images = load.poll(|_| AssetStatus::Loaded).unwrap().unwrap();

        assert_eq!(images.len(), 3);
        assert_eq!(images.get("rust"), Some(&handle(2)));
        assert!(images.contains("css"));
        assert!(!images.contains("go"));
    }

    #[test]
    fn test_single_failure_fails_whole_load() {
        let load = three_logos();
        let result = load.poll(|h| {
            if *h == handle(2) {
                AssetStatus::Failed("file not found".into())
            } else if *h == handle(3) {
                AssetStatus::Pending
            } else {
                AssetStatus::Loaded
            }
        });

        assert_eq!(
            result.err(),
            Some(SwarmError::ResourceLoad {
                id: "rust".into(),
                path: "logos/rust.png".into(),
                reason: "file not found".into(),
            })
        );
    }

    #[test]
    fn test_first_failure_in_input_order_reported() {
        let load = three_logos();
        let result = load.poll(|h| {
            if *h == handle(1) {
                AssetStatus::Loaded
            } else {
                AssetStatus::Failed("corrupt".into())
            }
        });
        assert!(matches!(result, Err(SwarmError::ResourceLoad { id, .. }) if id == "rust"));
    }

    #[test]
    fn test_empty_roster_completes_immediately() {
        let load = ImageLoad::from_handles([]);
        assert!(load.is_empty());
        let images = load.poll(|_| AssetStatus::Pending).unwrap().unwrap();
        assert!(images.is_empty());
    }
}
