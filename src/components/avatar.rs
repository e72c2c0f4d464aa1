//! Creator avatar resolution
//!
//! A missing picture and a picture that fails to load both resolve to the
//! placeholder. Failures are never surfaced.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Decides whether an image path can be loaded
pub type ImageProbe = fn(&Path) -> bool;

/// Probe by decoding the image header
pub fn probe_image(path: &Path) -> bool {
    image::image_dimensions(path).is_ok()
}

pub struct AvatarResolver {
    placeholder: PathBuf,
    probe: ImageProbe,
    loaded: RefCell<HashMap<PathBuf, bool>>,
}

impl fmt::Debug for AvatarResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvatarResolver")
            .field("placeholder", &self.placeholder)
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl AvatarResolver {
    pub fn new(placeholder: impl Into<PathBuf>) -> Self {
        Self::with_probe(placeholder, probe_image)
    }

    pub fn with_probe(placeholder: impl Into<PathBuf>, probe: ImageProbe) -> Self {
        Self {
            placeholder: placeholder.into(),
            probe,
            loaded: RefCell::new(HashMap::new()),
        }
    }

    /// Path to display for a creator picture
    pub fn resolve(&self, picture: Option<&str>) -> PathBuf {
        let Some(picture) = picture else {
            return self.placeholder.clone();
        };
        let path = PathBuf::from(picture);

        let ok = *self
            .loaded
            .borrow_mut()
            .entry(path.clone())
            .or_insert_with(|| {
                let ok = (self.probe)(&path);
                if !ok {
                    debug!(?path, "avatar failed to load, using placeholder");
                }
                ok
            });

        if ok {
            path
        } else {
            self.placeholder.clone()
        }
    }
}
