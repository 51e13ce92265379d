//! Camera projection modes and orthographic frustum math
//!
//! Four mutually exclusive views: a freely orbitable perspective camera and
//! three fixed orthographic cameras pinned to the canonical axes. The
//! orthographic frustum is refit on every viewport resize from the aspect
//! ratio against a fixed world width, so the scene keeps a constant on-screen
//! scale. Everything here is a pure function of `(mode, aspect)`; the only
//! state a [`ProjectionSystem`] carries is the mode itself.

use crate::configuration::config::Projection;
use crate::simulation::kinematics::NVec3;

/// World-space width shown by the orthographic views, in render units
pub const ORTHO_WORLD_WIDTH: f64 = 20.0;

/// Distance of the orthographic camera from the target along its axis
pub const ORTHO_DISTANCE: f64 = 100.0;

/// Near/far planes for the orthographic views; generous on both sides since
/// the camera sits far outside the scene
pub const ORTHO_NEAR: f64 = -1000.0;
pub const ORTHO_FAR: f64 = 1000.0;

/// Axis-aligned rectangular viewing volume of an orthographic camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoFrustum {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

/// Where a camera sits and how it is oriented
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPose {
    pub position: NVec3,
    pub target: NVec3,
    pub up: NVec3,
}

/// Everything a renderer needs to set up the active camera
#[derive(Debug, Clone, PartialEq)]
pub enum CameraRig {
    /// Free camera with orbit controls enabled
    Perspective {
        pose: CameraPose,
        fov_deg: f64,
        near: f64,
        far: f64,
    },
    /// Fixed axis-pinned camera, orbit controls disabled
    Orthographic {
        pose: CameraPose,
        frustum: OrthoFrustum,
    },
}

/// Orthographic world extents for a viewport aspect ratio: a fixed width and
/// a height that follows from it
pub fn fit_ortho_size(aspect: f64) -> (f64, f64) {
    let width = ORTHO_WORLD_WIDTH;
    (width, width / aspect)
}

/// Holds the active projection mode and derives camera rigs from it
#[derive(Debug, Clone)]
pub struct ProjectionSystem {
    mode: Projection,
}

impl ProjectionSystem {
    pub fn new(mode: Projection) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Projection {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Projection) {
        self.mode = mode;
    }

    /// Camera rig for the current mode at the given viewport aspect ratio
    /// Call again after a resize to refit the orthographic frustum
    pub fn rig(&self, aspect: f64) -> CameraRig {
        camera_rig(self.mode, aspect)
    }
}

/// Pure mapping `(mode, aspect) -> camera rig`
pub fn camera_rig(mode: Projection, aspect: f64) -> CameraRig {
    match mode {
        Projection::Persp => CameraRig::Perspective {
            pose: CameraPose {
                position: NVec3::new(8.0, 6.0, 10.0),
                target: NVec3::zeros(),
                up: NVec3::new(0.0, 0.0, 1.0), // Z is world-up
            },
            fov_deg: 50.0,
            near: 0.01,
            far: 1000.0,
        },
        Projection::Xy | Projection::Yz | Projection::Zx => {
            let (w, h) = fit_ortho_size(aspect);
            let frustum = OrthoFrustum {
                left: -w / 2.0,
                right: w / 2.0,
                top: h / 2.0,
                bottom: -h / 2.0,
                near: ORTHO_NEAR,
                far: ORTHO_FAR,
            };
            let d = ORTHO_DISTANCE;
            let (position, up) = match mode {
                // above, looking down -Z; Y on screen stays vertical
                Projection::Xy => (NVec3::new(0.0, 0.0, d), NVec3::new(0.0, 1.0, 0.0)),
                // along +X looking back; Z vertical, Y horizontal
                Projection::Yz => (NVec3::new(d, 0.0, 0.0), NVec3::new(0.0, 0.0, 1.0)),
                // along +Y looking back; Z vertical, X horizontal
                Projection::Zx => (NVec3::new(0.0, d, 0.0), NVec3::new(0.0, 0.0, 1.0)),
                Projection::Persp => unreachable!(),
            };
            CameraRig::Orthographic {
                pose: CameraPose {
                    position,
                    target: NVec3::zeros(),
                    up,
                },
                frustum,
            }
        }
    }
}
