use abut_rs::geometry::primitives::Point;
use abut_rs::placement::Composition;
use log::debug;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// The angles a rotation gesture can land on, in degrees.
pub const SNAP_ANGLES_DEG: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, -135.0, -90.0, -45.0];

/// Maps any angle into `(-180, 180]` degrees.
pub fn normalize_angle_deg(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Nearest snap angle to `angle`, measured along the shorter arc.
pub fn snap_angle_deg(angle: f64) -> f64 {
    let mut best = SNAP_ANGLES_DEG[0];
    let mut best_dist = angular_dist(angle, best);
    for &snap in &SNAP_ANGLES_DEG[1..] {
        let dist = angular_dist(angle, snap);
        if dist < best_dist {
            best = snap;
            best_dist = dist;
        }
    }
    best
}

fn angular_dist(a: f64, b: f64) -> f64 {
    normalize_angle_deg(a - b).abs()
}

/// Editable state of a single shape in the row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeState {
    /// Always one of [`SNAP_ANGLES_DEG`]
    pub rotation_deg: f64,
    pub scale: f64,
    /// Rotation gestures on this shape are ignored
    pub locked: bool,
}

/// Interaction limits, taken from the studio configuration.
#[derive(Clone, Copy, Debug)]
pub struct EditorLimits {
    pub scale_range: (f64, f64),
    pub rotate_sensitivity: f64,
}

/// A drag gesture in progress. At most one is active at a time; pointer
/// motion outside a gesture is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    Rotating {
        shape: usize,
        start_rotation_deg: f64,
        start_pointer_angle_deg: f64,
    },
    Scaling {
        shape: usize,
        start_scale: f64,
        start_dist: f64,
    },
    Panning {
        start_pointer: Point,
        start_pan: Point,
    },
}

/// Pointer and selection events fed into the editor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Select(Option<usize>),
    BeginRotate { shape: usize, pointer: Point },
    BeginScale { shape: usize, pointer: Point },
    /// Press on empty canvas: deselects and starts panning the view
    BeginPan { pointer: Point },
    Drag { pointer: Point },
    Release,
    /// Escape: abort the active gesture and drop the selection
    Cancel,
}

/// The editor state machine: per-shape rotation/scale, row order, selection
/// and the active gesture. Layout itself lives in the contact engine; the
/// editor only decides when a relayout is due.
#[derive(Clone, Debug)]
pub struct EditorState {
    pub shapes: Vec<ShapeState>,
    /// Row order as indices into `shapes`
    pub order: Vec<usize>,
    pub selected: Option<usize>,
    pub gesture: Gesture,
    /// View offset dragged on empty canvas; presentation state, never
    /// affects layout
    pub pan: Point,
    limits: EditorLimits,
    /// World centers of the shapes after the last relayout, gesture anchors
    centers: Vec<Point>,
}

impl EditorState {
    pub fn new(n_shapes: usize, locked: &[bool], limits: EditorLimits) -> Self {
        let shapes = (0..n_shapes)
            .map(|i| ShapeState {
                rotation_deg: 0.0,
                scale: 1.0,
                locked: locked.get(i).copied().unwrap_or(false),
            })
            .collect();
        Self {
            shapes,
            order: (0..n_shapes).collect(),
            selected: None,
            gesture: Gesture::Idle,
            pan: Point(0.0, 0.0),
            limits,
            centers: vec![Point(0.0, 0.0); n_shapes],
        }
    }

    pub fn n_shapes(&self) -> usize {
        self.shapes.len()
    }

    /// Refreshes the gesture anchors from a freshly computed layout.
    /// `composition.placed` is in row order; centers are stored per shape.
    pub fn set_centers(&mut self, composition: &Composition) {
        for (slot, placed) in self.order.iter().zip(&composition.placed) {
            self.centers[*slot] = placed.world_bbox().centroid();
        }
    }

    /// Feeds one event into the state machine. Returns true when the shapes
    /// changed and the caller should recompute the layout.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Select(selection) => {
                self.selected = selection;
                false
            }
            InputEvent::BeginRotate { shape, pointer } => {
                if shape >= self.shapes.len() || self.shapes[shape].locked {
                    return false;
                }
                self.selected = Some(shape);
                self.gesture = Gesture::Rotating {
                    shape,
                    start_rotation_deg: self.shapes[shape].rotation_deg,
                    start_pointer_angle_deg: self.pointer_angle_deg(shape, pointer),
                };
                false
            }
            InputEvent::BeginScale { shape, pointer } => {
                if shape >= self.shapes.len() {
                    return false;
                }
                self.selected = Some(shape);
                self.gesture = Gesture::Scaling {
                    shape,
                    start_scale: self.shapes[shape].scale,
                    start_dist: self.centers[shape].distance_to(&pointer).max(f64::EPSILON),
                };
                false
            }
            InputEvent::BeginPan { pointer } => {
                self.selected = None;
                self.gesture = Gesture::Panning {
                    start_pointer: pointer,
                    start_pan: self.pan,
                };
                false
            }
            InputEvent::Drag { pointer } => self.drag(pointer),
            InputEvent::Release => {
                // Rotation is snapped continuously, releasing re-snaps once
                // more in case the last drag event was dropped.
                if let Gesture::Rotating { shape, .. } = self.gesture {
                    self.shapes[shape].rotation_deg =
                        snap_angle_deg(self.shapes[shape].rotation_deg);
                }
                self.gesture = Gesture::Idle;
                false
            }
            InputEvent::Cancel => {
                self.gesture = Gesture::Idle;
                self.selected = None;
                false
            }
        }
    }

    fn drag(&mut self, pointer: Point) -> bool {
        match self.gesture {
            Gesture::Idle => false,
            Gesture::Rotating {
                shape,
                start_rotation_deg,
                start_pointer_angle_deg,
            } => {
                let delta = self.pointer_angle_deg(shape, pointer) - start_pointer_angle_deg;
                let raw = start_rotation_deg + self.limits.rotate_sensitivity * delta;
                let snapped = snap_angle_deg(raw);
                if snapped != self.shapes[shape].rotation_deg {
                    debug!("[EDITOR] shape {shape} snapped to {snapped}°");
                    self.shapes[shape].rotation_deg = snapped;
                    true
                } else {
                    false
                }
            }
            Gesture::Scaling {
                shape,
                start_scale,
                start_dist,
            } => {
                let dist = self.centers[shape].distance_to(&pointer);
                let (min, max) = self.limits.scale_range;
                let scale = (start_scale * dist / start_dist).clamp(min, max);
                if scale != self.shapes[shape].scale {
                    self.shapes[shape].scale = scale;
                    true
                } else {
                    false
                }
            }
            Gesture::Panning {
                start_pointer,
                start_pan,
            } => {
                self.pan = Point(
                    start_pan.0 + (pointer.0 - start_pointer.0),
                    start_pan.1 + (pointer.1 - start_pointer.1),
                );
                false
            }
        }
    }

    /// Shuffles the row order and re-rolls rotation and scale of every shape.
    /// Locked shapes keep their rotation.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.order.shuffle(rng);
        let (min, max) = self.limits.scale_range;
        for shape in &mut self.shapes {
            if !shape.locked
                && let Some(&angle) = SNAP_ANGLES_DEG.choose(rng)
            {
                shape.rotation_deg = angle;
            }
            shape.scale = rng.random_range(min..=max);
        }
    }

    fn pointer_angle_deg(&self, shape: usize, pointer: Point) -> f64 {
        let c = self.centers[shape];
        (pointer.1 - c.1).atan2(pointer.0 - c.0).to_degrees()
    }
}
