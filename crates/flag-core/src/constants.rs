// Shared geometry/gesture/animation tuning constants used by both frontends.

// Flag plane (world units, 3:2 aspect), centered on the origin
pub const FLAG_WIDTH: f32 = 30.0;
pub const FLAG_HEIGHT: f32 = 20.0;

// Star emblem
pub const STAR_OUTER_RADIUS: f32 = 6.0; // circumradius of the five points
pub const STAR_INNER_RATIO: f32 = 0.382; // inner-pentagon radius as a fraction of the outer

// Default palette (sRGB in [0, 1])
pub const DEFAULT_FIELD_COLOR: [f32; 3] = [0.854_902, 0.145_098, 0.113_725_49]; // #DA251D
pub const DEFAULT_EMBLEM_COLOR: [f32; 3] = [1.0, 1.0, 0.0]; // #FFFF00

// Hand landmark layout (MediaPipe ordering)
pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const LANDMARKS_PER_HAND: usize = 21;
pub const MIN_LANDMARKS: usize = INDEX_TIP + 1; // enough to reach every index we read
pub const MAX_TRACKED_HANDS: usize = 2;

// Gesture mapping
pub const WRIST_RAW_MIN: f32 = 0.1; // usable wrist-spread band in normalized image coords
pub const WRIST_RAW_SPAN: f32 = 0.6;
pub const PINCH_THRESHOLD: f32 = 0.05; // thumb-to-index distance below this counts as a pinch
pub const PINCH_DISTANCE: f32 = 0.2; // bucket published while pinching
pub const NEUTRAL_DISTANCE: f32 = 0.5; // bucket for an open single hand, also the startup value

// Gesture readout buckets
pub const ACTION_COMPRESS_BELOW: f32 = 0.3;
pub const ACTION_EXPAND_ABOVE: f32 = 0.7;

// Animation response
pub const EXPANSION_MIN: f32 = 0.4; // gesture distance 0 maps here
pub const EXPANSION_MAX: f32 = 2.0; // gesture distance 1 maps here
pub const WAVE_BOOST_MIN: f32 = 0.5;
pub const WAVE_BOOST_MAX: f32 = 2.0;
pub const GESTURE_SMOOTHING: f32 = 0.1; // per-frame lerp factor toward the current target

// Wave displacement shape (mirrored by the vertex shader)
pub const NOISE_FREQUENCY: f32 = 0.1; // spatial frequency fed to the simplex field
pub const NOISE_AMPLITUDE: f32 = 2.0; // noise contribution is strength * this
pub const SINE_FREQUENCY: f32 = 0.5; // travelling sine spatial frequency along x
pub const SINE_SPEED_RATIO: f32 = 2.0; // sine phase speed relative to the noise scroll

// Point sprite shading (mirrored by the fragment shader)
pub const POINT_ATTENUATION: f32 = 300.0; // pixel size is point_size * this / view depth
pub const SPRITE_FALLOFF_EXP: f32 = 1.5;
pub const SPRITE_BASE_ALPHA: f32 = 0.8;
pub const DEPTH_DARKEN_SCALE: f32 = 0.5; // wave height to darkening input
pub const DEPTH_DARKEN_BIAS: f32 = 2.0;
pub const DEPTH_DARKEN_EDGE: f32 = 10.0; // smoothstep ramp spans [-edge, edge]

// Camera rig shared by both renderers
pub const CAMERA_Z: f32 = 35.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// Configuration ranges (values outside are clamped; a count below 1 is rejected)
pub const PARTICLE_COUNT_MIN: usize = 1_000;
pub const PARTICLE_COUNT_MAX: usize = 100_000;
pub const WAVE_STRENGTH_MAX: f32 = 5.0;
pub const WAVE_SPEED_MAX: f32 = 3.0;
pub const POINT_SIZE_MIN: f32 = 0.05;
pub const POINT_SIZE_MAX: f32 = 2.0;

// Configuration defaults
pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;
pub const DEFAULT_WAVE_STRENGTH: f32 = 1.5;
pub const DEFAULT_WAVE_SPEED: f32 = 0.8;
pub const DEFAULT_POINT_SIZE: f32 = 0.35;
