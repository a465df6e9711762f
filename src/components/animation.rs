//! Texture-cycling animation primitives.
//!
//! An [`Animator`] flips a sprite between a fixed, ordered list of textures
//! at a fixed frame rate. The set of animations the player owns is closed
//! and named by [`AnimationName`].

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Frame rate used when no explicit rate is configured.
pub const DEFAULT_ANIMATION_FPS: f32 = 5.0;

/// Slack for accumulated rounding when comparing the clock to a frame.
const FRAME_EPSILON: f32 = 1e-5;

/// Names of the player's animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationName {
    #[default]
    Idle,
    Walk,
    Pickaxe,
}

impl AnimationName {
    /// All names, in table order.
    pub const ALL: [AnimationName; 3] = [
        AnimationName::Idle,
        AnimationName::Walk,
        AnimationName::Pickaxe,
    ];

    /// Index into a per-animation table.
    pub fn index(self) -> usize {
        match self {
            AnimationName::Idle => 0,
            AnimationName::Walk => 1,
            AnimationName::Pickaxe => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationName::Idle => "idle",
            AnimationName::Walk => "walk",
            AnimationName::Pickaxe => "pickaxe",
        }
    }
}

impl fmt::Display for AnimationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup error for animation names that are not part of [`AnimationName`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAnimation(pub String);

impl fmt::Display for UnknownAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown animation '{}' (expected idle, walk or pickaxe)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAnimation {}

impl FromStr for AnimationName {
    type Err = UnknownAnimation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(AnimationName::Idle),
            "walk" => Ok(AnimationName::Walk),
            "pickaxe" => Ok(AnimationName::Pickaxe),
            other => Err(UnknownAnimation(other.to_string())),
        }
    }
}

/// Cycles through an ordered list of texture keys at a fixed frame rate.
///
/// Invariants
/// - `textures` is never empty.
/// - `index < textures.len()`.
/// - `elapsed` is reset to zero every time the frame advances.
#[derive(Debug, Clone)]
pub struct Animator {
    textures: SmallVec<[String; 2]>,
    index: usize,
    elapsed: f32,
    frame_duration: f32,
}

impl Animator {
    /// Create an animator over `textures` playing at `fps` frames per second.
    ///
    /// Returns `None` when `textures` is empty or `fps` is not a positive
    /// finite number.
    pub fn new<I, S>(textures: I, fps: f32) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let textures: SmallVec<[String; 2]> = textures.into_iter().map(Into::into).collect();
        if textures.is_empty() || !fps.is_finite() || fps <= 0.0 {
            return None;
        }
        Some(Self {
            textures,
            index: 0,
            elapsed: 0.0,
            frame_duration: 1.0 / fps,
        })
    }

    /// Advance the animation clock by `delta` seconds.
    ///
    /// Returns the texture key the sprite must display this frame: the one
    /// at the index current on entry. Once the accumulated time reaches the
    /// frame duration the clock restarts from zero and the index moves to
    /// the next texture, wrapping after the last one.
    pub fn update(&mut self, delta: f32) -> &str {
        let shown = self.index;
        self.elapsed += delta;
        if self.elapsed + FRAME_EPSILON >= self.frame_duration {
            self.elapsed = 0.0;
            self.index = (self.index + 1) % self.textures.len();
        }
        &self.textures[shown]
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) {
        self.index = 0;
        self.elapsed = 0.0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Texture key at the current index.
    pub fn current_texture(&self) -> &str {
        &self.textures[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk() -> Animator {
        Animator::new(["walk01", "walk02"], 5.0).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_and_bad_fps() {
        assert!(Animator::new(Vec::<String>::new(), 5.0).is_none());
        assert!(Animator::new(["a"], 0.0).is_none());
        assert!(Animator::new(["a"], -1.0).is_none());
        assert!(Animator::new(["a"], f32::NAN).is_none());
    }

    #[test]
    fn test_honours_fps_argument() {
        let a = Animator::new(["a", "b"], 10.0).unwrap();
        assert!((a.frame_duration() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_advances_once_after_exact_frame_duration() {
        let mut a = walk();
        a.update(0.1);
        assert_eq!(a.index(), 0);
        a.update(0.1);
        assert_eq!(a.index(), 1);
        assert_eq!(a.elapsed(), 0.0);
    }

    #[test]
    fn test_advances_when_steps_sum_to_frame_duration() {
        let mut a = walk();
        for _ in 0..10 {
            a.update(0.02);
        }
        assert_eq!(a.index(), 1);

        let mut b = walk();
        for _ in 0..5 {
            b.update(0.04);
        }
        assert_eq!(b.index(), 1);
    }

    #[test]
    fn test_single_large_step_advances_once() {
        let mut a = walk();
        a.update(0.2);
        assert_eq!(a.index(), 1);
    }

    #[test]
    fn test_many_small_steps_advance_at_most_once() {
        let mut a = walk();
        for _ in 0..39 {
            a.update(0.01);
        }
        assert_eq!(a.index(), 1);
    }

    #[test]
    fn test_wraps_after_last_frame() {
        let mut a = walk();
        a.update(0.2);
        a.update(0.2);
        assert_eq!(a.index(), 0);
    }

    #[test]
    fn test_returns_texture_before_advance() {
        let mut a = walk();
        assert_eq!(a.update(0.25), "walk01");
        assert_eq!(a.current_texture(), "walk02");
        assert_eq!(a.update(0.0), "walk02");
    }

    #[test]
    fn test_single_texture_index_stays_zero() {
        let mut a = Animator::new(["idle"], 5.0).unwrap();
        for step in [0.0, 0.3, 0.05, 1.0, 0.2] {
            assert_eq!(a.update(step), "idle");
            assert_eq!(a.index(), 0);
        }
    }

    #[test]
    fn test_index_always_in_range() {
        let mut a = Animator::new(["a", "b", "c"], 7.0).unwrap();
        let mut dt = 0.0f32;
        for i in 0..500 {
            dt = (dt + 0.037 * (i % 7) as f32) % 0.5;
            a.update(dt);
            assert!(a.index() < a.len());
        }
    }

    #[test]
    fn test_restart() {
        let mut a = walk();
        a.update(0.2);
        a.update(0.1);
        a.restart();
        assert_eq!(a.index(), 0);
        assert_eq!(a.elapsed(), 0.0);
    }

    #[test]
    fn test_animation_name_parse() {
        assert_eq!("idle".parse::<AnimationName>(), Ok(AnimationName::Idle));
        assert_eq!("walk".parse::<AnimationName>(), Ok(AnimationName::Walk));
        assert_eq!(
            "pickaxe".parse::<AnimationName>(),
            Ok(AnimationName::Pickaxe)
        );
        let err = "run".parse::<AnimationName>().unwrap_err();
        assert_eq!(err, UnknownAnimation("run".to_string()));
        assert!(err.to_string().contains("run"));
    }

    #[test]
    fn test_animation_name_indices_are_distinct() {
        for (i, name) in AnimationName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
            assert_eq!(name.as_str().parse::<AnimationName>(), Ok(*name));
        }
    }
}
