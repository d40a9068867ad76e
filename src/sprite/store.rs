//! Embedded sprite loading with a total placeholder fallback.

use rust_embed::RustEmbed;

use super::frame::{Frame, FrameSequence};
use crate::error::PetError;
use crate::pet::PetState;

/// Sprite frame series and the tray icon, bundled into the binary.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "pet/*.png"]
#[include = "icon.png"]
struct Assets;

/// Edge length the sprite frames are authored at; also the fixed window
/// size.
pub const SPRITE_SIZE: u32 = 100;

/// Number of frames in the blank fallback sequence.
const PLACEHOLDER_LEN: usize = 4;

/// Holds every animation sequence, loaded once at startup and immutable
/// thereafter.
///
/// When any series fails to resolve or decode, the store degrades as a
/// whole: a single blank sequence stands in for every state, so a broken
/// asset set is immediately visible rather than partially masked.
#[derive(Debug, Clone)]
pub struct FrameStore {
    happy: FrameSequence,
    sleep: FrameSequence,
    walk_right: FrameSequence,
    walk_left: FrameSequence,
}

impl FrameStore {
    /// Load every embedded series, falling back to the placeholder store
    /// if anything is missing or undecodable.
    #[must_use]
    pub fn load() -> Self {
        match Self::load_series() {
            Ok(store) => store,
            Err(e) => {
                log::error!(
                    "sprite load failed, using placeholder frames: {e}"
                );
                Self::placeholder()
            }
        }
    }

    fn load_series() -> Result<Self, PetError> {
        Self::load_series_with(load_sequence)
    }

    /// All-or-nothing: one broken series rejects the whole set, so the
    /// caller substitutes the placeholder for every state rather than
    /// mixing real and blank frames.
    fn load_series_with(
        load: impl Fn(&str, usize) -> Result<FrameSequence, PetError>,
    ) -> Result<Self, PetError> {
        // The two-frame idle series is part of the asset contract and
        // must decode, but the awake-in-place state renders the happy
        // wag loop.
        let _ = load("idle", 2)?;
        Ok(Self {
            happy: load("happy", 10)?,
            sleep: load("sleep", 9)?,
            walk_right: load("walk_right", 8)?,
            walk_left: load("walk_left", 8)?,
        })
    }

    /// The all-states fallback: blank opaque frames.
    pub(crate) fn placeholder() -> Self {
        let blank = Frame::solid(
            SPRITE_SIZE,
            SPRITE_SIZE,
            [255, 255, 255, 255],
        );
        // `new` cannot fail here: the sequence is non-empty by
        // construction.
        let frames = vec![blank; PLACEHOLDER_LEN];
        let sequence = FrameSequence::new("placeholder", frames)
            .unwrap_or_else(|_| unreachable!());
        Self {
            happy: sequence.clone(),
            sleep: sequence.clone(),
            walk_right: sequence.clone(),
            walk_left: sequence,
        }
    }

    /// Select the frame for the given state, direction, and frame
    /// counter. The counter wraps modulo the chosen sequence's length,
    /// so selection is total for any counter value.
    #[must_use]
    pub fn frame_for(
        &self,
        state: PetState,
        walking_right: bool,
        counter: usize,
    ) -> &Frame {
        match state {
            PetState::Idle => self.happy.frame(counter),
            PetState::Sleeping => self.sleep.frame(counter),
            PetState::Walking => {
                if walking_right {
                    self.walk_right.frame(counter)
                } else {
                    self.walk_left.frame(counter)
                }
            }
        }
    }
}

/// Decode one 1-indexed, contiguous PNG series (`pet/<name>_1.png` ..
/// `pet/<name>_<count>.png`).
fn load_sequence(
    name: &str,
    count: usize,
) -> Result<FrameSequence, PetError> {
    let mut frames = Vec::with_capacity(count);
    for i in 1..=count {
        let path = format!("pet/{name}_{i}.png");
        let file = Assets::get(&path).ok_or_else(|| {
            PetError::AssetDecode(format!("missing asset `{path}`"))
        })?;
        let decoded = image::load_from_memory_with_format(
            &file.data,
            image::ImageFormat::Png,
        )
        .map_err(|e| PetError::AssetDecode(format!("{path}: {e}")))?
        .into_rgba8();
        frames.push(Frame::from_rgba(
            decoded.width(),
            decoded.height(),
            decoded.into_raw(),
        ));
    }
    FrameSequence::new(name, frames)
}

/// Decode the embedded tray icon as straight (non-premultiplied) RGBA.
///
/// Returns the pixel data and dimensions; the caller hands them to the
/// platform tray API.
pub fn icon_rgba() -> Result<(Vec<u8>, u32, u32), PetError> {
    let file = Assets::get("icon.png").ok_or_else(|| {
        PetError::AssetDecode("missing asset `icon.png`".to_owned())
    })?;
    let decoded = image::load_from_memory_with_format(
        &file.data,
        image::ImageFormat::Png,
    )
    .map_err(|e| PetError::AssetDecode(format!("icon.png: {e}")))?
    .into_rgba8();
    let (width, height) = decoded.dimensions();
    Ok((decoded.into_raw(), width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Embedded series
    // =========================================================================

    #[test]
    fn test_embedded_series_decode() {
        let store = FrameStore::load_series().unwrap();

        assert_eq!(store.happy.len(), 10);
        assert_eq!(store.sleep.len(), 9);
        assert_eq!(store.walk_right.len(), 8);
        assert_eq!(store.walk_left.len(), 8);
    }

    #[test]
    fn test_missing_series_is_an_error() {
        assert!(load_sequence("missing", 3).is_err());
    }

    #[test]
    fn test_short_series_is_an_error() {
        // Asking for more frames than the series ships is a resolve
        // failure, not a silent truncation.
        assert!(load_sequence("idle", 3).is_err());
    }

    #[test]
    fn test_icon_decodes() {
        let (pixels, width, height) = icon_rgba().unwrap();

        assert_eq!(pixels.len(), (width * height * 4) as usize);
    }

    // =========================================================================
    // Frame selection
    // =========================================================================

    #[test]
    fn test_frame_selection_by_state_and_direction() {
        let store = FrameStore::load_series().unwrap();

        assert!(std::ptr::eq(
            store.frame_for(PetState::Idle, false, 0),
            store.happy.frame(0),
        ));
        assert!(std::ptr::eq(
            store.frame_for(PetState::Sleeping, true, 4),
            store.sleep.frame(4),
        ));
        assert!(std::ptr::eq(
            store.frame_for(PetState::Walking, true, 7),
            store.walk_right.frame(7),
        ));
        assert!(std::ptr::eq(
            store.frame_for(PetState::Walking, false, 7),
            store.walk_left.frame(7),
        ));
    }

    #[test]
    fn test_frame_selection_wraps_per_sequence() {
        let store = FrameStore::load_series().unwrap();

        // happy has 10 frames, sleep has 9: the same counter lands on
        // different indices per sequence.
        assert!(std::ptr::eq(
            store.frame_for(PetState::Idle, false, 13),
            store.happy.frame(3),
        ));
        assert!(std::ptr::eq(
            store.frame_for(PetState::Sleeping, false, 13),
            store.sleep.frame(4),
        ));
    }

    // =========================================================================
    // Placeholder fallback
    // =========================================================================

    #[test]
    fn test_one_broken_series_rejects_the_whole_set() {
        let result = FrameStore::load_series_with(|name, count| {
            if name == "sleep" {
                Err(PetError::AssetDecode(
                    "sleep_3.png: truncated".to_owned(),
                ))
            } else {
                load_sequence(name, count)
            }
        });

        // `load` then substitutes the placeholder for every state, not
        // just the broken one.
        assert!(result.is_err());
    }

    #[test]
    fn test_placeholder_covers_every_state() {
        let store = FrameStore::placeholder();

        for state in
            [PetState::Idle, PetState::Sleeping, PetState::Walking]
        {
            for direction in [false, true] {
                let frame = store.frame_for(state, direction, 0);
                assert_eq!(frame.width(), SPRITE_SIZE);
                assert_eq!(frame.height(), SPRITE_SIZE);
            }
        }
    }

    #[test]
    fn test_placeholder_is_four_frames_of_opaque_blank() {
        let store = FrameStore::placeholder();

        assert_eq!(store.happy.len(), PLACEHOLDER_LEN);
        // Wraps at the placeholder length.
        assert!(std::ptr::eq(
            store.frame_for(PetState::Idle, false, 1),
            store.frame_for(PetState::Idle, false, 1 + PLACEHOLDER_LEN),
        ));
        // Every pixel opaque.
        let frame = store.frame_for(PetState::Sleeping, false, 0);
        assert!(frame.pixels().chunks_exact(4).all(|px| px[3] == 255));
    }
}
