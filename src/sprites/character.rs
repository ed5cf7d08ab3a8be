//! Gas Huffer, the player character.
//!
//! A small green humanoid centred in a 32x32 sprite: oval head, boxed torso,
//! two-pixel arms and stick legs.

use crate::error::{HufferError, Result};
use crate::render::primitives::{paint, plot, Region};
use crate::render::Canvas;
use crate::types::CharacterPalette;

use super::{SpriteSet, SPRITE_SIZE};

/// Number of frames in the walk cycle.
pub const WALK_FRAMES: u32 = 4;

const HEAD_CORNERS: [(i32, i32); 4] = [(13, 8), (19, 8), (13, 12), (19, 12)];

const HEAD_OUTLINE: [(i32, i32); 8] = [
    (13, 8),
    (19, 8),
    (20, 9),
    (20, 11),
    (19, 12),
    (13, 12),
    (12, 11),
    (12, 9),
];

const EYES: [(i32, i32); 2] = [(15, 10), (17, 10)];

const ARMS: [(i32, i32); 4] = [(12, 15), (11, 16), (20, 15), (21, 16)];

const FEET: [(i32, i32); 2] = [(14, 25), (18, 25)];

const FLASHLIGHT: [(i32, i32); 6] = [(21, 15), (22, 15), (23, 15), (21, 16), (22, 16), (23, 16)];

/// Generate every character sprite.
pub fn generate(palette: &CharacterPalette) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::new();

    sprites.insert("idle", idle(palette)?)?;
    for frame in 0..WALK_FRAMES {
        sprites.insert(format!("walk_{}", frame), walk(palette, frame)?)?;
    }
    sprites.insert("flashlight_idle", flashlight_idle(palette)?)?;
    sprites.insert("flashlight_walk", flashlight_walk(palette)?)?;

    Ok(sprites)
}

/// The base pose every other character sprite starts from.
pub fn base(palette: &CharacterPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;

    // Head, with the four corners knocked out to round it off
    paint(&mut canvas, Region::new(13, 8, 19, 12), |x, y| {
        (!HEAD_CORNERS.contains(&(x, y))).then_some(palette.body_light)
    });
    plot(&mut canvas, &HEAD_OUTLINE, palette.body_outline);

    plot(&mut canvas, &EYES, palette.eye_white);
    plot(&mut canvas, &EYES, palette.eye_pupil);
    canvas.set_pixel(16, 11, palette.mouth);

    // Torso and its outline
    canvas.fill_rect(14, 13, 18, 20, palette.body_dark);
    canvas.fill_rect(14, 13, 18, 13, palette.body_outline);
    canvas.fill_rect(14, 20, 18, 20, palette.body_outline);
    canvas.fill_rect(14, 13, 14, 20, palette.body_outline);
    canvas.fill_rect(18, 13, 18, 20, palette.body_outline);

    plot(&mut canvas, &ARMS, palette.body_dark);

    canvas.fill_rect(15, 21, 15, 25, palette.body_dark);
    canvas.fill_rect(17, 21, 17, 25, palette.body_dark);
    plot(&mut canvas, &FEET, palette.body_dark);

    Ok(canvas)
}

/// Standing still.
pub fn idle(palette: &CharacterPalette) -> Result<Canvas> {
    base(palette)
}

/// One frame of the walk cycle, `0..WALK_FRAMES`.
pub fn walk(palette: &CharacterPalette, frame: u32) -> Result<Canvas> {
    if frame >= WALK_FRAMES {
        return Err(HufferError::InvalidParameter {
            message: format!("Walk frame {} out of range", frame),
            help: Some(format!("Walk frames run from 0 to {}", WALK_FRAMES - 1)),
        });
    }

    // TODO: step the legs on frames 1 and 3; every walk frame currently matches idle.
    base(palette)
}

/// Holding a flashlight in the right hand.
pub fn flashlight_idle(palette: &CharacterPalette) -> Result<Canvas> {
    let mut canvas = base(palette)?;
    plot(&mut canvas, &FLASHLIGHT, palette.flashlight);
    Ok(canvas)
}

/// Walking with the flashlight. Same pose as `flashlight_idle`.
pub fn flashlight_walk(palette: &CharacterPalette) -> Result<Canvas> {
    flashlight_idle(palette)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    const P: CharacterPalette = CharacterPalette::STANDARD;

    #[test]
    fn test_generate_names() {
        let sprites = generate(&P).unwrap();
        let names: Vec<&str> = sprites.names().collect();
        insta::assert_snapshot!(names.join("\n"), @r"
        flashlight_idle
        flashlight_walk
        idle
        walk_0
        walk_1
        walk_2
        walk_3
        ");
    }

    #[test]
    fn test_all_sprites_are_32x32() {
        for (name, canvas) in generate(&P).unwrap().iter() {
            assert_eq!(canvas.size(), (32, 32), "{name}");
        }
    }

    #[test]
    fn test_head_details() {
        let canvas = idle(&P).unwrap();
        // pupils drawn over the whites
        assert_eq!(canvas.get(15, 10), Some(P.eye_pupil));
        assert_eq!(canvas.get(17, 10), Some(P.eye_pupil));
        assert_eq!(canvas.get(16, 11), Some(P.mouth));
        assert_eq!(canvas.get(13, 8), Some(P.body_outline));
        assert_eq!(canvas.get(14, 9), Some(P.body_light));
    }

    #[test]
    fn test_body_and_limbs() {
        let canvas = idle(&P).unwrap();
        assert_eq!(canvas.get(16, 16), Some(P.body_dark));
        assert_eq!(canvas.get(14, 16), Some(P.body_outline));
        assert_eq!(canvas.get(16, 20), Some(P.body_outline));
        assert_eq!(canvas.get(11, 16), Some(P.body_dark));
        assert_eq!(canvas.get(15, 25), Some(P.body_dark));
        assert_eq!(canvas.get(18, 25), Some(P.body_dark));
        assert_eq!(canvas.get(16, 25), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_background_stays_transparent() {
        let canvas = idle(&P).unwrap();
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(31, 31), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(16, 5), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_walk_frames_match_idle() {
        let idle = idle(&P).unwrap();
        for frame in 0..WALK_FRAMES {
            assert_eq!(walk(&P, frame).unwrap(), idle);
        }
    }

    #[test]
    fn test_walk_frame_out_of_range() {
        assert!(matches!(
            walk(&P, 4),
            Err(HufferError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_flashlight_adds_six_pixels() {
        let idle = idle(&P).unwrap();
        let lit = flashlight_idle(&P).unwrap();

        let changed = idle
            .pixels()
            .iter()
            .zip(lit.pixels())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(changed, 6);
        assert_eq!(lit.get(23, 15), Some(P.flashlight));
        assert_eq!(flashlight_walk(&P).unwrap(), lit);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(&P).unwrap(), generate(&P).unwrap());
    }
}
