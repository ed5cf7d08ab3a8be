//! The four monster types.
//!
//! Every monster is a 32x32 sprite with its own palette and animation set:
//!
//! - Ghost: translucent oval that bobs up and down.
//! - Shadow: dark silhouette with glowing eyes.
//! - Wraith: striped wisps that flow sideways.
//! - Poltergeist: a drifting ball of green energy that throws things.

use std::fmt;

use crate::error::Result;
use crate::render::primitives::{fill_mask, on_period, paint, plot, Mask, Region};
use crate::render::Canvas;
use crate::types::{GhostPalette, Palettes, PoltergeistPalette, ShadowPalette, WraithPalette};

use super::{SpriteCollection, SpriteSet, SPRITE_SIZE};

/// Vertical bob per ghost float frame.
pub const GHOST_BOB: [i32; 3] = [0, -1, 0];

/// Horizontal flow per wraith move frame.
pub const WRAITH_FLOW: [i32; 4] = [-1, 0, 1, 0];

/// Aura centre offset per poltergeist energy frame.
pub const POLTERGEIST_DRIFT: [(i32, i32); 4] = [(0, 0), (1, -1), (-1, 0), (0, 1)];

/// Monster types, in the order the game introduces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonsterKind {
    /// Patrols a predictable route.
    Ghost,
    /// Guards one spot.
    Shadow,
    /// Chases the player.
    Wraith,
    /// Moves erratically and throws objects.
    Poltergeist,
}

impl MonsterKind {
    pub const ALL: [MonsterKind; 4] = [
        MonsterKind::Ghost,
        MonsterKind::Shadow,
        MonsterKind::Wraith,
        MonsterKind::Poltergeist,
    ];

    /// Key used in the sprite collection and in file names.
    pub fn name(self) -> &'static str {
        match self {
            MonsterKind::Ghost => "ghost",
            MonsterKind::Shadow => "shadow",
            MonsterKind::Wraith => "wraith",
            MonsterKind::Poltergeist => "poltergeist",
        }
    }

    /// Generate this monster's full animation set.
    pub fn generate(self, palettes: &Palettes) -> Result<SpriteSet> {
        match self {
            MonsterKind::Ghost => generate_ghost(&palettes.ghost),
            MonsterKind::Shadow => generate_shadow(&palettes.shadow),
            MonsterKind::Wraith => generate_wraith(&palettes.wraith),
            MonsterKind::Poltergeist => generate_poltergeist(&palettes.poltergeist),
        }
    }
}

impl fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate every monster type.
pub fn generate(palettes: &Palettes) -> Result<SpriteCollection> {
    let mut monsters = SpriteCollection::new();
    for kind in MonsterKind::ALL {
        monsters.insert(kind.name(), kind.generate(palettes)?);
    }
    Ok(monsters)
}

// -- Ghost --

/// `float_0..float_2` and `death`.
pub fn generate_ghost(palette: &GhostPalette) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::new();
    for frame in 0..GHOST_BOB.len() as u32 {
        sprites.insert(format!("float_{}", frame), ghost_float(palette, frame)?)?;
    }
    sprites.insert("death", ghost_death(palette)?)?;
    Ok(sprites)
}

/// Vertical offset for a float frame; cycles every three frames.
pub fn ghost_bob(frame: u32) -> i32 {
    GHOST_BOB[frame as usize % GHOST_BOB.len()]
}

/// A floating frame: oval body and two eyes, bobbed vertically.
pub fn ghost_float(palette: &GhostPalette, frame: u32) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;
    let bob = ghost_bob(frame);

    // The scan window stays put while the body moves inside it
    fill_mask(
        &mut canvas,
        Region::new(10, 8, 22, 23),
        Mask::Ellipse {
            cx: 16,
            cy: 16 + bob,
            rx: 6,
            ry: 8,
        },
        palette.body,
    );

    let eyes = [(13, 12 + bob), (19, 12 + bob)];
    plot(&mut canvas, &eyes, palette.eyes);
    plot(&mut canvas, &eyes, palette.pupils);

    Ok(canvas)
}

/// Fading out: a faint block where the body was.
pub fn ghost_death(palette: &GhostPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;
    canvas.fill_rect(12, 12, 20, 19, palette.fade);
    Ok(canvas)
}

// -- Shadow --

/// `idle`, `alert` and `death`.
pub fn generate_shadow(palette: &ShadowPalette) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::new();
    sprites.insert("idle", shadow_idle(palette)?)?;
    sprites.insert("alert", shadow_alert(palette)?)?;
    sprites.insert("death", shadow_death(palette)?)?;
    Ok(sprites)
}

const SHADOW_EYES: [(i32, i32); 2] = [(14, 11), (18, 11)];

/// Standing guard: a spine column crossed by a torso band.
pub fn shadow_idle(palette: &ShadowPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;

    paint(&mut canvas, Region::new(12, 8, 20, 24), |x, y| {
        (x == 16 || (13..22).contains(&y)).then_some(palette.body)
    });
    plot(&mut canvas, &SHADOW_EYES, palette.eyes);

    Ok(canvas)
}

/// Idle pose with the eyes flared.
pub fn shadow_alert(palette: &ShadowPalette) -> Result<Canvas> {
    let mut canvas = shadow_idle(palette)?;
    plot(&mut canvas, &SHADOW_EYES, palette.eyes_alert);
    Ok(canvas)
}

/// Dissolving into a small dark patch.
pub fn shadow_death(palette: &ShadowPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;
    canvas.fill_rect(14, 15, 18, 19, palette.dissolve);
    Ok(canvas)
}

// -- Wraith --

/// `move_0..move_3`, `attack` and `death`.
pub fn generate_wraith(palette: &WraithPalette) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::new();
    for frame in 0..WRAITH_FLOW.len() as u32 {
        sprites.insert(format!("move_{}", frame), wraith_move(palette, frame)?)?;
    }
    sprites.insert("attack", wraith_attack(palette)?)?;
    sprites.insert("death", wraith_death(palette)?)?;
    Ok(sprites)
}

/// Horizontal flow for a move frame; cycles every four frames.
pub fn wraith_flow(frame: u32) -> i32 {
    WRAITH_FLOW[frame as usize % WRAITH_FLOW.len()]
}

/// A movement frame: body dots on every third column (even rows only) and
/// wisp streaks on every fourth, both shifted by the flow offset.
pub fn wraith_move(palette: &WraithPalette, frame: u32) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;
    let flow = wraith_flow(frame);

    paint(&mut canvas, Region::new(8, 6, 24, 25), |x, y| {
        if on_period(x, 3, flow) && y % 2 == 0 {
            Some(palette.body)
        } else if on_period(x, 4, flow) {
            Some(palette.wisp)
        } else {
            None
        }
    });

    plot(&mut canvas, &[(13, 10), (19, 10)], palette.eyes);

    Ok(canvas)
}

/// First move frame with wispy arms thrown out to both sides.
pub fn wraith_attack(palette: &WraithPalette) -> Result<Canvas> {
    let mut canvas = wraith_move(palette, 0)?;

    paint(&mut canvas, Region::new(6, 14, 25, 14), |x, _| {
        (x < 12 || x > 20).then_some(palette.wisp)
    });

    Ok(canvas)
}

/// Dispersing: a sparse grid of wisp dots.
pub fn wraith_death(palette: &WraithPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;

    for x in (8..25).step_by(3) {
        for y in (8..25).step_by(3) {
            canvas.set_pixel(x, y, palette.wisp);
        }
    }

    Ok(canvas)
}

// -- Poltergeist --

/// `energy_0..energy_3`, `throw` and `death`.
pub fn generate_poltergeist(palette: &PoltergeistPalette) -> Result<SpriteSet> {
    let mut sprites = SpriteSet::new();
    for frame in 0..POLTERGEIST_DRIFT.len() as u32 {
        sprites.insert(format!("energy_{}", frame), poltergeist_energy(palette, frame)?)?;
    }
    sprites.insert("throw", poltergeist_throw(palette)?)?;
    sprites.insert("death", poltergeist_death(palette)?)?;
    Ok(sprites)
}

/// Aura centre offset for an energy frame; cycles every four frames.
pub fn poltergeist_drift(frame: u32) -> (i32, i32) {
    POLTERGEIST_DRIFT[frame as usize % POLTERGEIST_DRIFT.len()]
}

/// An energy frame: round aura, bright 5x5 core, two floating objects.
pub fn poltergeist_energy(palette: &PoltergeistPalette, frame: u32) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;
    let (dx, dy) = poltergeist_drift(frame);
    let (cx, cy) = (16 + dx, 16 + dy);

    fill_mask(
        &mut canvas,
        Region::around(cx, cy, 6),
        Mask::Radial {
            cx,
            cy,
            radius_sq: 25,
        },
        palette.aura,
    );
    canvas.fill_rect(cx - 2, cy - 2, cx + 2, cy + 2, palette.core);

    plot(
        &mut canvas,
        &[(cx - 8, cy - 4), (cx + 8, cy + 3)],
        palette.effects,
    );

    Ok(canvas)
}

/// Positions of the thrown objects, stepping down and to the right.
pub fn projectiles() -> [(i32, i32); 5] {
    let mut dots = [(0, 0); 5];
    for (i, dot) in dots.iter_mut().enumerate() {
        let i = i as i32;
        *dot = (8 + i * 4, 8 + (i * 2) % 16);
    }
    dots
}

/// First energy frame plus five thrown objects.
pub fn poltergeist_throw(palette: &PoltergeistPalette) -> Result<Canvas> {
    let mut canvas = poltergeist_energy(palette, 0)?;
    plot(&mut canvas, &projectiles(), palette.effects);
    Ok(canvas)
}

/// Energy dissipating into faint dots.
pub fn poltergeist_death(palette: &PoltergeistPalette) -> Result<Canvas> {
    let mut canvas = Canvas::square(SPRITE_SIZE)?;

    for x in (12..21).step_by(2) {
        for y in (12..21).step_by(2) {
            canvas.set_pixel(x, y, palette.fade);
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use pretty_assertions::assert_eq;

    const P: Palettes = Palettes::STANDARD;

    fn differing_pixels(a: &Canvas, b: &Canvas) -> usize {
        a.pixels().iter().zip(b.pixels()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn test_collection_shape() {
        let monsters = generate(&P).unwrap();
        let sizes: Vec<(&str, usize)> = MonsterKind::ALL
            .iter()
            .map(|k| (k.name(), monsters.get(k.name()).unwrap().len()))
            .collect();

        assert_eq!(
            sizes,
            vec![("ghost", 4), ("shadow", 3), ("wraith", 6), ("poltergeist", 6)]
        );
        assert_eq!(monsters.len(), 4);
    }

    #[test]
    fn test_sprite_names() {
        let monsters = generate(&P).unwrap();
        let names = |kind: &str| -> Vec<String> {
            monsters
                .get(kind)
                .unwrap()
                .names()
                .map(str::to_string)
                .collect()
        };

        assert_eq!(names("ghost"), vec!["death", "float_0", "float_1", "float_2"]);
        assert_eq!(names("shadow"), vec!["alert", "death", "idle"]);
        assert_eq!(
            names("wraith"),
            vec!["attack", "death", "move_0", "move_1", "move_2", "move_3"]
        );
        assert_eq!(
            names("poltergeist"),
            vec!["death", "energy_0", "energy_1", "energy_2", "energy_3", "throw"]
        );
    }

    #[test]
    fn test_all_monsters_are_32x32() {
        for (kind, set) in generate(&P).unwrap().iter() {
            for (name, canvas) in set.iter() {
                assert_eq!(canvas.size(), (32, 32), "{kind}/{name}");
                assert!(!canvas.is_blank(), "{kind}/{name}");
            }
        }
    }

    #[test]
    fn test_offset_cycles() {
        let bob: Vec<i32> = (0..6).map(ghost_bob).collect();
        assert_eq!(bob, vec![0, -1, 0, 0, -1, 0]);

        let flow: Vec<i32> = (0..8).map(wraith_flow).collect();
        assert_eq!(flow, vec![-1, 0, 1, 0, -1, 0, 1, 0]);

        let drift: Vec<(i32, i32)> = (0..5).map(poltergeist_drift).collect();
        assert_eq!(drift, vec![(0, 0), (1, -1), (-1, 0), (0, 1), (0, 0)]);
    }

    #[test]
    fn test_ghost_bob_moves_eyes_and_body() {
        let g = P.ghost;
        let rest = ghost_float(&g, 0).unwrap();
        let up = ghost_float(&g, 1).unwrap();

        assert_eq!(rest.get(13, 12), Some(g.pupils));
        assert_eq!(up.get(13, 11), Some(g.pupils));
        assert_eq!(up.get(13, 12), Some(g.body));

        // top of the oval rises one row, the bottom row empties
        assert_eq!(rest.get(16, 9), Some(g.body));
        assert_eq!(up.get(16, 8), Some(g.body));
        assert_eq!(rest.get(16, 23), Some(g.body));
        assert_eq!(up.get(16, 23), Some(Colour::TRANSPARENT));

        assert_eq!(ghost_float(&g, 2).unwrap(), rest);
        assert_eq!(ghost_float(&g, 3).unwrap(), rest);
    }

    #[test]
    fn test_ghost_death_is_faded_block() {
        let canvas = ghost_death(&P.ghost).unwrap();
        assert_eq!(canvas.painted_pixel_count(), 9 * 8);
        assert_eq!(canvas.get(12, 12).unwrap().a, 60);
    }

    #[test]
    fn test_shadow_silhouette() {
        let s = P.shadow;
        let idle = shadow_idle(&s).unwrap();

        assert_eq!(idle.get(16, 8), Some(s.body));
        assert_eq!(idle.get(12, 8), Some(Colour::TRANSPARENT));
        assert_eq!(idle.get(12, 13), Some(s.body));
        assert_eq!(idle.get(20, 21), Some(s.body));
        assert_eq!(idle.get(12, 22), Some(Colour::TRANSPARENT));
        assert_eq!(idle.get(14, 11), Some(s.eyes));
    }

    #[test]
    fn test_shadow_alert_only_changes_eyes() {
        let s = P.shadow;
        let idle = shadow_idle(&s).unwrap();
        let alert = shadow_alert(&s).unwrap();

        assert_eq!(differing_pixels(&idle, &alert), 2);
        assert_eq!(alert.get(18, 11), Some(Colour::new(180, 0, 0, 255)));
    }

    #[test]
    fn test_wraith_frames_flow() {
        let w = P.wraith;
        let frames: Vec<Canvas> = (0..4).map(|f| wraith_move(&w, f).unwrap()).collect();

        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[2]);
        assert_eq!(frames[1], frames[3]);
        assert_eq!(wraith_move(&w, 4).unwrap(), frames[0]);

        // flow -1: x + (-1) divisible by 3 on even rows
        assert_eq!(frames[0].get(10, 6), Some(w.body));
        // flow 0: x divisible by 3 on even rows
        assert_eq!(frames[1].get(9, 6), Some(w.body));
        assert_eq!(frames[1].get(12, 7), Some(w.wisp));
        assert_eq!(frames[1].get(13, 10), Some(w.eyes));
    }

    #[test]
    fn test_wraith_attack_extends_arms() {
        let w = P.wraith;
        let attack = wraith_attack(&w).unwrap();

        assert_eq!(attack.get(6, 14), Some(w.wisp));
        assert_eq!(attack.get(25, 14), Some(w.wisp));
        assert_eq!(attack.get(16, 14), wraith_move(&w, 0).unwrap().get(16, 14));
    }

    #[test]
    fn test_wraith_death_grid() {
        let canvas = wraith_death(&P.wraith).unwrap();
        assert_eq!(canvas.painted_pixel_count(), 36);
        assert_eq!(canvas.get(23, 23), Some(P.wraith.wisp));
    }

    #[test]
    fn test_poltergeist_core_follows_drift() {
        let p = P.poltergeist;
        for frame in 0..4 {
            let (dx, dy) = poltergeist_drift(frame);
            let canvas = poltergeist_energy(&p, frame).unwrap();
            assert_eq!(canvas.get(16 + dx, 16 + dy), Some(p.core));
            assert_eq!(canvas.get(16 + dx - 8, 16 + dy - 4), Some(p.effects));
            assert_eq!(canvas.get(16 + dx + 4, 16 + dy), Some(p.aura));
            assert_eq!(canvas.get(16 + dx + 5, 16 + dy), Some(Colour::TRANSPARENT));
        }
    }

    #[test]
    fn test_poltergeist_throw_dots() {
        assert_eq!(
            projectiles(),
            [(8, 8), (12, 10), (16, 12), (20, 14), (24, 16)]
        );

        let p = P.poltergeist;
        let throw = poltergeist_throw(&p).unwrap();
        for (x, y) in projectiles() {
            assert_eq!(throw.get(x, y), Some(p.effects));
        }
    }

    #[test]
    fn test_poltergeist_death_dots() {
        let canvas = poltergeist_death(&P.poltergeist).unwrap();
        assert_eq!(canvas.painted_pixel_count(), 25);
        assert_eq!(canvas.get(20, 20).unwrap().a, 40);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(&P).unwrap(), generate(&P).unwrap());
    }
}
