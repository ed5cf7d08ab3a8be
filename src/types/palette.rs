//! Per-domain colour palettes.
//!
//! Every thematic domain gets its own immutable palette value. Generators take
//! the palette they need as an argument; there is no global colour table.

use super::Colour;

/// A palette flattened to `(name, colour)` entries, for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntries {
    /// Palette name (e.g. "ghost").
    pub name: &'static str,

    /// Colour entries in declaration order.
    pub entries: Vec<(&'static str, Colour)>,
}

impl PaletteEntries {
    /// Look up a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        let name = name.strip_prefix('$').unwrap_or(name);
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, colour)| *colour)
    }

    /// Number of colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette has no colours.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declares a palette struct with public colour fields, its standard
/// instance, and an `entries()` listing in field order.
macro_rules! palette {
    (
        $(#[$meta:meta])*
        $ty:ident, $name:literal {
            $($(#[$field_meta:meta])* $field:ident: $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $ty {
            $($(#[$field_meta])* pub $field: Colour,)+
        }

        impl $ty {
            /// The palette the game ships with.
            pub const STANDARD: Self = Self {
                $($field: $value,)+
            };

            /// Palette name.
            pub const NAME: &'static str = $name;

            /// Flatten to named entries.
            pub fn entries(&self) -> PaletteEntries {
                PaletteEntries {
                    name: Self::NAME,
                    entries: vec![$((stringify!($field), self.$field),)+],
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::STANDARD
            }
        }
    };
}

palette! {
    /// Gas Huffer: spooky greens.
    CharacterPalette, "character" {
        body_dark: Colour::rgb(34, 80, 49),
        body_light: Colour::rgb(52, 120, 73),
        body_outline: Colour::rgb(18, 40, 25),
        eye_white: Colour::rgb(240, 240, 240),
        eye_pupil: Colour::rgb(0, 0, 0),
        mouth: Colour::rgb(120, 20, 20),
        flashlight: Colour::rgb(100, 100, 100),
    }
}

palette! {
    /// Ghost: translucent pale blue.
    GhostPalette, "ghost" {
        body: Colour::new(200, 200, 255, 180),
        outline: Colour::new(150, 150, 200, 220),
        eyes: Colour::new(255, 255, 255, 255),
        pupils: Colour::new(0, 0, 0, 255),
        fade: Colour::new(200, 200, 255, 60),
    }
}

palette! {
    /// Shadow: near-black silhouette with red eyes.
    ShadowPalette, "shadow" {
        body: Colour::new(20, 20, 30, 200),
        outline: Colour::new(10, 10, 15, 255),
        eyes: Colour::new(120, 0, 0, 200),
        eyes_alert: Colour::new(180, 0, 0, 255),
        dissolve: Colour::new(20, 20, 30, 100),
    }
}

palette! {
    /// Wraith: grey-blue wisps with yellow eyes.
    WraithPalette, "wraith" {
        body: Colour::new(80, 80, 120, 160),
        wisp: Colour::new(150, 150, 200, 120),
        outline: Colour::new(40, 40, 60, 200),
        eyes: Colour::new(255, 255, 0, 220),
    }
}

palette! {
    /// Poltergeist: green energy.
    PoltergeistPalette, "poltergeist" {
        aura: Colour::new(100, 255, 100, 80),
        core: Colour::new(200, 255, 200, 120),
        outline: Colour::new(50, 150, 50, 180),
        effects: Colour::new(255, 255, 255, 160),
        fade: Colour::new(100, 255, 100, 40),
    }
}

palette! {
    /// Haunted manor floors.
    FloorPalette, "floor" {
        wood_dark: Colour::rgb(45, 35, 25),
        wood_light: Colour::rgb(65, 50, 35),
        wood_outline: Colour::rgb(25, 20, 15),
        stone_dark: Colour::rgb(60, 55, 50),
        stone_light: Colour::rgb(80, 75, 70),
        carpet_red: Colour::rgb(80, 30, 30),
        carpet_pattern: Colour::rgb(100, 40, 40),
    }
}

palette! {
    /// Haunted manor walls.
    WallPalette, "wall" {
        wallpaper_dark: Colour::rgb(40, 45, 35),
        wallpaper_light: Colour::rgb(55, 65, 45),
        wallpaper_pattern: Colour::rgb(30, 35, 25),
        stone_wall: Colour::rgb(70, 65, 60),
        moss: Colour::rgb(40, 60, 30),
        mortar: Colour::rgb(50, 50, 45),
        wood_panel: Colour::rgb(55, 45, 35),
        panel_seam: Colour::rgb(30, 25, 20),
    }
}

palette! {
    /// Furniture. No furniture sprites are drawn yet.
    FurniturePalette, "furniture" {
        wood_dark: Colour::rgb(35, 25, 20),
        wood_light: Colour::rgb(50, 40, 30),
        metal: Colour::rgb(80, 80, 85),
        fabric_red: Colour::rgb(100, 40, 40),
        glass: Colour::new(180, 190, 200, 120),
    }
}

palette! {
    /// Interactive objects. No interactive sprites are drawn yet.
    InteractivePalette, "interactive" {
        book_spine: Colour::rgb(60, 40, 30),
        book_pages: Colour::rgb(220, 210, 190),
        candle_wax: Colour::rgb(230, 220, 180),
        flame: Colour::rgb(255, 200, 0),
        key_gold: Colour::rgb(200, 180, 60),
        door_wood: Colour::rgb(50, 35, 25),
    }
}

/// Every domain palette, bundled so the pipeline can pass them around as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palettes {
    pub character: CharacterPalette,
    pub ghost: GhostPalette,
    pub shadow: ShadowPalette,
    pub wraith: WraithPalette,
    pub poltergeist: PoltergeistPalette,
    pub floor: FloorPalette,
    pub wall: WallPalette,
    pub furniture: FurniturePalette,
    pub interactive: InteractivePalette,
}

impl Palettes {
    /// The standard palette set.
    pub const STANDARD: Self = Self {
        character: CharacterPalette::STANDARD,
        ghost: GhostPalette::STANDARD,
        shadow: ShadowPalette::STANDARD,
        wraith: WraithPalette::STANDARD,
        poltergeist: PoltergeistPalette::STANDARD,
        floor: FloorPalette::STANDARD,
        wall: WallPalette::STANDARD,
        furniture: FurniturePalette::STANDARD,
        interactive: InteractivePalette::STANDARD,
    };

    /// All palettes as named entry lists.
    pub fn all(&self) -> Vec<PaletteEntries> {
        vec![
            self.character.entries(),
            self.ghost.entries(),
            self.shadow.entries(),
            self.wraith.entries(),
            self.poltergeist.entries(),
            self.floor.entries(),
            self.wall.entries(),
            self.furniture.entries(),
            self.interactive.entries(),
        ]
    }

    /// Find a palette by name.
    pub fn find(&self, name: &str) -> Option<PaletteEntries> {
        self.all().into_iter().find(|p| p.name == name)
    }
}
