//! Icon variant definitions.

use crate::{
    color::{Color, WHITE},
    error::{IconError, Result},
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Asset catalog the icons are written into when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str =
    "/home/user/anchor-top-priorities/Anchor/Assets.xcassets/AppIcon.appiconset";

/// Edge length of an App Store icon.
pub const DEFAULT_SIZE: u32 = 1024;

/// Largest canvas accepted, 256 MiB of RGBA.
pub const MAX_SIZE: u32 = 8192;

/// Outer and inner flame colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlamePalette {
    pub outer: Color,
    pub inner: Color,
}

impl FlamePalette {
    pub const fn new(outer: Color, inner: Color) -> Self {
        Self { outer, inner }
    }

    /// Accepts exactly two colours, outer first.
    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        match colors {
            [outer, inner] => Ok(Self::new(*outer, *inner)),
            _ => Err(IconError::InvalidSpec(format!(
                "A flame needs exactly 2 colours, got {}",
                colors.len()
            ))),
        }
    }
}

/// Everything needed to render and write one icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    name: String,
    output: PathBuf,
    background: (Color, Color),
    anchor: Color,
    flame: Option<FlamePalette>,
    size: u32,
}

impl IconSpec {
    pub fn new(
        name: impl Into<String>,
        output: impl Into<PathBuf>,
        background: (Color, Color),
        anchor: Color,
        flame: Option<FlamePalette>,
        size: u32,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IconError::InvalidSpec("Icon name is empty".to_string()));
        }
        if size == 0 || size > MAX_SIZE {
            return Err(IconError::InvalidSpec(format!(
                "Icon {name:?} is {size}px, expected 1..={MAX_SIZE}"
            )));
        }
        Ok(Self {
            name,
            output: output.into(),
            background,
            anchor,
            flame,
            size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Gradient colours, top then bottom.
    pub fn background(&self) -> (Color, Color) {
        self.background
    }

    pub fn anchor(&self) -> Color {
        self.anchor
    }

    pub fn flame(&self) -> Option<FlamePalette> {
        self.flame
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

/// The shipped icon appearances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    /// Coral gradient with an orange flame
    Default,
    /// Dark grey gradient with a blue flame
    Dark,
    /// Peach gradient with an amber flame
    Tinted,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Dark, Variant::Tinted];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Default => "Default",
            Variant::Dark => "Dark",
            Variant::Tinted => "Tinted",
        }
    }

    pub fn file_name(self) -> String {
        format!("AppIcon-{}.png", self.name())
    }

    fn background(self) -> (Color, Color) {
        match self {
            Variant::Default => (Color::rgb(255, 107, 107), Color::rgb(255, 87, 87)),
            Variant::Dark => (Color::rgb(40, 44, 52), Color::rgb(28, 31, 38)),
            Variant::Tinted => (Color::rgb(255, 138, 101), Color::rgb(255, 112, 97)),
        }
    }

    fn flame(self) -> FlamePalette {
        match self {
            Variant::Default => {
                FlamePalette::new(Color::rgb(255, 159, 67), Color::rgb(255, 223, 117))
            }
            Variant::Dark => FlamePalette::new(Color::rgb(100, 181, 246), Color::rgb(129, 212, 250)),
            Variant::Tinted => FlamePalette::new(Color::rgb(255, 193, 7), Color::rgb(255, 235, 59)),
        }
    }

    pub fn spec(self, out_dir: &Path, size: u32) -> Result<IconSpec> {
        IconSpec::new(
            self.name(),
            out_dir.join(self.file_name()),
            self.background(),
            WHITE,
            Some(self.flame()),
            size,
        )
    }
}

/// Specs for every shipped variant, in generation order.
pub fn default_specs(out_dir: &Path, size: u32) -> Result<Vec<IconSpec>> {
    Variant::ALL
        .iter()
        .map(|variant| variant.spec(out_dir, size))
        .collect()
}
