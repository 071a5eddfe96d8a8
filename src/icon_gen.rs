use crate::{
    canvas::{Canvas, Surface},
    color::Color,
    contents_json::{entry_for, write_contents_json},
    error::{IconError, Result},
    geometry::{AnchorGeometry, FlameGeometry, IconLayout},
    icon_spec::{IconSpec, Variant, DEFAULT_OUTPUT_DIR, DEFAULT_SIZE},
};
use anyhow::Context;
use clap::Parser;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, ImageError, RgbImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[clap(
    name = "anchor-icon",
    about = "Render the Anchor app icon variants (Default, Dark, Tinted) as PNG files"
)]
pub struct Args {
    /// Output directory. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Variants to render, each at most once. Renders all of them when omitted.
    #[clap(long, value_enum, value_delimiter = ',', value_name = "VARIANT")]
    pub variant: Vec<Variant>,

    /// Edge length of the square icons in pixels
    #[clap(long, value_name = "PX", default_value_t = DEFAULT_SIZE)]
    pub size: u32,

    /// Colour shown through the rounded corners (CSS color format)
    #[clap(long, value_name = "COLOR", default_value = "#ffffff", value_parser = Color::parse)]
    pub matte: Color,

    /// Also write Contents.json describing all three appearances (1024px only)
    #[clap(long)]
    pub contents_json: bool,
}

impl Args {
    /// Selected variants in generation order, without repeats.
    fn variants(&self) -> Vec<Variant> {
        Variant::ALL
            .into_iter()
            .filter(|v| self.variant.is_empty() || self.variant.contains(v))
            .collect()
    }
}

pub fn generate_icons(args: &Args) -> anyhow::Result<Vec<PathBuf>> {
    // The icon set is a single 1024pt image per appearance
    if args.contents_json && args.size != DEFAULT_SIZE {
        anyhow::bail!(
            "--contents-json describes {DEFAULT_SIZE}x{DEFAULT_SIZE} icons, but --size is {}",
            args.size
        );
    }

    let variants = args.variants();
    let mut written = Vec::with_capacity(variants.len() + 1);

    for variant in &variants {
        let spec = variant
            .spec(&args.output, args.size)
            .with_context(|| format!("Invalid {} icon definition", variant.name()))?;

        let path = generate_icon(&spec, args.matte).with_context(|| {
            format!(
                "Failed to generate {} icon at {}",
                spec.name(),
                spec.output().display()
            )
        })?;
        println!("✓ Created {}", path.display());
        written.push(path);
    }

    if args.contents_json {
        let images = Variant::ALL.into_iter().map(entry_for).collect();
        let path = write_contents_json(&args.output, images)
            .context("Failed to write Contents.json")?;
        println!("✓ Created {}", path.display());
        written.push(path);
    }

    println!("\nAll {} app icons generated successfully!", variants.len());
    Ok(written)
}

/// Render one icon and write it to its output path.
pub fn generate_icon(spec: &IconSpec, matte: Color) -> Result<PathBuf> {
    let image = render_icon(spec, matte)?;
    save_png(&image, spec.output())?;
    info!(variant = spec.name(), path = %spec.output().display(), "wrote icon");
    Ok(spec.output().to_path_buf())
}

/// Render an icon to an opaque RGB image, corners flattened onto `matte`.
pub fn render_icon(spec: &IconSpec, matte: Color) -> Result<RgbImage> {
    let mut canvas = Canvas::new(spec.size())?;
    render_on(&mut canvas, spec)?;
    Ok(canvas.flatten(matte))
}

/// Draw background, glyphs and corner mask onto `surface`.
pub fn render_on<S: Surface>(surface: &mut S, spec: &IconSpec) -> Result<()> {
    if surface.size() != spec.size() {
        return Err(IconError::InvalidSpec(format!(
            "{} icon is {}px but the surface is {}px",
            spec.name(),
            spec.size(),
            surface.size()
        )));
    }
    let layout = IconLayout::new(spec.size());

    let (top, bottom) = spec.background();
    debug!(variant = spec.name(), %top, %bottom, "filling gradient");
    surface.fill_vertical_gradient(top, bottom)?;

    // Flame sits behind the anchor
    if let Some(palette) = spec.flame() {
        debug!(variant = spec.name(), "drawing flame");
        let flame = FlameGeometry::new(layout.flame_center, layout.symbol_size);
        surface.fill_polygon(&flame.outer, palette.outer)?;
        surface.fill_polygon(&flame.inner, palette.inner)?;
    }

    debug!(variant = spec.name(), "drawing anchor");
    let anchor = AnchorGeometry::new(layout.anchor_center, layout.symbol_size);
    draw_anchor(surface, &anchor, spec.anchor())?;

    debug!(radius = layout.corner_radius, "rounding corners");
    surface.clip_rounded(layout.corner_radius)
}

fn draw_anchor<S: Surface>(surface: &mut S, anchor: &AnchorGeometry, color: Color) -> Result<()> {
    surface.stroke_circle(anchor.ring_center, anchor.ring_radius, anchor.ring_stroke, color)?;
    surface.fill_rounded_rect(&anchor.stem, color)?;
    surface.fill_rounded_rect(&anchor.crossbar, color)?;
    surface.stroke_polyline(&anchor.left_hook, anchor.hook_stroke, color)?;
    surface.stroke_polyline(&anchor.right_hook, anchor.hook_stroke, color)?;
    surface.fill_polygon(&anchor.left_tip, color)?;
    surface.fill_polygon(&anchor.right_tip, color)
}

/// Save an image as PNG, reporting the path on failure.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let io_err = |source: std::io::Error| IconError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut out_file = BufWriter::new(File::create(path).map_err(io_err)?);
    write_png(image, &mut out_file).map_err(|source| encode_error(path, source))?;
    out_file.flush().map_err(io_err)
}

/// Write failures surfaced by the encoder are still I/O failures.
fn encode_error(path: &Path, source: ImageError) -> IconError {
    match source {
        ImageError::IoError(source) => IconError::Io {
            path: path.to_path_buf(),
            source,
        },
        source => IconError::Encode {
            path: path.to_path_buf(),
            source,
        },
    }
}

/// Encode as lossless RGB PNG with the strongest compression.
pub fn write_png<W: Write>(image: &RgbImage, w: W) -> image::ImageResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
}
