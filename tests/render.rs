use anchor_icon::{
    canvas::{Canvas, Surface},
    color::WHITE,
    geometry::{AnchorGeometry, IconLayout, Point},
    icon_gen::{generate_icon, render_icon, write_png},
    Color, FlamePalette, IconSpec, Variant,
};
use image::{ColorType, Rgb, RgbImage};
use std::path::Path;
use tempfile::TempDir;

const SIZE: u32 = 1024;

fn default_spec(dir: &Path) -> IconSpec {
    Variant::Default.spec(dir, SIZE).expect("Default spec should be valid")
}

fn corners(img: &RgbImage) -> [Rgb<u8>; 4] {
    let last = img.width() - 1;
    [
        *img.get_pixel(0, 0),
        *img.get_pixel(last, 0),
        *img.get_pixel(0, last),
        *img.get_pixel(last, last),
    ]
}

fn close(a: Rgb<u8>, b: Rgb<u8>) -> bool {
    a.0.iter().zip(b.0).all(|(x, y)| x.abs_diff(y) <= 1)
}

#[test]
fn test_rendering_is_deterministic() {
    let spec = default_spec(Path::new("."));
    let first = render_icon(&spec, WHITE).unwrap();
    let second = render_icon(&spec, WHITE).unwrap();
    assert_eq!(first, second);

    let mut first_png = Vec::new();
    let mut second_png = Vec::new();
    write_png(&first, &mut first_png).unwrap();
    write_png(&second, &mut second_png).unwrap();
    assert_eq!(first_png, second_png, "PNG bytes should be identical");
}

#[test]
fn test_every_variant_is_1024_square() {
    for variant in Variant::ALL {
        let spec = variant.spec(Path::new("."), SIZE).unwrap();
        let img = render_icon(&spec, WHITE).unwrap();
        assert_eq!(img.dimensions(), (SIZE, SIZE), "{} icon", variant.name());
    }

    let odd = IconSpec::new(
        "Odd",
        "odd.png",
        (Color::rgb(0, 0, 0), Color::rgb(1, 2, 3)),
        Color::rgb(9, 9, 9),
        None,
        SIZE,
    )
    .unwrap();
    assert_eq!(render_icon(&odd, WHITE).unwrap().dimensions(), (SIZE, SIZE));
}

#[test]
fn test_gradient_endpoints_and_monotonic_rows() {
    let top = Color::rgb(255, 107, 107);
    let bottom = Color::rgb(255, 87, 87);

    let mut canvas = Canvas::new(SIZE).unwrap();
    canvas.fill_vertical_gradient(top, bottom).unwrap();
    let img = canvas.flatten(WHITE);

    assert_eq!(*img.get_pixel(0, 0), Rgb(top.to_array()));
    assert!(close(*img.get_pixel(0, SIZE - 1), Rgb(bottom.to_array())));

    for y in 1..SIZE {
        let above = img.get_pixel(0, y - 1);
        let here = img.get_pixel(0, y);
        assert_eq!(here[0], 255);
        assert!(here[1] <= above[1], "green rose at row {y}");
        assert!(here[2] <= above[2], "blue rose at row {y}");
    }

    // Rising channels interpolate upwards as well
    let mut canvas = Canvas::new(SIZE).unwrap();
    canvas
        .fill_vertical_gradient(Color::rgb(28, 31, 38), Color::rgb(40, 44, 52))
        .unwrap();
    let img = canvas.flatten(WHITE);
    for y in 1..SIZE {
        let above = img.get_pixel(7, y - 1);
        let here = img.get_pixel(7, y);
        assert!((0..3).all(|c| here[c] >= above[c]), "row {y} went down");
    }
}

#[test]
fn test_corners_show_matte_and_center_does_not() {
    let spec = IconSpec::new(
        "Ink",
        "ink.png",
        (Color::rgb(40, 44, 52), Color::rgb(28, 31, 38)),
        Color::rgb(20, 30, 40),
        None,
        SIZE,
    )
    .unwrap();
    let img = render_icon(&spec, WHITE).unwrap();

    for corner in corners(&img) {
        assert_eq!(corner, Rgb([255, 255, 255]));
    }
    // Inside the radius-229 rounding, not just the very corner
    assert_eq!(*img.get_pixel(40, 40), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(SIZE / 2, SIZE / 2), Rgb([20, 30, 40]));
}

#[test]
fn test_matte_colour_is_configurable() {
    let spec = default_spec(Path::new("."));
    let img = render_icon(&spec, Color::rgb(0, 0, 0)).unwrap();
    for corner in corners(&img) {
        assert_eq!(corner, Rgb([0, 0, 0]));
    }
}

#[test]
fn test_hooks_are_mirror_images() {
    let layout = IconLayout::new(SIZE);
    let anchor = AnchorGeometry::new(layout.anchor_center, layout.symbol_size);
    let cx = layout.anchor_center.x;

    for (left, right) in anchor.left_hook.iter().zip(&anchor.right_hook) {
        assert_eq!(left.y, right.y);
        assert!(((cx - left.x) - (right.x - cx)).abs() < 1e-3);
        assert!(left.x < cx && right.x > cx);
    }
}

#[test]
fn test_hooks_and_tips_are_painted() {
    let spec = Variant::Dark.spec(Path::new("."), SIZE).unwrap();
    let img = render_icon(&spec, WHITE).unwrap();
    let anchor_color = Rgb(spec.anchor().to_array());

    let layout = IconLayout::new(SIZE);
    let anchor = AnchorGeometry::new(layout.anchor_center, layout.symbol_size);
    let centroid = |tip: &[Point; 3]| {
        Point::new(
            tip.iter().map(|p| p.x).sum::<f32>() / 3.0,
            tip.iter().map(|p| p.y).sum::<f32>() / 3.0,
        )
    };

    let samples = [
        ("left hook", anchor.left_hook[10]),
        ("right hook", anchor.right_hook[10]),
        ("left tip", centroid(&anchor.left_tip)),
        ("right tip", centroid(&anchor.right_tip)),
    ];
    for (name, p) in samples {
        assert_eq!(
            *img.get_pixel(p.x as u32, p.y as u32),
            anchor_color,
            "{name} at ({}, {}) should carry the anchor colour",
            p.x,
            p.y
        );
    }

    // Between the hooks, below the stem, only the gradient shows
    let gap = img.get_pixel(SIZE / 2, anchor.left_hook[10].y as u32);
    assert_ne!(*gap, anchor_color);
}

#[test]
fn test_no_flame_leaves_no_flame_pixels() {
    let default = default_spec(Path::new("."));
    let palette = default.flame().unwrap();
    let plain = IconSpec::new(
        "Plain",
        "plain.png",
        default.background(),
        default.anchor(),
        None,
        SIZE,
    )
    .unwrap();

    let img = render_icon(&plain, WHITE).unwrap();
    let flame_colors = [Rgb(palette.outer.to_array()), Rgb(palette.inner.to_array())];
    assert!(img.pixels().all(|px| !flame_colors.contains(px)));

    // The inner flame covers this spot when the flame is drawn
    let with_flame = render_icon(&default, WHITE).unwrap();
    assert_eq!(*with_flame.get_pixel(SIZE / 2, 100), flame_colors[1]);
    assert_ne!(*img.get_pixel(SIZE / 2, 100), flame_colors[1]);
}

#[test]
fn test_flame_palette_from_config_values() {
    let palette = FlamePalette::from_slice(&[
        Color::from_channels(255, 159, 67).unwrap(),
        Color::from_channels(255, 223, 117).unwrap(),
    ])
    .unwrap();
    assert_eq!(Some(palette), default_spec(Path::new(".")).flame());
}

#[test]
fn test_default_icon_end_to_end() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let spec = default_spec(temp_dir.path());

    let path = generate_icon(&spec, WHITE).expect("Icon generation should succeed");
    assert_eq!(path, temp_dir.path().join("AppIcon-Default.png"));

    let icon = image::open(&path).expect("Failed to load generated icon");
    assert_eq!(icon.color(), ColorType::Rgb8);
    assert_eq!(icon.width(), SIZE);
    assert_eq!(icon.height(), SIZE);

    let rgb = icon.to_rgb8();
    // Leftmost column of the straight top/bottom edges, past the corner radius
    assert_eq!(*rgb.get_pixel(256, 0), Rgb([255, 107, 107]));
    assert!(close(*rgb.get_pixel(256, SIZE - 1), Rgb([255, 87, 87])));
    for corner in corners(&rgb) {
        assert_eq!(corner, Rgb([255, 255, 255]));
    }
}

#[test]
fn test_written_files_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let spec = default_spec(temp_dir.path());

    let path = generate_icon(&spec, WHITE).unwrap();
    let first = std::fs::read(&path).unwrap();
    generate_icon(&spec, WHITE).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}
