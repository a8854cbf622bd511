/// Basic example: blur and sharpen a synthetic test image
///
/// This creates a test image with some basic shapes and filters it with
/// hand-built kernels
use convolvr::{Kernel, filter_rgb};
use image::{Rgb, RgbImage};

fn main() {
    println!("Convolvr - Basic Example");
    println!("========================\n");

    // Create a simple 160x160 test image
    let width = 160;
    let height = 160;
    let mut img = RgbImage::new(width, height);

    // Fill with a horizontal gradient
    for y in 0..height {
        for x in 0..width {
            let shade = (x * 255 / width) as u8;
            img.put_pixel(x, y, Rgb([shade, shade, 100]));
        }
    }

    // Draw a white circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                // White circle
                img.put_pixel(x, y, Rgb([255, 255, 255]));
            } else if (dist - radius).abs() < 5.0 {
                // Black edge
                img.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    // 5x5 box blur: every weight is 1/25
    let blur = Kernel::new(5, vec![1.0 / 25.0; 25]);
    println!("Applying {}x{} box blur...", blur.side(), blur.side());
    let blurred = filter_rgb(&img, &blur);

    // 3x3 sharpen
    let sharpen = Kernel::from_rows(&[
        [ 0.0, -1.0,  0.0],
        [-1.0,  5.0, -1.0],
        [ 0.0, -1.0,  0.0],
    ]);
    println!("Applying {}x{} sharpen...", sharpen.side(), sharpen.side());
    let sharpened = filter_rgb(&img, &sharpen);

    // Save all images
    img.save("basic_input.png").expect("Failed to save input");
    blurred
        .save("basic_blurred.png")
        .expect("Failed to save blurred output");
    sharpened
        .save("basic_sharpened.png")
        .expect("Failed to save sharpened output");

    println!("\n✓ Saved input to:     basic_input.png");
    println!("✓ Saved blurred to:   basic_blurred.png");
    println!("✓ Saved sharpened to: basic_sharpened.png");
}
