/// Edge example: highlight edges in a grayscale image
///
/// Demonstrates the grayscale path with a Laplacian kernel and the
/// trailing zero padding applied to even-sided kernels
use convolvr::{Kernel, filter_gray};
use image::{GrayImage, Luma};

fn main() {
    println!("Convolvr - Edge Example");
    println!("=======================\n");

    // Checkerboard of 16x16 tiles
    let width = 128;
    let height = 128;
    let img = GrayImage::from_fn(width, height, |x, y| {
        if ((x / 16) + (y / 16)) % 2 == 0 {
            Luma([220])
        } else {
            Luma([40])
        }
    });

    println!("Created test image: {}x{}", width, height);

    // 3x3 Laplacian: flat regions cancel to zero, tile borders light up
    let laplacian = Kernel::from_rows(&[
        [0.0, 1.0, 0.0],
        [1.0, -4.0, 1.0],
        [0.0, 1.0, 0.0],
    ]);
    println!("Applying {}x{} Laplacian...", laplacian.side(), laplacian.side());
    let edges = filter_gray(&img, &laplacian);

    // 2x2 difference kernel, filtered through the even-to-odd padding
    let roberts = Kernel::from_rows(&[[1.0, 0.0], [0.0, -1.0]]);
    println!(
        "Applying {0}x{0} difference kernel (padded to {1}x{1})...",
        roberts.side(),
        roberts.padded_to_odd().side()
    );
    let diagonal = filter_gray(&img, &roberts);

    img.save("edges_input.png").expect("Failed to save input");
    edges
        .save("edges_laplacian.png")
        .expect("Failed to save Laplacian output");
    diagonal
        .save("edges_diagonal.png")
        .expect("Failed to save difference output");

    println!("\n✓ Saved input to:     edges_input.png");
    println!("✓ Saved Laplacian to: edges_laplacian.png");
    println!("✓ Saved diagonal to:  edges_diagonal.png");
}
