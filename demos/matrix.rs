use cml::{mat, transform::rotate, vec3, Mat2x3, Mat3, Mat3x2, Mat4, Vec3d, Vector};

fn main() -> anyhow::Result<()> {
    cml::init_logger!();

    let a: Mat2x3 = mat![0.0, 4.0, -2.0; -4.0, -3.0, 0.0];
    let b: Mat3x2 = mat![0.0, 1.0; 1.0, -1.0; 2.0, 3.0];
    println!("{a}");
    println!("{b}");
    println!("{}", a * b);

    let c = Mat2x3::<f64>::try_from(&[1.0, -1.0, 2.0, 0.0, -3.0, 1.0][..])?;
    let x: Vec3d = vec3(2.0, 1.0, 0.0);
    println!("{x}");

    // The same vector, viewed as a 3x1 matrix.
    let column = x.into_column();
    println!("{column}");
    println!("{}", c * column);
    println!("{}", c * x);
    log::info!(
        "column and vector products agree: {}",
        Vector::from(c * column) == c * x
    );

    println!("========================================");

    let d = Mat3::<f64>::from_fn(|row, col| (col + row * 3) as f64);
    let y: Vec3d = Vector::from_fn(|i| i as f64);

    let e = rotate(Mat4::<f64>::identity(), 0.0, vec3(0.0, 0.0, 0.0));
    log::debug!("zero rotation:\n{e}");

    print!("{d}");
    println!("{y}");
    println!("{}", d * y);
    Ok(())
}
