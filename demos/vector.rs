use cml::{vec2, Vec2i};

fn main() -> anyhow::Result<()> {
    cml::init_logger!();

    let a: Vec2i = vec2(5, 6);
    let mut b = a;
    *b.x_mut() = 1;
    println!("{a}  -  {b}");

    let perp = a.perpendicular();
    log::info!("{a} is perpendicular to {perp} (dot = {})", a.dot(perp));

    let c = Vec2i::try_from(&[7, 8][..])?;
    println!("{c} has length {}", c.length());
    Ok(())
}
