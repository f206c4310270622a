//! Fit an image into an A4 page with a 2cm margin.
//!
//! Run with: cargo run --example fit --features tracing -- photo.png

use urithmetic::{Align, Area, Convert, Pos, Size, Unit};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let image = match std::env::args().nth(1) {
        Some(path) => Size::from_image_file(&path, Unit::Mm)?,
        None => Size::from_numbers(1920.0, 1080.0, Unit::Pt)?,
    };

    let mut page = Area::from_numbers(0.0, 0.0, 21.0, 29.7, Unit::Cm)?;
    let margin = Pos::from_numbers(2.0, 2.0, Unit::Cm)?;
    page.move_by(&margin, Unit::Mm)?;
    let inner = Area::from_lengths(
        page.left(None),
        page.top(None),
        page.width(None).difference(&margin.left(None).scaled(2.0)?, None)?,
        page.height(None).difference(&margin.top(None).scaled(2.0)?, None)?,
        None,
    );

    for (name, align) in [
        ("centered", Align::CENTER),
        ("top left", Align::TOP | Align::LEFT),
        ("bottom right", Align::BOTTOM | Align::RIGHT),
    ] {
        let placed = inner.fit_size(&image, align, None)?;
        println!("{name:>12}: {placed}");
        println!("{:>12}  {}", "", placed.clone_to_unit(Unit::In));
    }
    Ok(())
}
