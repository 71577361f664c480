//! Reads two points from stdin and prints the segment between them.
//!
//! Usage:
//! ```text
//! echo "3 4 0 0" | cargo run --example segment      # sr((0.00,0.00); (3.00,4.00))
//! echo "1 1 1 1" | cargo run --example segment      # error: degenerate segment
//! ```

use std::error::Error;
use std::io::Read;

use planar::{Point, Segment};

fn read_point<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Point, Box<dyn Error>> {
    let mut next = || -> Result<f64, Box<dyn Error>> {
        let token = tokens.next().ok_or("expected four coordinates")?;
        Ok(token.parse::<f64>()?)
    };
    let x = next()?;
    let y = next()?;
    Ok(Point::new(x, y))
}

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for planar.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar=info".parse()?);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut tokens = input.split_whitespace();

    let a = read_point(&mut tokens)?;
    let b = read_point(&mut tokens)?;
    tracing::info!(%a, %b, "read endpoints");

    let segment = Segment::new(a, b)?;
    println!("{segment}");
    Ok(())
}
