//! Walks through the point API and logs each result.
//!
//! Usage:
//! ```text
//! cargo run --example points
//! RUST_LOG=jicgeometry=debug cargo run --example points   # show rejected inputs
//! ```

use std::any::Any;

use jicgeometry::{GeometryError, Point2D, Point3D};

fn main() -> Result<(), GeometryError> {
    // Default: WARN for everything, INFO for the demo and the library.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("points=info".parse().unwrap_or_default())
        .add_directive("jicgeometry=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(version = jicgeometry::VERSION, "jicgeometry demo");

    let p1 = Point2D::new(3, 0);
    let p2 = Point2D::from([0, 4]);
    tracing::info!("{p1} + {p2} = {}", p1 + p2);
    tracing::info!("{p1} / 2 = {}", p1 / 2);
    tracing::info!("distance = {}", p1.distance(&p2));
    tracing::info!("unit vector = {}", (p1 + p2).unit_vector()?);

    let a = Point3D::new(6, 0, 8);
    let b = Point3D::new(3, 0, 4);
    tracing::info!("{a} - {b} = {}", a - b);
    let c = Point3D::new(5.9, 8.2, 9.5);
    tracing::info!("{c} as int = {}", c.as_type("int")?);

    let args: [&dyn Any; 3] = [&"1", &2.0, &3];
    if let Err(err) = Point3D::try_from_args(&args) {
        tracing::warn!(%err, "rejected point");
    }
    if let Err(err) = Point2D::new(0, 0).unit_vector() {
        tracing::warn!(%err, "cannot normalize origin");
    }

    Ok(())
}
