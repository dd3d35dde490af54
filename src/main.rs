// ============================================================================
// Fixed-Dim Demo
// ============================================================================

use fixed_dim::point::FixedPoint;
use fixed_dim::{make_list_3, make_point, print_all};
use std::error::Error;

#[allow(clippy::approx_constant)]
fn main() -> Result<(), Box<dyn Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    print_all!(1, 2, 3, "hello", 5.0f32, 3.14159, 'A')?;
    println!();

    let list = make_list_3!("yes", "", "");
    print_all!(list.one(), list.two(), list.three())?;
    println!();

    let point: FixedPoint<f64, 3> = make_point!(7.8, 9.8, 3.141596);
    tracing::debug!(%point, dimension = point.dimension(), "built demo point");

    Ok(())
}
