//! Print the evaluation of a few reference side triples.
//!
//! Run with `cargo run -p trigon --example classify_table`.

use trigon::{analyze, TriangleError};

fn main() -> Result<(), TriangleError> {
    let cases = [
        (3.0, 4.0, 5.0),
        (5.0, 5.0, 5.0),
        (5.0, 5.0, 8.0),
        (1.0, 1.0, 3.0),
        (1.0, 1.0, 2.0),
        (7.0, 8.0, 9.0),
    ];
    println!(
        "{:>6} {:>6} {:>6}  {:<20} {:>24} {:>9} {:>9}",
        "side1", "side2", "side3", "type", "angles", "area", "perim"
    );
    for (a, b, c) in cases {
        let r = analyze(a, b, c)?;
        let angles = format!(
            "{:.2}/{:.2}/{:.2}",
            r.angles[0], r.angles[1], r.angles[2]
        );
        println!(
            "{a:>6} {b:>6} {c:>6}  {:<20} {angles:>24} {:>9.3} {:>9.3}",
            r.triangle_type, r.area, r.perimeter
        );
    }
    // malformed input is an error, not a "not a triangle" row
    if let Err(err) = analyze(0.0, 4.0, 5.0) {
        println!("(0, 4, 5): {err}");
    }
    Ok(())
}
