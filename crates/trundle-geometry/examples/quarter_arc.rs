use trundle_geometry::{Arc, Vector2};

fn main() {
    let start = Vector2::new(1.0, 0.0);
    let end = Vector2::new(0.0, 1.0);
    let start_tangent = Vector2::new(0.0, 1.0);

    println!("Deriving an arc from one tangent...");
    println!("  start:         {}", start);
    println!("  end:           {}", end);
    println!("  start tangent: {}", start_tangent);

    match Arc::from_start_tangent(start, end, start_tangent) {
        Ok(arc) => {
            println!("\nDerived arc:");
            println!("  center:      {}", arc.center());
            println!("  radius:      {}", arc.radius());
            println!("  angle:       {} rad", arc.angle());
            println!("  direction:   {:?}", arc.direction());
            println!("  end tangent: {}", arc.end_tangent());
            println!("  length:      {}", arc.length());
        }
        Err(e) => {
            eprintln!("Failed to derive the arc: {}", e);
        }
    }
}
