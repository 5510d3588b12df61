use trundle_geometry::Vector2;
use trundle_motion::{
    EnergySupplier, Motion, MotionConfig, MotionController, Odometer, Rotation, Translation,
};

fn main() {
    let corners = [
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(10.0, 10.0),
        Vector2::new(0.0, 10.0),
        Vector2::new(0.0, 0.0),
    ];

    // Build the motion list by hand: one leg per side, one on-the-spot
    // quarter turn at each inner corner.
    let mut motions: Vec<Motion> = Vec::new();
    let mut previous: Option<Translation> = None;
    for pair in corners.windows(2) {
        let leg = Translation::new(pair[0], pair[1]).expect("corners are distinct");
        if let Some(prev) = previous {
            let turn = Rotation::from_translations(&prev, &leg).expect("square corners turn");
            motions.push(Motion::Rotation(turn));
        }
        previous = Some(leg.clone());
        motions.push(Motion::Translation(leg));
    }

    let config = MotionConfig::default();
    println!("Driving a 10x10 square with {:?}", config);

    let mut controller = MotionController::new(Odometer::new(), Odometer::new(), config);
    let mut supplier = EnergySupplier::default();

    for (i, motion) in motions.iter().enumerate() {
        match controller.execute(motion, &mut supplier) {
            Ok(()) => println!(
                "Motion {:>2}: len {:>6.3}, energy left {:>8.3}",
                i + 1,
                motion.length(),
                supplier.remaining()
            ),
            Err(e) => {
                eprintln!("Motion {} failed: {}", i + 1, e);
                break;
            }
        }
    }

    println!("\nRight wheel travelled: {:.3}", controller.right_wheel().travelled());
    println!("Left wheel travelled:  {:.3}", controller.left_wheel().travelled());
    println!("Energy remaining:      {:.3}", supplier.remaining());
}
