use kn_vector::vec_model::{Location, Positioned, Sprite};
use kn_vector::{place_sprite, vector_between, vector_to_sprite};
use tracing_subscriber::EnvFilter;

const SPEED: f64 = 12.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let goal = Location::new(80.0, 60.0);
    let mut hunter = Sprite::new(0.0, 0.0);
    let mut prey = Sprite::new(40.0, 90.0);

    for tick in 0..20 {
        // prey circles a quarter turn clockwise around the goal every 5 ticks
        let mut orbit = vector_between(&goal, &prey);
        orbit.rotate(0.05);
        let mut prey_pos = vector_to_sprite(&goal);
        prey_pos.add(&orbit);
        place_sprite(&mut prey, &prey_pos);

        let mut step = vector_between(&hunter, &prey);
        if step.length() <= SPEED {
            place_sprite(&mut hunter, &vector_to_sprite(&prey));
            println!("tick {}: caught prey at ({}, {})", tick, prey.x(), prey.y());
            return;
        }
        step.normalize().scale(SPEED);
        let mut hunter_pos = vector_to_sprite(&hunter);
        hunter_pos.add(&step);
        place_sprite(&mut hunter, &hunter_pos);
        hunter_pos.print();
    }
    println!("prey escaped after {} hunter moves", hunter.moves);
}
