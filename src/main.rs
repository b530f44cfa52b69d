//! Headless demo level. This binary is the peripheral glue the engine is
//! designed to collaborate with: it lays out borders, blocks and a paddle,
//! launches a few balls, steers the paddle and retires struck blocks and
//! lost balls between ticks.

use brick_breaker::{
    Angle, Ball, Block, BlockRemover, Counter, Environment, EnvironmentError, HitLogger, Paddle,
    Point, Rect, RemovalQueue, ScoreTracker, Velocity,
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 600.0;
const BORDER: f64 = 20.0;

const BLOCK_WIDTH: f64 = 60.0;
const BLOCK_HEIGHT: f64 = 20.0;
const BLOCK_ROWS: usize = 5;
const BLOCK_COLUMNS: usize = 12;
const GRID_TOP: f64 = 100.0;

const PADDLE_WIDTH: f64 = 120.0;
const PADDLE_HEIGHT: f64 = 10.0;
const PADDLE_TOP: f64 = 560.0;
const PADDLE_SPEED: f64 = 8.0;

const BALL_RADIUS: f64 = 5.0;
const BALL_SPEED: f64 = 6.0;
const BALL_COUNT: usize = 3;

const MAX_TICKS: usize = 100_000;
const RNG_SEED: u64 = 7;

fn main() -> Result<(), EnvironmentError> {
    env_logger::init();

    let mut environment = Environment::new();
    let score = Counter::default();
    let remaining = Counter::default();
    let removals = RemovalQueue::new();

    // Borders. There is no bottom border: below the paddle is the loss
    // region.
    environment.add(Block::new(Rect::from_coords(0.0, 0.0, WIDTH, BORDER)));
    environment.add(Block::new(Rect::from_coords(0.0, 0.0, BORDER, HEIGHT)));
    environment.add(Block::new(Rect::from_coords(
        WIDTH - BORDER,
        0.0,
        BORDER,
        HEIGHT,
    )));

    let grid_left = (WIDTH - BLOCK_COLUMNS as f64 * BLOCK_WIDTH) / 2.0;
    for row in 0..BLOCK_ROWS {
        for column in 0..BLOCK_COLUMNS {
            let mut block = Block::new(Rect::from_coords(
                grid_left + column as f64 * BLOCK_WIDTH,
                GRID_TOP + row as f64 * BLOCK_HEIGHT,
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
            ));
            block.add_hit_listener(Box::new(ScoreTracker::new(score.clone())));
            block.add_hit_listener(Box::new(BlockRemover::new(
                removals.clone(),
                remaining.clone(),
            )));
            block.add_hit_listener(Box::new(HitLogger));
            remaining.increase(1);
            environment.add(block);
        }
    }

    let paddle_id = environment.add(Paddle::new(
        Rect::from_coords(
            (WIDTH - PADDLE_WIDTH) / 2.0,
            PADDLE_TOP,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        ),
        PADDLE_SPEED,
        BORDER,
        WIDTH - BORDER,
    ));

    let mut rng = ChaCha8Rng::seed_from_u64(RNG_SEED);
    let mut balls: Vec<Ball> = (0..BALL_COUNT)
        .map(|_| {
            let angle = Angle::from_deg(rng.random_range(300.0..=420.0));
            Ball::new(
                Point::new(WIDTH / 2.0, PADDLE_TOP - 2.0 * BALL_RADIUS),
                BALL_RADIUS,
                Velocity::from_angle_and_speed(angle, BALL_SPEED),
            )
        })
        .collect();

    let mut ticks = 0;
    while ticks < MAX_TICKS && !balls.is_empty() && remaining.value() > 0 {
        // Chase the first live ball, the way a keyboard player would.
        let target_x = balls[0].center().x();
        let paddle = environment.paddle_mut(paddle_id)?;
        if target_x < paddle.middle_x() {
            paddle.move_left();
        } else {
            paddle.move_right();
        }

        for ball in &mut balls {
            ball.step(&mut environment);
        }

        // Registry mutations wait until the tick is over.
        for id in removals.drain() {
            environment.remove(id);
        }
        balls.retain(|ball| ball.center().y() <= HEIGHT);

        ticks += 1;
    }

    let outcome = if remaining.value() == 0 {
        "cleared"
    } else {
        "lost"
    };
    info!("{outcome} after {ticks} ticks");
    println!(
        "{outcome}: score {}, blocks left {}, balls left {}",
        score.value(),
        remaining.value(),
        balls.len()
    );
    Ok(())
}
