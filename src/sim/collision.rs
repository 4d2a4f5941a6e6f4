//! Collision detection and response for the rectangular field
//!
//! The ball is a circle, the paddle an axis-aligned rectangle. Walls bound the
//! field on the left, right and top; the bottom is open.

use std::f32::consts::PI;

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::fraction_across;

/// Bounce off the left/right walls.
///
/// Flips vx and pulls the ball back inside so that a steep post-hit angle
/// cannot leave it embedded in the wall.
pub fn resolve_side_walls(ball: &mut Ball, field_width: f32) -> bool {
    let r = ball.radius;
    if ball.pos.x - r <= 0.0 || ball.pos.x + r >= field_width {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = ball.pos.x.clamp(r, (field_width - r).max(r));
        return true;
    }
    false
}

/// Bounce off the top wall
pub fn resolve_ceiling(ball: &mut Ball) -> bool {
    if ball.pos.y - ball.radius <= 0.0 {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.radius;
        return true;
    }
    false
}

/// Ball overlaps the paddle's vertical band, its centre lies within the
/// paddle's horizontal span, and it is moving down.
///
/// The downward check stops a ball that is already leaving the paddle from
/// being hit again on the next frame.
pub fn is_paddle_hit(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius >= paddle.top()
        && ball.pos.y - ball.radius <= paddle.bottom()
        && ball.pos.x >= paddle.left()
        && ball.pos.x <= paddle.right()
        && ball.vel.y > 0.0
}

/// Reflection angle from vertical for a hit at `hit_pos` (0 = left edge,
/// 1 = right edge). `span` is the full deflection range as a fraction of π.
#[inline]
pub fn deflection_angle(hit_pos: f32, span: f32) -> f32 {
    (hit_pos - 0.5) * PI * span
}

/// Send the ball back up off the paddle.
///
/// Speed grows by `increment` per hit up to `max_speed`; direction depends
/// only on where the paddle was struck. Returns the new speed.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Paddle,
    span: f32,
    increment: f32,
    max_speed: f32,
    separation: f32,
) -> f32 {
    let hit_pos = fraction_across(ball.pos.x, paddle.left(), paddle.width);
    let angle = deflection_angle(hit_pos, span);
    let speed = (ball.speed() + increment).min(max_speed);

    ball.vel = Vec2::new(angle.sin() * speed, -angle.cos() * speed);
    ball.pos.y = paddle.top() - ball.radius - separation;
    speed
}

/// Ball has fully left the field through the bottom
#[inline]
pub fn is_past_bottom(ball: &Ball, field_height: f32) -> bool {
    ball.pos.y - ball.radius > field_height
}
