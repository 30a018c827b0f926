mod common;

use common::*;
use nebula_strike::entities::*;
use nebula_strike::geometry::{overlaps, Vec2};
use nebula_strike::motion::*;
use nebula_strike::spawn::{angled_bullet, bullet};

const EPS: f64 = 1e-9;

// ── Bullets ───────────────────────────────────────────────────────────────────

#[test]
fn straight_bullet_flies_right() {
    let mut b = bullet(Vec2::new(100.0, 200.0), BulletMotion::Straight);
    step_bullet(&mut b, &[], 1.5);
    assert!((b.pos.x - (100.0 + 8.2 * 1.5)).abs() < EPS);
    assert_eq!(b.pos.y, 200.0);
}

#[test]
fn angled_bullet_keeps_its_direction() {
    let mut b = angled_bullet(Vec2::new(100.0, 200.0), 0.3);
    // a nearby enemy must not bend it
    let enemies = [enemy(EnemyKind::Grunt, 150.0, 100.0)];
    step_bullet(&mut b, &enemies, 1.0);
    assert!((b.pos.x - (100.0 + 0.3f64.cos() * 8.2)).abs() < EPS);
    assert!((b.pos.y - (200.0 + 0.3f64.sin() * 8.2)).abs() < EPS);
}

#[test]
fn homing_bullet_seeks_nearest_enemy() {
    let mut b = bullet(Vec2::new(100.0, 100.0), BulletMotion::Homing);
    let enemies = [
        enemy(EnemyKind::Grunt, 200.0, 300.0),
        enemy(EnemyKind::Grunt, 300.0, 100.0),
    ];
    step_bullet(&mut b, &enemies, 1.0);
    // (300,100) is nearer: 200^2 < 100^2 + 200^2
    assert!((b.pos.x - 108.2).abs() < EPS);
    assert!((b.pos.y - 100.0).abs() < EPS);
}

#[test]
fn homing_tie_goes_to_first_enemy() {
    let enemies = [
        enemy(EnemyKind::Grunt, 100.0, 200.0),
        enemy(EnemyKind::Swift, 100.0, 0.0),
    ];
    let picked = nearest_enemy(Vec2::new(100.0, 100.0), &enemies).unwrap();
    assert_eq!(picked.kind, EnemyKind::Grunt);

    let mut b = bullet(Vec2::new(100.0, 100.0), BulletMotion::Homing);
    step_bullet(&mut b, &enemies, 1.0);
    assert!((b.pos.y - 108.2).abs() < EPS);
}

#[test]
fn homing_bullet_holds_without_targets() {
    let mut b = bullet(Vec2::new(100.0, 100.0), BulletMotion::Homing);
    step_bullet(&mut b, &[], 1.0);
    assert_eq!(b.pos, Vec2::new(100.0, 100.0));
    assert!(nearest_enemy(b.pos, &[]).is_none());
}

#[test]
fn homing_bullet_on_target_does_not_move() {
    let mut b = bullet(Vec2::new(300.0, 300.0), BulletMotion::Homing);
    let enemies = [enemy(EnemyKind::Tank, 300.0, 300.0)];
    step_bullet(&mut b, &enemies, 1.0);
    assert_eq!(b.pos, Vec2::new(300.0, 300.0));
    assert!(b.pos.x.is_finite() && b.pos.y.is_finite());
}

#[test]
fn homing_bullet_converges_on_stationary_enemy() {
    let mut target = enemy(EnemyKind::Tank, 700.0, 420.0);
    target.speed = 0.0;
    let enemies = vec![target];
    let mut bullets = vec![bullet(Vec2::new(138.0, 270.0), BulletMotion::Homing)];

    let mut reached = false;
    for _ in 0..200 {
        move_bullets(&mut bullets, &enemies, 1.0, &FIELD);
        assert_eq!(bullets.len(), 1, "homing bullet left the field");
        if overlaps(&bullets[0], &enemies[0]) {
            reached = true;
            break;
        }
    }
    assert!(reached);
}

#[test]
fn bullets_culled_past_margin() {
    let inside = bullet(Vec2::new(FIELD.width + 40.0, 10.0), BulletMotion::Straight);
    let right = bullet(Vec2::new(FIELD.width + 40.1, 10.0), BulletMotion::Straight);
    let left = bullet(Vec2::new(-40.1, 10.0), BulletMotion::Straight);
    let top = bullet(Vec2::new(10.0, -40.1), BulletMotion::Straight);
    let bottom = bullet(Vec2::new(10.0, FIELD.height + 40.1), BulletMotion::Straight);
    assert!(bullet_in_bounds(&inside, &FIELD));
    assert!(!bullet_in_bounds(&right, &FIELD));
    assert!(!bullet_in_bounds(&left, &FIELD));
    assert!(!bullet_in_bounds(&top, &FIELD));
    assert!(!bullet_in_bounds(&bottom, &FIELD));

    let mut bullets = vec![
        bullet(Vec2::new(FIELD.width + 35.0, 10.0), BulletMotion::Straight),
        bullet(Vec2::new(500.0, 10.0), BulletMotion::Straight),
    ];
    move_bullets(&mut bullets, &[], 1.0, &FIELD);
    assert_eq!(bullets.len(), 1);
    assert!((bullets[0].pos.x - 508.2).abs() < EPS);
}

// ── Enemies ───────────────────────────────────────────────────────────────────

#[test]
fn grunt_drifts_left_and_wobbles() {
    let mut e = enemy(EnemyKind::Grunt, 500.0, 270.0);
    e.speed = 3.0;
    step_enemy(&mut e, 1.0, &FIELD);
    assert!((e.pos.x - 497.0).abs() < EPS);
    assert!((e.wobble - 0.03).abs() < EPS);
    assert!((e.pos.y - (270.0 + 0.03f64.sin() * 0.5)).abs() < EPS);
}

#[test]
fn swift_wobbles_at_higher_frequency() {
    let mut e = enemy(EnemyKind::Swift, 500.0, 270.0);
    e.wobble = 0.5;
    step_enemy(&mut e, 2.0, &FIELD);
    let phase = 0.5 + 0.11 * 2.0;
    assert!((e.wobble - phase).abs() < EPS);
    assert!((e.pos.y - (270.0 + (phase * 2.4).sin() * 1.4 * 2.0)).abs() < EPS);
}

#[test]
fn boss_is_locked_to_centre_sinusoid() {
    let mut b = boss(800.0, 10.0);
    step_enemy(&mut b, 1.0, &FIELD);
    assert!((b.pos.x - 798.8).abs() < EPS);
    assert!((b.pos.y - (270.0 + 0.02f64.sin() * 120.0)).abs() < EPS);
}

#[test]
fn wobble_table() {
    assert_eq!(wobble_for(EnemyKind::Tank).rate, 0.015);
    assert_eq!(wobble_for(EnemyKind::Tank).amplitude, 0.2);
    assert_eq!(wobble_for(EnemyKind::Zigzag).amplitude, 2.2);
    assert_eq!(wobble_for(EnemyKind::Zigzag).rate, 0.08);
    assert_eq!(wobble_for(EnemyKind::Swift).frequency, 2.4);
    assert_eq!(wobble_for(EnemyKind::Boss).amplitude, 120.0);
}

#[test]
fn ordinary_enemies_stay_inside_the_field() {
    let mut high = enemy(EnemyKind::Zigzag, 500.0, 5.0);
    let mut low = enemy(EnemyKind::Zigzag, 500.0, FIELD.height - 5.0);
    step_enemy(&mut high, 1.0, &FIELD);
    step_enemy(&mut low, 1.0, &FIELD);
    assert_eq!(high.pos.y, 28.0); // radius 20 + 8
    assert_eq!(low.pos.y, FIELD.height - 28.0);
}

#[test]
fn escaped_enemies_are_dropped_quietly() {
    let mut enemies = vec![
        enemy(EnemyKind::Grunt, -119.0, 270.0),
        enemy(EnemyKind::Grunt, -100.0, 270.0),
    ];
    move_enemies(&mut enemies, 1.0, &FIELD);
    assert_eq!(enemies.len(), 1);
    assert!((enemies[0].pos.x + 102.0).abs() < EPS);
}

// ── Pickups & stars ───────────────────────────────────────────────────────────

#[test]
fn power_ups_drift_and_expire() {
    let mut items = vec![
        power_up(PowerKind::Shield, -39.0, 100.0),
        power_up(PowerKind::Homing, 400.0, 100.0),
    ];
    move_power_ups(&mut items, 1.0);
    assert_eq!(items.len(), 1);
    assert!((items[0].pos.x - 397.4).abs() < EPS);
}

#[test]
fn stars_recycle_to_the_right() {
    let mut stars = vec![
        Star { pos: Vec2::new(0.5, 100.0), size: 1.0, speed: 1.0 },
        Star { pos: Vec2::new(300.0, 100.0), size: 1.0, speed: 2.0 },
    ];
    move_stars(&mut stars, 1.0, &FIELD, &mut seeded_rng());
    assert!(stars[0].pos.x >= FIELD.width && stars[0].pos.x < FIELD.width + 40.0);
    assert!(stars[0].pos.y >= 0.0 && stars[0].pos.y < FIELD.height);
    assert_eq!(stars[1].pos, Vec2::new(298.0, 100.0));
}
