mod common;

use std::collections::HashMap;

use common::*;
use nebula_strike::entities::*;
use nebula_strike::spawn::*;

#[test]
fn boss_has_fixed_stats() {
    let b = spawn_boss(&FIELD);
    assert_eq!(b.kind, EnemyKind::Boss);
    assert_eq!(b.radius, 42.0);
    assert_eq!(b.speed, 1.2);
    assert_eq!(b.hp, 220);
    assert_eq!(b.damage, 40);
    assert_eq!(b.score, 300);
    assert_eq!(b.pos.x, FIELD.width + 120.0);
    assert_eq!(b.pos.y, FIELD.height / 2.0);
}

#[test]
fn archetype_weights_sum_to_one_hundred() {
    let total: u32 = ARCHETYPES.iter().map(|p| p.weight).sum();
    assert_eq!(total, 100);
    assert!(profile_for(EnemyKind::Boss).is_none());
    assert_eq!(profile_for(EnemyKind::Tank).map(|p| p.hp), Some(4));
}

#[test]
fn ordinary_enemies_respect_their_profile() {
    let mut rng = seeded_rng();
    for _ in 0..500 {
        let e = spawn_enemy(&FIELD, &mut rng);
        let profile = profile_for(e.kind).expect("ordinary archetype");
        assert!(e.radius >= profile.radius.0 && e.radius < profile.radius.1);
        assert!(e.speed >= profile.speed.0 && e.speed < profile.speed.1);
        assert_eq!(e.hp, profile.hp);
        assert_eq!(e.score, profile.score);
        assert_eq!(e.damage, profile.damage);
        assert_eq!(e.pos.x, FIELD.width + e.radius + 20.0);
        assert!(e.pos.y >= 40.0 && e.pos.y < FIELD.height - 40.0);
        assert!(e.wobble >= 0.0 && e.wobble < std::f64::consts::TAU);
    }
}

#[test]
fn archetype_draw_follows_weights() {
    let mut rng = seeded_rng();
    let draws = 20_000;
    let mut counts: HashMap<EnemyKind, u32> = HashMap::new();
    for _ in 0..draws {
        *counts.entry(pick_archetype(&mut rng).kind).or_default() += 1;
    }
    for profile in ARCHETYPES.iter() {
        let share = counts.get(&profile.kind).copied().unwrap_or(0) as f64 / draws as f64;
        let expected = profile.weight as f64 / 100.0;
        assert!(
            (share - expected).abs() < 0.03,
            "{:?}: drew {:.3}, expected {:.3}",
            profile.kind,
            share,
            expected
        );
    }
}

#[test]
fn power_ups_cover_every_kind() {
    let mut rng = seeded_rng();
    let mut seen = Vec::new();
    for _ in 0..500 {
        let item = spawn_power_up(&FIELD, &mut rng);
        assert_eq!(item.pos.x, FIELD.width + 40.0);
        assert!(item.pos.y >= 50.0 && item.pos.y < FIELD.height - 50.0);
        assert_eq!(item.radius, 12.0);
        assert_eq!(item.speed, 2.6);
        if !seen.contains(&item.kind) {
            seen.push(item.kind);
        }
    }
    assert_eq!(seen.len(), PowerKind::ALL.len());
}

#[test]
fn star_field_fills_the_playfield() {
    let stars = spawn_stars(&FIELD, &mut seeded_rng());
    assert_eq!(stars.len(), 120);
    for s in &stars {
        assert!(s.pos.x >= 0.0 && s.pos.x < FIELD.width);
        assert!(s.pos.y >= 0.0 && s.pos.y < FIELD.height);
        assert!(s.size >= 0.5 && s.size < 2.5);
    }
}

#[test]
fn spawn_delays_stay_in_range() {
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let enemy_delay = next_enemy_delay(&mut rng);
        assert!((28.0..58.0).contains(&enemy_delay));
        let power_delay = next_power_up_delay(&mut rng);
        assert!((240.0..480.0).contains(&power_delay));
    }
}
