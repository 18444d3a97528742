//! Collision detection and resolution
//!
//! Plain axis-aligned boxes. Each element of the first list collides with at
//! most one element of the second: the first collidable overlap in list order.
//! Removals from the first list are deferred until the scan is done.

use super::bullet::Bullet;
use super::entity::{Body, Entity};
use super::goody::{Goody, GoodyKind};
use super::player::Player;
use super::rng::RandomSource;

/// Strict box overlap; touching edges and empty boxes never overlap
pub fn aabb_overlap(a: &Body, b: &Body) -> bool {
    if a.size.x <= 0.0 || a.size.y <= 0.0 || b.size.x <= 0.0 || b.size.y <= 0.0 {
        return false;
    }
    a.pos.x < b.right() && b.pos.x < a.right() && a.pos.y < b.bottom() && b.pos.y < a.bottom()
}

/// Both collidable and overlapping
pub fn collides(a: &impl Entity, b: &impl Entity) -> bool {
    a.is_collidable() && b.is_collidable() && aabb_overlap(a.body(), b.body())
}

/// For each `a`, resolve against the first colliding `b` only.
///
/// `on_hit` runs during the scan, so a `b` it disables is skipped by later
/// elements of `a`. Returns the indices of `a` that hit something, ascending.
pub fn first_hits<A, B, F>(a: &[A], b: &mut [B], mut on_hit: F) -> Vec<usize>
where
    A: Entity,
    B: Entity,
    F: FnMut(&A, usize, &mut B),
{
    let mut hits = Vec::new();
    for (i, item) in a.iter().enumerate() {
        if let Some(j) = b.iter().position(|target| collides(item, target)) {
            on_hit(item, j, &mut b[j]);
            hits.push(i);
        }
    }
    hits
}

/// Remove the given indices, highest first so earlier indices stay valid
pub fn remove_indices<T>(items: &mut Vec<T>, mut indices: Vec<usize>) {
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices.dedup();
    for index in indices {
        if index < items.len() {
            items.remove(index);
        }
    }
}

/// Outcome of one bullet striking a target
#[derive(Debug, Clone, PartialEq)]
pub struct BulletHit {
    /// Player credited with the hit, if any
    pub owner: Option<usize>,
    /// Index of the struck entity in its list
    pub target: usize,
    pub score: u32,
    /// Goody dropped by the target
    pub goody: Option<Goody>,
}

/// Kill the first target each bullet touches, then drop the spent bullets
pub fn shoot<B: Entity>(
    bullets: &mut Vec<Bullet>,
    targets: &mut [B],
    rng: &mut dyn RandomSource,
) -> Vec<BulletHit> {
    let mut hits = Vec::new();
    let spent = first_hits(bullets, targets, |bullet, index, target| {
        let score = target.body().score_value;
        let goody = target.kill(rng);
        hits.push(BulletHit {
            owner: bullet.owner,
            target: index,
            score,
            goody,
        });
    });
    remove_indices(bullets, spent);
    hits
}

/// Hand goodies to the players touching them; returns `(player, kind)` pairs
pub fn collect_goodies(goodies: &mut Vec<Goody>, players: &mut [Player]) -> Vec<(usize, GoodyKind)> {
    let mut collected = Vec::new();
    let taken = first_hits(goodies, players, |goody, index, player| {
        player.apply_goody(goody.kind);
        collected.push((index, goody.kind));
    });
    remove_indices(goodies, taken);
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::bullet::BulletKind;
    use crate::sim::enemy::{Enemy, EnemyKind};
    use crate::sim::rng::ScriptedRandom;
    use crate::sim::wall::Wall;
    use glam::Vec2;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, w: f32, h: f32) -> Body {
        let mut body = Body::centered(Vec2::ZERO, Vec2::new(w, h), Vec2::ZERO, 0);
        body.pos = Vec2::new(x, y);
        body
    }

    fn enemy_bullet(x: f32, y: f32) -> Bullet {
        Bullet::new(Vec2::new(x, y), Vec2::new(0.0, ENEMY_BULLET_SPEED), None, BulletKind::Zigzag)
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &body(10.0, 0.0, 10.0, 10.0)));
        assert!(!aabb_overlap(&a, &body(0.0, 10.0, 10.0, 10.0)));
        assert!(aabb_overlap(&a, &body(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn test_zero_size_inside_other_box() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        assert!(!aabb_overlap(&a, &body(5.0, 5.0, 0.0, 3.0)));
        assert!(!aabb_overlap(&body(5.0, 5.0, 3.0, 0.0), &a));
    }

    #[test]
    fn test_first_match_only() {
        let mut rng = ScriptedRandom::constant(0.9);
        let mut bullets = vec![Bullet::laser(Vec2::new(400.0, 100.0), 0)];
        // Two enemies both overlapping the bullet; list order decides
        let mut enemies = vec![
            Enemy::new(EnemyKind::Squid, Vec2::new(405.0, 100.0)),
            Enemy::new(EnemyKind::Crab, Vec2::new(400.0, 100.0)),
        ];
        let hits = shoot(&mut bullets, &mut enemies, &mut rng);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, 0);
        assert_eq!(hits[0].owner, Some(0));
        assert_eq!(hits[0].score, EnemyKind::Squid.score());
        assert!(bullets.is_empty());
        assert!(!enemies[0].body.collidable);
        assert!(enemies[1].body.collidable);
    }

    #[test]
    fn test_killed_target_is_skipped_by_later_bullets() {
        let mut rng = ScriptedRandom::constant(0.9);
        let mut bullets = vec![
            Bullet::laser(Vec2::new(400.0, 100.0), 0),
            Bullet::laser(Vec2::new(402.0, 100.0), 1),
            Bullet::laser(Vec2::new(100.0, 300.0), 0),
        ];
        let mut enemies = vec![Enemy::new(EnemyKind::Octopus, Vec2::new(400.0, 100.0))];
        let hits = shoot(&mut bullets, &mut enemies, &mut rng);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].owner, Some(0));
        // Second bullet found nothing collidable and survives, as does the miss
        assert_eq!(bullets.len(), 2);
        assert_eq!(bullets[0].owner, Some(1));
        assert_eq!(bullets[1].body.center(), Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_deferred_removal_keeps_unmatched_order() {
        let mut rng = ScriptedRandom::constant(0.5);
        let mut bullets = vec![
            enemy_bullet(100.0, 448.0),
            enemy_bullet(300.0, 100.0),
            enemy_bullet(132.0, 448.0),
            enemy_bullet(500.0, 100.0),
        ];
        let mut walls = vec![Wall::new(Vec2::new(100.0, 448.0)), Wall::new(Vec2::new(132.0, 448.0))];
        let hits = shoot(&mut bullets, &mut walls, &mut rng);
        assert_eq!(hits.iter().map(|h| h.target).collect::<Vec<_>>(), vec![0, 1]);
        assert!(hits.iter().all(|h| h.owner.is_none()));
        let xs: Vec<f32> = bullets.iter().map(|b| b.body.center().x).collect();
        assert_eq!(xs, vec![300.0, 500.0]);
    }

    #[test]
    fn test_remove_indices_descending() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        remove_indices(&mut items, vec![1, 3, 1]);
        assert_eq!(items, vec!['a', 'c', 'e']);
    }

    #[test]
    fn test_goody_applies_to_first_player() {
        let mut players = vec![
            Player::new(0, Vec2::new(400.0, PLAYER_Y), 3),
            Player::new(1, Vec2::new(410.0, PLAYER_Y), 3),
        ];
        let mut goodies = vec![Goody::new(GoodyKind::AddLife, Vec2::new(405.0, PLAYER_Y), 90.0)];
        let collected = collect_goodies(&mut goodies, &mut players);
        assert_eq!(collected, vec![(0, GoodyKind::AddLife)]);
        assert!(goodies.is_empty());
        assert_eq!(players[0].lives, 4);
        assert_eq!(players[1].lives, 3);
    }

    #[test]
    fn test_enemy_kill_yields_goody_through_shoot() {
        let mut rng = ScriptedRandom::new(vec![0.0, 0.0]);
        let mut bullets = vec![Bullet::laser(Vec2::new(400.0, 100.0), 1)];
        let mut enemies = vec![Enemy::new(EnemyKind::Crab, Vec2::new(400.0, 100.0))];
        let hits = shoot(&mut bullets, &mut enemies, &mut rng);
        let goody = hits[0].goody.as_ref().expect("goody");
        assert_eq!(goody.kind, GoodyKind::KillPlayer);
        assert_eq!(goody.body.center(), enemies[0].body.center());
    }

    fn arb_body() -> impl Strategy<Value = Body> {
        (-50i32..50, -50i32..50, 0u32..4, 0u32..4).prop_map(|(x, y, w, h)| {
            body(x as f32, y as f32, w as f32 * 8.0, h as f32 * 8.0)
        })
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in arb_body(), b in arb_body()) {
            prop_assert_eq!(aabb_overlap(&a, &b), aabb_overlap(&b, &a));
        }

        #[test]
        fn prop_empty_boxes_never_collide(a in arb_body(), b in arb_body()) {
            if a.size.x == 0.0 || a.size.y == 0.0 {
                prop_assert!(!aabb_overlap(&a, &b));
                let mut same = b.clone();
                same.pos = a.pos;
                prop_assert!(!aabb_overlap(&a, &same));
            }
        }
    }
}
