//! Property tests for geometry and movement rules

use proptest::prelude::*;

use farmer_harvest::clamp;
use farmer_harvest::consts::{FARMER_SIZE, HEIGHT, WIDTH};
use farmer_harvest::sim::{Farmer, Rect, Scarecrow, overlaps};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0.0f32..WIDTH, 0.0f32..HEIGHT, 1.0f32..100.0, 1.0f32..100.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[test]
    fn nonzero_rect_overlaps_itself(a in rect_strategy()) {
        prop_assert!(overlaps(&a, &a));
    }

    #[test]
    fn clamp_stays_in_range(v in -1e6f32..1e6, lo in -1e3f32..0.0, hi in 0.0f32..1e3) {
        let c = clamp(v, lo, hi);
        prop_assert!(c >= lo && c <= hi);
        if v >= lo && v <= hi {
            prop_assert_eq!(c, v);
        }
    }

    #[test]
    fn farmer_stays_in_bounds(
        x in 0.0f32..(WIDTH - FARMER_SIZE),
        y in 0.0f32..(HEIGHT - FARMER_SIZE),
        dx in -1i8..=1,
        dy in -1i8..=1,
        dt in 0.0f32..0.05,
    ) {
        let mut farmer = Farmer::new(x, y);
        farmer.set_heading(dx, dy);
        farmer.advance(dt, &[]);
        prop_assert!(farmer.rect.pos.x >= 0.0);
        prop_assert!(farmer.rect.pos.y >= 0.0);
        prop_assert!(farmer.rect.right() <= WIDTH);
        prop_assert!(farmer.rect.bottom() <= HEIGHT);
    }

    #[test]
    fn obstacle_rejection_is_all_or_nothing(
        x in 0.0f32..(WIDTH - FARMER_SIZE),
        y in 0.0f32..(HEIGHT - FARMER_SIZE),
        ox in 0.0f32..(WIDTH - 26.0),
        oy in 0.0f32..(HEIGHT - 46.0),
        dx in -1i8..=1,
        dy in -1i8..=1,
        dt in 0.0f32..0.05,
    ) {
        let obstacle = Scarecrow::new(ox, oy);
        let mut farmer = Farmer::new(x, y);
        prop_assume!(!overlaps(&farmer.rect, &obstacle.rect));

        let before = farmer.rect.pos;
        farmer.set_heading(dx, dy);
        farmer.advance(dt, std::slice::from_ref(&obstacle));

        // Never ends a frame inside an obstacle
        prop_assert!(!overlaps(&farmer.rect, &obstacle.rect));

        // Replay the tentative move: blocked means fully reverted,
        // clear means fully applied
        let mut tentative = Rect::new(before.x, before.y, FARMER_SIZE, FARMER_SIZE);
        tentative.pos += farmer.vel * dt;
        tentative.clamp_to(WIDTH, HEIGHT);
        if overlaps(&tentative, &obstacle.rect) {
            prop_assert_eq!(farmer.rect.pos, before);
        } else {
            prop_assert_eq!(farmer.rect.pos, tentative.pos);
        }
    }
}
