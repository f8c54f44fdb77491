use image::{GrayImage, Luma, Rgb, RgbImage};
use rand::{SeedableRng, rngs::StdRng};

use super::*;

fn group() -> Vec<Frame> {
    (0..4u8)
        .map(|i| {
            Frame::Rgb(RgbImage::from_fn(5, 3, |x, y| {
                Rgb([x as u8 * 10 + i, y as u8, 200])
            }))
        })
        .collect()
}

#[test]
fn low_draw_mirrors_every_frame() {
    let input = group();
    let out = HorizontalFlip::default().apply_with_draw(0.1, input.clone());
    assert_eq!(out.len(), 4);
    for (a, b) in input.iter().zip(&out) {
        assert_eq!(*b, a.flip_horizontal());
    }
}

#[test]
fn high_draw_returns_group_unchanged() {
    let input = group();
    let out = HorizontalFlip::default().apply_with_draw(0.9, input.clone());
    assert_eq!(out, input);
    let edge = HorizontalFlip::default().apply_with_draw(FLIP_PROBABILITY, input.clone());
    assert_eq!(edge, input);
}

#[test]
fn flow_mode_inverts_even_frames_after_flip() {
    let row = GrayImage::from_fn(2, 1, |x, _| Luma([if x == 0 { 10 } else { 90 }]));
    let input = vec![Frame::Gray(row.clone()), Frame::Gray(row.clone()), Frame::Gray(row)];
    let out = HorizontalFlip::new(true).apply_with_draw(0.0, input);
    assert_eq!(out[0].sample(0, 0, 0), 255 - 90);
    assert_eq!(out[1].sample(0, 0, 0), 90);
    assert_eq!(out[2].sample(0, 0, 0), 255 - 90);
}

#[test]
fn flow_mode_without_flip_keeps_values() {
    let input = group();
    let out = HorizontalFlip::new(true).apply_with_draw(0.7, input.clone());
    assert_eq!(out, input);
}

#[test]
fn seeded_draw_applies_one_decision_to_the_group() {
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..10 {
        let input = group();
        let out = HorizontalFlip::default().apply(&mut rng, input.clone());
        let all_flipped = input.iter().zip(&out).all(|(a, b)| *b == a.flip_horizontal());
        let none_flipped = out == input;
        assert!(all_flipped ^ none_flipped);
    }
}
