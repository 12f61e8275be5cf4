use std::f64::consts::PI;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::prelude::*;

fn dimension() -> impl Strategy<Value = Float> {
    0.0..1000.0_f64
}

fn arbitrary_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        dimension().prop_map(|r| Shape::from(Circle::new(r))),
        dimension().prop_map(|s| Shape::from(Triangle::new(s))),
        (dimension(), dimension()).prop_map(|(w, h)| Shape::from(Rectangle::new(w, h))),
    ]
}

fn arbitrary_non_circle() -> impl Strategy<Value = Shape> {
    arbitrary_shape().prop_filter("not a circle", |s| !s.is_circle())
}

/// Box filled to the brim with `shapes`.
fn full_box(shapes: &[Shape]) -> ShapeBox {
    let mut b = ShapeBox::new(shapes.len());
    for &shape in shapes {
        b.add_shape(shape).expect("box should have room");
    }
    b
}

/// Box with some shapes and an index that refers to one of them.
fn box_and_index() -> impl Strategy<Value = (ShapeBox, ShapeIndex)> {
    prop::collection::vec(arbitrary_shape(), 1..20).prop_flat_map(|shapes| {
        let len = shapes.len() as u32;
        (Just(full_box(&shapes)), (0..len).prop_map(ShapeIndex))
    })
}

proptest! {
    #[test]
    fn proptest_capacity_is_enforced(
        capacity in 0_usize..20,
        shapes in prop::collection::vec(arbitrary_shape(), 21),
    ) {
        let mut b = ShapeBox::new(capacity);
        for &shape in &shapes[..capacity] {
            prop_assert!(b.add_shape(shape).is_ok());
        }
        prop_assert_eq!(
            b.add_shape(shapes[capacity]),
            Err(BoxError::CapacityExceeded { capacity }),
        );
        prop_assert_eq!(b.len(), capacity);
        prop_assert_eq!(b.shapes(), &shapes[..capacity]);
    }

    #[test]
    fn proptest_get_does_not_mutate((b, i) in box_and_index()) {
        let before = b.clone();
        let shape = *b.get_by_index(i).unwrap();
        prop_assert_eq!(shape, before.shapes()[i.to_index()]);
        prop_assert_eq!(b, before);
    }

    #[test]
    fn proptest_extract_preserves_order((mut b, i) in box_and_index()) {
        let original = b.shapes().to_vec();
        let extracted = b.extract_by_index(i).unwrap();
        prop_assert_eq!(b.len(), original.len() - 1);

        let mut reinserted = b.shapes().to_vec();
        reinserted.insert(i.to_index(), extracted);
        prop_assert_eq!(reinserted, original);
    }

    #[test]
    fn proptest_replace_returns_prior(
        (mut b, i) in box_and_index(),
        new_shape in arbitrary_shape(),
    ) {
        let len = b.len();
        let prior = b.shapes()[i.to_index()];
        prop_assert_eq!(b.replace_by_index(i, new_shape), Ok(prior));
        prop_assert_eq!(b.len(), len);
        prop_assert_eq!(b.get_by_index(i), Ok(&new_shape));
    }

    #[test]
    fn proptest_out_of_range_leaves_box_unchanged(
        shapes in prop::collection::vec(arbitrary_shape(), 0..10),
        offset in 0_u32..5,
    ) {
        let mut b = full_box(&shapes);
        let before = b.clone();
        let i = ShapeIndex(shapes.len() as u32 + offset);
        prop_assert!(b.get_by_index(i).is_err());
        prop_assert!(b.extract_by_index(i).is_err());
        prop_assert!(b.replace_by_index(i, Circle::new(1.0)).is_err());
        prop_assert_eq!(b, before);
    }

    #[test]
    fn proptest_remove_circles_without_circles(
        shapes in prop::collection::vec(arbitrary_non_circle(), 0..10),
    ) {
        let mut b = full_box(&shapes);
        let before = b.clone();
        prop_assert_eq!(b.remove_all_circles(), Err(BoxError::NoCirclesPresent));
        prop_assert_eq!(b, before);
    }

    #[test]
    fn proptest_remove_circles_keeps_survivor_order(
        shapes in prop::collection::vec(arbitrary_shape(), 0..20),
    ) {
        let mut b = full_box(&shapes);
        let circle_count = shapes.iter().filter(|s| s.is_circle()).count();
        let survivors: Vec<Shape> = shapes.iter().copied().filter(|s| !s.is_circle()).collect();

        match circle_count {
            0 => prop_assert_eq!(b.remove_all_circles(), Err(BoxError::NoCirclesPresent)),
            n => prop_assert_eq!(b.remove_all_circles(), Ok(n)),
        }
        prop_assert_eq!(b.shapes(), &survivors[..]);
    }

    #[test]
    fn proptest_sums_match_shapes(shapes in prop::collection::vec(arbitrary_shape(), 0..20)) {
        let b = full_box(&shapes);
        let perimeter: Float = shapes.iter().map(Measure::perimeter).sum();
        let area: Float = shapes.iter().map(Measure::area).sum();
        prop_assert_eq!(b.sum_perimeter(), perimeter);
        prop_assert_eq!(b.sum_area(), area);
    }
}

#[test]
fn test_third_shape_exceeds_capacity() {
    let mut b = ShapeBox::new(2);
    assert_eq!(b.add_shape(Circle::new(1.0)), Ok(ShapeIndex(0)));
    assert_eq!(b.add_shape(Triangle::new(2.0)), Ok(ShapeIndex(1)));
    assert_eq!(
        b.add_shape(Circle::new(1.0)),
        Err(BoxError::CapacityExceeded { capacity: 2 }),
    );
    assert_eq!(b.len(), 2);
    assert_eq!(
        b.add_shape(Circle::new(1.0)).unwrap_err().to_string(),
        "could not add shape: box capacity of 2 is full",
    );
}

#[test]
fn test_sum_perimeter_of_circle_and_triangle() {
    let b = full_box(&[Shape::from(Circle::new(1.0)), Shape::from(Triangle::new(3.0))]);
    assert_approx_eq!(b.sum_perimeter(), 2.0 * PI + 9.0);
    assert_approx_eq!(b.sum_perimeter(), 15.283185307179586);
}

#[test]
fn test_sum_area_of_mixed_shapes() {
    let b = full_box(&[
        Shape::from(Circle::new(1.0)),
        Shape::from(Triangle::new(2.0)),
        Shape::from(Rectangle::new(3.0, 4.0)),
    ]);
    assert_approx_eq!(b.sum_area(), PI + Float::sqrt(3.0) + 12.0);
}

#[test]
fn test_remove_all_circles_leaves_triangle() {
    let mut b = full_box(&[
        Shape::from(Circle::new(2.0)),
        Shape::from(Circle::new(3.0)),
        Shape::from(Triangle::new(1.0)),
    ]);
    assert_eq!(b.remove_all_circles(), Ok(2));
    assert_eq!(b.shapes(), [Shape::from(Triangle::new(1.0))]);
    assert_eq!(b.remove_all_circles(), Err(BoxError::NoCirclesPresent));
    assert_eq!(
        BoxError::NoCirclesPresent.to_string(),
        "no circles in the box",
    );
}

#[test]
fn test_interleaved_circles_are_all_removed() {
    let mut b = full_box(&[
        Shape::from(Circle::new(1.0)),
        Shape::from(Circle::new(1.0)),
        Shape::from(Triangle::new(1.0)),
        Shape::from(Circle::new(1.0)),
        Shape::from(Rectangle::new(1.0, 1.0)),
        Shape::from(Circle::new(1.0)),
    ]);
    assert_eq!(b.remove_all_circles(), Ok(4));
    assert_eq!(b.to_string(), "[triangle(side=1), rectangle(1x1)]");
    assert_eq!(b.capacity(), 6);
    assert_eq!(b.remaining(), 4);
}
