//! End-to-end behavior of the public API.

use urithmetic::defaults::ROUND_TRIP_TOLERANCE;
use urithmetic::{
    Align, Anchor, Area, Component, Convert, ErrorKind, Length, Pos, ScalarValue, Size, Unit,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= ROUND_TRIP_TOLERANCE * b.abs().max(1.0)
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn ten_millimeters_is_one_centimeter() {
    let v = ScalarValue::from_number(10.0, Unit::validate("mm").unwrap()).unwrap();
    assert_eq!(v.to_number(Unit::Cm), 1.0);
}

#[test]
fn length_sum_in_points() {
    let a = Length::from_number(100.0, Unit::Pt).unwrap();
    let b = Length::from_number(50.0, Unit::Pt).unwrap();
    assert_eq!(a.sum(&b, None).unwrap().to_number(None), 150.0);
}

#[test]
fn put_size_halves_wide_target() {
    let container = Area::from_numbers(0.0, 0.0, 100.0, 100.0, Unit::Pt).unwrap();
    let target = Size::from_numbers(200.0, 100.0, Unit::Pt).unwrap();
    let fitted = container.put_size(&target, None).unwrap();
    assert_eq!(fitted.components(None), (100.0, 50.0));
}

#[test]
fn fit_size_centers_vertically() {
    let container = Area::from_numbers(0.0, 0.0, 100.0, 100.0, Unit::Pt).unwrap();
    let target = Size::from_numbers(200.0, 100.0, Unit::Pt).unwrap();
    let placed = container.fit_size(&target, Align::from_bits(0).unwrap(), None).unwrap();
    assert_eq!(placed.pos(None).components(None), (0.0, 25.0));
}

#[test]
fn fit_size_left_top_does_not_shift() {
    let container = Area::from_numbers(0.0, 0.0, 100.0, 100.0, Unit::Pt).unwrap();
    let target = Size::from_numbers(200.0, 100.0, Unit::Pt).unwrap();
    let placed = container.fit_size(&target, Align::LEFT | Align::TOP, None).unwrap();
    assert_eq!(placed.pos(None).components(None), (0.0, 0.0));
}

#[test]
fn unknown_unit_is_unsuited() {
    let err = Unit::validate("xx").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsuited);
    assert_eq!(err.to_string(), "Unit::validate: Unsuited unit object 'unit'");
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn composite_round_trip_through_every_unit() {
    let area = Area::from_numbers(12.0, 34.0, 56.0, 78.0, Unit::Mm).unwrap();
    for unit in Unit::ALL {
        let mut there_and_back = area.clone_to_unit(unit);
        there_and_back.morph_to_unit(Unit::Mm);
        let (l, t, w, h) = there_and_back.components(None);
        assert!(close(l, 12.0) && close(t, 34.0) && close(w, 56.0) && close(h, 78.0), "via {unit}");
    }
}

#[test]
fn put_size_never_exceeds_container() {
    let container = Area::from_numbers(0.0, 0.0, 80.0, 60.0, Unit::Mm).unwrap();
    let targets = [
        (200.0, 10.0),
        (10.0, 200.0),
        (80.0, 60.0),
        (160.0, 120.0),
        (1.0, 1.0),
        (79.0, 61.0),
    ];
    for (w, h) in targets {
        let target = Size::from_numbers(w, h, Unit::Mm).unwrap();
        let (fw, fh) = container.put_size(&target, None).unwrap().components(None);
        assert!(fw <= 80.0 + 1e-9 && fh <= 60.0 + 1e-9, "{w}x{h} became {fw}x{fh}");
        if w <= 80.0 && h <= 60.0 {
            assert_eq!((fw, fh), (w, h));
        } else {
            assert!(close(fw / fh, w / h), "aspect ratio of {w}x{h} lost");
            // the overflowing side matches the container exactly
            assert!(close(fw, 80.0) || close(fh, 60.0));
        }
    }
}

#[test]
fn put_size_across_units() {
    let container = Area::from_numbers(0.0, 0.0, 1.0, 1.0, Unit::In).unwrap();
    let target = Size::from_numbers(144.0, 72.0, Unit::Pt).unwrap();
    let (w, h) = container.put_size(&target, None).unwrap().components(None);
    assert!(close(w, 1.0) && close(h, 0.5));
}

#[test]
fn centering_default_on_both_axes() {
    let container = Area::from_numbers(10.0, 20.0, 100.0, 100.0, Unit::Pt).unwrap();
    let target = Size::from_numbers(40.0, 20.0, Unit::Pt).unwrap();
    let placed = container.fit_size(&target, Align::default(), None).unwrap();
    let gap = |near: Length, far: Length| far.difference(&near, None).unwrap().to_number(None);
    let gap_left = gap(container.left(None), placed.left(None));
    let gap_right = gap(placed.right(None).unwrap(), container.right(None).unwrap());
    let gap_top = gap(container.top(None), placed.top(None));
    let gap_bottom = gap(placed.bottom(None).unwrap(), container.bottom(None).unwrap());
    assert_eq!(gap_left, gap_right);
    assert_eq!(gap_top, gap_bottom);
}

#[test]
fn alignment_matrix() {
    let container = Area::from_numbers(0.0, 0.0, 100.0, 100.0, Unit::Pt).unwrap();
    let target = Size::from_numbers(20.0, 40.0, Unit::Pt).unwrap();
    let cases = [
        (Align::CENTER, (40.0, 30.0)),
        (Align::LEFT, (0.0, 30.0)),
        (Align::RIGHT, (80.0, 30.0)),
        (Align::TOP, (40.0, 0.0)),
        (Align::BOTTOM, (40.0, 60.0)),
        (Align::RIGHT | Align::BOTTOM, (80.0, 60.0)),
        (Align::LEFT | Align::BOTTOM, (0.0, 60.0)),
        (Align::LEFT | Align::RIGHT, (40.0, 30.0)),
        (Align::TOP | Align::BOTTOM | Align::RIGHT, (80.0, 30.0)),
    ];
    for (align, expected) in cases {
        let placed = container.fit_size(&target, align, None).unwrap();
        assert_eq!(placed.pos(None).components(None), expected, "{align:?}");
        assert_eq!(placed.size(None).components(None), (20.0, 40.0));
    }
}

#[test]
fn conflicting_flags_behave_like_none() {
    let both = Align::LEFT | Align::RIGHT | Align::TOP | Align::BOTTOM;
    assert_eq!(both.horizontal(), Anchor::Center);
    assert_eq!(both.vertical(), Anchor::Center);
}

#[test]
fn right_is_left_plus_width() {
    let area = Area::from_numbers(1.5, 2.0, 3.25, 4.0, Unit::Cm).unwrap();
    for unit in Unit::ALL {
        let right = area.left(unit).sum(&area.width(unit), None).unwrap();
        let derived = area.right(unit).unwrap();
        assert_eq!(right.to_number(None), derived.to_number(None), "in {unit}");
    }
}

#[test]
fn clone_to_unit_is_independent_all_the_way_down() {
    let a = Area::from_numbers(1.0, 2.0, 3.0, 4.0, Unit::In).unwrap();
    let mut b = a.clone_to_unit(Unit::Pt);
    assert_eq!(b.components(None), (72.0, 144.0, 216.0, 288.0));

    b.move_by(&Pos::from_numbers(1.0, 1.0, Unit::Pt).unwrap(), None).unwrap();
    b.morph_to_unit(Unit::Mm);

    assert_eq!(a.unit(), Unit::In);
    assert_eq!(a.components(None), (1.0, 2.0, 3.0, 4.0));
    assert_eq!(a.pos(None).unit(), Unit::In);
    assert_eq!(a.get(Component::Width, None).unit(), Unit::In);
}

#[test]
fn morph_keeps_nested_units_in_sync() {
    let mut a = Area::from_numbers(1.0, 2.0, 3.0, 4.0, Unit::Ft).unwrap();
    a.morph_to_unit(Unit::Dm);
    for component in Component::ALL {
        assert_eq!(a.get(component, None).unit(), Unit::Dm);
    }
    assert_eq!(a.pos(None).unit(), Unit::Dm);
    assert_eq!(a.size(None).unit(), Unit::Dm);
}

#[test]
fn magnitudes_stay_finite_through_arithmetic_and_conversion() {
    let big = Length::from_number(1e308, Unit::Pt).unwrap();
    assert_eq!(big.scaled(10.0).unwrap_err().kind(), ErrorKind::Unsuited);
    assert_eq!(big.sum(&big, None).unwrap_err().kind(), ErrorKind::Unsuited);

    assert!(Size::from_numbers(1e308, 1.0, Unit::Ft).is_err());
    let mut area = Area::from_numbers(0.0, 0.0, 1e305, 1e305, Unit::Ft).unwrap();
    for unit in Unit::ALL {
        area.morph_to_unit(unit);
        let (l, t, w, h) = area.components(None);
        assert!([l, t, w, h].iter().all(|n| n.is_finite()), "in {unit}");
    }
}

// =============================================================================
// Asymmetry between Length and Pos arithmetic
// =============================================================================

#[test]
fn length_sum_is_pure_pos_sum_mutates() {
    let a = Length::from_number(1.0, Unit::Pt).unwrap();
    let _ = a.sum(&a, None);
    assert_eq!(a.to_number(None), 1.0);

    let mut p = Pos::from_numbers(1.0, 1.0, Unit::Pt).unwrap();
    let q = p;
    p.sum(&q, None).unwrap();
    assert_eq!(p.components(None), (2.0, 2.0));
}

// =============================================================================
// Typed component lookup
// =============================================================================

#[test]
fn component_lookup_by_name() {
    let size = Size::from_numbers(3.0, 4.0, Unit::Pi).unwrap();
    let width: Component = "width".parse().unwrap();
    assert_eq!(size.get(width, Unit::Pt).unwrap().to_number(None), 36.0);

    let left: Component = "left".parse().unwrap();
    assert_eq!(size.get(left, None).unwrap_err().kind(), ErrorKind::Undefined);
    assert_eq!("right".parse::<Component>().unwrap_err().kind(), ErrorKind::Undefined);
}
