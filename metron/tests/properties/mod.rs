use metron::prelude::*;
use rand::Rng;

const N: usize = 10000;

macro_rules! assert_round_trip {
    ($rng:expr, $($from:ident => $to:ident),* $(,)?) => {
        $(
            let raw = $rng.random_range(-1e6..1e6);
            approx::assert_relative_eq!(
                raw,
                $from(raw).$to(),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
        )*
    };
}

#[test]
fn round_trip_every_unit() {
    let mut rng = rand::rng();
    (0..N).for_each(|_| {
        assert_round_trip!(
            rng,
            meters => in_meters,
            millimeters => in_millimeters,
            centimeters => in_centimeters,
            kilometers => in_kilometers,
            inches => in_inches,
            feet => in_feet,
            yards => in_yards,
            miles => in_miles,
            square_meters => in_square_meters,
            square_kilometers => in_square_kilometers,
            square_feet => in_square_feet,
            hectares => in_hectares,
            acres => in_acres,
            seconds => in_seconds,
            milliseconds => in_milliseconds,
            minutes => in_minutes,
            hours => in_hours,
            days => in_days,
            weeks => in_weeks,
            radians => in_radians,
            degrees => in_degrees,
            turns => in_turns,
            arc_minutes => in_arc_minutes,
            arc_seconds => in_arc_seconds,
            kelvins => in_kelvins,
            degrees_celsius => in_degrees_celsius,
            degrees_fahrenheit => in_degrees_fahrenheit,
            meters_per_second => in_meters_per_second,
            kilometers_per_hour => in_kilometers_per_hour,
            miles_per_hour => in_miles_per_hour,
            feet_per_second => in_feet_per_second,
            meters_per_second_squared => in_meters_per_second_squared,
            feet_per_second_squared => in_feet_per_second_squared,
            gees => in_gees,
            hertz => in_hertz,
            kilohertz => in_kilohertz,
            megahertz => in_megahertz,
            revolutions_per_minute => in_revolutions_per_minute,
            pixels_per_meter => in_pixels_per_meter,
            pixels_per_inch => in_pixels_per_inch,
        );
    });
}

#[test]
fn cross_unit_consistency() {
    let mut rng = rand::rng();
    (0..N).for_each(|_| {
        let x = rng.random_range(-1e6..1e6);
        approx::assert_relative_eq!(x * 0.3048, feet(x).in_meters(), max_relative = 1e-12);
        approx::assert_relative_eq!(x * 12.0, feet(x).in_inches(), max_relative = 1e-12);
        approx::assert_relative_eq!(x * 60.0, hours(x).in_minutes(), max_relative = 1e-12);
        approx::assert_relative_eq!(x * 360.0, turns(x).in_degrees(), max_relative = 1e-12);
        approx::assert_relative_eq!(
            x * 1.609344,
            miles_per_hour(x).in_kilometers_per_hour(),
            max_relative = 1e-12
        );
        approx::assert_abs_diff_eq!(
            x * 9.0 / 5.0 + 32.0,
            degrees_celsius(x).in_degrees_fahrenheit(),
            epsilon = 1e-6
        );
    });
}

#[test]
fn additive_identity_and_inverse() {
    let mut rng = rand::rng();
    (0..N).for_each(|_| {
        let a = meters(rng.random_range(-1e6..1e6));
        let b = meters(rng.random_range(-1e6..1e6));
        assert_eq!(a, a + Length::zero());
        assert_eq!(Length::zero(), a - a);
        assert_eq!(a + b, b + a);
        assert_eq!(Length::zero(), a + -a);
    });
}

#[test]
fn ordering_is_total_without_nan() {
    let mut rng = rand::rng();
    (0..N).for_each(|_| {
        let a = seconds(rng.random_range(-1e3..1e3));
        let b = seconds(rng.random_range(-1e3..1e3));
        assert_eq!(1, [a < b, a == b, a > b].iter().filter(|&&x| x).count());
        assert_eq!(a.compare(&b), b.compare(&a).reverse());
    });
}

#[test]
fn rate_inversion() {
    let mut rng = rand::rng();
    (0..N).for_each(|_| {
        let distance = kilometers(rng.random_range(1e-3..1e3));
        let time = hours(rng.random_range(1e-3..1e3));
        let speed = distance.per(time);
        approx::assert_relative_eq!(
            time.value(),
            speed.at_inverse(distance).value(),
            max_relative = 1e-12
        );
        approx::assert_relative_eq!(
            time.value(),
            speed.inverse().at(distance).value(),
            max_relative = 1e-12
        );
        approx::assert_relative_eq!(
            distance.value(),
            speed.at(time).value(),
            max_relative = 1e-12
        );
    });
}
