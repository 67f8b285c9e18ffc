use metron::prelude::*;

#[test]
fn serialize_as_canonical_value() -> Result<(), serde_json::Error> {
    assert_eq!("1000.0", serde_json::to_string(&kilometers(1.0))?);
    assert_eq!("10800.0", serde_json::to_string(&hours(3.0))?);
    assert_eq!("[1,2]", serde_json::to_string(&[pixels(1), pixels(2)])?);
    Ok(())
}

#[test]
fn deserialize_canonical_value() -> Result<(), serde_json::Error> {
    let speed: Speed = serde_json::from_str("25.0")?;
    approx::assert_abs_diff_eq!(90.0, speed.in_kilometers_per_hour(), epsilon = 1e-9);
    let temperature: Temperature = serde_json::from_str("273.15")?;
    approx::assert_abs_diff_eq!(0.0, temperature.in_degrees_celsius(), epsilon = 1e-9);
    Ok(())
}
