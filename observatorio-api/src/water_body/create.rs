use std::ops::RangeInclusive;

use super::{Data, WaterBody};

pub const URL: &str = super::URL;

pub const NAME_LENGTH: RangeInclusive<usize> = 1..=255;
pub const DESCRIPTION_MAX_LENGTH: usize = 1000;

pub const LATITUDE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE: RangeInclusive<f64> = -180.0..=180.0;
pub const TEMPERATURE: RangeInclusive<f64> = -10.0..=50.0;
pub const PH: RangeInclusive<f64> = 0.0..=14.0;
pub const DISSOLVED_OXYGEN: RangeInclusive<f64> = 0.0..=20.0;

pub type Request = Data;
pub type Response = WaterBody;

impl Data {
    /// Checks the bounds that the type system does not encode.
    ///
    /// Returns the message describing the first violated constraint.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !NAME_LENGTH.contains(&self.name.chars().count()) {
            return Err("Name must have between 1 and 255 characters");
        }
        if self
            .description
            .as_ref()
            .is_some_and(|description| description.chars().count() > DESCRIPTION_MAX_LENGTH)
        {
            return Err("Description must have at most 1000 characters");
        }
        if !LATITUDE.contains(&self.latitude) {
            return Err("Latitude must be between -90 and 90");
        }
        if !LONGITUDE.contains(&self.longitude) {
            return Err("Longitude must be between -180 and 180");
        }
        if self.temperature.is_some_and(|value| !TEMPERATURE.contains(&value)) {
            return Err("Temperature must be between -10 and 50");
        }
        if self.ph.is_some_and(|value| !PH.contains(&value)) {
            return Err("pH must be between 0 and 14");
        }
        if self.dissolved_oxygen.is_some_and(|value| !DISSOLVED_OXYGEN.contains(&value)) {
            return Err("Dissolved oxygen must be between 0 and 20");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};
    use rstest::rstest;

    use super::*;

    fn request() -> Request {
        Faker.fake()
    }

    #[test]
    fn test_fake_is_valid() {
        for _ in 0..32 {
            assert_eq!(request().validate(), Ok(()));
        }
    }

    #[rstest]
    #[case(String::new())]
    #[case("a".repeat(256))]
    fn test_invalid_name(#[case] name: String) {
        assert!(Request { name, ..request() }.validate().is_err());
    }

    #[test]
    fn test_name_counts_characters() {
        let name = "í".repeat(255);
        assert_eq!(Request { name, ..request() }.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_description() {
        let description = Some("a".repeat(1001));
        assert!(Request { description, ..request() }.validate().is_err());
    }

    #[rstest]
    #[case(-90.1, 0.0)]
    #[case(90.1, 0.0)]
    #[case(0.0, -180.1)]
    #[case(0.0, 180.1)]
    #[case(f64::NAN, 0.0)]
    fn test_invalid_coordinates(#[case] latitude: f64, #[case] longitude: f64) {
        assert!(Request { latitude, longitude, ..request() }.validate().is_err());
    }

    #[rstest]
    #[case(-90.0, -180.0)]
    #[case(90.0, 180.0)]
    fn test_coordinate_bounds_are_inclusive(#[case] latitude: f64, #[case] longitude: f64) {
        assert_eq!(Request { latitude, longitude, ..request() }.validate(), Ok(()));
    }

    #[rstest]
    #[case(Some(-10.5), None, None)]
    #[case(Some(50.5), None, None)]
    #[case(None, Some(-0.1), None)]
    #[case(None, Some(14.1), None)]
    #[case(None, None, Some(20.1))]
    #[case(None, None, Some(-1.0))]
    fn test_invalid_measurements(
        #[case] temperature: Option<f64>,
        #[case] ph: Option<f64>,
        #[case] dissolved_oxygen: Option<f64>,
    ) {
        let request = Request {
            temperature: temperature.or(Some(20.0)),
            ph: ph.or(Some(7.0)),
            dissolved_oxygen: dissolved_oxygen.or(Some(8.0)),
            ..request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_missing_measurements_are_valid() {
        let request =
            Request { temperature: None, ph: None, dissolved_oxygen: None, ..request() };
        assert_eq!(request.validate(), Ok(()));
    }
}
