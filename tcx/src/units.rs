//! Unit conversions and display strings for distances, speeds and paces
//!
//! Distances are meters and speeds meters per second, as stored in TCX files.  The `*_string`
//! helpers return `None` for values that aren't positive.

/// Meters to feet
pub fn feet(meters: f64) -> f64 {
	meters * 3.28084
}

/// Meters to statute miles
pub fn miles(meters: f64) -> f64 {
	meters * 0.000_621_37
}

/// Meters to yards
pub fn yards(meters: f64) -> f64 {
	meters * 1.09361
}

/// Meters to kilometers
pub fn kilometers(meters: f64) -> f64 {
	meters / 1000.0
}

/// Meters per second to kilometers per hour
pub fn kilometers_per_hour(speed: f64) -> f64 {
	speed * 3.6
}

/// Meters per second to miles per hour
pub fn miles_per_hour(speed: f64) -> f64 {
	speed * 2.23694
}

fn positive(value: f64) -> Option<f64> {
	if value > 0.0 && value.is_finite() {
		Some(value)
	} else {
		None
	}
}

/// Round to `digits` decimals and print without trailing zeros
fn shortest(value: f64, digits: i32) -> String {
	let scale = 10f64.powi(digits);
	let rounded = (value * scale).round() / scale;
	// `Display` of f64 prints the shortest representation, and no fraction for whole numbers
	format!("{}", rounded)
}

/// `"3.11mi"`
pub fn miles_string(meters: f64) -> Option<String> {
	positive(meters).map(|m| format!("{}mi", shortest(miles(m), 2)))
}

/// `"1093.6yd"`
pub fn yards_string(meters: f64) -> Option<String> {
	positive(meters).map(|m| format!("{}yd", shortest(yards(m), 1)))
}

/// `"1000m"`
pub fn meters_string(meters: f64) -> Option<String> {
	positive(meters).map(|m| format!("{}m", m.trunc()))
}

/// `"5.01km"`
pub fn kilometers_string(meters: f64) -> Option<String> {
	positive(meters).map(|m| format!("{}km", shortest(kilometers(m), 2)))
}

/// Default distance display (kilometers)
pub fn distance_string(meters: f64) -> Option<String> {
	kilometers_string(meters)
}

/// `"17.9km/h"`
pub fn kilometers_per_hour_string(speed: f64) -> Option<String> {
	positive(speed).map(|s| format!("{:.1}km/h", kilometers_per_hour(s)))
}

/// `"11.1mph"`
pub fn miles_per_hour_string(speed: f64) -> Option<String> {
	positive(speed).map(|s| format!("{:.1}mph", miles_per_hour(s)))
}

/// Default speed display (kilometers per hour)
pub fn speed_string(speed: f64) -> Option<String> {
	kilometers_per_hour_string(speed)
}

/// Distance a pace refers to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaceUnit {
	/// Time per mile
	Mile,
	/// Time per kilometer
	Kilometer,
	/// Time per 100 yards (swimming)
	HundredYards,
	/// Time per 100 meters (swimming)
	HundredMeters,
}

impl PaceUnit {
	/// Length of the unit in meters
	pub fn meters(self) -> f64 {
		match self {
			PaceUnit::Mile => 1609.344,
			PaceUnit::Kilometer => 1000.0,
			PaceUnit::HundredYards => 91.44,
			PaceUnit::HundredMeters => 100.0,
		}
	}

	/// Suffix after the slash
	pub fn suffix(self) -> &'static str {
		match self {
			PaceUnit::Mile => "mi",
			PaceUnit::Kilometer => "km",
			PaceUnit::HundredYards => "100yd",
			PaceUnit::HundredMeters => "100m",
		}
	}
}

/// Seconds needed for one unit at `speed` meters per second
pub fn pace_seconds(speed: f64, unit: PaceUnit) -> Option<f64> {
	positive(speed).map(|s| unit.meters() / s)
}

/// `"3m21s/km"`; seconds are rounded and always two digits
pub fn pace_string(speed: f64, unit: PaceUnit) -> Option<String> {
	let total = pace_seconds(speed, unit)?;
	let mut minutes = (total / 60.0).floor() as u64;
	let mut seconds = (total - minutes as f64 * 60.0).round() as u64;
	if seconds == 60 {
		minutes += 1;
		seconds = 0;
	}
	Some(format!("{}m{:02}s/{}", minutes, seconds, unit.suffix()))
}
