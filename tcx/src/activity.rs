//! Recorded activities: laps, tracks and trackpoints
//!
//! Besides the bound properties, `Activity` and `Lap` provide aggregates over their laps and
//! lap extensions.

use crate::{
	enums::{
		CadenceSensorType,
		Intensity,
		SensorState,
		Sport,
		TrainingType,
		TriggerMethod,
	},
	extensions::{
		ActivityExtensions,
		ActivityLapExtension,
		ActivityTrackpointExtension,
		Extensions,
	},
	source::AbstractSource,
	workout::HeartRateInBeatsPerMinute,
};
use chrono::{
	DateTime,
	Utc,
};
use xml_bind::Node;

/// A recorded activity
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub struct Activity {
	#[xml_bind(attr)]
	pub sport: Option<Sport>,
	pub id: DateTime<Utc>,
	#[xml_bind(tag = "Lap")]
	pub laps: Vec<Lap>,
	pub notes: Option<String>,
	pub training: Option<Training>,
	pub creator: Option<AbstractSource>,
	pub extensions: Option<Extensions>,
}

impl Activity {
	/// Start of the first lap
	pub fn start_time(&self) -> Option<DateTime<Utc>> {
		self.laps.first().and_then(|lap| lap.start_time)
	}

	/// End of the last lap
	pub fn end_time(&self) -> Option<DateTime<Utc>> {
		self.laps.last().and_then(Lap::end_time)
	}

	/// Sum of the lap durations in seconds
	pub fn total_time_seconds(&self) -> f64 {
		self.laps.iter().filter_map(|lap| lap.total_time_seconds).sum()
	}

	/// Sum of the lap distances in meters
	pub fn distance_meters(&self) -> f64 {
		self.laps.iter().filter_map(|lap| lap.distance_meters).sum()
	}

	/// Highest lap maximum speed in meters per second
	pub fn maximum_speed(&self) -> Option<f64> {
		self.laps.iter().filter_map(|lap| lap.maximum_speed).fold(None, |max, speed| match max {
			Some(max) if max >= speed => Some(max),
			_ => Some(speed),
		})
	}

	/// Sum of the lap calories
	pub fn calories(&self) -> u32 {
		self.laps.iter().filter_map(|lap| lap.calories).map(u32::from).sum()
	}

	/// Average heart rate, weighting each lap's average by its number of tracks
	///
	/// Laps without tracks or without an average heart rate don't contribute; their tracks still
	/// count towards the total, so the result is `0.0` when no lap has both.
	pub fn average_heart_rate_bpm(&self) -> f64 {
		let total_tracks: usize = self.laps.iter().map(|lap| lap.tracks.len()).sum();
		if total_tracks == 0 {
			return 0.0;
		}
		self.laps
			.iter()
			.filter(|lap| !lap.tracks.is_empty())
			.filter_map(|lap| {
				let bpm = lap.average_heart_rate_bpm?.value;
				Some(lap.tracks.len() as f64 / total_tracks as f64 * f64::from(bpm))
			})
			.sum()
	}

	/// Highest lap maximum heart rate
	pub fn maximum_heart_rate_bpm(&self) -> Option<u8> {
		self.laps.iter().filter_map(|lap| lap.maximum_heart_rate_bpm).map(|hr| hr.value).max()
	}

	/// Overall speed in meters per second; `0.0` without recorded time
	pub fn average_speed(&self) -> f64 {
		let seconds = self.total_time_seconds();
		if seconds == 0.0 {
			return 0.0;
		}
		self.distance_meters() / seconds
	}

	/// Highest bike cadence of the lap extensions
	pub fn max_bike_cadence(&self) -> Option<u8> {
		self.laps.iter().filter_map(Lap::max_bike_cadence).max()
	}

	/// Highest run cadence of the lap extensions
	pub fn max_run_cadence(&self) -> Option<u8> {
		self.laps.iter().filter_map(Lap::max_run_cadence).max()
	}

	/// Sum of steps of the lap extensions
	pub fn steps(&self) -> u32 {
		self.laps.iter().filter_map(Lap::steps).map(u32::from).sum()
	}

	/// Highest power of the lap extensions
	pub fn max_watts(&self) -> Option<u16> {
		self.laps.iter().filter_map(Lap::max_watts).max()
	}

	/// All trackpoints of all laps in order
	pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
		self.laps.iter().flat_map(|lap| lap.trackpoints())
	}
}

/// Session of several activities (triathlon, duathlon)
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub struct MultiSportSession {
	pub id: DateTime<Utc>,
	pub first_sport: Option<FirstSport>,
	#[xml_bind(tag = "NextSport")]
	pub next_sports: Vec<NextSport>,
	pub notes: Option<String>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub struct FirstSport {
	pub activity: Option<Activity>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub struct NextSport {
	pub transition: Option<Lap>,
	pub activity: Option<Activity>,
}

/// A lap of an activity
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "ActivityLap_t")]
pub struct Lap {
	#[xml_bind(attr)]
	pub start_time: Option<DateTime<Utc>>,
	pub total_time_seconds: Option<f64>,
	pub distance_meters: Option<f64>,
	pub maximum_speed: Option<f64>,
	pub calories: Option<u16>,
	pub average_heart_rate_bpm: Option<HeartRateInBeatsPerMinute>,
	pub maximum_heart_rate_bpm: Option<HeartRateInBeatsPerMinute>,
	pub intensity: Option<Intensity>,
	pub cadence: Option<u8>,
	pub trigger_method: Option<TriggerMethod>,
	#[xml_bind(tag = "Track")]
	pub tracks: Vec<Track>,
	pub notes: Option<String>,
	pub extensions: Option<Extensions>,
}

impl Lap {
	/// Start time plus duration
	pub fn end_time(&self) -> Option<DateTime<Utc>> {
		let start = self.start_time?;
		let millis = (self.total_time_seconds? * 1000.0).round();
		// out of range durations have no end time
		if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
			return None;
		}
		start.checked_add_signed(chrono::Duration::try_milliseconds(millis as i64)?)
	}

	/// `LX` extension of the lap
	pub fn lx(&self) -> Option<&ActivityLapExtension> {
		self.extensions.lx()
	}

	/// `TPX` extension of the lap, written by some devices instead of per trackpoint
	pub fn tpx(&self) -> Option<&ActivityTrackpointExtension> {
		self.extensions.tpx()
	}

	#[allow(missing_docs)]
	pub fn avg_speed(&self) -> Option<f64> {
		self.lx()?.avg_speed
	}

	#[allow(missing_docs)]
	pub fn max_bike_cadence(&self) -> Option<u8> {
		self.lx()?.max_bike_cadence
	}

	#[allow(missing_docs)]
	pub fn avg_run_cadence(&self) -> Option<u8> {
		self.lx()?.avg_run_cadence
	}

	#[allow(missing_docs)]
	pub fn max_run_cadence(&self) -> Option<u8> {
		self.lx()?.max_run_cadence
	}

	#[allow(missing_docs)]
	pub fn steps(&self) -> Option<u16> {
		self.lx()?.steps
	}

	#[allow(missing_docs)]
	pub fn avg_watts(&self) -> Option<u16> {
		self.lx()?.avg_watts
	}

	#[allow(missing_docs)]
	pub fn max_watts(&self) -> Option<u16> {
		self.lx()?.max_watts
	}

	#[allow(missing_docs)]
	pub fn speed(&self) -> Option<f64> {
		self.tpx()?.speed
	}

	#[allow(missing_docs)]
	pub fn run_cadence(&self) -> Option<u8> {
		self.tpx()?.run_cadence
	}

	#[allow(missing_docs)]
	pub fn watts(&self) -> Option<u16> {
		self.tpx()?.watts
	}

	#[allow(missing_docs)]
	pub fn cadence_sensor(&self) -> Option<CadenceSensorType> {
		self.tpx()?.cadence_sensor
	}

	/// All trackpoints of all tracks in order
	pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
		self.tracks.iter().flat_map(|track| track.trackpoints.iter())
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Track {
	#[xml_bind(tag = "Trackpoint")]
	pub trackpoints: Vec<Trackpoint>,
}

/// A single recorded sample
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Trackpoint {
	pub time: Option<DateTime<Utc>>,
	pub position: Option<Position>,
	pub altitude_meters: Option<f64>,
	pub distance_meters: Option<f64>,
	pub heart_rate_bpm: Option<HeartRateInBeatsPerMinute>,
	pub cadence: Option<u8>,
	pub sensor_state: Option<SensorState>,
	pub extensions: Option<Extensions>,
}

impl Trackpoint {
	/// `TPX` extension of the trackpoint
	pub fn tpx(&self) -> Option<&ActivityTrackpointExtension> {
		self.extensions.tpx()
	}

	/// Speed from the `TPX` extension in meters per second
	pub fn speed(&self) -> Option<f64> {
		self.tpx()?.speed
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Position {
	pub latitude_degrees: f64,
	pub longitude_degrees: f64,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Training {
	#[xml_bind(attr)]
	pub virtual_partner: Option<bool>,
	#[xml_bind(tag = "QuickWorkoutResults")]
	pub quick_workout_results: Option<QuickWorkout>,
	pub plan: Option<Plan>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct QuickWorkout {
	pub total_time_seconds: f64,
	pub distance_meters: f64,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Plan {
	#[xml_bind(attr, tag = "Type")]
	pub plan_type: Option<TrainingType>,
	#[xml_bind(attr)]
	pub interval_workout: Option<bool>,
	pub name: Option<String>,
	pub extensions: Option<Extensions>,
}

#[cfg(test)]
mod test {
	use super::*;
	use chrono::TimeZone;

	fn lap(start: i64, seconds: f64, meters: f64, tracks: usize, avg_hr: Option<u8>) -> Lap {
		Lap {
			start_time: Some(Utc.timestamp_opt(start, 0).unwrap()),
			total_time_seconds: Some(seconds),
			distance_meters: Some(meters),
			average_heart_rate_bpm: avg_hr.map(|value| HeartRateInBeatsPerMinute { value }),
			tracks: vec![Track::default(); tracks],
			..Lap::default()
		}
	}

	fn activity(laps: Vec<Lap>) -> Activity {
		Activity {
			sport: Some(Sport::Running),
			id: Utc.timestamp_opt(1_419_588_039, 0).unwrap(),
			laps,
			notes: None,
			training: None,
			creator: None,
			extensions: None,
		}
	}

	#[test]
	fn sums_and_bounds() {
		let a = activity(vec![lap(1_419_588_039, 201.0, 1000.0, 1, Some(167)), lap(1_419_588_240, 199.5, 1000.0, 1, None)]);
		assert_eq!(a.total_time_seconds(), 400.5);
		assert_eq!(a.distance_meters(), 2000.0);
		assert_eq!(a.start_time(), Some(Utc.timestamp_opt(1_419_588_039, 0).unwrap()));
		assert_eq!(a.end_time(), Some(Utc.timestamp_opt(1_419_588_439, 500_000_000).unwrap()));
		assert_eq!(a.maximum_speed(), None);
		assert_eq!(a.calories(), 0);
	}

	#[test]
	fn end_time_out_of_range() {
		let mut l = lap(1_419_588_039, 1e300, 1000.0, 0, None);
		assert_eq!(l.end_time(), None);
		l.total_time_seconds = Some(f64::NAN);
		assert_eq!(l.end_time(), None);
		l.total_time_seconds = Some(-1e15);
		assert_eq!(l.end_time(), None);
		assert_eq!(activity(vec![l]).end_time(), None);
	}

	#[test]
	fn heart_rate_weighted_by_track_count() {
		// three tracks in the first lap, one in the second
		let a = activity(vec![lap(0, 60.0, 100.0, 3, Some(160)), lap(60, 60.0, 100.0, 1, Some(120))]);
		assert_eq!(a.average_heart_rate_bpm(), 150.0);

		// lap without heart rate still counts towards the total
		let a = activity(vec![lap(0, 60.0, 100.0, 1, Some(160)), lap(60, 60.0, 100.0, 1, None)]);
		assert_eq!(a.average_heart_rate_bpm(), 80.0);

		let a = activity(vec![lap(0, 60.0, 100.0, 0, Some(160))]);
		assert_eq!(a.average_heart_rate_bpm(), 0.0);
	}

	#[test]
	fn average_speed_without_time() {
		assert_eq!(activity(Vec::new()).average_speed(), 0.0);
		let a = activity(vec![lap(0, 200.0, 1000.0, 0, None)]);
		assert_eq!(a.average_speed(), 5.0);
	}

	#[test]
	fn lap_extension_accessors() {
		let mut extensions = Extensions::new();
		extensions.push(crate::ActivityExtension::Lx(ActivityLapExtension {
			max_bike_cadence: Some(92),
			steps: Some(300),
			max_watts: Some(250),
			..Default::default()
		}));
		let mut first = lap(0, 60.0, 100.0, 0, None);
		first.extensions = Some(extensions);
		let a = activity(vec![first, lap(60, 60.0, 100.0, 0, None)]);
		assert_eq!(a.max_bike_cadence(), Some(92));
		assert_eq!(a.max_run_cadence(), None);
		assert_eq!(a.steps(), 300);
		assert_eq!(a.max_watts(), Some(250));
		assert_eq!(a.laps[1].speed(), None);
	}
}
