//! Workouts, their steps and the polymorphic duration / target / zone families

use crate::{
	enums::{
		Intensity,
		Sport,
		SpeedType,
	},
	extensions::Extensions,
	source::AbstractSource,
};
use chrono::NaiveDate;
use xml_bind::Node;

/// Heart rate in beats per minute (`HeartRateInBeatsPerMinute_t`)
///
/// Laps and trackpoints use this type directly; as alternative of `HeartRateValue` it carries an
/// `xsi:type`.
#[derive(Node)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct HeartRateInBeatsPerMinute {
	/// Beats per minute
	pub value: u8,
}

/// Heart rate relative to the user's maximum
#[derive(Node)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct HeartRateAsPercentOfMax {
	/// Percent of maximum heart rate
	pub value: u8,
}

/// `HeartRateValue_t` without a registered `xsi:type`
#[derive(Node)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[xml_bind(name = "HeartRateValue_t")]
pub struct HeartRateValueBase {
	/// Raw value, unit unknown
	pub value: Option<u8>,
}

/// Heart rate in one of the supported units
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeartRateValue {
	#[xml_bind(fallback)]
	Unspecified(HeartRateValueBase),
	BeatsPerMinute(HeartRateInBeatsPerMinute),
	PercentOfMax(HeartRateAsPercentOfMax),
}

/// A planned workout
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Workout {
	#[xml_bind(attr)]
	pub sport: Option<Sport>,
	pub name: Option<String>,
	#[xml_bind(tag = "Step")]
	pub steps: Vec<AbstractStep>,
	pub scheduled_on: Vec<NaiveDate>,
	pub notes: Option<String>,
	pub creator: Option<AbstractSource>,
	pub extensions: Option<Extensions>,
}

/// Step of a workout: a single step or a repetition of steps
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub enum AbstractStep {
	#[xml_bind(fallback)]
	Step(Step),
	Repeat(Repeat),
}

impl AbstractStep {
	/// Id of the step
	pub fn step_id(&self) -> Option<u8> {
		match self {
			AbstractStep::Step(s) => s.step_id,
			AbstractStep::Repeat(r) => r.step_id,
		}
	}
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct Step {
	pub step_id: Option<u8>,
	pub name: Option<String>,
	pub duration: Option<Duration>,
	pub intensity: Option<Intensity>,
	pub target: Option<Target>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct Repeat {
	pub step_id: Option<u8>,
	pub repetitions: Option<u8>,
	#[xml_bind(tag = "Child")]
	pub children: Vec<AbstractStep>,
}

/// When a step ends
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub enum Duration {
	#[xml_bind(fallback)]
	Unspecified(DurationBase),
	Time(TimeDuration),
	Distance(DistanceDuration),
	HeartRateAbove(HeartRateAbove),
	HeartRateBelow(HeartRateBelow),
	CaloriesBurned(CaloriesBurned),
	UserInitiated(UserInitiated),
}

/// `Duration_t` without a registered `xsi:type`
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Duration_t")]
pub struct DurationBase {}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Time_t", discriminator)]
pub struct TimeDuration {
	pub seconds: u16,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Distance_t", discriminator)]
pub struct DistanceDuration {
	pub meters: u16,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct HeartRateAbove {
	pub heart_rate: Option<HeartRateValue>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct HeartRateBelow {
	pub heart_rate: Option<HeartRateValue>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct CaloriesBurned {
	pub calories: u16,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct UserInitiated {}

/// What a step aims for
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub enum Target {
	#[xml_bind(fallback)]
	Unspecified(TargetBase),
	Speed(SpeedTarget),
	HeartRate(HeartRateTarget),
	Cadence(CadenceTarget),
	None(NoTarget),
}

/// `Target_t` without a registered `xsi:type`
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Target_t")]
pub struct TargetBase {}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Speed_t", discriminator)]
pub struct SpeedTarget {
	pub speed_zone: Option<Zone>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "HeartRate_t", discriminator)]
pub struct HeartRateTarget {
	pub heart_rate_zone: Option<Zone>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Cadence_t", discriminator)]
pub struct CadenceTarget {
	pub low: f64,
	pub high: f64,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "None_t", discriminator)]
pub struct NoTarget {}

/// Speed or heart rate zone
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug)]
pub enum Zone {
	#[xml_bind(fallback)]
	Unspecified(ZoneBase),
	PredefinedSpeed(PredefinedSpeedZone),
	CustomSpeed(CustomSpeedZone),
	PredefinedHeartRate(PredefinedHeartRateZone),
	CustomHeartRate(CustomHeartRateZone),
}

/// `Zone_t` without a registered `xsi:type`
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(name = "Zone_t")]
pub struct ZoneBase {}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct PredefinedSpeedZone {
	pub number: u8,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct CustomSpeedZone {
	pub view_as: Option<SpeedType>,
	pub low_in_meters_per_second: f64,
	pub high_in_meters_per_second: f64,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct PredefinedHeartRateZone {
	pub number: u8,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
#[xml_bind(discriminator)]
pub struct CustomHeartRateZone {
	pub low: Option<HeartRateValue>,
	pub high: Option<HeartRateValue>,
}
