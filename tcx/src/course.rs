//! Courses: planned routes with laps, tracks and course points

use crate::{
	activity::{
		Position,
		Track,
	},
	enums::{
		CoursePointType,
		Intensity,
	},
	extensions::Extensions,
	source::AbstractSource,
	workout::HeartRateInBeatsPerMinute,
};
use chrono::{
	DateTime,
	Utc,
};
use xml_bind::Node;

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Course {
	pub name: Option<String>,
	#[xml_bind(tag = "Lap")]
	pub laps: Vec<CourseLap>,
	#[xml_bind(tag = "Track")]
	pub tracks: Vec<Track>,
	pub notes: Option<String>,
	#[xml_bind(tag = "CoursePoint")]
	pub course_points: Vec<CoursePoint>,
	pub creator: Option<AbstractSource>,
	pub extensions: Option<Extensions>,
}

#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CourseLap {
	pub total_time_seconds: Option<f64>,
	pub distance_meters: Option<f64>,
	pub begin_position: Option<Position>,
	pub begin_altitude_meters: Option<f64>,
	pub end_position: Option<Position>,
	pub end_altitude_meters: Option<f64>,
	pub average_heart_rate_bpm: Option<HeartRateInBeatsPerMinute>,
	pub maximum_heart_rate_bpm: Option<HeartRateInBeatsPerMinute>,
	pub intensity: Option<Intensity>,
	pub cadence: Option<u8>,
	pub extensions: Option<Extensions>,
}

/// Named point along a course (summit, water, turn)
#[allow(missing_docs)]
#[derive(Node)]
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CoursePoint {
	pub name: Option<String>,
	pub time: Option<DateTime<Utc>>,
	pub position: Option<Position>,
	pub altitude_meters: Option<f64>,
	pub point_type: Option<CoursePointType>,
	pub notes: Option<String>,
	pub extensions: Option<Extensions>,
}
