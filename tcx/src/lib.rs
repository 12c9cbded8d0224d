#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/tcx/0.1.0")]
//! Garmin Training Center XML (TCX) documents
//!
//! Typed bindings for the `TrainingCenterDatabase` v2 schema and the `ActivityExtension` v2
//! vendor extensions, built on `xml-bind`.  Loading and dumping a file gives back the same
//! document: unknown extensions are retained, `xsi:type` alternatives are re-emitted and the
//! namespace prefixes of the input are kept.
//!
//! ```
//! let doc = tcx::parse_str(r#"<?xml version="1.0" encoding="UTF-8"?>
//! <TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
//!   <Activities>
//!     <Activity Sport="Running">
//!       <Id>2014-12-26T10:00:39.000Z</Id>
//!       <Lap StartTime="2014-12-26T10:00:39.000Z">
//!         <TotalTimeSeconds>201.0</TotalTimeSeconds>
//!         <DistanceMeters>1000.0</DistanceMeters>
//!       </Lap>
//!     </Activity>
//!   </Activities>
//! </TrainingCenterDatabase>
//! "#).unwrap();
//!
//! let activity = &doc.root.activities()[0];
//! assert_eq!(activity.distance_meters(), 1000.0);
//! assert_eq!(tcx::units::pace_string(activity.average_speed(), tcx::units::PaceUnit::Kilometer).as_deref(), Some("3m21s/km"));
//! ```

pub mod activity;
pub mod course;
pub mod database;
pub mod enums;
pub mod extensions;
pub mod source;
pub mod units;
pub mod workout;

pub use crate::{
	activity::{
		Activity,
		Lap,
		Track,
		Trackpoint,
	},
	database::Database,
	extensions::{
		ActivityExtension,
		Extensions,
	},
	source::{
		AbstractSource,
		Application,
		Device,
	},
};

pub use xml_bind::{
	Diagnostic,
	Error,
	Result,
};

use std::path::Path;
use xml_bind::{
	parser::ParseOptions,
	schema::TypeDescriptor,
	Document,
	Node,
};

/// Default namespace of TCX documents
pub const TCX_NS: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";
/// Namespace of the `TPX` / `LX` extensions
pub const ACTIVITY_EXTENSION_NS: &str = "http://www.garmin.com/xmlschemas/ActivityExtension/v2";
/// User profile namespace
pub const USER_PROFILE_NS: &str = "http://www.garmin.com/xmlschemas/UserProfile/v2";
/// Profile extension namespace
pub const PROFILE_EXTENSION_NS: &str = "http://www.garmin.com/xmlschemas/ProfileExtension/v1";
/// Activity goals namespace
pub const ACTIVITY_GOALS_NS: &str = "http://www.garmin.com/xmlschemas/ActivityGoals/v1";
/// `xsi:schemaLocation` written by Garmin tools
pub const SCHEMA_LOCATION: &str = "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2 http://www.garmin.com/xmlschemas/TrainingCenterDatabasev2.xsd";

/// A TCX document
pub type TcxDocument = Document<Database>;

/// Load TCX file
pub fn load_file(path: impl AsRef<Path>) -> Result<TcxDocument> {
	load_file_with(path, ParseOptions::default())
}

/// Load TCX file with custom parse options
pub fn load_file_with(path: impl AsRef<Path>, options: ParseOptions) -> Result<TcxDocument> {
	let path = path.as_ref();
	log::debug!("loading {}", path.display());
	let doc = TcxDocument::load(path, options)?;
	for diagnostic in &doc.diagnostics {
		log::info!("{}: {}", path.display(), diagnostic);
	}
	Ok(doc)
}

/// Parse TCX document from a string
pub fn parse_str(xml: &str) -> Result<TcxDocument> {
	TcxDocument::from_str(xml)
}

/// Descriptors of all schema types
pub const TYPES: &[&TypeDescriptor] = &[
	<database::Database as Node>::DESCRIPTOR,
	<database::Folders as Node>::DESCRIPTOR,
	<database::History as Node>::DESCRIPTOR,
	<database::HistoryFolder as Node>::DESCRIPTOR,
	<database::MultiSportFolder as Node>::DESCRIPTOR,
	<database::Week as Node>::DESCRIPTOR,
	<database::ActivityReference as Node>::DESCRIPTOR,
	<database::WorkoutFolders as Node>::DESCRIPTOR,
	<database::WorkoutFolder as Node>::DESCRIPTOR,
	<database::CourseFolders as Node>::DESCRIPTOR,
	<database::CourseFolder as Node>::DESCRIPTOR,
	<database::NameKeyReference as Node>::DESCRIPTOR,
	<database::ActivityList as Node>::DESCRIPTOR,
	<database::WorkoutList as Node>::DESCRIPTOR,
	<database::CourseList as Node>::DESCRIPTOR,
	<activity::Activity as Node>::DESCRIPTOR,
	<activity::MultiSportSession as Node>::DESCRIPTOR,
	<activity::FirstSport as Node>::DESCRIPTOR,
	<activity::NextSport as Node>::DESCRIPTOR,
	<activity::Lap as Node>::DESCRIPTOR,
	<activity::Track as Node>::DESCRIPTOR,
	<activity::Trackpoint as Node>::DESCRIPTOR,
	<activity::Position as Node>::DESCRIPTOR,
	<activity::Training as Node>::DESCRIPTOR,
	<activity::QuickWorkout as Node>::DESCRIPTOR,
	<activity::Plan as Node>::DESCRIPTOR,
	<workout::HeartRateInBeatsPerMinute as Node>::DESCRIPTOR,
	<workout::HeartRateAsPercentOfMax as Node>::DESCRIPTOR,
	<workout::HeartRateValueBase as Node>::DESCRIPTOR,
	<workout::Workout as Node>::DESCRIPTOR,
	<workout::Step as Node>::DESCRIPTOR,
	<workout::Repeat as Node>::DESCRIPTOR,
	<workout::DurationBase as Node>::DESCRIPTOR,
	<workout::TimeDuration as Node>::DESCRIPTOR,
	<workout::DistanceDuration as Node>::DESCRIPTOR,
	<workout::HeartRateAbove as Node>::DESCRIPTOR,
	<workout::HeartRateBelow as Node>::DESCRIPTOR,
	<workout::CaloriesBurned as Node>::DESCRIPTOR,
	<workout::UserInitiated as Node>::DESCRIPTOR,
	<workout::TargetBase as Node>::DESCRIPTOR,
	<workout::SpeedTarget as Node>::DESCRIPTOR,
	<workout::HeartRateTarget as Node>::DESCRIPTOR,
	<workout::CadenceTarget as Node>::DESCRIPTOR,
	<workout::NoTarget as Node>::DESCRIPTOR,
	<workout::ZoneBase as Node>::DESCRIPTOR,
	<workout::PredefinedSpeedZone as Node>::DESCRIPTOR,
	<workout::CustomSpeedZone as Node>::DESCRIPTOR,
	<workout::PredefinedHeartRateZone as Node>::DESCRIPTOR,
	<workout::CustomHeartRateZone as Node>::DESCRIPTOR,
	<course::Course as Node>::DESCRIPTOR,
	<course::CourseLap as Node>::DESCRIPTOR,
	<course::CoursePoint as Node>::DESCRIPTOR,
	<source::Source as Node>::DESCRIPTOR,
	<source::Device as Node>::DESCRIPTOR,
	<source::Application as Node>::DESCRIPTOR,
	<source::Version as Node>::DESCRIPTOR,
	<source::Build as Node>::DESCRIPTOR,
	<extensions::ActivityTrackpointExtension as Node>::DESCRIPTOR,
	<extensions::ActivityLapExtension as Node>::DESCRIPTOR,
	&extensions::EXTENSIONS,
];
